//! rust_extremes — non-stationary extreme-value models for event attribution.
//!
//! Purpose
//! -------
//! Provide the statistical core used by climate-event attribution pipelines:
//! generalized extreme-value (GEV) laws whose location, scale, and shape may
//! depend on a forcing covariate through link functions, fitted by maximum
//! likelihood or explored by Metropolis sampling, plus the goodness-of-fit
//! machinery needed to check a fitted law against data.
//!
//! Key behaviors
//! -------------
//! - `extremes` hosts the domain stack: link functions, the validated
//!   covariate series, parameter descriptors, the stationary GEV backend,
//!   the non-stationary maximum-law engine, and the minimum-oriented
//!   [`GevMin`](extremes::GevMin) model that downstream attribution code
//!   instantiates.
//! - `optimization` hosts the generic log-likelihood maximizer (argmin
//!   L-BFGS with finite-difference gradients) that `extremes` fits through.
//! - `statistical_tests` hosts the one-sample Kolmogorov–Smirnov test used
//!   by [`GevMin::kstest`](extremes::GevMin::kstest).
//!
//! Conventions
//! -----------
//! - All vectors and matrices are `ndarray` types; observations and
//!   covariates are `Array1<f64>`, Bayesian draw matrices are `Array2<f64>`.
//! - Each subtree owns its error enum and result alias (`NsResult`,
//!   `OptResult`, `KsResult`); fallible operations return `Result` and never
//!   panic on user-facing invalid inputs.
//! - This crate performs no I/O and no logging; reporting is the caller's
//!   responsibility.

pub mod extremes;
pub mod optimization;
pub mod statistical_tests;
