//! extremes — non-stationary generalized extreme value (GEV) models.
//!
//! Purpose
//! -------
//! Model block extremes whose distribution drifts with an external
//! covariate, the workhorse of event-attribution pipelines: each GEV
//! parameter (location, scale, shape) is a link-transformed function of
//! the covariate, coefficients are estimated by maximum likelihood or
//! sampled from a posterior, and fitted laws can be frozen and queried at
//! arbitrary times.
//!
//! Key behaviors
//! -------------
//! - [`NsGevModel`] is the maximum-oriented engine: parameter specs,
//!   covariate interpolation, MLE through the crate's `loglik_optimizer`,
//!   random-walk Metropolis draws, and pointwise distribution queries.
//! - [`GevMin`] adapts the engine to block minima by the reflection
//!   `Y_min = −Y_max`, reporting parameters in the minimum convention and
//!   swapping tails and support endpoints accordingly.
//! - [`Gev`] is the stationary law underneath both: closed-form CDF,
//!   quantiles, density, moments, support endpoints, and inverse-CDF
//!   sampling, with a dedicated Gumbel branch for near-zero shapes.
//! - [`Prior`] and [`metropolis`](mcmc::metropolis) provide the Bayesian
//!   layer; `kstest` on [`GevMin`] bridges to the goodness-of-fit subtree.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scale parameters are kept positive through the [`Link::Exponential`]
//!   link during optimization; [`Gev::new`] still validates, so a bad
//!   candidate surfaces as an error or a likelihood penalty, never as NaN.
//! - The flat coefficient vector is always partitioned in
//!   `(loc, scale, shape)` order.
//! - Failures are reported via [`NsResult`]; this subtree never panics on
//!   user-facing invalid inputs.
//!
//! Conventions
//! -----------
//! - Time-indexed accessors carry a `t` suffix (`loct`, `scalet`,
//!   `icdf`/`isf` over a time vector), mirroring the vocabulary of the
//!   attribution pipelines this crate serves.
//!
//! Downstream usage
//! ----------------
//! - Typical code fits a minimum-oriented model to cold extremes:
//!
//!   ```rust,no_run
//!   use ndarray::Array1;
//!   use rust_extremes::extremes::{GevMin, ParamDesign};
//!
//!   let y: Array1<f64> = Array1::zeros(50); // block minima
//!   let x: Array1<f64> = Array1::zeros(50); // covariate per block
//!   let mut model =
//!       GevMin::new(ParamDesign::Linear, ParamDesign::Constant, ParamDesign::Constant);
//!   model.fit(&y, &x)?;
//!   model.set_covariable(x.clone(), Array1::from_iter((0..50).map(f64::from)))?;
//!   let medians = model.mediant(&Array1::from_vec(vec![0.0, 49.0]))?;
//!   # let _ = medians;
//!   # Ok::<(), rust_extremes::extremes::NsError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests per module cover validation branches, closed-form values
//!   against hand computations, and the sign conventions of the
//!   minimum-oriented adapter.
//! - The integration suite exercises the full pipeline: simulate, fit,
//!   recover the trend, draw from the posterior, and test goodness of fit.

pub mod covariate;
pub mod errors;
pub mod gev;
pub mod gev_min;
pub mod link;
pub mod mcmc;
pub mod model;
pub mod params;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::covariate::Covariate;
pub use self::errors::{NsError, NsResult};
pub use self::gev::{Gev, SHAPE_EPS};
pub use self::gev_min::GevMin;
pub use self::link::Link;
pub use self::mcmc::{BayesianDraws, McmcOptions, Prior};
pub use self::model::{NsGevModel, LOGLIK_PENALTY};
pub use self::params::{ParamDesign, ParamName, ParameterSpec};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_extremes::extremes::prelude::*;
//
// to import the main extreme-value modeling surface in a single line.

pub mod prelude {
    pub use super::errors::{NsError, NsResult};
    pub use super::gev::Gev;
    pub use super::gev_min::GevMin;
    pub use super::link::Link;
    pub use super::mcmc::{BayesianDraws, McmcOptions, Prior};
    pub use super::model::NsGevModel;
    pub use super::params::{ParamDesign, ParamName, ParameterSpec};
}
