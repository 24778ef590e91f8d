//! numerical_stability — numerically robust transformations.
//!
//! Purpose
//! -------
//! Collect the guarded scalar transforms shared by the optimization and
//! extreme-value layers. The positivity link used for the GEV scale
//! parameter exponentiates an unconstrained linear predictor; this module
//! centralizes the clamping discipline so the rest of the crate can assume
//! well-conditioned `f64` arithmetic.
//!
//! Key behaviors
//! -------------
//! - Provide a clamped exponential (`safe_exp`) for mapping unconstrained
//!   reals into strictly positive parameters without overflow.
//! - Provide the matching guarded logarithm (`safe_ln`) for mapping
//!   positive moment estimates back into link space when seeding the
//!   optimizer.
//! - Centralize the clamp constant (`EXP_CLAMP`) so downstream modules
//!   share one cutoff instead of scattering magic numbers.
//!
//! Invariants & assumptions
//! ------------------------
//! - All transforms assume finite `f64` inputs; domain validation (e.g.,
//!   rejecting non-positive inputs to an inverse link) is enforced in the
//!   extremes layer, not here.
//! - `safe_exp` output is always finite and strictly positive, so a scale
//!   parameter produced through it can never be `0`, `∞`, or `NaN`.
//!
//! Conventions
//! -----------
//! - This module never logs, performs I/O, or touches global state; it is
//!   pure numerical helpers suitable for use inside tight inner loops.
//! - Panics and `unsafe` are avoided; invalid inputs are caught by
//!   upstream validation and surfaced as domain-specific error types.
//!
//! Downstream usage
//! ----------------
//! - The `extremes::link` module dispatches its `Exponential` variant
//!   through `safe_exp`, and its seeding path through `safe_ln`.
//! - Higher-level front-ends are expected to depend only on the
//!   re-exported surface or the prelude, not on internal implementation
//!   details of [`transformations`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with the naïve
//!   formulas inside the clamp, saturation behavior outside it, and the
//!   exp/ln round trip on the safe range.
//! - Integration tests in the extremes layer exercise the higher-level
//!   invariant (fitted scales are finite and positive) rather than
//!   re-testing these primitives.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{EXP_CLAMP, safe_exp, safe_ln};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_extremes::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{EXP_CLAMP, safe_exp, safe_ln};
}
