//! statistical_tests — goodness-of-fit diagnostics and helpers.
//!
//! Purpose
//! -------
//! Collect goodness-of-fit routines and their shared infrastructure. This
//! subtree implements the one-sample Kolmogorov-Smirnov test against an
//! arbitrary continuous reference CDF, together with common input
//! validation and error handling.
//!
//! Key behaviors
//! -------------
//! - Expose the one-sample KS test via [`KsOutcome`] and its constructor
//!   [`KsOutcome::one_sample`](kolmogorov_smirnov::KsOutcome::one_sample).
//! - Centralize sample guards in [`validate_sample`], ensuring
//!   non-emptiness and finiteness are checked once in a consistent way.
//! - Provide a dedicated error type [`KsError`] and result alias
//!   [`KsResult`] for this subtree.
//!
//! Invariants & assumptions
//! ------------------------
//! - Test routines report failures via [`KsResult`] and never panic on
//!   user-facing invalid inputs; panics indicate programming errors.
//! - The reference CDF is supplied by the caller as a closure, so this
//!   subtree carries no knowledge of any particular parametric family.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *statistical tests*; model-specific error
//!   types (extremes, optimization) live in their own `errors` modules
//!   under the relevant subtrees.
//!
//! Downstream usage
//! ----------------
//! - The extremes layer standardizes block extremes with fitted
//!   parameters and calls
//!   [`KsOutcome::one_sample`](kolmogorov_smirnov::KsOutcome::one_sample)
//!   with the unit GEV CDF, reporting the statistic and p-value from
//!   [`KsOutcome`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding for [`KsError`] variants.
//! - Unit tests in [`validation`] exercise all branches of
//!   [`validate_sample`].
//! - Unit tests in [`kolmogorov_smirnov`] check the statistic against a
//!   hand computation, the separation of good and bad fits by p-value,
//!   and rejection of malformed reference CDFs.

pub mod errors;
pub mod kolmogorov_smirnov;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{KsError, KsResult};
pub use self::kolmogorov_smirnov::KsOutcome;
pub use self::validation::validate_sample;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_extremes::statistical_tests::prelude::*;
//
// to import the main goodness-of-fit surface in a single line.

pub mod prelude {
    pub use super::errors::{KsError, KsResult};
    pub use super::kolmogorov_smirnov::KsOutcome;
}
