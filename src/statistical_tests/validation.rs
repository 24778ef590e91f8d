//! statistical_tests::validation — shared input guards for test statistics.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the goodness-of-fit routines in
//! this crate, so checks on sample length and finiteness are not
//! duplicated across test modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on sample inputs before sorting and
//!   rank-based computations are performed.
//! - Map invalid inputs into structured [`KsError`] values for consistent
//!   error handling across callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input samples must be non-empty.
//! - All sample values must be finite (`!NaN`, not ±∞); otherwise the
//!   sort order used by the empirical CDF is undefined.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and
//!   does not allocate beyond what is required for error construction.
//! - Callers are responsible for any further test-specific checks (e.g.,
//!   reference CDF sanity), which happen where the values are produced.

use crate::statistical_tests::errors::{KsError, KsResult};

/// Validate basic input constraints for one-sample test routines.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Input sample of real-valued observations. Must be non-empty, and all
///   values must be finite (no `NaN` or ±∞).
///
/// Returns
/// -------
/// `KsResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(KsError)` if any constraint is violated.
///
/// Errors
/// ------
/// - `KsError::EmptySample`
///   Returned when `data` is empty.
/// - `KsError::InvalidData(value)`
///   Returned when any element of `data` is not finite, with `value` set
///   to the offending entry.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `KsError`.
pub fn validate_sample(data: &[f64]) -> KsResult<()> {
    if data.is_empty() {
        return Err(KsError::EmptySample);
    }

    for &value in data {
        if !value.is_finite() {
            return Err(KsError::InvalidData(value));
        }
    }

    Ok(())
}
