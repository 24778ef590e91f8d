//! extremes::covariate — validated forcing-covariate series.
//!
//! Purpose
//! -------
//! Hold the `(x, t)` pair that drives the non-stationary parameters and
//! interpolate it onto arbitrary evaluation times. Attribution pipelines
//! supply the covariate (typically a smoothed forcing signal) on its own
//! time axis, then query model parameters at event times that need not
//! coincide with that axis.
//!
//! Key behaviors
//! -------------
//! - Validate on construction: equal lengths ≥ 2, finite values, strictly
//!   increasing time axis.
//! - `value_at(t)` linearly interpolates `x` over `t` and clamps to the
//!   end values outside the observed range, so extrapolation never
//!   invents a trend.
//!
//! Invariants & assumptions
//! ------------------------
//! - Once constructed, every stored value is finite and the time axis is
//!   strictly increasing; downstream code relies on this and performs no
//!   re-validation.

use ndarray::Array1;

use crate::extremes::errors::{NsError, NsResult};

/// A validated covariate series over a strictly increasing time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Covariate {
    x: Array1<f64>,
    t: Array1<f64>,
}

impl Covariate {
    /// Construct a validated covariate series.
    ///
    /// # Errors
    /// - [`NsError::CovariateTooShort`] if fewer than 2 points are given.
    /// - [`NsError::LengthMismatch`] if `x` and `t` differ in length.
    /// - [`NsError::NonFiniteData`] for any `NaN` or infinite entry.
    /// - [`NsError::TimeNotIncreasing`] if `t` is not strictly increasing,
    ///   with the index of the first offending step.
    pub fn new(x: Array1<f64>, t: Array1<f64>) -> NsResult<Self> {
        if x.len() < 2 {
            return Err(NsError::CovariateTooShort { len: x.len() });
        }
        if x.len() != t.len() {
            return Err(NsError::LengthMismatch { left: x.len(), right: t.len() });
        }
        for series in [&x, &t] {
            for (index, &value) in series.iter().enumerate() {
                if !value.is_finite() {
                    return Err(NsError::NonFiniteData { index, value });
                }
            }
        }
        for index in 1..t.len() {
            if t[index] <= t[index - 1] {
                return Err(NsError::TimeNotIncreasing { index });
            }
        }
        Ok(Self { x, t })
    }

    /// Covariate value at an arbitrary time, by linear interpolation.
    ///
    /// Times before the first (after the last) grid point return the first
    /// (last) covariate value.
    pub fn value_at(&self, time: f64) -> f64 {
        let n = self.t.len();
        if time <= self.t[0] {
            return self.x[0];
        }
        if time >= self.t[n - 1] {
            return self.x[n - 1];
        }
        // the guards above ensure a bracketing interval exists
        let mut hi = 1;
        while hi < n - 1 && self.t[hi] <= time {
            hi += 1;
        }
        let lo = hi - 1;
        let w = (time - self.t[lo]) / (self.t[hi] - self.t[lo]);
        self.x[lo] + w * (self.x[hi] - self.x[lo])
    }

    /// The covariate values.
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// The time axis.
    pub fn t(&self) -> &Array1<f64> {
        &self.t
    }
}
