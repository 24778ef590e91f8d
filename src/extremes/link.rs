//! extremes::link — link functions between predictor and parameter space.
//!
//! Purpose
//! -------
//! Map the unconstrained linear predictor `η` produced by the optimizer
//! into each GEV parameter's natural domain, and back. The scale parameter
//! must stay strictly positive, so its default link exponentiates; location
//! and shape are unconstrained and default to the identity.
//!
//! Key behaviors
//! -------------
//! - `apply(η)` sends predictor space → parameter space; `inverse(value)`
//!   sends parameter space → predictor space (used to seed the optimizer
//!   from moment estimates).
//! - The `Exponential` variant dispatches through the guarded
//!   [`safe_exp`] / [`safe_ln`] pair so optimizer excursions cannot
//!   overflow `f64` or produce a zero scale.
//!
//! Invariants & assumptions
//! ------------------------
//! - `Exponential::apply` output is always finite and strictly positive.
//! - `Exponential::inverse` rejects non-positive or non-finite inputs with
//!   [`NsError::InvalidLinkInverse`] instead of returning `NaN`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover both variants' round trips and the inverse-domain
//!   rejection.

use crate::{
    extremes::errors::{NsError, NsResult},
    optimization::numerical_stability::{safe_exp, safe_ln},
};

/// Link function between the linear predictor and a GEV parameter.
///
/// Variants:
/// - `Identity`: `θ = η`, for unconstrained parameters (location, shape).
/// - `Exponential`: `θ = exp(η)` (guarded), for strictly positive
///   parameters (scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Identity,
    Exponential,
}

impl Link {
    /// Map a linear predictor into parameter space.
    ///
    /// `Exponential` clamps the predictor before exponentiating, so the
    /// result is finite and strictly positive for any finite input.
    pub fn apply(&self, eta: f64) -> f64 {
        match self {
            Link::Identity => eta,
            Link::Exponential => safe_exp(eta),
        }
    }

    /// Map a parameter value back into predictor space.
    ///
    /// # Errors
    /// - [`NsError::InvalidLinkInverse`] for the `Exponential` variant when
    ///   `value` is non-positive or non-finite (outside the link's range).
    pub fn inverse(&self, value: f64) -> NsResult<f64> {
        match self {
            Link::Identity => Ok(value),
            Link::Exponential => {
                if !value.is_finite() || value <= 0.0 {
                    return Err(NsError::InvalidLinkInverse { value });
                }
                Ok(safe_ln(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Identity pass-through in both directions.
    // - Exponential positivity, round trip, and inverse-domain rejection.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the identity link passes values through unchanged in
    // both directions.
    //
    // Given
    // -----
    // - A handful of finite predictors, including negatives.
    //
    // Expect
    // ------
    // - `apply` and `inverse` both return the input value.
    fn identity_link_is_pass_through() {
        // Arrange
        let link = Link::Identity;
        let grid = [-3.5_f64, 0.0, 0.1, 42.0];

        // Act & Assert
        for &eta in &grid {
            assert_eq!(link.apply(eta), eta);
            assert_eq!(link.inverse(eta).expect("identity inverse is total"), eta);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the exponential link always produces a strictly positive
    // parameter and that `inverse` recovers the predictor.
    //
    // Given
    // -----
    // - Predictors in the safe range, including large negatives.
    //
    // Expect
    // ------
    // - `apply` > 0 everywhere; `inverse(apply(η)) ≈ η` to within 1e-12.
    fn exponential_link_round_trips() {
        // Arrange
        let link = Link::Exponential;
        let grid = [-20.0_f64, -1.0, 0.0, 0.7, 15.0];

        // Act & Assert
        for &eta in &grid {
            let theta = link.apply(eta);
            assert!(theta > 0.0, "apply must be positive at eta = {eta}, got {theta}");
            let back = link.inverse(theta).expect("positive input");
            assert!((back - eta).abs() < 1e-12, "round trip failed at eta = {eta}: {back}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that the exponential inverse rejects values outside (0, ∞).
    //
    // Given
    // -----
    // - Zero, a negative value, and NaN.
    //
    // Expect
    // ------
    // - `Err(NsError::InvalidLinkInverse)` for each.
    fn exponential_inverse_rejects_out_of_domain() {
        // Arrange
        let link = Link::Exponential;

        // Act & Assert
        for bad in [0.0_f64, -2.0, f64::NAN] {
            match link.inverse(bad) {
                Err(NsError::InvalidLinkInverse { .. }) => (),
                other => panic!("expected InvalidLinkInverse for {bad}, got {other:?}"),
            }
        }
    }
}
