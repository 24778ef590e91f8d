//! loglik_optimizer::adapter — argmin problem view over a `LogLikelihood`.
//!
//! Purpose
//! -------
//! Present a user model as the minimization problem argmin expects: the
//! cost is `c(θ) = −ℓ(θ)`, and the cost gradient is either the negated
//! analytic gradient or a finite-difference estimate of the cost itself
//! (no sign flip in that branch, since the cost is already negated).
//!
//! Key behaviors
//! -------------
//! - A non-finite log-likelihood is rejected as [`OptError::NonFiniteCost`]
//!   before it reaches the solver; likelihood implementations that want the
//!   solver to retreat return a large finite penalty instead (see
//!   `extremes::model::LOGLIK_PENALTY`).
//! - Models that do not implement `grad` fall back to central differences
//!   of the cost, with a one-sided retry when the central stencil strays
//!   into a region where the cost errors or the estimate fails validation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every gradient handed to argmin has the parameter dimension and only
//!   finite entries; `validate_grad` enforces both on each branch.
//! - The finite-difference closures must return `f64`, so cost errors
//!   raised inside a stencil are captured in a cell and re-raised after
//!   the sweep; the sentinel `NaN` they leave behind never survives
//!   validation.

use std::cell::RefCell;

use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        traits::LogLikelihood,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Minimization view over a borrowed model and its data.
#[derive(Debug, Clone)]
pub struct CostAdapter<'a, F: LogLikelihood> {
    model: &'a F,
    data: &'a F::Data,
}

impl<'a, F: LogLikelihood> CostAdapter<'a, F> {
    /// Borrow a model/data pair for the duration of one solver run.
    pub fn new(model: &'a F, data: &'a F::Data) -> Self {
        Self { model, data }
    }

    /// Finite-difference gradient of the cost at `theta`.
    ///
    /// Central differences first; if any stencil evaluation errored or the
    /// estimate fails validation, one retry with forward differences. The
    /// stencil closure cannot return `Result`, so the first cost error is
    /// parked in a cell and the closure yields `NaN` for that point.
    fn fd_gradient(&self, theta: &Theta) -> Result<Grad, Error> {
        let first_err: RefCell<Option<Error>> = RefCell::new(None);
        let cost_at = |point: &Theta| -> f64 {
            match self.cost(point) {
                Ok(value) => value,
                Err(err) => {
                    let mut slot = first_err.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(err);
                    }
                    f64::NAN
                }
            }
        };

        let central = theta.central_diff(&cost_at);
        if first_err.borrow().is_none() && validate_grad(&central, theta.len()).is_ok() {
            return Ok(central);
        }

        first_err.replace(None);
        let forward = theta.forward_diff(&cost_at);
        if let Some(err) = first_err.take() {
            return Err(err);
        }
        validate_grad(&forward, theta.len())?;
        Ok(forward)
    }
}

impl<'a, F: LogLikelihood> CostFunction for CostAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Cost `c(θ) = −ℓ(θ)`, rejecting non-finite likelihood values.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let ll = self.model.value(theta, self.data)?;
        if !ll.is_finite() {
            return Err(OptError::NonFiniteCost { value: ll }.into());
        }
        Ok(-ll)
    }
}

impl<'a, F: LogLikelihood> Gradient for CostAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Cost gradient: `−∇ℓ(θ)` when the model provides one, otherwise a
    /// validated finite-difference estimate of the cost.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        match self.model.grad(theta, self.data) {
            Ok(grad) => {
                validate_grad(&grad, theta.len())?;
                Ok(-grad)
            }
            Err(OptError::GradientNotImplemented) => self.fd_gradient(theta),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The cost sign convention `c(θ) = −ℓ(θ)`.
    // - Sign flipping of analytic gradients.
    // - The finite-difference fallback against the analytic answer.
    // - Rejection of non-finite likelihood values.
    //
    // They intentionally DO NOT cover:
    // - Full solver runs, exercised through `maximize` by the integration
    //   suite.
    // -------------------------------------------------------------------------

    /// Concave quadratic log-likelihood ℓ(θ) = −θ·θ, with the analytic
    /// gradient ∇ℓ(θ) = −2θ available on demand.
    struct Quadratic {
        with_grad: bool,
    }

    impl LogLikelihood for Quadratic {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            if self.with_grad {
                Ok(-2.0 * theta)
            } else {
                Err(OptError::GradientNotImplemented)
            }
        }
    }

    /// Log-likelihood that evaluates to NaN everywhere.
    struct NanLikelihood;

    impl LogLikelihood for NanLikelihood {
        type Data = ();

        fn value(&self, _theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(f64::NAN)
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the cost sign convention: the adapter hands argmin −ℓ(θ).
    //
    // Given
    // -----
    // - ℓ(θ) = −θ·θ at θ = [1, 2].
    //
    // Expect
    // ------
    // - cost = 5.0 exactly.
    fn cost_is_negated_log_likelihood() {
        // Arrange
        let model = Quadratic { with_grad: false };
        let adapter = CostAdapter::new(&model, &());

        // Act
        let cost = adapter.cost(&array![1.0, 2.0]).expect("finite likelihood");

        // Assert
        assert_eq!(cost, 5.0);
    }

    #[test]
    // Purpose
    // -------
    // Check that an analytic log-likelihood gradient is sign-flipped into
    // the cost gradient.
    //
    // Given
    // -----
    // - ∇ℓ(θ) = −2θ at θ = [1, 2], so the cost gradient is 2θ.
    //
    // Expect
    // ------
    // - gradient = [2, 4].
    fn analytic_gradient_is_sign_flipped() {
        // Arrange
        let model = Quadratic { with_grad: true };
        let adapter = CostAdapter::new(&model, &());

        // Act
        let grad = adapter.gradient(&array![1.0, 2.0]).expect("analytic gradient");

        // Assert
        assert_abs_diff_eq!(grad[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grad[1], 4.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the finite-difference fallback reproduces the analytic cost
    // gradient when the model declines to provide one.
    //
    // Given
    // -----
    // - The same quadratic with `grad` unimplemented, at θ = [1, 2].
    //
    // Expect
    // ------
    // - FD gradient within 1e-5 of [2, 4].
    fn finite_differences_match_analytic_gradient() {
        // Arrange
        let model = Quadratic { with_grad: false };
        let adapter = CostAdapter::new(&model, &());

        // Act
        let grad = adapter.gradient(&array![1.0, 2.0]).expect("FD fallback");

        // Assert
        assert_abs_diff_eq!(grad[0], 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(grad[1], 4.0, epsilon = 1e-5);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-finite likelihood value is surfaced as an error rather
    // than handed to the solver as a cost.
    //
    // Given
    // -----
    // - A likelihood returning NaN everywhere.
    //
    // Expect
    // ------
    // - `cost` returns an error whose message names the non-finite value.
    fn non_finite_likelihood_is_rejected() {
        // Arrange
        let adapter = CostAdapter::new(&NanLikelihood, &());

        // Act
        let result = adapter.cost(&array![0.0]);

        // Assert
        let err = result.expect_err("NaN likelihood must not become a cost");
        assert!(
            err.to_string().contains("Non-finite cost"),
            "unexpected error: {err}"
        );
    }
}
