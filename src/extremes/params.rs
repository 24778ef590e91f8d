//! extremes::params — parameter descriptors for non-stationary GEV laws.
//!
//! Purpose
//! -------
//! Describe how each GEV parameter (location, scale, shape) depends on the
//! covariate: a tagged design (constant, or linear in the covariate), a
//! link function, and the fitted coefficients once they exist. The model
//! layer owns exactly one [`ParameterSpec`] per parameter name and
//! partitions the optimizer's flat coefficient vector across them in
//! `(loc, scale, shape)` order.
//!
//! Key behaviors
//! -------------
//! - [`ParamDesign`] fixes the coefficient count (1 or 2) and computes the
//!   linear predictor `η = c0` or `η = c0 + c1·x(t)`; evaluation dispatches
//!   on the tag, never on runtime attribute probing.
//! - [`ParameterSpec::evaluate`] maps `η` through the link into parameter
//!   space; calling it before coefficients exist is a
//!   [`NsError::ModelNotFitted`] error, not garbage.
//! - [`ParameterSpec::evaluate_with`] performs the same computation from a
//!   borrowed coefficient slice, so likelihood evaluations during fitting
//!   never mutate the spec.
//!
//! Conventions
//! -----------
//! - `symbol()` returns the TeX-style names used by downstream plotting
//!   layers (`\mu`, `\sigma`, `\xi`).

use ndarray::{Array1, ArrayView1};

use crate::extremes::{
    errors::{NsError, NsResult},
    link::Link,
};

/// Name of a GEV parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamName {
    Loc,
    Scale,
    Shape,
}

impl ParamName {
    /// TeX-style symbol, matching the labels used by attribution plots.
    pub fn symbol(&self) -> &'static str {
        match self {
            ParamName::Loc => "\\mu",
            ParamName::Scale => "\\sigma",
            ParamName::Shape => "\\xi",
        }
    }
}

/// Covariate design for one parameter.
///
/// - `Constant`: one coefficient, `η = c0`.
/// - `Linear`: intercept plus one slope on the covariate,
///   `η = c0 + c1·x(t)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDesign {
    Constant,
    Linear,
}

impl ParamDesign {
    /// Number of coefficients this design consumes.
    pub fn n_coef(&self) -> usize {
        match self {
            ParamDesign::Constant => 1,
            ParamDesign::Linear => 2,
        }
    }

    /// Linear predictor for this design from a coefficient slice.
    ///
    /// The slice is assumed to have length `n_coef()`; the spec layer
    /// enforces that before dispatching here.
    pub fn predictor(&self, coef: ArrayView1<f64>, x: f64) -> f64 {
        match self {
            ParamDesign::Constant => coef[0],
            ParamDesign::Linear => coef[0] + coef[1] * x,
        }
    }
}

/// One GEV parameter: its design, link, and (once fitted) coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: ParamName,
    pub design: ParamDesign,
    pub link: Link,
    pub coef: Option<Array1<f64>>,
}

impl ParameterSpec {
    /// Create an unfitted spec.
    pub fn new(name: ParamName, design: ParamDesign, link: Link) -> Self {
        Self { name, design, link, coef: None }
    }

    /// Number of coefficients this spec consumes from the flat vector.
    pub fn n_coef(&self) -> usize {
        self.design.n_coef()
    }

    /// Store fitted coefficients, validating the length against the design.
    ///
    /// # Errors
    /// - [`NsError::CoefLengthMismatch`] if the length differs from
    ///   [`ParameterSpec::n_coef`].
    /// - [`NsError::NonFiniteData`] for any non-finite coefficient.
    pub fn set_coef(&mut self, coef: Array1<f64>) -> NsResult<()> {
        if coef.len() != self.n_coef() {
            return Err(NsError::CoefLengthMismatch {
                expected: self.n_coef(),
                actual: coef.len(),
            });
        }
        for (index, &value) in coef.iter().enumerate() {
            if !value.is_finite() {
                return Err(NsError::NonFiniteData { index, value });
            }
        }
        self.coef = Some(coef);
        Ok(())
    }

    /// Borrow the fitted coefficients.
    ///
    /// # Errors
    /// [`NsError::ModelNotFitted`] if no coefficients have been stored.
    pub fn coef(&self) -> NsResult<&Array1<f64>> {
        self.coef.as_ref().ok_or(NsError::ModelNotFitted)
    }

    /// Evaluate the parameter at a covariate value using the stored
    /// coefficients.
    ///
    /// # Errors
    /// [`NsError::ModelNotFitted`] if the spec carries no coefficients.
    pub fn evaluate(&self, x: f64) -> NsResult<f64> {
        let coef = self.coef()?;
        Ok(self.evaluate_with(coef.view(), x))
    }

    /// Evaluate the parameter from a borrowed coefficient slice.
    ///
    /// Used during fitting, where candidate coefficients come from the
    /// optimizer and must not be stored on the spec.
    pub fn evaluate_with(&self, coef: ArrayView1<f64>, x: f64) -> f64 {
        self.link.apply(self.design.predictor(coef, x))
    }
}
