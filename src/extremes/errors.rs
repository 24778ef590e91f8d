//! extremes::errors — error enum and result alias for the model layer.
//!
//! Purpose
//! -------
//! Collect every failure the extreme-value layer can surface: data and
//! covariate validation, model state, parameter domains, fitting, and
//! Bayesian draws, plus wrapping variants for errors bubbling up from the
//! optimization and goodness-of-fit subtrees.

use crate::{optimization::errors::OptError, statistical_tests::errors::KsError};

/// Result alias for the extreme-value model layer.
pub type NsResult<T> = Result<T, NsError>;

#[derive(Debug, Clone, PartialEq)]
pub enum NsError {
    // ---- Data ----
    /// Observation series must be non-empty.
    EmptySeries,

    /// Data values need to be finite.
    NonFiniteData {
        index: usize,
        value: f64,
    },

    /// Paired series must have equal lengths.
    LengthMismatch {
        left: usize,
        right: usize,
    },

    // ---- Covariate ----
    /// Covariate series needs at least two points to interpolate.
    CovariateTooShort {
        len: usize,
    },

    /// Covariate time axis must be strictly increasing.
    TimeNotIncreasing {
        index: usize,
    },

    /// Evaluation requested before `set_covariable` was called.
    CovariateNotSet,

    // ---- Model state ----
    /// Evaluation requested before the model was fitted.
    ModelNotFitted,

    /// Coefficient vector length does not match the parameter layout.
    CoefLengthMismatch {
        expected: usize,
        actual: usize,
    },

    // ---- Parameters ----
    /// Scale parameter must be finite and strictly positive.
    InvalidScale {
        value: f64,
    },

    /// Location or shape parameter must be finite.
    InvalidGevParameter {
        name: &'static str,
        value: f64,
    },

    /// Inverse link evaluated outside its domain.
    InvalidLinkInverse {
        value: f64,
    },

    /// Quantile levels must lie in [0, 1].
    InvalidQuantile {
        value: f64,
    },

    // ---- Fitting ----
    /// Optimizer terminated without a usable estimate.
    FitFailed {
        status: String,
    },

    // ---- Bayesian draws ----
    /// Realized acceptance rate fell below the requested floor.
    LowAcceptanceRate {
        rate: f64,
        min_rate_accept: f64,
    },

    /// Number of requested draws must be positive.
    InvalidMcmcLength,

    /// Acceptance-rate floor must lie in [0, 1].
    InvalidRateFloor {
        value: f64,
    },

    /// Chain start has zero or undefined target density.
    InvalidChainStart {
        ln_p: f64,
    },

    /// Prior box bounds must be finite with lower < upper.
    InvalidPriorBox {
        index: usize,
    },

    /// Prior standard deviations must be finite and strictly positive.
    InvalidPriorSd {
        index: usize,
        value: f64,
    },

    /// Proposal scales must be finite and strictly positive.
    InvalidProposalScale {
        index: usize,
        value: f64,
    },

    // ---- Wrapped subsystem errors ----
    /// Failure surfaced by the optimization layer.
    Optimizer(OptError),

    /// Failure surfaced by the goodness-of-fit layer.
    GoodnessOfFit(KsError),
}

impl std::error::Error for NsError {}

impl std::fmt::Display for NsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NsError::EmptySeries => {
                write!(f, "Observation series is empty")
            }
            NsError::NonFiniteData { index, value } => {
                write!(f, "Non-finite data value at index {index}: {value}")
            }
            NsError::LengthMismatch { left, right } => {
                write!(f, "Length mismatch between paired series: {left} vs {right}")
            }
            NsError::CovariateTooShort { len } => {
                write!(f, "Covariate series too short: {len}, need at least 2 points")
            }
            NsError::TimeNotIncreasing { index } => {
                write!(f, "Covariate time axis not strictly increasing at index {index}")
            }
            NsError::CovariateNotSet => {
                write!(f, "Covariate not set; call set_covariable first")
            }
            NsError::ModelNotFitted => {
                write!(f, "Model not fitted; call fit or set_coef first")
            }
            NsError::CoefLengthMismatch { expected, actual } => {
                write!(f, "Coefficient length mismatch: expected {expected}, actual {actual}")
            }
            NsError::InvalidScale { value } => {
                write!(f, "Invalid scale parameter: {value}, must be finite and > 0")
            }
            NsError::InvalidGevParameter { name, value } => {
                write!(f, "Invalid {name} parameter: {value}, must be finite")
            }
            NsError::InvalidLinkInverse { value } => {
                write!(f, "Inverse link undefined at {value}, input must be positive and finite")
            }
            NsError::InvalidQuantile { value } => {
                write!(f, "Invalid quantile level: {value}, must lie in [0, 1]")
            }
            NsError::FitFailed { status } => {
                write!(f, "Fit failed: {status}")
            }
            NsError::LowAcceptanceRate { rate, min_rate_accept } => {
                write!(
                    f,
                    "MCMC acceptance rate {rate} below required minimum {min_rate_accept}"
                )
            }
            NsError::InvalidMcmcLength => {
                write!(f, "Number of MCMC draws must be greater than zero")
            }
            NsError::InvalidRateFloor { value } => {
                write!(f, "Invalid acceptance-rate floor: {value}, must lie in [0, 1]")
            }
            NsError::InvalidChainStart { ln_p } => {
                write!(
                    f,
                    "Chain start is outside the target support (log density {ln_p})"
                )
            }
            NsError::InvalidPriorBox { index } => {
                write!(f, "Invalid prior box at index {index}: bounds must be finite with lower < upper")
            }
            NsError::InvalidPriorSd { index, value } => {
                write!(f, "Invalid prior standard deviation at index {index}: {value}, must be finite and > 0")
            }
            NsError::InvalidProposalScale { index, value } => {
                write!(f, "Invalid proposal scale at index {index}: {value}, must be finite and > 0")
            }
            NsError::Optimizer(err) => {
                write!(f, "Optimization error: {err}")
            }
            NsError::GoodnessOfFit(err) => {
                write!(f, "Goodness-of-fit error: {err}")
            }
        }
    }
}

impl From<OptError> for NsError {
    fn from(err: OptError) -> Self {
        NsError::Optimizer(err)
    }
}

impl From<KsError> for NsError {
    fn from(err: KsError) -> Self {
        NsError::GoodnessOfFit(err)
    }
}
