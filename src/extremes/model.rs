//! extremes::model — non-stationary GEV machinery (maximum orientation).
//!
//! Purpose
//! -------
//! Tie the parameter descriptors, covariate state, and stationary GEV
//! backend together into a fittable non-stationary model: each parameter
//! is a link-transformed (possibly covariate-dependent) predictor, the
//! coefficient vector is estimated by maximum likelihood through the
//! crate's `loglik_optimizer`, and every pointwise query freezes a
//! stationary [`Gev`] at the requested time.
//!
//! Key behaviors
//! -------------
//! - `fit` optimizes in the unconstrained link domain, seeded from Gumbel
//!   moment estimates pushed through the inverse links; prior coefficients
//!   are only overwritten on success.
//! - The [`LogLikelihood`] implementation maps out-of-support candidates
//!   to a large finite penalty (`LOGLIK_PENALTY`): the argmin adapter
//!   rejects non-finite costs, so `−∞` must never reach it, and a finite
//!   penalty lets the line search back off instead of aborting the run.
//! - `drawn_bayesian` reuses the same likelihood inside a random-walk
//!   Metropolis chain (see [`crate::extremes::mcmc`]), starting from the
//!   fitted coefficients when available and a prior draw otherwise.
//! - Evaluation accessors (`loct`, `scalet`, `shapet`, `cdf`, `icdf`, …)
//!   interpolate the covariate onto the query times and evaluate the
//!   frozen laws pointwise.
//!
//! Invariants & assumptions
//! ------------------------
//! - The flat coefficient vector is always partitioned in
//!   `(loc, scale, shape)` order, matching [`NsGevModel::coef`].
//! - `fit` consumes the covariate *per observation* (`y[i]` pairs with
//!   `x[i]`); time-based interpolation only enters through
//!   `set_covariable` and the evaluation accessors.
//! - Every evaluation method fails with [`NsError::CovariateNotSet`] or
//!   [`NsError::ModelNotFitted`] before the corresponding state exists.
//!
//! Conventions
//! -----------
//! - This model is maximum-oriented throughout; the minimum-oriented
//!   surface lives in [`crate::extremes::gev_min`] as a sign-flip adapter
//!   over this engine.

use ndarray::{Array1, s};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use statrs::consts::EULER_MASCHERONI;

use crate::{
    extremes::{
        covariate::Covariate,
        errors::{NsError, NsResult},
        gev::Gev,
        mcmc::{BayesianDraws, McmcOptions, Prior, metropolis},
        params::ParameterSpec,
    },
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{Cost, LogLikelihood, MLEOptions, OptimOutcome, Theta, maximize},
    },
};

/// Log-likelihood stand-in for candidates outside the support.
///
/// The argmin adapter errors on non-finite costs, so the likelihood never
/// returns `−∞`; this penalty is finite but far below any attainable
/// log-likelihood, which makes the line search retreat.
pub const LOGLIK_PENALTY: f64 = -1.0e10;

/// Observation/covariate payload carried through the optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct FitData {
    pub y: Array1<f64>,
    pub x: Array1<f64>,
}

/// Non-stationary GEV model in the maximum convention.
#[derive(Debug, Clone, PartialEq)]
pub struct NsGevModel {
    loc: ParameterSpec,
    scale: ParameterSpec,
    shape: ParameterSpec,
    covariate: Option<Covariate>,
    outcome: Option<OptimOutcome>,
}

impl NsGevModel {
    /// Assemble a model from its three parameter specs, given in
    /// `(loc, scale, shape)` order.
    pub fn new(loc: ParameterSpec, scale: ParameterSpec, shape: ParameterSpec) -> Self {
        Self { loc, scale, shape, covariate: None, outcome: None }
    }

    /// Total number of coefficients across the three specs.
    pub fn n_coef(&self) -> usize {
        self.loc.n_coef() + self.scale.n_coef() + self.shape.n_coef()
    }

    /// Location spec (read access for diagnostics).
    pub fn loc_spec(&self) -> &ParameterSpec {
        &self.loc
    }

    /// Scale spec (read access for diagnostics).
    pub fn scale_spec(&self) -> &ParameterSpec {
        &self.scale
    }

    /// Shape spec (read access for diagnostics).
    pub fn shape_spec(&self) -> &ParameterSpec {
        &self.shape
    }

    /// Store the covariate series used by the evaluation accessors.
    ///
    /// # Errors
    /// Propagates [`Covariate::new`] validation failures.
    pub fn set_covariable(&mut self, x: Array1<f64>, t: Array1<f64>) -> NsResult<()> {
        self.covariate = Some(Covariate::new(x, t)?);
        Ok(())
    }

    /// The optimizer outcome from the last successful fit, if any.
    pub fn outcome(&self) -> Option<&OptimOutcome> {
        self.outcome.as_ref()
    }

    /// Flat coefficient vector in `(loc, scale, shape)` order.
    ///
    /// # Errors
    /// [`NsError::ModelNotFitted`] if any spec lacks coefficients.
    pub fn coef(&self) -> NsResult<Array1<f64>> {
        let mut coef = Vec::with_capacity(self.n_coef());
        for spec in [&self.loc, &self.scale, &self.shape] {
            coef.extend(spec.coef()?.iter().copied());
        }
        Ok(Array1::from_vec(coef))
    }

    /// Partition and store a flat coefficient vector across the specs.
    ///
    /// All-or-nothing: the vector is validated in full before any spec is
    /// touched, so a rejected call leaves previously stored coefficients
    /// intact.
    ///
    /// # Errors
    /// - [`NsError::CoefLengthMismatch`] on a total-length mismatch.
    /// - [`NsError::NonFiniteData`] with the flat-vector index of the first
    ///   non-finite entry.
    pub fn set_coef(&mut self, coef: &Array1<f64>) -> NsResult<()> {
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
        let mut offset = 0;
        for spec in [&mut self.loc, &mut self.scale, &mut self.shape] {
            let n = spec.n_coef();
            spec.set_coef(coef.slice(s![offset..offset + n]).to_owned())?;
            offset += n;
        }
        Ok(())
    }

    /// Fit by maximum likelihood with default optimizer options.
    ///
    /// `y[i]` pairs with the covariate value `x[i]`.
    pub fn fit(&mut self, y: &Array1<f64>, x: &Array1<f64>) -> NsResult<()> {
        self.fit_with_options(y, x, &MLEOptions::default())
    }

    /// Fit by maximum likelihood with explicit optimizer options.
    ///
    /// # Errors
    /// - Data validation errors (`EmptySeries`, `NonFiniteData`,
    ///   `LengthMismatch`).
    /// - [`NsError::FitFailed`] when the solver does not terminate or
    ///   produces unusable coefficients; previously stored coefficients
    ///   are kept in that case.
    /// - Optimizer errors wrapped as [`NsError::Optimizer`].
    pub fn fit_with_options(
        &mut self, y: &Array1<f64>, x: &Array1<f64>, opts: &MLEOptions,
    ) -> NsResult<()> {
        validate_series(y)?;
        validate_series(x)?;
        if y.len() != x.len() {
            return Err(NsError::LengthMismatch { left: y.len(), right: x.len() });
        }
        let theta0 = self.initial_theta(y)?;
        let data = FitData { y: y.clone(), x: x.clone() };
        let outcome = maximize(self, theta0, &data, opts)?;
        if !outcome.converged {
            return Err(NsError::FitFailed { status: outcome.status });
        }
        self.set_coef(&outcome.theta_hat)?;
        self.outcome = Some(outcome);
        Ok(())
    }

    /// Draw from the posterior of the coefficient vector by random-walk
    /// Metropolis.
    ///
    /// The chain starts at the fitted coefficients when present, otherwise
    /// at a prior draw. Every iteration stores the current state, so the
    /// result has exactly `n_mcmc_drawn` rows.
    ///
    /// # Errors
    /// - Data and prior-dimension validation errors.
    /// - [`NsError::InvalidChainStart`] when the fitted coefficients lie
    ///   outside the prior's support.
    /// - [`NsError::LowAcceptanceRate`] when the realized acceptance rate
    ///   falls below `min_rate_accept`.
    pub fn drawn_bayesian(
        &self, y: &Array1<f64>, x: &Array1<f64>, n_mcmc_drawn: usize, prior: &Prior,
        min_rate_accept: f64, options: &McmcOptions,
    ) -> NsResult<BayesianDraws> {
        validate_series(y)?;
        validate_series(x)?;
        if y.len() != x.len() {
            return Err(NsError::LengthMismatch { left: y.len(), right: x.len() });
        }
        if prior.dim() != self.n_coef() {
            return Err(NsError::CoefLengthMismatch {
                expected: self.n_coef(),
                actual: prior.dim(),
            });
        }
        let data = FitData { y: y.clone(), x: x.clone() };
        let ln_target = |theta: &Array1<f64>| -> NsResult<f64> {
            let ln_prior = prior.ln_density(theta);
            if ln_prior == f64::NEG_INFINITY {
                return Ok(f64::NEG_INFINITY);
            }
            let ll = self.value(theta, &data).map_err(NsError::from)?;
            Ok(ln_prior + ll)
        };
        let start = match self.coef() {
            Ok(coef) => coef,
            Err(_) => {
                // separate stream so the start draw does not shift the chain
                let mut rng = match options.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
                    None => ChaCha8Rng::from_entropy(),
                };
                prior.sample(&mut rng)
            }
        };
        let proposal_scale = match &options.proposal_scale {
            Some(scale) => scale.clone(),
            None => prior.default_proposal_scale(),
        };
        metropolis(ln_target, start, n_mcmc_drawn, &proposal_scale, min_rate_accept, options.seed)
    }

    /// Evaluate `(loc, scale, shape)` at one time through the covariate.
    pub fn params_at(&self, time: f64) -> NsResult<(f64, f64, f64)> {
        let covariate = self.covariate.as_ref().ok_or(NsError::CovariateNotSet)?;
        let x = covariate.value_at(time);
        Ok((self.loc.evaluate(x)?, self.scale.evaluate(x)?, self.shape.evaluate(x)?))
    }

    /// Freeze the stationary law at one time.
    pub fn frozen_at(&self, time: f64) -> NsResult<Gev> {
        let (loc, scale, shape) = self.params_at(time)?;
        Gev::new(loc, scale, shape)
    }

    /// Location parameter at each query time.
    pub fn loct(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| Ok(gev.loc()))
    }

    /// Scale parameter at each query time.
    pub fn scalet(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| Ok(gev.scale()))
    }

    /// Shape parameter at each query time.
    pub fn shapet(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| Ok(gev.shape()))
    }

    /// Draw one variate per query time.
    pub fn rvs<R: Rng + ?Sized>(&self, t: &Array1<f64>, rng: &mut R) -> NsResult<Array1<f64>> {
        let mut out = Array1::zeros(t.len());
        for (slot, &time) in out.iter_mut().zip(t.iter()) {
            *slot = self.frozen_at(time)?.sample(rng);
        }
        Ok(out)
    }

    /// Pointwise CDF: `F(y[i]; t[i])`.
    ///
    /// # Errors
    /// [`NsError::LengthMismatch`] if `y` and `t` differ in length.
    pub fn cdf(&self, y: &Array1<f64>, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_pairs(y, t, |gev, value| Ok(gev.cdf(value)))
    }

    /// Pointwise survival function: `1 − F(y[i]; t[i])`.
    pub fn sf(&self, y: &Array1<f64>, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_pairs(y, t, |gev, value| Ok(gev.sf(value)))
    }

    /// Quantile of level `q` at each query time.
    pub fn icdf(&self, q: f64, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| gev.ppf(q))
    }

    /// Upper-tail quantile of exceedance level `p` at each query time.
    pub fn isf(&self, p: f64, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| gev.isf(p))
    }

    /// Mean at each query time.
    pub fn meant(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| Ok(gev.mean()))
    }

    /// Median at each query time.
    pub fn mediant(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| Ok(gev.median()))
    }

    /// Lower support endpoint at each query time.
    pub fn lower_boundt(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| Ok(gev.lower_bound()))
    }

    /// Upper support endpoint at each query time.
    pub fn upper_boundt(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.map_times(t, |gev| Ok(gev.upper_bound()))
    }

    // ---- Helpers -----------------------------------------------------------

    fn map_times<F>(&self, t: &Array1<f64>, f: F) -> NsResult<Array1<f64>>
    where
        F: Fn(&Gev) -> NsResult<f64>,
    {
        let mut out = Array1::zeros(t.len());
        for (slot, &time) in out.iter_mut().zip(t.iter()) {
            *slot = f(&self.frozen_at(time)?)?;
        }
        Ok(out)
    }

    fn map_pairs<F>(&self, y: &Array1<f64>, t: &Array1<f64>, f: F) -> NsResult<Array1<f64>>
    where
        F: Fn(&Gev, f64) -> NsResult<f64>,
    {
        if y.len() != t.len() {
            return Err(NsError::LengthMismatch { left: y.len(), right: t.len() });
        }
        let mut out = Array1::zeros(t.len());
        for index in 0..t.len() {
            out[index] = f(&self.frozen_at(t[index])?, y[index])?;
        }
        Ok(out)
    }

    /// Gumbel moment start: `σ₀ = s·√6/π`, `μ₀ = m − γ·σ₀`, zero slopes
    /// and shape, all pushed through the inverse links.
    fn initial_theta(&self, y: &Array1<f64>) -> NsResult<Array1<f64>> {
        let m = y.mean().unwrap_or(0.0);
        let s = y.std(0.0);
        let mut scale0 = s * 6.0_f64.sqrt() / std::f64::consts::PI;
        if !(scale0 > 0.0) || !scale0.is_finite() {
            scale0 = 1.0;
        }
        let loc0 = m - EULER_MASCHERONI * scale0;
        let mut theta = Vec::with_capacity(self.n_coef());
        for (spec, param0) in
            [(&self.loc, loc0), (&self.scale, scale0), (&self.shape, 0.0)]
        {
            theta.push(spec.link.inverse(param0)?);
            for _ in 1..spec.n_coef() {
                theta.push(0.0);
            }
        }
        Ok(Array1::from_vec(theta))
    }

    fn split_theta<'a>(
        &self, theta: &'a Theta,
    ) -> Result<
        (ndarray::ArrayView1<'a, f64>, ndarray::ArrayView1<'a, f64>, ndarray::ArrayView1<'a, f64>),
        OptError,
    > {
        if theta.len() != self.n_coef() {
            return Err(OptError::ThetaLengthMismatch {
                expected: self.n_coef(),
                actual: theta.len(),
            });
        }
        let n_loc = self.loc.n_coef();
        let n_scale = self.scale.n_coef();
        Ok((
            theta.slice(s![0..n_loc]),
            theta.slice(s![n_loc..n_loc + n_scale]),
            theta.slice(s![n_loc + n_scale..]),
        ))
    }
}

impl LogLikelihood for NsGevModel {
    type Data = FitData;

    /// Log-likelihood of the observations under the candidate coefficients.
    ///
    /// Candidates that put any observation outside the support (or produce
    /// an invalid pointwise law) return [`LOGLIK_PENALTY`].
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        let (loc_c, scale_c, shape_c) = self.split_theta(theta)?;
        let mut ll = 0.0;
        for (&yi, &xi) in data.y.iter().zip(data.x.iter()) {
            let loc = self.loc.evaluate_with(loc_c, xi);
            let scale = self.scale.evaluate_with(scale_c, xi);
            let shape = self.shape.evaluate_with(shape_c, xi);
            let gev = match Gev::new(loc, scale, shape) {
                Ok(gev) => gev,
                Err(_) => return Ok(LOGLIK_PENALTY),
            };
            let ln_pdf = gev.ln_pdf(yi);
            if !ln_pdf.is_finite() {
                return Ok(LOGLIK_PENALTY);
            }
            ll += ln_pdf;
        }
        Ok(ll)
    }

    /// Reject malformed `θ`/data pairs before the solver starts.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        self.split_theta(theta)?;
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::InvalidThetaInput { index, value });
            }
        }
        if data.y.is_empty() || data.y.len() != data.x.len() {
            return Err(OptError::InvalidLogLikInput { value: data.y.len() as f64 });
        }
        for &value in data.y.iter().chain(data.x.iter()) {
            if !value.is_finite() {
                return Err(OptError::InvalidLogLikInput { value });
            }
        }
        Ok(())
    }
}

fn validate_series(series: &Array1<f64>) -> NsResult<()> {
    if series.is_empty() {
        return Err(NsError::EmptySeries);
    }
    for (index, &value) in series.iter().enumerate() {
        if !value.is_finite() {
            return Err(NsError::NonFiniteData { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extremes::{
        link::Link,
        params::{ParamDesign, ParamName},
    };
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Coefficient partitioning round trips and layout errors.
    // - The log-likelihood value against a hand-computed stationary sum.
    // - Penalty behavior for out-of-support candidates.
    // - Gating of evaluation accessors on covariate/fit state.
    //
    // They intentionally DO NOT cover:
    // - Full MLE and Metropolis runs, exercised by the integration suite.
    // -------------------------------------------------------------------------

    fn stationary_model() -> NsGevModel {
        NsGevModel::new(
            ParameterSpec::new(ParamName::Loc, ParamDesign::Constant, Link::Identity),
            ParameterSpec::new(ParamName::Scale, ParamDesign::Constant, Link::Exponential),
            ParameterSpec::new(ParamName::Shape, ParamDesign::Constant, Link::Identity),
        )
    }

    fn trend_model() -> NsGevModel {
        NsGevModel::new(
            ParameterSpec::new(ParamName::Loc, ParamDesign::Linear, Link::Identity),
            ParameterSpec::new(ParamName::Scale, ParamDesign::Constant, Link::Exponential),
            ParameterSpec::new(ParamName::Shape, ParamDesign::Constant, Link::Identity),
        )
    }

    #[test]
    // Purpose
    // -------
    // Verify that `set_coef` / `coef` round-trip a flat vector through the
    // `(loc, scale, shape)` partition and that a wrong total length is
    // rejected.
    //
    // Given
    // -----
    // - A linear-location model (4 coefficients) and vectors of length 4
    //   and 3.
    //
    // Expect
    // ------
    // - Round trip preserved for length 4; `CoefLengthMismatch` for 3.
    fn coef_partition_round_trips() {
        // Arrange
        let mut model = trend_model();
        let coef = array![1.0, 0.5, 0.2, -0.1];

        // Act
        model.set_coef(&coef).expect("matching layout");

        // Assert
        assert_eq!(model.coef().expect("fitted"), coef);
        match model.set_coef(&array![1.0, 0.5, 0.2]) {
            Err(NsError::CoefLengthMismatch { expected: 4, actual: 3 }) => (),
            other => panic!("expected CoefLengthMismatch, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a rejected `set_coef` leaves the model untouched: a non-finite
    // entry late in the vector must not overwrite the earlier specs before
    // the error surfaces.
    //
    // Given
    // -----
    // - A linear-location model holding coefficients, then a candidate
    //   vector with NaN in the shape slot.
    //
    // Expect
    // ------
    // - `NonFiniteData` at flat index 3 and the stored coefficients
    //   unchanged.
    fn rejected_set_coef_leaves_coefficients_intact() {
        // Arrange
        let mut model = trend_model();
        let original = array![1.0, 0.5, 0.2, -0.1];
        model.set_coef(&original).expect("matching layout");

        // Act
        let result = model.set_coef(&array![2.0, 0.7, 0.4, f64::NAN]);

        // Assert
        match result {
            Err(NsError::NonFiniteData { index: 3, value }) => assert!(value.is_nan()),
            other => panic!("expected NonFiniteData, got {other:?}"),
        }
        assert_eq!(model.coef().expect("still fitted"), original);
    }

    #[test]
    // Purpose
    // -------
    // Check the likelihood against a direct sum of stationary `ln_pdf`
    // values for known coefficients.
    //
    // Given
    // -----
    // - A stationary model with θ = [0.5, ln 2, 0.1] and three
    //   observations.
    //
    // Expect
    // ------
    // - `value` equals Σ ln_pdf under GEV(0.5, 2, 0.1) within 1e-12.
    fn value_matches_stationary_sum() {
        // Arrange
        let model = stationary_model();
        let theta = array![0.5, 2.0_f64.ln(), 0.1];
        let data = FitData { y: array![0.3, 1.2, 4.0], x: array![0.0, 0.0, 0.0] };
        let gev = Gev::new(0.5, 2.0, 0.1).expect("valid parameters");
        let expected: f64 = data.y.iter().map(|&yi| gev.ln_pdf(yi)).sum();

        // Act
        let ll = model.value(&theta, &data).expect("valid candidate");

        // Assert
        assert_abs_diff_eq!(ll, expected, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a candidate that places an observation outside the support
    // returns the finite penalty instead of −∞ or an error.
    //
    // Given
    // -----
    // - θ with shape 1.0 and an observation below μ − σ/ξ.
    //
    // Expect
    // ------
    // - `value` returns exactly `LOGLIK_PENALTY`.
    fn value_penalizes_out_of_support() {
        // Arrange
        let model = stationary_model();
        let theta = array![0.0, 0.0, 1.0];
        // lower endpoint is μ − σ/ξ = −1; −5 is outside
        let data = FitData { y: array![-5.0], x: array![0.0] };

        // Act
        let ll = model.value(&theta, &data).expect("penalty, not error");

        // Assert
        assert_eq!(ll, LOGLIK_PENALTY);
    }

    #[test]
    // Purpose
    // -------
    // Verify that evaluation is gated on both covariate and fit state.
    //
    // Given
    // -----
    // - A fresh model; then one with a covariate but no coefficients.
    //
    // Expect
    // ------
    // - `CovariateNotSet` first, `ModelNotFitted` second.
    fn evaluation_is_gated_on_state() {
        // Arrange
        let mut model = stationary_model();
        let t = array![0.0, 1.0];

        // Act & Assert
        match model.loct(&t) {
            Err(NsError::CovariateNotSet) => (),
            other => panic!("expected CovariateNotSet, got {other:?}"),
        }
        model
            .set_covariable(array![0.0, 1.0], array![0.0, 1.0])
            .expect("valid covariate");
        match model.loct(&t) {
            Err(NsError::ModelNotFitted) => (),
            other => panic!("expected ModelNotFitted, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Confirm that the moment-based start is in-support: the seeded θ₀
    // yields a finite likelihood (not the penalty) on the data that
    // produced it.
    //
    // Given
    // -----
    // - 20 spread-out observations and the trend model.
    //
    // Expect
    // ------
    // - `value(θ₀)` is finite and strictly above `LOGLIK_PENALTY`.
    fn initial_theta_is_in_support() {
        // Arrange
        let model = trend_model();
        let y = Array1::from_shape_fn(20, |i| -8.0 + 0.9 * i as f64);
        let x = Array1::from_shape_fn(20, |i| i as f64);

        // Act
        let theta0 = model.initial_theta(&y).expect("moment start");
        let ll = model
            .value(&theta0, &FitData { y, x })
            .expect("valid candidate");

        // Assert
        assert!(ll.is_finite() && ll > LOGLIK_PENALTY, "got {ll}");
    }
}
