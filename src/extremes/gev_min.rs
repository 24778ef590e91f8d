//! extremes::gev_min — minimum-oriented GEV model for cold and low extremes.
//!
//! Purpose
//! -------
//! Expose block-minimum fitting and evaluation without a second likelihood:
//! if `Y` collects block minima, then `−Y` collects block maxima, so every
//! operation delegates to an inner maximum-oriented [`NsGevModel`] on the
//! negated data and maps the answer back.
//!
//! Key behaviors
//! -------------
//! - `fit` negates both the observations and the per-observation covariate
//!   before delegating, so a warming trend in minima appears to the inner
//!   engine as the mirrored trend in maxima.
//! - Reported parameters are in the minimum convention: `loc` and `shape`
//!   are the negated engine values, `scale` passes through. With the
//!   reported parameters the minimum law reads
//!   `F(y) = 1 − exp(−[1 + ξ(y−μ)/σ]^{1/ξ})`, so a reported `shape > 0`
//!   bounds the support below at `μ − σ/ξ`.
//! - Distribution queries swap tails: the CDF of a minimum law is the
//!   survival function of the mirrored maximum law, quantiles negate and
//!   swap levels, and the support endpoints negate and swap roles.
//! - `kstest` standardizes the observations into the engine's maximum
//!   frame and tests them against the unit GEV with the engine shape,
//!   assuming the shape is constant over the query times.
//!
//! Conventions
//! -----------
//! - `coef` and `set_coef` pass the *engine* (maximum-frame) coefficients
//!   through unchanged; only the evaluated parameter series are reported
//!   in the minimum convention.

use ndarray::Array1;
use rand::Rng;

use crate::{
    extremes::{
        errors::{NsError, NsResult},
        gev::Gev,
        link::Link,
        mcmc::{BayesianDraws, McmcOptions, Prior},
        model::NsGevModel,
        params::{ParamDesign, ParamName, ParameterSpec},
    },
    optimization::loglik_optimizer::MLEOptions,
    statistical_tests::kolmogorov_smirnov::KsOutcome,
};

/// Non-stationary GEV model for block minima.
///
/// Thin sign-flip adapter over a maximum-oriented [`NsGevModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct GevMin {
    inner: NsGevModel,
}

impl GevMin {
    /// Build a minimum-oriented model with the default links:
    /// identity for location and shape, exponential for scale.
    pub fn new(
        loc_design: ParamDesign, scale_design: ParamDesign, shape_design: ParamDesign,
    ) -> Self {
        Self::with_links(
            loc_design,
            Link::Identity,
            scale_design,
            Link::Exponential,
            shape_design,
            Link::Identity,
        )
    }

    /// Build a minimum-oriented model with explicit links per parameter.
    pub fn with_links(
        loc_design: ParamDesign, loc_link: Link, scale_design: ParamDesign, scale_link: Link,
        shape_design: ParamDesign, shape_link: Link,
    ) -> Self {
        Self {
            inner: NsGevModel::new(
                ParameterSpec::new(ParamName::Loc, loc_design, loc_link),
                ParameterSpec::new(ParamName::Scale, scale_design, scale_link),
                ParameterSpec::new(ParamName::Shape, shape_design, shape_link),
            ),
        }
    }

    /// The inner maximum-oriented engine.
    pub fn inner(&self) -> &NsGevModel {
        &self.inner
    }

    /// Total number of engine coefficients.
    pub fn n_coef(&self) -> usize {
        self.inner.n_coef()
    }

    /// Engine (maximum-frame) coefficient vector, `(loc, scale, shape)`
    /// order.
    pub fn coef(&self) -> NsResult<Array1<f64>> {
        self.inner.coef()
    }

    /// Store an engine coefficient vector directly.
    pub fn set_coef(&mut self, coef: &Array1<f64>) -> NsResult<()> {
        self.inner.set_coef(coef)
    }

    /// Store the covariate used by the evaluation accessors.
    ///
    /// The values are negated into the engine frame; the time axis is
    /// shared.
    pub fn set_covariable(&mut self, x: Array1<f64>, t: Array1<f64>) -> NsResult<()> {
        self.inner.set_covariable(x.mapv(|v| -v), t)
    }

    /// Fit to block minima by maximum likelihood with default options.
    pub fn fit(&mut self, y: &Array1<f64>, x: &Array1<f64>) -> NsResult<()> {
        self.fit_with_options(y, x, &MLEOptions::default())
    }

    /// Fit to block minima with explicit optimizer options.
    ///
    /// Both the observations and the covariate are negated, so the engine
    /// sees the mirrored maximum problem.
    pub fn fit_with_options(
        &mut self, y: &Array1<f64>, x: &Array1<f64>, opts: &MLEOptions,
    ) -> NsResult<()> {
        self.inner
            .fit_with_options(&y.mapv(|v| -v), &x.mapv(|v| -v), opts)
    }

    /// Posterior draws of the engine coefficients by random-walk
    /// Metropolis, on the mirrored maximum problem.
    pub fn drawn_bayesian(
        &self, y: &Array1<f64>, x: &Array1<f64>, n_mcmc_drawn: usize, prior: &Prior,
        min_rate_accept: f64, options: &McmcOptions,
    ) -> NsResult<BayesianDraws> {
        self.inner.drawn_bayesian(
            &y.mapv(|v| -v),
            &x.mapv(|v| -v),
            n_mcmc_drawn,
            prior,
            min_rate_accept,
            options,
        )
    }

    /// Location parameter (minimum convention) at each query time.
    pub fn loct(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        Ok(self.inner.loct(t)?.mapv(|v| -v))
    }

    /// Scale parameter at each query time.
    pub fn scalet(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.inner.scalet(t)
    }

    /// Shape parameter (minimum convention) at each query time.
    ///
    /// Positive values indicate a heavy lower tail.
    pub fn shapet(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        Ok(self.inner.shapet(t)?.mapv(|v| -v))
    }

    /// Draw one block minimum per query time.
    pub fn rvs<R: Rng + ?Sized>(&self, t: &Array1<f64>, rng: &mut R) -> NsResult<Array1<f64>> {
        Ok(self.inner.rvs(t, rng)?.mapv(|v| -v))
    }

    /// Pointwise CDF of the minimum law: `P(Y ≤ y[i]; t[i])`.
    ///
    /// `P(Y ≤ y) = P(−Y ≥ −y)`, the survival function of the mirrored
    /// maximum law.
    pub fn cdf(&self, y: &Array1<f64>, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.inner.sf(&y.mapv(|v| -v), t)
    }

    /// Pointwise survival function of the minimum law.
    pub fn sf(&self, y: &Array1<f64>, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        self.inner.cdf(&y.mapv(|v| -v), t)
    }

    /// Quantile of level `q` at each query time.
    pub fn icdf(&self, q: f64, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        Ok(self.inner.isf(q, t)?.mapv(|v| -v))
    }

    /// Lower-tail exceedance quantile: the value below which mass `p`
    /// does *not* fall.
    pub fn isf(&self, p: f64, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        Ok(self.inner.icdf(p, t)?.mapv(|v| -v))
    }

    /// Mean at each query time.
    pub fn meant(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        Ok(self.inner.meant(t)?.mapv(|v| -v))
    }

    /// Median at each query time.
    pub fn mediant(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        Ok(self.inner.mediant(t)?.mapv(|v| -v))
    }

    /// Lower support endpoint at each query time.
    ///
    /// The negation swaps endpoint roles: this is the negated *upper*
    /// endpoint of the mirrored maximum law.
    pub fn lower_boundt(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        Ok(self.inner.upper_boundt(t)?.mapv(|v| -v))
    }

    /// Upper support endpoint at each query time.
    pub fn upper_boundt(&self, t: &Array1<f64>) -> NsResult<Array1<f64>> {
        Ok(self.inner.lower_boundt(t)?.mapv(|v| -v))
    }

    /// One-sample Kolmogorov-Smirnov goodness-of-fit test.
    ///
    /// Observations are standardized into the engine frame,
    /// `z[i] = −(y[i] − loc(t[i])) / scale(t[i])`, and tested against the
    /// unit maximum GEV with the engine shape. The shape is taken from the
    /// first query time, so the test assumes a constant shape design.
    pub fn kstest(&self, y: &Array1<f64>, t: &Array1<f64>) -> NsResult<KsOutcome> {
        if y.len() != t.len() {
            return Err(NsError::LengthMismatch { left: y.len(), right: t.len() });
        }
        let loc = self.loct(t)?;
        let scale = self.scalet(t)?;
        let shape = self.shapet(t)?;
        let mut z = Vec::with_capacity(y.len());
        for index in 0..y.len() {
            z.push(-(y[index] - loc[index]) / scale[index]);
        }
        // engine shape is the negated reported shape
        let unit = Gev::new(0.0, 1.0, -shape[0])?;
        let outcome = KsOutcome::one_sample(&z, |value| unit.cdf(value))?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The sign conventions of the reported parameter series.
    // - Tail swapping in `cdf`/`sf` and quantile negation in `icdf`/`isf`.
    // - Support-endpoint negation and role swap.
    //
    // They intentionally DO NOT cover:
    // - Fitting and MCMC on minima, exercised by the integration suite.
    // -------------------------------------------------------------------------

    /// Minimum-law model with engine coefficients chosen so that the
    /// reported parameters are loc = 10, scale = 2, shape = 0.1,
    /// constant over time.
    fn frozen_min_model() -> GevMin {
        let mut model = GevMin::new(
            ParamDesign::Constant,
            ParamDesign::Constant,
            ParamDesign::Constant,
        );
        model
            .set_coef(&array![-10.0, 2.0_f64.ln(), -0.1])
            .expect("matching layout");
        model
            .set_covariable(array![0.0, 1.0], array![0.0, 1.0])
            .expect("valid covariate");
        model
    }

    #[test]
    // Purpose
    // -------
    // Verify the reporting convention: engine coefficients
    // (−10, ln 2, −0.1) surface as minimum-law parameters (10, 2, 0.1).
    //
    // Given
    // -----
    // - The frozen constant model above.
    //
    // Expect
    // ------
    // - loct = 10, scalet = 2, shapet = 0.1 at every query time.
    fn reported_parameters_flip_sign() {
        // Arrange
        let model = frozen_min_model();
        let t = array![0.0, 0.5, 1.0];

        // Act
        let loc = model.loct(&t).expect("fitted model");
        let scale = model.scalet(&t).expect("fitted model");
        let shape = model.shapet(&t).expect("fitted model");

        // Assert
        for index in 0..t.len() {
            assert_abs_diff_eq!(loc[index], 10.0, epsilon = 1e-12);
            assert_abs_diff_eq!(scale[index], 2.0, epsilon = 1e-12);
            assert_abs_diff_eq!(shape[index], 0.1, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the reflection identity against the stationary maximum law:
    // F_min(y; μ, σ, ξ) = 1 − F_max(−y; −μ, σ, −ξ).
    //
    // Given
    // -----
    // - The frozen model and a direct `Gev` with the mirrored parameters.
    //
    // Expect
    // ------
    // - `cdf` matches `1 − F_max(−y)` and `sf` matches `F_max(−y)` at
    //   five points spanning the support, from just above the lower
    //   endpoint (−10) into the upper tail.
    fn cdf_matches_reflected_maximum_law() {
        // Arrange
        let model = frozen_min_model();
        let mirrored = Gev::new(-10.0, 2.0, -0.1).expect("valid parameters");
        let y = array![-9.9, 4.0, 8.0, 10.0, 13.0];
        let t = array![0.0, 0.0, 0.0, 0.0, 0.0];

        // Act
        let cdf = model.cdf(&y, &t).expect("fitted model");
        let sf = model.sf(&y, &t).expect("fitted model");

        // Assert
        for index in 0..y.len() {
            assert_abs_diff_eq!(cdf[index], mirrored.sf(-y[index]), epsilon = 1e-12);
            assert_abs_diff_eq!(sf[index], mirrored.cdf(-y[index]), epsilon = 1e-12);
            assert_abs_diff_eq!(cdf[index] + sf[index], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify quantile round trips and monotonicity in the minimum
    // convention.
    //
    // Given
    // -----
    // - The frozen model, levels 0.1 < 0.5 < 0.9 at a single time.
    //
    // Expect
    // ------
    // - `cdf(icdf(q)) = q` for each level and quantiles increase with q.
    fn icdf_round_trips_through_cdf() {
        // Arrange
        let model = frozen_min_model();
        let t = array![0.0];
        let levels = [0.1, 0.5, 0.9];

        // Act & Assert
        let mut previous = f64::NEG_INFINITY;
        for &q in &levels {
            let quantile = model.icdf(q, &t).expect("fitted model");
            let level = model
                .cdf(&quantile, &t)
                .expect("fitted model");
            assert_abs_diff_eq!(level[0], q, epsilon = 1e-10);
            assert!(quantile[0] > previous, "quantiles must increase with q");
            previous = quantile[0];
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the support-endpoint role swap across the sign of the shape:
    // a reported shape > 0 bounds the minimum law below at μ − σ/ξ, a
    // reported shape < 0 bounds it above, and the Gumbel limit leaves
    // both ends infinite.
    //
    // Given
    // -----
    // - The frozen model with reported (10, 2, 0.1), plus the same
    //   layout reconfigured for reported shapes −0.1 and 0.
    //
    // Expect
    // ------
    // - shape 0.1: lower = μ − σ/ξ = −10, upper = +∞.
    // - shape −0.1: lower = −∞, upper = μ − σ/ξ = 30.
    // - shape 0: lower = −∞, upper = +∞.
    fn support_endpoints_swap_roles() {
        // Arrange
        let model = frozen_min_model();
        let t = array![0.0];

        // Act
        let lower = model.lower_boundt(&t).expect("fitted model");
        let upper = model.upper_boundt(&t).expect("fitted model");

        // Assert
        assert_abs_diff_eq!(lower[0], -10.0, epsilon = 1e-10);
        assert_eq!(upper[0], f64::INFINITY);

        // Arrange: reported shape −0.1 (engine shape +0.1)
        let mut negative = frozen_min_model();
        negative
            .set_coef(&array![-10.0, 2.0_f64.ln(), 0.1])
            .expect("matching layout");

        // Act
        let lower = negative.lower_boundt(&t).expect("fitted model");
        let upper = negative.upper_boundt(&t).expect("fitted model");

        // Assert
        assert_eq!(lower[0], f64::NEG_INFINITY);
        assert_abs_diff_eq!(upper[0], 30.0, epsilon = 1e-10);

        // Arrange: reported shape 0 (Gumbel limit)
        let mut gumbel = frozen_min_model();
        gumbel
            .set_coef(&array![-10.0, 2.0_f64.ln(), 0.0])
            .expect("matching layout");

        // Act
        let lower = gumbel.lower_boundt(&t).expect("fitted model");
        let upper = gumbel.upper_boundt(&t).expect("fitted model");

        // Assert
        assert_eq!(lower[0], f64::NEG_INFINITY);
        assert_eq!(upper[0], f64::INFINITY);
    }
}
