//! extremes::gev — stationary generalized extreme-value law (maximum form).
//!
//! Purpose
//! -------
//! Implement the three-parameter GEV in the standard block-maxima
//! convention, `F(x) = exp(−t(x))` with `t(x) = (1 + ξ z)^{−1/ξ}` and
//! `z = (x − μ)/σ`, including the Gumbel limit as `ξ → 0`. This is the
//! frozen pointwise law the non-stationary layer evaluates once per
//! observation or query time.
//!
//! Key behaviors
//! -------------
//! - Validating constructor: `scale > 0` and all parameters finite; a
//!   negative scale reaching this point is a caller bug surfaced as an
//!   error, never clamped.
//! - `cdf`/`sf` saturate to 0/1 outside the support; `ln_pdf` is `−∞`
//!   there; `ppf(0)`/`ppf(1)` return the support endpoints (±∞ where the
//!   support is unbounded).
//! - `mean` uses the Γ closed form with the Euler–Mascheroni branch at
//!   `|ξ| ≤ SHAPE_EPS` and is `+∞` for `ξ ≥ 1`.
//! - `sample` draws by inverse CDF with the uniform clamped away from the
//!   endpoints.
//!
//! Invariants & assumptions
//! ------------------------
//! - The Gumbel branch cutoff `|ξ| ≤ 1e-8` is shared by every method, so
//!   quantities stay mutually consistent across the branch switch.
//! - All methods assume the constructor's validation has run; parameters
//!   are finite with a strictly positive scale.

use rand::Rng;
use statrs::{consts::EULER_MASCHERONI, function::gamma::gamma};

use crate::extremes::errors::{NsError, NsResult};

/// Shape magnitude below which the Gumbel limit is used.
pub const SHAPE_EPS: f64 = 1e-8;

// Inverse-CDF sampling clamps the uniform draw to this open interval.
const U_EPS: f64 = 1e-16;

/// Stationary GEV distribution in the maximum convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gev {
    loc: f64,
    scale: f64,
    shape: f64,
}

impl Gev {
    /// Construct a validated GEV law.
    ///
    /// # Errors
    /// - [`NsError::InvalidScale`] if `scale` is non-finite or ≤ 0.
    /// - [`NsError::InvalidGevParameter`] if `loc` or `shape` is non-finite.
    pub fn new(loc: f64, scale: f64, shape: f64) -> NsResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(NsError::InvalidScale { value: scale });
        }
        if !loc.is_finite() {
            return Err(NsError::InvalidGevParameter { name: "location", value: loc });
        }
        if !shape.is_finite() {
            return Err(NsError::InvalidGevParameter { name: "shape", value: shape });
        }
        Ok(Self { loc, scale, shape })
    }

    /// Location parameter `μ`.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Scale parameter `σ`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape parameter `ξ`.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    fn is_gumbel(&self) -> bool {
        self.shape.abs() <= SHAPE_EPS
    }

    /// Cumulative distribution function `F(x)`.
    ///
    /// Saturates to 0 below a finite lower endpoint and to 1 above a
    /// finite upper endpoint.
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if self.is_gumbel() {
            return (-(-z).exp()).exp();
        }
        let s = 1.0 + self.shape * z;
        if s <= 0.0 {
            return if self.shape > 0.0 { 0.0 } else { 1.0 };
        }
        (-s.powf(-1.0 / self.shape)).exp()
    }

    /// Survival function `1 − F(x)`, computed via `expm1` for precision in
    /// the upper tail.
    pub fn sf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if self.is_gumbel() {
            return -(-(-z).exp()).exp_m1();
        }
        let s = 1.0 + self.shape * z;
        if s <= 0.0 {
            return if self.shape > 0.0 { 1.0 } else { 0.0 };
        }
        -(-s.powf(-1.0 / self.shape)).exp_m1()
    }

    /// Natural log of the density, `−∞` outside the support.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if self.is_gumbel() {
            return -self.scale.ln() - z - (-z).exp();
        }
        let s = 1.0 + self.shape * z;
        if s <= 0.0 {
            return f64::NEG_INFINITY;
        }
        -self.scale.ln() - (1.0 + 1.0 / self.shape) * s.ln() - s.powf(-1.0 / self.shape)
    }

    /// Quantile function (inverse CDF).
    ///
    /// `ppf(0)` and `ppf(1)` return the support endpoints, ±∞ where the
    /// support is unbounded.
    ///
    /// # Errors
    /// [`NsError::InvalidQuantile`] if `q` is outside `[0, 1]` or not
    /// finite.
    pub fn ppf(&self, q: f64) -> NsResult<f64> {
        validate_level(q)?;
        if q == 0.0 {
            return Ok(self.lower_bound());
        }
        if q == 1.0 {
            return Ok(self.upper_bound());
        }
        Ok(self.quantile(q))
    }

    /// Inverse survival function: `isf(p) = ppf(1 − p)`, computed through
    /// `ln_1p` so small exceedance levels keep full precision.
    ///
    /// # Errors
    /// [`NsError::InvalidQuantile`] if `p` is outside `[0, 1]` or not
    /// finite.
    pub fn isf(&self, p: f64) -> NsResult<f64> {
        validate_level(p)?;
        if p == 0.0 {
            return Ok(self.upper_bound());
        }
        if p == 1.0 {
            return Ok(self.lower_bound());
        }
        // w = −ln(1 − p)
        let w = -(-p).ln_1p();
        if self.is_gumbel() {
            return Ok(self.loc - self.scale * w.ln());
        }
        Ok(self.loc + self.scale * (w.powf(-self.shape) - 1.0) / self.shape)
    }

    /// Mean of the law: `μ + σ(Γ(1−ξ) − 1)/ξ`, Euler–Mascheroni branch at
    /// `ξ ≈ 0`, `+∞` for `ξ ≥ 1`.
    pub fn mean(&self) -> f64 {
        if self.is_gumbel() {
            return self.loc + self.scale * EULER_MASCHERONI;
        }
        if self.shape >= 1.0 {
            return f64::INFINITY;
        }
        self.loc + self.scale * (gamma(1.0 - self.shape) - 1.0) / self.shape
    }

    /// Median of the law: `μ + σ((ln 2)^{−ξ} − 1)/ξ` with the `ln ln 2`
    /// Gumbel branch.
    pub fn median(&self) -> f64 {
        if self.is_gumbel() {
            return self.loc - self.scale * std::f64::consts::LN_2.ln();
        }
        self.loc + self.scale * (std::f64::consts::LN_2.powf(-self.shape) - 1.0) / self.shape
    }

    /// Lower support endpoint: `μ − σ/ξ` for `ξ > 0`, `−∞` otherwise.
    pub fn lower_bound(&self) -> f64 {
        if self.shape > SHAPE_EPS {
            self.loc - self.scale / self.shape
        } else {
            f64::NEG_INFINITY
        }
    }

    /// Upper support endpoint: `μ − σ/ξ` for `ξ < 0`, `+∞` otherwise.
    pub fn upper_bound(&self) -> f64 {
        if self.shape < -SHAPE_EPS {
            self.loc - self.scale / self.shape
        } else {
            f64::INFINITY
        }
    }

    /// Draw one variate by inverse-CDF sampling.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        self.quantile(u.clamp(U_EPS, 1.0 - U_EPS))
    }

    // Quantile on the open interval (0, 1); endpoint handling lives in
    // `ppf`/`isf`.
    fn quantile(&self, q: f64) -> f64 {
        let w = -q.ln();
        if self.is_gumbel() {
            return self.loc - self.scale * w.ln();
        }
        self.loc + self.scale * (w.powf(-self.shape) - 1.0) / self.shape
    }
}

fn validate_level(q: f64) -> NsResult<()> {
    if !q.is_finite() || !(0.0..=1.0).contains(&q) {
        return Err(NsError::InvalidQuantile { value: q });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Constructor validation of scale and finiteness.
    // - cdf/ppf round trips across shape signs, including the Gumbel branch.
    // - Saturation and ln_pdf behavior outside the support.
    // - Closed-form mean, median, and support endpoints.
    //
    // They intentionally DO NOT cover:
    // - Mean continuity across ξ → 0 and sampling behavior, exercised by
    //   the integration suite.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure the constructor rejects non-positive or non-finite scales and
    // non-finite locations.
    //
    // Given
    // -----
    // - scale = 0, scale = -1, scale = NaN, loc = ∞.
    //
    // Expect
    // ------
    // - `InvalidScale` for the first three, `InvalidGevParameter` for the
    //   location.
    fn new_rejects_invalid_parameters() {
        // Act & Assert
        for bad_scale in [0.0_f64, -1.0, f64::NAN] {
            match Gev::new(0.0, bad_scale, 0.1) {
                Err(NsError::InvalidScale { .. }) => (),
                other => panic!("expected InvalidScale for scale {bad_scale}, got {other:?}"),
            }
        }
        match Gev::new(f64::INFINITY, 1.0, 0.1) {
            Err(NsError::InvalidGevParameter { name: "location", .. }) => (),
            other => panic!("expected InvalidGevParameter, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the cdf/ppf round trip `cdf(ppf(q)) ≈ q` for positive,
    // negative, and near-zero shapes.
    //
    // Given
    // -----
    // - Shapes {0.4, -0.3, 1e-12} and quantile levels spread over (0, 1).
    //
    // Expect
    // ------
    // - Round trip within 1e-10 everywhere.
    fn cdf_ppf_round_trip_across_shapes() {
        // Arrange
        let levels = [0.01_f64, 0.1, 0.5, 0.9, 0.99];

        // Act & Assert
        for &shape in &[0.4_f64, -0.3, 1e-12] {
            let gev = Gev::new(2.0, 1.5, shape).expect("valid parameters");
            for &q in &levels {
                let x = gev.ppf(q).expect("interior level");
                assert_abs_diff_eq!(gev.cdf(x), q, epsilon = 1e-10);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Check saturation and density behavior outside the support for a
    // heavy-tailed (ξ > 0) law with finite lower endpoint.
    //
    // Given
    // -----
    // - GEV(0, 1, 0.5), lower endpoint μ − σ/ξ = −2.
    //
    // Expect
    // ------
    // - cdf below the endpoint is 0, sf is 1, ln_pdf is −∞; ppf(0) equals
    //   the endpoint and ppf(1) is +∞.
    fn out_of_support_behavior_heavy_tail() {
        // Arrange
        let gev = Gev::new(0.0, 1.0, 0.5).expect("valid parameters");

        // Act & Assert
        assert_eq!(gev.cdf(-3.0), 0.0);
        assert_eq!(gev.sf(-3.0), 1.0);
        assert_eq!(gev.ln_pdf(-3.0), f64::NEG_INFINITY);
        assert_abs_diff_eq!(gev.ppf(0.0).expect("level 0"), -2.0, epsilon = 1e-12);
        assert_eq!(gev.ppf(1.0).expect("level 1"), f64::INFINITY);
    }

    #[test]
    // Purpose
    // -------
    // Verify the Γ closed-form mean and the median formula against
    // hand-computed values.
    //
    // Given
    // -----
    // - GEV(0, 1, 0.5): mean = (Γ(0.5) − 1)/0.5 = 2(√π − 1);
    //   GEV(1, 2, 0) (Gumbel): mean = 1 + 2γ, median = 1 − 2 ln ln 2.
    //
    // Expect
    // ------
    // - Agreement within 1e-10.
    fn mean_and_median_match_closed_forms() {
        // Arrange
        let frechet = Gev::new(0.0, 1.0, 0.5).expect("valid parameters");
        let gumbel = Gev::new(1.0, 2.0, 0.0).expect("valid parameters");

        // Act & Assert
        assert_abs_diff_eq!(
            frechet.mean(),
            2.0 * (std::f64::consts::PI.sqrt() - 1.0),
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(gumbel.mean(), 1.0 + 2.0 * EULER_MASCHERONI, epsilon = 1e-10);
        assert_abs_diff_eq!(
            gumbel.median(),
            1.0 - 2.0 * std::f64::consts::LN_2.ln(),
            epsilon = 1e-10
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the mean diverges for ξ ≥ 1 and the support endpoints follow
    // the sign of the shape.
    //
    // Given
    // -----
    // - GEV(0, 1, 1.2), GEV(0, 1, 0.5), and GEV(0, 1, -0.5).
    //
    // Expect
    // ------
    // - Mean +∞ for ξ = 1.2; bounds (−2, +∞) for ξ = 0.5 and (−∞, 2) for
    //   ξ = −0.5.
    fn mean_divergence_and_support_endpoints() {
        // Arrange
        let very_heavy = Gev::new(0.0, 1.0, 1.2).expect("valid parameters");
        let heavy = Gev::new(0.0, 1.0, 0.5).expect("valid parameters");
        let bounded = Gev::new(0.0, 1.0, -0.5).expect("valid parameters");

        // Act & Assert
        assert_eq!(very_heavy.mean(), f64::INFINITY);
        assert_abs_diff_eq!(heavy.lower_bound(), -2.0, epsilon = 1e-12);
        assert_eq!(heavy.upper_bound(), f64::INFINITY);
        assert_eq!(bounded.lower_bound(), f64::NEG_INFINITY);
        assert_abs_diff_eq!(bounded.upper_bound(), 2.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `isf` agrees with `ppf` through the complement identity on
    // interior levels.
    //
    // Given
    // -----
    // - GEV(1, 2, 0.2) and p ∈ {0.05, 0.5, 0.95}.
    //
    // Expect
    // ------
    // - `isf(p) ≈ ppf(1 − p)` within 1e-9.
    fn isf_matches_complementary_ppf() {
        // Arrange
        let gev = Gev::new(1.0, 2.0, 0.2).expect("valid parameters");

        // Act & Assert
        for &p in &[0.05_f64, 0.5, 0.95] {
            let via_isf = gev.isf(p).expect("interior level");
            let via_ppf = gev.ppf(1.0 - p).expect("interior level");
            assert_abs_diff_eq!(via_isf, via_ppf, epsilon = 1e-9);
        }
    }
}
