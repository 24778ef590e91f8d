//! statistical_tests::kolmogorov_smirnov — one-sample goodness-of-fit test.
//!
//! Purpose
//! -------
//! Implement the one-sample Kolmogorov-Smirnov test against an arbitrary
//! continuous reference CDF, supplied as a closure. The extremes layer
//! uses it to check standardized block extremes against the unit GEV law
//! implied by a fitted model.
//!
//! Key behaviors
//! -------------
//! - Compute the two-sided statistic
//!   `D = max_i max(i/n − F(x_(i)), F(x_(i)) − (i−1)/n)` over the sorted
//!   sample.
//! - Approximate the p-value with the Kolmogorov asymptotic series on the
//!   effective statistic `λ = (√n + 0.12 + 0.11/√n)·D`, which keeps the
//!   approximation usable at moderate sample sizes.
//! - Validate the sample via [`validate_sample`] and the reference CDF
//!   pointwise: any value outside `[0, 1]` is a [`KsError::InvalidCdfValue`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The reference CDF is assumed continuous; ties in the sample are
//!   tolerated but make the test conservative.
//! - The returned p-value is clamped to `[0, 1]`; the alternating series
//!   can overshoot slightly for tiny `λ`.
//!
//! Downstream usage
//! ----------------
//! - Typical callers freeze a parametric law and pass its CDF:
//!
//!   ```rust
//!   use rust_extremes::statistical_tests::KsOutcome;
//!
//!   let sample = vec![0.1_f64, 0.4, 0.7, 0.9];
//!   let outcome = KsOutcome::one_sample(&sample, |x| x.clamp(0.0, 1.0))?;
//!   assert!(outcome.p_value > 0.05);
//!   # Ok::<(), rust_extremes::statistical_tests::KsError>(())
//!   ```

use crate::statistical_tests::{
    errors::{KsError, KsResult},
    validation::validate_sample,
};

/// Number of terms retained in the Kolmogorov asymptotic series. The
/// terms decay like `exp(−2k²λ²)`, so the tail beyond this is far below
/// f64 resolution for any λ that matters.
const SERIES_TERMS: usize = 100;

/// Result of a one-sample Kolmogorov-Smirnov test.
///
/// Fields
/// ------
/// - `stat`: the two-sided KS statistic `D ∈ [0, 1]`.
/// - `p_value`: asymptotic two-sided p-value in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct KsOutcome {
    pub stat: f64,
    pub p_value: f64,
}

impl KsOutcome {
    /// Run the one-sample KS test of `data` against the reference CDF.
    ///
    /// Parameters
    /// ----------
    /// - `data`: sample of finite observations, in any order.
    /// - `cdf`: reference CDF, evaluated pointwise at each observation.
    ///
    /// Errors
    /// ------
    /// - [`KsError::EmptySample`] / [`KsError::InvalidData`] from sample
    ///   validation.
    /// - [`KsError::InvalidCdfValue`] if the reference CDF returns a
    ///   non-finite value or one outside `[0, 1]`.
    pub fn one_sample<F>(data: &[f64], cdf: F) -> KsResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        validate_sample(data)?;

        let mut sorted = data.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        let n = sorted.len() as f64;
        let mut stat: f64 = 0.0;
        for (rank, &value) in sorted.iter().enumerate() {
            let f = cdf(value);
            if !f.is_finite() || !(0.0..=1.0).contains(&f) {
                return Err(KsError::InvalidCdfValue(f));
            }
            let upper = (rank + 1) as f64 / n - f;
            let lower = f - rank as f64 / n;
            stat = stat.max(upper).max(lower);
        }

        Ok(Self { stat, p_value: kolmogorov_p_value(n, stat) })
    }
}

/// Asymptotic two-sided p-value from the Kolmogorov series,
/// `p = 2 Σ_{k≥1} (−1)^{k−1} exp(−2 k² λ²)`, with the finite-sample
/// adjustment `λ = (√n + 0.12 + 0.11/√n)·D`.
fn kolmogorov_p_value(n: f64, stat: f64) -> f64 {
    let sqrt_n = n.sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * stat;
    if lambda <= 0.0 {
        return 1.0;
    }
    let mut sum = 0.0;
    let mut sign = 1.0;
    for k in 1..=SERIES_TERMS {
        let k = k as f64;
        let term = (-2.0 * k * k * lambda * lambda).exp();
        sum += sign * term;
        sign = -sign;
        if term < f64::EPSILON {
            break;
        }
    }
    (2.0 * sum).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The statistic on a hand-computable sample against the uniform CDF.
    // - p-value behavior for well-fitting and badly-fitting samples.
    // - Rejection of out-of-range reference CDF values.
    //
    // They intentionally DO NOT cover:
    // - GEV-specific usage, exercised by the extremes integration suite.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the statistic against a hand computation on a 4-point
    // sample under the uniform reference CDF.
    //
    // Given
    // -----
    // - Sorted sample [0.1, 0.4, 0.7, 0.9], F(x) = x on [0, 1].
    //
    // Expect
    // ------
    // - D = max over ranks of max(i/n − xᵢ, xᵢ − (i−1)/n) = 0.2.
    fn one_sample_statistic_matches_hand_computation() {
        // Arrange
        let data = vec![0.1_f64, 0.4, 0.7, 0.9];

        // Act
        let outcome = KsOutcome::one_sample(&data, |x| x).expect("valid input");

        // Assert
        assert!(
            (outcome.stat - 0.2).abs() < 1e-12,
            "expected D = 0.2, got {}",
            outcome.stat
        );
    }

    #[test]
    // Purpose
    // -------
    // Check that evenly spread uniform data is not rejected while data
    // concentrated far into one tail is.
    //
    // Given
    // -----
    // - 20 evenly spaced points in (0, 1) versus 20 points packed into
    //   (0, 0.05), both tested against the uniform CDF.
    //
    // Expect
    // ------
    // - Evenly spread: p > 0.9. Packed: p < 0.01.
    fn p_value_separates_good_and_bad_fits() {
        // Arrange
        let good: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 20.0).collect();
        let bad: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 400.0).collect();

        // Act
        let good_outcome = KsOutcome::one_sample(&good, |x| x).expect("valid input");
        let bad_outcome = KsOutcome::one_sample(&bad, |x| x).expect("valid input");

        // Assert
        assert!(
            good_outcome.p_value > 0.9,
            "expected a high p-value for uniform data, got {}",
            good_outcome.p_value
        );
        assert!(
            bad_outcome.p_value < 0.01,
            "expected a tiny p-value for packed data, got {}",
            bad_outcome.p_value
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure a reference CDF that leaves [0, 1] is rejected with
    // `InvalidCdfValue` rather than silently producing a bogus statistic.
    //
    // Given
    // -----
    // - A CDF closure returning 2.0 everywhere.
    //
    // Expect
    // ------
    // - `Err(KsError::InvalidCdfValue(2.0))`.
    fn one_sample_rejects_out_of_range_cdf() {
        // Arrange
        let data = vec![0.1_f64, 0.4];

        // Act
        let result = KsOutcome::one_sample(&data, |_| 2.0);

        // Assert
        match result {
            Err(KsError::InvalidCdfValue(v)) => assert_eq!(v, 2.0),
            other => panic!("expected InvalidCdfValue, got {other:?}"),
        }
    }
}
