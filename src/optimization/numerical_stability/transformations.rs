//! Numerical stability utilities.
//!
//! Provides guarded implementations of the exp/ln pair used by the
//! positivity link, following the explicit-cutoff strategy common in
//! numerical libraries: clamp the unconstrained input to a range where
//! `f64` arithmetic stays well-conditioned instead of letting the
//! optimizer wander into overflow territory.
//!
//! # Provided items
//! - [`EXP_CLAMP`]: the symmetric cutoff (default 40.0) applied to the
//!   linear predictor before exponentiation.
//! - [`safe_exp(x)`]: `exp(clamp(x, -EXP_CLAMP, EXP_CLAMP))`, mapping
//!   ℝ → (0, ∞) without overflow or underflow to zero.
//! - [`safe_ln(x)`]: `ln(max(x, f64::MIN_POSITIVE))`, the matching
//!   inverse guard for mapping positive values back to link space.
//!
//! # Rationale
//! Line searches routinely probe points far from the optimum. With a
//! plain `exp` link a single large predictor turns the scale parameter
//! into `+∞`, poisoning the likelihood for the rest of the run; the
//! clamp keeps every probe finite so the search can back off instead.

/// Symmetric clamp applied to the linear predictor before `exp`.
///
/// `exp(40) ≈ 2.35e17` and `exp(-40) ≈ 4.25e-18`, both comfortably inside
/// `f64` range, so clamping at ±40 bounds the link output away from both
/// overflow and a hard zero while leaving any realistic parameter scale
/// untouched.
pub const EXP_CLAMP: f64 = 40.0;

/// Numerically safe exponential: `exp(x)` with `x` clamped to
/// `[-EXP_CLAMP, EXP_CLAMP]`.
///
/// # Parameters
/// - `x`: real input (the linear predictor).
///
/// # Returns
/// - A strictly positive, finite `f64`.
pub fn safe_exp(x: f64) -> f64 {
    x.clamp(-EXP_CLAMP, EXP_CLAMP).exp()
}

/// Numerically safe logarithm on `(0, ∞)`: `ln(x)` with `x` floored at
/// `f64::MIN_POSITIVE`.
///
/// Used when seeding the optimizer: a moment estimate that underflowed to
/// a subnormal (or exact zero after aggressive rounding) still maps to a
/// large-magnitude but finite predictor instead of `-∞`. Callers are
/// responsible for rejecting genuinely non-positive inputs before calling
/// this; the floor is an underflow guard, not domain validation.
///
/// # Parameters
/// - `x`: a positive real.
///
/// # Returns
/// - `ln(x)` as a finite `f64` for any `x > 0`.
pub fn safe_ln(x: f64) -> f64 {
    x.max(f64::MIN_POSITIVE).ln()
}
