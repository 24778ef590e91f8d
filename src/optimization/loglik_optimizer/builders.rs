//! loglik_optimizer::builders — L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the L-BFGS solvers used by the
//! log-likelihood optimizer. These helpers hide Argmin’s generic wiring
//! and apply crate-level options (tolerances, memory size) so that
//! higher-level code can request a configured solver without touching
//! Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Construct L-BFGS solvers with either Hager–Zhang or More–Thuente
//!   line search based on crate-level aliases.
//! - Apply optional gradient and cost-change tolerances from
//!   [`MLEOptions`] via a shared configuration helper.
//! - Leave the initial parameter vector and maximum iterations to the
//!   runner/executor layer, keeping these builders side-effect free.
//!
//! Conventions
//! -----------
//! - [`HagerZhangLS`] and [`MoreThuenteLS`] are the crate’s canonical
//!   line-search aliases; [`LbfgsHagerZhang`] and [`LbfgsMoreThuente`]
//!   pair these with the standard `(Theta, Grad, Cost)` triple.
//! - The L-BFGS memory (`m`) is either provided via `opts.lbfgs_mem` or
//!   defaults to [`DEFAULT_LBFGS_MEM`].
//! - Errors are always reported via [`OptResult`]; the underlying
//!   `argmin::core::Error` values never leak directly across module
//!   boundaries.
//!
//! Testing notes
//! -------------
//! - Unit tests verify propagation of `lbfgs_mem` / `DEFAULT_LBFGS_MEM`
//!   into the builder paths and tolerance application via
//!   [`configure_lbfgs`]; integration tests exercise full solves.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Construct an L-BFGS solver with Hager–Zhang line search.
///
/// Consults `opts.lbfgs_mem` (falling back to [`DEFAULT_LBFGS_MEM`]) and
/// wires any present tolerances from `opts.tols`. Initial parameters and
/// `max_iters` are runtime concerns applied by the runner.
///
/// # Errors
/// `OptError` (via `From<argmin::core::Error>`) if Argmin rejects a
/// tolerance setting.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct an L-BFGS solver with More–Thuente line search.
///
/// Same contract as [`build_optimizer_hager_zhang`], with the
/// More–Thuente line-search strategy.
///
/// # Errors
/// `OptError` (via `From<argmin::core::Error>`) if Argmin rejects a
/// tolerance setting.
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances from [`MLEOptions`] to an L-BFGS solver.
///
/// Generic over the line-search type `L` so both builders (and any future
/// L-BFGS variant) share one tolerance-wiring path. When a tolerance is
/// `None`, the corresponding `with_tolerance_*` method is not called and
/// Argmin’s defaults remain in effect.
///
/// # Errors
/// `OptError` (via `From<argmin::core::Error>`) when `with_tolerance_grad`
/// or `with_tolerance_cost` rejects a value.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}
