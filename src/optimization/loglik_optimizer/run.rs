//! Execution helper that runs an `argmin` solver on a log-likelihood problem and
//! returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        Grad, LogLikelihood, MLEOptions, OptimOutcome, Theta, adapter::CostAdapter,
    },
};
use argmin::core::{Executor, State};

/// Run an `argmin` optimization for a log-likelihood problem.
///
/// This is the shared runner used by both line-search variants. It wires up:
/// - the user model via [`CostAdapter`],
/// - the chosen `Solver` (e.g. L-BFGS with Hager–Zhang/More–Thuente),
/// - initial parameter `theta0`,
/// - optional `max_iters`,
///   then executes the solver and converts the result into [`OptimOutcome`].
///
/// # Type Parameters
/// - `F`: Your log-likelihood type implementing [`LogLikelihood`].
/// - `S`: Any `argmin` solver whose `Problem` is `CostAdapter<'a, F>` and whose
///   `IterState` matches the aliases `Theta` (parameters), `Grad` (gradient),
///   and `f64` as the float type.
///
/// # Arguments
/// - `theta0`: Initial parameter vector. It is **consumed** and set on the optimizer
///   state via `state.param(theta0)`.
/// - `opts`: Optimizer options (tolerances, max iters, etc.).
/// - `problem`: A [`CostAdapter`] wrapping the user’s model and data.
/// - `solver`: A fully constructed solver (e.g. from
///   [`build_optimizer_hager_zhang`](crate::optimization::loglik_optimizer::builders::build_optimizer_hager_zhang)
///   or
///   [`build_optimizer_more_thuente`](crate::optimization::loglik_optimizer::builders::build_optimizer_more_thuente)).
///
/// # Returns
/// An [`OptimOutcome`] containing the best parameter found, best log-likelihood value ℓ(θ̂),
/// termination status, iteration count, function-evaluation counts, and the last
/// available gradient's norm if it can be calculated.
///
/// # Errors
/// - Propagates any `argmin` runtime error (solver errors, line-search
///   failures, etc.) via the crate’s `From<argmin::core::Error>` conversion.
/// - Propagates any validation errors encountered when constructing
///   [`OptimOutcome`].
///
/// # Examples
/// ```ignore
/// let problem = CostAdapter::new(&model, &data);
/// let solver  = build_optimizer_hager_zhang(&opts)?;
/// let out     = run_lbfgs(theta0.clone(), &opts, problem, solver)?;
/// println!("done in {} iters, status: {}", out.iterations, out.status);
/// ```
pub fn run_lbfgs<'a, F, S>(
    theta0: Theta, opts: &MLEOptions, problem: CostAdapter<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
    S: argmin::core::Solver<
            CostAdapter<'a, F>,
            argmin::core::IterState<Theta, Grad, (), (), (), f64>,
        > + Send
        + 'static,
{
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    OptimOutcome::new(
        result.take_best_param(),
        -result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
    )
}
