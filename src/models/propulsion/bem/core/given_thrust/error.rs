use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Force;

/// Errors that can occur while solving for a target thrust.
///
/// A rotor solve that fails at a candidate shaft speed is not an error
/// here: the event callback steers bisection away from the infeasible
/// speed instead.
#[derive(Debug, Error)]
pub enum GivenThrustError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best thrust residual achieved.
        ///
        /// This is the smallest absolute difference between achieved and
        /// target thrust encountered during iteration.
        residual: Force,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
