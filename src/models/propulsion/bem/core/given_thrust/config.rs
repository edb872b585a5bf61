use twine_solvers::equation::bisection;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Force},
    force::newton,
};

/// Solver configuration for iterative thrust matching.
#[derive(Debug, Clone, Copy)]
pub struct GivenThrustConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the shaft speed search variable.
    pub speed_tol: AngularVelocity,

    /// Absolute tolerance for the thrust residual (achieved - target).
    pub thrust_tol: Force,
}

impl Default for GivenThrustConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            speed_tol: AngularVelocity::new::<radian_per_second>(1e-12),
            thrust_tol: Force::new::<newton>(1e-12),
        }
    }
}

impl GivenThrustConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.speed_tol.get::<radian_per_second>(),
            x_rel_tol: 0.0,
            residual_tol: self.thrust_tol.get::<newton>(),
        }
    }
}
