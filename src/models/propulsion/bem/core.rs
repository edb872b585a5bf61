//! Blade-element momentum rotor solving.
//!
//! The solver couples blade-element theory with momentum theory: each blade
//! station carries a scalar circulation-balance residual, bisection drives
//! that residual to zero, and the converged station loads integrate into
//! thrust, torque, and the usual non-dimensional coefficients.

mod airfoil;
mod conditions;
mod geometry;
mod given_thrust;
mod residual;
mod results;
mod solve;

#[cfg(test)]
pub(crate) mod test_support;

pub use airfoil::{
    AeroCoefficients, Airfoil, AirfoilLibrary, AnalyticPolar, Polar, PolarError, PolarPoint,
    XfoilImportError, import_xfoil_polar, import_xfoil_polars,
};
pub use conditions::{Atmosphere, OperatingPoint, SolverConfig};
pub use geometry::{GeometryError, Rotor, Section};
pub use given_thrust::{GivenThrustConfig, GivenThrustError, given_thrust};
pub use results::{RotorPerformance, StationPerformance};
pub use solve::{SolveError, solve};
