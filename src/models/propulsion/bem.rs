//! Blade-element momentum propeller and rotor performance.
//!
//! [`PropellerBem`] binds a validated [`Rotor`] to an [`Atmosphere`] and
//! solver settings, and implements [`twine_core::Model`] over an
//! [`OperatingPoint`]. The computational core is in the internal [`core`]
//! module; its value types are re-exported here.

pub(crate) mod core;

pub use self::core::{
    AeroCoefficients, Airfoil, AirfoilLibrary, AnalyticPolar, Atmosphere, GeometryError,
    GivenThrustConfig, GivenThrustError, OperatingPoint, Polar, PolarError, PolarPoint, Rotor,
    RotorPerformance, Section, SolveError, SolverConfig, StationPerformance, XfoilImportError,
    import_xfoil_polar, import_xfoil_polars,
};

use twine_core::Model;
use uom::si::f64::{AngularVelocity, Force, Velocity};

use crate::support::constraint::{Constrained, NonNegative};

/// A rotor bound to its atmosphere and solver settings.
///
/// Construct once, then evaluate many operating points; the rotor and polar
/// tables are borrowed read-only by each solve.
#[derive(Debug, Clone)]
pub struct PropellerBem {
    rotor: Rotor,
    atmosphere: Atmosphere,
    config: SolverConfig,
}

impl PropellerBem {
    /// Builds a model from a rotor, an atmosphere, and solver settings.
    #[must_use]
    pub fn new(rotor: Rotor, atmosphere: Atmosphere, config: SolverConfig) -> Self {
        Self {
            rotor,
            atmosphere,
            config,
        }
    }

    /// The rotor under analysis.
    #[must_use]
    pub fn rotor(&self) -> &Rotor {
        &self.rotor
    }

    /// Solves one operating point.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if a station's circulation residual cannot
    /// be bracketed.
    pub fn solve(&self, operating: &OperatingPoint) -> Result<RotorPerformance, SolveError> {
        self::core::solve(&self.rotor, operating, &self.atmosphere, &self.config)
    }

    /// Finds the shaft speed that produces a target thrust at a given
    /// freestream, and returns the performance there.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenThrustError`] if the shaft speed bracket does not
    /// straddle the target or the iteration limit is reached.
    pub fn solve_for_thrust(
        &self,
        freestream: Velocity,
        target_thrust: Constrained<Force, NonNegative>,
        speed_bracket: [AngularVelocity; 2],
        config: GivenThrustConfig,
    ) -> Result<RotorPerformance, GivenThrustError> {
        self::core::given_thrust(
            &self.rotor,
            freestream,
            target_thrust,
            speed_bracket,
            &self.atmosphere,
            &self.config,
            config,
        )
    }
}

impl Model for PropellerBem {
    type Input = OperatingPoint;
    type Output = RotorPerformance;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
