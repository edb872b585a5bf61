//! Operating conditions, atmosphere, and solver settings.

use std::f64::consts::FRAC_PI_2;

use uom::si::{
    angle::radian,
    dynamic_viscosity::pascal_second,
    f64::{Angle, AngularVelocity, DynamicViscosity, MassDensity, Velocity},
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::support::constraint::{ConstraintResult, NonNegative, StrictlyPositive};

/// The operating point to analyze: freestream speed and shaft speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Axial freestream velocity. Zero for a static (hover) case.
    pub freestream: Velocity,

    /// Rotor angular velocity.
    pub angular_velocity: AngularVelocity,
}

/// The working fluid.
///
/// A zero speed of sound disables the compressibility correction on the
/// lift coefficient, which suits low-speed rotors and incompressible
/// comparisons against other solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    density: MassDensity,
    dynamic_viscosity: DynamicViscosity,
    speed_of_sound: Velocity,
}

impl Atmosphere {
    /// Constructs a validated atmosphere.
    ///
    /// # Errors
    ///
    /// Returns an error if density or viscosity is not strictly positive,
    /// or the speed of sound is negative.
    pub fn new(
        density: MassDensity,
        dynamic_viscosity: DynamicViscosity,
        speed_of_sound: Velocity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            density: StrictlyPositive::new(density)?.into_inner(),
            dynamic_viscosity: StrictlyPositive::new(dynamic_viscosity)?.into_inner(),
            speed_of_sound: NonNegative::new(speed_of_sound)?.into_inner(),
        })
    }

    /// Fluid density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Fluid dynamic viscosity.
    #[must_use]
    pub fn dynamic_viscosity(&self) -> DynamicViscosity {
        self.dynamic_viscosity
    }

    /// Speed of sound; zero disables the compressibility correction.
    #[must_use]
    pub fn speed_of_sound(&self) -> Velocity {
        self.speed_of_sound
    }
}

/// Sea-level standard air.
impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            dynamic_viscosity: DynamicViscosity::new::<pascal_second>(1.81e-5),
            speed_of_sound: Velocity::new::<meter_per_second>(340.0),
        }
    }
}

/// Settings for the per-station circulation balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance on both the residual magnitude and the
    /// half-width of the bisection interval.
    pub tolerance: f64,

    /// Maximum bisection iterations per station.
    pub max_iters: usize,

    /// Search interval for the flow angle parameter.
    ///
    /// The default spans the full physical range. Narrowing it is mainly
    /// useful for exercising failure handling or for speeding up cases whose
    /// roots are known to sit in a small band.
    pub bracket: [Angle; 2],
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iters: 100,
            bracket: [
                Angle::new::<radian>(-FRAC_PI_2),
                Angle::new::<radian>(FRAC_PI_2),
            ],
        }
    }
}
