//! Problem formulation for iterative thrust matching.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Force, Velocity},
    force::newton,
};

use crate::models::propulsion::bem::core::{
    conditions::{Atmosphere, OperatingPoint, SolverConfig},
    geometry::Rotor,
    results::RotorPerformance,
    solve::{SolveError, solve},
};

/// Model adapter for target-based thrust solving.
///
/// Wraps the rotor solver and exposes the shaft speed as the sole input
/// variable to the model.
pub(super) struct GivenThrustModel<'a> {
    rotor: &'a Rotor,
    freestream: Velocity,
    atmosphere: &'a Atmosphere,
    solver: &'a SolverConfig,
}

impl<'a> GivenThrustModel<'a> {
    pub(super) fn new(
        rotor: &'a Rotor,
        freestream: Velocity,
        atmosphere: &'a Atmosphere,
        solver: &'a SolverConfig,
    ) -> Self {
        Self {
            rotor,
            freestream,
            atmosphere,
            solver,
        }
    }
}

impl Model for GivenThrustModel<'_> {
    type Input = AngularVelocity;
    type Output = RotorPerformance;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let operating = OperatingPoint {
            freestream: self.freestream,
            angular_velocity: *input,
        };
        solve(self.rotor, &operating, self.atmosphere, self.solver)
    }
}

/// Equation problem definition for thrust matching.
///
/// Computes the residual as `achieved_thrust - target_thrust`.
pub(super) struct GivenThrustProblem {
    target_thrust: Force,
}

impl GivenThrustProblem {
    pub(super) fn new(target_thrust: Force) -> Self {
        Self { target_thrust }
    }
}

impl EquationProblem<1> for GivenThrustProblem {
    type Input = AngularVelocity;
    type Output = RotorPerformance;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(AngularVelocity::new::<radian_per_second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let thrust = output.thrust.get::<newton>();
        let target = self.target_thrust.get::<newton>();
        Ok([thrust - target])
    }
}
