//! Iterative solver for a target thrust.
//!
//! This module provides iterative solving to match a target thrust by
//! varying the shaft speed until the integrated thrust converges to the
//! desired value.

mod config;
mod error;
mod problem;

pub use config::GivenThrustConfig;
pub use error::GivenThrustError;

use twine_solvers::equation::bisection;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Force, Velocity},
    force::newton,
};

use crate::support::constraint::{Constrained, NonNegative};

use super::{
    conditions::{Atmosphere, SolverConfig},
    geometry::Rotor,
    results::RotorPerformance,
};

use problem::{GivenThrustModel, GivenThrustProblem};

/// Solves a rotor for the shaft speed that produces a target thrust.
///
/// Uses bisection over the given shaft speed bracket; thrust grows
/// monotonically with shaft speed for any sensible rotor, so a bracket whose
/// thrusts straddle the target is enough.
///
/// A candidate shaft speed whose rotor solve fails outright is treated as
/// infeasible and bisected away from, not surfaced as an error.
///
/// # Errors
///
/// Returns [`GivenThrustError`] if the bracket does not straddle the target
/// or the solver fails to converge.
pub fn given_thrust(
    rotor: &Rotor,
    freestream: Velocity,
    target_thrust: Constrained<Force, NonNegative>,
    speed_bracket: [AngularVelocity; 2],
    atmosphere: &Atmosphere,
    solver: &SolverConfig,
    config: GivenThrustConfig,
) -> Result<RotorPerformance, GivenThrustError> {
    let target_thrust = target_thrust.into_inner();

    let model = GivenThrustModel::new(rotor, freestream, atmosphere, solver);
    let problem = GivenThrustProblem::new(target_thrust);

    let solution = bisection::solve(
        &model,
        &problem,
        [
            speed_bracket[0].get::<radian_per_second>(),
            speed_bracket[1].get::<radian_per_second>(),
        ],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A candidate shaft speed whose solve fails outright sits outside
            // the feasible band. Guide bisection away by assuming positive
            // residual.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenThrustError::MaxIters {
            residual: Force::new::<newton>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{force::newton, torque::newton_meter, velocity::meter_per_second};

    use crate::models::propulsion::bem::core::{
        conditions::OperatingPoint,
        solve::solve,
        test_support::{graupner_angular_velocity, graupner_rotor, incompressible_air},
    };

    fn speed_bracket() -> [AngularVelocity; 2] {
        [
            AngularVelocity::new::<radian_per_second>(1000.0),
            AngularVelocity::new::<radian_per_second>(2000.0),
        ]
    }

    #[test]
    fn roundtrip() {
        let rotor = graupner_rotor();
        let atmosphere = incompressible_air();
        let solver = SolverConfig {
            max_iters: 200,
            ..SolverConfig::default()
        };
        let freestream = Velocity::new::<meter_per_second>(0.01);

        let baseline = solve(
            &rotor,
            &OperatingPoint {
                freestream,
                angular_velocity: graupner_angular_velocity(),
            },
            &atmosphere,
            &solver,
        )
        .expect("baseline solve should succeed");

        let result = given_thrust(
            &rotor,
            freestream,
            NonNegative::new(baseline.thrust).unwrap(),
            speed_bracket(),
            &atmosphere,
            &solver,
            GivenThrustConfig::default(),
        )
        .expect("thrust solve should succeed");

        assert_relative_eq!(
            result.thrust.get::<newton>(),
            baseline.thrust.get::<newton>(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            result.torque.get::<newton_meter>(),
            baseline.torque.get::<newton_meter>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn unreachable_targets_fail_the_bracket_check() {
        let rotor = graupner_rotor();

        // This rotor makes a few newtons at these speeds, nowhere near 1 kN.
        let result = given_thrust(
            &rotor,
            Velocity::new::<meter_per_second>(0.01),
            NonNegative::new(Force::new::<newton>(1000.0)).unwrap(),
            speed_bracket(),
            &incompressible_air(),
            &SolverConfig {
                max_iters: 200,
                ..SolverConfig::default()
            },
            GivenThrustConfig::default(),
        );

        assert!(matches!(result, Err(GivenThrustError::Bisection(_))));
    }

    #[test]
    fn iteration_limit_is_an_error_here() {
        let rotor = graupner_rotor();

        let result = given_thrust(
            &rotor,
            Velocity::new::<meter_per_second>(0.01),
            NonNegative::new(Force::new::<newton>(3.0)).unwrap(),
            speed_bracket(),
            &incompressible_air(),
            &SolverConfig {
                max_iters: 200,
                ..SolverConfig::default()
            },
            GivenThrustConfig {
                max_iters: 2,
                ..GivenThrustConfig::default()
            },
        );

        assert!(matches!(result, Err(GivenThrustError::MaxIters { .. })));
    }
}
