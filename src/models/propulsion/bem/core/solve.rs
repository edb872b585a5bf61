//! The per-station root find and spanwise aggregation.

mod error;

pub use error::SolveError;

use std::f64::consts::PI;

use uom::si::{
    angle::radian,
    angular_velocity::radian_per_second,
    dynamic_viscosity::pascal_second,
    f64::{Angle, Force, Length, Ratio, Torque, Velocity},
    force::newton,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    torque::newton_meter,
    velocity::meter_per_second,
};

use crate::support::units::{circulation, force_per_length, torque_per_length};

use super::{
    conditions::{Atmosphere, OperatingPoint, SolverConfig},
    geometry::Rotor,
    residual::{StationEnv, StationFlow, circulation_residual},
    results::{RotorPerformance, StationPerformance},
};

/// Solves the circulation balance at every station and integrates the loads.
///
/// Stations are processed root to tip. Each one is bisected to the
/// configured tolerance; a station that exhausts the iteration budget still
/// contributes its last midpoint, and shows up in
/// [`RotorPerformance::unconverged_stations`] rather than as an error.
///
/// # Errors
///
/// Returns [`SolveError::NoSignChange`] if a station's residual has the same
/// sign at both bracket ends. The solve halts there; the stations already
/// solved travel in the error as a partial record.
pub fn solve(
    rotor: &Rotor,
    operating: &OperatingPoint,
    atmosphere: &Atmosphere,
    config: &SolverConfig,
) -> Result<RotorPerformance, SolveError> {
    let u_inf = operating.freestream.get::<meter_per_second>();
    let omega = operating.angular_velocity.get::<radian_per_second>();
    let blades = f64::from(rotor.blades());
    let tip_radius = rotor.tip_radius().get::<meter>();
    let density = atmosphere.density().get::<kilogram_per_cubic_meter>();
    let viscosity = atmosphere.dynamic_viscosity().get::<pascal_second>();
    let speed_of_sound = atmosphere.speed_of_sound().get::<meter_per_second>();

    let bracket = [
        config.bracket[0].get::<radian>(),
        config.bracket[1].get::<radian>(),
    ];
    let widths = rotor.station_widths();

    let mut stations = Vec::with_capacity(rotor.sections().len());
    let mut thrust = 0.0;
    let mut torque = 0.0;

    for (index, section) in rotor.sections().iter().enumerate() {
        let radius = section.radius().get::<meter>();
        let env = StationEnv {
            airfoil: section.airfoil(),
            radius,
            chord: section.chord().get::<meter>(),
            twist: section.twist().get::<radian>(),
            tip_radius,
            blades,
            axial_freestream: u_inf,
            tangential_freestream: omega * radius,
            density,
            viscosity,
            speed_of_sound,
        };

        let Some(flow) = converge_station(&env, bracket, config.tolerance, config.max_iters)
        else {
            let partial = finish(rotor, operating, atmosphere, thrust, torque, stations);
            return Err(SolveError::NoSignChange {
                station: index,
                partial: Box::new(partial),
            });
        };

        let width = widths[index].get::<meter>();
        thrust += blades * flow.thrust_gradient * width;
        torque += blades * flow.torque_gradient * width;
        stations.push(station_record(radius, blades, &flow));
    }

    Ok(finish(rotor, operating, atmosphere, thrust, torque, stations))
}

/// Bisects one station's residual over the flow angle bracket.
///
/// Returns `None` when the endpoint residuals share a sign. A NaN endpoint
/// does not fail the check: the bracket ends sit on singularities of the
/// formulation for many operating points, and bisection walks into the
/// well-defined interior regardless.
fn converge_station(
    env: &StationEnv,
    bracket: [f64; 2],
    tolerance: f64,
    max_iters: usize,
) -> Option<StationFlow> {
    let (mut lo, mut hi) = (bracket[0], bracket[1]);
    let mut residual_lo = circulation_residual(lo, env).residual;
    let residual_hi = circulation_residual(hi, env).residual;
    if residual_lo * residual_hi > 0.0 {
        return None;
    }

    // One midpoint evaluation per iteration, the iteration budget included;
    // the last midpoint's record is returned even when the budget runs out.
    let mut mid = 0.5 * (lo + hi);
    let mut flow = circulation_residual(mid, env);
    for _ in 1..max_iters {
        // Both the residual and the interval must be tight; a flat residual
        // alone says nothing about where the root is.
        if flow.residual.abs() <= tolerance && 0.5 * (hi - lo) <= tolerance {
            break;
        }
        if residual_lo * flow.residual < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            residual_lo = flow.residual;
        }
        mid = 0.5 * (lo + hi);
        flow = circulation_residual(mid, env);
    }
    Some(flow)
}

fn station_record(radius: f64, blades: f64, flow: &StationFlow) -> StationPerformance {
    StationPerformance {
        radius: Length::new::<meter>(radius),
        residual: circulation(flow.residual),
        circulation: circulation(flow.circulation),
        wake_advance_ratio: Ratio::new::<ratio>(flow.wake_advance_ratio),
        relative_velocity: Velocity::new::<meter_per_second>(flow.relative_velocity),
        inflow_angle: Angle::new::<radian>(flow.inflow_angle),
        thrust_gradient: force_per_length(blades * flow.thrust_gradient),
        torque_gradient: torque_per_length(blades * flow.torque_gradient),
    }
}

/// Derives the non-dimensional coefficients and assembles the record.
fn finish(
    rotor: &Rotor,
    operating: &OperatingPoint,
    atmosphere: &Atmosphere,
    thrust: f64,
    torque: f64,
    stations: Vec<StationPerformance>,
) -> RotorPerformance {
    let density = atmosphere.density().get::<kilogram_per_cubic_meter>();
    let diameter = rotor.diameter().get::<meter>();
    let u_inf = operating.freestream.get::<meter_per_second>();

    // Rev-based conventions: n in rev/s.
    let n = operating.angular_velocity.get::<radian_per_second>() / (2.0 * PI);
    let thrust_coefficient = thrust / (density * n * n * diameter.powi(4));
    let torque_coefficient = torque / (density * n * n * diameter.powi(5));

    RotorPerformance {
        thrust: Force::new::<newton>(thrust),
        torque: Torque::new::<newton_meter>(torque),
        thrust_coefficient: Ratio::new::<ratio>(thrust_coefficient),
        torque_coefficient: Ratio::new::<ratio>(torque_coefficient),
        power_coefficient: Ratio::new::<ratio>(2.0 * PI * torque_coefficient),
        advance_ratio: Ratio::new::<ratio>(u_inf / (n * diameter)),
        stations,
    }
}
