//! Rotor performance records.

use uom::si::f64::{Angle, Force, Length, Ratio, Torque, Velocity};

use crate::support::units::{Circulation, ForcePerLength, TorquePerLength};

/// The converged flow state at one blade station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationPerformance {
    /// Radial position of the station.
    pub radius: Length,

    /// Residual of the circulation balance at the accepted flow angle.
    ///
    /// Within tolerance of zero for converged stations; inspect this (or
    /// [`RotorPerformance::unconverged_stations`]) to judge solution quality.
    pub residual: Circulation,

    /// Momentum-theory circulation at the station.
    pub circulation: Circulation,

    /// Local wake advance ratio.
    pub wake_advance_ratio: Ratio,

    /// Magnitude of the local relative velocity.
    pub relative_velocity: Velocity,

    /// Local inflow angle.
    pub inflow_angle: Angle,

    /// Thrust per unit radius, all blades combined.
    pub thrust_gradient: ForcePerLength,

    /// Torque per unit radius, all blades combined.
    pub torque_gradient: TorquePerLength,
}

/// Integrated rotor performance at one operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct RotorPerformance {
    /// Total thrust.
    pub thrust: Force,

    /// Total shaft torque.
    pub torque: Torque,

    /// Thrust coefficient `CT = T / (ρ n² D⁴)`, with `n` in rev/s.
    pub thrust_coefficient: Ratio,

    /// Torque coefficient `CQ = Q / (ρ n² D⁵)`.
    pub torque_coefficient: Ratio,

    /// Power coefficient `CP = 2π CQ`.
    pub power_coefficient: Ratio,

    /// Advance ratio `J = U∞ / (n D)`.
    pub advance_ratio: Ratio,

    /// Per-station flow states, ordered root to tip.
    pub stations: Vec<StationPerformance>,
}

impl RotorPerformance {
    /// Returns `true` if every station's residual magnitude is within the
    /// tolerance. Stations with NaN residuals count as unconverged.
    #[must_use]
    pub fn is_converged(&self, tolerance: f64) -> bool {
        self.unconverged_stations(tolerance).is_empty()
    }

    /// Indices of stations whose residual magnitude exceeds the tolerance
    /// (or is NaN).
    #[must_use]
    pub fn unconverged_stations(&self, tolerance: f64) -> Vec<usize> {
        self.stations
            .iter()
            .enumerate()
            .filter(|(_, station)| !(station.residual.value.abs() <= tolerance))
            .map(|(index, _)| index)
            .collect()
    }

    /// Propulsive efficiency `η = J · CT / CP`.
    ///
    /// Meaningful only for a forward-flight case; a static case has `J = 0`
    /// and therefore zero efficiency.
    #[must_use]
    pub fn efficiency(&self) -> Ratio {
        self.advance_ratio * self.thrust_coefficient / self.power_coefficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::radian, force::newton, length::meter, ratio::ratio, torque::newton_meter,
        velocity::meter_per_second,
    };

    use crate::support::units::{circulation, force_per_length, torque_per_length};

    fn station(residual: f64) -> StationPerformance {
        StationPerformance {
            radius: Length::new::<meter>(0.05),
            residual: circulation(residual),
            circulation: circulation(0.1),
            wake_advance_ratio: Ratio::new::<ratio>(0.2),
            relative_velocity: Velocity::new::<meter_per_second>(50.0),
            inflow_angle: Angle::new::<radian>(0.1),
            thrust_gradient: force_per_length(40.0),
            torque_gradient: torque_per_length(0.4),
        }
    }

    fn performance(stations: Vec<StationPerformance>) -> RotorPerformance {
        RotorPerformance {
            thrust: Force::new::<newton>(3.0),
            torque: Torque::new::<newton_meter>(0.03),
            thrust_coefficient: Ratio::new::<ratio>(0.12),
            torque_coefficient: Ratio::new::<ratio>(0.01),
            power_coefficient: Ratio::new::<ratio>(0.0628),
            advance_ratio: Ratio::new::<ratio>(0.5),
            stations,
        }
    }

    #[test]
    fn convergence_checks_every_station() {
        let good = performance(vec![station(1e-9), station(-5e-8)]);
        assert!(good.is_converged(1e-6));
        assert!(good.unconverged_stations(1e-6).is_empty());

        let mixed = performance(vec![station(1e-9), station(0.5), station(f64::NAN)]);
        assert!(!mixed.is_converged(1e-6));
        assert_eq!(mixed.unconverged_stations(1e-6), vec![1, 2]);
    }

    #[test]
    fn efficiency_combines_the_coefficients() {
        let performance = performance(vec![]);
        assert_relative_eq!(
            performance.efficiency().get::<ratio>(),
            0.5 * 0.12 / 0.0628,
            epsilon = 1e-12
        );
    }
}
