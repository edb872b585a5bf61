//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, velocity,
//! force). This module provides quantities that are useful for rotor
//! aerodynamics but aren't included in [`uom`]: blade circulation and the
//! spanwise thrust/torque loading gradients.
//!
//! These quantities have no named [`uom`] units, so small constructor
//! functions are provided for building them from SI values; their magnitudes
//! are read back through the public `value` field (SI base units).

mod quantities;

pub use quantities::{Circulation, ForcePerLength, TorquePerLength};

use uom::si::{
    f64::{Force, Length, Torque, Velocity},
    force::newton,
    length::meter,
    torque::newton_meter,
    velocity::meter_per_second,
};

/// Builds a [`Circulation`] from an SI value in m²/s.
#[must_use]
pub fn circulation(value: f64) -> Circulation {
    Velocity::new::<meter_per_second>(value) * Length::new::<meter>(1.0)
}

/// Builds a [`ForcePerLength`] from an SI value in N/m.
#[must_use]
pub fn force_per_length(value: f64) -> ForcePerLength {
    Force::new::<newton>(value) / Length::new::<meter>(1.0)
}

/// Builds a [`TorquePerLength`] from an SI value in N·m/m.
#[must_use]
pub fn torque_per_length(value: f64) -> TorquePerLength {
    Torque::new::<newton_meter>(value) / Length::new::<meter>(1.0)
}
