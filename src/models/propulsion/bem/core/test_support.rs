//! Shared fixtures for solver tests.
//!
//! The rotor here is a Graupner 6x3 slow-flyer propeller (6 in diameter,
//! 3 in pitch) with an analytic airfoil fit, a geometry with published QPROP
//! results to compare against.

use std::f64::consts::PI;

use std::sync::Arc;

use uom::si::{
    angle::degree,
    angular_velocity::radian_per_second,
    f64::{Angle, AngularVelocity, Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use super::{
    airfoil::{Airfoil, AnalyticPolar},
    conditions::Atmosphere,
    geometry::{Rotor, Section},
};

/// Analytic fit of the Graupner 6x3 blade airfoil.
pub(crate) fn graupner_airfoil() -> Airfoil {
    AnalyticPolar {
        cl0: 0.50,
        cl_alpha: 5.8,
        cl_min: -0.3,
        cl_max: 1.2,
        cd0: 0.028,
        cd2_upper: 0.050,
        cd2_lower: 0.020,
        cl_cd0: 0.5,
        re_ref: 70_000.0,
        re_exp: -0.7,
    }
    .generate()
}

/// The Graupner 6x3 two-blade rotor, 25 measured stations.
pub(crate) fn graupner_rotor() -> Rotor {
    const RADII: [f64; 25] = [
        0.0202, 0.0225, 0.0248, 0.0271, 0.0293, 0.0316, 0.0339, 0.0362, 0.0385, 0.0408, 0.0431,
        0.0453, 0.0476, 0.0499, 0.0522, 0.0545, 0.0568, 0.0591, 0.0613, 0.0636, 0.0659, 0.0682,
        0.0705, 0.0728, 0.0751,
    ];
    const CHORDS: [f64; 25] = [
        0.0170, 0.0173, 0.0175, 0.0175, 0.0173, 0.0171, 0.0167, 0.0163, 0.0159, 0.0156, 0.0152,
        0.0149, 0.0145, 0.0141, 0.0137, 0.0132, 0.0127, 0.0122, 0.0117, 0.0111, 0.0106, 0.0100,
        0.0091, 0.0078, 0.0060,
    ];
    const TWISTS_DEG: [f64; 25] = [
        26.3800, 24.311, 22.471, 20.856, 19.442, 18.191, 17.065, 16.026, 15.037, 14.071, 13.130,
        12.219, 11.344, 10.511, 9.7260, 8.9880, 8.2960, 7.6470, 7.0390, 6.4690, 5.9370, 5.4490,
        5.0140, 4.6380, 4.3290,
    ];

    let airfoil = Arc::new(graupner_airfoil());
    let sections: Vec<Section> = RADII
        .iter()
        .zip(&CHORDS)
        .zip(&TWISTS_DEG)
        .map(|((&r, &c), &beta)| {
            Section::new(
                Length::new::<meter>(r),
                Length::new::<meter>(c),
                Angle::new::<degree>(beta),
                Arc::clone(&airfoil),
            )
            .unwrap()
        })
        .collect();

    // The blade extends half an element width past the outermost measured
    // station, so the diameter is derived from the station spacing rather
    // than taken as the nominal 6 in.
    let tip_width = RADII[24] - RADII[23];
    let diameter = 2.0 * (RADII[24] + 0.5 * tip_width);

    Rotor::new(Length::new::<meter>(diameter), 2, sections).unwrap()
}

/// Shaft speed of the published static test point, 14020 rpm.
pub(crate) fn graupner_angular_velocity() -> AngularVelocity {
    AngularVelocity::new::<radian_per_second>(14_020.0 * PI / 30.0)
}

/// Sea-level air with the compressibility correction disabled, matching the
/// incompressible reference run.
pub(crate) fn incompressible_air() -> Atmosphere {
    let default = Atmosphere::default();
    Atmosphere::new(
        default.density(),
        default.dynamic_viscosity(),
        Velocity::new::<meter_per_second>(0.0),
    )
    .unwrap()
}
