//! The per-station circulation balance.
//!
//! Each blade station is parameterized by a flow angle `ψ` that blends the
//! freestream and the fully induced limits of the local velocity triangle.
//! For a candidate `ψ` the kernel evaluates the momentum-theory circulation
//! (with Prandtl's tip loss factor) and the blade-element circulation from
//! the airfoil lift, and returns their difference. A root of this residual
//! is a station where momentum and blade loading agree.
//!
//! Everything here works on raw `f64` values in SI units; the typed surface
//! lives one level up.

use std::f64::consts::PI;

use super::airfoil::Airfoil;

/// Constant inputs for one station's residual evaluations.
pub(super) struct StationEnv<'a> {
    pub airfoil: &'a Airfoil,

    /// Station radius, m.
    pub radius: f64,
    /// Station chord, m.
    pub chord: f64,
    /// Station twist from the rotor plane, rad.
    pub twist: f64,
    /// Rotor tip radius, m.
    pub tip_radius: f64,
    /// Blade count.
    pub blades: f64,

    /// Axial freestream velocity, m/s.
    pub axial_freestream: f64,
    /// Tangential blade velocity `Ω r`, m/s.
    pub tangential_freestream: f64,

    /// Fluid density, kg/m³.
    pub density: f64,
    /// Fluid dynamic viscosity, Pa·s.
    pub viscosity: f64,
    /// Speed of sound, m/s; zero disables the Mach correction.
    pub speed_of_sound: f64,
}

/// The flow state at one station for a candidate `ψ`.
#[derive(Debug, Clone, Copy)]
pub(super) struct StationFlow {
    /// Momentum circulation minus blade-element circulation, m²/s.
    pub residual: f64,
    /// Momentum-theory circulation, m²/s.
    pub circulation: f64,
    /// Local relative velocity magnitude `W`, m/s.
    pub relative_velocity: f64,
    /// Local inflow angle `φ = atan(Wa / Wt)`, rad.
    pub inflow_angle: f64,
    /// Local wake advance ratio `λ_w`.
    pub wake_advance_ratio: f64,
    /// Axial induced velocity `v_a`, m/s.
    pub axial_induced: f64,
    /// Tangential induced velocity `v_t`, m/s.
    pub tangential_induced: f64,
    /// Thrust per unit radius for one blade, N/m.
    pub thrust_gradient: f64,
    /// Torque per unit radius for one blade, N·m/m.
    pub torque_gradient: f64,
}

/// Evaluates the circulation balance at one station for a candidate `ψ`.
///
/// Near the bracket ends the tip loss factor can leave its domain and the
/// residual comes back NaN; the bisection layer treats NaN endpoints as a
/// usable (non-excluding) bracket, matching the reference behavior.
pub(super) fn circulation_residual(psi: f64, env: &StationEnv) -> StationFlow {
    let ua = env.axial_freestream;
    let ut = env.tangential_freestream;
    let u = (ua * ua + ut * ut).sqrt();

    let wa = 0.5 * ua + 0.5 * u * psi.sin();
    let wt = 0.5 * ut + 0.5 * u * psi.cos();
    let axial_induced = wa - ua;
    let tangential_induced = ut - wt;
    let w = (wa * wa + wt * wt).sqrt();

    let inflow_angle = (wa / wt).atan();
    let alpha = env.twist - inflow_angle;
    let reynolds = env.density * w * env.chord / env.viscosity;
    let mach = if env.speed_of_sound > 0.0 {
        w / env.speed_of_sound
    } else {
        0.0
    };
    let (cl, cd) = env.airfoil.coefficients_raw(alpha, reynolds, mach);

    // Prandtl tip loss, with the helical-wake correction on the circulation.
    let radius_fraction = env.radius / env.tip_radius;
    let wake_advance_ratio = radius_fraction * (wa / wt);
    let f = (1.0 - radius_fraction) * 0.5 * env.blades / wake_advance_ratio;
    let tip_loss = (2.0 / PI) * (-f).exp().acos();
    let helix = 4.0 * wake_advance_ratio * env.tip_radius / (PI * env.blades * env.radius);

    let circulation = tangential_induced
        * (4.0 * PI * env.radius / env.blades)
        * tip_loss
        * (1.0 + helix * helix).sqrt();
    let residual = circulation - 0.5 * w * env.chord * cl;

    // Rotate lift and drag into thrust and torque directions.
    let normal = cl * wt / w - cd * wa / w;
    let tangential = cl * wa / w + cd * wt / w;
    let dynamic = 0.5 * env.density * w * w * env.chord;

    StationFlow {
        residual,
        circulation,
        relative_velocity: w,
        inflow_angle,
        wake_advance_ratio,
        axial_induced,
        tangential_induced,
        thrust_gradient: dynamic * normal,
        torque_gradient: dynamic * tangential * env.radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use crate::models::propulsion::bem::core::airfoil::AnalyticPolar;

    fn sample_airfoil() -> Airfoil {
        AnalyticPolar {
            cl0: 0.5,
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

    /// A mid-span station of a small two-blade propeller, spinning statically.
    fn static_env(airfoil: &Airfoil) -> StationEnv<'_> {
        let omega = 14_020.0 * PI / 30.0;
        let radius = 0.0476;
        StationEnv {
            airfoil,
            radius,
            chord: 0.0145,
            twist: 11.344_f64.to_radians(),
            tip_radius: 0.0762,
            blades: 2.0,
            axial_freestream: 0.0,
            tangential_freestream: omega * radius,
            density: 1.225,
            viscosity: 1.81e-5,
            speed_of_sound: 0.0,
        }
    }

    #[test]
    fn lower_bracket_end_is_undefined_for_a_static_rotor() {
        let airfoil = sample_airfoil();
        let env = static_env(&airfoil);

        // At ψ = −π/2 the axial flow reverses, the wake advance ratio goes
        // negative, and the tip loss factor leaves its domain.
        let flow = circulation_residual(-FRAC_PI_2, &env);
        assert!(flow.residual.is_nan());
    }

    #[test]
    fn upper_bracket_end_overshoots_the_balance() {
        let airfoil = sample_airfoil();
        let env = static_env(&airfoil);

        // At ψ = +π/2 the inflow angle is far past the twist, lift saturates
        // negative, and the momentum side dominates.
        let flow = circulation_residual(FRAC_PI_2, &env);
        assert!(flow.residual > 0.0);
    }

    #[test]
    fn induced_velocities_close_the_velocity_triangle() {
        let airfoil = sample_airfoil();
        let env = static_env(&airfoil);

        let flow = circulation_residual(0.3, &env);

        let wa = env.axial_freestream + flow.axial_induced;
        let wt = env.tangential_freestream - flow.tangential_induced;
        assert_relative_eq!(
            flow.relative_velocity,
            (wa * wa + wt * wt).sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(flow.inflow_angle, (wa / wt).atan(), epsilon = 1e-12);
    }

    #[test]
    fn zero_speed_of_sound_matches_a_vanishing_mach_number() {
        let airfoil = sample_airfoil();
        let incompressible = static_env(&airfoil);
        let mut nearly_still = static_env(&airfoil);
        nearly_still.speed_of_sound = 1.0e12;

        let a = circulation_residual(0.3, &incompressible);
        let b = circulation_residual(0.3, &nearly_still);
        assert_relative_eq!(a.residual, b.residual, epsilon = 1e-9);
    }

    #[test]
    fn gradients_scale_with_dynamic_pressure() {
        let airfoil = sample_airfoil();
        let env = static_env(&airfoil);
        let mut denser = static_env(&airfoil);
        denser.density = 2.0 * env.density;

        // Doubling density doubles the loads (the Reynolds shift moves the
        // drag slightly, so lift-dominated thrust is compared loosely).
        let thin = circulation_residual(0.3, &env);
        let thick = circulation_residual(0.3, &denser);
        assert_relative_eq!(
            thick.thrust_gradient / thin.thrust_gradient,
            2.0,
            epsilon = 0.05
        );
    }
}
