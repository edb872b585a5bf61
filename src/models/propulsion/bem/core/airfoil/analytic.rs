//! Analytic airfoil model in the style of QPROP's parametric polars.
//!
//! Useful when no measured or XFoil-computed polar data is available: a
//! linear lift curve with saturation and a quadratic drag polar with a
//! Reynolds scaling law, tabulated onto fixed angle and Reynolds grids so
//! the result plugs into the same interpolation machinery as imported data.

use uom::si::{
    angle::degree,
    f64::{Angle, Ratio},
    ratio::ratio,
};

use super::{Airfoil, Polar, PolarPoint};

/// Reynolds numbers at which the analytic model is tabulated.
const REYNOLDS_GRID: [f64; 7] = [
    30_000.0, 50_000.0, 75_000.0, 100_000.0, 150_000.0, 200_000.0, 500_000.0,
];

/// Angles of attack (degrees) at which the analytic model is tabulated.
///
/// Dense around the linear range, sparse in the stalled tails.
const ALPHA_GRID_DEG: [f64; 31] = [
    -45.0, -30.0, -20.0, -15.0, -12.0, -10.0, -9.0, -8.0, -7.0, -6.0, -5.0, -4.0, -3.0, -2.0,
    -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0, 15.0, 20.0, 30.0, 45.0,
];

/// Parametric airfoil description.
///
/// Lift follows `CL = cl0 + cl_alpha · α` clipped to `[cl_min, cl_max]`.
/// Drag is a two-sided quadratic in CL around `cl_cd0`, scaled by
/// `(Re / re_ref)^re_exp`, with a `2 sin²(α − α_CD0)` penalty added once the
/// lift curve saturates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticPolar {
    /// Lift coefficient at zero angle of attack.
    pub cl0: f64,

    /// Lift-curve slope, per radian.
    pub cl_alpha: f64,

    /// Minimum (negative-stall) lift coefficient.
    pub cl_min: f64,

    /// Maximum (positive-stall) lift coefficient.
    pub cl_max: f64,

    /// Minimum drag coefficient.
    pub cd0: f64,

    /// Drag curvature for `CL ≥ cl_cd0`.
    pub cd2_upper: f64,

    /// Drag curvature for `CL < cl_cd0`.
    pub cd2_lower: f64,

    /// Lift coefficient at minimum drag.
    pub cl_cd0: f64,

    /// Reference Reynolds number for the drag scaling law.
    pub re_ref: f64,

    /// Exponent of the drag scaling law, typically around −0.5.
    pub re_exp: f64,
}

impl AnalyticPolar {
    /// Tabulates the model into an [`Airfoil`] on the built-in grids.
    #[must_use]
    pub fn generate(&self) -> Airfoil {
        let polars = REYNOLDS_GRID
            .iter()
            .map(|&reynolds| Polar {
                reynolds: Ratio::new::<ratio>(reynolds),
                points: ALPHA_GRID_DEG
                    .iter()
                    .map(|&alpha_deg| self.sample(alpha_deg, reynolds))
                    .collect(),
            })
            .collect();

        // Both grids are strictly increasing, so the polar invariants hold
        // by construction.
        Airfoil { polars }
    }

    fn sample(&self, alpha_deg: f64, reynolds: f64) -> PolarPoint {
        let alpha = Angle::new::<degree>(alpha_deg);
        let alpha_rad = alpha_deg.to_radians();

        let cl_linear = self.cl0 + self.cl_alpha * alpha_rad;
        let cl = cl_linear.clamp(self.cl_min, self.cl_max);

        let cd2 = if cl >= self.cl_cd0 {
            self.cd2_upper
        } else {
            self.cd2_lower
        };
        let scale = (reynolds / self.re_ref).powf(self.re_exp);
        let mut cd = (self.cd0 + cd2 * (cl - self.cl_cd0).powi(2)) * scale;

        // At and past stall the quadratic polar no longer applies; add a
        // flat-plate penalty measured from the minimum-drag angle. The
        // boundary samples where the linear law meets a limit exactly are
        // stalled too.
        if cl == self.cl_max || cl == self.cl_min {
            let alpha_cd0 = (self.cl_cd0 - self.cl0) / self.cl_alpha;
            cd += 2.0 * (alpha_rad - alpha_cd0).sin().powi(2);
        }

        PolarPoint::new(alpha, cl, cd)
    }
}
