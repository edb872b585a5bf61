//! Airfoil polars and aerodynamic coefficient interpolation.
//!
//! An [`Airfoil`] is an ordered stack of [`Polar`] tables, one per Reynolds
//! number. Coefficient lookups interpolate over angle of attack within each
//! polar and then across Reynolds number between the two bracketing polars,
//! with an optional Prandtl-Glauert compressibility correction on the lift
//! coefficient.
//!
//! Outside a polar's tabulated angle range, the lift coefficient clamps to
//! the nearest sample while the drag coefficient rises linearly toward the
//! fully stalled value of 2.0 at ±90°.

mod analytic;
mod library;
mod xfoil;

pub use analytic::AnalyticPolar;
pub use library::AirfoilLibrary;
pub use xfoil::{XfoilImportError, import_xfoil_polar, import_xfoil_polars};

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;
use uom::si::{
    angle::radian,
    f64::{Angle, Ratio},
    ratio::ratio,
};

use crate::support::interpolate::{bracket, interp1};

/// Drag coefficient of a fully stalled section, anchored at ±90°.
const STALLED_CD: f64 = 2.0;

/// Upper Mach number bound for the compressibility correction.
///
/// At or beyond this value the Prandtl-Glauert factor is no longer
/// meaningful and no correction is applied. There is no warning either,
/// since the lookup may sit inside an inner iteration; callers are
/// responsible for a sanity check on results approaching the transonic
/// regime.
const MACH_CORRECTION_LIMIT: f64 = 0.99;

/// One sample of an airfoil polar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    /// Angle of attack.
    pub alpha: Angle,

    /// Lift coefficient.
    pub cl: Ratio,

    /// Drag coefficient.
    pub cd: Ratio,
}

impl PolarPoint {
    /// Builds a sample from an angle of attack and dimensionless coefficients.
    #[must_use]
    pub fn new(alpha: Angle, cl: f64, cd: f64) -> Self {
        Self {
            alpha,
            cl: Ratio::new::<ratio>(cl),
            cd: Ratio::new::<ratio>(cd),
        }
    }
}

/// Lift and drag coefficients at a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroCoefficients {
    /// Lift coefficient.
    pub cl: Ratio,

    /// Drag coefficient.
    pub cd: Ratio,
}

/// An airfoil polar: coefficient samples at a fixed Reynolds number.
///
/// Samples are ordered by strictly increasing angle of attack; the invariant
/// is checked at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polar {
    reynolds: Ratio,
    points: Vec<PolarPoint>,
}

impl Polar {
    /// Constructs a validated polar.
    ///
    /// # Errors
    ///
    /// Returns an error if the Reynolds number is not strictly positive, the
    /// sample list is empty, or the samples are not strictly increasing in
    /// angle of attack.
    pub fn new(reynolds: Ratio, points: Vec<PolarPoint>) -> Result<Self, PolarError> {
        if !(reynolds.get::<ratio>() > 0.0) {
            return Err(PolarError::NonPositiveReynolds);
        }
        if points.is_empty() {
            return Err(PolarError::EmptyPolar);
        }
        for i in 1..points.len() {
            if points[i].alpha <= points[i - 1].alpha {
                return Err(PolarError::AlphaOrder { index: i });
            }
        }
        Ok(Self { reynolds, points })
    }

    /// Returns the Reynolds number of this polar.
    #[must_use]
    pub fn reynolds(&self) -> Ratio {
        self.reynolds
    }

    /// Returns the coefficient samples, ordered by angle of attack.
    #[must_use]
    pub fn points(&self) -> &[PolarPoint] {
        &self.points
    }

    /// Resolves the coefficients at an angle of attack.
    ///
    /// Inside the tabulated range, lift and drag interpolate independently
    /// over the right-closed bracketing interval. Outside it, lift clamps to
    /// the nearest sample and drag interpolates toward [`STALLED_CD`] at ±90°.
    #[must_use]
    pub fn coefficients(&self, alpha: Angle) -> AeroCoefficients {
        let (cl, cd) = self.coefficients_raw(alpha.get::<radian>());
        AeroCoefficients {
            cl: Ratio::new::<ratio>(cl),
            cd: Ratio::new::<ratio>(cd),
        }
    }

    /// Raw-`f64` lookup used by the solver kernel; `alpha` in radians.
    pub(crate) fn coefficients_raw(&self, alpha: f64) -> (f64, f64) {
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        let first_alpha = first.alpha.get::<radian>();
        let last_alpha = last.alpha.get::<radian>();

        if alpha <= first_alpha {
            let cl = first.cl.get::<ratio>();
            let cd = interp1(
                -FRAC_PI_2,
                STALLED_CD,
                first_alpha,
                first.cd.get::<ratio>(),
                alpha,
            );
            return (cl, cd);
        }
        if alpha > last_alpha {
            let cl = last.cl.get::<ratio>();
            let cd = interp1(
                last_alpha,
                last.cd.get::<ratio>(),
                FRAC_PI_2,
                STALLED_CD,
                alpha,
            );
            return (cl, cd);
        }

        let (lo, hi) = bracket(
            self.points.len(),
            |i| self.points[i].alpha.get::<radian>(),
            alpha,
        );
        let (p1, p2) = (&self.points[lo], &self.points[hi]);
        let (x1, x2) = (p1.alpha.get::<radian>(), p2.alpha.get::<radian>());
        let cl = interp1(x1, p1.cl.get::<ratio>(), x2, p2.cl.get::<ratio>(), alpha);
        let cd = interp1(x1, p1.cd.get::<ratio>(), x2, p2.cd.get::<ratio>(), alpha);
        (cl, cd)
    }
}

/// An airfoil: polars ordered by strictly increasing Reynolds number.
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    polars: Vec<Polar>,
}

impl Airfoil {
    /// Constructs a validated airfoil.
    ///
    /// # Errors
    ///
    /// Returns an error if the polar list is empty or not strictly
    /// increasing in Reynolds number.
    pub fn new(polars: Vec<Polar>) -> Result<Self, PolarError> {
        if polars.is_empty() {
            return Err(PolarError::EmptyAirfoil);
        }
        for i in 1..polars.len() {
            if polars[i].reynolds <= polars[i - 1].reynolds {
                return Err(PolarError::ReynoldsOrder { index: i });
            }
        }
        Ok(Self { polars })
    }

    /// Returns the polars, ordered by Reynolds number.
    #[must_use]
    pub fn polars(&self) -> &[Polar] {
        &self.polars
    }

    /// Resolves the coefficients at an angle of attack, Reynolds number, and
    /// Mach number.
    ///
    /// Reynolds numbers outside the tabulated range clamp to the nearest
    /// polar. For `0 < Mach < 0.99` the lift coefficient is divided by the
    /// Prandtl-Glauert factor √(1 − M²); outside that range the value is
    /// returned uncorrected (`Mach = 0` disables the correction).
    #[must_use]
    pub fn coefficients(&self, alpha: Angle, reynolds: Ratio, mach: Ratio) -> AeroCoefficients {
        let (cl, cd) = self.coefficients_raw(
            alpha.get::<radian>(),
            reynolds.get::<ratio>(),
            mach.get::<ratio>(),
        );
        AeroCoefficients {
            cl: Ratio::new::<ratio>(cl),
            cd: Ratio::new::<ratio>(cd),
        }
    }

    /// Raw-`f64` lookup used by the solver kernel; `alpha` in radians.
    pub(crate) fn coefficients_raw(&self, alpha: f64, reynolds: f64, mach: f64) -> (f64, f64) {
        let (lo, hi) = bracket(
            self.polars.len(),
            |i| self.polars[i].reynolds.get::<ratio>(),
            reynolds,
        );
        let (cl_lo, cd_lo) = self.polars[lo].coefficients_raw(alpha);
        let (cl_hi, cd_hi) = self.polars[hi].coefficients_raw(alpha);

        let re_lo = self.polars[lo].reynolds.get::<ratio>();
        let re_hi = self.polars[hi].reynolds.get::<ratio>();
        let mut cl = interp1(re_lo, cl_lo, re_hi, cl_hi, reynolds);
        let cd = interp1(re_lo, cd_lo, re_hi, cd_hi, reynolds);

        if mach > 0.0 && mach < MACH_CORRECTION_LIMIT {
            cl /= (1.0 - mach * mach).sqrt();
        }
        (cl, cd)
    }
}

/// Errors that can occur while constructing polars or airfoils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolarError {
    /// A polar must contain at least one sample.
    #[error("polar contains no samples")]
    EmptyPolar,

    /// A polar's Reynolds number must be strictly positive.
    #[error("polar Reynolds number must be strictly positive")]
    NonPositiveReynolds,

    /// Samples within a polar must be strictly increasing in angle of attack.
    #[error("polar samples out of order at index {index}: angle of attack must strictly increase")]
    AlphaOrder { index: usize },

    /// An airfoil must contain at least one polar.
    #[error("airfoil contains no polars")]
    EmptyAirfoil,

    /// Polars within an airfoil must be strictly increasing in Reynolds number.
    #[error("airfoil polars out of order at index {index}: Reynolds number must strictly increase")]
    ReynoldsOrder { index: usize },
}
