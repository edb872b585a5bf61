//! Rotor and blade-section geometry.
//!
//! A [`Rotor`] is a validated set of [`Section`]s ordered root to tip, plus
//! the blade count and overall diameter. Sections carry chord, twist, and a
//! shared airfoil; the spanwise width each section represents in the load
//! integration can be given explicitly or derived from station spacing.

use std::sync::Arc;

use thiserror::Error;

use crate::support::{
    constraint::{ConstraintError, ConstraintResult, NonNegative, StrictlyPositive},
    interpolate::{bracket, interp1},
};

use super::airfoil::Airfoil;

use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

/// One blade station.
///
/// The radius may be zero (a hub-centerline station produced by
/// [`Rotor::refine`]); the chord must be strictly positive.
#[derive(Debug, Clone)]
pub struct Section {
    radius: Length,
    chord: Length,
    twist: Angle,
    width: Option<Length>,
    airfoil: Arc<Airfoil>,
}

impl Section {
    /// Constructs a validated blade station.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or the chord is not
    /// strictly positive.
    pub fn new(
        radius: Length,
        chord: Length,
        twist: Angle,
        airfoil: Arc<Airfoil>,
    ) -> ConstraintResult<Self> {
        let radius = NonNegative::new(radius)?.into_inner();
        let chord = StrictlyPositive::new(chord)?.into_inner();
        Ok(Self {
            radius,
            chord,
            twist,
            width: None,
            airfoil,
        })
    }

    /// Sets an explicit spanwise width for this station.
    ///
    /// Stations without one get a width derived from the spacing to their
    /// neighbors; see [`Rotor::station_widths`].
    ///
    /// # Errors
    ///
    /// Returns an error if the width is negative.
    pub fn with_width(mut self, width: Length) -> ConstraintResult<Self> {
        self.width = Some(NonNegative::new(width)?.into_inner());
        Ok(self)
    }

    /// Radial position of the station.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    /// Chord length at the station.
    #[must_use]
    pub fn chord(&self) -> Length {
        self.chord
    }

    /// Geometric twist of the station, measured from the rotor plane.
    #[must_use]
    pub fn twist(&self) -> Angle {
        self.twist
    }

    /// Explicit spanwise width, if one was set.
    #[must_use]
    pub fn width(&self) -> Option<Length> {
        self.width
    }

    /// The airfoil acting at this station.
    #[must_use]
    pub fn airfoil(&self) -> &Arc<Airfoil> {
        &self.airfoil
    }
}

/// Errors that can occur while constructing or refining a rotor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The rotor diameter must be strictly positive.
    #[error("rotor diameter must be strictly positive")]
    NonPositiveDiameter,

    /// A rotor needs at least one blade.
    #[error("rotor must have at least one blade")]
    ZeroBlades,

    /// A rotor needs at least one blade section.
    #[error("rotor must have at least one section")]
    NoSections,

    /// Sections must be ordered by strictly increasing radius.
    #[error("sections out of order at index {index}: radius must strictly increase")]
    RadiusOrder { index: usize },

    /// No section may sit beyond the rotor tip.
    #[error("section at index {index} lies beyond the rotor tip")]
    BeyondTip { index: usize },

    /// Refinement needs at least two stations to span hub to tip.
    #[error("refinement requires at least 2 stations, got {stations}")]
    TooFewStations { stations: usize },

    /// A refined section violated a value constraint.
    #[error("refined section is invalid: {0}")]
    Constraint(#[from] ConstraintError),
}

/// A validated rotor definition.
#[derive(Debug, Clone)]
pub struct Rotor {
    diameter: Length,
    blades: u32,
    sections: Vec<Section>,
}

impl Rotor {
    /// Constructs a validated rotor.
    ///
    /// # Errors
    ///
    /// Returns an error if the diameter is not strictly positive, the blade
    /// count is zero, no sections are given, the sections are not ordered by
    /// strictly increasing radius, or a section sits beyond the tip.
    pub fn new(
        diameter: Length,
        blades: u32,
        sections: Vec<Section>,
    ) -> Result<Self, GeometryError> {
        if !(diameter.get::<meter>() > 0.0) {
            return Err(GeometryError::NonPositiveDiameter);
        }
        if blades == 0 {
            return Err(GeometryError::ZeroBlades);
        }
        if sections.is_empty() {
            return Err(GeometryError::NoSections);
        }
        for i in 1..sections.len() {
            if sections[i].radius <= sections[i - 1].radius {
                return Err(GeometryError::RadiusOrder { index: i });
            }
        }
        let tip = 0.5 * diameter;
        if let Some(index) = sections.iter().position(|s| s.radius > tip) {
            return Err(GeometryError::BeyondTip { index });
        }
        Ok(Self {
            diameter,
            blades,
            sections,
        })
    }

    /// Rotor diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Tip radius, half the diameter.
    #[must_use]
    pub fn tip_radius(&self) -> Length {
        0.5 * self.diameter
    }

    /// Number of blades.
    #[must_use]
    pub fn blades(&self) -> u32 {
        self.blades
    }

    /// Blade sections, ordered root to tip.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Spanwise width each station represents in the load integration.
    ///
    /// Explicit widths are honored; the rest derive from station spacing:
    /// half the distance to each neighbor for interior stations, the full
    /// distance to the single neighbor at the ends. A lone station with no
    /// explicit width gets zero, so integrated loads vanish rather than
    /// guess at a span.
    #[must_use]
    pub fn station_widths(&self) -> Vec<Length> {
        let n = self.sections.len();
        (0..n)
            .map(|i| {
                if let Some(width) = self.sections[i].width {
                    return width;
                }
                if n == 1 {
                    Length::new::<meter>(0.0)
                } else if i == 0 {
                    self.sections[1].radius - self.sections[0].radius
                } else if i == n - 1 {
                    self.sections[n - 1].radius - self.sections[n - 2].radius
                } else {
                    0.5 * (self.sections[i + 1].radius - self.sections[i - 1].radius)
                }
            })
            .collect()
    }

    /// Resamples the rotor onto `stations` radii spaced evenly from the hub
    /// centerline to the tip.
    ///
    /// Chord and twist interpolate linearly between the original stations
    /// and clamp to the end values outside them. Each resampled station
    /// borrows the airfoil of the nearest original station at or below its
    /// radius (the innermost airfoil below the first station), so airfoil
    /// assignments stay piecewise constant. Explicit widths are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if `stations < 2`.
    pub fn refine(&self, stations: usize) -> Result<Self, GeometryError> {
        if stations < 2 {
            return Err(GeometryError::TooFewStations { stations });
        }

        let radii: Vec<f64> = self.sections.iter().map(|s| s.radius.get::<meter>()).collect();
        let tip = self.tip_radius().get::<meter>();

        let mut sections = Vec::with_capacity(stations);
        for i in 0..stations {
            // The last station must land exactly on the tip; the product
            // form can overshoot it by one ulp and fail validation.
            let r = if i == stations - 1 {
                tip
            } else {
                tip * (i as f64) / ((stations - 1) as f64)
            };

            let (lo, hi) = bracket(radii.len(), |k| radii[k], r);
            let chord = interp1(
                radii[lo],
                self.sections[lo].chord.get::<meter>(),
                radii[hi],
                self.sections[hi].chord.get::<meter>(),
                r,
            );
            let twist = interp1(
                radii[lo],
                self.sections[lo].twist.get::<radian>(),
                radii[hi],
                self.sections[hi].twist.get::<radian>(),
                r,
            );

            let donor = self
                .sections
                .iter()
                .rev()
                .find(|s| s.radius.get::<meter>() <= r)
                .unwrap_or(&self.sections[0]);

            sections.push(Section::new(
                Length::new::<meter>(r),
                Length::new::<meter>(chord),
                Angle::new::<radian>(twist),
                Arc::clone(&donor.airfoil),
            )?);
        }

        Self::new(self.diameter, self.blades, sections)
    }
}
