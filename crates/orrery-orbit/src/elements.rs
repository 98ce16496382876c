//! Classical orbital elements referenced to J2000.

use serde::{Deserialize, Serialize};

use crate::epoch::DAYS_PER_YEAR;
use crate::error::ElementsError;

/// Eccentricity above which ten fixed Newton iterations are no longer a
/// comfortable margin for Kepler's equation.
pub const NEAR_PARABOLIC_ECCENTRICITY: f64 = 0.97;

/// Orbital elements for a body on a closed heliocentric orbit.
///
/// Angles are stored in degrees and the period in Julian years, matching the
/// way the catalog tables are written. The period is deliberately independent
/// of the semi-major axis; it drives the mean motion directly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis in AU.
    pub semi_major_axis: f64,
    /// Eccentricity in [0, 1). 0 = circular orbit.
    pub eccentricity: f64,
    /// Inclination to the ecliptic in degrees.
    pub inclination: f64,
    /// Longitude of the ascending node in degrees.
    pub longitude_ascending: f64,
    /// Argument of periapsis in degrees.
    pub argument_periapsis: f64,
    /// Mean anomaly at J2000 in degrees.
    pub mean_anomaly_epoch: f64,
    /// Orbital period in Julian years (365.25 days).
    pub orbital_period: f64,
}

impl OrbitalElements {
    /// Orbital period in days.
    pub fn period_days(&self) -> f64 {
        self.orbital_period * DAYS_PER_YEAR
    }

    /// Closest distance to the central body, `a(1 - e)`.
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the central body, `a(1 + e)`.
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Semi-minor axis, `a * sqrt(1 - e^2)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Whether the orbit is eccentric enough that the fixed-iteration Kepler
    /// solver should be double-checked.
    pub fn is_near_parabolic(&self) -> bool {
        self.eccentricity >= NEAR_PARABOLIC_ECCENTRICITY
    }

    /// Check that the elements lie inside the solver's domain.
    ///
    /// The evaluator itself does not call this; it is meant for load time,
    /// so bad catalog rows fail fast instead of producing NaN positions.
    pub fn validate(&self) -> Result<(), ElementsError> {
        if !(self.semi_major_axis.is_finite() && self.semi_major_axis > 0.0) {
            return Err(ElementsError::SemiMajorAxis(self.semi_major_axis));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementsError::Eccentricity(self.eccentricity));
        }
        if !(self.orbital_period.is_finite() && self.orbital_period > 0.0) {
            return Err(ElementsError::Period(self.orbital_period));
        }
        let angles = [
            ("inclination", self.inclination),
            ("longitude_ascending", self.longitude_ascending),
            ("argument_periapsis", self.argument_periapsis),
            ("mean_anomaly_epoch", self.mean_anomaly_epoch),
        ];
        for (name, value) in angles {
            if !value.is_finite() {
                return Err(ElementsError::NonFiniteAngle { name });
            }
        }
        Ok(())
    }
}
