//! Moon placement: a uniform circular approximation, not Kepler.
//!
//! Moons sit on a perfect circle around their parent whose radius is chosen
//! for legibility, not physical accuracy. The angle advances linearly with
//! the moon's period.

use glam::DVec3;

use crate::epoch::DAYS_PER_YEAR;

/// Fraction of the parent's rendered radius for the innermost moon.
const INNER_BAND: f64 = 1.8;
/// Fraction of the parent's rendered radius for the outermost moon.
const OUTER_BAND: f64 = 3.5;
/// Radius multiplier when there is nothing to spread across the band.
const SINGLE_MOON_BAND: f64 = 2.5;
/// Absolute floor for the single-moon radius.
const SINGLE_MOON_MIN_RADIUS: f64 = 0.5;
/// Moons closer than `parent + CLEARANCE_TRIGGER` get pushed out.
const CLEARANCE_TRIGGER: f64 = 0.2;
/// Where pushed-out moons end up, `parent + CLEARANCE_PADDING`.
const CLEARANCE_PADDING: f64 = 0.3;

/// Angle in radians of a moon for a period in years, `days` after the Unix
/// epoch (see [`days_since_unix_epoch`](crate::epoch::days_since_unix_epoch)).
///
/// Not wrapped; one full period advances the angle by exactly `2pi`.
pub fn moon_angle(days: f64, period_years: f64) -> f64 {
    days / (period_years * DAYS_PER_YEAR) * std::f64::consts::TAU
}

/// Offset from the parent in the parent's display-local frame (Y up).
pub fn moon_offset(angle: f64, radius: f64) -> DVec3 {
    DVec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Maps the real orbital distances of one parent's moons into a visual band
/// around the parent's rendered sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualBand {
    min_distance: f64,
    max_distance: f64,
    moon_count: usize,
}

impl VisualBand {
    /// Build the band from the real distances of every moon of one parent.
    ///
    /// Returns `None` when the parent has no moons.
    pub fn from_distances(distances: &[f64]) -> Option<Self> {
        if distances.is_empty() {
            return None;
        }
        let min_distance = distances.iter().copied().fold(f64::INFINITY, f64::min);
        let max_distance = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            min_distance,
            max_distance,
            moon_count: distances.len(),
        })
    }

    /// Visual orbit radius for a moon at `distance`, around a parent rendered
    /// with radius `parent_radius`.
    pub fn radius_for(&self, parent_radius: f64, distance: f64) -> f64 {
        let range = self.max_distance - self.min_distance;

        let mut radius = if self.moon_count == 1 || range == 0.0 {
            (parent_radius * SINGLE_MOON_BAND).max(SINGLE_MOON_MIN_RADIUS)
        } else {
            let norm = (distance - self.min_distance) / range;
            let inner = parent_radius * INNER_BAND;
            let outer = parent_radius * OUTER_BAND;
            inner + norm * (outer - inner)
        };

        if radius < parent_radius + CLEARANCE_TRIGGER {
            radius = parent_radius + CLEARANCE_PADDING;
        }
        radius
    }
}
