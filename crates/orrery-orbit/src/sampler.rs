//! Orbit polylines for drawing.
//!
//! Every sampler returns `steps + 1` points with the last point closing the
//! loop, so the caller can hand the buffer straight to a line-strip renderer.

use glam::DVec3;
use time::OffsetDateTime;

use crate::elements::OrbitalElements;
use crate::epoch::days_since_j2000;
use crate::frame::OrbitalFrame;
use crate::position::evaluate_days;

/// Sample one full period of the evaluator starting at `start`.
///
/// Point `k` is the position at `start + k/steps * period`. Relies on the
/// evaluator being stateless: samples can be taken at any past or future
/// instant in any order.
pub fn sample_orbit(elements: &OrbitalElements, start: OffsetDateTime, steps: usize) -> Vec<DVec3> {
    let steps = steps.max(1);
    let start_days = days_since_j2000(start);
    let period_days = elements.period_days();
    (0..=steps)
        .map(|k| {
            let t = k as f64 / steps as f64 * period_days;
            evaluate_days(elements, start_days + t)
        })
        .collect()
}

/// Closed-form ellipse parametrized by eccentric anomaly, `E = k/steps * 2pi`.
///
/// Time-independent and evenly spaced in `E`, which keeps vertices dense near
/// periapsis for very eccentric comet orbits.
pub fn sample_ellipse(elements: &OrbitalElements, steps: usize) -> Vec<DVec3> {
    let steps = steps.max(1);
    let a = elements.semi_major_axis;
    let e = elements.eccentricity;
    let b = elements.semi_minor_axis();
    let frame = OrbitalFrame::from_elements(elements);
    (0..=steps)
        .map(|k| {
            let e_anom = k as f64 / steps as f64 * std::f64::consts::TAU;
            let x_orb = a * (e_anom.cos() - e);
            let y_orb = b * e_anom.sin();
            frame.to_ecliptic(x_orb, y_orb)
        })
        .collect()
}

/// Circle of `radius` in the display XZ plane, centered on the origin.
pub fn sample_circle(radius: f64, segments: usize) -> Vec<DVec3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|k| {
            let angle = k as f64 / segments as f64 * std::f64::consts::TAU;
            DVec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::J2000;

    fn encke() -> OrbitalElements {
        OrbitalElements {
            semi_major_axis: 2.21,
            eccentricity: 0.848,
            inclination: 11.78,
            longitude_ascending: 334.56,
            argument_periapsis: 186.5,
            mean_anomaly_epoch: 0.0,
            orbital_period: 3.30,
        }
    }

    #[test]
    fn test_sample_orbit_is_closed() {
        let points = sample_orbit(&encke(), J2000, 100);
        assert_eq!(points.len(), 101);
        let gap = (points[0] - points[100]).length();
        assert!(gap < 1e-6, "gap = {gap}");
    }

    #[test]
    fn test_sample_ellipse_stays_within_apsides() {
        let elements = encke();
        let points = sample_ellipse(&elements, 360);
        assert_eq!(points.len(), 361);
        for p in &points {
            let r = p.length();
            assert!(r >= elements.periapsis() - 1e-9 && r <= elements.apoapsis() + 1e-9);
        }
        // E = 0 is periapsis.
        assert!((points[0].length() - elements.periapsis()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_ellipse_agrees_with_evaluator_path() {
        // Every evaluated position must lie on the closed-form ellipse:
        // the same in-plane radius at the same eccentric anomaly.
        let elements = encke();
        let ellipse = sample_ellipse(&elements, 3600);
        let p = evaluate_days(&elements, 500.0);
        let nearest = ellipse
            .iter()
            .map(|q| (*q - p).length())
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 0.01, "nearest = {nearest}");
    }

    #[test]
    fn test_sample_circle() {
        let points = sample_circle(2.0, 64);
        assert_eq!(points.len(), 65);
        for p in &points {
            assert!((p.length() - 2.0).abs() < 1e-12);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_zero_steps_clamped() {
        assert_eq!(sample_circle(1.0, 0).len(), 2);
    }
}
