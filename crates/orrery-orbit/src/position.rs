//! The orbital state evaluator: elements + instant -> heliocentric position.

use glam::DVec3;
use time::OffsetDateTime;

use crate::elements::OrbitalElements;
use crate::epoch::{days_since_j2000, mean_anomaly_at};
use crate::frame::OrbitalFrame;
use crate::kepler::{orbital_radius, solve_kepler, true_anomaly};

/// Intermediate quantities of one evaluation, kept for diagnostics and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalState {
    /// Mean anomaly in degrees, `[0, 360)`.
    pub mean_anomaly: f64,
    /// Eccentric anomaly in radians.
    pub eccentric_anomaly: f64,
    /// True anomaly in radians.
    pub true_anomaly: f64,
    /// Distance from the central body in AU.
    pub radius: f64,
    /// Position in the ecliptic frame, AU.
    pub position: DVec3,
}

/// Full orbital state `days` after J2000.
///
/// Preconditions: `0 <= e < 1`, `a > 0`, `period > 0`, `days` finite.
/// Outside that domain the result is unspecified (typically NaN).
pub fn orbital_state(elements: &OrbitalElements, days: f64) -> OrbitalState {
    debug_assert!(
        (0.0..1.0).contains(&elements.eccentricity),
        "eccentricity {} outside [0, 1)",
        elements.eccentricity
    );
    debug_assert!(elements.orbital_period > 0.0, "non-positive period");

    let e = elements.eccentricity;
    let mean_anomaly = mean_anomaly_at(elements, days);
    let e_anom = solve_kepler(mean_anomaly.to_radians(), e);
    let v = true_anomaly(e_anom, e);
    let r = orbital_radius(elements.semi_major_axis, e, e_anom);

    let x_orb = r * v.cos();
    let y_orb = r * v.sin();
    let position = OrbitalFrame::from_elements(elements).to_ecliptic(x_orb, y_orb);

    OrbitalState {
        mean_anomaly,
        eccentric_anomaly: e_anom,
        true_anomaly: v,
        radius: r,
        position,
    }
}

/// Position in AU (ecliptic frame) `days` after J2000.
pub fn evaluate_days(elements: &OrbitalElements, days: f64) -> DVec3 {
    orbital_state(elements, days).position
}

/// Position in AU (ecliptic frame) at `instant`.
pub fn evaluate(elements: &OrbitalElements, instant: OffsetDateTime) -> DVec3 {
    evaluate_days(elements, days_since_j2000(instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::J2000;

    #[test]
    fn test_planet_positions_update_over_time() {
        let orbit = OrbitalElements {
            semi_major_axis: 1.0,
            eccentricity: 0.0167,
            inclination: 0.0,
            longitude_ascending: 0.0,
            argument_periapsis: 0.0,
            mean_anomaly_epoch: 0.0,
            orbital_period: 1.0,
        };

        let pos_t0 = evaluate_days(&orbit, 0.0);
        let pos_quarter = evaluate_days(&orbit, orbit.period_days() * 0.25);
        let distance_moved = (pos_quarter - pos_t0).length();
        assert!(distance_moved > 1.0, "moved {distance_moved}");

        let pos_full = evaluate_days(&orbit, orbit.period_days());
        let return_dist = (pos_full - pos_t0).length();
        assert!(return_dist < 1e-9, "return dist = {return_dist}");
    }

    #[test]
    fn test_orbital_circular_orbit_is_constant_radius() {
        let orbit = OrbitalElements {
            semi_major_axis: 2.5,
            eccentricity: 0.0,
            inclination: 12.0,
            longitude_ascending: 40.0,
            argument_periapsis: 75.0,
            mean_anomaly_epoch: 0.0,
            orbital_period: 4.0,
        };

        for i in 0..20 {
            let t = (i as f64 / 20.0) * orbit.period_days();
            let state = orbital_state(&orbit, t);
            assert!((state.radius - orbit.semi_major_axis).abs() < 1e-12);
            assert!(
                (state.position.length() - orbit.semi_major_axis).abs() < 1e-12,
                "at t={t}, r={}",
                state.position.length()
            );
        }
    }

    #[test]
    fn test_epoch_anchor_circular_orbit() {
        // e = 0, M = 0 at J2000: the body sits on the periapsis direction,
        // which is (a, 0) in-plane rotated by the orbital frame.
        let orbit = OrbitalElements {
            semi_major_axis: 3.0,
            eccentricity: 0.0,
            inclination: 30.0,
            longitude_ascending: 45.0,
            argument_periapsis: 60.0,
            mean_anomaly_epoch: 0.0,
            orbital_period: 5.0,
        };
        let expected = OrbitalFrame::from_elements(&orbit).to_ecliptic(3.0, 0.0);
        let got = evaluate(&orbit, J2000);
        assert!((got - expected).length() < 1e-12);
    }

    #[test]
    fn test_state_is_consistent() {
        let orbit = OrbitalElements {
            semi_major_axis: 3.46,
            eccentricity: 0.641,
            inclination: 7.04,
            longitude_ascending: 50.14,
            argument_periapsis: 12.78,
            mean_anomaly_epoch: 20.0,
            orbital_period: 6.44,
        };
        let state = orbital_state(&orbit, 1000.0);
        assert!((state.position.length() - state.radius).abs() < 1e-12);
        assert!((0.0..360.0).contains(&state.mean_anomaly));
    }
}
