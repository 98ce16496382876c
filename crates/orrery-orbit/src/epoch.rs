//! J2000 epoch arithmetic and mean-anomaly propagation.

use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::elements::OrbitalElements;

/// The J2000 reference epoch, 2000-01-01T12:00:00 UTC.
pub const J2000: OffsetDateTime = datetime!(2000-01-01 12:00 UTC);

/// Length of a Julian year in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days from the Unix epoch (1970-01-01T00:00Z) to J2000.
pub const J2000_UNIX_DAYS: f64 = 10_957.5;

/// Real-valued days elapsed since J2000. Negative before the epoch.
pub fn days_since_j2000(instant: OffsetDateTime) -> f64 {
    (instant - J2000).as_seconds_f64() / SECONDS_PER_DAY
}

/// Real-valued days elapsed since 1970-01-01T00:00Z. Moon phases count from here.
pub fn days_since_unix_epoch(instant: OffsetDateTime) -> f64 {
    (instant - OffsetDateTime::UNIX_EPOCH).as_seconds_f64() / SECONDS_PER_DAY
}

/// The instant `days` (possibly fractional or negative) after `instant`.
///
/// Saturates at the representable date range instead of panicking. NaN
/// leaves `instant` unchanged.
pub fn instant_after_days(instant: OffsetDateTime, days: f64) -> OffsetDateTime {
    instant.saturating_add(Duration::saturating_seconds_f64(days * SECONDS_PER_DAY))
}

/// Mean motion in degrees per day for a period given in Julian years.
pub fn mean_motion_deg_per_day(period_years: f64) -> f64 {
    360.0 / (period_years * DAYS_PER_YEAR)
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Mean anomaly in degrees, `[0, 360)`, `days` after J2000.
pub fn mean_anomaly_at(elements: &OrbitalElements, days: f64) -> f64 {
    let n = mean_motion_deg_per_day(elements.orbital_period);
    normalize_degrees(elements.mean_anomaly_epoch + n * days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_j2000_is_zero_days() {
        assert_eq!(days_since_j2000(J2000), 0.0);
    }

    #[test]
    fn test_unix_epoch_offset() {
        assert_eq!(days_since_unix_epoch(J2000), J2000_UNIX_DAYS);
        let t = datetime!(2024-03-10 6:00 UTC);
        assert!((days_since_unix_epoch(t) - days_since_j2000(t) - J2000_UNIX_DAYS).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_and_negative_days() {
        let noon_next_day = datetime!(2000-01-02 0:00 UTC);
        assert!((days_since_j2000(noon_next_day) - 0.5).abs() < 1e-12);

        let before = datetime!(1999-12-31 12:00 UTC);
        assert!((days_since_j2000(before) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_instant_after_days_roundtrip() {
        let t = instant_after_days(J2000, -1234.75);
        assert!((days_since_j2000(t) + 1234.75).abs() < 1e-9);
    }

    #[test]
    fn test_instant_after_days_saturates() {
        let far = instant_after_days(J2000, 1e15);
        assert_eq!(far.year(), 9999);
        assert_eq!(far, instant_after_days(J2000, f64::INFINITY));

        let past = instant_after_days(J2000, -1e15);
        assert_eq!(past.year(), -9999);
        assert_eq!(past, instant_after_days(J2000, f64::NEG_INFINITY));

        assert_eq!(instant_after_days(J2000, f64::NAN), J2000);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
    }

    #[test]
    fn test_mean_motion_earth() {
        let n = mean_motion_deg_per_day(1.0);
        assert!((n * 365.25 - 360.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_anomaly_wraps_backwards() {
        let elements = OrbitalElements {
            semi_major_axis: 1.0,
            eccentricity: 0.0,
            inclination: 0.0,
            longitude_ascending: 0.0,
            argument_periapsis: 0.0,
            mean_anomaly_epoch: 10.0,
            orbital_period: 1.0,
        };
        // A quarter year before J2000 puts M at 10 - 90 = -80 -> 280.
        let m = mean_anomaly_at(&elements, -365.25 / 4.0);
        assert!((m - 280.0).abs() < 1e-9, "m = {m}");
    }
}
