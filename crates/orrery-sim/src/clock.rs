//! The simulated date, owned by the render driver and handed to the solver.

use orrery_config::SimConfig;
use orrery_orbit::{days_since_j2000, instant_after_days};
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use tracing::debug;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Slider position that maps to real-time-ish speed (scale 1).
pub const SLIDER_UNITY: i32 = 20;

/// Current simulated instant plus playback controls.
///
/// A plain value: the scene reads it each frame, nothing else holds on to it.
/// The time scale is in simulated days per real second, so at scale 1 and
/// 60 updates per second each update moves the date by 1/60 of a day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationClock {
    now: OffsetDateTime,
    time_scale: f64,
    paused: bool,
}

impl SimulationClock {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            now,
            time_scale: 1.0,
            paused: false,
        }
    }

    /// Clock starting at the configured date, or at `fallback_now` when the
    /// config leaves the start date unset.
    pub fn from_config(
        config: &SimConfig,
        fallback_now: OffsetDateTime,
    ) -> Result<Self, orrery_config::ConfigError> {
        let start = config.start_instant()?.unwrap_or(fallback_now);
        Ok(Self {
            now: start,
            time_scale: config.time_scale,
            paused: config.paused,
        })
    }

    pub fn now(&self) -> OffsetDateTime {
        self.now
    }

    /// Real-valued days since J2000 of the current instant.
    pub fn days_since_j2000(&self) -> f64 {
        days_since_j2000(self.now)
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Move the date forward by `time_scale * real_dt_seconds` days.
    /// Does nothing while paused.
    pub fn advance(&mut self, real_dt_seconds: f64) {
        if self.paused {
            return;
        }
        self.now = instant_after_days(self.now, self.time_scale * real_dt_seconds);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume forward playback, keeping the current speed.
    pub fn play(&mut self) {
        self.paused = false;
        if self.time_scale < 0.0 {
            self.time_scale = -self.time_scale;
        }
        if self.time_scale == 0.0 {
            self.time_scale = 1.0;
        }
    }

    /// Resume backward playback, keeping the current speed.
    pub fn reverse(&mut self) {
        self.paused = false;
        if self.time_scale > 0.0 {
            self.time_scale = -self.time_scale;
        }
        if self.time_scale == 0.0 {
            self.time_scale = -1.0;
        }
    }

    /// Jump to `now`, reset to unit speed, and resume.
    pub fn go_live(&mut self, now: OffsetDateTime) {
        self.now = now;
        self.time_scale = 1.0;
        self.paused = false;
        debug!("Clock reset to live time {}", self.now);
    }

    /// [`go_live`](Self::go_live) with the system clock.
    pub fn go_live_now(&mut self) {
        self.go_live(OffsetDateTime::now_utc());
    }

    /// Exponential speed slider: 0 pauses, otherwise `2^((value - 20) / 20)`.
    pub fn set_speed_slider(&mut self, value: i32) {
        if value == 0 {
            self.paused = true;
            self.time_scale = 0.0;
        } else {
            self.paused = false;
            let power = f64::from(value - SLIDER_UNITY) / 20.0;
            self.time_scale = 2f64.powf(power);
        }
        debug!("Speed slider {value} -> time scale {}", self.time_scale);
    }

    /// `YYYY-MM-DD` of the current instant.
    pub fn date_label(&self) -> Result<String, time::error::Format> {
        self.now.format(DATE_FORMAT)
    }

    /// `HH:MM:SS UTC` of the current instant.
    pub fn time_label(&self) -> Result<String, time::error::Format> {
        Ok(format!("{} UTC", self.now.format(TIME_FORMAT)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_orbit::J2000;
    use time::macros::datetime;

    #[test]
    fn test_advance_one_second_is_one_day() {
        let mut clock = SimulationClock::new(J2000);
        for _ in 0..60 {
            clock.advance(1.0 / 60.0);
        }
        assert!((clock.days_since_j2000() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_time_scale_saturates() {
        let config = SimConfig {
            start_date: Some("2000-01-01T12:00:00Z".to_string()),
            time_scale: 1e17,
            ..SimConfig::default()
        };
        let mut clock = SimulationClock::from_config(&config, J2000).unwrap();
        clock.advance(1.0 / 60.0);
        assert_eq!(clock.now().year(), 9999);
        assert!(clock.days_since_j2000().is_finite());

        clock.reverse();
        clock.advance(1.0 / 60.0);
        clock.advance(1.0 / 60.0);
        assert!(clock.now() < J2000);
    }

    #[test]
    fn test_paused_clock_holds() {
        let mut clock = SimulationClock::new(J2000);
        clock.pause();
        clock.advance(10.0);
        assert_eq!(clock.now(), J2000);
    }

    #[test]
    fn test_reverse_and_play() {
        let mut clock = SimulationClock::new(J2000);
        clock.set_speed_slider(40);
        assert!((clock.time_scale() - 2.0).abs() < 1e-12);

        clock.reverse();
        assert!((clock.time_scale() + 2.0).abs() < 1e-12);
        clock.advance(0.5);
        assert!((clock.days_since_j2000() + 1.0).abs() < 1e-9);

        clock.play();
        assert!((clock.time_scale() - 2.0).abs() < 1e-12);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_play_and_reverse_from_zero() {
        let mut clock = SimulationClock::new(J2000);
        clock.set_speed_slider(0);
        assert!(clock.is_paused());
        assert_eq!(clock.time_scale(), 0.0);
        clock.play();
        assert_eq!(clock.time_scale(), 1.0);

        clock.set_speed_slider(0);
        clock.reverse();
        assert_eq!(clock.time_scale(), -1.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_slider_unity() {
        let mut clock = SimulationClock::new(J2000);
        clock.set_speed_slider(SLIDER_UNITY);
        assert_eq!(clock.time_scale(), 1.0);
        clock.set_speed_slider(0);
        clock.set_speed_slider(1);
        assert!(!clock.is_paused());
        assert!(clock.time_scale() < 1.0);
    }

    #[test]
    fn test_go_live() {
        let mut clock = SimulationClock::new(J2000);
        clock.reverse();
        clock.pause();
        let now = datetime!(2025-06-01 08:30 UTC);
        clock.go_live(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.time_scale(), 1.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_go_live_now_uses_system_clock() {
        let mut clock = SimulationClock::new(J2000);
        clock.set_speed_slider(0);
        let before = OffsetDateTime::now_utc();
        clock.go_live_now();
        let after = OffsetDateTime::now_utc();
        assert!(clock.now() >= before && clock.now() <= after);
        assert_eq!(clock.time_scale(), 1.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_labels() {
        let clock = SimulationClock::new(datetime!(2024-02-29 23:05:09 UTC));
        assert_eq!(clock.date_label().unwrap(), "2024-02-29");
        assert_eq!(clock.time_label().unwrap(), "23:05:09 UTC");
    }

    #[test]
    fn test_from_config() {
        let mut config = SimConfig::default();
        let fallback = datetime!(2030-01-01 0:00 UTC);
        let clock = SimulationClock::from_config(&config, fallback).unwrap();
        assert_eq!(clock.now(), fallback);

        config.start_date = Some("2000-01-01T12:00:00Z".to_string());
        config.time_scale = 5.0;
        config.paused = true;
        let clock = SimulationClock::from_config(&config, fallback).unwrap();
        assert_eq!(clock.now(), J2000);
        assert_eq!(clock.time_scale(), 5.0);
        assert!(clock.is_paused());
    }
}
