//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// Config-backed values override settings loaded from `config.ron`; the rest
/// control a single run.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Keplerian Solar System simulator")]
pub struct CliArgs {
    /// Start date, RFC 3339 (e.g. 2024-01-01T00:00:00Z). Defaults to now.
    #[arg(long)]
    pub date: Option<String>,

    /// Simulated days per real second (negative runs backwards).
    #[arg(long, allow_negative_numbers = true)]
    pub time_scale: Option<f64>,

    /// Start with the clock paused.
    #[arg(long)]
    pub paused: Option<bool>,

    /// Display units per AU.
    #[arg(long)]
    pub orbit_scale: Option<f64>,

    /// Start at the current time, unit speed, unpaused. Overrides the
    /// configured date, scale and pause state.
    #[arg(long)]
    pub live: bool,

    /// Number of fixed 60 Hz simulation steps to run before reporting.
    #[arg(long, default_value_t = 0)]
    pub frames: u32,

    /// Print the detail record and camera focus for this body or moon.
    #[arg(long)]
    pub inspect: Option<String>,

    /// RON body catalog to load instead of the built-in table.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref date) = args.date {
            self.sim.start_date = Some(date.clone());
        }
        if let Some(scale) = args.time_scale {
            self.sim.time_scale = scale;
        }
        if let Some(paused) = args.paused {
            self.sim.paused = paused;
        }
        if let Some(scale) = args.orbit_scale {
            self.sim.orbit_scale = scale;
        }
        if let Some(ref path) = args.catalog {
            self.catalog.path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            date: Some("1986-02-09T00:00:00Z".to_string()),
            time_scale: Some(-30.0),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(
            config.sim.start_date.as_deref(),
            Some("1986-02-09T00:00:00Z")
        );
        assert_eq!(config.sim.time_scale, -30.0);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.sim.orbit_scale, 10.0);
        assert!(!config.sim.paused);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "orrery",
            "--time-scale",
            "-2.5",
            "--frames",
            "120",
            "--inspect",
            "Jupiter",
            "--paused",
            "true",
        ]);
        assert_eq!(args.time_scale, Some(-2.5));
        assert_eq!(args.frames, 120);
        assert_eq!(args.inspect.as_deref(), Some("Jupiter"));
        assert_eq!(args.paused, Some(true));
        assert!(!args.live);

        let args = CliArgs::parse_from(["orrery", "--live"]);
        assert!(args.live);
        assert_eq!(args.frames, 0);
    }
}
