//! Structured logging for the orrery.
//!
//! Console output with timestamps and module paths, plus JSON file logging in
//! debug builds. The config `debug.log_level` sets the default filter and
//! `RUST_LOG` overrides it.

use orrery_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither the config nor `RUST_LOG` say otherwise.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "orrery.log";

/// Pick the filter string: config override if non-empty, else the default.
pub fn filter_string(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether to also write the JSON file
/// * `config` - Optional configuration supplying the log level
///
/// Calling this twice panics (the global subscriber can only be set once).
///
/// ```no_run
/// use orrery_config::Config;
/// use orrery_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_string(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false) // No ANSI color codes in file output
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_filter_string_from_config() {
        let mut config = Config::default();
        assert_eq!(filter_string(Some(&config)), "info");

        config.debug.log_level = "debug,orrery_sim=trace".to_string();
        assert_eq!(filter_string(Some(&config)), "debug,orrery_sim=trace");

        config.debug.log_level.clear();
        assert_eq!(filter_string(Some(&config)), DEFAULT_FILTER);
        assert_eq!(filter_string(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_subsystem_filter() {
        let filter = EnvFilter::new("info,orrery_catalog=debug");
        assert!(format!("{filter}").contains("orrery_catalog=debug"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,orrery_sim=trace",
            "warn,orrery_catalog=debug,orrery_orbit=trace",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {filter_str}");
        }
    }

    #[test]
    fn test_file_logger_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file_path = temp_dir.path().join(LOG_FILE_NAME);
        std::fs::File::create(&log_file_path).unwrap();
        assert!(log_file_path.exists());
        assert_eq!(log_file_path.file_name().unwrap(), "orrery.log");
    }
}
