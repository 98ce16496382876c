//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::ConfigError;

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Simulation and scene settings.
    pub sim: SimConfig,
    /// Body catalog source.
    pub catalog: CatalogConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Simulation clock and scene layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Rendered radius of the Sun in display units.
    pub sun_size: f64,
    /// Display units per AU.
    pub orbit_scale: f64,
    /// Multiplier on planet and moon rendered sizes.
    pub planet_scale: f64,
    /// Simulated days per real second. Negative runs time backwards.
    pub time_scale: f64,
    /// Start with the clock paused.
    pub paused: bool,
    /// Show body name labels.
    pub show_labels: bool,
    /// Start date as RFC 3339 (e.g. "2024-01-01T00:00:00Z"). `None` = now.
    pub start_date: Option<String>,
    /// Vertices per planet orbit line.
    pub orbit_steps: usize,
    /// Vertices per comet orbit line.
    pub comet_orbit_steps: usize,
    /// Segments per moon orbit guide circle.
    pub moon_orbit_segments: usize,
}

/// Where to load bodies from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// RON catalog file. `None` uses the built-in Solar System table.
    pub path: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sun_size: 2.0,
            orbit_scale: 10.0,
            planet_scale: 1.0,
            time_scale: 1.0,
            paused: false,
            show_labels: true,
            start_date: None,
            orbit_steps: 100,
            comet_orbit_steps: 360,
            moon_orbit_segments: 64,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl SimConfig {
    /// Parse `start_date`. `Ok(None)` means "start at the current time".
    pub fn start_instant(&self) -> Result<Option<OffsetDateTime>, ConfigError> {
        self.start_date
            .as_deref()
            .map(|value| {
                OffsetDateTime::parse(value, &Rfc3339).map_err(|source| ConfigError::InvalidDate {
                    value: value.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
