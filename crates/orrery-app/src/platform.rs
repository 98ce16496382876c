//! Platform directory resolution.
//!
//! Config and log locations follow OS conventions (XDG on Linux, Known
//! Folders on Windows, Library on macOS) via `dirs`.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while resolving or creating platform directories.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// Directory creation failed.
    #[error("platform I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where the orrery keeps its files.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the JSON log written by debug builds.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "orrery";

impl PlatformDirs {
    /// Resolve platform-specific directories without creating them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let app_dir = dirs::config_dir()
            .ok_or(PlatformError::NoConfigDir)?
            .join(APP_NAME);
        Ok(Self {
            config_dir: app_dir.clone(),
            log_dir: app_dir.join("logs"),
        })
    }

    /// Use an explicit config directory (the `--config` flag). Logs go in a
    /// `logs` subdirectory of it.
    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
            log_dir: config_dir.join("logs"),
        }
    }

    /// Resolve from the override if given, else from the OS, then create the
    /// directories.
    pub fn resolve_and_create(config_override: Option<&Path>) -> Result<Self, PlatformError> {
        let dirs = match config_override {
            Some(path) => Self::with_config_dir(path),
            None => Self::resolve()?,
        };
        dirs.create_dirs()?;
        Ok(dirs)
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Io`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
