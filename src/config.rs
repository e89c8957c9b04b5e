//! Optional settings loaded from `plotter.toml`.
//!
//! Every key is optional; a missing file means all defaults, which reads
//! `log.txt` from the working directory exactly like a bare run.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::analyzer::{LengthPolicy, ScanMode};

/// Settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "plotter.toml";
/// Log file plotted when no other path is configured.
pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// Error type for settings loading failures.
#[derive(Debug)]
pub enum ConfigError {
    ReadError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(msg) => write!(f, "Failed to read config file: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config file: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Plotter settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PlotterConfig {
    /// Log file to plot.
    pub log_path: PathBuf,
    /// Token positions inspected for markers.
    pub scan_mode: ScanMode,
    /// Handling of frame / entity count series with different lengths.
    pub length_policy: LengthPolicy,
    /// Font size of the chart title in points.
    pub title_font_size: f32,
    /// Initial window size in logical pixels.
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            scan_mode: ScanMode::default(),
            length_policy: LengthPolicy::default(),
            title_font_size: 8.0,
            window_width: 1000.0,
            window_height: 700.0,
        }
    }
}

impl PlotterConfig {
    /// Load settings from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the settings file
    ///
    /// # Returns
    /// * `Ok(PlotterConfig)` if the file was read and parsed
    /// * `Err(ConfigError)` otherwise
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", config_path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(format!("{}: {}", config_path.display(), e)))
    }

    /// Load settings if the file exists, otherwise fall back to defaults.
    pub fn load_or_default(config_path: &Path) -> Result<Self, ConfigError> {
        if config_path.exists() {
            log::info!("Loading settings from {}", config_path.display());
            Self::load(config_path)
        } else {
            log::debug!("No {} found, using default settings", config_path.display());
            Ok(Self::default())
        }
    }
}
