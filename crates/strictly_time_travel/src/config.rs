//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "time_travel.toml";

/// Settings for the terminal UI and the replay command.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// Show the (column, row) of each move in the move list.
    #[serde(default = "default_show_locations")]
    show_locations: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_time_travel.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_tick_ms() -> u64 {
    100
}

fn default_show_locations() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            tick_ms: default_tick_ms(),
            show_locations: default_show_locations(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be greater than zero"));
        }

        Ok(config)
    }

    /// Loads the explicit file if given, else [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    info!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Event poll interval.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
