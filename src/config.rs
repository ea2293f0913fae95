//! Startup configuration.
//!
//! Defaults can be supplied in a TOML file:
//!
//! ```toml
//! work_minutes = 50
//! break_minutes = 10
//! theme = "dark"
//! notifications = true
//! ```
//!
//! The file is looked up at `--config` or at
//! `<config_dir>/pomodoro-tui/config.toml`. It is only ever read; changes
//! made in the settings dialog are not written back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::{self, SettingsError};
use crate::types::{Durations, Theme};

/// Directory name under the platform config directory.
const CONFIG_DIR_NAME: &str = "pomodoro-tui";

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

fn default_work_minutes() -> u32 {
    Durations::default().work_minutes
}

fn default_break_minutes() -> u32 {
    Durations::default().break_minutes
}

fn default_notifications() -> bool {
    true
}

// ============================================================================
// ConfigError
// ============================================================================

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// A configured duration is out of range.
    #[error("invalid {field} in config: {source}")]
    InvalidDuration {
        /// Name of the offending key
        field: &'static str,
        /// Validation failure
        #[source]
        source: SettingsError,
    },
}

// ============================================================================
// AppConfig
// ============================================================================

/// Startup defaults for the timer and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Work duration in minutes (1-120)
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,

    /// Break duration in minutes (1-120)
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,

    /// Initial color scheme
    #[serde(default)]
    pub theme: Theme,

    /// Whether desktop notifications are shown
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            theme: Theme::default(),
            notifications: default_notifications(),
        }
    }
}

impl AppConfig {
    /// Returns the default config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is used if a file is present there, otherwise built-in
    /// defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    tracing::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents, path)?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses and validates TOML text that did not come from a file.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks both durations against the settings range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        settings::validate(i64::from(self.work_minutes)).map_err(|source| {
            ConfigError::InvalidDuration {
                field: "work_minutes",
                source,
            }
        })?;
        settings::validate(i64::from(self.break_minutes)).map_err(|source| {
            ConfigError::InvalidDuration {
                field: "break_minutes",
                source,
            }
        })?;
        Ok(())
    }

    /// Returns the configured durations.
    pub fn durations(&self) -> Durations {
        Durations::new(self.work_minutes, self.break_minutes)
    }
}

// ============================================================================
// Tests
// ============================================================================
