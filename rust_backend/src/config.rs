//! Timeline configuration file support.
//!
//! This module reads the build settings from a `timeline.toml` file. Every
//! section and field is optional:
//!
//! ```toml
//! [timeline]
//! recent_releases = 11
//! detect_maturity_upgrades = false
//!
//! [data]
//! directory = "data"
//!
//! [output]
//! path = "timeline.json"
//! pretty = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::algorithms::archive::DEFAULT_RECENT_RELEASES;
use crate::core::error::{TimelineError, TimelineResult};
use crate::services::timeline::TimelineOptions;

/// Configuration file name looked up by [`TimelineConfig::from_default_location`]
pub const CONFIG_FILE: &str = "timeline.toml";

/// Timeline configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub timeline: TimelineSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Build settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSettings {
    #[serde(default = "default_recent_releases")]
    pub recent_releases: usize,
    #[serde(default)]
    pub detect_maturity_upgrades: bool,
}

/// Input settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_directory")]
    pub directory: PathBuf,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_recent_releases() -> usize {
    DEFAULT_RECENT_RELEASES
}

fn default_data_directory() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("timeline.json")
}

fn default_pretty() -> bool {
    true
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            recent_releases: default_recent_releases(),
            detect_maturity_upgrades: false,
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            directory: default_data_directory(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: default_pretty(),
        }
    }
}

impl FromStr for TimelineConfig {
    type Err = TimelineError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

impl TimelineConfig {
    /// Load timeline configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(TimelineConfig)` if successful
    /// * `Err(TimelineError::Configuration)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> TimelineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TimelineError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        content.parse()
    }

    /// Load timeline configuration from the default location.
    ///
    /// Searches for `timeline.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(TimelineConfig))` if found and parsed successfully
    /// * `Ok(None)` if no config file exists in any of them
    /// * `Err(TimelineError::Configuration)` on a read or parse error
    pub fn from_default_location() -> TimelineResult<Option<Self>> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE),
            Path::new("rust_backend").join(CONFIG_FILE),
            Path::new("..").join(CONFIG_FILE),
        ];

        match search_paths.iter().find(|p| p.exists()) {
            Some(path) => {
                log::info!("Using configuration {}", path.display());
                Self::from_file(path).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Build options derived from the `[timeline]` section.
    pub fn options(&self) -> TimelineOptions {
        TimelineOptions {
            recent_releases: self.timeline.recent_releases,
            detect_maturity_upgrades: self.timeline.detect_maturity_upgrades,
        }
    }
}
