//! Configuration loading and management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::clock::DEFAULT_HOME_ZONE;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA name of the application's home time zone
    ///
    /// All "today" logic resolves in this zone, no matter where the host
    /// runs, so a streak never flips because of a laptop on holiday.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Snapshot file to read; defaults to data.json in the config directory
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_timezone() -> String {
    DEFAULT_HOME_ZONE.name().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            data_file: None,
        }
    }
}

impl Config {
    /// Get the global config directory path (~/.studyquest/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".studyquest")
    }

    /// Get the global config file path (~/.studyquest/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Get the default snapshot path (~/.studyquest/data.json)
    pub fn global_data_path() -> PathBuf {
        Self::global_config_dir().join("data.json")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the global config, falling back to defaults when absent
    pub fn load_global() -> Result<Self> {
        let path = Self::global_config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The home zone; unknown zone names fall back to the default
    pub fn home_zone(&self) -> Tz {
        self.timezone.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown timezone '{}' in config, falling back to {}",
                self.timezone,
                DEFAULT_HOME_ZONE.name()
            );
            DEFAULT_HOME_ZONE
        })
    }

    /// The snapshot path: explicit config value or the global default
    pub fn data_path(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(Self::global_data_path)
    }
}
