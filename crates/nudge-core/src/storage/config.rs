//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default reminder length and unit offered by hosts
//! - The deferred-requery delay after a dismissal
//! - The watch-loop poll interval
//!
//! Configuration is stored at `~/.config/nudge/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::unit::TimeUnit;

const CONFIG_FILE: &str = "config.toml";

/// Reminder input defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Length pre-filled in host input forms.
    #[serde(default = "default_length")]
    pub default_length: i64,
    #[serde(default)]
    pub default_unit: TimeUnit,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/nudge/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reminders: ReminderConfig,
    /// Delay before re-querying the queue after a dismissal (milliseconds).
    #[serde(default = "default_requery_delay_ms")]
    pub requery_delay_ms: u64,
    /// Watch-loop poll interval (milliseconds).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

// Default functions
fn default_length() -> i64 {
    5
}
fn default_requery_delay_ms() -> u64 {
    crate::deferred::REQUERY_DELAY.as_millis() as u64
}
fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            default_unit: TimeUnit::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reminders: ReminderConfig::default(),
            requery_delay_ms: default_requery_delay_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(data_dir()?.join(CONFIG_FILE))
    }

    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(data_dir()?.join(CONFIG_FILE))
    }

    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
