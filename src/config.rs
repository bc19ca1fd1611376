//! Persisted settings for the command-line renderer.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/ibc-tx-display/config.json`
//! - macOS: `~/Library/Application Support/ibc-tx-display/config.json`
//! - Windows: `%APPDATA%/ibc-tx-display/config.json`
//!
//! The library itself never reads this file; every engine call takes its
//! network and options as arguments.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::display::DisplayOptions;
use crate::domain::NetworkContext;
use crate::format::offset_from_minutes;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "ibc-tx-display";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Network addresses are rendered for.
    #[serde(default)]
    pub network: NetworkContext,
    /// Minutes east of UTC that timestamps are shown in.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Chain registry JSON file; the built-in registry is used when unset.
    #[serde(default)]
    pub registry_path: Option<PathBuf>,
    /// Whether record timestamps are epoch milliseconds rather than seconds.
    #[serde(default)]
    pub timestamps_in_millis: bool,
    /// Whether timestamps show time of day only.
    #[serde(default = "default_time_only")]
    pub time_only: bool,
}

const fn default_time_only() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: NetworkContext::Main,
            utc_offset_minutes: 0,
            registry_path: None,
            timestamps_in_millis: false,
            time_only: default_time_only(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or the JSON content cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the configuration
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Row rendering options derived from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `utc_offset_minutes` is a day or more.
    pub fn display_options(&self) -> Result<DisplayOptions> {
        let offset = offset_from_minutes(self.utc_offset_minutes).ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "UTC offset of {} minutes is out of range",
                self.utc_offset_minutes
            )
        })?;
        Ok(DisplayOptions::default()
            .with_offset(offset)
            .with_time_only(self.time_only))
    }
}

// ============================================================================
// Tests
// ============================================================================
