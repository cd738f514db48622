// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use iced_toasts::Corner;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.corner = Some(Corner::BottomRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::manager::MAX_VISIBLE;
use crate::notification::DEFAULT_DURATION;
use crate::toast::Corner;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Upper bound on simultaneously visible toasts.
    #[serde(default)]
    pub max_visible: Option<usize>,
    /// Time-to-live in milliseconds for toasts without an explicit duration.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    /// Window corner the overlay is anchored to.
    #[serde(default)]
    pub corner: Option<Corner>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible: Some(MAX_VISIBLE),
            default_duration_ms: Some(DEFAULT_DURATION.as_millis() as u64),
            corner: Some(Corner::default()),
        }
    }
}

impl Config {
    /// Returns the configured cap, falling back to [`MAX_VISIBLE`].
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible.unwrap_or(MAX_VISIBLE)
    }

    /// Returns the configured default time-to-live, falling back to
    /// [`DEFAULT_DURATION`].
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DURATION)
    }

    /// Returns the configured corner, falling back to the default.
    #[must_use]
    pub fn corner(&self) -> Corner {
        self.corner.unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            max_visible: Some(3),
            default_duration_ms: Some(2500),
            corner: Some(Corner::BottomLeft),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.max_visible, config.max_visible);
        assert_eq!(loaded.default_duration_ms, config.default_duration_ms);
        assert_eq!(loaded.corner, config.corner);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.max_visible(), MAX_VISIBLE);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            max_visible: Some(4),
            default_duration_ms: Some(1000),
            corner: Some(Corner::TopLeft),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_matches_overlay_defaults() {
        let config = Config::default();
        assert_eq!(config.max_visible(), MAX_VISIBLE);
        assert_eq!(config.default_duration(), DEFAULT_DURATION);
        assert_eq!(config.corner(), Corner::TopRight);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("max_visible = 2").expect("partial config parses");
        assert_eq!(config.max_visible(), 2);
        assert_eq!(config.default_duration(), DEFAULT_DURATION);
        assert_eq!(config.corner(), Corner::TopRight);
    }
}
