// SPDX-License-Identifier: MPL-2.0
//! This module handles the alert configuration, including loading and saving
//! host preferences to an `alerts.toml` file.
//!
//! Every field is optional; unset fields fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_alerts::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.timeout_ms = Some(8000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_alerts.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.timeout_ms, Some(8000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::alert::{AlertOptions, AnimationTiming, Position};
use crate::error::Result;
use crate::theme::ThemeMode;
use defaults::MAX_ANIMATION_WINDOW_MS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "alerts.toml";
const APP_NAME: &str = "IcedAlerts";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub position: Option<Position>,
    /// Auto-dismiss delay in milliseconds; `0` keeps alerts until closed.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub queue: Option<bool>,
    #[serde(default)]
    pub pause_on_hover: Option<bool>,
    #[serde(default)]
    pub progress_bar: Option<bool>,
    #[serde(default)]
    pub close_button: Option<bool>,
    #[serde(default)]
    pub z_index: Option<i32>,
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
    #[serde(default)]
    pub enter_ms: Option<u64>,
    #[serde(default)]
    pub exit_delay_ms: Option<u64>,
    #[serde(default)]
    pub exit_fade_ms: Option<u64>,
    #[serde(default)]
    pub sound: Option<bool>,
    #[serde(default)]
    pub focus: Option<bool>,
    #[serde(default)]
    pub rtl: Option<bool>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<f32>,
}

impl Config {
    /// Base alert options: library defaults with the configured fields applied.
    #[must_use]
    pub fn alert_options(&self) -> AlertOptions {
        let mut options = AlertOptions::default();
        if let Some(position) = self.position {
            options.position = position;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            options.timeout = Duration::from_millis(timeout_ms);
        }
        if let Some(queue) = self.queue {
            options.queue = queue;
        }
        if let Some(pause_on_hover) = self.pause_on_hover {
            options.pause_on_hover = pause_on_hover;
        }
        if let Some(progress_bar) = self.progress_bar {
            options.progress_bar = progress_bar;
        }
        if let Some(close_button) = self.close_button {
            options.close_button = close_button;
        }
        if let Some(z_index) = self.z_index {
            options.z_index = z_index;
        }
        if let Some(sound) = self.sound {
            options.sound = sound;
        }
        if let Some(focus) = self.focus {
            options.focus = focus;
        }
        if let Some(rtl) = self.rtl {
            options.rtl = rtl;
        }
        options
    }

    /// Animation windows, each clamped to [`MAX_ANIMATION_WINDOW_MS`].
    #[must_use]
    pub fn animation_timing(&self) -> AnimationTiming {
        let clamp = |value: Option<u64>, fallback: Duration| {
            value.map_or(fallback, |ms| {
                Duration::from_millis(ms.min(MAX_ANIMATION_WINDOW_MS))
            })
        };
        let base = AnimationTiming::default();
        AnimationTiming {
            enter: clamp(self.enter_ms, base.enter),
            exit_delay: clamp(self.exit_delay_ms, base.exit_delay),
            exit_fade: clamp(self.exit_fade_ms, base.exit_fade),
        }
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode.unwrap_or_default()
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
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid alert config, using defaults");
            Ok(Config::default())
        }
    }
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
    use defaults::{DEFAULT_ENTER_WINDOW_MS, DEFAULT_TIMEOUT_MS};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            position: Some(Position::BottomLeft),
            timeout_ms: Some(8000),
            queue: Some(false),
            theme_mode: Some(ThemeMode::Dark),
            font_family: Some("Inter".to_string()),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("alerts.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("alerts.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn positions_use_kebab_case_keys() {
        let config: Config = toml::from_str("position = \"top-center\"").expect("valid toml");
        assert_eq!(config.position, Some(Position::TopCenter));
    }

    #[test]
    fn empty_config_yields_library_defaults() {
        let config = Config::default();
        let options = config.alert_options();

        assert_eq!(options.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert!(options.queue);
        assert_eq!(config.theme_mode(), ThemeMode::Auto);
        assert_eq!(
            config.animation_timing().enter,
            Duration::from_millis(DEFAULT_ENTER_WINDOW_MS)
        );
    }

    #[test]
    fn configured_fields_override_defaults() {
        let config = Config {
            timeout_ms: Some(0),
            pause_on_hover: Some(false),
            z_index: Some(10),
            ..Config::default()
        };
        let options = config.alert_options();

        assert!(!options.auto_dismisses());
        assert!(!options.pause_on_hover);
        assert_eq!(options.z_index, 10);
    }

    #[test]
    fn animation_windows_are_clamped() {
        let config = Config {
            enter_ms: Some(u64::MAX),
            exit_fade_ms: Some(0),
            ..Config::default()
        };
        let timing = config.animation_timing();

        assert_eq!(timing.enter, Duration::from_millis(MAX_ANIMATION_WINDOW_MS));
        assert_eq!(timing.exit_fade, Duration::ZERO);
    }
}
