// SPDX-License-Identifier: MPL-2.0
//! User preferences read from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[quiz]` - Catalog source, media directory, speed and autoplay
//! - `[zoom]` - Wheel zoom step
//!
//! # Path Resolution
//!
//! 1. `load_from_path()` with an explicit path
//! 2. `--config-dir` or `DICEBENCH_CONFIG_DIR`
//! 3. The platform config directory
//!
//! The application only reads this file; it never writes settings back.
//!
//! # Examples
//!
//! ```no_run
//! use dicebench::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("autoplay: {}", config.quiz.autoplay());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::video::{PlaybackSpeed, WheelZoomStep};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when the settings file cannot be used.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Quiz clip source and playback preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QuizConfig {
    /// External catalog TOML replacing the bundled clip list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Base directory for relative clip paths and directory scans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<PathBuf>,

    /// Initial playback speed, snapped to the nearest preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_speed: Option<f64>,

    /// Start playing as soon as a clip is ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl QuizConfig {
    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        PlaybackSpeed::new(self.default_speed.unwrap_or(DEFAULT_PLAYBACK_SPEED))
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ZoomConfig {
    /// Zoom multiplier per wheel notch, clamped to its bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel_step: Option<f32>,
}

impl ZoomConfig {
    #[must_use]
    pub fn wheel_step(&self) -> WheelZoomStep {
        WheelZoomStep::new(self.wheel_step.unwrap_or(DEFAULT_WHEEL_ZOOM_STEP))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub quiz: QuizConfig,

    #[serde(default)]
    pub zoom: ZoomConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns the configuration and an optional warning key. A missing file is
/// not an error; an unreadable or invalid one yields defaults and a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "configuration ignored");
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
                }
            }
        }
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
