// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[audio]` - Interaction cue playback
//! - `[ads]` - Interstitial carousel behavior
//! - `[catalog]` - Categorization thresholds and default location filter
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `LAPTOP_CATALOG_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use laptop_catalog::config;
//!
//! let (mut config, _warning) = config::load();
//! config.audio.enabled = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Interaction cue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Whether interaction cues are played at all.
    #[serde(default = "default_audio_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Master volume multiplied into every cue (0.0 to 1.0).
    #[serde(default = "default_master_volume", skip_serializing_if = "Option::is_none")]
    pub master_volume: Option<f32>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_audio_enabled(),
            master_volume: default_master_volume(),
        }
    }
}

/// Interstitial advertisement settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdsConfig {
    /// Whether the carousel is shown before entering a category.
    #[serde(default = "default_ads_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Seconds an image advertisement stays on screen.
    #[serde(default = "default_ad_image_secs", skip_serializing_if = "Option::is_none")]
    pub image_secs: Option<u64>,

    /// Seconds a video advertisement stays on screen.
    #[serde(default = "default_ad_video_secs", skip_serializing_if = "Option::is_none")]
    pub video_secs: Option<u64>,
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self {
            enabled: default_ads_enabled(),
            image_secs: default_ad_image_secs(),
            video_secs: default_ad_video_secs(),
        }
    }
}

/// Catalog categorization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Price ceiling for the student category.
    #[serde(
        default = "default_student_price_ceiling",
        skip_serializing_if = "Option::is_none"
    )]
    pub student_price_ceiling: Option<f64>,

    /// How many months back the new-arrivals folder reaches.
    #[serde(
        default = "default_new_arrival_months",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_arrival_months: Option<u32>,

    /// Location filter applied at startup (`default` shows everything).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            student_price_ceiling: default_student_price_ceiling(),
            new_arrival_months: default_new_arrival_months(),
            default_location: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub audio: AudioConfig,

    #[serde(default)]
    pub ads: AdsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Master cue volume, clamped to the supported range.
    #[must_use]
    pub fn master_volume(&self) -> f32 {
        self.audio
            .master_volume
            .unwrap_or(DEFAULT_MASTER_VOLUME)
            .clamp(MIN_MASTER_VOLUME, MAX_MASTER_VOLUME)
    }

    /// Slide duration for image advertisements.
    #[must_use]
    pub fn ad_image_duration(&self) -> Duration {
        clamp_ad_secs(self.ads.image_secs.unwrap_or(DEFAULT_AD_IMAGE_SECS))
    }

    /// Slide duration for video advertisements.
    #[must_use]
    pub fn ad_video_duration(&self) -> Duration {
        clamp_ad_secs(self.ads.video_secs.unwrap_or(DEFAULT_AD_VIDEO_SECS))
    }
}

fn clamp_ad_secs(secs: u64) -> Duration {
    Duration::from_secs(secs.clamp(MIN_AD_SECS, MAX_AD_SECS))
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_audio_enabled() -> Option<bool> {
    Some(true)
}

fn default_master_volume() -> Option<f32> {
    Some(DEFAULT_MASTER_VOLUME)
}

fn default_ads_enabled() -> Option<bool> {
    Some(true)
}

fn default_ad_image_secs() -> Option<u64> {
    Some(DEFAULT_AD_IMAGE_SECS)
}

fn default_ad_video_secs() -> Option<u64> {
    Some(DEFAULT_AD_VIDEO_SECS)
}

fn default_student_price_ceiling() -> Option<f64> {
    Some(DEFAULT_STUDENT_PRICE_CEILING)
}

fn default_new_arrival_months() -> Option<u32> {
    Some(DEFAULT_NEW_ARRIVAL_MONTHS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
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
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.audio.enabled = Some(false);
        config.ads.image_secs = Some(7);
        config.catalog.default_location = Some("mashrab".to_string());

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[audio]\nenabled = false\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.audio.enabled, Some(false));
        assert_eq!(loaded.audio.master_volume, Some(DEFAULT_MASTER_VOLUME));
        assert_eq!(loaded.ads, AdsConfig::default());
        assert_eq!(loaded.catalog, CatalogConfig::default());
    }

    #[test]
    fn invalid_toml_yields_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn absent_file_yields_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("empty")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.audio.master_volume = Some(3.0);
        config.ads.image_secs = Some(0);
        config.ads.video_secs = Some(10_000);

        assert_eq!(config.master_volume(), MAX_MASTER_VOLUME);
        assert_eq!(config.ad_image_duration(), Duration::from_secs(MIN_AD_SECS));
        assert_eq!(config.ad_video_duration(), Duration::from_secs(MAX_AD_SECS));
    }
}
