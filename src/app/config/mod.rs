// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[map]` - Base map style, choropleth attribute and zoom behaviour
//! - `[wonders]` - Marker visibility and the enabled wonder kinds
//! - `[data]` - Data sources, statistics cache and network timeouts
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `WONDER_ATLAS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use wonder_atlas::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::{WonderFilter, WonderKind};
use crate::choropleth::Attribute;
use crate::error::{Error, Result};
use crate::map::{TileStyle, ZoomRange};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
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

/// Map display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Raster base map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_style: Option<TileStyle>,

    /// Statistic used to color countries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Attribute>,

    #[serde(default = "default_min_zoom", skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,

    #[serde(default = "default_max_zoom", skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,

    /// Zoom levels per mouse wheel line.
    #[serde(
        default = "default_wheel_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_step: Option<f64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            base_style: Some(TileStyle::default()),
            attribute: Some(Attribute::default()),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            wheel_zoom_step: default_wheel_zoom_step(),
        }
    }
}

/// Wonder marker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WondersConfig {
    /// Whether markers are drawn at all.
    #[serde(default = "default_show_wonders", skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    /// Kinds enabled in the sidebar filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<WonderKind>>,
}

impl Default for WondersConfig {
    fn default() -> Self {
        Self {
            show: default_show_wonders(),
            kinds: Some(WonderKind::ALL.to_vec()),
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(
        default = "default_rest_countries_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub rest_countries_url: Option<String>,

    /// GeoJSON file replacing the bundled world outlines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries_geojson: Option<PathBuf>,

    /// Directory holding the two wonder catalog files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wonders_dir: Option<PathBuf>,

    #[serde(
        default = "default_stats_cache_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub stats_cache_hours: Option<u32>,

    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            rest_countries_url: default_rest_countries_url(),
            countries_geojson: None,
            wonders_dir: None,
            stats_cache_hours: default_stats_cache_hours(),
            request_timeout_secs: default_request_timeout_secs(),
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
    pub general: GeneralConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub wonders: WondersConfig,

    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// Zoom bounds, each clamped to the supported range.
    pub fn zoom_range(&self) -> ZoomRange {
        let min = self
            .map
            .min_zoom
            .unwrap_or(DEFAULT_MIN_ZOOM)
            .clamp(LIMIT_MIN_ZOOM, LIMIT_MAX_ZOOM);
        let max = self
            .map
            .max_zoom
            .unwrap_or(DEFAULT_MAX_ZOOM)
            .clamp(LIMIT_MIN_ZOOM, LIMIT_MAX_ZOOM);
        ZoomRange::new(min, max)
    }

    pub fn wheel_zoom_step(&self) -> f64 {
        self.map
            .wheel_zoom_step
            .unwrap_or(DEFAULT_WHEEL_ZOOM_STEP)
            .clamp(MIN_WHEEL_ZOOM_STEP, MAX_WHEEL_ZOOM_STEP)
    }

    pub fn base_style(&self) -> TileStyle {
        self.map.base_style.unwrap_or_default()
    }

    pub fn attribute(&self) -> Attribute {
        self.map.attribute.unwrap_or_default()
    }

    pub fn show_wonders(&self) -> bool {
        self.wonders.show.unwrap_or(true)
    }

    /// Sidebar filter built from the saved kinds, with an empty search.
    pub fn wonder_filter(&self) -> WonderFilter {
        match &self.wonders.kinds {
            Some(kinds) => WonderFilter::new(kinds.iter().copied(), ""),
            None => WonderFilter::default(),
        }
    }

    pub fn rest_countries_url(&self) -> &str {
        self.data
            .rest_countries_url
            .as_deref()
            .unwrap_or(DEFAULT_REST_COUNTRIES_URL)
    }

    pub fn stats_cache_hours(&self) -> u32 {
        self.data
            .stats_cache_hours
            .unwrap_or(DEFAULT_STATS_CACHE_HOURS)
            .min(MAX_STATS_CACHE_HOURS)
    }

    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .data
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_min_zoom() -> Option<f64> {
    Some(DEFAULT_MIN_ZOOM)
}

fn default_max_zoom() -> Option<f64> {
    Some(DEFAULT_MAX_ZOOM)
}

fn default_wheel_zoom_step() -> Option<f64> {
    Some(DEFAULT_WHEEL_ZOOM_STEP)
}

fn default_show_wonders() -> Option<bool> {
    Some(true)
}

fn default_rest_countries_url() -> Option<String> {
    Some(DEFAULT_REST_COUNTRIES_URL.to_string())
}

fn default_stats_cache_hours() -> Option<u32> {
    Some(DEFAULT_STATS_CACHE_HOURS)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
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
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
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
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using default configuration");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
