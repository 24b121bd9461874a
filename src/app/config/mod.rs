// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[store]` - Remote data store URL, API key and timeout
//! - `[gallery]` - Lazy loading margin, thumbnail size, asset cache budget
//! - `[carousel]` - Transition duration and autoplay timing
//! - `[boot]` - Splash screen timing and policy
//! - `[home]` - Home page widgets
//! - `[about]` - Congregation details shown on the about and contact pages
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_CHAPEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The store URL and key can also come from `ICED_CHAPEL_STORE_URL` and
//! `ICED_CHAPEL_STORE_KEY`, which win over the file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_chapel::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.store.url = Some("https://example.supabase.co".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[store] url`.
pub const ENV_STORE_URL: &str = "ICED_CHAPEL_STORE_URL";

/// Environment variable overriding `[store] anon_key`.
pub const ENV_STORE_KEY: &str = "ICED_CHAPEL_STORE_KEY";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// How the boot splash decides when to hide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SplashPolicy {
    /// Hide exactly when the minimum delay has elapsed.
    Fixed,
    /// Hide once the minimum delay has elapsed *and* the first route has its
    /// data, or when the ceiling is reached.
    #[default]
    AtLeast,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Remote data store connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreConfig {
    /// Base URL of the project, without the `/rest/v1` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Public (anonymous) API key sent as `apikey` and bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl StoreConfig {
    #[must_use]
    pub fn effective_url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_STORE_URL)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Gallery grid and lazy loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_margin_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_cache_mb: Option<u32>,
}

impl GalleryConfig {
    #[must_use]
    pub fn root_margin(&self) -> f32 {
        self.root_margin_px
            .unwrap_or(DEFAULT_ROOT_MARGIN_PX)
            .clamp(0.0, MAX_ROOT_MARGIN_PX)
    }

    #[must_use]
    pub fn thumbnail(&self) -> f32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    #[must_use]
    pub fn asset_cache_bytes(&self) -> usize {
        let mb = self
            .asset_cache_mb
            .unwrap_or(DEFAULT_ASSET_CACHE_MB)
            .clamp(MIN_ASSET_CACHE_MB, MAX_ASSET_CACHE_MB);
        mb as usize * 1024 * 1024
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CarouselConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_pause_ms: Option<u64>,
}

impl CarouselConfig {
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(
            self.transition_ms
                .unwrap_or(DEFAULT_TRANSITION_MS)
                .min(MAX_TRANSITION_MS),
        )
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(
            self.autoplay_interval_ms
                .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
                .max(MIN_AUTOPLAY_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn interaction_pause(&self) -> Duration {
        Duration::from_millis(
            self.interaction_pause_ms
                .unwrap_or(DEFAULT_INTERACTION_PAUSE_MS),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BootConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash_min_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash_max_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash_policy: Option<SplashPolicy>,
}

impl BootConfig {
    #[must_use]
    pub fn splash_min(&self) -> Duration {
        Duration::from_millis(self.splash_min_ms.unwrap_or(DEFAULT_SPLASH_MIN_MS))
    }

    /// Ceiling, never shorter than the minimum.
    #[must_use]
    pub fn splash_max(&self) -> Duration {
        let max = Duration::from_millis(self.splash_max_ms.unwrap_or(DEFAULT_SPLASH_MAX_MS));
        max.max(self.splash_min())
    }

    #[must_use]
    pub fn policy(&self) -> SplashPolicy {
        self.splash_policy.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HomeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_limit: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming_events: Option<usize>,

    /// Set to 0 to disable the chat prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_prompt_delay_secs: Option<u64>,
}

impl HomeConfig {
    #[must_use]
    pub fn hero_limit(&self) -> usize {
        self.hero_limit.unwrap_or(DEFAULT_HERO_LIMIT).max(1)
    }

    #[must_use]
    pub fn upcoming_events(&self) -> usize {
        self.upcoming_events.unwrap_or(DEFAULT_UPCOMING_EVENTS)
    }

    #[must_use]
    pub fn chat_prompt_delay(&self) -> Option<Duration> {
        match self
            .chat_prompt_delay_secs
            .unwrap_or(DEFAULT_CHAT_PROMPT_DELAY_SECS)
        {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Congregation details. Everything here is static page copy; missing keys
/// fall back to the defaults individually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AboutConfig {
    pub congregation_name: String,
    pub tagline: String,
    pub story: String,
    pub service_times: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            congregation_name: "Grace Community Church".to_string(),
            tagline: "A place to belong.".to_string(),
            story: "We are a community of people learning to follow Jesus together, \
                    serving our neighbourhood and welcoming everyone who walks through our doors."
                .to_string(),
            service_times: vec![
                "Sunday Worship - 9:00 and 11:00".to_string(),
                "Wednesday Prayer - 19:00".to_string(),
            ],
            address: None,
            phone: None,
            email: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub boot: BootConfig,

    #[serde(default)]
    pub home: HomeConfig,

    #[serde(default)]
    pub about: AboutConfig,
}

impl Config {
    /// Applies `ICED_CHAPEL_STORE_URL` / `ICED_CHAPEL_STORE_KEY` when set and
    /// non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env(ENV_STORE_URL) {
            self.store.url = Some(url);
        }
        if let Some(key) = non_empty_env(ENV_STORE_KEY) {
            self.store.anon_key = Some(key);
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

// =============================================================================
// Default Value Functions
// =============================================================================

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
/// the default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let (mut config, warning) = match get_config_path_with_override(base_dir) {
        Some(path) if path.exists() => match load_from_path(&path) {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                )
            }
        },
        _ => (Config::default(), None),
    };
    config.apply_env_overrides();
    (config, warning)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

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

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
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
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            store: StoreConfig {
                url: Some("https://example.test".to_string()),
                anon_key: Some("public-key".to_string()),
                request_timeout_secs: Some(20),
            },
            gallery: GalleryConfig {
                root_margin_px: Some(250.0),
                ..GalleryConfig::default()
            },
            boot: BootConfig {
                splash_policy: Some(SplashPolicy::Fixed),
                ..BootConfig::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_bad_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[store\nurl=").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert!(warning.is_none());
        assert_eq!(config.boot.splash_min(), Duration::from_millis(2000));
    }

    #[test]
    fn sections_parse_from_partial_file() {
        let content = r#"
            [gallery]
            root_margin_px = 40.0

            [boot]
            splash_policy = "fixed"
        "#;
        let config: Config = toml::from_str(content).expect("parse");
        assert_eq!(config.gallery.root_margin(), 40.0);
        assert_eq!(config.boot.policy(), SplashPolicy::Fixed);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let gallery = GalleryConfig {
            root_margin_px: Some(-5.0),
            thumbnail_size: Some(10_000.0),
            asset_cache_mb: Some(1),
        };
        assert_eq!(gallery.root_margin(), 0.0);
        assert_eq!(gallery.thumbnail(), MAX_THUMBNAIL_SIZE);
        assert_eq!(
            gallery.asset_cache_bytes(),
            MIN_ASSET_CACHE_MB as usize * 1024 * 1024
        );

        let carousel = CarouselConfig {
            transition_ms: Some(60_000),
            autoplay_interval_ms: Some(10),
            interaction_pause_ms: None,
        };
        assert_eq!(carousel.transition(), Duration::from_millis(MAX_TRANSITION_MS));
        assert_eq!(
            carousel.autoplay_interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn splash_max_never_below_min() {
        let boot = BootConfig {
            splash_min_ms: Some(5000),
            splash_max_ms: Some(100),
            splash_policy: None,
        };
        assert_eq!(boot.splash_max(), Duration::from_millis(5000));
    }

    #[test]
    fn zero_chat_delay_disables_prompt() {
        let home = HomeConfig {
            chat_prompt_delay_secs: Some(0),
            ..HomeConfig::default()
        };
        assert!(home.chat_prompt_delay().is_none());
        assert_eq!(
            HomeConfig::default().chat_prompt_delay(),
            Some(Duration::from_secs(DEFAULT_CHAT_PROMPT_DELAY_SECS))
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }
}
