//! filmcam configuration file handling

use std::fs;
use std::path::{Path, PathBuf};

use filmcam_film::{CameraStyle, DEFAULT_DENSITY, DEFAULT_INTENSITY};
use filmcam_i18n::negotiate_locale;
use filmcam_theme::ThemeMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capture::{AUTOSAVE_DELAY_MS, DEFAULT_ALBUM};
use crate::settings::Settings;

/// Config file name looked up by [`AppConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "filmcam.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration (filmcam.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
}

/// Startup values for the settings holder
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SettingsConfig {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: String,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default)]
    pub auto_save: bool,
    #[serde(default = "default_true")]
    pub grain_enabled: bool,
    #[serde(default = "default_camera_style")]
    pub camera_style: String,
    /// Locale code; the device locale is negotiated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn default_theme_mode() -> String {
    ThemeMode::System.id().to_string()
}

fn default_accent() -> String {
    "blue".to_string()
}

fn default_true() -> bool {
    true
}

fn default_camera_style() -> String {
    CameraStyle::Polaroid.id().to_string()
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            accent: default_accent(),
            auto_save: false,
            grain_enabled: true,
            camera_style: default_camera_style(),
            language: None,
        }
    }
}

/// Overlay tuning
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct OverlayConfig {
    /// Vignette strength for styles that take it from the caller
    #[serde(default = "default_base_intensity")]
    pub base_intensity: f32,
    /// Grain dots per field
    #[serde(default = "default_grain_density")]
    pub grain_density: usize,
}

fn default_base_intensity() -> f32 {
    DEFAULT_INTENSITY
}

fn default_grain_density() -> usize {
    DEFAULT_DENSITY
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            base_intensity: default_base_intensity(),
            grain_density: default_grain_density(),
        }
    }
}

/// Capture and save behavior
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CaptureConfig {
    #[serde(default = "default_album")]
    pub album: String,
    /// Delay before an automatic save starts
    #[serde(default = "default_autosave_delay")]
    pub autosave_delay_ms: u64,
}

fn default_album() -> String {
    DEFAULT_ALBUM.to_string()
}

fn default_autosave_delay() -> u64 {
    AUTOSAVE_DELAY_MS
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            album: default_album(),
            autosave_delay_ms: default_autosave_delay(),
        }
    }
}

impl AppConfig {
    /// Load `filmcam.toml` from a directory, or the given file.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self, ConfigError> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            tracing::debug!(
                "AppConfig: no {} in {}, using defaults",
                CONFIG_FILE,
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Startup settings: configured values over the defaults, with the
    /// language negotiated from `device_locale` unless one is configured
    pub fn initial_settings(&self, device_locale: &str) -> Settings {
        let cfg = &self.settings;
        let language = match cfg.language.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => negotiate_locale(device_locale).code().to_string(),
        };
        Settings {
            theme_mode: ThemeMode::from_id_lossy(&cfg.theme_mode),
            accent_id: cfg.accent.clone(),
            auto_save: cfg.auto_save,
            grain_enabled: cfg.grain_enabled,
            camera_style: CameraStyle::from_id_lossy(&cfg.camera_style),
            user_avatar: None,
            language,
        }
    }
}
