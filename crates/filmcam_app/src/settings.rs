//! User settings record

use std::path::PathBuf;

use filmcam_film::CameraStyle;
use filmcam_i18n::{negotiate_locale, SupportedLocale};
use filmcam_theme::{Accent, ThemeMode};
use serde::{Deserialize, Serialize};

/// Every user-adjustable setting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme_mode: ThemeMode,
    /// Accent preset id. Stored as given; unknown ids resolve to the first preset.
    pub accent_id: String,
    /// Save each capture to the album without asking
    pub auto_save: bool,
    pub grain_enabled: bool,
    pub camera_style: CameraStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<PathBuf>,
    /// Active locale code
    pub language: String,
}

impl Settings {
    /// Defaults with the language negotiated from the device locale
    pub fn for_device(device_locale: &str) -> Self {
        Self {
            language: negotiate_locale(device_locale).code().to_string(),
            ..Self::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            accent_id: Accent::Blue.id().to_string(),
            auto_save: false,
            grain_enabled: true,
            camera_style: CameraStyle::Polaroid,
            user_avatar: None,
            language: SupportedLocale::En.code().to_string(),
        }
    }
}

/// Which setting changed, with its new value
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsChange {
    ThemeMode(ThemeMode),
    AccentId(String),
    AutoSave(bool),
    GrainEnabled(bool),
    CameraStyle(CameraStyle),
    UserAvatar(Option<PathBuf>),
    Language(String),
}

impl SettingsChange {
    /// Field name, for logging
    pub fn field(&self) -> &'static str {
        match self {
            Self::ThemeMode(_) => "theme_mode",
            Self::AccentId(_) => "accent_id",
            Self::AutoSave(_) => "auto_save",
            Self::GrainEnabled(_) => "grain_enabled",
            Self::CameraStyle(_) => "camera_style",
            Self::UserAvatar(_) => "user_avatar",
            Self::Language(_) => "language",
        }
    }

    /// Apply this change to a settings record. Returns false when the
    /// field already held the value.
    pub fn apply(&self, settings: &mut Settings) -> bool {
        fn replace<T: PartialEq + Clone>(slot: &mut T, value: &T) -> bool {
            if *slot == *value {
                return false;
            }
            *slot = value.clone();
            true
        }

        match self {
            Self::ThemeMode(v) => replace(&mut settings.theme_mode, v),
            Self::AccentId(v) => replace(&mut settings.accent_id, v),
            Self::AutoSave(v) => replace(&mut settings.auto_save, v),
            Self::GrainEnabled(v) => replace(&mut settings.grain_enabled, v),
            Self::CameraStyle(v) => replace(&mut settings.camera_style, v),
            Self::UserAvatar(v) => replace(&mut settings.user_avatar, v),
            Self::Language(v) => replace(&mut settings.language, v),
        }
    }
}
