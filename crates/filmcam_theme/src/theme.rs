//! Theme mode and color scheme

use serde::{Deserialize, Serialize};

/// Concrete light/dark color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// User-selected theme mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the scheme the OS reports
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Catalog key for the settings screen label
    pub fn label_key(self) -> &'static str {
        match self {
            Self::System => "profile.themeMode.system",
            Self::Light => "profile.themeMode.light",
            Self::Dark => "profile.themeMode.dark",
        }
    }

    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];
        &MODES
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.id() == id)
    }

    /// Like [`ThemeMode::from_id`], but unknown ids mean `System`
    pub fn from_id_lossy(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::warn!("unknown theme mode `{}`, following system scheme", id);
            Self::System
        })
    }

    /// Scheme in effect for this mode given what the OS reports
    pub fn effective_scheme(self, system: ColorScheme) -> ColorScheme {
        match self {
            Self::System => system,
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
        }
    }
}

/// Source of the device color scheme, sampled at render time
pub trait ColorSchemeSource {
    fn system_scheme(&self) -> ColorScheme;
}

/// A scheme source that always reports the same scheme
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScheme(pub ColorScheme);

impl ColorSchemeSource for FixedScheme {
    fn system_scheme(&self) -> ColorScheme {
        self.0
    }
}

impl<F: Fn() -> ColorScheme> ColorSchemeSource for F {
    fn system_scheme(&self) -> ColorScheme {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_mode_follows_device() {
        assert_eq!(
            ThemeMode::System.effective_scheme(ColorScheme::Dark),
            ColorScheme::Dark
        );
        assert_eq!(
            ThemeMode::System.effective_scheme(ColorScheme::Light),
            ColorScheme::Light
        );
    }

    #[test]
    fn fixed_modes_ignore_device() {
        for system in [ColorScheme::Light, ColorScheme::Dark] {
            assert_eq!(ThemeMode::Light.effective_scheme(system), ColorScheme::Light);
            assert_eq!(ThemeMode::Dark.effective_scheme(system), ColorScheme::Dark);
        }
    }

    #[test]
    fn ids_round_trip() {
        for mode in ThemeMode::all() {
            assert_eq!(ThemeMode::from_id(mode.id()), Some(*mode));
        }
        assert_eq!(ThemeMode::from_id_lossy("sepia"), ThemeMode::System);
    }

    #[test]
    fn closures_are_scheme_sources() {
        let src = || ColorScheme::Dark;
        assert_eq!(src.system_scheme(), ColorScheme::Dark);
        assert_eq!(FixedScheme(ColorScheme::Light).system_scheme(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
    }
}
