//! Camera style catalog

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Film look selected in the capture screen's style switcher
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStyle {
    /// Warm instant-film wash. Also the fallback for unknown ids.
    #[default]
    Polaroid,
    Leica,
    Hasselblad,
    Movie,
    Fuji,
    /// No tint, no grain, a faint vignette
    Normal,
}

impl CameraStyle {
    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Polaroid => "polaroid",
            Self::Leica => "leica",
            Self::Hasselblad => "hasselblad",
            Self::Movie => "movie",
            Self::Fuji => "fuji",
            Self::Normal => "normal",
        }
    }

    /// Catalog key for the style switcher label
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Polaroid => "camera.modes.polaroid",
            Self::Leica => "camera.modes.leica",
            Self::Hasselblad => "camera.modes.hasselblad",
            Self::Movie => "camera.modes.movie",
            Self::Fuji => "camera.modes.fuji",
            Self::Normal => "camera.modes.normal",
        }
    }

    /// Switcher order
    pub fn all() -> &'static [CameraStyle] {
        const STYLES: [CameraStyle; 6] = [
            CameraStyle::Polaroid,
            CameraStyle::Leica,
            CameraStyle::Hasselblad,
            CameraStyle::Movie,
            CameraStyle::Fuji,
            CameraStyle::Normal,
        ];
        &STYLES
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.id() == id)
    }

    /// Like [`CameraStyle::from_id`], but unknown ids mean `Polaroid`
    pub fn from_id_lossy(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::warn!("unknown camera style `{}`, using polaroid", id);
            Self::Polaroid
        })
    }

    /// Viewfinder decoration drawn for this style
    pub fn viewfinder(self) -> ViewfinderVariant {
        match self {
            Self::Leica => ViewfinderVariant::LeicaBrackets,
            Self::Hasselblad => ViewfinderVariant::HasselbladMask,
            Self::Movie => ViewfinderVariant::MovieBars,
            Self::Fuji => ViewfinderVariant::FujiInfo,
            Self::Polaroid | Self::Normal => ViewfinderVariant::None,
        }
    }
}

impl Display for CameraStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Camera-brand-inspired framing drawn over the capture view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewfinderVariant {
    #[default]
    None,
    /// Rangefinder bright-line frame: four corner brackets and a center rect
    LeicaBrackets,
    /// Square crop masks with a crosshair
    HasselbladMask,
    /// Letterbox bars, inset border and a record dot
    MovieBars,
    /// Info readouts: status dot and a short bar
    FujiInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_unknown_is_polaroid() {
        for style in CameraStyle::all() {
            assert_eq!(CameraStyle::from_id(style.id()), Some(*style));
        }
        assert_eq!(CameraStyle::from_id_lossy("lomo"), CameraStyle::Polaroid);
        assert_eq!(CameraStyle::default(), CameraStyle::Polaroid);
    }

    #[test]
    fn decorated_styles() {
        let decorated: Vec<_> = CameraStyle::all()
            .iter()
            .filter(|s| s.viewfinder() != ViewfinderVariant::None)
            .map(|s| s.id())
            .collect();
        assert_eq!(decorated, vec!["leica", "hasselblad", "movie", "fuji"]);
    }
}
