//! Per-style film look parameters

use filmcam_core::Color;
use serde::Serialize;

use crate::style::{CameraStyle, ViewfinderVariant};

/// Vignette strength callers use when they don't pass one
pub const DEFAULT_INTENSITY: f32 = 0.3;

/// Visual parameters of one camera style
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleConfig {
    /// Flat tint over the whole frame
    pub wash: Color,
    /// Light tint fading in from the top-left
    pub gradient_top: Color,
    /// Dark tint fading in toward the bottom-right
    pub gradient_bottom: Color,
    /// Grain opacity multiplier, 0 disables grain
    pub grain_intensity: f32,
    /// Edge darkening strength
    pub vignette: f32,
    pub viewfinder: ViewfinderVariant,
}

/// Look up the film parameters for a style.
///
/// Only `Polaroid` depends on `is_dark` (gradient tints) and
/// `base_intensity` (vignette); every other entry is constant.
pub fn style_config_for(style: CameraStyle, is_dark: bool, base_intensity: f32) -> StyleConfig {
    let viewfinder = style.viewfinder();
    match style {
        CameraStyle::Leica => StyleConfig {
            wash: Color::rgba8(0, 0, 0, 0.05),
            gradient_top: Color::rgba8(255, 255, 255, 0.05),
            gradient_bottom: Color::rgba8(0, 0, 0, 0.4),
            grain_intensity: 0.1,
            vignette: 0.4,
            viewfinder,
        },
        CameraStyle::Hasselblad => StyleConfig {
            wash: Color::rgba8(180, 190, 210, 0.05),
            gradient_top: Color::rgba8(255, 255, 255, 0.1),
            gradient_bottom: Color::rgba8(20, 20, 30, 0.15),
            grain_intensity: 0.05,
            vignette: 0.2,
            viewfinder,
        },
        CameraStyle::Movie => StyleConfig {
            wash: Color::rgba8(0, 128, 128, 0.08),
            gradient_top: Color::rgba8(255, 165, 0, 0.1),
            gradient_bottom: Color::rgba8(0, 20, 40, 0.3),
            grain_intensity: 0.15,
            vignette: 0.35,
            viewfinder,
        },
        CameraStyle::Fuji => StyleConfig {
            wash: Color::rgba8(0, 128, 64, 0.06),
            gradient_top: Color::rgba8(255, 240, 200, 0.15),
            gradient_bottom: Color::rgba8(0, 40, 20, 0.25),
            grain_intensity: 0.12,
            vignette: 0.3,
            viewfinder,
        },
        CameraStyle::Normal => StyleConfig {
            wash: Color::TRANSPARENT,
            gradient_top: Color::TRANSPARENT,
            gradient_bottom: Color::TRANSPARENT,
            grain_intensity: 0.0,
            vignette: 0.1,
            viewfinder,
        },
        CameraStyle::Polaroid => StyleConfig {
            wash: Color::rgba8(210, 170, 118, 0.2),
            gradient_top: if is_dark {
                Color::rgba8(255, 224, 180, 0.2)
            } else {
                Color::rgba8(255, 231, 189, 0.28)
            },
            gradient_bottom: if is_dark {
                Color::rgba8(0, 0, 0, 0.35)
            } else {
                Color::rgba8(38, 30, 24, 0.28)
            },
            grain_intensity: 0.2,
            vignette: base_intensity,
            viewfinder,
        },
    }
}

/// [`style_config_for`] keyed by a style id; unknown ids use `Polaroid`
pub fn style_config_for_id(id: &str, is_dark: bool, base_intensity: f32) -> StyleConfig {
    style_config_for(CameraStyle::from_id_lossy(id), is_dark, base_intensity)
}
