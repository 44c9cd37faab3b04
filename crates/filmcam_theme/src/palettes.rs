//! The two fixed base palettes
//!
//! Light is a warm paper tone for the gallery wall look; dark is a deep
//! navy. Both carry a default accent that [`crate::resolve_palette`]
//! replaces with the selected preset.

use crate::theme::ColorScheme;
use crate::tokens::ThemeColors;
use filmcam_core::Color;

/// Base palette for a scheme
pub fn for_scheme(scheme: ColorScheme) -> ThemeColors {
    match scheme {
        ColorScheme::Light => light(),
        ColorScheme::Dark => dark(),
    }
}

pub fn light() -> ThemeColors {
    ThemeColors {
        background: Color::from_hex(0xF8F6F0),
        background_gradient: [
            Color::from_hex(0xFAF9F5),
            Color::from_hex(0xF8F6F0),
            Color::from_hex(0xF2EFE6),
        ],
        text_primary: Color::from_hex(0x1A1816),
        text_secondary: Color::from_hex(0x66615B),
        accent: Color::from_hex(0x2BCBFF),
        accent_soft: Color::rgba8(43, 203, 255, 0.15),
        glass_surface: Color::rgba8(255, 255, 255, 0.8),
        glass_stroke: Color::rgba8(255, 255, 255, 0.95),
        glass_highlight: Color::rgba8(255, 255, 255, 1.0),
        shadow: Color::rgba8(40, 30, 20, 0.08),
        tab_active: Color::from_hex(0x1A1816),
        tab_inactive: Color::rgba8(26, 24, 22, 0.5),
        orb_primary: Color::rgba8(255, 200, 150, 0.3),
        orb_secondary: Color::rgba8(150, 200, 255, 0.2),
        orb_tertiary: Color::rgba8(200, 150, 255, 0.15),
        frame: Color::from_hex(0xFDFBFA),
        frame_border: Color::from_hex(0xE5E0D5),
        frame_shadow: Color::rgba8(40, 30, 20, 0.1),
        wall_background: Color::from_hex(0xF4F1E8),
        wall_texture: Color::rgba8(0, 0, 0, 0.02),
        photo_frame: Color::from_hex(0xFFFFFF),
        photo_frame_border: Color::from_hex(0xE8E4D8),
        clip: Color::from_hex(0x5C5854),
        clip_border: Color::from_hex(0x45413D),
        surface: Color::rgba8(255, 255, 255, 0.85),
        surface_secondary: Color::rgba8(255, 255, 255, 0.95),
        divider: Color::rgba8(0, 0, 0, 0.04),
    }
}

pub fn dark() -> ThemeColors {
    ThemeColors {
        background: Color::from_hex(0x0A111C),
        background_gradient: [
            Color::from_hex(0x0A111C),
            Color::from_hex(0x0B1A2B),
            Color::from_hex(0x111F35),
        ],
        text_primary: Color::from_hex(0xF5F7FF),
        text_secondary: Color::rgba8(245, 247, 255, 0.68),
        accent: Color::from_hex(0x71D9FF),
        accent_soft: Color::rgba8(113, 217, 255, 0.2),
        glass_surface: Color::rgba8(14, 20, 32, 0.55),
        glass_stroke: Color::rgba8(255, 255, 255, 0.18),
        glass_highlight: Color::rgba8(255, 255, 255, 0.22),
        shadow: Color::rgba8(0, 0, 0, 0.45),
        tab_active: Color::from_hex(0xFFFFFF),
        tab_inactive: Color::rgba8(255, 255, 255, 0.6),
        orb_primary: Color::rgba8(88, 132, 255, 0.35),
        orb_secondary: Color::rgba8(255, 148, 112, 0.22),
        orb_tertiary: Color::rgba8(126, 233, 255, 0.2),
        frame: Color::from_hex(0xFFFFFF),
        frame_border: Color::from_hex(0xDED4C6),
        frame_shadow: Color::rgba8(0, 0, 0, 0.4),
        wall_background: Color::from_hex(0x1A1A1A),
        wall_texture: Color::rgba8(255, 255, 255, 0.05),
        photo_frame: Color::from_hex(0xFFFFFF),
        photo_frame_border: Color::from_hex(0x333333),
        clip: Color::from_hex(0x2A2A2A),
        clip_border: Color::from_hex(0x111111),
        surface: Color::rgba8(255, 255, 255, 0.08),
        surface_secondary: Color::rgba8(255, 255, 255, 0.12),
        divider: Color::rgba8(255, 255, 255, 0.08),
    }
}
