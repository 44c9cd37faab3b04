//! Palette tokens
//!
//! [`ThemeColors`] is the complete named set of colors one screen state is
//! drawn with. Two fixed instances exist (see [`crate::palettes`]); the
//! active one is produced by [`crate::resolve_palette`].

use std::collections::HashMap;

use filmcam_core::Color;
use serde::Serialize;

/// Keys for dynamic access to single-color palette entries
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ThemeColorToken {
    // Base
    Background,
    TextPrimary,
    TextSecondary,
    Accent,
    AccentSoft,

    // Glass surfaces
    GlassSurface,
    GlassStroke,
    GlassHighlight,
    Shadow,

    // Tabs
    TabActive,
    TabInactive,

    // Background orbs
    OrbPrimary,
    OrbSecondary,
    OrbTertiary,

    // Gallery wall
    Frame,
    FrameBorder,
    FrameShadow,
    WallBackground,
    WallTexture,
    PhotoFrame,
    PhotoFrameBorder,
    Clip,
    ClipBorder,

    // Surfaces
    Surface,
    SurfaceSecondary,
    Divider,
}

impl ThemeColorToken {
    /// Every single-color token, in palette order
    pub fn all() -> &'static [ThemeColorToken] {
        use ThemeColorToken::*;
        const TOKENS: [ThemeColorToken; 26] = [
            Background,
            TextPrimary,
            TextSecondary,
            Accent,
            AccentSoft,
            GlassSurface,
            GlassStroke,
            GlassHighlight,
            Shadow,
            TabActive,
            TabInactive,
            OrbPrimary,
            OrbSecondary,
            OrbTertiary,
            Frame,
            FrameBorder,
            FrameShadow,
            WallBackground,
            WallTexture,
            PhotoFrame,
            PhotoFrameBorder,
            Clip,
            ClipBorder,
            Surface,
            SurfaceSecondary,
            Divider,
        ];
        &TOKENS
    }

    /// Variable name (without `--` prefix) used by [`ThemeColors::to_css_variable_map`]
    pub fn css_name(self) -> &'static str {
        match self {
            ThemeColorToken::Background => "background",
            ThemeColorToken::TextPrimary => "text-primary",
            ThemeColorToken::TextSecondary => "text-secondary",
            ThemeColorToken::Accent => "accent",
            ThemeColorToken::AccentSoft => "accent-soft",
            ThemeColorToken::GlassSurface => "glass-surface",
            ThemeColorToken::GlassStroke => "glass-stroke",
            ThemeColorToken::GlassHighlight => "glass-highlight",
            ThemeColorToken::Shadow => "shadow",
            ThemeColorToken::TabActive => "tab-active",
            ThemeColorToken::TabInactive => "tab-inactive",
            ThemeColorToken::OrbPrimary => "orb-primary",
            ThemeColorToken::OrbSecondary => "orb-secondary",
            ThemeColorToken::OrbTertiary => "orb-tertiary",
            ThemeColorToken::Frame => "frame",
            ThemeColorToken::FrameBorder => "frame-border",
            ThemeColorToken::FrameShadow => "frame-shadow",
            ThemeColorToken::WallBackground => "wall-background",
            ThemeColorToken::WallTexture => "wall-texture",
            ThemeColorToken::PhotoFrame => "photo-frame",
            ThemeColorToken::PhotoFrameBorder => "photo-frame-border",
            ThemeColorToken::Clip => "clip",
            ThemeColorToken::ClipBorder => "clip-border",
            ThemeColorToken::Surface => "surface",
            ThemeColorToken::SurfaceSecondary => "surface-secondary",
            ThemeColorToken::Divider => "divider",
        }
    }
}

/// Complete palette for one screen state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeColors {
    // Base
    pub background: Color,
    /// Three-stop vertical gradient behind every screen
    pub background_gradient: [Color; 3],
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub accent_soft: Color,

    // Glass surfaces
    pub glass_surface: Color,
    pub glass_stroke: Color,
    pub glass_highlight: Color,
    pub shadow: Color,

    // Tabs
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Background orbs
    pub orb_primary: Color,
    pub orb_secondary: Color,
    pub orb_tertiary: Color,

    // Gallery wall
    pub frame: Color,
    pub frame_border: Color,
    pub frame_shadow: Color,
    pub wall_background: Color,
    pub wall_texture: Color,
    pub photo_frame: Color,
    pub photo_frame_border: Color,
    pub clip: Color,
    pub clip_border: Color,

    // Surfaces
    pub surface: Color,
    pub surface_secondary: Color,
    pub divider: Color,
}

impl ThemeColors {
    /// Get a color by token key
    pub fn get(&self, token: ThemeColorToken) -> Color {
        match token {
            ThemeColorToken::Background => self.background,
            ThemeColorToken::TextPrimary => self.text_primary,
            ThemeColorToken::TextSecondary => self.text_secondary,
            ThemeColorToken::Accent => self.accent,
            ThemeColorToken::AccentSoft => self.accent_soft,
            ThemeColorToken::GlassSurface => self.glass_surface,
            ThemeColorToken::GlassStroke => self.glass_stroke,
            ThemeColorToken::GlassHighlight => self.glass_highlight,
            ThemeColorToken::Shadow => self.shadow,
            ThemeColorToken::TabActive => self.tab_active,
            ThemeColorToken::TabInactive => self.tab_inactive,
            ThemeColorToken::OrbPrimary => self.orb_primary,
            ThemeColorToken::OrbSecondary => self.orb_secondary,
            ThemeColorToken::OrbTertiary => self.orb_tertiary,
            ThemeColorToken::Frame => self.frame,
            ThemeColorToken::FrameBorder => self.frame_border,
            ThemeColorToken::FrameShadow => self.frame_shadow,
            ThemeColorToken::WallBackground => self.wall_background,
            ThemeColorToken::WallTexture => self.wall_texture,
            ThemeColorToken::PhotoFrame => self.photo_frame,
            ThemeColorToken::PhotoFrameBorder => self.photo_frame_border,
            ThemeColorToken::Clip => self.clip,
            ThemeColorToken::ClipBorder => self.clip_border,
            ThemeColorToken::Surface => self.surface,
            ThemeColorToken::SurfaceSecondary => self.surface_secondary,
            ThemeColorToken::Divider => self.divider,
        }
    }

    /// Linear interpolation between two palettes (scheme transitions)
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let gradient = |i: usize| {
            Color::lerp(&from.background_gradient[i], &to.background_gradient[i], t)
        };
        Self {
            background: Color::lerp(&from.background, &to.background, t),
            background_gradient: [gradient(0), gradient(1), gradient(2)],
            text_primary: Color::lerp(&from.text_primary, &to.text_primary, t),
            text_secondary: Color::lerp(&from.text_secondary, &to.text_secondary, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
            accent_soft: Color::lerp(&from.accent_soft, &to.accent_soft, t),
            glass_surface: Color::lerp(&from.glass_surface, &to.glass_surface, t),
            glass_stroke: Color::lerp(&from.glass_stroke, &to.glass_stroke, t),
            glass_highlight: Color::lerp(&from.glass_highlight, &to.glass_highlight, t),
            shadow: Color::lerp(&from.shadow, &to.shadow, t),
            tab_active: Color::lerp(&from.tab_active, &to.tab_active, t),
            tab_inactive: Color::lerp(&from.tab_inactive, &to.tab_inactive, t),
            orb_primary: Color::lerp(&from.orb_primary, &to.orb_primary, t),
            orb_secondary: Color::lerp(&from.orb_secondary, &to.orb_secondary, t),
            orb_tertiary: Color::lerp(&from.orb_tertiary, &to.orb_tertiary, t),
            frame: Color::lerp(&from.frame, &to.frame, t),
            frame_border: Color::lerp(&from.frame_border, &to.frame_border, t),
            frame_shadow: Color::lerp(&from.frame_shadow, &to.frame_shadow, t),
            wall_background: Color::lerp(&from.wall_background, &to.wall_background, t),
            wall_texture: Color::lerp(&from.wall_texture, &to.wall_texture, t),
            photo_frame: Color::lerp(&from.photo_frame, &to.photo_frame, t),
            photo_frame_border: Color::lerp(&from.photo_frame_border, &to.photo_frame_border, t),
            clip: Color::lerp(&from.clip, &to.clip, t),
            clip_border: Color::lerp(&from.clip_border, &to.clip_border, t),
            surface: Color::lerp(&from.surface, &to.surface, t),
            surface_secondary: Color::lerp(&from.surface_secondary, &to.surface_secondary, t),
            divider: Color::lerp(&from.divider, &to.divider, t),
        }
    }

    /// Map of CSS variable names to color text, gradient stops included
    /// as `background-gradient-0..2`.
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        let tokens = ThemeColorToken::all();
        let mut vars = HashMap::with_capacity(tokens.len() + 3);
        for token in tokens {
            vars.insert(token.css_name().to_string(), self.get(*token).to_css());
        }
        for (i, stop) in self.background_gradient.iter().enumerate() {
            vars.insert(format!("background-gradient-{i}"), stop.to_css());
        }
        vars
    }
}
