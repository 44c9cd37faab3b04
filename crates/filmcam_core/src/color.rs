//! RGBA color type and its CSS-style text forms

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// RGBA color with normalized channels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels and a normalized alpha, the way `rgba(...)` reads
    pub fn rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Replace alpha with an 8-bit value (`0x26` is roughly 15%)
    pub fn with_alpha8(self, alpha: u8) -> Self {
        self.with_alpha(alpha as f32 / 255.0)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 8-bit channels, rounded
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// `#RRGGBB` when opaque, otherwise `#RRGGBBAA`
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 0xFF {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// CSS form: `transparent`, `#RRGGBB` or `rgba(r,g,b,a)`
    pub fn to_css(&self) -> String {
        if *self == Self::TRANSPARENT {
            return "transparent".to_string();
        }
        let [r, g, b, _] = self.to_rgba8();
        if self.a >= 1.0 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("rgba({r},{g},{b},{})", self.a)
        }
    }

    /// Parse `transparent`, `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(..)` or `rgba(..)`
    pub fn parse_css(src: &str) -> Result<Self, ColorParseError> {
        let s = src.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::BadHex(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        let (body, with_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ColorParseError::Unsupported(s.to_string()));
        };

        let Some(body) = body.strip_suffix(')') else {
            return Err(ColorParseError::Unterminated(s.to_string()));
        };
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(ColorParseError::Arity {
                expected,
                found: parts.len(),
            });
        }

        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| ColorParseError::BadChannel(part.to_string()))?;
        }
        let alpha = if with_alpha {
            let a = parts[3]
                .parse::<f32>()
                .map_err(|_| ColorParseError::BadChannel(parts[3].to_string()))?;
            a.clamp(0.0, 1.0)
        } else {
            1.0
        };

        Ok(Self::rgba8(rgb[0], rgb[1], rgb[2], alpha))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_css(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("invalid hex color `{0}`")]
    BadHex(String),

    #[error("unsupported color syntax `{0}`")]
    Unsupported(String),

    #[error("missing closing parenthesis in `{0}`")]
    Unterminated(String),

    #[error("expected {expected} components, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("invalid color component `{0}`")]
    BadChannel(String),
}

fn channel_to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
            Some(Color::rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 1.0))
        }
        6 => Some(Color::rgba8(byte(0)?, byte(2)?, byte(4)?, 1.0)),
        8 => Some(Color::rgba8(byte(0)?, byte(2)?, byte(4)?, 1.0).with_alpha8(byte(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn css_forms() {
        assert_eq!(Color::TRANSPARENT.to_css(), "transparent");
        assert_eq!(Color::from_hex(0xFF6B9D).to_css(), "#FF6B9D");
        assert_eq!(
            Color::rgba8(180, 190, 210, 0.05).to_css(),
            "rgba(180,190,210,0.05)"
        );
    }

    #[test]
    fn hex_string_appends_alpha_byte() {
        let soft = Color::from_hex(0xFF6B9D).with_alpha8(0x26);
        assert_eq!(soft.to_hex_string(), "#FF6B9D26");
        assert_eq!(Color::from_hex(0x2BCBFF).to_hex_string(), "#2BCBFF");
    }

    #[test]
    fn parse_accepts_common_syntaxes() {
        assert_eq!(Color::parse_css("#fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::parse_css("#FF6B9D").unwrap(),
            Color::from_hex(0xFF6B9D)
        );
        assert_eq!(
            Color::parse_css("rgba(0, 128, 128, 0.08)").unwrap(),
            Color::rgba8(0, 128, 128, 0.08)
        );
        assert_eq!(
            Color::parse_css("rgb(20,20,30)").unwrap(),
            Color::rgba8(20, 20, 30, 1.0)
        );
        assert_eq!(Color::parse_css("transparent").unwrap(), Color::TRANSPARENT);
        assert_eq!(
            Color::parse_css("#FF6B9D26").unwrap().to_hex_string(),
            "#FF6B9D26"
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Color::parse_css("#12"),
            Err(ColorParseError::BadHex(_))
        ));
        assert!(matches!(
            Color::parse_css("hsl(1,2,3)"),
            Err(ColorParseError::Unsupported(_))
        ));
        assert_eq!(
            Color::parse_css("rgba(1,2,3)"),
            Err(ColorParseError::Arity {
                expected: 4,
                found: 3
            })
        );
        assert!(matches!(
            Color::parse_css("rgb(300,0,0)"),
            Err(ColorParseError::BadChannel(_))
        ));
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(mid.to_rgba8(), [128, 128, 128, 255]);
    }

    #[test]
    fn serde_uses_css_text() {
        let json = serde_json::to_string(&Color::rgba8(0, 0, 0, 0.4)).unwrap();
        assert_eq!(json, "\"rgba(0,0,0,0.4)\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_css(), "rgba(0,0,0,0.4)");
    }
}
