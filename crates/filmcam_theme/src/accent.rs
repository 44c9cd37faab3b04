//! Accent color presets

use filmcam_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Alpha byte applied to the accent for its soft variant (~15%)
pub const ACCENT_SOFT_ALPHA: u8 = 0x26;

/// User-selectable accent preset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Blue,
    Pink,
    Orange,
    Green,
    Purple,
    Yellow,
}

impl Accent {
    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
        }
    }

    pub fn hex(self) -> u32 {
        match self {
            Self::Blue => 0x2BCBFF,
            Self::Pink => 0xFF6B9D,
            Self::Orange => 0xFF9F43,
            Self::Green => 0x2ECC71,
            Self::Purple => 0xA55EEF,
            Self::Yellow => 0xF1C40F,
        }
    }

    pub fn color(self) -> Color {
        Color::from_hex(self.hex())
    }

    /// The accent at the fixed soft alpha
    pub fn soft_color(self) -> Color {
        self.color().with_alpha8(ACCENT_SOFT_ALPHA)
    }

    /// Catalog key for the settings screen label
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Blue => "profile.accents.blue",
            Self::Pink => "profile.accents.pink",
            Self::Orange => "profile.accents.orange",
            Self::Green => "profile.accents.green",
            Self::Purple => "profile.accents.purple",
            Self::Yellow => "profile.accents.yellow",
        }
    }

    /// The preset table, in display order. The first entry is the fallback.
    pub fn all() -> &'static [Accent] {
        const ACCENTS: [Accent; 6] = [
            Accent::Blue,
            Accent::Pink,
            Accent::Orange,
            Accent::Green,
            Accent::Purple,
            Accent::Yellow,
        ];
        &ACCENTS
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.id() == id)
    }

    /// Look up an accent id, falling back to the first table entry
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            let fallback = Self::all()[0];
            tracing::warn!("unknown accent `{}`, using `{}`", id, fallback.id());
            fallback
        })
    }
}

impl Display for Accent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
