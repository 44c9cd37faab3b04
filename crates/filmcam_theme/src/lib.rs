//! filmcam theme system
//!
//! Resolves the palette every screen draws with from three inputs: the
//! user's [`ThemeMode`], the scheme the device reports, and the selected
//! [`Accent`] preset.
//!
//! ```rust
//! use filmcam_theme::{resolve_palette, ThemeMode};
//!
//! let colors = resolve_palette(ThemeMode::Dark, false, "pink");
//! assert_eq!(colors.accent.to_hex_string(), "#FF6B9D");
//! assert_eq!(colors.accent_soft.to_hex_string(), "#FF6B9D26");
//! ```

pub mod accent;
pub mod palettes;
pub mod resolve;
pub mod theme;
pub mod tokens;

pub use accent::{Accent, ACCENT_SOFT_ALPHA};
pub use resolve::{is_dark, resolve_palette};
pub use theme::{ColorScheme, ColorSchemeSource, FixedScheme, ThemeMode};
pub use tokens::{ThemeColorToken, ThemeColors};
