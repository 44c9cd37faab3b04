//! filmcam core primitives
//!
//! Shared value types used by the theme, film overlay and app crates:
//!
//! - [`Color`]: RGBA color with CSS-style parsing and formatting
//! - [`Point`], [`Size`], [`Rect`], [`Length`]: overlay geometry
//! - [`LinearGradient`], [`Brush`]: paint descriptions

pub mod color;
pub mod geometry;
pub mod paint;

pub use color::{Color, ColorParseError};
pub use geometry::{Corner, Edge, Length, Point, Rect, Size};
pub use paint::{Brush, GradientStop, LinearGradient};
