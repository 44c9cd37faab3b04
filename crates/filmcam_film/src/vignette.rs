//! Edge vignette

use filmcam_core::{Color, Edge, LinearGradient};
use serde::Serialize;

/// Depth of each edge band, in layout units
pub const VIGNETTE_BAND: f32 = 56.0;

/// One darkened edge band
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VignetteEdge {
    pub edge: Edge,
    /// Band depth measured inward from the edge
    pub depth: f32,
    /// Runs from the dark shade at the edge to transparent inward
    pub gradient: LinearGradient,
}

/// Four edge bands fading from black at `strength` to transparent
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Vignette {
    pub strength: f32,
    pub edges: [VignetteEdge; 4],
}

impl Vignette {
    pub fn new(strength: f32) -> Self {
        let shade = Color::BLACK.with_alpha(strength);
        let band = |edge: Edge| {
            let gradient = match edge {
                Edge::Top => LinearGradient::vertical(shade, Color::TRANSPARENT),
                Edge::Bottom => LinearGradient::vertical(Color::TRANSPARENT, shade),
                Edge::Left => LinearGradient::horizontal(shade, Color::TRANSPARENT),
                Edge::Right => LinearGradient::horizontal(Color::TRANSPARENT, shade),
            };
            VignetteEdge {
                edge,
                depth: VIGNETTE_BAND,
                gradient,
            }
        };
        Self {
            strength,
            edges: [
                band(Edge::Top),
                band(Edge::Bottom),
                band(Edge::Left),
                band(Edge::Right),
            ],
        }
    }

    /// The shade color at the outer edge
    pub fn shade(&self) -> Color {
        Color::BLACK.with_alpha(self.strength)
    }
}
