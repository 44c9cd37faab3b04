//! Overlay layer compositor
//!
//! Turns a camera style into the ordered list of layers drawn over the
//! live preview and over saved photos. Layers are listed bottom to top.

use filmcam_core::{Brush, Color, LinearGradient, Point};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use crate::grain::{GrainCache, GrainDot, GrainSpec};
use crate::registry::{style_config_for, StyleConfig};
use crate::style::CameraStyle;
use crate::viewfinder::Viewfinder;
use crate::vignette::Vignette;

/// Layer discriminant, for inspection and logging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Wash,
    GradientTop,
    GradientBottom,
    Grain,
    Vignette,
    Viewfinder,
}

impl LayerKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Wash => "wash",
            Self::GradientTop => "gradient_top",
            Self::GradientBottom => "gradient_bottom",
            Self::Grain => "grain",
            Self::Vignette => "vignette",
            Self::Viewfinder => "viewfinder",
        }
    }
}

/// One overlay layer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayLayer {
    Wash { color: Color },
    GradientTop { gradient: LinearGradient },
    GradientBottom { gradient: LinearGradient },
    Grain { spec: GrainSpec },
    Vignette { vignette: Vignette },
    Viewfinder { viewfinder: Viewfinder },
}

impl OverlayLayer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Self::Wash { .. } => LayerKind::Wash,
            Self::GradientTop { .. } => LayerKind::GradientTop,
            Self::GradientBottom { .. } => LayerKind::GradientBottom,
            Self::Grain { .. } => LayerKind::Grain,
            Self::Vignette { .. } => LayerKind::Vignette,
            Self::Viewfinder { .. } => LayerKind::Viewfinder,
        }
    }

    /// Overlay layers never take touches; input passes through to the preview
    pub fn intercepts_input(&self) -> bool {
        false
    }

    /// Full-frame fill for the wash and gradient layers
    pub fn brush(&self) -> Option<Brush> {
        match self {
            Self::Wash { color } => Some(Brush::Solid(*color)),
            Self::GradientTop { gradient } | Self::GradientBottom { gradient } => {
                Some(Brush::Linear(gradient.clone()))
            }
            _ => None,
        }
    }
}

/// Diagonal light leak from the top-left
fn top_gradient(color: Color) -> LinearGradient {
    LinearGradient::two_stop(
        Point::new(0.0, 0.0),
        Point::new(0.9, 0.9),
        color,
        Color::TRANSPARENT,
    )
}

/// Diagonal shade toward the bottom-right
fn bottom_gradient(color: Color) -> LinearGradient {
    LinearGradient::two_stop(
        Point::new(0.2, 0.0),
        Point::new(1.0, 1.0),
        Color::TRANSPARENT,
        color,
    )
}

/// Layers for an already resolved style config
pub fn layers_for_config(config: &StyleConfig, grain_enabled: bool) -> Vec<OverlayLayer> {
    let mut layers = Vec::with_capacity(6);
    layers.push(OverlayLayer::Wash {
        color: config.wash,
    });
    layers.push(OverlayLayer::GradientTop {
        gradient: top_gradient(config.gradient_top),
    });
    layers.push(OverlayLayer::GradientBottom {
        gradient: bottom_gradient(config.gradient_bottom),
    });
    if grain_enabled && config.grain_intensity > 0.0 {
        layers.push(OverlayLayer::Grain {
            spec: GrainSpec::new(config.grain_intensity),
        });
    }
    layers.push(OverlayLayer::Vignette {
        vignette: Vignette::new(config.vignette),
    });
    let viewfinder = Viewfinder::build(config.viewfinder);
    if !viewfinder.is_empty() {
        layers.push(OverlayLayer::Viewfinder { viewfinder });
    }
    layers
}

/// Ordered overlay layers for a style, bottom to top
pub fn compose_overlay(
    style: CameraStyle,
    grain_enabled: bool,
    base_intensity: f32,
    is_dark: bool,
) -> Vec<OverlayLayer> {
    let config = style_config_for(style, is_dark, base_intensity);
    let layers = layers_for_config(&config, grain_enabled);
    tracing::trace!(
        "compose_overlay: {} -> {:?}",
        style,
        layers.iter().map(|l| l.kind().name()).collect::<Vec<_>>()
    );
    layers
}

/// A grain layer with its dots drawn
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedGrain {
    pub intensity: f32,
    pub dots: Vec<GrainDot>,
}

/// Overlay ready to draw: layer list plus the materialized grain field
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedOverlay {
    pub style: CameraStyle,
    pub layers: Vec<OverlayLayer>,
    pub grain: Option<RenderedGrain>,
}

impl RenderedOverlay {
    pub fn kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(OverlayLayer::kind).collect()
    }
}

/// A mounted overlay
///
/// Holds the grain cache for as long as it stays on screen, so restyling
/// keeps the same grain until the requested density changes.
pub struct FilmOverlay<R = StdRng> {
    grain: GrainCache<R>,
}

impl FilmOverlay<StdRng> {
    pub fn new() -> Self {
        Self {
            grain: GrainCache::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            grain: GrainCache::seeded(seed),
        }
    }
}

impl Default for FilmOverlay<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FilmOverlay<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            grain: GrainCache::with_rng(rng),
        }
    }

    pub fn render(
        &mut self,
        style: CameraStyle,
        grain_enabled: bool,
        base_intensity: f32,
        is_dark: bool,
    ) -> RenderedOverlay {
        let layers = compose_overlay(style, grain_enabled, base_intensity, is_dark);
        self.render_layers(style, layers)
    }

    /// Materialize the grain of an already composed layer list
    pub fn render_layers(
        &mut self,
        style: CameraStyle,
        layers: Vec<OverlayLayer>,
    ) -> RenderedOverlay {
        let grain = layers.iter().find_map(|layer| match layer {
            OverlayLayer::Grain { spec } => Some(RenderedGrain {
                intensity: spec.intensity,
                dots: self.grain.field(spec.density).dots().to_vec(),
            }),
            _ => None,
        });
        RenderedOverlay {
            style,
            layers,
            grain,
        }
    }

    pub fn grain_cache(&self) -> &GrainCache<R> {
        &self.grain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_layer_takes_input() {
        for &style in CameraStyle::all() {
            for layer in compose_overlay(style, true, 0.3, false) {
                assert!(!layer.intercepts_input());
            }
        }
    }

    #[test]
    fn brush_only_for_fills() {
        let layers = compose_overlay(CameraStyle::Leica, true, 0.3, false);
        let with_brush: Vec<LayerKind> = layers
            .iter()
            .filter(|l| l.brush().is_some())
            .map(OverlayLayer::kind)
            .collect();
        assert_eq!(
            with_brush,
            vec![
                LayerKind::Wash,
                LayerKind::GradientTop,
                LayerKind::GradientBottom
            ]
        );
    }

    #[test]
    fn mounted_overlay_keeps_grain_across_renders() {
        let mut overlay = FilmOverlay::seeded(11);
        let first = overlay.render(CameraStyle::Polaroid, true, 0.3, false);
        let second = overlay.render(CameraStyle::Movie, true, 0.3, true);
        let a = first.grain.expect("polaroid grain");
        let b = second.grain.expect("movie grain");
        assert_eq!(a.dots, b.dots);
        assert_eq!(b.intensity, 0.15);
        assert_eq!(overlay.grain_cache().generations(), 1);
    }

    #[test]
    fn grain_disabled_renders_no_dots() {
        let mut overlay = FilmOverlay::seeded(1);
        let out = overlay.render(CameraStyle::Fuji, false, 0.3, false);
        assert_eq!(out.grain, None);
        assert_eq!(overlay.grain_cache().generations(), 0);
    }
}
