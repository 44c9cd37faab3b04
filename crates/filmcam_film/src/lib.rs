//! filmcam film looks
//!
//! Maps a [`CameraStyle`] to its film parameters and composes the layers
//! drawn over the camera preview:
//!
//! ```rust
//! use filmcam_film::{compose_overlay, CameraStyle, LayerKind};
//!
//! let layers = compose_overlay(CameraStyle::Normal, true, 0.3, false);
//! let kinds: Vec<_> = layers.iter().map(|l| l.kind()).collect();
//! assert_eq!(kinds.last(), Some(&LayerKind::Vignette));
//! ```

pub mod compose;
pub mod grain;
pub mod registry;
pub mod style;
pub mod viewfinder;
pub mod vignette;

pub use compose::{
    compose_overlay, layers_for_config, FilmOverlay, LayerKind, OverlayLayer, RenderedGrain,
    RenderedOverlay,
};
pub use grain::{
    clamp_density, GrainCache, GrainDot, GrainField, GrainSpec, DEFAULT_DENSITY, MAX_DENSITY,
};
pub use registry::{style_config_for, style_config_for_id, StyleConfig, DEFAULT_INTENSITY};
pub use style::{CameraStyle, ViewfinderVariant};
pub use viewfinder::{Viewfinder, ViewfinderElement};
pub use vignette::{Vignette, VIGNETTE_BAND};
