//! Film grain dot fields
//!
//! A grain field is a set of randomly placed dots drawn over the frame.
//! Fields are memoized by density in a [`GrainCache`]: asking for the same
//! density again returns the same dots, asking for a new density draws a
//! new field.

use std::ops::Range;

use filmcam_core::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Dots per field when the caller doesn't ask for a density
pub const DEFAULT_DENSITY: usize = 90;

/// Upper bound on dots per field; larger requests are clamped
pub const MAX_DENSITY: usize = 5_000;

/// Dot diameter range, in layout units
pub const DOT_SIZE: Range<f32> = 0.5..2.5;

/// Base dot opacity range, before the style's grain intensity is applied
pub const DOT_OPACITY: Range<f32> = 0.05..0.4;

pub const LIGHT_TINT: u32 = 0xF8F2E9;
pub const DARK_TINT: u32 = 0x2B2622;

/// Grain layer request: how many dots and how strong
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GrainSpec {
    pub density: usize,
    pub intensity: f32,
}

impl GrainSpec {
    pub fn new(intensity: f32) -> Self {
        Self {
            density: DEFAULT_DENSITY,
            intensity,
        }
    }

    pub fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }
}

/// One grain dot
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GrainDot {
    /// Horizontal position, percent of frame width
    pub left: f32,
    /// Vertical position, percent of frame height
    pub top: f32,
    pub size: f32,
    /// Base opacity, scaled by intensity when drawn
    pub opacity: f32,
    pub is_light: bool,
}

impl GrainDot {
    fn draw<R: Rng>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(DOT_SIZE),
            opacity: rng.gen_range(DOT_OPACITY),
            is_light: rng.gen_bool(0.5),
        }
    }

    pub fn tint(&self) -> Color {
        if self.is_light {
            Color::from_hex(LIGHT_TINT)
        } else {
            Color::from_hex(DARK_TINT)
        }
    }

    /// Opacity the dot is drawn with at a given grain intensity
    pub fn rendered_opacity(&self, intensity: f32) -> f32 {
        self.opacity * intensity
    }

    /// Fill color at a given grain intensity
    pub fn fill(&self, intensity: f32) -> Color {
        self.tint().with_alpha(self.rendered_opacity(intensity))
    }
}

/// Clamp a requested density to [`MAX_DENSITY`]
pub fn clamp_density(density: usize) -> usize {
    if density > MAX_DENSITY {
        tracing::warn!(
            "grain density {} exceeds {}, clamping",
            density,
            MAX_DENSITY
        );
        return MAX_DENSITY;
    }
    density
}

/// A generated set of grain dots. Order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GrainField {
    dots: Vec<GrainDot>,
}

impl GrainField {
    /// Draw `count` dots from `rng`, at most [`MAX_DENSITY`]
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let count = clamp_density(count);
        let dots = (0..count).map(|_| GrainDot::draw(rng)).collect();
        Self { dots }
    }

    pub fn dots(&self) -> &[GrainDot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

/// Grain fields memoized by density
///
/// One cache lives as long as the overlay it feeds. The random source is
/// injectable so rendering can be made deterministic.
pub struct GrainCache<R = StdRng> {
    rng: R,
    cached: Option<(usize, GrainField)>,
    generations: u64,
}

impl GrainCache<StdRng> {
    /// Cache seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Cache with a fixed seed, for reproducible fields
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GrainCache<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GrainCache<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            cached: None,
            generations: 0,
        }
    }

    /// Field for `density`, drawing a new one only when density changed
    pub fn field(&mut self, density: usize) -> &GrainField {
        let density = clamp_density(density);
        if matches!(&self.cached, Some((d, _)) if *d != density) {
            self.cached = None;
        }
        let rng = &mut self.rng;
        let generations = &mut self.generations;
        let (_, field) = self.cached.get_or_insert_with(|| {
            tracing::trace!("GrainCache: drawing {} dots", density);
            *generations += 1;
            (density, GrainField::generate(density, rng))
        });
        field
    }

    /// Density of the cached field, if any
    pub fn density(&self) -> Option<usize> {
        self.cached.as_ref().map(|(d, _)| *d)
    }

    /// Number of fields drawn so far
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Drop the cached field; the next request draws a new one
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_density_is_memoized() {
        let mut cache = GrainCache::seeded(7);
        let first = cache.field(DEFAULT_DENSITY).clone();
        let second = cache.field(DEFAULT_DENSITY).clone();
        assert_eq!(first, second);
        assert_eq!(cache.generations(), 1);
    }

    #[test]
    fn new_density_draws_exactly_that_many() {
        let mut cache = GrainCache::seeded(7);
        let first = cache.field(90).clone();
        let second = cache.field(40).clone();
        assert_eq!(first.len(), 90);
        assert_eq!(second.len(), 40);
        assert_eq!(cache.generations(), 2);
        assert_eq!(cache.density(), Some(40));

        // Going back to a previous density is still a change.
        let third = cache.field(90).clone();
        assert_eq!(third.len(), 90);
        assert_ne!(third, first);
        assert_eq!(cache.generations(), 3);
    }

    #[test]
    fn dots_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = GrainField::generate(2_000, &mut rng);
        for dot in field.dots() {
            assert!((0.0..100.0).contains(&dot.left));
            assert!((0.0..100.0).contains(&dot.top));
            assert!(DOT_SIZE.contains(&dot.size));
            assert!(DOT_OPACITY.contains(&dot.opacity));
            let drawn = dot.rendered_opacity(0.15);
            assert!((0.0..=0.4 * 0.15).contains(&drawn));
        }
        let light = field.dots().iter().filter(|d| d.is_light).count();
        assert!(light > 800 && light < 1_200, "light={light}");
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let a = GrainField::generate(16, &mut StdRng::seed_from_u64(3));
        let b = GrainField::generate(16, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn invalidate_forces_redraw() {
        let mut cache = GrainCache::seeded(1);
        cache.field(10);
        cache.invalidate();
        assert_eq!(cache.density(), None);
        cache.field(10);
        assert_eq!(cache.generations(), 2);
    }

    #[test]
    fn oversized_density_is_clamped() {
        let mut cache = GrainCache::seeded(5);
        assert_eq!(cache.field(usize::MAX).len(), MAX_DENSITY);
        assert_eq!(cache.density(), Some(MAX_DENSITY));
        // Any request past the cap maps to the same cached field.
        cache.field(MAX_DENSITY + 1);
        assert_eq!(cache.generations(), 1);
    }

    #[test]
    fn fill_uses_tint_and_scaled_opacity() {
        let dot = GrainDot {
            left: 0.0,
            top: 0.0,
            size: 1.0,
            opacity: 0.2,
            is_light: false,
        };
        let fill = dot.fill(0.5);
        assert_eq!(fill.with_alpha(1.0).to_hex_string(), "#2B2622");
        assert!((fill.a - 0.1).abs() < 1e-6);
    }
}
