//! Gradient and brush descriptions

use serde::Serialize;

use crate::color::Color;
use crate::geometry::Point;

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient in unit coordinates of the painted area
///
/// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Two-stop gradient from `from` at the start point to `to` at the end point
    pub fn two_stop(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Top-to-bottom gradient
    pub fn vertical(from: Color, to: Color) -> Self {
        Self::two_stop(Point::new(0.0, 0.0), Point::new(0.0, 1.0), from, to)
    }

    /// Left-to-right gradient
    pub fn horizontal(from: Color, to: Color) -> Self {
        Self::two_stop(Point::new(0.0, 0.0), Point::new(1.0, 0.0), from, to)
    }

    pub fn first_color(&self) -> Option<Color> {
        self.stops.first().map(|s| s.color)
    }

    pub fn last_color(&self) -> Option<Color> {
        self.stops.last().map(|s| s.color)
    }
}

/// Brush for filling shapes
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Brush {
    Solid(Color),
    Linear(LinearGradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<LinearGradient> for Brush {
    fn from(gradient: LinearGradient) -> Self {
        Brush::Linear(gradient)
    }
}
