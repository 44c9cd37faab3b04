//! Geometry primitives for overlay shapes
//!
//! Overlay elements are positioned relative to the frame they cover, so most
//! offsets are expressed as a [`Length`] that is either absolute units or a
//! percentage of the frame.

use serde::Serialize;

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }
}

/// A length relative to the frame an overlay covers
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute layout units
    Px(f32),
    /// Percentage (0-100) of the frame's extent along the same axis
    Percent(f32),
}

impl Length {
    /// Resolve against the frame extent along this length's axis
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Length::Px(v) => v,
            Length::Percent(p) => extent * p / 100.0,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(0.0)
    }
}

/// One side of a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn all() -> &'static [Edge] {
        const EDGES: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
        &EDGES
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// One corner of a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn all() -> &'static [Corner] {
        const CORNERS: [Corner; 4] = [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ];
        &CORNERS
    }

    /// The two frame edges that meet at this corner, top/bottom first
    pub fn edges(self) -> (Edge, Edge) {
        match self {
            Corner::TopLeft => (Edge::Top, Edge::Left),
            Corner::TopRight => (Edge::Top, Edge::Right),
            Corner::BottomLeft => (Edge::Bottom, Edge::Left),
            Corner::BottomRight => (Edge::Bottom, Edge::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_lengths_scale_with_extent() {
        assert_eq!(Length::Percent(15.0).resolve(200.0), 30.0);
        assert_eq!(Length::Px(40.0).resolve(200.0), 40.0);
    }

    #[test]
    fn corners_touch_two_edges() {
        for corner in Corner::all() {
            let (a, b) = corner.edges();
            assert!(a.is_horizontal());
            assert!(!b.is_horizontal());
        }
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(10.0, 10.0, 20.0, 40.0);
        assert_eq!(r.center(), Point::new(20.0, 30.0));
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 40.0);
    }
}
