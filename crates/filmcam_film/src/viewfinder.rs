//! Viewfinder decorations
//!
//! Each decorated style draws a small fixed set of shapes positioned
//! relative to the frame. Percentages are of the frame extent on the same
//! axis; plain numbers are layout units.

use filmcam_core::{Color, Corner, Edge, Length};
use serde::Serialize;
use smallvec::SmallVec;

use crate::style::{CameraStyle, ViewfinderVariant};

/// Outline stroke
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Soft glow around a shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Glow {
    pub color: Color,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One decoration shape
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ViewfinderElement {
    /// L-shaped bracket opening toward the frame center
    CornerBracket {
        corner: Corner,
        /// Offset from the left/right edge
        inset_x: Length,
        /// Offset from the top/bottom edge
        inset_y: Length,
        arm: f32,
        stroke: Stroke,
    },
    /// Rectangle outline centered in the frame
    CenterFrame {
        width: f32,
        height: f32,
        radius: f32,
        stroke: Stroke,
    },
    /// Opaque full-height mask along a side
    SideMask {
        edge: Edge,
        width: Length,
        fill: Color,
    },
    /// Hairline through the frame center
    Hairline {
        orientation: Orientation,
        length: Length,
        thickness: f32,
        color: Color,
    },
    /// Full-width letterbox bar along the top or bottom
    LetterboxBar {
        edge: Edge,
        height: Length,
        fill: Color,
    },
    /// Outline inset from every edge
    InsetBorder { inset: Length, stroke: Stroke },
    /// Round indicator placed from a corner of the (optionally inset) frame
    Dot {
        corner: Corner,
        frame_inset: Length,
        offset_x: f32,
        offset_y: f32,
        diameter: f32,
        fill: Color,
        glow: Option<Glow>,
    },
    /// Rounded bar placed from a corner
    Bar {
        corner: Corner,
        offset_x: f32,
        offset_y: f32,
        width: f32,
        height: f32,
        radius: f32,
        fill: Color,
    },
}

/// Decoration shapes for one variant
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Viewfinder {
    pub variant: ViewfinderVariant,
    pub elements: SmallVec<[ViewfinderElement; 5]>,
}

impl Viewfinder {
    /// Shapes for a variant; `None` has no elements
    pub fn build(variant: ViewfinderVariant) -> Self {
        let elements = match variant {
            ViewfinderVariant::None => SmallVec::new(),
            ViewfinderVariant::LeicaBrackets => leica_brackets(),
            ViewfinderVariant::HasselbladMask => hasselblad_mask(),
            ViewfinderVariant::MovieBars => movie_bars(),
            ViewfinderVariant::FujiInfo => fuji_info(),
        };
        Self { variant, elements }
    }

    pub fn for_style(style: CameraStyle) -> Self {
        Self::build(style.viewfinder())
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn leica_brackets() -> SmallVec<[ViewfinderElement; 5]> {
    let stroke = Stroke::new(Color::rgba8(255, 255, 255, 0.6), 1.0);
    let mut out: SmallVec<[ViewfinderElement; 5]> = Corner::all()
        .iter()
        .map(|&corner| ViewfinderElement::CornerBracket {
            corner,
            inset_x: Length::Percent(10.0),
            inset_y: Length::Percent(15.0),
            arm: 40.0,
            stroke,
        })
        .collect();
    out.push(ViewfinderElement::CenterFrame {
        width: 20.0,
        height: 20.0,
        radius: 2.0,
        stroke: Stroke::new(Color::rgba8(255, 255, 255, 0.4), 1.0),
    });
    out
}

fn hasselblad_mask() -> SmallVec<[ViewfinderElement; 5]> {
    let mask = Color::rgba8(0, 0, 0, 0.8);
    let line = Color::rgba8(255, 255, 255, 0.2);
    smallvec::smallvec![
        ViewfinderElement::SideMask {
            edge: Edge::Left,
            width: Length::Percent(12.5),
            fill: mask,
        },
        ViewfinderElement::SideMask {
            edge: Edge::Right,
            width: Length::Percent(12.5),
            fill: mask,
        },
        ViewfinderElement::Hairline {
            orientation: Orientation::Horizontal,
            length: Length::Percent(75.0),
            thickness: 0.5,
            color: line,
        },
        ViewfinderElement::Hairline {
            orientation: Orientation::Vertical,
            length: Length::Percent(100.0),
            thickness: 0.5,
            color: line,
        },
    ]
}

fn movie_bars() -> SmallVec<[ViewfinderElement; 5]> {
    let bar = Color::rgba8(0, 0, 0, 0.9);
    smallvec::smallvec![
        ViewfinderElement::LetterboxBar {
            edge: Edge::Top,
            height: Length::Percent(15.0),
            fill: bar,
        },
        ViewfinderElement::LetterboxBar {
            edge: Edge::Bottom,
            height: Length::Percent(15.0),
            fill: bar,
        },
        ViewfinderElement::InsetBorder {
            inset: Length::Percent(15.0),
            stroke: Stroke::new(Color::rgba8(255, 255, 255, 0.1), 1.0),
        },
        ViewfinderElement::Dot {
            corner: Corner::TopRight,
            frame_inset: Length::Percent(15.0),
            offset_x: 10.0,
            offset_y: 10.0,
            diameter: 6.0,
            fill: Color::rgba8(255, 0, 0, 0.5),
            glow: None,
        },
    ]
}

fn fuji_info() -> SmallVec<[ViewfinderElement; 5]> {
    let green = Color::from_hex(0x4CAF50);
    smallvec::smallvec![
        ViewfinderElement::Dot {
            corner: Corner::TopLeft,
            frame_inset: Length::Px(0.0),
            offset_x: 20.0,
            offset_y: 20.0,
            diameter: 8.0,
            fill: green,
            glow: Some(Glow {
                color: green,
                radius: 4.0,
                opacity: 0.8,
            }),
        },
        ViewfinderElement::Bar {
            corner: Corner::BottomRight,
            offset_x: 20.0,
            offset_y: 20.0,
            width: 40.0,
            height: 4.0,
            radius: 2.0,
            fill: Color::rgba8(255, 255, 255, 0.5),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leica_has_four_brackets_and_center() {
        let vf = Viewfinder::for_style(CameraStyle::Leica);
        let brackets: Vec<Corner> = vf
            .elements
            .iter()
            .filter_map(|e| match e {
                ViewfinderElement::CornerBracket { corner, .. } => Some(*corner),
                _ => None,
            })
            .collect();
        assert_eq!(brackets, Corner::all().to_vec());
        assert!(matches!(
            vf.elements.last(),
            Some(ViewfinderElement::CenterFrame { width, .. }) if *width == 20.0
        ));
    }

    #[test]
    fn hasselblad_masks_leave_a_square() {
        let vf = Viewfinder::for_style(CameraStyle::Hasselblad);
        let masked: f32 = vf
            .elements
            .iter()
            .filter_map(|e| match e {
                ViewfinderElement::SideMask { width, .. } => Some(width.resolve(100.0)),
                _ => None,
            })
            .sum();
        assert_eq!(masked, 25.0);
        let lines = vf
            .elements
            .iter()
            .filter(|e| matches!(e, ViewfinderElement::Hairline { .. }))
            .count();
        assert_eq!(lines, 2);
    }

    #[test]
    fn movie_has_bars_border_and_one_dot() {
        let vf = Viewfinder::for_style(CameraStyle::Movie);
        assert_eq!(vf.elements.len(), 4);
        let dots = vf
            .elements
            .iter()
            .filter(|e| matches!(e, ViewfinderElement::Dot { .. }))
            .count();
        assert_eq!(dots, 1);
    }

    #[test]
    fn undecorated_styles_are_empty() {
        assert!(Viewfinder::for_style(CameraStyle::Polaroid).is_empty());
        assert!(Viewfinder::for_style(CameraStyle::Normal).is_empty());
        assert_eq!(Viewfinder::for_style(CameraStyle::Fuji).elements.len(), 2);
    }
}
