//! Shape descriptions as parsed from user input.
//!
//! A [`ShapeSpec`] carries exactly the parameters its kind needs; the enum makes
//! a circle with a width, or a rectangle without an angle, unrepresentable.

use std::fmt;

use crate::coords::Vec2;

/// The three supported figure kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Circle parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleSpec {
    pub center: Vec2,
    pub radius: f64,
}

/// Parameters shared by rectangles and ellipses.
///
/// For a rectangle `anchor` is the corner the box grows from; for an ellipse it
/// is the centre. `width`/`height` are full lengths, `angle` is a
/// counter-clockwise rotation in degrees about the anchor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxSpec {
    pub anchor: Vec2,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

/// Immutable description of one shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeSpec {
    Circle(CircleSpec),
    Rectangle(BoxSpec),
    Ellipse(BoxSpec),
}

impl ShapeSpec {
    #[inline]
    pub fn circle(center: Vec2, radius: f64) -> Self {
        ShapeSpec::Circle(CircleSpec { center, radius })
    }

    #[inline]
    pub fn rectangle(anchor: Vec2, width: f64, height: f64, angle: f64) -> Self {
        ShapeSpec::Rectangle(BoxSpec { anchor, width, height, angle })
    }

    #[inline]
    pub fn ellipse(center: Vec2, width: f64, height: f64, angle: f64) -> Self {
        ShapeSpec::Ellipse(BoxSpec { anchor: center, width, height, angle })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeSpec::Circle(_) => ShapeKind::Circle,
            ShapeSpec::Rectangle(_) => ShapeKind::Rectangle,
            ShapeSpec::Ellipse(_) => ShapeKind::Ellipse,
        }
    }
}
