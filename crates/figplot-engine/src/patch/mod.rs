//! Drawable patches.
//!
//! A [`Patch`] is the backend-side counterpart of a [`ShapeSpec`]: an outline in
//! data coordinates plus its fill. It knows its bounding box (for autoscaling)
//! and how to turn itself into a pixel-space tiny-skia path for a given [`Layout`].
//!
//! Extending:
//! - add a new outline module under `patch::*`
//! - add a new variant to [`Outline`]
//! - implement `bounds` and `path` inside that module
//!
//! [`ShapeSpec`]: crate::shape::ShapeSpec
//! [`Layout`]: crate::figure::Layout

mod circle;
mod ellipse;
mod rectangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use rectangle::Rectangle;

use resvg::tiny_skia::Path;

use crate::coords::Bounds;
use crate::figure::Layout;
use crate::paint::Color;
use crate::shape::ShapeKind;

/// Outline geometry of a patch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Circle(Circle),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl Outline {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Outline::Circle(_) => ShapeKind::Circle,
            Outline::Rectangle(_) => ShapeKind::Rectangle,
            Outline::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Outline::Circle(c) => c.bounds(),
            Outline::Rectangle(r) => r.bounds(),
            Outline::Ellipse(e) => e.bounds(),
        }
    }

    /// Path in pixel space, or `None` when the outline encloses no area.
    ///
    /// Geometry goes through [`Layout::to_pixel`] in `f64` first, so only
    /// pixel coordinates are narrowed to `f32`.
    pub fn path(&self, layout: &Layout) -> Option<Path> {
        match self {
            Outline::Circle(c) => c.path(layout),
            Outline::Rectangle(r) => r.path(layout),
            Outline::Ellipse(e) => e.path(layout),
        }
    }
}

/// A single filled shape, ready to be placed on a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    outline: Outline,
    face: Color,
}

impl Patch {
    #[inline]
    pub fn new(outline: Outline) -> Self {
        Self { outline, face: Color::TAB_BLUE }
    }

    #[inline]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    #[inline]
    pub fn face(&self) -> Color {
        self.face
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.outline.kind()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.outline.bounds()
    }

    #[inline]
    pub fn path(&self, layout: &Layout) -> Option<Path> {
        self.outline.path(layout)
    }
}
