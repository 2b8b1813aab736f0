//! Shape-kind dispatch from [`ShapeSpec`] to [`Patch`].

use crate::patch::{Circle, Ellipse, Outline, Patch, Rectangle};
use crate::shape::{BoxSpec, ShapeSpec};

/// Unconstructed plot: holds a spec until [`construct`](Self::construct) turns it into a patch.
///
/// `construct` consumes the plotter, so a spec is plotted at most once and an
/// output can only ever receive a patch that was actually built.
#[derive(Debug, Clone)]
pub struct Plotter {
    spec: ShapeSpec,
}

impl Plotter {
    #[inline]
    pub fn new(spec: ShapeSpec) -> Self {
        Self { spec }
    }

    pub fn construct(self) -> Patch {
        log::debug!("constructing {} patch: {:?}", self.spec.kind(), self.spec);

        let outline = match self.spec {
            ShapeSpec::Circle(c) => Outline::Circle(Circle::new(c.center, c.radius)),
            ShapeSpec::Rectangle(b) => Outline::Rectangle(rectangle(b)),
            ShapeSpec::Ellipse(b) => Outline::Ellipse(ellipse(b)),
        };
        Patch::new(outline)
    }
}

fn rectangle(b: BoxSpec) -> Rectangle {
    Rectangle::new(b.anchor, b.width, b.height, b.angle)
}

fn ellipse(b: BoxSpec) -> Ellipse {
    Ellipse::new(b.anchor, b.width, b.height, b.angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::shape::ShapeKind;

    #[test]
    fn circle_is_centered_with_radius() {
        for &(x, y, r) in &[(0.0, 0.0, 1.0), (1.0, 2.0, 5.0), (-7.5, 3.25, 0.5)] {
            let patch = Plotter::new(ShapeSpec::circle(Vec2::new(x, y), r)).construct();
            assert_eq!(patch.outline(), &Outline::Circle(Circle::new(Vec2::new(x, y), r)));
        }
    }

    #[test]
    fn rectangle_and_ellipse_share_parameters() {
        let anchor = Vec2::new(1.5, -2.0);
        let rect = Plotter::new(ShapeSpec::rectangle(anchor, 4.0, 3.0, 30.0)).construct();
        let ell = Plotter::new(ShapeSpec::ellipse(anchor, 4.0, 3.0, 30.0)).construct();

        let Outline::Rectangle(r) = rect.outline() else { panic!("expected rectangle") };
        let Outline::Ellipse(e) = ell.outline() else { panic!("expected ellipse") };

        assert_eq!((r.anchor, r.width, r.height, r.angle), (e.center, e.width, e.height, e.angle));
        assert_eq!(rect.kind(), ShapeKind::Rectangle);
        assert_eq!(ell.kind(), ShapeKind::Ellipse);
    }
}
