use resvg::tiny_skia::{Path, PathBuilder};

use crate::coords::{Bounds, Vec2};
use crate::figure::Layout;

/// Rectangle grown from a corner and rotated about that corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub anchor: Vec2,
    pub width: f64,
    pub height: f64,
    /// Counter-clockwise, degrees.
    pub angle: f64,
}

impl Rectangle {
    #[inline]
    pub fn new(anchor: Vec2, width: f64, height: f64, angle: f64) -> Self {
        Self { anchor, width, height, angle }
    }

    /// Corners after rotation, counter-clockwise from the unrotated minimum.
    ///
    /// Negative sizes extend left/down from the anchor.
    pub fn corners(&self) -> [Vec2; 4] {
        let b = Bounds {
            min: self.anchor,
            max: self.anchor + Vec2::new(self.width, self.height),
        }
        .normalized();
        [
            b.min,
            Vec2::new(b.max.x, b.min.y),
            b.max,
            Vec2::new(b.min.x, b.max.y),
        ]
        .map(|p| p.rotated_about(self.anchor, self.angle))
    }

    pub fn bounds(&self) -> Bounds {
        // Four points, never empty.
        Bounds::from_points(self.corners()).unwrap_or_default()
    }

    pub fn path(&self, layout: &Layout) -> Option<Path> {
        if self.width == 0.0 || self.height == 0.0 {
            return None;
        }
        let [p0, p1, p2, p3] = self.corners().map(|p| layout.to_pixel(p));

        let mut pb = PathBuilder::new();
        pb.move_to(p0.x as f32, p0.y as f32);
        for p in [p1, p2, p3] {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();
        pb.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Bounds, b: Bounds) -> bool {
        let d = [
            a.min.x - b.min.x,
            a.min.y - b.min.y,
            a.max.x - b.max.x,
            a.max.y - b.max.y,
        ];
        d.iter().all(|v| v.abs() < 1e-9)
    }

    #[test]
    fn unrotated_bounds_grow_from_anchor() {
        let r = Rectangle::new(Vec2::new(1.0, 2.0), 4.0, 3.0, 0.0);
        assert_eq!(r.bounds(), Bounds::new(1.0, 2.0, 5.0, 5.0));
    }

    #[test]
    fn negative_width_extends_left() {
        let r = Rectangle::new(Vec2::new(1.0, 2.0), -4.0, 3.0, 0.0);
        assert_eq!(r.bounds(), Bounds::new(-3.0, 2.0, 1.0, 5.0));
    }

    #[test]
    fn quarter_turn_rotates_about_anchor() {
        let r = Rectangle::new(Vec2::zero(), 4.0, 2.0, 90.0);
        assert!(close(r.bounds(), Bounds::new(-2.0, 0.0, 0.0, 4.0)));
    }

    #[test]
    fn anchor_is_a_corner() {
        let r = Rectangle::new(Vec2::new(3.0, 3.0), 2.0, 2.0, 30.0);
        assert!(r.corners().contains(&Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn flat_rectangle_has_no_path() {
        let r = Rectangle::new(Vec2::zero(), 4.0, 0.0, 0.0);
        let layout = Layout::new(r.bounds(), 640, 480).unwrap();
        assert!(r.path(&layout).is_none());
    }

    #[test]
    fn small_rectangle_far_from_origin_keeps_its_shape() {
        let r = Rectangle::new(Vec2::new(-123_456.7, 98_765.4), 0.02, 0.01, 0.0);
        let layout = Layout::new(r.bounds(), 640, 480).unwrap();
        let b = r.path(&layout).unwrap().bounds();
        let ratio = b.width() as f64 / b.height() as f64;
        assert!((ratio - 2.0).abs() < 1e-3, "aspect {ratio}");
    }
}
