use resvg::tiny_skia::{Path, PathBuilder};

use crate::coords::{Bounds, Vec2};
use crate::figure::Layout;

/// Circle outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn bounds(&self) -> Bounds {
        let r = self.radius.abs();
        Bounds::from_center_half_extent(self.center, Vec2::new(r, r))
    }

    pub fn path(&self, layout: &Layout) -> Option<Path> {
        let r = self.radius.abs() * layout.scale;
        if r == 0.0 {
            return None;
        }
        let c = layout.to_pixel(self.center);
        PathBuilder::from_circle(c.x as f32, c.y as f32, r as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_for(c: &Circle) -> Layout {
        Layout::new(c.bounds(), 640, 480).unwrap()
    }

    #[test]
    fn bounds_span_diameter() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 5.0);
        assert_eq!(c.bounds(), Bounds::new(-4.0, -3.0, 6.0, 7.0));
    }

    #[test]
    fn negative_radius_behaves_like_positive() {
        let c = Circle::new(Vec2::zero(), -2.0);
        assert_eq!(c.bounds(), Bounds::new(-2.0, -2.0, 2.0, 2.0));
        assert!(c.path(&layout_for(&c)).is_some());
    }

    #[test]
    fn zero_radius_has_no_path() {
        let c = Circle::new(Vec2::zero(), 0.0);
        assert!(c.path(&layout_for(&c)).is_none());
    }

    #[test]
    fn path_is_centered_in_pixel_space_far_from_origin() {
        let c = Circle::new(Vec2::new(1_000_000.3, -250_000.7), 0.01);
        let layout = layout_for(&c);
        let b = c.path(&layout).unwrap().compute_tight_bounds().unwrap();
        let center = layout.to_pixel(c.center);
        assert!(((b.left() + b.right()) as f64 * 0.5 - center.x).abs() < 0.05);
        assert!(((b.top() + b.bottom()) as f64 * 0.5 - center.y).abs() < 0.05);
        assert!((b.width() as f64 - 0.02 * layout.scale).abs() < 0.5);
    }
}
