use resvg::tiny_skia::{self, Path, PathBuilder, Transform};

use crate::coords::{Bounds, Vec2};
use crate::figure::Layout;

/// Ellipse with full axis lengths `width`/`height`, rotated about its centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub width: f64,
    pub height: f64,
    /// Counter-clockwise, degrees.
    pub angle: f64,
}

impl Ellipse {
    #[inline]
    pub fn new(center: Vec2, width: f64, height: f64, angle: f64) -> Self {
        Self { center, width, height, angle }
    }

    #[inline]
    fn semi_axes(&self) -> (f64, f64) {
        (self.width.abs() * 0.5, self.height.abs() * 0.5)
    }

    /// Tight box of the rotated ellipse.
    pub fn bounds(&self) -> Bounds {
        let (a, b) = self.semi_axes();
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let hx = ((a * cos).powi(2) + (b * sin).powi(2)).sqrt();
        let hy = ((a * sin).powi(2) + (b * cos).powi(2)).sqrt();
        Bounds::from_center_half_extent(self.center, Vec2::new(hx, hy))
    }

    pub fn path(&self, layout: &Layout) -> Option<Path> {
        let (a, b) = self.semi_axes();
        let (a, b) = (a * layout.scale, b * layout.scale);
        if a == 0.0 || b == 0.0 {
            return None;
        }
        let c = layout.to_pixel(self.center);
        let (cx, cy) = (c.x as f32, c.y as f32);
        let oval = tiny_skia::Rect::from_ltrb(
            cx - a as f32,
            cy - b as f32,
            cx + a as f32,
            cy + b as f32,
        )?;
        // Pixel space is +Y down, so a counter-clockwise turn is a negative angle.
        let rotation = Transform::from_rotate_at(-self.angle as f32, cx, cy);
        PathBuilder::from_oval(oval)?.transform(rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrotated_bounds_are_half_axes() {
        let e = Ellipse::new(Vec2::new(1.0, 1.0), 4.0, 2.0, 0.0);
        assert_eq!(e.bounds(), Bounds::new(-1.0, 0.0, 3.0, 2.0));
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let e = Ellipse::new(Vec2::zero(), 4.0, 2.0, 90.0);
        let b = e.bounds();
        assert!((b.width() - 2.0).abs() < 1e-9);
        assert!((b.height() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_keeps_center() {
        let e = Ellipse::new(Vec2::new(-3.0, 5.0), 6.0, 1.0, 33.0);
        let c = e.bounds().center();
        assert!((c.x + 3.0).abs() < 1e-9 && (c.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_axis_has_no_path() {
        let e = Ellipse::new(Vec2::zero(), 0.0, 2.0, 0.0);
        let layout = Layout::new(e.bounds(), 640, 480).unwrap();
        assert!(e.path(&layout).is_none());
    }

    #[test]
    fn pixel_path_matches_data_bounds() {
        let e = Ellipse::new(Vec2::new(500_000.25, 0.0), 0.04, 0.01, 30.0);
        let layout = Layout::new(e.bounds(), 640, 480).unwrap();
        let path = e.path(&layout).unwrap().compute_tight_bounds().unwrap();
        let data = e.bounds();
        let expected_w = data.width() * layout.scale;
        let expected_h = data.height() * layout.scale;
        assert!((path.width() as f64 - expected_w).abs() < 1.0);
        assert!((path.height() as f64 - expected_h).abs() < 1.0);
    }
}
