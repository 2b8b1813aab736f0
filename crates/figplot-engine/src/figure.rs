//! Figure layout and rasterization.
//!
//! A [`Figure`] places one patch on a canvas the way a "scaled" plot with hidden
//! axes would: fixed subplot margins, 5 % data margins around the patch, a single
//! scale for both axes and the data centred inside the axes box.

use resvg::tiny_skia::{FillRule, Paint, Pixmap, Transform};

use crate::coords::{Bounds, Vec2};
use crate::error::{Error, Result};
use crate::paint::Color;
use crate::patch::Patch;

/// Axes box as fractions of the canvas (left, right, bottom, top), +Y up.
const AXES_LEFT: f64 = 0.125;
const AXES_RIGHT: f64 = 0.9;
const AXES_BOTTOM: f64 = 0.11;
const AXES_TOP: f64 = 0.88;

/// Padding around the patch, as a fraction of its extent per side.
const DATA_MARGIN: f64 = 0.05;

/// Offscreen canvas configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: Color::WHITE,
        }
    }
}

/// Data→pixel mapping for one canvas size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    /// Visible data range, patch bounds plus margins, before aspect fitting.
    pub data_limits: Bounds,
    /// Pixels per data unit, identical on both axes.
    pub scale: f64,
    /// Pixel position of the data-limits centre.
    pub pixel_center: Vec2,
    data_center: Vec2,
}

impl Layout {
    pub fn new(bounds: Bounds, width: u32, height: u32) -> Result<Self> {
        let (w, h) = (width as f64, height as f64);
        let axes_w = w * (AXES_RIGHT - AXES_LEFT);
        let axes_h = h * (AXES_TOP - AXES_BOTTOM);

        let data_limits = bounds.with_margins(DATA_MARGIN);
        let scale = (axes_w / data_limits.width()).min(axes_h / data_limits.height());

        if !data_limits.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return Err(Error::Layout(format!(
                "cannot fit {data_limits:?} into a {width}x{height} canvas"
            )));
        }

        Ok(Self {
            data_limits,
            scale,
            pixel_center: Vec2::new(
                w * (AXES_LEFT + AXES_RIGHT) * 0.5,
                h * (1.0 - (AXES_BOTTOM + AXES_TOP) * 0.5),
            ),
            data_center: data_limits.center(),
        })
    }

    /// Maps a data point to pixel coordinates (+Y down).
    #[inline]
    pub fn to_pixel(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.pixel_center.x + (p.x - self.data_center.x) * self.scale,
            self.pixel_center.y - (p.y - self.data_center.y) * self.scale,
        )
    }
}

/// One patch on a background, independent of canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    patch: Patch,
    background: Color,
}

impl Figure {
    #[inline]
    pub fn new(patch: Patch) -> Self {
        Self { patch, background: Color::WHITE }
    }

    #[inline]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[inline]
    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn layout(&self, width: u32, height: u32) -> Result<Layout> {
        Layout::new(self.patch.bounds(), width, height)
    }

    /// Draws the figure into a new pixmap of the given size.
    pub fn rasterize(&self, width: u32, height: u32) -> Result<Pixmap> {
        let layout = self.layout(width, height)?;
        let mut pixmap = Pixmap::new(width, height).ok_or(Error::Canvas { width, height })?;
        pixmap.fill(self.background.to_skia());

        match self.patch.path(&layout) {
            Some(path) => {
                let mut paint = Paint::default();
                paint.set_color(self.patch.face().to_skia());
                paint.anti_alias = true;
                pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
            None => log::warn!("{} patch encloses no area; drawing an empty figure", self.patch.kind()),
        }

        Ok(pixmap)
    }
}
