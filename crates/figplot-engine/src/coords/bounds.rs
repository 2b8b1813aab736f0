use super::Vec2;

/// Axis-aligned bounding box in data units (+Y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
        }
    }

    /// Box centred on `center` extending `half` in each direction.
    #[inline]
    pub fn from_center_half_extent(center: Vec2, half: Vec2) -> Self {
        Bounds {
            min: center - half,
            max: center + half,
        }
        .normalized()
    }

    /// Smallest box containing every point. Returns `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut b = Bounds { min: first, max: first };
        for p in points {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Swaps min/max per axis so the extent is non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        Bounds::new(
            self.min.x.min(self.max.x),
            self.min.y.min(self.max.y),
            self.min.x.max(self.max.x),
            self.min.y.max(self.max.y),
        )
    }

    /// Grows each side by `fraction` of the extent on that axis.
    ///
    /// An axis with zero extent is widened by `±0.05` around its value so the
    /// result always has a positive area.
    pub fn with_margins(self, fraction: f64) -> Self {
        let b = self.normalized();
        let (x0, x1) = widen(b.min.x, b.max.x, fraction);
        let (y0, y1) = widen(b.min.y, b.max.y, fraction);
        Bounds::new(x0, y0, x1, y1)
    }
}

fn widen(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    let extent = hi - lo;
    if extent > 0.0 {
        (lo - extent * fraction, hi + extent * fraction)
    } else {
        (lo - 0.05, hi + 0.05)
    }
}
