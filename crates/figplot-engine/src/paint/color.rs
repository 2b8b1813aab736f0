use resvg::tiny_skia;

/// Straight-alpha sRGB color with 8-bit channels.
///
/// Drivers convert to their own representation at the edge: tiny-skia paint,
/// SVG hex literal, or a packed `0RGB` word for the window buffer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff);

    /// matplotlib's first cycle colour (`C0`), used as the default patch face.
    pub const TAB_BLUE: Color = Color::from_srgb_u8(0x1f, 0x77, 0xb4, 0xff);

    #[inline]
    pub const fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 0xff
    }

    /// `#rrggbb` without alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a `[0, 1]` fraction.
    #[inline]
    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Packs into the `0RGB` layout expected by window pixel buffers.
    #[inline]
    pub fn to_0rgb(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Rec. 709 relative luminance on the 0..=255 scale.
    #[inline]
    pub fn luminance(self) -> f32 {
        0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32
    }

    #[inline]
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<tiny_skia::ColorU8> for Color {
    fn from(c: tiny_skia::ColorU8) -> Self {
        Color::from_srgb_u8(c.red(), c.green(), c.blue(), c.alpha())
    }
}
