//! Standalone SVG writer.
//!
//! The patch is emitted as a single `<path>` built from the same pixel-space
//! outline the rasterizer fills, so vector and raster output line up exactly.

use std::fmt::{self, Write};

use resvg::tiny_skia::{Path, PathSegment};

use crate::error::Result;
use crate::figure::Figure;
use crate::paint::Color;

/// Serializes the figure as an SVG document of `width`×`height` user units.
pub fn document(figure: &Figure, width: u32, height: u32) -> Result<String> {
    let mut out = String::new();
    write_document(&mut out, figure, width, height)?;
    Ok(out)
}

/// Writes the SVG document for `figure` into `out`.
pub fn write_document<W: Write>(out: &mut W, figure: &Figure, width: u32, height: u32) -> Result<()> {
    let layout = figure.layout(width, height)?;
    let patch = figure.patch();

    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )?;
    write!(out, "  <rect width=\"{width}\" height=\"{height}\"")?;
    write_fill(out, figure.background())?;
    writeln!(out, "/>")?;
    if let Some(path) = patch.path(&layout) {
        write!(out, "  <path d=\"")?;
        write_path_data(out, &path)?;
        write!(out, "\"")?;
        write_fill(out, patch.face())?;
        writeln!(out, "/>")?;
    }
    writeln!(out, "</svg>")?;

    Ok(())
}

fn write_fill<W: Write>(out: &mut W, color: Color) -> fmt::Result {
    write!(out, " fill=\"{}\"", color.to_hex())?;
    if !color.is_opaque() {
        write!(out, " fill-opacity=\"{:.3}\"", color.opacity())?;
    }
    Ok(())
}

fn write_path_data<W: Write>(out: &mut W, path: &Path) -> fmt::Result {
    for (i, segment) in path.segments().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        match segment {
            PathSegment::MoveTo(p) => write!(out, "M{:.3} {:.3}", p.x, p.y)?,
            PathSegment::LineTo(p) => write!(out, "L{:.3} {:.3}", p.x, p.y)?,
            PathSegment::QuadTo(c, p) => write!(out, "Q{:.3} {:.3} {:.3} {:.3}", c.x, c.y, p.x, p.y)?,
            PathSegment::CubicTo(c1, c2, p) => write!(
                out,
                "C{:.3} {:.3} {:.3} {:.3} {:.3} {:.3}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            )?,
            PathSegment::Close => out.write_char('Z')?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::patch::{Circle, Outline, Patch, Rectangle};
    use resvg::usvg;

    fn rect_figure() -> Figure {
        Figure::new(Patch::new(Outline::Rectangle(Rectangle::new(Vec2::zero(), 4.0, 2.0, 0.0))))
    }

    #[test]
    fn document_parses_as_svg() {
        let doc = document(&rect_figure(), 640, 480).unwrap();
        let tree = usvg::Tree::from_str(&doc, &usvg::Options::default()).unwrap();
        assert_eq!(tree.size().width(), 640.0);
        assert_eq!(tree.size().height(), 480.0);
    }

    #[test]
    fn rectangle_is_a_closed_polygon() {
        let doc = document(&rect_figure(), 640, 480).unwrap();
        let d = doc
            .lines()
            .find(|l| l.contains("<path"))
            .expect("path element");
        assert!(d.contains("M"));
        assert_eq!(d.matches('L').count(), 3);
        assert!(d.contains('Z'));
        assert!(d.contains("fill=\"#1f77b4\""));
    }

    #[test]
    fn circle_uses_curves() {
        let fig = Figure::new(Patch::new(Outline::Circle(Circle::new(Vec2::new(1.0, 2.0), 5.0))));
        let doc = document(&fig, 640, 480).unwrap();
        assert!(doc.contains(" C") || doc.contains("\"C") || doc.contains("Q"));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(
            document(&rect_figure(), 320, 240).unwrap(),
            document(&rect_figure(), 320, 240).unwrap()
        );
    }

    /// Writer that accepts a fixed number of bytes and then fails.
    struct Truncated(usize);

    impl Write for Truncated {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0 = self.0.checked_sub(s.len()).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    #[test]
    fn writer_failure_is_reported() {
        let err = write_document(&mut Truncated(64), &rect_figure(), 640, 480).unwrap_err();
        assert!(matches!(err, crate::error::Error::Svg(_)));
    }

    #[test]
    fn translucent_background_carries_opacity() {
        let fig = rect_figure().with_background(Color::transparent());
        let doc = document(&fig, 10, 10).unwrap();
        assert!(doc.contains("fill-opacity=\"0.000\""));
    }
}
