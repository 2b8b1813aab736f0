use std::io::{self, Stdout, Write};

use resvg::tiny_skia::Pixmap;

use crate::error::Result;
use crate::figure::Figure;
use crate::paint::Color;

use super::Driver;

/// Braille cell geometry: two dot columns, four dot rows.
const DOTS_X: u32 = 2;
const DOTS_Y: u32 = 4;

/// Bit for the dot at `[row][column]` inside a braille cell (U+2800 block).
const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Luminance difference from the background that counts as ink.
const INK_THRESHOLD: f32 = 48.0;

/// Character grid used for terminal output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    pub columns: u32,
    pub rows: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { columns: 80, rows: 24 }
    }
}

/// Draws the figure as braille text, one dot per canvas pixel.
pub struct TerminalDriver<W: Write> {
    out: W,
    config: TerminalConfig,
}

impl TerminalDriver<Stdout> {
    pub fn stdout(config: TerminalConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> TerminalDriver<W> {
    pub fn new(out: W, config: TerminalConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Driver for TerminalDriver<W> {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        let TerminalConfig { columns, rows } = self.config;
        let pixmap = figure.rasterize(columns * DOTS_X, rows * DOTS_Y)?;

        for line in braille_lines(&pixmap, figure.background()) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Converts a pixmap whose size is a multiple of the cell geometry into text rows.
pub fn braille_lines(pixmap: &Pixmap, background: Color) -> Vec<String> {
    let columns = pixmap.width() / DOTS_X;
    let rows = pixmap.height() / DOTS_Y;
    let background = background.luminance();

    let inked = |x: u32, y: u32| {
        pixmap
            .pixel(x, y)
            .map(|p| (Color::from(p.demultiply()).luminance() - background).abs() > INK_THRESHOLD)
            .unwrap_or(false)
    };

    (0..rows)
        .map(|row| {
            (0..columns)
                .map(|col| {
                    let mut bits = 0u8;
                    for (dy, row_bits) in DOT_BITS.iter().enumerate() {
                        for (dx, bit) in row_bits.iter().enumerate() {
                            if inked(col * DOTS_X + dx as u32, row * DOTS_Y + dy as u32) {
                                bits |= bit;
                            }
                        }
                    }
                    char::from_u32(0x2800 + bits as u32).unwrap_or(' ')
                })
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::patch::{Circle, Outline, Patch};

    fn circle() -> Figure {
        Figure::new(Patch::new(Outline::Circle(Circle::new(Vec2::new(1.0, 2.0), 5.0))))
    }

    fn render(config: TerminalConfig) -> String {
        let mut driver = TerminalDriver::new(Vec::new(), config);
        driver.present(&circle()).unwrap();
        String::from_utf8(driver.into_inner()).unwrap()
    }

    #[test]
    fn grid_matches_config() {
        let text = render(TerminalConfig { columns: 40, rows: 12 });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|l| l.chars().count() == 40));
    }

    #[test]
    fn only_braille_characters() {
        let text = render(TerminalConfig::default());
        assert!(text.chars().filter(|c| *c != '\n').all(|c| ('\u{2800}'..='\u{28FF}').contains(&c)));
    }

    #[test]
    fn center_is_inked_and_corner_is_blank() {
        let text = render(TerminalConfig { columns: 40, rows: 12 });
        let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        assert_eq!(lines[6][20], '\u{28FF}');
        assert_eq!(lines[0][0], '\u{2800}');
    }
}
