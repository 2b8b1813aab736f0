use std::path::PathBuf;

use image::RgbImage;

use crate::error::Result;
use crate::figure::{CanvasConfig, Figure};
use crate::format::FileFormat;

use super::{Driver, svg};

/// Writes the figure to a file in a registry format.
#[derive(Debug, Clone)]
pub struct FileDriver {
    path: PathBuf,
    format: FileFormat,
    canvas: CanvasConfig,
}

impl FileDriver {
    pub fn new(path: impl Into<PathBuf>, format: FileFormat, canvas: CanvasConfig) -> Self {
        Self { path: path.into(), format, canvas }
    }
}

impl Driver for FileDriver {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        let CanvasConfig { width, height, .. } = self.canvas;

        match self.format {
            FileFormat::Raster(format) => {
                let pixmap = figure.rasterize(width, height)?;

                // The background is composited in, so alpha carries no information.
                let mut image = RgbImage::new(width, height);
                for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
                    let c = src.demultiply();
                    *dst = image::Rgb([c.red(), c.green(), c.blue()]);
                }
                image.save_with_format(&self.path, format)?;
            }
            FileFormat::Svg => {
                let document = svg::document(figure, width, height)?;
                std::fs::write(&self.path, document)?;
            }
        }

        log::info!("wrote {} figure to {}", self.format, self.path.display());
        Ok(())
    }
}
