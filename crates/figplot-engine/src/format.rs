//! Output file formats the backend can write.
//!
//! The registry is built at runtime from the raster encoders compiled into
//! `image`, plus the vector writer in [`crate::driver::svg`]. Callers never
//! hardcode a format list; they ask the registry.

use std::fmt;
use std::path::Path;

use image::ImageFormat;
use thiserror::Error;

/// A writable output format.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FileFormat {
    Raster(ImageFormat),
    Svg,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Raster(format) => write!(f, "{format:?}"),
            FileFormat::Svg => f.write_str("SVG"),
        }
    }
}

/// Why a path could not be mapped to a format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Please specify file extension\nSupported extensions: {supported}")]
    MissingExtension { supported: String },

    #[error("{} file format is not supported\nSupported extensions: {supported}", .extension.to_uppercase())]
    Unsupported { extension: String, supported: String },
}

/// Extension → format table, in discovery order.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    entries: Vec<(String, FileFormat)>,
}

impl FormatRegistry {
    /// Queries the compiled-in encoders.
    pub fn discover() -> Self {
        let mut entries: Vec<(String, FileFormat)> = ImageFormat::all()
            .filter(|format| format.writing_enabled())
            .flat_map(|format| {
                format
                    .extensions_str()
                    .iter()
                    .map(move |ext| (ext.to_string(), FileFormat::Raster(format)))
            })
            .collect();
        entries.push(("svg".to_string(), FileFormat::Svg));

        log::debug!("writable formats: {}", entries.len());
        Self { entries }
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(ext, _)| ext.as_str())
    }

    /// Comma-separated extension list for messages and help text.
    pub fn extension_list(&self) -> String {
        self.extensions().collect::<Vec<_>>().join(", ")
    }

    /// Exact, case-sensitive lookup of a bare extension (no dot).
    pub fn lookup(&self, extension: &str) -> Option<FileFormat> {
        self.entries
            .iter()
            .find(|(ext, _)| ext == extension)
            .map(|&(_, format)| format)
    }

    /// Resolves a path by the text after its last dot.
    pub fn resolve(&self, path: &Path) -> Result<FileFormat, FormatError> {
        let extension = match path.extension() {
            Some(ext) if !ext.is_empty() => ext.to_string_lossy(),
            _ => {
                return Err(FormatError::MissingExtension {
                    supported: self.extension_list(),
                });
            }
        };

        self.lookup(&extension).ok_or_else(|| FormatError::Unsupported {
            extension: extension.into_owned(),
            supported: self.extension_list(),
        })
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::discover()
    }
}
