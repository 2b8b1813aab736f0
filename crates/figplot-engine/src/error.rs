//! Error types for figure output.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while laying out, rasterizing or emitting a figure.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The raster encoder rejected the image.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// The SVG serializer's writer refused output.
    #[error("SVG serialization failed")]
    Svg(#[from] std::fmt::Error),

    /// A pixmap of this size cannot be allocated.
    #[error("invalid canvas size {width}x{height}")]
    Canvas { width: u32, height: u32 },

    /// The patch cannot be mapped onto the canvas (non-finite extent).
    #[error("figure layout failed: {0}")]
    Layout(String),

    /// The window pixel buffer could not be acquired or presented.
    #[error("presentation surface error: {0}")]
    Surface(String),

    /// Window or event loop failure.
    #[error(transparent)]
    Window(#[from] anyhow::Error),
}

impl From<softbuffer::SoftBufferError> for Error {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        Error::Surface(e.to_string())
    }
}
