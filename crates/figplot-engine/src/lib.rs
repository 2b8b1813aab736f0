//! figplot engine crate.
//!
//! Turns a single [`ShapeSpec`] into a patch, lays it out on a figure and sends
//! it to a window, the terminal, or a file.
//!
//! ```rust,ignore
//! let registry = FormatRegistry::discover();
//! let config = OutputConfig::file("circle.png", &registry)?;
//! let patch = Plotter::new(ShapeSpec::circle(Vec2::new(1.0, 2.0), 5.0)).construct();
//! OutputSink::new().emit(patch, &config)?;
//! ```

pub mod coords;
pub mod driver;
pub mod error;
pub mod figure;
pub mod format;
pub mod logging;
pub mod output;
pub mod paint;
pub mod patch;
pub mod plotter;
pub mod shape;

pub use coords::Vec2;
pub use error::{Error, Result};
pub use figure::{CanvasConfig, Figure};
pub use format::{FileFormat, FormatError, FormatRegistry};
pub use output::{OutputConfig, OutputSink};
pub use patch::Patch;
pub use plotter::Plotter;
pub use shape::{BoxSpec, CircleSpec, ShapeKind, ShapeSpec};
