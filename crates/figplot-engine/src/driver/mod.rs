//! Output drivers.
//!
//! A driver takes a laid-out [`Figure`] to one destination. Which driver runs
//! is decided per emit by [`crate::output::OutputSink`], never by global state.

pub mod file;
pub mod svg;
pub mod terminal;
pub mod window;

use crate::error::Result;
use crate::figure::Figure;

pub use file::FileDriver;
pub use terminal::{TerminalConfig, TerminalDriver};
pub use window::{WindowConfig, WindowDriver};

/// A destination for a figure.
///
/// Interactive drivers block until the user dismisses the output.
pub trait Driver {
    fn present(&mut self, figure: &Figure) -> Result<()>;
}
