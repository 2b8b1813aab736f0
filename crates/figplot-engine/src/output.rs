//! Output configuration and the sink that routes a patch to its driver.

use std::path::PathBuf;

use crate::driver::{Driver, FileDriver, TerminalConfig, TerminalDriver, WindowDriver};
use crate::error::Result;
use crate::figure::{CanvasConfig, Figure};
use crate::format::{FileFormat, FormatError, FormatRegistry};
use crate::patch::Patch;

/// Where a figure goes.
///
/// A file path exists only for [`OutputConfig::File`], and always comes with
/// the format the registry resolved for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputConfig {
    /// Interactive window; blocks until closed.
    Show,
    /// Braille text on stdout.
    Console,
    /// Offscreen render written to `path`.
    File { path: PathBuf, format: FileFormat },
}

impl OutputConfig {
    /// Validates `path` against the registry.
    pub fn file(path: impl Into<PathBuf>, registry: &FormatRegistry) -> std::result::Result<Self, FormatError> {
        let path = path.into();
        let format = registry.resolve(&path)?;
        Ok(OutputConfig::File { path, format })
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            OutputConfig::Show => "show",
            OutputConfig::Console => "console",
            OutputConfig::File { .. } => "file",
        }
    }
}

/// Emits constructed patches.
///
/// The window and terminal drivers are held as values and picked per call;
/// either can be swapped out (tests use recording drivers).
pub struct OutputSink {
    canvas: CanvasConfig,
    window: Box<dyn Driver>,
    terminal: Box<dyn Driver>,
}

impl OutputSink {
    pub fn new() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            window: Box::new(WindowDriver::default()),
            terminal: Box::new(TerminalDriver::stdout(TerminalConfig::default())),
        }
    }

    /// Sets the offscreen canvas used for file output.
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_window_driver(mut self, driver: impl Driver + 'static) -> Self {
        self.window = Box::new(driver);
        self
    }

    pub fn with_terminal_driver(mut self, driver: impl Driver + 'static) -> Self {
        self.terminal = Box::new(driver);
        self
    }

    /// Lays the patch out on a figure and hands it to the driver for `config`.
    ///
    /// Takes the patch by value: every patch is emitted exactly once.
    pub fn emit(&mut self, patch: Patch, config: &OutputConfig) -> Result<()> {
        log::info!("emitting {} patch to {}", patch.kind(), config.mode_name());
        let figure = Figure::new(patch).with_background(self.canvas.background);

        match config {
            OutputConfig::Show => self.window.present(&figure),
            OutputConfig::Console => self.terminal.present(&figure),
            OutputConfig::File { path, format } => {
                FileDriver::new(path.clone(), *format, self.canvas).present(&figure)
            }
        }
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::new()
    }
}
