//! Command-line surface.
//!
//! Parsing is done by clap; the checks clap cannot express (a file path only
//! for file output, an extension the backend can write, finite numbers) run in
//! [`Cli::validate`] before anything is rendered.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Args, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use figplot_engine::{FormatError, FormatRegistry, OutputConfig, ShapeSpec, Vec2};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputType {
    File,
    Show,
    Console,
}

#[derive(Debug, Parser)]
#[command(
    name = "figplot",
    version,
    about = "Plots a single geometric figure",
    long_about = "Plots a single geometric figure.\n\
                  Try `figplot <FIGURE> -h` for figure-specific arguments.\n\
                  If the output type is file, the output path must have a supported extension."
)]
pub struct Cli {
    /// Output type. If choice is file, -o must be specified
    #[arg(short = 't', long = "outputtype", value_enum)]
    pub output_type: OutputType,

    /// Path to output file (if output type is file)
    #[arg(short = 'o', long = "outputfile", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// X coordinate where to plot
    #[arg(short = 'x', default_value_t = 0.0, global = true, allow_negative_numbers = true)]
    pub x: f64,

    /// Y coordinate where to plot
    #[arg(short = 'y', default_value_t = 0.0, global = true, allow_negative_numbers = true)]
    pub y: f64,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub figure: FigureCommand,
}

/// Figure type to plot.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum FigureCommand {
    /// Circle centred at (x, y)
    Circle {
        /// Radius of circle to plot
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    /// Rectangle with its corner at (x, y), rotated about that corner
    Rectangle(BoxArgs),
    /// Ellipse centred at (x, y), rotated about its centre
    Ellipse(BoxArgs),
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct BoxArgs {
    /// Width of the figure to plot
    #[arg(allow_negative_numbers = true)]
    pub width: f64,

    /// Height of the figure to plot
    #[arg(allow_negative_numbers = true)]
    pub height: f64,

    /// Counter-clockwise rotation in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub angle: f64,
}

/// Validated input: what to draw and where.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub spec: ShapeSpec,
    pub output: OutputConfig,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    #[error("-o must be specified if output type is file")]
    MissingOutputFile,

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

impl UsageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UsageError::MissingOutputFile => ErrorKind::MissingRequiredArgument,
            UsageError::Format(_) | UsageError::NonFinite { .. } => ErrorKind::InvalidValue,
        }
    }
}

/// The clap command with the registry's formats in the help text.
pub fn command(registry: &FormatRegistry) -> clap::Command {
    Cli::command().after_help(format!(
        "Supported output types: file, show, console\nSupported file extensions: {}",
        registry.extension_list()
    ))
}

/// Parses `std::env::args`, exiting with clap's usage error on failure.
pub fn parse(registry: &FormatRegistry) -> Cli {
    let matches = command(registry).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

/// Wraps a validation failure as a clap usage error (usage text, exit status 2).
pub fn usage_error(registry: &FormatRegistry, err: UsageError) -> clap::Error {
    command(registry).error(err.kind(), err)
}

/// Reports a validation failure the same way clap reports parse failures, then exits.
pub fn exit_with(registry: &FormatRegistry, err: UsageError) -> ! {
    usage_error(registry, err).exit()
}

fn finite(name: &'static str, value: f64) -> Result<f64, UsageError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UsageError::NonFinite { name, value })
    }
}

fn warn_ignored(file: Option<&PathBuf>, output_type: &str) {
    if let Some(path) = file {
        log::warn!("ignoring -o {} for output type {output_type}", path.display());
    }
}

impl Cli {
    pub fn validate(&self, registry: &FormatRegistry) -> Result<Request, UsageError> {
        Ok(Request {
            output: self.output_config(registry)?,
            spec: self.shape_spec()?,
        })
    }

    pub fn output_config(&self, registry: &FormatRegistry) -> Result<OutputConfig, UsageError> {
        match (self.output_type, &self.output_file) {
            (OutputType::File, None) => Err(UsageError::MissingOutputFile),
            (OutputType::File, Some(path)) => Ok(OutputConfig::file(path, registry)?),
            (OutputType::Show, file) => {
                warn_ignored(file.as_ref(), "show");
                Ok(OutputConfig::Show)
            }
            (OutputType::Console, file) => {
                warn_ignored(file.as_ref(), "console");
                Ok(OutputConfig::Console)
            }
        }
    }

    pub fn shape_spec(&self) -> Result<ShapeSpec, UsageError> {
        let anchor = Vec2::new(finite("x", self.x)?, finite("y", self.y)?);

        Ok(match &self.figure {
            FigureCommand::Circle { radius } => ShapeSpec::circle(anchor, finite("radius", *radius)?),
            FigureCommand::Rectangle(b) => {
                let (w, h, angle) = b.checked()?;
                ShapeSpec::rectangle(anchor, w, h, angle)
            }
            FigureCommand::Ellipse(b) => {
                let (w, h, angle) = b.checked()?;
                ShapeSpec::ellipse(anchor, w, h, angle)
            }
        })
    }
}

impl BoxArgs {
    fn checked(&self) -> Result<(f64, f64, f64), UsageError> {
        Ok((
            finite("width", self.width)?,
            finite("height", self.height)?,
            finite("angle", self.angle)?,
        ))
    }
}
