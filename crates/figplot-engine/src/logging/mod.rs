//! Logging utilities.
//!
//! Centralizes logger initialization; library code only uses the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
