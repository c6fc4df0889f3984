//! Formador CLI Library
//!
//! Command-line interface for the Formar validation library.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
mod output;

pub use commands::{CheckArgs, Cli, ColorArg, Commands, ReportFormat};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_console, render_summary};
