//! Type-check CLI Library
//!
//! Provides the argument parser, sample catalog and command runner for the
//! `type-check` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod runner;
pub mod samples;

pub use cli::{Cli, Command, InputArgs, ReportFormat};
pub use error::{CliError, CliResult};
pub use runner::{Execution, Report, Runner};
