//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Classify JavaScript values and evaluate type predicates
#[derive(Debug, Parser)]
#[command(name = "type-check", version, about)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// `type-check` subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the type tag of a value (`undefined` when unrecognized)
    Classify {
        /// Value to classify
        #[command(flatten)]
        input: InputArgs,
    },

    /// Evaluate one predicate; exits 0 when it holds and 1 when it does not
    Check {
        /// Predicate name, e.g. is_empty
        predicate: String,

        /// Value to test
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the tag, kind and every predicate that holds
    Report {
        /// Value to report on
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Print the object-kind vocabulary in order
    Vocabulary,

    /// List the named sample values
    Samples,
}

/// Where the value comes from: exactly one of `--json` or `--sample`
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// JSON document
    #[arg(long)]
    pub json: Option<String>,

    /// Named sample value
    #[arg(long)]
    pub sample: Option<String>,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Aligned `key: value` lines
    Text,
    /// A single JSON object
    Json,
}
