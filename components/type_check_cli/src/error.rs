//! Error types for the CLI

use core_types::JsError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// `--json` input is not valid JSON
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// A value could not be constructed
    #[error("JavaScript error: {0}")]
    Js(#[from] JsError),

    /// `check` was given a name missing from the predicate catalog
    #[error("unknown predicate '{0}' (names are snake_case, e.g. is_plain_object)")]
    UnknownPredicate(String),

    /// `--sample` was given a name missing from the sample catalog
    #[error("unknown sample '{0}' (run `type-check samples` for the list)")]
    UnknownSample(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
