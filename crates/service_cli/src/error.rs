//! CLI error types.

use thiserror::Error;

use sampler_core::SequenceError;

use crate::config::ConfigError;

/// Errors surfaced by `pmjgen` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Sequence generation failed.
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// One or more invariant checks failed.
    #[error("Validation failed: {failed} of {total} checks reported violations")]
    ValidationFailed {
        /// Checks with at least one violation
        failed: usize,
        /// Checks run
        total: usize,
    },

    /// I/O failure while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
