//! Error type for the `flagctl` binary.

use thiserror::Error;

/// Errors surfaced by `flagctl` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// `flags` was asked about a subcommand that does not exist.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// Convenience alias for results with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
