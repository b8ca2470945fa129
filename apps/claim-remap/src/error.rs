//! CLI error types and exit codes

use std::path::Path;

use thiserror::Error;
use xavyo_claim_remapping::RemappingError;

use crate::config::ConfigError;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error (I/O, configuration)
/// - 4: Invalid input (bad file contents, unknown field, index out of range)
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No claim remapping at index {index} (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        CliError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn json(path: &Path, err: serde_json::Error) -> Self {
        CliError::InvalidJson {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Io { .. } | CliError::Output(_) => 1,
            CliError::InvalidJson { .. }
            | CliError::Validation(_)
            | CliError::IndexOutOfRange { .. } => 4,
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();
        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {self}");
        } else {
            eprintln!("Error: {self}");
        }
    }
}

impl From<RemappingError> for CliError {
    fn from(err: RemappingError) -> Self {
        CliError::Validation(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Output(err.to_string())
    }
}
