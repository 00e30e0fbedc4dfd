//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use skyshow_showfile::LoaderError;
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the show loading pipeline
    #[error("{0}")]
    Load(#[from] LoaderError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            // validation failures and load failures get distinct codes so
            // scripts can tell a malformed show from a broken archive
            Self::Load(e) if e.is_validation() => 2,
            Self::Load(_) => 3,
            Self::FileNotFound { .. } => 4,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyshow_showfile::ShowValidationError;

    #[test]
    fn test_exit_codes() {
        let validation = Error::from(LoaderError::from(ShowValidationError::MissingDrones));
        assert_eq!(validation.exit_code(), 2);

        let load = Error::from(LoaderError::archive_open("bad magic"));
        assert_eq!(load.exit_code(), 3);

        let missing = Error::FileNotFound {
            path: PathBuf::from("show.zip"),
        };
        assert_eq!(missing.exit_code(), 4);
    }

    #[test]
    fn test_loader_error_message_passes_through() {
        let err = Error::from(LoaderError::from(ShowValidationError::MissingDrones));
        assert_eq!(err.to_string(), "Show specification contains no drones");
    }
}
