//! Error types for show file loading operations
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

use crate::validation::ShowValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while loading a show specification from an archive
#[derive(Error, Debug)]
pub enum LoaderError {
    /// A reference used a scheme no registered resolver recognizes
    #[error("unsupported protocol: {scheme}")]
    UnsupportedProtocol { scheme: String },

    /// The byte source could not be opened as a ZIP archive
    #[error("Failed to open show archive: {reason}")]
    ArchiveOpen { reason: String },

    /// A referenced entry is missing from the archive or could not be decoded
    #[error("Failed to read entry '{entry}' from show archive: {reason}")]
    EntryRead { entry: String, reason: String },

    /// A resolved entry's content failed to parse as JSON
    #[error("Failed to parse JSON entry '{entry}': {source}")]
    JsonParse {
        entry: String,
        source: serde_json::Error,
    },

    /// A resolved entry's content failed to parse as YAML
    #[error("Failed to parse YAML entry '{entry}': {source}")]
    YamlParse {
        entry: String,
        source: serde_yaml::Error,
    },

    /// Reference resolution revisited an entry already on its chain,
    /// or exceeded the configured nesting depth
    #[error("Circular reference detected: {chain}")]
    CircularReference { chain: String },

    /// The dereferenced document failed structural validation
    #[error(transparent)]
    Validation(#[from] ShowValidationError),

    /// File I/O errors when reading an archive from disk
    #[error("Failed to read show file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LoaderError {
    /// Create an unsupported protocol error
    pub fn unsupported_protocol(scheme: impl Into<String>) -> Self {
        Self::UnsupportedProtocol {
            scheme: scheme.into(),
        }
    }

    /// Create an archive open error
    pub fn archive_open(reason: impl Into<String>) -> Self {
        Self::ArchiveOpen {
            reason: reason.into(),
        }
    }

    /// Create an entry read error
    pub fn entry_read(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EntryRead {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON parsing error with entry context
    pub fn json_parse(entry: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonParse {
            entry: entry.into(),
            source,
        }
    }

    /// Create a YAML parsing error with entry context
    pub fn yaml_parse(entry: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlParse {
            entry: entry.into(),
            source,
        }
    }

    /// Create a circular reference error from the chain of locators
    pub fn circular_reference(chain: &[String]) -> Self {
        Self::CircularReference {
            chain: chain.join(" -> "),
        }
    }

    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Get the archive entry associated with this error, if any
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::EntryRead { entry, .. } => Some(entry),
            Self::JsonParse { entry, .. } => Some(entry),
            Self::YamlParse { entry, .. } => Some(entry),
            _ => None,
        }
    }

    /// Check whether this error came from the validation gate rather
    /// than from archive access or reference resolution
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoaderError::entry_read("show.json", "entry not found");
        assert!(matches!(err, LoaderError::EntryRead { .. }));
        assert_eq!(err.entry(), Some("show.json"));
        assert!(!err.is_validation());

        let err = LoaderError::unsupported_protocol("http");
        assert_eq!(err.to_string(), "unsupported protocol: http");
    }

    #[test]
    fn test_circular_reference_chain() {
        let chain = vec![
            "zip:show.json".to_string(),
            "zip:a.json".to_string(),
            "zip:show.json".to_string(),
        ];
        let err = LoaderError::circular_reference(&chain);
        assert_eq!(
            err.to_string(),
            "Circular reference detected: zip:show.json -> zip:a.json -> zip:show.json"
        );
    }

    #[test]
    fn test_validation_error_passthrough() {
        let err = LoaderError::from(ShowValidationError::MissingDrones);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Show specification contains no drones");
    }
}
