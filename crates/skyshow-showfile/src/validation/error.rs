//! Typed validation failures for show specifications
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ShowValidationError>;

/// Structural acceptance failures, one per check the validator performs.
///
/// Variants carry positional context for callers, but their display
/// output is the plain message shown to the end user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShowValidationError {
    /// Top-level `version` is not the integer 1
    #[error("Only version 1 files are supported")]
    UnsupportedVersion { found: Value },

    /// `swarm.drones` is absent, not a sequence, or empty under a
    /// rejecting policy
    #[error("Show specification contains no drones")]
    MissingDrones,

    /// A drone lacks `settings.trajectory` as an object
    #[error("Found drone without trajectory in show specification")]
    MissingTrajectory { drone: usize },

    /// A drone's trajectory `version` is not the integer 1
    #[error("Only version 1 trajectories are supported")]
    UnsupportedTrajectoryVersion { drone: usize, found: Value },
}

impl ShowValidationError {
    /// Create an unsupported version error from whatever was found
    pub fn unsupported_version(found: Option<&Value>) -> Self {
        Self::UnsupportedVersion {
            found: found.cloned().unwrap_or(Value::Null),
        }
    }

    /// Create an unsupported trajectory version error
    pub fn unsupported_trajectory_version(drone: usize, found: Option<&Value>) -> Self {
        Self::UnsupportedTrajectoryVersion {
            drone,
            found: found.cloned().unwrap_or(Value::Null),
        }
    }

    /// The index of the offending drone, for errors tied to one
    pub fn drone(&self) -> Option<usize> {
        match self {
            Self::MissingTrajectory { drone } => Some(*drone),
            Self::UnsupportedTrajectoryVersion { drone, .. } => Some(*drone),
            _ => None,
        }
    }
}
