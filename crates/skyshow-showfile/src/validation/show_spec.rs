//! Structural acceptance checks for dereferenced show specifications
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{ShowValidationError, ValidationResult};
use serde_json::Value;

/// Policy for a show whose `swarm.drones` sequence is present but empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySwarmPolicy {
    /// An empty drone sequence passes validation
    #[default]
    Accept,
    /// An empty drone sequence fails with the missing-drones error
    Reject,
}

/// Validator for dereferenced show specification trees.
///
/// A gate, not a transformer: it never mutates the tree, checks run in a
/// fixed order, and the first failure wins. Only the minimum structural
/// shape is checked here; trajectory contents are consumed, not policed,
/// by the rest of the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowValidator {
    policy: EmptySwarmPolicy,
}

impl ShowValidator {
    /// Create a validator with the default empty-swarm policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with an explicit empty-swarm policy
    pub fn with_policy(policy: EmptySwarmPolicy) -> Self {
        Self { policy }
    }

    /// Run all checks against a dereferenced show specification
    pub fn validate(&self, spec: &Value) -> ValidationResult<()> {
        self.check_version(spec)?;
        let drones = self.check_swarm(spec)?;
        self.check_drones(drones)
    }

    /// Top-level `version` must be the integer 1. Floats and strings do
    /// not pass, no matter how `1`-shaped they look.
    fn check_version(&self, spec: &Value) -> ValidationResult<()> {
        match spec.get("version").and_then(Value::as_i64) {
            Some(1) => Ok(()),
            _ => Err(ShowValidationError::unsupported_version(spec.get("version"))),
        }
    }

    /// `swarm.drones` must be a sequence, and non-empty under a
    /// rejecting policy
    fn check_swarm<'a>(&self, spec: &'a Value) -> ValidationResult<&'a [Value]> {
        let drones = spec
            .get("swarm")
            .and_then(|swarm| swarm.get("drones"))
            .and_then(Value::as_array)
            .ok_or(ShowValidationError::MissingDrones)?;

        if drones.is_empty() && self.policy == EmptySwarmPolicy::Reject {
            return Err(ShowValidationError::MissingDrones);
        }

        Ok(drones)
    }

    /// Each drone needs `settings.trajectory` as an object with
    /// `version` 1; validation stops at the first offender.
    fn check_drones(&self, drones: &[Value]) -> ValidationResult<()> {
        for (index, drone) in drones.iter().enumerate() {
            let trajectory = drone
                .get("settings")
                .filter(|settings| settings.is_object())
                .and_then(|settings| settings.get("trajectory"))
                .filter(|trajectory| trajectory.is_object())
                .ok_or(ShowValidationError::MissingTrajectory { drone: index })?;

            match trajectory.get("version").and_then(Value::as_i64) {
                Some(1) => {}
                _ => {
                    return Err(ShowValidationError::unsupported_trajectory_version(
                        index,
                        trajectory.get("version"),
                    ))
                }
            }
        }

        Ok(())
    }
}
