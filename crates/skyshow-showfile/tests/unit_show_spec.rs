//! Unit tests for show specification validation
//!
//! Covers the acceptance checks in order: file version, swarm presence,
//! per-drone trajectory presence, and trajectory version, plus both
//! branches of the empty-swarm policy.

use serde_json::{json, Value};
use skyshow_showfile::{EmptySwarmPolicy, ShowValidationError, ShowValidator};

fn drone_with_trajectory(version: i64) -> Value {
    json!({"settings": {"trajectory": {"version": version, "points": []}}})
}

#[cfg(test)]
mod version_checks {
    use super::*;

    #[test]
    fn test_version_one_accepted() {
        let spec = json!({
            "version": 1,
            "swarm": {"drones": [drone_with_trajectory(1)]}
        });
        assert!(ShowValidator::new().validate(&spec).is_ok());
    }

    #[test]
    fn test_version_two_rejected_with_message() {
        let spec = json!({"version": 2, "swarm": {"drones": []}});
        let err = ShowValidator::new().validate(&spec).unwrap_err();
        assert_eq!(err.to_string(), "Only version 1 files are supported");
    }

    #[test]
    fn test_absent_version_rejected() {
        let spec = json!({"swarm": {"drones": [drone_with_trajectory(1)]}});
        let err = ShowValidator::new().validate(&spec).unwrap_err();
        assert!(matches!(err, ShowValidationError::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_no_drone_checks_after_version_failure() {
        // drones are broken too, but the version failure must be the one
        // reported
        let spec = json!({
            "version": 3,
            "swarm": {"drones": [{"settings": {}}]}
        });
        let err = ShowValidator::new().validate(&spec).unwrap_err();
        assert!(matches!(err, ShowValidationError::UnsupportedVersion { .. }));
    }
}

#[cfg(test)]
mod swarm_checks {
    use super::*;

    #[test]
    fn test_missing_swarm_rejected_with_message() {
        let spec = json!({"version": 1, "swarm": {}});
        let err = ShowValidator::new().validate(&spec).unwrap_err();
        assert_eq!(err.to_string(), "Show specification contains no drones");
    }

    #[test]
    fn test_non_sequence_drones_rejected() {
        let spec = json!({"version": 1, "swarm": {"drones": "three"}});
        let err = ShowValidator::new().validate(&spec).unwrap_err();
        assert_eq!(err, ShowValidationError::MissingDrones);
    }

    #[test]
    fn test_empty_swarm_accepted_by_default() {
        let spec = json!({"version": 1, "swarm": {"drones": []}});
        assert!(ShowValidator::new().validate(&spec).is_ok());
    }

    #[test]
    fn test_empty_swarm_rejected_under_strict_policy() {
        let spec = json!({"version": 1, "swarm": {"drones": []}});
        let err = ShowValidator::with_policy(EmptySwarmPolicy::Reject)
            .validate(&spec)
            .unwrap_err();
        assert_eq!(err, ShowValidationError::MissingDrones);
    }
}

#[cfg(test)]
mod drone_checks {
    use super::*;

    #[test]
    fn test_drone_without_trajectory_rejected_with_message() {
        let spec = json!({
            "version": 1,
            "swarm": {"drones": [{"settings": {}}]}
        });
        let err = ShowValidator::new().validate(&spec).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Found drone without trajectory in show specification"
        );
    }

    #[test]
    fn test_first_offender_wins_deterministically() {
        let spec = json!({
            "version": 1,
            "swarm": {"drones": [
                drone_with_trajectory(1),
                {"settings": {}},
                {"no": "settings"}
            ]}
        });

        // validation stops at the first offending drone, every time
        for _ in 0..3 {
            let err = ShowValidator::new().validate(&spec).unwrap_err();
            assert_eq!(err, ShowValidationError::MissingTrajectory { drone: 1 });
        }
    }

    #[test]
    fn test_trajectory_version_two_rejected_with_message() {
        let spec = json!({
            "version": 1,
            "swarm": {"drones": [drone_with_trajectory(2)]}
        });
        let err = ShowValidator::new().validate(&spec).unwrap_err();
        assert_eq!(err.to_string(), "Only version 1 trajectories are supported");
    }

    #[test]
    fn test_trajectory_version_context_carried() {
        let spec = json!({
            "version": 1,
            "swarm": {"drones": [drone_with_trajectory(1), drone_with_trajectory(5)]}
        });
        let err = ShowValidator::new().validate(&spec).unwrap_err();
        assert_eq!(
            err,
            ShowValidationError::UnsupportedTrajectoryVersion {
                drone: 1,
                found: json!(5)
            }
        );
    }

    #[test]
    fn test_many_valid_drones_pass() {
        let drones: Vec<Value> = (0..50).map(|_| drone_with_trajectory(1)).collect();
        let spec = json!({"version": 1, "swarm": {"drones": drones}});
        assert!(ShowValidator::new().validate(&spec).is_ok());
    }
}
