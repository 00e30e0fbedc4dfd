//! The validated, fully dereferenced show document
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use serde_json::Value;

/// A show specification that passed loading and validation.
///
/// The wrapped tree contains no unresolved references, its version is 1,
/// and every drone carries a version-1 trajectory object. Accessors lean
/// on those invariants; consumers needing the raw tree take it via
/// [`as_value`](Self::as_value) or [`into_value`](Self::into_value).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ShowSpecification {
    document: Value,
}

impl ShowSpecification {
    pub(crate) fn new(document: Value) -> Self {
        Self { document }
    }

    /// Format version of the show file
    pub fn version(&self) -> u64 {
        self.document
            .get("version")
            .and_then(Value::as_u64)
            .unwrap_or_default()
    }

    /// Number of drones taking part in the show
    pub fn drone_count(&self) -> usize {
        self.drones().len()
    }

    /// The per-drone entries, in show order
    pub fn drones(&self) -> &[Value] {
        self.document
            .get("swarm")
            .and_then(|swarm| swarm.get("drones"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Borrow the underlying document tree
    pub fn as_value(&self) -> &Value {
        &self.document
    }

    /// Take ownership of the underlying document tree
    pub fn into_value(self) -> Value {
        self.document
    }
}
