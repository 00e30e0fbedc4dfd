//! Validation of dereferenced show specifications
//!
//! A small structural gate that runs after reference resolution and
//! before the document is handed to the caller. Checks run in a fixed
//! order and the first failure aborts the load; nothing here mutates
//! the tree or collects more than one violation.
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod show_spec;

pub use error::{ShowValidationError, ValidationResult};
pub use show_spec::{EmptySwarmPolicy, ShowValidator};
