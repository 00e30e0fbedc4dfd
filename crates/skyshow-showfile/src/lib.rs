//! Skyshow Showfile - drone show loading and validation
//!
//! This crate loads choreographed drone shows from ZIP-packaged show
//! files: it extracts the root document, resolves every cross-entry
//! reference into one self-contained tree, validates the result's
//! structure, and hands the show to the caller or fails with a
//! descriptive error.
//!
//! ## Show files
//!
//! A show file is a ZIP archive whose root `show.json` entry holds the
//! show document. The document may point at other archive entries with
//! reference nodes of the shape `{"$ref": "zip:<path>"}`; references
//! resolve transitively until none remain. The loaded document carries
//! the format version, the swarm's drones, and one trajectory per drone.
//!
//! ## Quick Start
//!
//! ```no_run
//! use skyshow_showfile::ShowLoader;
//! use std::path::Path;
//!
//! let loader = ShowLoader::new();
//! match loader.load_from_path(Path::new("show.zip")) {
//!     Ok(show) => println!("loaded show with {} drones", show.drone_count()),
//!     Err(e) => eprintln!("load failed: {}", e),
//! }
//! ```
//!
//! ## Failure model
//!
//! A load either returns a fully dereferenced, validated
//! [`ShowSpecification`] or a single [`LoaderError`]; there are no
//! partial documents, no collected violation lists, and no retries.
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod show;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{LoaderConfig, LoaderError, LoaderResult, ShowLoader};
pub use show::ShowSpecification;
pub use validation::{EmptySwarmPolicy, ShowValidationError, ShowValidator};
