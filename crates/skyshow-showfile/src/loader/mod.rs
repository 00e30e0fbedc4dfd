//! Show archive loading functionality
//!
//! This module provides the full load pipeline for packaged shows:
//! - read-only ZIP archive access
//! - JSON and YAML entry parsing into one document tree
//! - transitive `$ref` resolution with cycle detection
//! - the sequential load entry point
//!
//! # Example Usage
//!
//! ```no_run
//! use skyshow_showfile::loader::ShowLoader;
//! use std::path::Path;
//!
//! let loader = ShowLoader::new();
//! let show = loader.load_from_path(Path::new("takeoff.zip"))?;
//! println!("{} drones", show.drone_count());
//! # Ok::<(), skyshow_showfile::LoaderError>(())
//! ```
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

pub mod archive;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod show_loader;

pub use archive::ShowArchive;
pub use error::{LoaderError, LoaderResult};
pub use parser::{EntryFormat, EntryParser};
pub use resolver::{EntryResolver, Reference, ReferenceResolver, ResolverRegistry, ZipResolver};
pub use show_loader::{LoaderConfig, ShowLoader, ROOT_ENTRY};
