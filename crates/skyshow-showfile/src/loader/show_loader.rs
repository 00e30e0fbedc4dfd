//! The externally visible load operation
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

use crate::loader::archive::ShowArchive;
use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::resolver::{ReferenceResolver, ResolverRegistry, ZipResolver, DEFAULT_MAX_DEPTH};
use crate::show::ShowSpecification;
use crate::validation::{EmptySwarmPolicy, ShowValidator};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

/// Entry name the root reference points at
pub const ROOT_ENTRY: &str = "show.json";

/// Configuration for loader behavior
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Archive entry the load starts from
    pub root_entry: String,
    /// Maximum reference nesting depth
    pub max_depth: usize,
    /// Policy for shows whose drone sequence is empty
    pub empty_swarm_policy: EmptySwarmPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root_entry: ROOT_ENTRY.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            empty_swarm_policy: EmptySwarmPolicy::default(),
        }
    }
}

/// Loads a drone show from a packaged archive.
///
/// One load runs strictly sequentially: open the archive, dereference
/// the document tree from the root reference, validate, return. Any
/// failure aborts the whole operation; no partial document is ever
/// produced, and a failed load is retried by calling the loader again.
///
/// The loader keeps no state across loads, so one loader value may serve
/// any number of loads and independent loads never interfere.
#[derive(Debug, Clone, Default)]
pub struct ShowLoader {
    config: LoaderConfig,
}

impl ShowLoader {
    /// Create a loader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom configuration
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a show from an archive file on disk
    pub fn load_from_path(&self, path: &Path) -> LoaderResult<ShowSpecification> {
        let file = File::open(path).map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;
        self.load_from_reader(file)
    }

    /// Load a show from archive bytes already in memory
    pub fn load_from_bytes(&self, bytes: Vec<u8>) -> LoaderResult<ShowSpecification> {
        self.load_from_reader(Cursor::new(bytes))
    }

    /// Load a show from any seekable archive byte source
    pub fn load_from_reader<R: Read + Seek + 'static>(&self, reader: R) -> LoaderResult<ShowSpecification> {
        let archive = ShowArchive::open(reader)?;
        debug!(entries = archive.len(), "opened show archive");

        let mut registry = ResolverRegistry::new();
        registry.register(Box::new(ZipResolver::new(archive)));

        let mut resolver = ReferenceResolver::new(registry).with_max_depth(self.config.max_depth);
        let root = format!("zip:{}", self.config.root_entry);
        let document = resolver.dereference(&root)?;
        debug!(root = %root, "dereferenced show document");

        ShowValidator::with_policy(self.config.empty_swarm_policy).validate(&document)?;
        debug!("show specification validated");

        Ok(ShowSpecification::new(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        for (name, content) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_minimal_show_loads() {
        let bytes = archive_bytes(&[(
            "show.json",
            r#"{"version":1,"swarm":{"drones":[{"settings":{"trajectory":{"version":1,"points":[]}}}]}}"#,
        )]);

        let show = ShowLoader::new().load_from_bytes(bytes).unwrap();
        assert_eq!(show.version(), 1);
        assert_eq!(show.drone_count(), 1);
    }

    #[test]
    fn test_missing_root_entry() {
        let bytes = archive_bytes(&[("other.json", "{}")]);
        let err = ShowLoader::new().load_from_bytes(bytes).unwrap_err();
        assert!(matches!(err, LoaderError::EntryRead { .. }));
        assert_eq!(err.entry(), Some("show.json"));
    }

    #[test]
    fn test_custom_root_entry() {
        let bytes = archive_bytes(&[(
            "main.json",
            r#"{"version":1,"swarm":{"drones":[{"settings":{"trajectory":{"version":1}}}]}}"#,
        )]);

        let loader = ShowLoader::with_config(LoaderConfig {
            root_entry: "main.json".to_string(),
            ..Default::default()
        });
        assert!(loader.load_from_bytes(bytes).is_ok());
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let bytes = archive_bytes(&[("show.json", r#"{"version":2}"#)]);
        let err = ShowLoader::new().load_from_bytes(bytes).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Only version 1 files are supported");
    }

    #[test]
    fn test_empty_swarm_policy_plumbed() {
        let bytes = archive_bytes(&[("show.json", r#"{"version":1,"swarm":{"drones":[]}}"#)]);

        assert!(ShowLoader::new().load_from_bytes(bytes.clone()).is_ok());

        let rejecting = ShowLoader::with_config(LoaderConfig {
            empty_swarm_policy: EmptySwarmPolicy::Reject,
            ..Default::default()
        });
        let err = rejecting.load_from_bytes(bytes).unwrap_err();
        assert_eq!(err.to_string(), "Show specification contains no drones");
    }

    #[test]
    fn test_reference_inlined_before_validation() {
        // the drone's trajectory only exists behind a $ref; validation
        // passing proves resolution ran first
        let bytes = archive_bytes(&[
            (
                "show.json",
                r#"{"version":1,"swarm":{"drones":[{"settings":{"trajectory":{"$ref":"zip:traj.json"}}}]}}"#,
            ),
            ("traj.json", r#"{"version":1,"points":[[0,0,0]]}"#),
        ]);

        let show = ShowLoader::new().load_from_bytes(bytes).unwrap();
        assert_eq!(
            show.drones()[0]["settings"]["trajectory"],
            json!({"version": 1, "points": [[0, 0, 0]]})
        );
    }
}
