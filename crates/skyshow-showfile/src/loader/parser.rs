//! Parsing of archive entries into a uniform JSON document tree
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;

/// Supported formats for show archive entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFormat {
    /// JSON format (`.json`, and any entry without a recognized extension)
    Json,
    /// YAML format (`.yaml`, `.yml`)
    Yaml,
}

impl EntryFormat {
    /// Detect format from an entry name.
    ///
    /// Entries without a recognized extension parse as JSON; referenced
    /// fragments are JSON documents regardless of how they are named.
    pub fn from_entry_name(name: &str) -> Self {
        let extension = name.rsplit('.').next().map(str::to_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => EntryFormat::Yaml,
            _ => EntryFormat::Json,
        }
    }
}

/// Parser for show archive entries
///
/// YAML entries are converted into `serde_json::Value` so reference
/// resolution and validation operate over a single tree type.
#[derive(Debug, Default)]
pub struct EntryParser;

impl EntryParser {
    /// Create a new entry parser
    pub fn new() -> Self {
        Self
    }

    /// Parse entry content, detecting format from the entry name
    pub fn parse_entry(&self, content: &str, entry: &str) -> LoaderResult<Value> {
        match EntryFormat::from_entry_name(entry) {
            EntryFormat::Json => self.parse_json(content, entry),
            EntryFormat::Yaml => self.parse_yaml(content, entry),
        }
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, entry: &str) -> LoaderResult<Value> {
        serde_json::from_str(content).map_err(|e| LoaderError::json_parse(entry, e))
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, entry: &str) -> LoaderResult<Value> {
        let yaml_value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| LoaderError::yaml_parse(entry, e))?;

        serde_json::to_value(yaml_value).map_err(|e| LoaderError::json_parse(entry, e))
    }
}
