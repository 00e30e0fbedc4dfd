//! Read-only access to the entries of a packaged show archive
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

/// A read-only named-entry container over a ZIP byte source.
///
/// The archive is immutable for the duration of a load; lookups only
/// decode entries, they never modify the container. Entry paths are
/// matched after stripping leading `/` separators, so `zip:/show.json`
/// and `zip:show.json` name the same entry.
#[derive(Debug)]
pub struct ShowArchive<R> {
    zip: ZipArchive<R>,
}

impl<R: Read + Seek> ShowArchive<R> {
    /// Open an archive from any seekable byte source
    pub fn open(reader: R) -> LoaderResult<Self> {
        let zip = ZipArchive::new(reader).map_err(|e| LoaderError::archive_open(e.to_string()))?;
        Ok(Self { zip })
    }

    /// Decode the named entry as UTF-8 text
    pub fn read_entry(&mut self, path: &str) -> LoaderResult<String> {
        let name = path.trim_start_matches('/');
        let mut file = self
            .zip
            .by_name(name)
            .map_err(|e| LoaderError::entry_read(name, e.to_string()))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| LoaderError::entry_read(name, e.to_string()))?;
        Ok(content)
    }

    /// Number of entries in the archive
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    /// Check whether the archive has no entries
    pub fn is_empty(&self) -> bool {
        self.zip.is_empty()
    }
}

impl ShowArchive<Cursor<Vec<u8>>> {
    /// Open an archive over an owned byte buffer, the form the
    /// surrounding application hands over after a file selection
    pub fn from_bytes(bytes: Vec<u8>) -> LoaderResult<Self> {
        Self::open(Cursor::new(bytes))
    }
}
