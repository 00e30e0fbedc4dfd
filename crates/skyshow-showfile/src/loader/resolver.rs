//! Reference resolution over a packaged show document
//!
//! This module handles:
//! - scheme-based resolver registration (`zip:` today, open for more)
//! - transitive `$ref` substitution via an explicit worklist
//! - circular reference detection and a nesting depth bound
//!
//! Copyright (c) 2025 Skyshow Team
//! Licensed under the Apache-2.0 license

use crate::loader::archive::ShowArchive;
use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::parser::EntryParser;
use serde_json::Value;
use std::io::{Read, Seek};
use tracing::trace;

/// Default bound on reference nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// A parsed reference locator: `<scheme>:<path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub scheme: String,
    pub path: String,
}

impl Reference {
    /// Parse a locator string.
    ///
    /// A locator without a scheme separator has no resolver and is
    /// rejected the same way as an unregistered scheme.
    pub fn parse(locator: &str) -> LoaderResult<Self> {
        let (scheme, path) = locator
            .split_once(':')
            .ok_or_else(|| LoaderError::unsupported_protocol(locator))?;

        Ok(Self {
            scheme: scheme.to_string(),
            path: path.to_string(),
        })
    }

    /// The canonical locator string for this reference
    pub fn locator(&self) -> String {
        format!("{}:{}", self.scheme, self.path)
    }
}

/// Supplies content for references of one scheme.
///
/// Implementations are registered with a [`ResolverRegistry`] and tried
/// in ascending [`order`](EntryResolver::order); the first resolver whose
/// scheme matches a reference is used. Scheme matching is case-sensitive.
pub trait EntryResolver {
    /// The scheme this resolver handles, without the trailing `:`
    fn scheme(&self) -> &str;

    /// Priority among registered resolvers; lower runs first
    fn order(&self) -> u32;

    /// Produce the text content for a path under this resolver's scheme
    fn read(&mut self, path: &str) -> LoaderResult<String>;
}

/// Resolver for `zip:` references, backed by the show archive.
///
/// Purely a read accessor over the immutable archive.
pub struct ZipResolver<R> {
    archive: ShowArchive<R>,
}

impl<R: Read + Seek> ZipResolver<R> {
    pub fn new(archive: ShowArchive<R>) -> Self {
        Self { archive }
    }
}

impl<R: Read + Seek> EntryResolver for ZipResolver<R> {
    fn scheme(&self) -> &str {
        "zip"
    }

    fn order(&self) -> u32 {
        1
    }

    fn read(&mut self, path: &str) -> LoaderResult<String> {
        self.archive.read_entry(path)
    }
}

/// Scheme-to-resolver bindings, tried in ascending priority order
#[derive(Default)]
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn EntryResolver>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver, keeping the registry sorted by priority
    pub fn register(&mut self, resolver: Box<dyn EntryResolver>) {
        self.resolvers.push(resolver);
        self.resolvers.sort_by_key(|r| r.order());
    }

    /// Read the content a reference points at via the first resolver
    /// whose scheme matches
    pub fn resolve(&mut self, reference: &Reference) -> LoaderResult<String> {
        let resolver = self
            .resolvers
            .iter_mut()
            .find(|r| r.scheme() == reference.scheme)
            .ok_or_else(|| LoaderError::unsupported_protocol(&reference.scheme))?;

        resolver.read(&reference.path)
    }
}

/// A pending `$ref` site inside the document tree
#[derive(Debug)]
struct RefSite {
    /// JSON pointer to the reference node, relative to the document root
    pointer: String,
    /// The locator the node points at
    reference: String,
    /// Entry locators whose substitution exposed this site, root first
    chain: Vec<String>,
}

/// Replaces every reference node in a document tree with the resolved
/// and parsed content it points at, transitively, until none remain.
///
/// Resolution drives an explicit worklist of pending reference sites
/// rather than recursing through the tree: each substitution rescans
/// only the inserted subtree and pushes newly exposed sites. Every site
/// carries the chain of locators that produced it, so a locator showing
/// up twice on its own chain is rejected as circular, and chains longer
/// than `max_depth` are rejected the same way.
pub struct ReferenceResolver {
    registry: ResolverRegistry,
    parser: EntryParser,
    max_depth: usize,
}

impl ReferenceResolver {
    pub fn new(registry: ResolverRegistry) -> Self {
        Self {
            registry,
            parser: EntryParser::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolve the root reference and dereference the tree it yields
    pub fn dereference(&mut self, root: &str) -> LoaderResult<Value> {
        let root_ref = Reference::parse(root)?;
        trace!(root = %root_ref.locator(), "resolving root reference");

        let content = self.registry.resolve(&root_ref)?;
        let mut tree = self.parser.parse_entry(&content, &root_ref.path)?;

        let chain = vec![root_ref.locator()];
        let mut pending = Vec::new();
        collect_ref_sites(&tree, "", &chain, &mut pending);

        while let Some(site) = pending.pop() {
            self.substitute(&mut tree, site, &mut pending)?;
        }

        Ok(tree)
    }

    fn substitute(
        &mut self,
        tree: &mut Value,
        site: RefSite,
        pending: &mut Vec<RefSite>,
    ) -> LoaderResult<()> {
        if site.chain.iter().any(|locator| *locator == site.reference)
            || site.chain.len() >= self.max_depth
        {
            let mut chain = site.chain;
            chain.push(site.reference);
            return Err(LoaderError::circular_reference(&chain));
        }

        let reference = Reference::parse(&site.reference)?;
        trace!(reference = %site.reference, at = %site.pointer, "resolving reference");

        let content = self.registry.resolve(&reference)?;
        let value = self.parser.parse_entry(&content, &reference.path)?;

        // Pending sites are never nested inside one another (scanning does
        // not descend into reference nodes), so substituting here leaves
        // every other pending pointer valid.
        let slot = tree.pointer_mut(&site.pointer).ok_or_else(|| {
            LoaderError::entry_read(&reference.path, "reference site vanished during substitution")
        })?;
        *slot = value;

        let mut chain = site.chain;
        chain.push(site.reference);
        if let Some(inserted) = tree.pointer(&site.pointer) {
            collect_ref_sites(inserted, &site.pointer, &chain, pending);
        }

        Ok(())
    }
}

/// Scan `value` for reference nodes, recording each site's tree location
/// and the chain that produced it.
///
/// A reference node is any object carrying a string-valued `$ref` key;
/// its remaining keys are discarded on substitution, so scanning does not
/// descend into it. Objects whose `$ref` is not a string are plain data.
fn collect_ref_sites(value: &Value, pointer: &str, chain: &[String], out: &mut Vec<RefSite>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(reference)) = map.get("$ref") {
                out.push(RefSite {
                    pointer: pointer.to_string(),
                    reference: reference.clone(),
                    chain: chain.to_vec(),
                });
                return;
            }
            for (key, child) in map {
                let child_pointer = format!("{}/{}", pointer, escape_pointer_segment(key));
                collect_ref_sites(child, &child_pointer, chain, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let child_pointer = format!("{}/{}", pointer, index);
                collect_ref_sites(child, &child_pointer, chain, out);
            }
        }
        _ => {}
    }
}

/// Escape a map key for use as a JSON pointer segment (RFC 6901)
fn escape_pointer_segment(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
