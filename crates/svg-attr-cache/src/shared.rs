//! Thread-safe attribute cache
//!
//! Same contract as `SvgAttributeCache`, but `store` takes `&self` so one
//! instance can be shared across threads (e.g. behind an `Arc`).
//!
//! Parsing happens with no lock held. Two threads storing the same empty
//! index may both parse; whichever insert lands first is kept and the other
//! result is dropped. Entries are never overwritten.

use crate::attributes::{AttributeMap, SvgAttributes};
use crate::error::Result;
use crate::options::ExtractOptions;
use crate::parser::{extract_attributes, RoxmlParser, XmlParser};
use parking_lot::RwLock;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Attribute cache safe to share between threads
#[derive(Debug, Default)]
pub struct SharedSvgAttributeCache<P = RoxmlParser> {
    parser: P,
    options: ExtractOptions,
    entries: RwLock<BTreeMap<usize, Arc<SvgAttributes>>>,
}

impl SharedSvgAttributeCache {
    /// Create an empty cache with default options
    #[inline]
    #[must_use = "creates an empty cache"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with custom extraction options
    #[inline]
    #[must_use = "creates an empty cache with custom options"]
    pub fn with_options(options: ExtractOptions) -> Self {
        Self::with_parser(RoxmlParser, options)
    }
}

impl<P: XmlParser> SharedSvgAttributeCache<P> {
    /// Create an empty cache that parses markup with `parser`
    #[inline]
    #[must_use = "creates an empty cache with a custom parser"]
    pub fn with_parser(parser: P, options: ExtractOptions) -> Self {
        Self {
            parser,
            options,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Parse `markup` and cache its attributes at `index`
    ///
    /// Does nothing if `index` is already populated, including when another
    /// thread populated it while this call was parsing.
    ///
    /// # Errors
    ///
    /// Same as `SvgAttributeCache::store`. Nothing is cached on error.
    pub fn store(&self, markup: &str, index: usize) -> Result<()> {
        if self.entries.read().contains_key(&index) {
            log::debug!("SVG attributes already cached at index {index}");
            return Ok(());
        }

        let attrs = extract_attributes(&self.parser, markup, &self.options).map_err(|e| {
            log::warn!("Failed to extract SVG attributes for index {index}: {e}");
            e
        })?;

        match self.entries.write().entry(index) {
            Entry::Occupied(_) => {
                log::debug!("Index {index} populated concurrently, discarding parse result");
            }
            Entry::Vacant(slot) => {
                log::debug!(
                    "Cached SVG attributes at index {index}: {} parent attributes, {} children",
                    attrs.parent.len(),
                    attrs.children.len()
                );
                slot.insert(Arc::new(attrs));
            }
        }
        Ok(())
    }

    /// Entry cached at `index`
    #[inline]
    #[must_use = "returns the cached entry"]
    pub fn get(&self, index: usize) -> Option<Arc<SvgAttributes>> {
        self.entries.read().get(&index).cloned()
    }

    /// Copy of the root element attributes cached at `index`
    #[must_use = "returns the cached parent attributes"]
    pub fn get_parent(&self, index: usize) -> Option<AttributeMap> {
        self.get(index).map(|entry| entry.parent.clone())
    }

    /// Copy of the path element attributes cached at `index`
    #[must_use = "returns the cached children attributes"]
    pub fn get_children(&self, index: usize) -> Option<Vec<AttributeMap>> {
        self.get(index).map(|entry| entry.children.clone())
    }

    /// Whether `index` is populated
    #[inline]
    #[must_use = "returns whether the index is populated"]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.read().contains_key(&index)
    }

    /// Number of populated indices
    #[inline]
    #[must_use = "returns the number of cached entries"]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no index is populated
    #[inline]
    #[must_use = "returns whether the cache is empty"]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of populated indices, ascending
    #[must_use = "returns the populated indices"]
    pub fn indices(&self) -> Vec<usize> {
        self.entries.read().keys().copied().collect()
    }

    /// Extraction options in use
    #[inline]
    #[must_use = "returns the extraction options"]
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }
}
