//! Per-index attribute cache

use crate::attributes::{AttributeMap, SvgAttributes};
use crate::error::Result;
use crate::options::ExtractOptions;
use crate::parser::{extract_attributes, RoxmlParser, XmlParser};
use std::collections::BTreeMap;

/// Memoizes extracted SVG attributes by caller-assigned index
///
/// Each index is populated at most once. Storing markup at an index that
/// already has an entry is a no-op, even if the markup differs. Entries are
/// never evicted.
#[derive(Debug, Clone, Default)]
pub struct SvgAttributeCache<P = RoxmlParser> {
    parser: P,
    options: ExtractOptions,
    entries: BTreeMap<usize, SvgAttributes>,
}

impl SvgAttributeCache {
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

impl<P: XmlParser> SvgAttributeCache<P> {
    /// Create an empty cache that parses markup with `parser`
    #[inline]
    #[must_use = "creates an empty cache with a custom parser"]
    pub fn with_parser(parser: P, options: ExtractOptions) -> Self {
        Self {
            parser,
            options,
            entries: BTreeMap::new(),
        }
    }

    /// Parse `markup` and cache its attributes at `index`
    ///
    /// Does nothing if `index` is already populated.
    ///
    /// # Errors
    ///
    /// Returns a parse error if `markup` is not well-formed XML, or
    /// `SvgAttrError::MissingRoot` if it has no root-tag element (under the
    /// default policy). Nothing is cached on error.
    pub fn store(&mut self, markup: &str, index: usize) -> Result<()> {
        if self.entries.contains_key(&index) {
            log::debug!("SVG attributes already cached at index {index}");
            return Ok(());
        }

        let attrs = extract_attributes(&self.parser, markup, &self.options).map_err(|e| {
            log::warn!("Failed to extract SVG attributes for index {index}: {e}");
            e
        })?;

        log::debug!(
            "Cached SVG attributes at index {index}: {} parent attributes, {} children",
            attrs.parent.len(),
            attrs.children.len()
        );
        self.entries.insert(index, attrs);
        Ok(())
    }

    /// Root element attributes cached at `index`, or `None` if never stored
    #[inline]
    #[must_use = "returns the cached parent attributes"]
    pub fn get_parent(&self, index: usize) -> Option<&AttributeMap> {
        self.entries.get(&index).map(|entry| &entry.parent)
    }

    /// Path element attributes cached at `index`, or `None` if never stored
    #[inline]
    #[must_use = "returns the cached children attributes"]
    pub fn get_children(&self, index: usize) -> Option<&[AttributeMap]> {
        self.entries.get(&index).map(|entry| entry.children.as_slice())
    }

    /// Whole entry cached at `index`
    #[inline]
    #[must_use = "returns the cached entry"]
    pub fn get(&self, index: usize) -> Option<&SvgAttributes> {
        self.entries.get(&index)
    }

    /// Whether `index` is populated
    #[inline]
    #[must_use = "returns whether the index is populated"]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of populated indices
    #[inline]
    #[must_use = "returns the number of cached entries"]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no index is populated
    #[inline]
    #[must_use = "returns whether the cache is empty"]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Populated indices, ascending
    #[inline]
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Extraction options in use
    #[inline]
    #[must_use = "returns the extraction options"]
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }
}
