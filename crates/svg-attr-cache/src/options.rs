//! Extraction options

/// Default tag of the element whose attributes become the parent map
pub const DEFAULT_ROOT_TAG: &str = "svg";

/// Default tag of the elements whose attributes become the children maps
pub const DEFAULT_CHILD_TAG: &str = "path";

/// What `store` does when the markup parses but has no root-tag element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MissingRootPolicy {
    /// Fail with `SvgAttrError::MissingRoot`; nothing is cached
    #[default]
    Error,

    /// Cache an entry with an empty parent map
    Empty,
}

/// Options controlling which elements are extracted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractOptions {
    /// Qualified tag name of the parent element (default: `svg`)
    ///
    /// Only the first element with this name in document order is used.
    pub root_tag: String,

    /// Qualified tag name of the child elements (default: `path`)
    pub child_tag: String,

    /// Behavior when no parent element exists (default: `MissingRootPolicy::Error`)
    pub missing_root: MissingRootPolicy,
}

impl Default for ExtractOptions {
    #[inline]
    fn default() -> Self {
        Self {
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            child_tag: DEFAULT_CHILD_TAG.to_string(),
            missing_root: MissingRootPolicy::Error,
        }
    }
}

impl ExtractOptions {
    /// Create options with the defaults (`svg` parent, `path` children, fail on missing root)
    #[inline]
    #[must_use = "creates extraction options with defaults"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parent element tag
    #[inline]
    #[must_use = "returns updated options"]
    pub fn with_root_tag(mut self, tag: impl Into<String>) -> Self {
        self.root_tag = tag.into();
        self
    }

    /// Set the child element tag
    #[inline]
    #[must_use = "returns updated options"]
    pub fn with_child_tag(mut self, tag: impl Into<String>) -> Self {
        self.child_tag = tag.into();
        self
    }

    /// Set the missing-root policy
    #[inline]
    #[must_use = "returns updated options"]
    pub const fn with_missing_root(mut self, policy: MissingRootPolicy) -> Self {
        self.missing_root = policy;
        self
    }
}
