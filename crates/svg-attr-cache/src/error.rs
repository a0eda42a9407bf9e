//! Error types for SVG attribute extraction

use std::io;
use thiserror::Error;

/// Errors raised while parsing markup or extracting attributes
///
/// Lookups never fail: an unpopulated index is reported as `None`, not as an
/// error. Every variant here comes out of `store` (or the free parse functions).
#[derive(Error, Debug)]
pub enum SvgAttrError {
    /// I/O error while reading markup from disk
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Markup is not well-formed XML (truncated tag, undefined entity, ...)
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Document parsed but has no root element with the requested tag
    #[error("No <{0}> element found in markup")]
    MissingRoot(String),
}

impl SvgAttrError {
    /// Whether this error means the markup itself is not well-formed XML
    #[inline]
    #[must_use = "returns whether the error is a parse error"]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Xml(_))
    }
}

/// Result type for SVG attribute operations
pub type Result<T> = std::result::Result<T, SvgAttrError>;
