//! SVG attribute cache
//!
//! This crate extracts the attributes of an SVG document's root `<svg>` element
//! and of each of its `<path>` elements, and memoizes the result per
//! caller-supplied index so repeated requests skip re-parsing.
//!
//! ## Features
//!
//! - **Parent attributes** - All attributes of the first `<svg>` element
//! - **Children attributes** - All attributes of every `<path>` element, in document order
//! - **Memoization** - Each index is parsed once; later stores for it are no-ops
//! - **Pluggable XML engine** - Any [`XmlParser`] can replace the default `roxmltree` one
//!
//! Attribute values are reported the way a DOM reports them: entity references
//! (including ones declared in an internal DTD subset) are resolved and literal
//! tab/CR/LF characters become spaces, but values are never coerced (`"100px"`
//! stays `"100px"`). Attributes keep their source order, with namespace
//! declarations first.
//!
//! ## Examples
//!
//! Cache attributes by index:
//!
//! ```rust
//! use svg_attr_cache::SvgAttributeCache;
//!
//! let mut cache = SvgAttributeCache::new();
//! let svg = r#"<svg width="100" height="50"><path d="M0 0"/><path d="M1 1" fill="red"/></svg>"#;
//! cache.store(svg, 0)?;
//!
//! let parent = cache.get_parent(0).expect("index 0 was stored");
//! assert_eq!(parent["width"], "100");
//!
//! let children = cache.get_children(0).expect("index 0 was stored");
//! assert_eq!(children.len(), 2);
//! assert_eq!(children[1]["fill"], "red");
//!
//! // Never-stored indices are absent, not errors
//! assert!(cache.get_parent(7).is_none());
//! # Ok::<(), svg_attr_cache::SvgAttrError>(())
//! ```
//!
//! One-shot extraction without a cache:
//!
//! ```rust
//! use svg_attr_cache::parse_svg_attributes;
//!
//! let attrs = parse_svg_attributes(r#"<svg viewBox="0 0 10 10"><path d="M0 0"/></svg>"#)?;
//! assert_eq!(attrs.parent["viewBox"], "0 0 10 10");
//! assert_eq!(attrs.children.len(), 1);
//! # Ok::<(), svg_attr_cache::SvgAttrError>(())
//! ```
//!
//! ## Errors
//!
//! `store` fails on markup that is not well-formed XML, and (by default) on
//! markup with no `<svg>` element; see [`MissingRootPolicy`]. A failed store
//! caches nothing. Lookups never fail.
//!
//! ## Threads
//!
//! [`SvgAttributeCache`] is a plain owned value. Use [`SharedSvgAttributeCache`]
//! when several threads store into one instance.

pub mod attributes;
pub mod cache;
pub mod document;
pub mod error;
pub mod options;
pub mod parser;
pub mod shared;

// Re-export main types
pub use attributes::{AttributeMap, SvgAttributes};
pub use cache::SvgAttributeCache;
pub use document::{XmlDocument, XmlElement};
pub use error::{Result, SvgAttrError};
pub use options::{ExtractOptions, MissingRootPolicy};
pub use parser::{
    extract_attributes, parse_svg_attributes, parse_svg_attributes_file, RoxmlParser,
    XmlParser,
};
pub use shared::SharedSvgAttributeCache;
