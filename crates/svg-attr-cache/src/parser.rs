//! Markup parsing
//!
//! `XmlParser` is the seam between the attribute cache and the XML engine.
//! `RoxmlParser` is the default engine, built on `roxmltree`.

use crate::attributes::SvgAttributes;
use crate::document::{XmlDocument, XmlElement};
use crate::error::{Result, SvgAttrError};
use crate::options::ExtractOptions;
use roxmltree::{Node, ParsingOptions};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Namespace bound to the reserved `xml` prefix
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// An XML engine that turns markup into an `XmlDocument`
///
/// Implementations must fail on input that is not well-formed XML and must
/// return elements (and their attributes) in document order.
pub trait XmlParser {
    /// Parse markup into a document
    ///
    /// # Errors
    ///
    /// Returns a parse error (see `SvgAttrError::is_parse_error`) if `text`
    /// is not a well-formed XML document.
    fn parse(&self, text: &str) -> Result<XmlDocument>;
}

/// Default `XmlParser` backed by `roxmltree`
///
/// Attribute values come back the way a DOM reports them: entity references
/// (including entities declared in an internal DTD subset) are resolved, and
/// literal tab, CR and LF characters are normalized to spaces.
///
/// Names are reported as qualified names (`xlink:href`). Namespace
/// declarations (`xmlns`, `xmlns:*`) are reported first, followed by the
/// other attributes in source order. A declaration that repeats a binding
/// already in scope from an ancestor is not reported again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoxmlParser;

impl RoxmlParser {
    /// Create a new parser
    #[inline]
    #[must_use = "creates a parser"]
    pub const fn new() -> Self {
        Self
    }
}

#[inline]
fn qualify(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_string(),
    }
}

/// Prefix an element was written with; `None` when unprefixed
fn element_prefix(node: Node<'_, '_>, uri: &str) -> Option<String> {
    // `<svg xmlns="...">` stays `svg` even if a prefix is bound to the same URI
    if node
        .namespaces()
        .any(|ns| ns.name().is_none() && ns.uri() == uri)
    {
        return None;
    }
    node.namespaces()
        .filter(|ns| ns.uri() == uri)
        .find_map(|ns| ns.name())
        .map(str::to_string)
}

/// Prefix an attribute was written with (attributes never use the default namespace)
fn attribute_prefix(node: Node<'_, '_>, uri: &str) -> Option<String> {
    if uri == XML_NAMESPACE {
        return Some("xml".to_string());
    }
    node.namespaces()
        .filter(|ns| ns.uri() == uri)
        .find_map(|ns| ns.name())
        .map(str::to_string)
}

/// `xmlns` / `xmlns:*` pairs introduced on this element
fn declared_namespaces(node: Node<'_, '_>) -> Vec<(String, String)> {
    let parent = node.parent_element();
    node.namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .filter(|ns| {
            !parent.is_some_and(|p| {
                p.namespaces()
                    .any(|inherited| inherited.name() == ns.name() && inherited.uri() == ns.uri())
            })
        })
        .map(|ns| {
            let name = match ns.name() {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_string(),
            };
            (name, ns.uri().to_string())
        })
        .collect()
}

fn element_from_node(node: Node<'_, '_>) -> XmlElement {
    let tag = node.tag_name();
    let prefix = tag.namespace().and_then(|uri| element_prefix(node, uri));
    let mut element = XmlElement::new(qualify(prefix.as_deref(), tag.name()));

    element.attributes = declared_namespaces(node);
    for attr in node.attributes() {
        let prefix = attr.namespace().and_then(|uri| attribute_prefix(node, uri));
        element
            .attributes
            .push((qualify(prefix.as_deref(), attr.name()), attr.value().to_string()));
    }
    log::trace!("<{}> with {} attributes", element.name, element.attributes.len());
    element
}

impl XmlParser for RoxmlParser {
    fn parse(&self, text: &str) -> Result<XmlDocument> {
        let parse_options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, parse_options).map_err(|e| {
            log::warn!("XML parse error in SVG markup: {e}");
            SvgAttrError::Xml(e)
        })?;

        let elements = doc
            .descendants()
            .filter(Node::is_element)
            .map(element_from_node)
            .collect();
        Ok(XmlDocument { elements })
    }
}

/// Parse markup with `parser` and extract attributes according to `options`
///
/// # Errors
///
/// Returns a parse error for malformed markup, or `SvgAttrError::MissingRoot`
/// when no root-tag element exists and the policy is `MissingRootPolicy::Error`.
pub fn extract_attributes<P: XmlParser + ?Sized>(
    parser: &P,
    markup: &str,
    options: &ExtractOptions,
) -> Result<SvgAttributes> {
    let doc = parser.parse(markup)?;
    SvgAttributes::from_document(&doc, options)
}

/// Extract `<svg>` and `<path>` attributes from markup, without caching
///
/// # Errors
///
/// Returns an error if:
/// - The content is not well-formed XML (`SvgAttrError::Xml`)
/// - The content has no `<svg>` element (`SvgAttrError::MissingRoot`)
#[must_use = "parsing produces a result that should be handled"]
pub fn parse_svg_attributes(markup: &str) -> Result<SvgAttributes> {
    extract_attributes(&RoxmlParser, markup, &ExtractOptions::default())
}

/// Extract `<svg>` and `<path>` attributes from an SVG file
///
/// # Errors
///
/// Returns an error if the file cannot be read (`SvgAttrError::Io`), or for
/// any reason `parse_svg_attributes` fails.
#[must_use = "parsing produces a result that should be handled"]
pub fn parse_svg_attributes_file(path: &Path) -> Result<SvgAttributes> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    parse_svg_attributes(&content)
}
