//! Extracted attribute sets

use crate::document::{XmlDocument, XmlElement};
use crate::error::{Result, SvgAttrError};
use crate::options::{ExtractOptions, MissingRootPolicy};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute name to value, in source order
///
/// Note that `IndexMap` equality ignores order; compare `iter()` output when
/// order matters.
pub type AttributeMap = IndexMap<String, String>;

/// Attributes of one SVG document: the root element and each path element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgAttributes {
    /// Attributes of the first `<svg>` element
    pub parent: AttributeMap,

    /// Attributes of every `<path>` element, in document order
    pub children: Vec<AttributeMap>,
}

#[inline]
fn attribute_map(element: &XmlElement) -> AttributeMap {
    element
        .attributes()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

impl SvgAttributes {
    /// Build the attribute sets from a parsed document
    ///
    /// # Errors
    ///
    /// Returns `SvgAttrError::MissingRoot` if the document has no element named
    /// `options.root_tag` and `options.missing_root` is `MissingRootPolicy::Error`.
    pub fn from_document(doc: &XmlDocument, options: &ExtractOptions) -> Result<Self> {
        let parent = match doc.elements_by_tag(&options.root_tag).next() {
            Some(root) => attribute_map(root),
            None => match options.missing_root {
                MissingRootPolicy::Error => {
                    return Err(SvgAttrError::MissingRoot(options.root_tag.clone()));
                }
                MissingRootPolicy::Empty => {
                    log::debug!("No <{}> element, using empty parent", options.root_tag);
                    AttributeMap::new()
                }
            },
        };

        let children = doc
            .elements_by_tag(&options.child_tag)
            .map(attribute_map)
            .collect();

        Ok(Self { parent, children })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{RoxmlParser, XmlParser};

    fn extract(svg: &str, options: &ExtractOptions) -> Result<SvgAttributes> {
        let doc = RoxmlParser::new().parse(svg)?;
        SvgAttributes::from_document(&doc, options)
    }

    #[test]
    fn test_parent_attributes_keep_source_order() {
        let attrs = extract(
            r#"<svg width="100" height="50" viewBox="0 0 100 50"/>"#,
            &ExtractOptions::default(),
        )
        .expect("extract");

        let pairs: Vec<_> = attrs
            .parent
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("width", "100"), ("height", "50"), ("viewBox", "0 0 100 50")]
        );
        assert!(attrs.children.is_empty());
    }

    #[test]
    fn test_values_not_coerced() {
        let attrs = extract(
            r#"<svg width="100px" height=" 50 "><path d="M0 0" opacity="0.50"/></svg>"#,
            &ExtractOptions::default(),
        )
        .expect("extract");
        assert_eq!(attrs.parent["width"], "100px");
        assert_eq!(attrs.parent["height"], " 50 ");
        assert_eq!(attrs.children[0]["opacity"], "0.50");
    }

    #[test]
    fn test_paths_in_nested_groups() {
        let svg = r#"<svg>
    <path d="M0 0"/>
    <g><g><path d="M1 1"/></g></g>
    <defs><path id="clip" d="M2 2"/></defs>
</svg>"#;
        let attrs = extract(svg, &ExtractOptions::default()).expect("extract");
        let ds: Vec<_> = attrs.children.iter().map(|c| c["d"].as_str()).collect();
        assert_eq!(ds, vec!["M0 0", "M1 1", "M2 2"]);
    }

    #[test]
    fn test_element_without_attributes_yields_empty_map() {
        let attrs = extract("<svg><path/></svg>", &ExtractOptions::default()).expect("extract");
        assert!(attrs.parent.is_empty());
        assert_eq!(attrs.children, vec![AttributeMap::new()]);
    }

    #[test]
    fn test_first_svg_element_wins() {
        let svg = r#"<svg id="outer"><svg id="inner"/></svg>"#;
        let attrs = extract(svg, &ExtractOptions::default()).expect("extract");
        assert_eq!(attrs.parent["id"], "outer");
    }

    #[test]
    fn test_missing_root_fails_by_default() {
        let err = extract(r#"<html><path d="M0 0"/></html>"#, &ExtractOptions::default())
            .expect_err("no svg element");
        assert!(matches!(err, SvgAttrError::MissingRoot(ref tag) if tag == "svg"));
    }

    #[test]
    fn test_missing_root_empty_policy() {
        let options = ExtractOptions::new().with_missing_root(MissingRootPolicy::Empty);
        let attrs = extract(r#"<html><path d="M0 0"/></html>"#, &options).expect("extract");
        assert!(attrs.parent.is_empty());
        assert_eq!(attrs.children.len(), 1);
    }

    #[test]
    fn test_custom_child_tag() {
        let options = ExtractOptions::new().with_child_tag("circle");
        let svg = r#"<svg><circle r="5"/><path d="M0 0"/><circle r="6"/></svg>"#;
        let attrs = extract(svg, &options).expect("extract");
        let radii: Vec<_> = attrs.children.iter().map(|c| c["r"].as_str()).collect();
        assert_eq!(radii, vec!["5", "6"]);
    }
}
