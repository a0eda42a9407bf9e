//! Property-Based Tests
//!
//! Tests using property-based testing (proptest) to verify cache invariants
//! over generated SVG markup:
//! - Storing twice is the same as storing once
//! - Stores never affect other indices
//! - Attributes and paths come back exactly, in source order
//! - Arbitrary text never panics the parser

use proptest::prelude::*;
use svg_attr_cache::{parse_svg_attributes, AttributeMap, SvgAttributeCache};

type Attrs = Vec<(String, String)>;

/// Unique attribute names (never `xml*`) with printable values, in generation order
fn attrs_strategy() -> impl Strategy<Value = Attrs> {
    prop::collection::btree_map("[a-w][a-z0-9-]{0,8}", "[ -~]{0,16}", 0..6)
        .prop_map(|m| m.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_tag(name: &str, attrs: &Attrs) -> String {
    let mut tag = format!("<{name}");
    for (key, value) in attrs {
        tag.push_str(&format!(" {key}=\"{}\"", escape(value)));
    }
    tag.push_str("/>");
    tag
}

fn render_svg(parent: &Attrs, children: &[Attrs]) -> String {
    let mut svg = render_tag("svg", parent);
    svg.truncate(svg.len() - 2);
    svg.push('>');
    for child in children {
        svg.push_str(&render_tag("path", child));
    }
    svg.push_str("</svg>");
    svg
}

fn as_pairs(map: &AttributeMap) -> Attrs {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

fn svg_strategy() -> impl Strategy<Value = (Attrs, Vec<Attrs>)> {
    (attrs_strategy(), prop::collection::vec(attrs_strategy(), 0..5))
}

// ============================================================================
// Extraction Properties
// ============================================================================

/// Property: parent and children attributes round-trip exactly, in order
#[test]
fn proptest_extraction_fidelity() {
    proptest!(|((parent, children) in svg_strategy())| {
        let markup = render_svg(&parent, &children);
        match parse_svg_attributes(&markup) {
            Ok(attrs) => {
                prop_assert_eq!(as_pairs(&attrs.parent), parent);
                let extracted: Vec<Attrs> = attrs.children.iter().map(as_pairs).collect();
                prop_assert_eq!(extracted, children);
            }
            Err(e) => prop_assert!(false, "Failed to parse {}: {}", markup, e),
        }
    });
}

/// Property: arbitrary text never panics, it either parses or errors
#[test]
fn proptest_arbitrary_text_no_panic() {
    proptest!(|(text in "\\PC{0,200}")| {
        let mut cache = SvgAttributeCache::new();
        let result = cache.store(&text, 0);
        prop_assert_eq!(result.is_ok(), cache.contains(0));
    });
}

// ============================================================================
// Cache Properties
// ============================================================================

/// Property: a second store of the same markup leaves the cache unchanged
#[test]
fn proptest_idempotent_store() {
    proptest!(|((parent, children) in svg_strategy(), index in 0usize..1000)| {
        let markup = render_svg(&parent, &children);
        let mut cache = SvgAttributeCache::new();
        prop_assert!(cache.store(&markup, index).is_ok());
        let once = cache.get(index).cloned();

        prop_assert!(cache.store(&markup, index).is_ok());
        prop_assert_eq!(cache.get(index).cloned(), once);
        prop_assert_eq!(cache.len(), 1);
    });
}

/// Property: the first markup stored at an index is the one kept
#[test]
fn proptest_first_write_wins() {
    proptest!(|(first in svg_strategy(), second in svg_strategy(), index in 0usize..1000)| {
        let mut cache = SvgAttributeCache::new();
        prop_assert!(cache.store(&render_svg(&first.0, &first.1), index).is_ok());
        prop_assert!(cache.store(&render_svg(&second.0, &second.1), index).is_ok());

        let parent = cache.get_parent(index).map(as_pairs);
        prop_assert_eq!(parent, Some(first.0));
        let children = cache
            .get_children(index)
            .map(|c| c.iter().map(as_pairs).collect::<Vec<_>>());
        prop_assert_eq!(children, Some(first.1));
    });
}

/// Property: storing at one index never touches another
#[test]
fn proptest_isolation_across_indices() {
    proptest!(|(
        a in svg_strategy(),
        b in svg_strategy(),
        i in 0usize..64,
        j in 0usize..64
    )| {
        prop_assume!(i != j);
        let mut cache = SvgAttributeCache::new();
        prop_assert!(cache.store(&render_svg(&a.0, &a.1), i).is_ok());
        let before = cache.get(i).cloned();
        prop_assert!(cache.get(j).is_none());

        prop_assert!(cache.store(&render_svg(&b.0, &b.1), j).is_ok());
        prop_assert_eq!(cache.get(i).cloned(), before);
        prop_assert_eq!(cache.get_parent(j).map(as_pairs), Some(b.0));
    });
}
