//! Flat XML document model
//!
//! A parsed document is the list of its elements in document order. Nesting is
//! not kept: extraction only ever asks "all elements with this tag, in order".

/// An XML element: qualified name and attributes in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified tag name as written (`svg`, `svg:path`, ...)
    pub name: String,

    /// Attribute `(name, value)` pairs; values as a DOM reports them
    pub attributes: Vec<(String, String)>,
}

impl XmlElement {
    /// Create an element with no attributes
    #[inline]
    #[must_use = "creates an element"]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Attribute pairs in source order
    #[inline]
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Parsed XML document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    /// All elements, in document order
    pub elements: Vec<XmlElement>,
}

impl XmlDocument {
    /// Elements whose qualified name equals `name`, in document order
    pub fn elements_by_tag<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements.iter().filter(move |e| e.name == name)
    }
}
