//! Element trees for the XML and HTML representations.
//!
//! Codecs never touch a parser directly; they work against [`Element`], a
//! minimal tree of tag, text, and children. [`xml`] reads and writes xCard
//! fragments strictly, [`html`] reads hCard fragments leniently.
//!
//! ```rust
//! use cardinal_codec::element::xml;
//!
//! let element = xml::parse_fragment("<note><text>hello</text></note>").unwrap();
//! assert_eq!(element.tag, "note");
//! assert_eq!(element.text_content(), "hello");
//! ```

pub mod html;
pub mod xml;

/// One element in a parsed fragment.
///
/// Only the pieces the codecs need are kept: the tag name, the element's own
/// text, and its child elements. Attributes and the ordering of text
/// relative to children are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child element.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends a child element holding only text.
    pub fn append_text_child(&mut self, tag: impl Into<String>, text: impl Into<String>) {
        self.children.push(Self::with_text(tag, text));
    }

    /// Returns the first child element, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }

    /// Returns the first child with the given tag, if any.
    #[must_use]
    pub fn find_child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Returns the element's own text followed by the text of every
    /// descendant, in document order of the elements.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut content = self.text.clone();
        for child in &self.children {
            content.push_str(&child.text_content());
        }
        content
    }
}

/// Resolves a numeric character reference name (`#233`, `#xE9`).
pub(crate) fn resolve_char_ref(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
