//! Parsed document tree with structural query operations.
//!
//! A [`Document`] is an immutable parse of an HTML source, built once per
//! validation run and queried for the rest of it. Queries hand back
//! [`Element`] handles, which expose the attribute accessors and the
//! ancestor traversal the rule families need.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::result::{FormarError, FormarResult};
use crate::selector::Selector;

/// An immutable, queryable HTML document tree.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a document from an HTML string.
    ///
    /// The parser is error-recovering, so this never fails; malformed
    /// markup simply yields the tree the HTML algorithm recovers to.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        debug!(bytes = source.len(), "parsed document");
        Self { html }
    }

    /// Load and parse a document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`FormarError::DocumentRead`] with a diagnostic hint if the
    /// file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> FormarResult<Self> {
        let path = path.as_ref();
        let source =
            fs::read_to_string(path).map_err(|e| FormarError::document_read(path, e))?;
        debug!(path = %path.display(), "read document from disk");
        Ok(Self::parse(&source))
    }

    /// Find the first element matching a selector.
    pub fn find(&self, selector: &Selector) -> FormarResult<Option<Element<'_>>> {
        let compiled = selector.compile()?;
        Ok(self.html.select(&compiled).next().map(Element::new))
    }

    /// Find all elements matching a selector, in document order.
    pub fn find_all(&self, selector: &Selector) -> FormarResult<Vec<Element<'_>>> {
        let compiled = selector.compile()?;
        Ok(self.html.select(&compiled).map(Element::new).collect())
    }

    /// Count elements matching a selector.
    pub fn count(&self, selector: &Selector) -> FormarResult<usize> {
        let compiled = selector.compile()?;
        Ok(self.html.select(&compiled).count())
    }

    /// Find the element with the given id.
    pub fn find_by_id(&self, id: &str) -> FormarResult<Option<Element<'_>>> {
        self.find(&Selector::id(id))
    }

    /// Find all elements carrying the given CSS class.
    pub fn find_all_by_class(&self, class: &str) -> FormarResult<Vec<Element<'_>>> {
        self.find_all(&Selector::class(class))
    }

    /// Find all elements with the given tag name.
    pub fn find_all_by_tag(&self, tag: &str) -> FormarResult<Vec<Element<'_>>> {
        self.find_all(&Selector::tag(tag))
    }

    /// Find the first element with the given tag whose attribute equals a value.
    pub fn find_by_attribute(
        &self,
        tag: &str,
        attribute: &str,
        value: &str,
    ) -> FormarResult<Option<Element<'_>>> {
        self.find(&Selector::tag(tag).with_attr(attribute, value))
    }
}

/// A handle to a single element within a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    node: ElementRef<'a>,
}

impl<'a> Element<'a> {
    pub(crate) fn new(node: ElementRef<'a>) -> Self {
        Self { node }
    }

    /// Tag name of this element
    #[must_use]
    pub fn tag(&self) -> &'a str {
        self.node.value().name()
    }

    /// Value of an attribute, if present
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.value().attr(name)
    }

    /// Whether an attribute is present, regardless of value
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// The element's id attribute, if present
    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.node.value().id()
    }

    /// Whether the element carries the given CSS class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.node.value().classes().any(|c| c == class)
    }

    /// Walk ancestors from the nearest outward and return the first one
    /// matching the selector ("closest" in DOM terms, excluding self).
    #[must_use]
    pub fn nearest_ancestor_matching(&self, selector: &Selector) -> Option<Element<'a>> {
        self.node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(Element::new)
            .find(|ancestor| selector.matches(ancestor))
    }

    /// Find all descendant elements matching a selector, in document order.
    pub fn find_all(&self, selector: &Selector) -> FormarResult<Vec<Element<'a>>> {
        let compiled = selector.compile()?;
        Ok(self.node.select(&compiled).map(Element::new).collect())
    }
}
