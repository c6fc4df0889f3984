//! Typed element selectors.
//!
//! A [`Selector`] is a structural description of an element query: an
//! optional tag name, an optional id, an optional class, and any number of
//! attribute filters. It compiles to a CSS selector for the query engine,
//! and can also match an element handle directly, which is what ancestor
//! traversal uses.

use std::fmt;

use crate::document::Element;
use crate::result::{FormarError, FormarResult};

/// Filter on a single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeFilter {
    /// Attribute must be present, any value (e.g. `required`)
    Present(String),
    /// Attribute must equal the given value
    Equals(String, String),
}

/// A compound element selector.
///
/// Built from one of the entry constructors and refined with the fluent
/// combinators:
///
/// ```
/// use formar::Selector;
///
/// let sel = Selector::tag("input").with_id("fullName").with_attr("type", "text");
/// assert_eq!(sel.to_css(), "input#fullName[type=\"text\"]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
    attributes: Vec<AttributeFilter>,
}

impl Selector {
    /// Select by tag name
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            tag: Some(name.into()),
            ..Self::default()
        }
    }

    /// Select by id
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Select by CSS class
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            class: Some(name.into()),
            ..Self::default()
        }
    }

    /// Require a specific id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Require a CSS class
    #[must_use]
    pub fn with_class(mut self, name: impl Into<String>) -> Self {
        self.class = Some(name.into());
        self
    }

    /// Require an attribute to equal a value
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .push(AttributeFilter::Equals(name.into(), value.into()));
        self
    }

    /// Require an attribute to be present, regardless of value
    #[must_use]
    pub fn with_attr_present(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(AttributeFilter::Present(name.into()));
        self
    }

    /// Render as a CSS selector string
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(tag) = &self.tag {
            css.push_str(tag);
        }
        if let Some(id) = &self.id {
            css.push('#');
            css.push_str(id);
        }
        if let Some(class) = &self.class {
            css.push('.');
            css.push_str(class);
        }
        for filter in &self.attributes {
            match filter {
                AttributeFilter::Present(name) => {
                    css.push_str(&format!("[{name}]"));
                }
                AttributeFilter::Equals(name, value) => {
                    css.push_str(&format!("[{name}=\"{value}\"]"));
                }
            }
        }
        if css.is_empty() {
            css.push('*');
        }
        css
    }

    /// Compile to an engine selector for document queries
    pub(crate) fn compile(&self) -> FormarResult<scraper::Selector> {
        let css = self.to_css();
        scraper::Selector::parse(&css)
            .map_err(|e| FormarError::invalid_selector(css.clone(), e.to_string()))
    }

    /// Test whether an element matches this selector directly.
    ///
    /// Used for ancestor traversal, where the engine's descendant queries
    /// do not apply.
    #[must_use]
    pub fn matches(&self, element: &Element<'_>) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id() != Some(id.as_str()) {
                return false;
            }
        }
        if let Some(class) = &self.class {
            if !element.has_class(class) {
                return false;
            }
        }
        self.attributes.iter().all(|filter| match filter {
            AttributeFilter::Present(name) => element.has_attr(name),
            AttributeFilter::Equals(name, value) => element.attr(name) == Some(value.as_str()),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_tag_selector_css() {
        assert_eq!(Selector::tag("form").to_css(), "form");
    }

    #[test]
    fn test_id_selector_css() {
        assert_eq!(Selector::id("studentForm").to_css(), "#studentForm");
    }

    #[test]
    fn test_class_selector_css() {
        assert_eq!(Selector::class("form-group").to_css(), ".form-group");
    }

    #[test]
    fn test_compound_selector_css() {
        let sel = Selector::tag("input")
            .with_id("male")
            .with_attr("type", "radio");
        assert_eq!(sel.to_css(), "input#male[type=\"radio\"]");
    }

    #[test]
    fn test_attribute_present_css() {
        let sel = Selector::tag("select").with_attr_present("required");
        assert_eq!(sel.to_css(), "select[required]");
    }

    #[test]
    fn test_empty_selector_is_universal() {
        assert_eq!(Selector::default().to_css(), "*");
    }

    #[test]
    fn test_display_matches_css() {
        let sel = Selector::tag("label");
        assert_eq!(sel.to_string(), sel.to_css());
    }

    #[test]
    fn test_compile_valid_selector() {
        assert!(Selector::tag("input").with_id("email").compile().is_ok());
    }

    #[test]
    fn test_matches_tag_and_class() {
        let doc = Document::parse(r#"<div class="form-group extra"><p>hi</p></div>"#);
        let div = doc.find_all_by_tag("div").expect("query")[0];
        assert!(Selector::tag("div").matches(&div));
        assert!(Selector::class("form-group").matches(&div));
        assert!(Selector::class("extra").matches(&div));
        assert!(!Selector::class("missing").matches(&div));
        assert!(!Selector::tag("span").matches(&div));
    }

    #[test]
    fn test_matches_attributes() {
        let doc = Document::parse(r#"<input type="email" id="email" required>"#);
        let input = doc.find_all_by_tag("input").expect("query")[0];
        assert!(Selector::tag("input").with_attr("type", "email").matches(&input));
        assert!(Selector::tag("input").with_attr_present("required").matches(&input));
        assert!(!Selector::tag("input").with_attr("type", "text").matches(&input));
        assert!(Selector::id("email").matches(&input));
    }
}
