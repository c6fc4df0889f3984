//! Structural rules.
//!
//! A [`Rule`] is one independent assertion against a document tree. Rules
//! are side-effect-free and order-independent: evaluating one never
//! changes what another observes. The families map directly onto the kinds
//! of structural expectation a form document carries:
//!
//! - **Existence**: a node matching a selector exists
//! - **Attribute equality / presence**: an attribute equals a literal, or
//!   is present at all (boolean attributes like `required`)
//! - **Cardinality**: the match count is at least, or exactly, a bound
//! - **Containment**: the nearest matching ancestor of a node exists
//! - **Membership**: collected attribute values include a required subset

use crate::assertion::{Assertion, AssertionResult};
use crate::document::{Document, Element};
use crate::selector::Selector;

/// The assertion family a rule belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
enum RuleKind {
    /// A node matching the selector exists
    Exists,
    /// The uniquely-matched node's attribute equals a literal
    AttributeEquals {
        /// Attribute name
        attribute: String,
        /// Expected literal value
        expected: String,
    },
    /// The uniquely-matched node carries an attribute
    AttributePresent {
        /// Attribute name
        attribute: String,
    },
    /// At least `min` nodes match
    CountAtLeast {
        /// Lower bound (inclusive)
        min: usize,
    },
    /// Exactly `expected` nodes match
    CountExactly {
        /// Exact expected count
        expected: usize,
    },
    /// The uniquely-matched node has an ancestor matching `group`
    GroupedUnder {
        /// Ancestor selector (typically a grouping class)
        group: Selector,
    },
    /// Attribute values collected over all matches include each required literal
    ValuesInclude {
        /// Attribute to collect
        attribute: String,
        /// Required members
        required: Vec<String>,
    },
}

/// One independent structural assertion against a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    selector: Selector,
    scope: Option<Selector>,
    kind: RuleKind,
}

impl Rule {
    fn new(name: impl Into<String>, selector: Selector, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            selector,
            scope: None,
            kind,
        }
    }

    /// A node matching the selector must exist
    #[must_use]
    pub fn exists(name: impl Into<String>, selector: Selector) -> Self {
        Self::new(name, selector, RuleKind::Exists)
    }

    /// The uniquely-matched node's attribute must equal a literal
    #[must_use]
    pub fn attribute_equals(
        name: impl Into<String>,
        selector: Selector,
        attribute: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            selector,
            RuleKind::AttributeEquals {
                attribute: attribute.into(),
                expected: expected.into(),
            },
        )
    }

    /// The uniquely-matched node must carry an attribute
    #[must_use]
    pub fn attribute_present(
        name: impl Into<String>,
        selector: Selector,
        attribute: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            selector,
            RuleKind::AttributePresent {
                attribute: attribute.into(),
            },
        )
    }

    /// At least `min` nodes must match the selector
    #[must_use]
    pub fn count_at_least(name: impl Into<String>, selector: Selector, min: usize) -> Self {
        Self::new(name, selector, RuleKind::CountAtLeast { min })
    }

    /// Exactly `expected` nodes must match the selector
    #[must_use]
    pub fn count_exactly(name: impl Into<String>, selector: Selector, expected: usize) -> Self {
        Self::new(name, selector, RuleKind::CountExactly { expected })
    }

    /// The uniquely-matched node must sit under an ancestor matching `group`
    #[must_use]
    pub fn grouped_under(name: impl Into<String>, selector: Selector, group: Selector) -> Self {
        Self::new(name, selector, RuleKind::GroupedUnder { group })
    }

    /// Attribute values over all matches must include each required literal
    #[must_use]
    pub fn values_include<I, S>(
        name: impl Into<String>,
        selector: Selector,
        attribute: impl Into<String>,
        required: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            selector,
            RuleKind::ValuesInclude {
                attribute: attribute.into(),
                required: required.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Restrict the rule to descendants of the first node matching `scope`
    #[must_use]
    pub fn within(mut self, scope: Selector) -> Self {
        self.scope = Some(scope);
        self
    }

    /// The rule's human-readable name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the rule against a document.
    ///
    /// Pure and idempotent: the same document always yields the same
    /// result. Query errors (a selector that fails to compile) surface as
    /// failing results rather than aborting the battery, since no check is
    /// fatal to the run.
    #[must_use]
    pub fn evaluate(&self, document: &Document) -> AssertionResult {
        let matches = match self.collect_matches(document) {
            Ok(matches) => matches,
            Err(result) => return result,
        };
        let subject = self.selector.to_css();

        match &self.kind {
            RuleKind::Exists => Assertion::exists(&subject, !matches.is_empty()),
            RuleKind::AttributeEquals {
                attribute,
                expected,
            } => match Self::resolve_unique(&subject, &matches) {
                Ok(element) => Assertion::attribute_equals(
                    &subject,
                    attribute,
                    expected,
                    element.attr(attribute),
                ),
                Err(result) => result,
            },
            RuleKind::AttributePresent { attribute } => {
                match Self::resolve_unique(&subject, &matches) {
                    Ok(element) => Assertion::attribute_present(
                        &subject,
                        attribute,
                        element.has_attr(attribute),
                    ),
                    Err(result) => result,
                }
            }
            RuleKind::CountAtLeast { min } => {
                Assertion::count_at_least(&self.counted_subject(), *min, matches.len())
            }
            RuleKind::CountExactly { expected } => {
                Assertion::count_exactly(&self.counted_subject(), *expected, matches.len())
            }
            RuleKind::GroupedUnder { group } => match Self::resolve_unique(&subject, &matches) {
                Ok(element) => {
                    if element.nearest_ancestor_matching(group).is_some() {
                        AssertionResult::pass()
                    } else {
                        AssertionResult::fail(format!(
                            "expected {subject} to sit inside {group}"
                        ))
                    }
                }
                Err(result) => result,
            },
            RuleKind::ValuesInclude {
                attribute,
                required,
            } => {
                let observed: Vec<String> = matches
                    .iter()
                    .filter_map(|element| element.attr(attribute))
                    .map(str::to_owned)
                    .collect();
                let required: Vec<&str> = required.iter().map(String::as_str).collect();
                Assertion::includes_all(
                    &format!("{attribute} values of {subject}"),
                    &required,
                    &observed,
                )
            }
        }
    }

    /// Collect matches for the rule's selector, honoring the scope.
    fn collect_matches<'a>(
        &self,
        document: &'a Document,
    ) -> Result<Vec<Element<'a>>, AssertionResult> {
        let fail = |e: crate::result::FormarError| AssertionResult::fail(e.to_string());
        match &self.scope {
            None => document.find_all(&self.selector).map_err(fail),
            Some(scope) => match document.find(scope).map_err(fail)? {
                Some(root) => root.find_all(&self.selector).map_err(fail),
                None => Err(AssertionResult::fail(format!(
                    "expected {scope} to be present"
                ))),
            },
        }
    }

    /// Exactly-one resolution shared by the attribute and containment families.
    fn resolve_unique<'a>(
        subject: &str,
        matches: &[Element<'a>],
    ) -> Result<Element<'a>, AssertionResult> {
        match matches {
            [element] => Ok(*element),
            [] => Err(AssertionResult::fail(format!(
                "expected {subject} to be present"
            ))),
            many => Err(AssertionResult::fail(format!(
                "expected exactly one match for {subject}, found {}",
                many.len()
            ))),
        }
    }

    fn counted_subject(&self) -> String {
        match &self.scope {
            Some(scope) => format!("elements matching {} inside {scope}", self.selector),
            None => format!("elements matching {}", self.selector),
        }
    }
}
