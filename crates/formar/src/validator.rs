//! Validator entry point.
//!
//! Loads a document once, then drives a [`CheckSuite`] through a
//! [`Reporter`]. The document is read-only for the whole run, so checks
//! are isolated from each other by construction.

use std::path::Path;

use tracing::debug;

use crate::assertion::AssertionResult;
use crate::document::Document;
use crate::reporter::{CheckEntry, Reporter};
use crate::result::FormarResult;
use crate::rule::Rule;
use crate::suite::CheckSuite;

/// Runs structural check batteries against a single parsed document.
#[derive(Debug)]
pub struct Validator {
    document: Document,
}

impl Validator {
    /// Load the document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormarError::DocumentRead`] if the file is missing
    /// or unreadable. No checks run without a tree.
    pub fn from_file(path: impl AsRef<Path>) -> FormarResult<Self> {
        Ok(Self {
            document: Document::load(path)?,
        })
    }

    /// Build a validator over an already-parsed source string.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        Self {
            document: Document::parse(source),
        }
    }

    /// The underlying document tree
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Evaluate a single rule against the document.
    #[must_use]
    pub fn check(&self, rule: &Rule) -> AssertionResult {
        let result = rule.evaluate(&self.document);
        debug!(rule = rule.name(), passed = result.passed, "evaluated rule");
        result
    }

    /// Run a suite, recording one entry per rule into the reporter.
    ///
    /// # Errors
    ///
    /// With a fail-fast reporter, returns [`crate::FormarError::CheckFailed`]
    /// on the first mismatch (after recording it). CollectAll reporters
    /// never error.
    pub fn run(&self, suite: &CheckSuite, reporter: &mut Reporter) -> FormarResult<()> {
        debug!(suite = suite.name(), rules = suite.len(), "running check suite");
        for rule in suite.rules() {
            reporter.record(self.entry_for(rule))?;
        }
        Ok(())
    }

    /// Run a suite in CollectAll mode and return the finished reporter.
    #[must_use]
    pub fn validate(&self, suite: &CheckSuite) -> Reporter {
        let mut reporter = Reporter::new().with_name(suite.name());
        for rule in suite.rules() {
            if reporter.record(self.entry_for(rule)).is_err() {
                break;
            }
        }
        reporter
    }

    fn entry_for(&self, rule: &Rule) -> CheckEntry {
        let result = self.check(rule);
        if result.passed {
            CheckEntry::passed(rule.name())
        } else {
            CheckEntry::failed(rule.name(), result.message)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::selector::Selector;

    const SNIPPET: &str = r#"
        <form id="studentForm" method="post" action="/submit">
            <div class="form-group"><input type="text" id="fullName" required></div>
        </form>
    "#;

    fn two_rule_suite() -> CheckSuite {
        CheckSuite::new("demo")
            .with_rule(Rule::attribute_equals(
                "form uses method post",
                Selector::tag("form"),
                "method",
                "post",
            ))
            .with_rule(Rule::exists(
                "textarea is present",
                Selector::tag("textarea"),
            ))
    }

    #[test]
    fn test_check_single_rule() {
        let validator = Validator::from_source(SNIPPET);
        let rule = Rule::exists("form present", Selector::tag("form"));
        assert!(validator.check(&rule).passed);
    }

    #[test]
    fn test_validate_collects_all_outcomes() {
        let validator = Validator::from_source(SNIPPET);
        let reporter = validator.validate(&two_rule_suite());
        assert_eq!(reporter.total_count(), 2);
        assert_eq!(reporter.passed_count(), 1);
        assert_eq!(reporter.failed_count(), 1);
        assert_eq!(reporter.suite_name(), "demo");
    }

    #[test]
    fn test_run_fail_fast_stops_after_first_mismatch() {
        let validator = Validator::from_source(SNIPPET);
        let suite = CheckSuite::new("demo")
            .with_rule(Rule::exists("textarea is present", Selector::tag("textarea")))
            .with_rule(Rule::exists("form present", Selector::tag("form")));
        let mut reporter = Reporter::fail_fast();
        let err = validator.run(&suite, &mut reporter).expect_err("must stop");
        assert!(err.to_string().contains("textarea"));
        assert_eq!(reporter.total_count(), 1);
    }

    #[test]
    fn test_from_file_missing_aborts() {
        let err = Validator::from_file("no/such/file.html").expect_err("must fail");
        assert!(err.to_string().contains("Make sure the file exists"));
    }

    #[test]
    fn test_rerun_yields_identical_results() {
        let validator = Validator::from_source(SNIPPET);
        let suite = two_rule_suite();
        let first = validator.validate(&suite);
        let second = validator.validate(&suite);
        assert_eq!(first.passed_count(), second.passed_count());
        assert_eq!(first.failed_count(), second.failed_count());
        for (a, b) in first.entries().iter().zip(second.entries()) {
            assert_eq!(a.status, b.status);
            assert_eq!(a.message, b.message);
        }
    }
}
