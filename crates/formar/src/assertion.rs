//! Assertions over observed document state.

/// Result of a single assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    /// Whether the assertion passed
    pub passed: bool,
    /// Human-readable mismatch message
    pub message: String,
}

impl AssertionResult {
    /// Create a passing assertion result
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    /// Create a failing assertion result
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Assertion helpers producing descriptive mismatch messages
pub struct Assertion;

impl Assertion {
    /// Assert an element was found
    #[must_use]
    pub fn exists(subject: &str, found: bool) -> AssertionResult {
        if found {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!("expected {subject} to be present"))
        }
    }

    /// Assert an attribute equals an expected literal
    #[must_use]
    pub fn attribute_equals(
        subject: &str,
        attribute: &str,
        expected: &str,
        actual: Option<&str>,
    ) -> AssertionResult {
        match actual {
            Some(value) if value == expected => AssertionResult::pass(),
            Some(value) => AssertionResult::fail(format!(
                "expected {subject} to have {attribute}=\"{expected}\", got \"{value}\""
            )),
            None => AssertionResult::fail(format!(
                "expected {subject} to have {attribute}=\"{expected}\", but the attribute is missing"
            )),
        }
    }

    /// Assert an attribute is present
    #[must_use]
    pub fn attribute_present(subject: &str, attribute: &str, present: bool) -> AssertionResult {
        if present {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!(
                "expected {subject} to carry the {attribute} attribute"
            ))
        }
    }

    /// Assert a match count is at least a lower bound
    #[must_use]
    pub fn count_at_least(subject: &str, min: usize, actual: usize) -> AssertionResult {
        if actual >= min {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!(
                "expected at least {min} {subject}, found {actual}"
            ))
        }
    }

    /// Assert a match count is exact
    #[must_use]
    pub fn count_exactly(subject: &str, expected: usize, actual: usize) -> AssertionResult {
        if actual == expected {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!(
                "expected exactly {expected} {subject}, found {actual}"
            ))
        }
    }

    /// Assert a collected value set includes every required member
    #[must_use]
    pub fn includes_all(subject: &str, required: &[&str], observed: &[String]) -> AssertionResult {
        let missing: Vec<&str> = required
            .iter()
            .filter(|needle| !observed.iter().any(|v| v == *needle))
            .copied()
            .collect();
        if missing.is_empty() {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!(
                "expected {subject} to include {}, missing: {}",
                format_set(required),
                missing.join(", ")
            ))
        }
    }
}

fn format_set(values: &[&str]) -> String {
    values.join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_pass_and_fail() {
        assert!(Assertion::exists("form", true).passed);
        let fail = Assertion::exists("form", false);
        assert!(!fail.passed);
        assert!(fail.message.contains("form"));
    }

    #[test]
    fn test_attribute_equals_match() {
        assert!(Assertion::attribute_equals("form", "method", "post", Some("post")).passed);
    }

    #[test]
    fn test_attribute_equals_mismatch_shows_both_values() {
        let result = Assertion::attribute_equals("form", "method", "post", Some("get"));
        assert!(!result.passed);
        assert!(result.message.contains("post"));
        assert!(result.message.contains("get"));
    }

    #[test]
    fn test_attribute_equals_missing_attribute() {
        let result = Assertion::attribute_equals("form", "action", "/submit", None);
        assert!(!result.passed);
        assert!(result.message.contains("missing"));
    }

    #[test]
    fn test_count_at_least_boundary() {
        assert!(Assertion::count_at_least("labels", 8, 8).passed);
        assert!(Assertion::count_at_least("labels", 8, 10).passed);
        assert!(!Assertion::count_at_least("labels", 8, 7).passed);
    }

    #[test]
    fn test_count_exactly() {
        assert!(Assertion::count_exactly("radio inputs", 2, 2).passed);
        let fail = Assertion::count_exactly("radio inputs", 2, 3);
        assert!(!fail.passed);
        assert!(fail.message.contains("exactly 2"));
        assert!(fail.message.contains("found 3"));
    }

    #[test]
    fn test_includes_all_reports_missing() {
        let observed = vec!["html".to_string(), "css".to_string()];
        let result = Assertion::includes_all("option values", &["html", "css", "javascript"], &observed);
        assert!(!result.passed);
        assert!(result.message.contains("javascript"));
        assert!(!result.message.contains("missing: html"));
    }

    #[test]
    fn test_includes_all_subset_ok() {
        let observed = vec![
            "html".to_string(),
            "css".to_string(),
            "javascript".to_string(),
            "rust".to_string(),
        ];
        assert!(Assertion::includes_all("option values", &["html", "css", "javascript"], &observed).passed);
    }
}
