//! Check reporting.
//!
//! The [`Reporter`] collects one entry per evaluated rule and answers the
//! aggregate questions (counts, pass rate, summary line). Two failure
//! modes:
//!
//! - [`FailureMode::CollectAll`] (default): record every mismatch and keep
//!   going, so one broken field never hides the state of the rest of the
//!   document.
//! - [`FailureMode::FailFast`]: stop the line on the first mismatch;
//!   `record` returns an error after storing the failing entry.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::result::{FormarError, FormarResult};

/// Failure mode for battery execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Record every mismatch and continue
    #[default]
    CollectAll,
    /// Stop on the first mismatch
    FailFast,
}

/// Check result status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Expectation held
    Passed,
    /// Expected value differed from the observed tree state
    Failed,
}

impl CheckStatus {
    /// Check if status is passing
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Check if status is failing
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// One recorded check outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEntry {
    /// Check name
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
    /// Mismatch message when failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckEntry {
    /// Create a passing entry
    #[must_use]
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Passed,
            message: None,
        }
    }

    /// Create a failing entry
    #[must_use]
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed,
            message: Some(message.into()),
        }
    }
}

/// Collects check outcomes for one validation run.
#[derive(Debug, Default)]
pub struct Reporter {
    entries: Vec<CheckEntry>,
    failure_mode: FailureMode,
    suite_name: String,
}

impl Reporter {
    /// Create a reporter in CollectAll mode
    #[must_use]
    pub fn new() -> Self {
        Self {
            suite_name: "Structural checks".to_string(),
            ..Default::default()
        }
    }

    /// Create a reporter that stops on the first mismatch
    #[must_use]
    pub fn fail_fast() -> Self {
        Self {
            failure_mode: FailureMode::FailFast,
            suite_name: "Structural checks".to_string(),
            ..Default::default()
        }
    }

    /// Set the suite name used in the summary and serialized reports
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.suite_name = name.into();
        self
    }

    /// Record a check outcome.
    ///
    /// # Errors
    ///
    /// In fail-fast mode, returns [`FormarError::CheckFailed`] after
    /// storing a failing entry.
    pub fn record(&mut self, entry: CheckEntry) -> FormarResult<()> {
        let failure = if entry.status.is_failed() {
            Some((
                entry.name.clone(),
                entry.message.clone().unwrap_or_default(),
            ))
        } else {
            None
        };

        self.entries.push(entry);

        if self.failure_mode == FailureMode::FailFast {
            if let Some((name, message)) = failure {
                return Err(FormarError::check_failed(name, message));
            }
        }
        Ok(())
    }

    /// Number of passing checks
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status.is_passed())
            .count()
    }

    /// Number of failing checks
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status.is_failed())
            .count()
    }

    /// Total recorded checks
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Pass rate (0.0 to 1.0); an empty report counts as fully passing
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.entries.is_empty() {
            return 1.0;
        }
        self.passed_count() as f64 / self.entries.len() as f64
    }

    /// Whether every recorded check passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// All recorded entries, in execution order
    #[must_use]
    pub fn entries(&self) -> &[CheckEntry] {
        &self.entries
    }

    /// Failing entries only
    #[must_use]
    pub fn failures(&self) -> Vec<&CheckEntry> {
        self.entries
            .iter()
            .filter(|e| e.status.is_failed())
            .collect()
    }

    /// Suite name
    #[must_use]
    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    /// One-line summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {}/{} passed ({:.1}%)",
            self.suite_name,
            self.passed_count(),
            self.total_count(),
            self.pass_rate() * 100.0
        )
    }

    /// Render the report as JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn render_json(&self) -> FormarResult<String> {
        let report = serde_json::json!({
            "suite": self.suite_name,
            "total": self.total_count(),
            "passed": self.passed_count(),
            "failed": self.failed_count(),
            "checks": self.entries,
        });
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Render JUnit XML for CI integration
    #[must_use]
    pub fn render_junit(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<testsuite name="{}" tests="{}" failures="{}">"#,
            xml_escape(&self.suite_name),
            self.total_count(),
            self.failed_count()
        ));
        xml.push('\n');

        for entry in &self.entries {
            xml.push_str(&format!(
                r#"  <testcase name="{}">"#,
                xml_escape(&entry.name)
            ));
            if let Some(message) = &entry.message {
                xml.push('\n');
                xml.push_str(&format!(
                    r#"    <failure message="{}"/>"#,
                    xml_escape(message)
                ));
                xml.push('\n');
                xml.push_str("  ");
            }
            xml.push_str("</testcase>\n");
        }

        xml.push_str("</testsuite>\n");
        xml
    }

    /// Write the JUnit XML report to a file
    ///
    /// # Errors
    ///
    /// Returns error if file writing fails
    pub fn generate_junit(&self, output_path: &Path) -> FormarResult<()> {
        std::fs::write(output_path, self.render_junit())?;
        Ok(())
    }
}

/// Minimal XML attribute/text escaping
fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
