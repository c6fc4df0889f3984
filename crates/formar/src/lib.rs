//! Formar: Structural Validation of HTML Form Documents
//!
//! Formar (Spanish: "to form") loads an HTML document into an immutable,
//! queryable tree and runs an ordered battery of independent structural
//! checks against it: element presence, attribute equality, cardinality,
//! containment and membership.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     FORMAR Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ HTML       │    │ Check      │    │ Reporter   │            │
//! │   │ Document   │───►│ Battery    │───►│ (console / │            │
//! │   │ (parsed)   │    │ (rules)    │    │ json/junit)│            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The document is parsed once per run and never mutated; every rule is a
//! pure predicate over the tree, so execution order affects report
//! readability only.
//!
//! # Example
//!
//! ```
//! use formar::{student_form_suite, Validator};
//!
//! let validator = Validator::from_source("<form id=\"studentForm\"></form>");
//! let report = validator.validate(&student_form_suite());
//! assert!(!report.all_passed());
//! ```

#![warn(missing_docs)]

mod assertion;
mod document;
mod reporter;
mod result;
mod rule;
mod selector;
mod suite;
mod validator;

pub use assertion::{Assertion, AssertionResult};
pub use document::{Document, Element};
pub use reporter::{CheckEntry, CheckStatus, FailureMode, Reporter};
pub use result::{FormarError, FormarResult};
pub use rule::Rule;
pub use selector::Selector;
pub use suite::{student_form_suite, CheckSuite, GROUP_CLASS, TRACKED_FIELDS};
pub use validator::Validator;
