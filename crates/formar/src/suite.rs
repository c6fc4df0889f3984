//! Check suites.
//!
//! A [`CheckSuite`] is an ordered battery of independent rules. Ordering
//! affects report readability only, never outcomes. The built-in
//! [`student_form_suite`] encodes the structural expectations of the
//! student registration form document.

use crate::rule::Rule;
use crate::selector::Selector;

/// The field identifiers the built-in battery tracks
pub const TRACKED_FIELDS: [&str; 6] = [
    "fullName",
    "email",
    "password",
    "course",
    "comments",
    "profilePic",
];

/// Grouping class wrapping one logical form field
pub const GROUP_CLASS: &str = "form-group";

/// An ordered battery of structural rules.
#[derive(Debug, Clone, Default)]
pub struct CheckSuite {
    name: String,
    rules: Vec<Rule>,
}

impl CheckSuite {
    /// Create a new, empty suite
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append a rule, builder style
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Suite name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules, in execution order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the suite is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The built-in battery for the student registration form.
///
/// Mirrors the document contract: a `#studentForm` posting to `/submit`,
/// eight-plus `form-group` sections wrapping the tracked fields, a gender
/// radio pair, a newsletter checkbox, a course select, a comments
/// textarea, a profile picture upload, submit/reset buttons and label
/// coverage. The "at least" bounds are deliberate slack for extra,
/// untracked fields.
#[must_use]
pub fn student_form_suite() -> CheckSuite {
    let mut suite = CheckSuite::new("Student form structure");
    let group = || Selector::class(GROUP_CLASS);

    // Form structure
    suite.add_rule(Rule::exists("form element is present", Selector::tag("form")));
    suite.add_rule(Rule::attribute_equals(
        "form uses method post",
        Selector::tag("form"),
        "method",
        "post",
    ));
    suite.add_rule(Rule::attribute_equals(
        "form action targets /submit",
        Selector::tag("form"),
        "action",
        "/submit",
    ));
    suite.add_rule(Rule::attribute_equals(
        "form id is studentForm",
        Selector::tag("form"),
        "id",
        "studentForm",
    ));
    suite.add_rule(Rule::exists(
        "container element is present",
        Selector::class("container"),
    ));
    suite.add_rule(
        Rule::exists("container holds a heading", Selector::tag("h1"))
            .within(Selector::class("container")),
    );

    // Grouping classes
    suite.add_rule(Rule::count_at_least(
        "at least 8 sections use the form-group class",
        group(),
        8,
    ));
    for id in TRACKED_FIELDS {
        suite.add_rule(Rule::grouped_under(
            format!("{id} field sits inside a form-group"),
            Selector::id(id),
            group(),
        ));
    }

    // Gender radios
    suite.add_rule(Rule::exists(
        "gender radio group is present",
        Selector::class("radio-group"),
    ));
    suite.add_rule(Rule::grouped_under(
        "gender radio group sits inside a form-group",
        Selector::class("radio-group"),
        group(),
    ));
    suite.add_rule(
        Rule::count_exactly(
            "gender radio group holds exactly 2 radio inputs",
            Selector::tag("input").with_attr("type", "radio"),
            2,
        )
        .within(Selector::class("radio-group")),
    );
    for id in ["male", "female"] {
        let radio = || Selector::tag("input").with_id(id).with_attr("type", "radio");
        suite.add_rule(Rule::attribute_equals(
            format!("{id} radio is named gender"),
            radio(),
            "name",
            "gender",
        ));
        suite.add_rule(Rule::grouped_under(
            format!("{id} radio sits inside the radio group"),
            radio(),
            Selector::class("radio-group"),
        ));
    }

    // Newsletter checkbox
    suite.add_rule(Rule::exists(
        "newsletter checkbox group is present",
        Selector::class("checkbox-group"),
    ));
    suite.add_rule(Rule::grouped_under(
        "newsletter checkbox group sits inside a form-group",
        Selector::class("checkbox-group"),
        group(),
    ));
    suite.add_rule(
        Rule::exists(
            "subscribe checkbox is inside the checkbox group",
            Selector::tag("input")
                .with_id("subscribe")
                .with_attr("type", "checkbox"),
        )
        .within(Selector::class("checkbox-group")),
    );
    suite.add_rule(Rule::attribute_equals(
        "subscribe checkbox is named subscribe",
        Selector::tag("input")
            .with_id("subscribe")
            .with_attr("type", "checkbox"),
        "name",
        "subscribe",
    ));

    // Text-like inputs
    for (id, kind) in [("fullName", "text"), ("email", "email"), ("password", "password")] {
        let input = || Selector::tag("input").with_id(id);
        suite.add_rule(Rule::attribute_equals(
            format!("{id} input is a {kind} input"),
            input(),
            "type",
            kind,
        ));
        suite.add_rule(Rule::attribute_present(
            format!("{id} input is required"),
            input(),
            "required",
        ));
    }

    // Course select
    suite.add_rule(Rule::attribute_present(
        "course select is required",
        Selector::tag("select").with_id("course"),
        "required",
    ));
    suite.add_rule(
        Rule::count_at_least(
            "course select offers at least 3 options",
            Selector::tag("option"),
            3,
        )
        .within(Selector::tag("select").with_id("course")),
    );
    suite.add_rule(
        Rule::values_include(
            "course options cover html, css and javascript",
            Selector::tag("option"),
            "value",
            ["html", "css", "javascript"],
        )
        .within(Selector::tag("select").with_id("course")),
    );

    // Comments textarea
    suite.add_rule(Rule::attribute_equals(
        "comments textarea spans 4 rows",
        Selector::tag("textarea").with_id("comments"),
        "rows",
        "4",
    ));

    // Profile picture upload
    suite.add_rule(Rule::attribute_equals(
        "profilePic input accepts any image type",
        Selector::tag("input")
            .with_id("profilePic")
            .with_attr("type", "file"),
        "accept",
        "image/*",
    ));

    // Buttons
    suite.add_rule(Rule::exists(
        "button group is present",
        Selector::class("button-group"),
    ));
    suite.add_rule(
        Rule::count_exactly(
            "button group holds exactly 2 buttons",
            Selector::tag("button"),
            2,
        )
        .within(Selector::class("button-group")),
    );
    suite.add_rule(
        Rule::count_exactly(
            "button group holds one submit button",
            Selector::tag("button").with_attr("type", "submit"),
            1,
        )
        .within(Selector::class("button-group")),
    );
    suite.add_rule(
        Rule::count_exactly(
            "button group holds one reset button",
            Selector::tag("button").with_attr("type", "reset"),
            1,
        )
        .within(Selector::class("button-group")),
    );

    // Labels
    suite.add_rule(Rule::count_at_least(
        "at least 8 labels are present",
        Selector::tag("label"),
        8,
    ));
    suite.add_rule(Rule::values_include(
        "labels cover all tracked fields",
        Selector::tag("label"),
        "for",
        TRACKED_FIELDS,
    ));

    suite
}
