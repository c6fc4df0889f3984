//! End-to-end battery runs over the student registration fixture.

use formar::{student_form_suite, Reporter, Validator};

const FIXTURE: &str = include_str!("fixtures/student_form.html");

#[test]
fn conforming_document_passes_every_check() {
    let validator = Validator::from_source(FIXTURE);
    let report = validator.validate(&student_form_suite());
    assert!(
        report.all_passed(),
        "unexpected failures: {:?}",
        report
            .failures()
            .iter()
            .map(|e| format!("{}: {:?}", e.name, e.message))
            .collect::<Vec<_>>()
    );
    assert_eq!(report.total_count(), student_form_suite().len());
}

#[test]
fn rerunning_the_battery_is_idempotent() {
    let validator = Validator::from_source(FIXTURE);
    let suite = student_form_suite();
    let first = validator.validate(&suite);
    let second = validator.validate(&suite);
    assert_eq!(first.total_count(), second.total_count());
    for (a, b) in first.entries().iter().zip(second.entries()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.status, b.status);
        assert_eq!(a.message, b.message);
    }
}

#[test]
fn missing_grouping_class_fails_only_that_containment_check() {
    // Strip the grouping class from the comments wrapper only. The fixture
    // carries a ninth, untracked section, so the at-least-8 count still holds.
    let mutated = FIXTURE.replacen(
        "<div class=\"form-group\">\n                <label for=\"comments\">",
        "<div class=\"field\">\n                <label for=\"comments\">",
        1,
    );
    assert_ne!(mutated, FIXTURE, "mutation must hit the fixture");

    let validator = Validator::from_source(&mutated);
    let report = validator.validate(&student_form_suite());

    let failed: Vec<&str> = report.failures().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(failed, vec!["comments field sits inside a form-group"]);

    // Unrelated checks on the same field still pass.
    assert!(report
        .entries()
        .iter()
        .any(|e| e.name == "comments textarea spans 4 rows" && e.status.is_passed()));
}

#[test]
fn load_from_disk_and_validate() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(FIXTURE.as_bytes()).expect("write fixture");

    let validator = Validator::from_file(file.path()).expect("load");
    let report = validator.validate(&student_form_suite());
    assert!(report.all_passed());
}

#[test]
fn fail_fast_stops_on_the_first_mismatch() {
    let mutated = FIXTURE.replace("method=\"post\"", "method=\"get\"");
    let validator = Validator::from_source(&mutated);
    let suite = student_form_suite();

    let mut reporter = Reporter::fail_fast().with_name(suite.name());
    let err = validator
        .run(&suite, &mut reporter)
        .expect_err("must stop on the method mismatch");
    assert!(err.to_string().contains("form uses method post"));
    assert!(reporter.total_count() < suite.len());
    assert_eq!(reporter.failed_count(), 1);
}

#[test]
fn junit_rendition_reflects_outcomes() {
    let mutated = FIXTURE.replace("accept=\"image/*\"", "accept=\"image/png\"");
    let validator = Validator::from_source(&mutated);
    let report = validator.validate(&student_form_suite());

    assert_eq!(report.failed_count(), 1);
    let xml = report.render_junit();
    assert!(xml.contains("failures=\"1\""));
    assert!(xml.contains("profilePic input accepts any image type"));
    assert!(xml.contains("image/png"));
}

#[test]
fn json_rendition_reflects_outcomes() {
    let validator = Validator::from_source(FIXTURE);
    let report = validator.validate(&student_form_suite());
    let json = report.render_json().expect("render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value["failed"], 0);
    assert_eq!(value["total"], student_form_suite().len());
}
