//! The `validate` command runs the schema check without a store call.

mod common;

use common::TestFixture;
use predicates::prelude::*;

const VALID: &str = r#"{"actor":{"name":"John","mbox":"mailto:john@x.com"},"verb":{"id":"http://adlnet.gov/expapi/verbs/completed","display":{"en-US":"completed"}},"object":{"objectType":"Activity","name":"Course"}}"#;

#[test]
fn valid_statement_passes() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["validate", VALID])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statement is valid"));
}

#[test]
fn bare_actor_reports_every_missing_field() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["validate", r#"{"actor":{"name":"John"}}"#])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Statement is invalid")
                .and(predicate::str::contains("actor.mbox"))
                .and(predicate::str::contains("`verb`"))
                .and(predicate::str::contains("`object`")),
        );
}

#[test]
fn wrong_type_is_named() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["validate", r#"{"actor":"John","verb":{"id":"http://v","display":{}},"object":{}}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("`actor` must be an object"));
}

#[test]
fn malformed_json_is_logged_and_swallowed() {
    // Handler failures never surface as a non-zero exit code; they are logged
    // at the dispatch boundary and the process completes.
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["validate", "{not json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not valid JSON"));
}
