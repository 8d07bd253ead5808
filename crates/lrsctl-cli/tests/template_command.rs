//! `generate-template` prints a storable skeleton statement.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn template_is_valid_json_with_required_shape() {
    let fixture = TestFixture::new();
    let output = fixture
        .cmd()
        .arg("generate-template")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("template output is valid JSON");
    assert!(parsed["actor"]["name"].is_string());
    assert!(parsed["actor"]["mbox"].is_string());
    assert!(parsed["verb"]["id"].is_string());
    assert!(parsed["verb"]["display"].is_object());
    assert!(parsed["object"].is_object());
}

#[test]
fn template_round_trips_through_validate() {
    let fixture = TestFixture::new();
    let output = fixture
        .cmd()
        .arg("generate-template")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let template = String::from_utf8(output).expect("utf8");

    fixture
        .cmd()
        .args(["validate", template.trim()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statement is valid"));
}
