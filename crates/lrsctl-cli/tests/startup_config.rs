//! Startup configuration: every required variable must be present before any
//! command runs; a missing one is the only pre-dispatch failure (exit 1).

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn missing_uri_aborts_startup() {
    let fixture = TestFixture::new();
    fixture
        .cmd_without("MONGODB_URI")
        .arg("generate-template")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MONGODB_URI"));
}

#[test]
fn missing_db_name_aborts_startup() {
    let fixture = TestFixture::new();
    fixture
        .cmd_without("MONGODB_DB")
        .arg("generate-template")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MONGODB_DB"));
}

#[test]
fn missing_collection_aborts_startup() {
    let fixture = TestFixture::new();
    fixture
        .cmd_without("LRS_COLLECTION")
        .arg("generate-template")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("LRS_COLLECTION"));
}

#[test]
fn empty_variable_counts_as_missing() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .env("MONGODB_DB", "")
        .arg("generate-template")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MONGODB_DB"));
}

#[test]
fn full_configuration_reaches_the_command() {
    let fixture = TestFixture::new();
    fixture.cmd().arg("generate-template").assert().success();
}
