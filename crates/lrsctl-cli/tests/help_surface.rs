//! The advertised command surface, including the camelCase command names the
//! tool has always used.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_the_command_surface() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("create")
                .and(predicate::str::contains("bulkImport"))
                .and(predicate::str::contains("listVerbs"))
                .and(predicate::str::contains("lrsStats"))
                .and(predicate::str::contains("avgScoreByActivity"))
                .and(predicate::str::contains("export-statements"))
                .and(predicate::str::contains("reset-db"))
                .and(predicate::str::contains("interactive-mode"))
                .and(predicate::str::contains("get-statements-by-duration")),
        );
}

#[test]
fn help_runs_without_configuration() {
    // clap handles --help before the configuration check can reject.
    let fixture = TestFixture::new();
    fixture.cmd_without("MONGODB_URI").arg("--help").assert().success();
}

#[test]
fn unknown_command_is_a_usage_error() {
    let fixture = TestFixture::new();
    fixture.cmd().arg("definitely-not-a-command").assert().failure();
}
