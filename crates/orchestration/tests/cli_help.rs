mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn every_command_has_help() {
    let env = TestEnv::new();

    for args in [
        vec![],
        vec!["resource"],
        vec!["resource", "show"],
        vec!["resource", "list"],
    ] {
        env.cmd().args(&args).arg("--help").assert().success();
    }
}

#[test]
fn show_help_names_arguments() {
    TestEnv::new()
        .cmd()
        .args(["resource", "show", "--help"])
        .assert()
        .success()
        .stdout(contains("<RESOURCE_TYPE>"))
        .stdout(contains("--template-type <TEMPLATE_TYPE>"));
}

#[test]
fn list_help_names_filter() {
    TestEnv::new()
        .cmd()
        .args(["resource", "list", "--help"])
        .assert()
        .success()
        .stdout(contains("--filter <KEY=VALUE>"));
}
