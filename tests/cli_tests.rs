use assert_cmd::Command;
use predicates::prelude::*;

const BANNER: &str = include_str!("../banner");

#[test]
fn test_help_prints_banner_then_usage() {
    Command::cargo_bin("sourcerank-tester")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(BANNER).and(predicate::str::contains("Usage:")));
}

#[test]
fn test_config_error_follows_banner() {
    Command::cargo_bin("sourcerank-tester")
        .unwrap()
        .args(["--timeout", "soon"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(BANNER))
        .stderr(predicate::str::contains("Error building config"));
}
