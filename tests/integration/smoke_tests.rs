// tests/integration/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_lsgrid"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lsgrid").and(predicate::str::contains("-l")));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_lsgrid"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flag() {
    Command::new(env!("CARGO_BIN_EXE_lsgrid")).arg("-t").assert().failure();
}

#[test]
fn invalid_log_env_is_reported() {
    Command::new(env!("CARGO_BIN_EXE_lsgrid"))
        .env("LSGRID_LOG", "chatty")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("LSGRID_LOG"));
}
