// tests/integration/end_to_end.rs
use std::fs;

use predicates::prelude::*;

use crate::common::{lsgrid, workspace};

#[test]
fn sorts_case_insensitively_into_one_row() {
    let dir = workspace(&["banana", "Apple", "cherry"]);
    lsgrid(dir.path()).assert().success().stdout("Apple  banana  cherry\n");
}

#[test]
fn reverse_flag_reverses_listing() {
    let dir = workspace(&["banana", "Apple", "cherry"]);
    lsgrid(dir.path()).arg("-r").assert().success().stdout("cherry  banana  Apple\n");
}

#[test]
fn seven_entries_fill_columns_top_to_bottom() {
    let dir = workspace(&["a1", "a2", "a3", "b1", "b2", "b3", "c1"]);
    lsgrid(dir.path()).assert().success().stdout("a1  b1  c1\na2  b2\na3  b3\n");
}

#[test]
fn hidden_entries_need_all_flag() {
    let dir = workspace(&[".env", "main.rs"]);
    lsgrid(dir.path()).assert().success().stdout("main.rs\n");
    // Four names take two rows: [".", ".."] [".env", "main.rs"] []
    lsgrid(dir.path()).arg("-a").assert().success().stdout(".   .env   \n..  main.rs\n");
}

#[test]
fn lists_explicit_path_argument() {
    let dir = workspace(&[]);
    fs::create_dir(dir.path().join("inner")).unwrap();
    fs::write(dir.path().join("inner").join("only.txt"), "").unwrap();
    lsgrid(dir.path()).arg("inner").assert().success().stdout("only.txt\n");
}

#[test]
fn empty_directory_prints_nothing() {
    let dir = workspace(&[]);
    lsgrid(dir.path()).assert().success().stdout("");
}

#[test]
fn missing_directory_exits_with_status_two() {
    let dir = workspace(&[]);
    lsgrid(dir.path())
        .arg("does-not-exist")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with("lsgrid: cannot open directory 'does-not-exist'"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = workspace(&["one"]);
    lsgrid(dir.path())
        .arg("-v")
        .assert()
        .success()
        .stdout("one\n")
        .stderr(predicate::str::contains("[debug]"));
}
