// tests/common/mod.rs
//! Shared fixtures for the end-to-end suites.

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary directory populated with empty files of the given names.
pub fn workspace(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in files {
        fs::write(dir.path().join(name), "").unwrap();
    }
    dir
}

/// `lsgrid` command rooted at `dir`, with logging pinned to the default.
pub fn lsgrid(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lsgrid"));
    cmd.current_dir(dir).env_remove("LSGRID_LOG");
    cmd
}
