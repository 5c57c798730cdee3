// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use lsgrid_core::bootstrap::failure_exit_code;

fn main() -> ExitCode {
    match lsgrid_core::run() {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("lsgrid: {err}");
            failure_exit_code(&err)
        }
    }
}
