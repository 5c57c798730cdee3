// crates/core/src/presentation/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "lsgrid",
    version = crate::VERSION,
    about = "List directory contents in a three-column grid or in long format"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Do not ignore entries starting with `.` (includes `.` and `..`)
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Reverse the listing order
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Use the long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Log enumeration and lookup activity to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Directory to list
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub path: PathBuf,
}
