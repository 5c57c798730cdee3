#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use bootstrap::{Outcome, run, run_with_config};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
