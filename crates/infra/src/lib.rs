// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod metadata;
pub mod platform;

pub use filesystem::StdDirectoryReader;
pub use metadata::LstatMetadataProvider;
