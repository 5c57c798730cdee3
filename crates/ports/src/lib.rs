//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory enumeration and per-entry metadata lookup
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
