#![allow(clippy::multiple_crate_versions)]

pub mod layout;
pub mod long_format;
pub mod model;
pub mod options;
pub mod ordering;
pub mod permissions;
