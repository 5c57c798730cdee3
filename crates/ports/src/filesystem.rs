// crates/ports/src/filesystem.rs
use std::{ffi::OsStr, path::Path};

use lsgrid_shared_kernel::{EntryName, InfraResult, MetadataRecord};

/// Port for reading the raw entry names of one directory.
///
/// Implementations return every name the directory holds, hidden or not,
/// in whatever order the platform reports them. `.` and `..` are never
/// included. A missing or unreadable directory is reported as
/// `InfrastructureError::DirectoryAccess`.
pub trait DirectoryReader {
    fn read_names(&self, dir: &Path) -> InfraResult<Vec<EntryName>>;
}

/// Port for resolving one entry's metadata without following symlinks.
///
/// `name` is the raw OS name, so entries whose names are not valid UTF-8
/// still resolve. Failures are reported as
/// `InfrastructureError::MetadataUnavailable`.
pub trait MetadataProvider {
    fn metadata(&self, dir: &Path, name: &OsStr) -> InfraResult<MetadataRecord>;
}
