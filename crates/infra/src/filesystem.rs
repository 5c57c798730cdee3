// crates/infra/src/filesystem.rs
use std::path::Path;

use log::debug;
use lsgrid_ports::filesystem::DirectoryReader;
use lsgrid_shared_kernel::{EntryName, InfraResult, InfrastructureError};

/// `std::fs::read_dir` backed implementation of the [`DirectoryReader`] port.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryReader;

impl StdDirectoryReader {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryReader for StdDirectoryReader {
    fn read_names(&self, dir: &Path) -> InfraResult<Vec<EntryName>> {
        let access_error = |source: std::io::Error| InfrastructureError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(access_error)? {
            let entry = entry.map_err(access_error)?;
            names.push(EntryName::new(entry.file_name()));
        }
        debug!("read {} entries from '{}'", names.len(), dir.display());
        Ok(names)
    }
}
