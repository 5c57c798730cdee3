// crates/infra/src/metadata.rs
use std::{ffi::OsStr, path::Path};

use chrono::{DateTime, Local};
use log::debug;
use lsgrid_ports::filesystem::MetadataProvider;
use lsgrid_shared_kernel::{FileMode, InfraResult, InfrastructureError, MetadataRecord};

use crate::platform::{OwnerNames, file_kind, raw_stat};

/// `lstat`-based implementation of the [`MetadataProvider`] port.
///
/// Symlinks are described as themselves, never followed. Owner and group
/// names are cached across calls.
#[derive(Debug, Default)]
pub struct LstatMetadataProvider {
    names: OwnerNames,
}

impl LstatMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataProvider for LstatMetadataProvider {
    fn metadata(&self, dir: &Path, name: &OsStr) -> InfraResult<MetadataRecord> {
        let path = dir.join(name);
        let unavailable = |source: std::io::Error| InfrastructureError::MetadataUnavailable {
            path: dir.to_path_buf(),
            name: name.to_string_lossy().into_owned(),
            source,
        };

        let meta = std::fs::symlink_metadata(&path).map_err(unavailable)?;
        let modified = meta.modified().map_err(unavailable)?;
        let raw = raw_stat(&meta);
        debug!("lstat '{}': mode {:o}, {} blocks", path.display(), raw.mode, raw.blocks512);

        Ok(MetadataRecord {
            kind: file_kind(&meta),
            mode: FileMode::new(raw.mode),
            link_count: raw.links,
            owner: self.names.user(raw.uid),
            group: self.names.group(raw.gid),
            size: meta.len(),
            blocks512: raw.blocks512,
            modified: DateTime::<Local>::from(modified),
        })
    }
}
