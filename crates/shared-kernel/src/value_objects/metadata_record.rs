// crates/shared-kernel/src/value_objects/metadata_record.rs
use chrono::{DateTime, Local};

use super::{FileKind, FileMode};

/// Metadata captured for one directory entry, with ownership already
/// resolved to display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub kind: FileKind,
    pub mode: FileMode,
    pub link_count: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    /// Allocated size in 512-byte blocks (`st_blocks`).
    pub blocks512: u64,
    pub modified: DateTime<Local>,
}
