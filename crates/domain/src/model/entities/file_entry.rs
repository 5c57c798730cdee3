use lsgrid_shared_kernel::{EntryName, MetadataRecord};

/// One listed directory entry. Metadata is only present in long format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: EntryName,
    pub metadata: Option<MetadataRecord>,
}

impl FileEntry {
    pub fn named(name: impl Into<EntryName>) -> Self {
        Self { name: name.into(), metadata: None }
    }

    pub fn with_metadata(name: impl Into<EntryName>, metadata: MetadataRecord) -> Self {
        Self { name: name.into(), metadata: Some(metadata) }
    }
}
