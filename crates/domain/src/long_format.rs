// crates/domain/src/long_format.rs
//! Display fields for `-l` listings.

use chrono::{DateTime, Local};
use lsgrid_shared_kernel::MetadataRecord;

use crate::{layout::display_width, model::FileEntry, permissions::PermissionString};

/// `Jan  5 09:07`: abbreviated month, space-padded day, 24-hour time.
pub const TIMESTAMP_FORMAT: &str = "%b %e %H:%M";

pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Sum of 512-byte blocks converted to 1024-byte units, rounded down.
pub fn block_total<'a>(records: impl IntoIterator<Item = &'a MetadataRecord>) -> u64 {
    records.into_iter().map(|r| r.blocks512).sum::<u64>() / 2
}

/// Decoded fields of one long-format line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRow {
    pub permissions: PermissionString,
    pub links: String,
    pub owner: String,
    pub group: String,
    pub size: String,
    pub timestamp: String,
    pub name: String,
}

impl LongRow {
    pub fn decode(name: &str, record: &MetadataRecord) -> Self {
        Self {
            permissions: PermissionString::from_record(record),
            links: record.link_count.to_string(),
            owner: record.owner.clone(),
            group: record.group.clone(),
            size: record.size.to_string(),
            timestamp: format_timestamp(&record.modified),
            name: name.to_string(),
        }
    }
}

/// Column widths shared by every row of one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldWidths {
    pub links: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
}

impl FieldWidths {
    pub fn measure<'a>(rows: impl IntoIterator<Item = &'a LongRow>) -> Self {
        rows.into_iter().fold(Self::default(), |acc, row| Self {
            links: acc.links.max(display_width(&row.links)),
            owner: acc.owner.max(display_width(&row.owner)),
            group: acc.group.max(display_width(&row.group)),
            size: acc.size.max(display_width(&row.size)),
        })
    }
}

/// A complete long-format listing: block total plus one row per entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LongListing {
    pub total_blocks: u64,
    pub rows: Vec<LongRow>,
    pub widths: FieldWidths,
}

impl LongListing {
    /// Builds the listing from entries in display order. Entries without
    /// metadata are not part of a long listing and are skipped.
    pub fn from_entries(entries: &[FileEntry]) -> Self {
        let with_meta: Vec<(&str, &MetadataRecord)> = entries
            .iter()
            .filter_map(|e| e.metadata.as_ref().map(|m| (e.name.as_str(), m)))
            .collect();

        let total_blocks = block_total(with_meta.iter().map(|(_, m)| *m));
        let rows: Vec<LongRow> = with_meta
            .iter()
            .map(|(name, m)| LongRow::decode(name, m))
            .collect();
        let widths = FieldWidths::measure(&rows);
        Self { total_blocks, rows, widths }
    }
}
