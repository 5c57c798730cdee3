use std::path::PathBuf;

use lsgrid_domain::{
    layout::ColumnLayout,
    long_format::LongListing,
    options::{DEFAULT_COLUMN_COUNT, ListingOptions},
};
use lsgrid_shared_kernel::InfrastructureError;

/// Input of [`crate::ListDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub path: PathBuf,
    pub options: ListingOptions,
    pub columns: usize,
}

impl ListingRequest {
    pub fn new(path: impl Into<PathBuf>, options: ListingOptions) -> Self {
        Self { path: path.into(), options, columns: DEFAULT_COLUMN_COUNT }
    }
}

/// Shaped listing ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    Short(ColumnLayout),
    Long(LongListing),
}

/// An entry whose metadata could not be read; it is left out of the listing.
#[derive(Debug)]
pub struct EntryFailure {
    pub name: String,
    pub error: InfrastructureError,
}

#[derive(Debug)]
pub struct ListingReport {
    pub body: ReportBody,
    pub failures: Vec<EntryFailure>,
}

impl ListingReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
