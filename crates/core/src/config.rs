use std::path::PathBuf;

use log::LevelFilter;
use lsgrid_domain::options::ListingOptions;
use lsgrid_usecase::ListingRequest;

/// Fully validated settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub path: PathBuf,
    pub options: ListingOptions,
    pub columns: usize,
    pub log_level: LevelFilter,
}

impl ListingConfig {
    pub fn to_request(&self) -> ListingRequest {
        ListingRequest { path: self.path.clone(), options: self.options, columns: self.columns }
    }
}
