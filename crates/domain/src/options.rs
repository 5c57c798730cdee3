// crates/domain/src/options.rs
use lsgrid_shared_kernel::{DomainError, DomainResult};

/// Number of columns used by the short listing.
pub const DEFAULT_COLUMN_COUNT: usize = 3;

/// Flags controlling which entries are listed and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingOptions {
    /// `-a`: include dotfiles, plus `.` and `..`.
    pub show_hidden: bool,
    /// `-r`: reverse the final order.
    pub reverse: bool,
    /// `-l`: one entry per line with decoded metadata.
    pub long_format: bool,
}

/// Output shape selected by [`ListingOptions::long_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Short,
    Long,
}

impl ListingOptions {
    pub const fn format(&self) -> OutputFormat {
        if self.long_format {
            OutputFormat::Long
        } else {
            OutputFormat::Short
        }
    }
}

/// Validates a column count for the short layout.
pub fn validate_column_count(count: usize) -> DomainResult<usize> {
    if count == 0 {
        return Err(DomainError::InvalidColumnCount { count });
    }
    Ok(count)
}
