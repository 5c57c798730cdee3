mod args;

use clap::Parser;
use lsgrid_domain::options::{DEFAULT_COLUMN_COUNT, ListingOptions, validate_column_count};

use crate::{config::ListingConfig, error::LsGridError, logging};

pub use args::Args;

/// Parse CLI arguments and materialise a [`ListingConfig`].
pub fn load_config() -> anyhow::Result<ListingConfig> {
    let args = Args::parse();
    let env_level = std::env::var(logging::LOG_ENV).ok();
    build_config(args, env_level.as_deref())
}

/// Convert parsed CLI arguments into a validated configuration.
///
/// Validation failures surface as [`LsGridError`] so the exit code mapping
/// can inspect them.
pub fn build_config(args: Args, env_level: Option<&str>) -> anyhow::Result<ListingConfig> {
    let options = ListingOptions {
        show_hidden: args.all,
        reverse: args.reverse,
        long_format: args.long,
    };
    let columns = validate_column_count(DEFAULT_COLUMN_COUNT).map_err(LsGridError::from)?;
    let log_level = logging::resolve_level(args.verbose, env_level).map_err(LsGridError::from)?;

    Ok(ListingConfig { path: args.path, options, columns, log_level })
}
