use std::process::ExitCode;

use anyhow::Result;
use log::debug;
use lsgrid_infra::{LstatMetadataProvider, StdDirectoryReader};
use lsgrid_usecase::ListDirectory;

use crate::{
    config::ListingConfig,
    error::LsGridError,
    infrastructure::io::output::{emit, report_failures},
    logging,
    presentation::cli,
};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every entry was listed.
    Listed,
    /// The listing was printed but some entries could not be described.
    Partial,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Listed => ExitCode::SUCCESS,
            Self::Partial => ExitCode::from(1),
        }
    }
}

/// Exit status for a failed run: 2 when the directory itself could not be
/// read, 1 otherwise.
pub fn failure_exit_code(err: &anyhow::Error) -> ExitCode {
    let fatal_access = err
        .downcast_ref::<LsGridError>()
        .is_some_and(LsGridError::is_directory_access);
    ExitCode::from(if fatal_access { 2 } else { 1 })
}

pub fn run() -> Result<Outcome> {
    let config = cli::load_config()?;
    run_with_config(&config)
}

pub fn run_with_config(config: &ListingConfig) -> Result<Outcome> {
    logging::init(config.log_level);
    debug!(
        "lsgrid v{} listing '{}' with {:?}",
        crate::VERSION,
        config.path.display(),
        config.options
    );

    let reader = StdDirectoryReader::new();
    let metadata = LstatMetadataProvider::new();
    let usecase = ListDirectory::new(&reader, &metadata);

    let report = usecase.run(&config.to_request())?;
    emit(&report)?;
    report_failures(&report.failures, &mut std::io::stderr().lock())?;

    Ok(if report.is_complete() {
        Outcome::Listed
    } else {
        Outcome::Partial
    })
}
