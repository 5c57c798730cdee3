//! Re-export error types from the shared kernel crate.

pub use lsgrid_shared_kernel::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, LsGridError,
    PresentationError, PresentationResult, Result,
};
