use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LsGridError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LsGridError>,
    },

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("{0}")]
    Presentation(#[from] PresentationError),
}

impl LsGridError {
    /// Walks through `Context` wrappers and reports whether the innermost
    /// error is a directory access failure.
    pub fn is_directory_access(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_directory_access(),
            Self::Infrastructure(InfrastructureError::DirectoryAccess { .. }) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, LsGridError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid column count {count}: at least one column is required")]
    InvalidColumnCount { count: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("cannot open directory '{path}': {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot access '{}': {source}", path.join(name).display())]
    MetadataUnavailable {
        path: PathBuf,
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for LsGridError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LsGridError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LsGridError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LsGridError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
