//! Application error types

use std::path::PathBuf;

use rendernames_domain::{DomainError, PresetError};
use thiserror::Error;

use crate::ports::{FileSystemError, PresetRepositoryError};

/// Application-level errors.
///
/// Resolution itself never fails; these cover render-time directory
/// creation and preset management.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A preset document failed validation.
    #[error(transparent)]
    InvalidPreset(#[from] PresetError),

    /// The requested preset was not found.
    #[error("preset not found: {0}")]
    NotFound(String),

    /// A preset storage operation failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// A file system operation failed.
    #[error("file system error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// The output directory could not be created before rendering.
    #[error("could not create output directory {}: {reason}", path.display())]
    CreateDirectory {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },
}

impl From<PresetRepositoryError> for ApplicationError {
    fn from(error: PresetRepositoryError) -> Self {
        match error {
            PresetRepositoryError::NotFound(name) => Self::NotFound(name),
            PresetRepositoryError::Invalid(e) => Self::InvalidPreset(e),
            other => Self::Storage(other.to_string()),
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
