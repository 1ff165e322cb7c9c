//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Frame padding outside the supported digit range.
    #[error(
        "frame padding {0} outside {min}..={max}",
        min = crate::FramePadding::MIN,
        max = crate::FramePadding::MAX
    )]
    InvalidFramePadding(i64),

    /// A preset name is empty or only whitespace.
    #[error("preset name cannot be empty")]
    EmptyPresetName,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
