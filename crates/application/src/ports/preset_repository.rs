//! Preset repository port
//!
//! Defines the interface for user preset persistence.

use async_trait::async_trait;
use rendernames_domain::{Preset, PresetError};

/// Errors that can occur during preset storage operations.
#[derive(Debug, thiserror::Error)]
pub enum PresetRepositoryError {
    /// Preset not found.
    #[error("Preset not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The stored document is not a valid preset.
    #[error(transparent)]
    Invalid(#[from] PresetError),
}

/// Repository trait for user preset persistence.
///
/// Built-in presets are not stored; only user presets go through here.
#[async_trait]
pub trait PresetRepository: Send + Sync {
    /// Loads a preset by name.
    ///
    /// # Errors
    /// Returns `PresetRepositoryError::NotFound` if the preset doesn't exist.
    async fn load(&self, name: &str) -> Result<Preset, PresetRepositoryError>;

    /// Saves a preset, replacing any existing one with the same name.
    ///
    /// # Errors
    /// Returns an error if the preset cannot be written.
    async fn save(&self, preset: &Preset) -> Result<(), PresetRepositoryError>;

    /// Lists stored preset names, sorted.
    ///
    /// # Errors
    /// Returns an error if the storage location cannot be read.
    async fn list(&self) -> Result<Vec<String>, PresetRepositoryError>;

    /// Deletes a preset.
    ///
    /// # Errors
    /// Returns `PresetRepositoryError::NotFound` if the preset doesn't exist.
    async fn delete(&self, name: &str) -> Result<(), PresetRepositoryError>;

    /// Checks if a preset exists.
    async fn exists(&self, name: &str) -> Result<bool, PresetRepositoryError> {
        match self.load(name).await {
            Ok(_) => Ok(true),
            Err(PresetRepositoryError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
