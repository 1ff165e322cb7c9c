//! Reads preset files picked by the user and stores them as user presets.
//!
//! The imported preset is named after the file stem, so `shot_review.json`
//! becomes `shot_review` regardless of the name inside the document. Files
//! are validated in full before anything is stored.

use std::path::{Path, PathBuf};

use rendernames_application::ports::{
    FileSystem, FileSystemError, PresetRepository, PresetRepositoryError,
};
use rendernames_domain::{Preset, PresetError};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while importing a preset file.
#[derive(Debug, Error)]
pub enum ImportPresetError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// File being imported.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: FileSystemError,
    },

    /// The document failed validation.
    #[error(transparent)]
    Invalid(#[from] PresetError),

    /// The file name has no usable stem to name the preset after.
    #[error("cannot derive a preset name from {}", .0.display())]
    MissingName(PathBuf),

    /// The validated preset could not be stored.
    #[error("failed to store imported preset: {0}")]
    Storage(#[from] PresetRepositoryError),
}

/// Imports preset files.
#[derive(Debug, Clone)]
pub struct PresetImporter<F> {
    fs: F,
}

impl<F: FileSystem> PresetImporter<F> {
    /// Creates an importer.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Reads and validates a preset file, naming it after the file stem.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has no stem, or is not a
    /// valid preset document.
    pub async fn read(&self, path: &Path) -> Result<Preset, ImportPresetError> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().trim().to_string())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| ImportPresetError::MissingName(path.to_path_buf()))?;

        let content = self
            .fs
            .read_file_string(path)
            .await
            .map_err(|source| ImportPresetError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let preset = Preset::from_json_str(&content).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected preset import");
        })?;

        Ok(preset.renamed(name))
    }

    /// Reads a preset file and saves it into `repository`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or validation fails, in which case nothing
    /// is stored, or if saving fails.
    pub async fn import<R: PresetRepository + ?Sized>(
        &self,
        path: &Path,
        repository: &R,
    ) -> Result<Preset, ImportPresetError> {
        let preset = self.read(path).await?;
        repository.save(&preset).await?;
        info!(preset = %preset.name, source = %path.display(), "imported preset");
        Ok(preset)
    }
}
