//! File-based preset repository implementation.
//!
//! Each user preset is one JSON file in the presets directory:
//!
//! ```text
//! presets/
//!   my_preset.json
//!   shot_review.json
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rendernames_application::ports::{
    FileSystem, FileSystemError, PresetRepository, PresetRepositoryError,
};
use rendernames_domain::Preset;
use tracing::warn;

use super::paths::safe_file_name;
use crate::serialization::to_json_stable_bytes;

const EXTENSION: &str = "json";

/// Converts a `FileSystemError` into the repository's I/O error.
fn to_io_error(e: FileSystemError) -> std::io::Error {
    match e {
        FileSystemError::Io(io_err) => io_err,
        FileSystemError::NotFound(path) => {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        }
        FileSystemError::PermissionDenied(path) => std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        ),
    }
}

/// Stores user presets as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct FilePresetRepository<F> {
    fs: F,
    dir: PathBuf,
}

impl<F: FileSystem> FilePresetRepository<F> {
    /// Creates a repository over `dir`. The directory is created on first save.
    pub fn new(fs: F, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    /// The presets directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path for a preset name.
    #[must_use]
    pub fn preset_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{EXTENSION}", safe_file_name(name)))
    }
}

#[async_trait]
impl<F: FileSystem + Sync> PresetRepository for FilePresetRepository<F> {
    async fn load(&self, name: &str) -> Result<Preset, PresetRepositoryError> {
        let path = self.preset_path(name);

        if !self.fs.exists(&path).await {
            return Err(PresetRepositoryError::NotFound(name.to_string()));
        }

        let content = self
            .fs
            .read_file_string(&path)
            .await
            .map_err(|e| PresetRepositoryError::Io(to_io_error(e)))?;

        Preset::from_json_str(&content).map_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected preset file");
            PresetRepositoryError::Invalid(e)
        })
    }

    async fn save(&self, preset: &Preset) -> Result<(), PresetRepositoryError> {
        self.fs
            .create_dir_all(&self.dir)
            .await
            .map_err(|e| PresetRepositoryError::Io(to_io_error(e)))?;

        let content = to_json_stable_bytes(preset)
            .map_err(|e| PresetRepositoryError::Serialization(e.to_string()))?;

        self.fs
            .write_file(&self.preset_path(&preset.name), &content)
            .await
            .map_err(|e| PresetRepositoryError::Io(to_io_error(e)))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, PresetRepositoryError> {
        if !self.fs.exists(&self.dir).await {
            return Ok(Vec::new());
        }

        let entries = self
            .fs
            .read_dir(&self.dir)
            .await
            .map_err(|e| PresetRepositoryError::Io(to_io_error(e)))?;

        let mut names: Vec<String> = entries
            .iter()
            .filter(|entry| entry.extension().is_some_and(|ext| ext == EXTENSION))
            .filter_map(|entry| entry.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect();

        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> Result<(), PresetRepositoryError> {
        let path = self.preset_path(name);

        if !self.fs.exists(&path).await {
            return Err(PresetRepositoryError::NotFound(name.to_string()));
        }

        self.fs
            .remove_file(&path)
            .await
            .map_err(|e| PresetRepositoryError::Io(to_io_error(e)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::TokioFileSystem;
    use pretty_assertions::assert_eq;
    use rendernames_domain::{OutputConfig, PresetError};
    use tempfile::tempdir;

    #[test]
    fn test_preset_path() {
        let repo = FilePresetRepository::new(TokioFileSystem::new(), "/presets");
        assert_eq!(
            repo.preset_path("Shot: review"),
            PathBuf::from("/presets/Shot_ review.json")
        );
    }

    #[tokio::test]
    async fn test_save_load_list_delete() {
        let dir = tempdir().unwrap();
        let repo = FilePresetRepository::new(TokioFileSystem::new(), dir.path().join("presets"));

        assert!(repo.list().await.unwrap().is_empty());

        let preset = Preset::from_config("review", &OutputConfig::default());
        repo.save(&preset).await.unwrap();
        repo.save(&preset.renamed("anim")).await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec!["anim", "review"]);
        assert_eq!(repo.load("review").await.unwrap(), preset);
        assert!(repo.exists("anim").await.unwrap());

        repo.delete("anim").await.unwrap();
        assert!(!repo.exists("anim").await.unwrap());
        assert!(matches!(
            repo.delete("anim").await,
            Err(PresetRepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_saved_file_is_stable_json() {
        let dir = tempdir().unwrap();
        let repo = FilePresetRepository::new(TokioFileSystem::new(), dir.path());
        repo.save(&Preset::builtin("simple").unwrap()).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("simple.json")).unwrap();
        assert!(content.ends_with("}\n"));
        assert!(content.starts_with("{\n  \"name\": \"simple\",\n  \"options\": {\n"));
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("broken.json"),
            r#"{"name": "broken", "template": "x", "options": {"frame_padding": 4}}"#,
        )
        .unwrap();
        let repo = FilePresetRepository::new(TokioFileSystem::new(), dir.path());

        let err = repo.load("broken").await.unwrap_err();
        assert!(matches!(
            err,
            PresetRepositoryError::Invalid(PresetError::MissingKey { .. })
        ));
    }
}
