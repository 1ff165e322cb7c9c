//! Writes presets to files for sharing.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use rendernames_application::ports::{FileSystem, FileSystemError};
use rendernames_domain::{OutputConfig, Preset};
use thiserror::Error;
use tracing::info;

use crate::serialization::{SerializationError, to_json_stable_bytes};

const EXTENSION: &str = "json";

/// Errors raised while exporting a preset.
#[derive(Debug, Error)]
pub enum ExportPresetError {
    /// The preset could not be serialized.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: FileSystemError,
    },
}

/// Exports presets as stable, pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct PresetExporter<F> {
    fs: F,
}

impl<F: FileSystem> PresetExporter<F> {
    /// Creates an exporter.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Returns `path` with `.json` appended unless it already ends in it.
    #[must_use]
    pub fn export_path(path: &Path) -> PathBuf {
        if path.extension().is_some_and(|ext| ext == EXTENSION) {
            return path.to_path_buf();
        }
        let mut raw = OsString::from(path.as_os_str());
        raw.push(".");
        raw.push(EXTENSION);
        PathBuf::from(raw)
    }

    /// Writes a preset and returns the path actually written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn export(&self, preset: &Preset, path: &Path) -> Result<PathBuf, ExportPresetError> {
        let target = Self::export_path(path);
        let content = to_json_stable_bytes(preset)?;

        self.fs
            .write_file(&target, &content)
            .await
            .map_err(|source| ExportPresetError::Write {
                path: target.clone(),
                source,
            })?;

        info!(preset = %preset.name, path = %target.display(), "exported preset");
        Ok(target)
    }

    /// Exports the current configuration, naming the preset after the file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn export_config(
        &self,
        config: &OutputConfig,
        path: &Path,
    ) -> Result<PathBuf, ExportPresetError> {
        let target = Self::export_path(path);
        let name = target
            .file_stem()
            .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned());
        self.export(&Preset::from_config(name, config), &target).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::TokioFileSystem;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    type Exporter = PresetExporter<TokioFileSystem>;

    #[test]
    fn test_export_path_appends_extension() {
        assert_eq!(Exporter::export_path(Path::new("/x/p")), PathBuf::from("/x/p.json"));
        assert_eq!(Exporter::export_path(Path::new("/x/p.json")), PathBuf::from("/x/p.json"));
        assert_eq!(Exporter::export_path(Path::new("/x/p.txt")), PathBuf::from("/x/p.txt.json"));
    }

    #[tokio::test]
    async fn test_export_writes_stable_json() {
        let dir = tempdir().unwrap();
        let exporter = PresetExporter::new(TokioFileSystem::new());
        let preset = Preset::builtin("archival").unwrap();

        let written = exporter.export(&preset, &dir.path().join("archival")).await.unwrap();

        assert_eq!(written, dir.path().join("archival.json"));
        let content = std::fs::read_to_string(&written).unwrap();
        assert!(content.ends_with("}\n"));
        assert_eq!(Preset::from_json_str(&content).unwrap(), preset);
    }

    #[tokio::test]
    async fn test_export_config_names_after_file() {
        let dir = tempdir().unwrap();
        let exporter = PresetExporter::new(TokioFileSystem::new());
        let config = OutputConfig::with_template("{{camera}}_{{frame}}");

        let written = exporter
            .export_config(&config, &dir.path().join("cams"))
            .await
            .unwrap();

        let preset = Preset::from_json_str(&std::fs::read_to_string(written).unwrap()).unwrap();
        assert_eq!(preset.name, "cams");
        assert_eq!(preset.template, "{{camera}}_{{frame}}");
    }
}
