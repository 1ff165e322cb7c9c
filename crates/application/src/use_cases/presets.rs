//! Preset management use cases

use rendernames_domain::{DomainError, OutputConfig, Preset, PresetRef};
use tracing::info;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::PresetRepository;

/// Preset names available to the host, grouped by origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetListing {
    /// Built-in preset names in display order.
    pub builtin: Vec<String>,
    /// User preset names, sorted.
    pub user: Vec<String>,
}

/// Lists, loads, saves, deletes and applies presets.
pub struct PresetLibrary<R> {
    repository: R,
}

impl<R: PresetRepository> PresetLibrary<R> {
    /// Creates a library over the given storage.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// The underlying storage.
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Lists built-in and user presets.
    ///
    /// # Errors
    ///
    /// Returns an error if user presets cannot be listed.
    pub async fn list(&self) -> ApplicationResult<PresetListing> {
        let mut user = self.repository.list().await?;
        user.sort();

        Ok(PresetListing {
            builtin: Preset::builtins().into_iter().map(|p| p.name).collect(),
            user,
        })
    }

    /// Loads a preset by reference.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for unknown names and
    /// `ApplicationError::InvalidPreset` for stored documents that fail
    /// validation.
    pub async fn load(&self, reference: &PresetRef) -> ApplicationResult<Preset> {
        match reference {
            PresetRef::Builtin(name) => {
                Preset::builtin(name).ok_or_else(|| ApplicationError::NotFound(name.clone()))
            }
            PresetRef::User(name) => Ok(self.repository.load(name).await?),
        }
    }

    /// Saves the current configuration as a user preset.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyPresetName` for blank names, or a storage
    /// error.
    pub async fn save_current(
        &self,
        name: &str,
        config: &OutputConfig,
    ) -> ApplicationResult<Preset> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyPresetName.into());
        }

        let preset = Preset::from_config(name, config);
        self.repository.save(&preset).await?;
        info!(preset = %preset.name, "saved preset");
        Ok(preset)
    }

    /// Deletes a user preset.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no such preset exists.
    pub async fn delete(&self, name: &str) -> ApplicationResult<()> {
        self.repository.delete(name).await?;
        info!(preset = %name, "deleted preset");
        Ok(())
    }

    /// Loads a preset and writes it into the configuration.
    ///
    /// The configuration is only touched once the preset has loaded and
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns the load error; `config` is unchanged in that case.
    pub async fn apply(
        &self,
        reference: &PresetRef,
        config: &mut OutputConfig,
    ) -> ApplicationResult<Preset> {
        let preset = self.load(reference).await?;
        preset.apply_to(config);
        info!(preset = %reference.encode(), "applied preset");
        Ok(preset)
    }
}
