//! Render lifecycle hooks
//!
//! `on_before_render` computes the same path the preview shows, creates its
//! directory and writes it to the host; `on_after_render` puts the host's
//! previous output path back.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rendernames_domain::{HostState, OutputConfig};
use tracing::{debug, info, warn};

use crate::error::{ApplicationError, ApplicationResult};
use crate::path_assembler::output_directory;
use crate::ports::{Clock, FileSystem, RenderTarget};

use super::output_path::OutputPathResolver;

/// What the before-render hook did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOutput {
    /// Path written to the host.
    pub final_path: String,
    /// Host output path before the hook ran.
    pub original_path: String,
    /// Directory that was ensured to exist, if the path has one.
    pub created_directory: Option<PathBuf>,
    /// Unknown variables left in the applied path.
    pub unresolved_tokens: BTreeSet<String>,
}

/// Before/after render callbacks for the host.
pub struct RenderHooks<C, F> {
    resolver: OutputPathResolver<C>,
    fs: F,
}

impl<C: Clock, F: FileSystem> RenderHooks<C, F> {
    /// Creates the hooks.
    pub const fn new(resolver: OutputPathResolver<C>, fs: F) -> Self {
        Self { resolver, fs }
    }

    /// The resolver shared with preview.
    pub const fn resolver(&self) -> &OutputPathResolver<C> {
        &self.resolver
    }

    /// Applies the templated path before a render starts.
    ///
    /// Returns `Ok(None)` and leaves the target untouched when the
    /// configuration is disabled or the template is empty.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::CreateDirectory` if the output directory
    /// cannot be created. The target is not modified in that case.
    pub async fn on_before_render<T: RenderTarget + ?Sized>(
        &self,
        host: &HostState,
        config: &OutputConfig,
        target: &mut T,
    ) -> ApplicationResult<Option<AppliedOutput>> {
        if !config.is_active() {
            debug!("output templating inactive, leaving render path unchanged");
            return Ok(None);
        }

        let original_path = target.output_path();
        let resolved = self.resolver.preview(host, config);

        if !resolved.is_complete() {
            warn!(
                path = %resolved.path,
                unknown = ?resolved.unresolved_tokens,
                "template references unknown variables"
            );
        }

        let blend_dir = host.blend_dir();
        let created_directory = match output_directory(&resolved.path, blend_dir.as_deref()) {
            Some(directory) => {
                self.fs.create_dir_all(&directory).await.map_err(|e| {
                    ApplicationError::CreateDirectory {
                        path: directory.clone(),
                        reason: e.to_string(),
                    }
                })?;
                info!(directory = %directory.display(), "created output directory");
                Some(directory)
            }
            None => None,
        };

        target.set_output_path(&resolved.path);
        info!(path = %resolved.path, "applied render output path");

        Ok(Some(AppliedOutput {
            final_path: resolved.path,
            original_path,
            created_directory,
            unresolved_tokens: resolved.unresolved_tokens,
        }))
    }

    /// Restores the output path saved by [`Self::on_before_render`].
    pub fn on_after_render<T: RenderTarget + ?Sized>(&self, target: &mut T, original_path: &str) {
        target.set_output_path(original_path);
        info!(path = %original_path, "restored render output path");
    }
}
