//! Output path resolution use case
//!
//! The single pipeline shared by live preview and the before-render hook:
//! context snapshot → template resolution → sanitization → path assembly.

use std::collections::BTreeSet;
use std::sync::Arc;

use rendernames_domain::{HostState, OutputConfig, RenderContext};

use crate::context_builder::ContextBuilder;
use crate::path_assembler::{DEFAULT_BASE_PATH, PathAssembler, directory_of};
use crate::ports::Clock;
use crate::sanitizer::{escape_separators, sanitize};
use crate::variable_resolver::{TemplateResolver, VariableRegistry};

/// A fully assembled output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutput {
    /// Final path, ready for the host's output field.
    pub path: String,
    /// Lowercased names of unknown variables left in the path.
    pub unresolved_tokens: BTreeSet<String>,
}

impl ResolvedOutput {
    /// Whether every token was resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved_tokens.is_empty()
    }
}

/// Picks the base path: a custom base when switched on, else the directory
/// of the host's current output path, else `//renders/`.
#[must_use]
pub fn base_path_for(config: &OutputConfig, host: &HostState) -> String {
    config
        .custom_base_path()
        .or_else(|| directory_of(&host.output_path))
        .unwrap_or(DEFAULT_BASE_PATH)
        .to_string()
}

/// Resolves configured templates into final output paths.
pub struct OutputPathResolver<C> {
    registry: Arc<VariableRegistry>,
    contexts: ContextBuilder<C>,
}

impl<C: Clock> OutputPathResolver<C> {
    /// Creates a resolver over a shared registry.
    pub const fn new(registry: Arc<VariableRegistry>, clock: C) -> Self {
        Self {
            registry,
            contexts: ContextBuilder::new(clock),
        }
    }

    /// The registry templates are resolved against.
    #[must_use]
    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// Takes a context snapshot for the given host state.
    #[must_use]
    pub fn snapshot(&self, host: &HostState, config: &OutputConfig) -> RenderContext {
        self.contexts.build(host, config.frame_padding)
    }

    /// Computes the output path for the current host state without side
    /// effects. Safe to call on every keystroke.
    #[must_use]
    pub fn preview(&self, host: &HostState, config: &OutputConfig) -> ResolvedOutput {
        let context = self.snapshot(host, config);
        self.resolve_with_context(&context, config, &base_path_for(config, host))
    }

    /// Computes the output path for an existing snapshot.
    #[must_use]
    pub fn resolve_with_context(
        &self,
        context: &RenderContext,
        config: &OutputConfig,
        base_path: &str,
    ) -> ResolvedOutput {
        let policy = config.policy();
        let resolver = TemplateResolver::new(&self.registry);

        let resolution = if policy.enabled {
            resolver.resolve_with(&config.template, context, |value| escape_separators(&value))
        } else {
            resolver.resolve(&config.template, context)
        };

        let sanitized = sanitize(&resolution.path, &policy);
        let path = PathAssembler::new(context, policy).assemble(
            &sanitized,
            &config.folders(),
            base_path,
        );

        ResolvedOutput {
            path,
            unresolved_tokens: resolution.unresolved_tokens,
        }
    }
}
