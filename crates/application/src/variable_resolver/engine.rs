//! Template resolution engine
//!
//! Replaces `{{variable}}` tokens with resolver output. Unknown tokens stay
//! in the text verbatim and are reported, so a half-typed template still
//! previews.

use std::collections::BTreeSet;

use rendernames_domain::RenderContext;
use tracing::debug;

use super::parser::parse_tokens;
use super::registry::VariableRegistry;

/// Result of resolving one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The template with every known token substituted.
    pub path: String,

    /// Lowercased names of tokens the registry does not know.
    pub unresolved_tokens: BTreeSet<String>,
}

impl ResolutionResult {
    /// Creates a result for input with no tokens.
    #[must_use]
    pub fn no_variables(input: &str) -> Self {
        Self {
            path: input.to_string(),
            unresolved_tokens: BTreeSet::new(),
        }
    }

    /// Whether every token was resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved_tokens.is_empty()
    }

    /// Returns the count of distinct unresolved names.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved_tokens.len()
    }
}

/// Resolves templates against a registry.
#[derive(Debug, Clone, Copy)]
pub struct TemplateResolver<'r> {
    registry: &'r VariableRegistry,
}

impl<'r> TemplateResolver<'r> {
    /// Creates a resolver over the given registry.
    #[must_use]
    pub const fn new(registry: &'r VariableRegistry) -> Self {
        Self { registry }
    }

    /// Resolves all tokens in the template.
    #[must_use]
    pub fn resolve(&self, template: &str, context: &RenderContext) -> ResolutionResult {
        self.resolve_with(template, context, |value| value)
    }

    /// Resolves all tokens, passing each resolved value through `map_value`
    /// before it is spliced in. Literal template text is never mapped.
    pub fn resolve_with(
        &self,
        template: &str,
        context: &RenderContext,
        map_value: impl Fn(String) -> String,
    ) -> ResolutionResult {
        let tokens = parse_tokens(template);

        if tokens.is_empty() {
            return ResolutionResult::no_variables(template);
        }

        let mut unresolved = BTreeSet::new();
        let mut path = String::with_capacity(template.len());
        let mut last_end = 0;

        for token in &tokens {
            path.push_str(&template[last_end..token.span.start]);

            if let Some(definition) = self.registry.get(&token.name) {
                path.push_str(&map_value(definition.resolve(context)));
            } else {
                // Keep the original {{name}} for unknown variables
                path.push_str(&template[token.span.clone()]);
                unresolved.insert(token.key());
            }

            last_end = token.span.end;
        }

        path.push_str(&template[last_end..]);

        debug!(
            template,
            tokens = tokens.len(),
            unresolved = unresolved.len(),
            "resolved template"
        );

        ResolutionResult {
            path,
            unresolved_tokens: unresolved,
        }
    }

    /// Returns the names in the template the registry does not know.
    #[must_use]
    pub fn find_unresolved(&self, template: &str) -> BTreeSet<String> {
        parse_tokens(template)
            .into_iter()
            .filter(|t| !self.registry.contains(&t.name))
            .map(|t| t.key())
            .collect()
    }
}

/// Resolves a template against a context snapshot and registry.
#[must_use]
pub fn resolve(
    template: &str,
    context: &RenderContext,
    registry: &VariableRegistry,
) -> ResolutionResult {
    TemplateResolver::new(registry).resolve(template, context)
}
