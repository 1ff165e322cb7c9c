//! Template checks and editing helpers for the host UI.
//!
//! Validation produces hints only; resolution never depends on it.

use std::fmt;

use super::parser::parse_tokens;
use super::registry::VariableRegistry;

/// A problem found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateIssue {
    /// The template is empty or only whitespace.
    Empty,
    /// The number of `{{` and `}}` delimiters differs.
    UnbalancedDelimiters {
        /// Count of `{{`.
        open: usize,
        /// Count of `}}`.
        close: usize,
    },
    /// Tokens name variables the registry does not know.
    UnknownVariables(Vec<String>),
}

impl fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Template cannot be empty"),
            Self::UnbalancedDelimiters { .. } => f.write_str("Unmatched braces in template"),
            Self::UnknownVariables(names) => write!(f, "Unknown variables: {}", names.join(", ")),
        }
    }
}

/// Checks a template and returns every issue found, in a fixed order.
#[must_use]
pub fn validate_template(template: &str, registry: &VariableRegistry) -> Vec<TemplateIssue> {
    if template.trim().is_empty() {
        return vec![TemplateIssue::Empty];
    }

    let mut issues = Vec::new();

    let open = template.matches("{{").count();
    let close = template.matches("}}").count();
    if open != close {
        issues.push(TemplateIssue::UnbalancedDelimiters { open, close });
    }

    let mut unknown: Vec<String> = Vec::new();
    for token in parse_tokens(template) {
        if !registry.contains(&token.name) && !unknown.contains(&token.name) {
            unknown.push(token.name);
        }
    }
    if !unknown.is_empty() {
        issues.push(TemplateIssue::UnknownVariables(unknown));
    }

    issues
}

/// Appends a `{{name}}` token to a template.
///
/// The token is joined with `_` unless the template is empty or ends with a
/// folder separator.
#[must_use]
pub fn insert_variable(template: &str, name: &str) -> String {
    let token = format!("{{{{{name}}}}}");
    if template.is_empty() || template.ends_with('/') {
        format!("{template}{token}")
    } else {
        format!("{template}_{token}")
    }
}
