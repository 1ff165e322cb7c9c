//! Variable registry
//!
//! Maps variable names to resolver functions plus display metadata. Names
//! are case-insensitive and stored lowercase. The registry is filled once at
//! startup and only read afterwards.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rendernames_domain::RenderContext;
use thiserror::Error;

use super::builtins::BuiltinVariables;
use super::parser::is_valid_variable_name;

/// A pure function from a context snapshot to the variable's text.
pub type Resolver = Arc<dyn Fn(&RenderContext) -> String + Send + Sync>;

/// Errors raised by registry registration and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A variable with the same name, ignoring case, is already registered.
    #[error("variable `{0}` is already registered")]
    Duplicate(String),

    /// No variable with this name is registered.
    #[error("unknown variable `{0}`")]
    Unknown(String),

    /// The name is empty or contains characters not allowed in a token.
    #[error("invalid variable name `{0}`")]
    InvalidName(String),
}

/// A registered variable: name, description, example and resolver.
#[derive(Clone)]
pub struct VariableDefinition {
    name: String,
    description: String,
    example: String,
    resolver: Resolver,
}

impl VariableDefinition {
    /// Creates a definition. The name is normalized to lowercase.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        resolver: impl Fn(&RenderContext) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            description: description.into(),
            example: String::new(),
            resolver: Arc::new(resolver),
        }
    }

    /// Sets an example value for display.
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Variable name, lowercase.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Example output, may be empty.
    #[must_use]
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Runs the resolver against a context.
    #[must_use]
    pub fn resolve(&self, context: &RenderContext) -> String {
        (self.resolver)(context)
    }
}

impl fmt::Debug for VariableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("example", &self.example)
            .finish_non_exhaustive()
    }
}

/// Display entry returned by [`VariableRegistry::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInfo {
    /// Variable name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Example output.
    pub example: String,
}

/// Ordered table of variables available to templates.
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    variables: IndexMap<String, VariableDefinition>,
}

impl VariableRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in table itself is inconsistent.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for definition in BuiltinVariables::definitions() {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Registers a variable.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidName` for names that cannot appear in a
    /// token and `RegistryError::Duplicate` when the name is already taken,
    /// ignoring case.
    pub fn register(&mut self, definition: VariableDefinition) -> Result<(), RegistryError> {
        if !is_valid_variable_name(&definition.name) {
            return Err(RegistryError::InvalidName(definition.name));
        }
        if self.variables.contains_key(&definition.name) {
            return Err(RegistryError::Duplicate(definition.name));
        }
        self.variables.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Looks up a variable by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Unknown` if no such variable is registered.
    pub fn lookup(&self, name: &str) -> Result<&VariableDefinition, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    /// Looks up a variable by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.get(&name.to_lowercase())
    }

    /// Returns true if the name is registered, ignoring case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Lists variables in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<VariableInfo> {
        self.variables
            .values()
            .map(|d| VariableInfo {
                name: d.name.clone(),
                description: d.description.clone(),
                example: d.example.clone(),
            })
            .collect()
    }

    /// Variable names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Number of registered variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
