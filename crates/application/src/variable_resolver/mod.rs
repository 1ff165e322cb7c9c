//! Template variable resolution
//!
//! Provides parsing and resolution of `{{variable}}` tokens in path templates.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use rendernames_application::ContextBuilder;
//! use rendernames_application::ports::FixedClock;
//! use rendernames_application::variable_resolver::{VariableRegistry, resolve};
//! use rendernames_domain::{FramePadding, HostState};
//!
//! let registry = VariableRegistry::with_builtins().expect("built-ins register cleanly");
//! let clock = FixedClock(
//!     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(12, 0, 0).unwrap(),
//! );
//! let ctx = ContextBuilder::new(clock).build(&HostState::new("Shot"), FramePadding::default());
//!
//! let result = resolve("{{scene}}/{{date}}_", &ctx, &registry);
//! assert_eq!(result.path, "Shot/2025-01-15_");
//! ```

pub mod builtins;
pub mod engine;
pub mod parser;
pub mod registry;
pub mod validation;

pub use builtins::BuiltinVariables;
pub use engine::{ResolutionResult, TemplateResolver, resolve};
pub use parser::{
    TokenRef, extract_variable_names, has_variables, is_valid_variable_name, parse_tokens,
};
pub use registry::{RegistryError, Resolver, VariableDefinition, VariableInfo, VariableRegistry};
pub use validation::{TemplateIssue, insert_variable, validate_template};
