//! RenderNames Application - Template engine, ports and use cases
//!
//! This crate defines the application layer with:
//! - The template resolution engine (registry, parser, resolver)
//! - Sanitization and path assembly
//! - Port traits (interfaces for clock, file system, preset storage, host output)
//! - Use case orchestration for preview, render hooks and presets

pub mod context_builder;
pub mod error;
pub mod path_assembler;
pub mod ports;
pub mod sanitizer;
pub mod use_cases;
pub mod variable_resolver;

pub use context_builder::ContextBuilder;
pub use error::{ApplicationError, ApplicationResult};
pub use path_assembler::PathAssembler;
pub use sanitizer::{sanitize, sanitize_segment};
pub use use_cases::{
    AppliedOutput, OutputPathResolver, PREVIEW_REFRESH_INTERVAL, PresetLibrary, PresetListing,
    PreviewRefresher, RenderHooks, ResolvedOutput,
};
pub use variable_resolver::{
    RegistryError, ResolutionResult, TemplateResolver, VariableDefinition, VariableRegistry,
    resolve,
};
