//! RenderNames Domain - Core value types
//!
//! This crate defines the domain model for render output path templating:
//! the host's scene state, the immutable context snapshot resolvers read,
//! the output configuration record and the preset document format.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod preset;

pub use config::{FolderOptions, FramePadding, OutputConfig, SanitizationPolicy};
pub use context::RenderContext;
pub use error::{DomainError, DomainResult};
pub use host::{FrameRange, HostState, RenderEngine, RenderSamples};
pub use preset::{Preset, PresetError, PresetOptions, PresetRef};
