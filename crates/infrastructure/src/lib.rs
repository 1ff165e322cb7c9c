//! RenderNames Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: wall clock, `tokio` file system,
//! JSON preset storage, preset import/export and `tracing` setup.

pub mod adapters;
pub mod export;
pub mod import;
pub mod persistence;
pub mod serialization;
pub mod telemetry;

pub use adapters::SystemClock;
pub use export::{ExportPresetError, PresetExporter};
pub use import::{ImportPresetError, PresetImporter};
pub use persistence::{FilePresetRepository, TokioFileSystem, default_presets_dir, safe_file_name};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
pub use telemetry::init_tracing;
