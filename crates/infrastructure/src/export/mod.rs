//! Preset export to user-chosen files.

mod preset_exporter;

pub use preset_exporter::{ExportPresetError, PresetExporter};
