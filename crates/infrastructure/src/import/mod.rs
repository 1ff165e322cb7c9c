//! Preset import from user-chosen files.

mod preset_importer;

pub use preset_importer::{ImportPresetError, PresetImporter};
