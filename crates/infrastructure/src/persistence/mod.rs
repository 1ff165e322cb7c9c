//! File-backed persistence adapters.

mod file_system;
mod paths;
mod preset_repository;

pub use file_system::TokioFileSystem;
pub use paths::{default_presets_dir, safe_file_name};
pub use preset_repository::FilePresetRepository;
