//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the engine and the host or the
//! operating system. Each port is a trait implemented by adapters in the
//! infrastructure layer or by the host itself.

mod clock;
mod file_system;
mod preset_repository;
mod render_target;

pub use clock::{Clock, FixedClock};
pub use file_system::{FileSystem, FileSystemError};
pub use preset_repository::{PresetRepository, PresetRepositoryError};
pub use render_target::RenderTarget;
