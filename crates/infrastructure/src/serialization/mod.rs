//! Deterministic JSON for preset files.
//!
//! Preset files are meant to be shared and kept under version control, so
//! output is byte-stable:
//! - Keys in declaration order (domain types declare fields alphabetically)
//! - 2-space indentation
//! - Trailing newline

mod json;

pub use json::*;
