//! Storage locations.

use std::path::PathBuf;

/// Directory name under the platform config directory.
const APP_DIR: &str = "rendernames";

/// Default directory for user presets: `<config dir>/rendernames/presets`.
///
/// Falls back to a relative `rendernames/presets` when the platform has no
/// config directory.
#[must_use]
pub fn default_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("presets")
}

/// Turns a preset name into a file stem: `< > : " / \ | ? *` become `_`,
/// surrounding dots and spaces are trimmed.
#[must_use]
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect::<String>()
        .trim_matches(['.', ' '])
        .to_string()
}
