//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// Serializer produced invalid UTF-8.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to pretty JSON with 2-space indentation and a
/// trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Same as [`to_json_stable`], as bytes for direct file writing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    to_json_stable(value).map(String::into_bytes)
}

/// Deserializes JSON from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(SerializationError::Deserialize)
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rendernames_domain::{OutputConfig, Preset};

    #[test]
    fn test_preset_output_is_stable() {
        let preset = Preset::builtin("by_camera").unwrap();
        let first = to_json_stable(&preset).unwrap();
        let second = to_json_stable(&from_json::<Preset>(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_preset_keys_in_alphabetical_order() {
        let json = to_json_stable(&Preset::builtin("simple").unwrap()).unwrap();
        let positions: Vec<usize> = ["\"name\"", "\"options\"", "\"template\"", "\"version\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let option_keys = [
            "base_path",
            "folder_per_camera",
            "folder_per_date",
            "folder_per_scene",
            "frame_padding",
            "lowercase",
            "sanitize",
            "use_base_path",
            "use_blend_root",
        ];
        let positions: Vec<usize> = option_keys
            .iter()
            .map(|key| json.find(&format!("\"{key}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_two_space_indent_and_trailing_newline() {
        let json = to_json_stable(&OutputConfig::default()).unwrap();
        assert!(json.ends_with("}\n"));
        assert!(json.contains("\n  \"enabled\": true"));
    }

    #[test]
    fn test_from_json_bytes() {
        let config: OutputConfig = from_json_bytes(br#"{"template": "{{camera}}"}"#).unwrap();
        assert_eq!(config.template, "{{camera}}");
        assert!(config.sanitize);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            from_json::<OutputConfig>("{\"template\": }"),
            Err(SerializationError::Deserialize(_))
        ));
    }
}
