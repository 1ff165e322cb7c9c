//! Preset document format
//!
//! A preset captures a template and its naming options so they can be shared
//! as a small JSON file:
//!
//! ```json
//! {
//!   "name": "simple",
//!   "options": {
//!     "base_path": "",
//!     "folder_per_camera": false,
//!     "folder_per_date": false,
//!     "folder_per_scene": false,
//!     "frame_padding": 4,
//!     "lowercase": false,
//!     "sanitize": true,
//!     "use_base_path": false,
//!     "use_blend_root": false
//!   },
//!   "template": "{{scene}}_{{frame}}",
//!   "version": 1
//! }
//! ```
//!
//! Fields are declared in alphabetical order so serialized output is stable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{FolderOptions, FramePadding, OutputConfig};

/// Current preset document version.
pub const PRESET_VERSION: u64 = 1;

/// Prefix the host uses to address built-in presets by name.
const BUILTIN_PREFIX: &str = "__builtin__";

/// Errors raised while reading a preset document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// The text is not valid JSON.
    #[error("invalid preset: malformed JSON: {0}")]
    Malformed(String),

    /// A required key is absent.
    #[error("invalid preset: missing key `{key}`")]
    MissingKey {
        /// Dotted path of the key.
        key: String,
    },

    /// A key holds a value of the wrong JSON type.
    #[error("invalid preset: `{key}` expected {expected}, found {found}")]
    WrongType {
        /// Dotted path of the key, empty for the document root.
        key: String,
        /// Expected JSON type.
        expected: &'static str,
        /// Actual JSON type.
        found: &'static str,
    },

    /// Frame padding outside the supported range.
    #[error(
        "invalid preset: `options.frame_padding` {0} outside {min}..={max}",
        min = FramePadding::MIN,
        max = FramePadding::MAX
    )]
    FramePaddingOutOfRange(i64),

    /// The document was written by a newer version.
    #[error("invalid preset: unsupported version {0}")]
    UnsupportedVersion(u64),

    /// The preset name is empty.
    #[error("invalid preset: name cannot be empty")]
    EmptyName,
}

/// Naming and folder options stored in a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetOptions {
    /// Custom base directory.
    #[serde(default)]
    pub base_path: String,
    /// Per-camera subfolder.
    pub folder_per_camera: bool,
    /// Per-date subfolder.
    pub folder_per_date: bool,
    /// Per-scene subfolder.
    pub folder_per_scene: bool,
    /// Frame number padding.
    pub frame_padding: FramePadding,
    /// Lowercase the result.
    pub lowercase: bool,
    /// Sanitize special characters.
    pub sanitize: bool,
    /// Use the custom base directory.
    #[serde(default)]
    pub use_base_path: bool,
    /// Project file name as root folder.
    pub use_blend_root: bool,
}

impl PresetOptions {
    /// Folder toggles described by these options.
    #[must_use]
    pub const fn folders(&self) -> FolderOptions {
        FolderOptions {
            use_blend_root: self.use_blend_root,
            per_date: self.folder_per_date,
            per_scene: self.folder_per_scene,
            per_camera: self.folder_per_camera,
        }
    }
}

/// A named template with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name.
    pub name: String,
    /// Naming and folder options.
    pub options: PresetOptions,
    /// Path template.
    pub template: String,
    /// Document version.
    #[serde(default = "default_version")]
    pub version: u64,
}

const fn default_version() -> u64 {
    PRESET_VERSION
}

/// How a preset is addressed: shipped with the engine or stored by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PresetRef {
    /// A built-in preset, by name.
    Builtin(String),
    /// A user preset, by name.
    User(String),
}

impl PresetRef {
    /// Parses the host's encoding, where built-ins carry a `__builtin__` prefix.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        reference.strip_prefix(BUILTIN_PREFIX).map_or_else(
            || Self::User(reference.to_string()),
            |name| Self::Builtin(name.to_string()),
        )
    }

    /// The host's encoding of this reference.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Builtin(name) => format!("{BUILTIN_PREFIX}{name}"),
            Self::User(name) => name.clone(),
        }
    }

    /// The preset name without prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(name) | Self::User(name) => name,
        }
    }
}

impl Preset {
    /// Captures the current configuration as a preset.
    #[must_use]
    pub fn from_config(name: impl Into<String>, config: &OutputConfig) -> Self {
        Self {
            name: name.into(),
            options: PresetOptions {
                base_path: config.base_path.clone(),
                folder_per_camera: config.folders.per_camera,
                folder_per_date: config.folders.per_date,
                folder_per_scene: config.folders.per_scene,
                frame_padding: config.frame_padding,
                lowercase: config.lowercase,
                sanitize: config.sanitize,
                use_base_path: config.use_base_path,
                use_blend_root: config.folders.use_blend_root,
            },
            template: config.template.clone(),
            version: PRESET_VERSION,
        }
    }

    /// Writes this preset's settings into a configuration.
    ///
    /// The master toggle is left alone. An empty template does not replace
    /// the current one.
    pub fn apply_to(&self, config: &mut OutputConfig) {
        config.folders = self.options.folders();
        config.use_base_path = self.options.use_base_path;
        config.base_path.clone_from(&self.options.base_path);
        config.sanitize = self.options.sanitize;
        config.lowercase = self.options.lowercase;
        config.frame_padding = self.options.frame_padding;
        if !self.template.is_empty() {
            config.template.clone_from(&self.template);
        }
    }

    /// Returns a copy with a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Parses and validates a preset document.
    ///
    /// # Errors
    ///
    /// Returns a `PresetError` naming the first offending key.
    pub fn from_json_str(json: &str) -> Result<Self, PresetError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| PresetError::Malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Validates a parsed JSON document and builds the preset.
    ///
    /// # Errors
    ///
    /// Returns a `PresetError` naming the first offending key.
    pub fn from_value(value: &Value) -> Result<Self, PresetError> {
        let root = Fields::root(value)?;

        let version = root.optional_u64("version")?.unwrap_or(PRESET_VERSION);
        if version > PRESET_VERSION {
            return Err(PresetError::UnsupportedVersion(version));
        }

        let name = root.required_str("name")?;
        if name.trim().is_empty() {
            return Err(PresetError::EmptyName);
        }
        let template = root.required_str("template")?;

        let options = root.required_object("options")?;
        let padding = options.required_i64("frame_padding")?;
        let frame_padding =
            FramePadding::new(padding).map_err(|_| PresetError::FramePaddingOutOfRange(padding))?;

        Ok(Self {
            name: name.to_string(),
            options: PresetOptions {
                base_path: options.optional_str("base_path")?.unwrap_or_default().to_string(),
                folder_per_camera: options.required_bool("folder_per_camera")?,
                folder_per_date: options.required_bool("folder_per_date")?,
                folder_per_scene: options.required_bool("folder_per_scene")?,
                frame_padding,
                lowercase: options.required_bool("lowercase")?,
                sanitize: options.required_bool("sanitize")?,
                use_base_path: options.optional_bool("use_base_path")?.unwrap_or(false),
                use_blend_root: options.required_bool("use_blend_root")?,
            },
            template: template.to_string(),
            version,
        })
    }

    /// Looks up a built-in preset by name.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        Self::builtins().into_iter().find(|p| p.name == name)
    }

    /// The presets shipped with the engine.
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        vec![
            builtin("simple", "{{scene}}_{{frame}}", 4, [false, false, false, false]),
            builtin(
                "professional",
                "{{blend_file}}/{{date}}/{{scene}}_{{camera}}/{{frame}}",
                4,
                [true, true, true, true],
            ),
            builtin(
                "archival",
                "{{datetime}}/{{blend_file}}_{{scene}}_{{frame}}",
                5,
                [false, true, false, false],
            ),
            builtin(
                "by_camera",
                "{{camera}}/{{scene}}_{{frame}}",
                4,
                [false, false, false, true],
            ),
            builtin("minimal", "{{scene}}_{{frame}}", 4, [false, false, false, false]),
        ]
    }
}

/// Builds a built-in preset. `folders` is `[blend_root, date, scene, camera]`.
fn builtin(name: &str, template: &str, padding: i64, folders: [bool; 4]) -> Preset {
    let [use_blend_root, per_date, per_scene, per_camera] = folders;
    Preset {
        name: name.to_string(),
        options: PresetOptions {
            base_path: String::new(),
            folder_per_camera: per_camera,
            folder_per_date: per_date,
            folder_per_scene: per_scene,
            frame_padding: FramePadding::clamped(padding),
            lowercase: false,
            sanitize: true,
            use_base_path: false,
            use_blend_root,
        },
        template: template.to_string(),
        version: PRESET_VERSION,
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Typed accessors over one JSON object, reporting keys by dotted path.
struct Fields<'a> {
    prefix: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn root(value: &'a Value) -> Result<Self, PresetError> {
        match value {
            Value::Object(map) => Ok(Self {
                prefix: String::new(),
                map,
            }),
            other => Err(PresetError::WrongType {
                key: String::new(),
                expected: "object",
                found: json_type(other),
            }),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.prefix)
        }
    }

    fn required(&self, key: &str) -> Result<&'a Value, PresetError> {
        self.map
            .get(key)
            .ok_or_else(|| PresetError::MissingKey { key: self.path(key) })
    }

    fn wrong_type(&self, key: &str, expected: &'static str, value: &Value) -> PresetError {
        PresetError::WrongType {
            key: self.path(key),
            expected,
            found: json_type(value),
        }
    }

    fn required_str(&self, key: &str) -> Result<&'a str, PresetError> {
        let value = self.required(key)?;
        value
            .as_str()
            .ok_or_else(|| self.wrong_type(key, "string", value))
    }

    fn optional_str(&self, key: &str) -> Result<Option<&'a str>, PresetError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.wrong_type(key, "string", value)),
        }
    }

    fn required_bool(&self, key: &str) -> Result<bool, PresetError> {
        let value = self.required(key)?;
        value
            .as_bool()
            .ok_or_else(|| self.wrong_type(key, "boolean", value))
    }

    fn optional_bool(&self, key: &str) -> Result<Option<bool>, PresetError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| self.wrong_type(key, "boolean", value)),
        }
    }

    fn required_i64(&self, key: &str) -> Result<i64, PresetError> {
        let value = self.required(key)?;
        value
            .as_i64()
            .ok_or_else(|| self.wrong_type(key, "integer", value))
    }

    fn optional_u64(&self, key: &str) -> Result<Option<u64>, PresetError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .map(Some)
                .ok_or_else(|| self.wrong_type(key, "unsigned integer", value)),
        }
    }

    fn required_object(&self, key: &str) -> Result<Self, PresetError> {
        let value = self.required(key)?;
        value.as_object().map_or_else(
            || Err(self.wrong_type(key, "object", value)),
            |map| {
                Ok(Fields {
                    prefix: self.path(key),
                    map,
                })
            },
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn valid_document() -> Value {
        json!({
            "name": "studio",
            "template": "{{scene}}/{{camera}}_",
            "options": {
                "sanitize": true,
                "lowercase": true,
                "frame_padding": 5,
                "use_blend_root": false,
                "folder_per_date": true,
                "folder_per_scene": false,
                "folder_per_camera": true
            }
        })
    }

    #[test]
    fn test_parses_valid_document() {
        let preset = Preset::from_value(&valid_document()).unwrap();
        assert_eq!(preset.name, "studio");
        assert_eq!(preset.template, "{{scene}}/{{camera}}_");
        assert_eq!(preset.version, PRESET_VERSION);
        assert_eq!(preset.options.frame_padding.digits(), 5);
        assert!(preset.options.lowercase);
        assert!(!preset.options.use_base_path);
        assert_eq!(preset.options.base_path, "");
        assert_eq!(
            preset.options.folders(),
            FolderOptions {
                use_blend_root: false,
                per_date: true,
                per_scene: false,
                per_camera: true,
            }
        );
    }

    #[test]
    fn test_missing_top_level_key() {
        let mut doc = valid_document();
        doc.as_object_mut().unwrap().remove("template");
        assert_eq!(
            Preset::from_value(&doc),
            Err(PresetError::MissingKey {
                key: "template".into()
            })
        );
    }

    #[test]
    fn test_missing_nested_key_reports_dotted_path() {
        let mut doc = valid_document();
        doc["options"].as_object_mut().unwrap().remove("sanitize");
        let err = Preset::from_value(&doc).unwrap_err();
        assert_eq!(err.to_string(), "invalid preset: missing key `options.sanitize`");
    }

    #[test]
    fn test_wrong_type_is_described() {
        let mut doc = valid_document();
        doc["options"]["lowercase"] = json!("yes");
        let err = Preset::from_value(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid preset: `options.lowercase` expected boolean, found string"
        );
    }

    #[test]
    fn test_root_must_be_object() {
        let err = Preset::from_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, PresetError::WrongType { expected: "object", found: "array", .. }));
    }

    #[test]
    fn test_padding_out_of_range() {
        let mut doc = valid_document();
        doc["options"]["frame_padding"] = json!(12);
        assert_eq!(
            Preset::from_value(&doc),
            Err(PresetError::FramePaddingOutOfRange(12))
        );
    }

    #[test]
    fn test_rejects_newer_version_and_empty_name() {
        let mut doc = valid_document();
        doc["version"] = json!(2);
        assert_eq!(Preset::from_value(&doc), Err(PresetError::UnsupportedVersion(2)));

        let mut doc = valid_document();
        doc["name"] = json!("  ");
        assert_eq!(Preset::from_value(&doc), Err(PresetError::EmptyName));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Preset::from_json_str("{\"name\": "),
            Err(PresetError::Malformed(_))
        ));
    }

    #[test]
    fn test_serialized_keys_are_alphabetical() {
        let preset = Preset::builtin("simple").unwrap();
        let json = serde_json::to_string(&preset).unwrap();
        let name = json.find("\"name\"").unwrap();
        let options = json.find("\"options\"").unwrap();
        let template = json.find("\"template\"").unwrap();
        let version = json.find("\"version\"").unwrap();
        assert!(name < options && options < template && template < version);
    }

    #[test]
    fn test_config_roundtrip_through_preset() {
        let mut config = OutputConfig::with_template("{{camera}}/{{frame}}");
        config.lowercase = true;
        config.folders.per_scene = true;
        config.frame_padding = FramePadding::new(6).unwrap();

        let preset = Preset::from_config("mine", &config);
        let mut restored = OutputConfig::default();
        restored.template = String::new();
        preset.apply_to(&mut restored);

        assert_eq!(restored, config);
    }

    #[test]
    fn test_empty_template_does_not_overwrite() {
        let mut preset = Preset::builtin("archival").unwrap();
        preset.template = String::new();
        let mut config = OutputConfig::with_template("{{scene}}");
        preset.apply_to(&mut config);
        assert_eq!(config.template, "{{scene}}");
        assert_eq!(config.frame_padding.digits(), 5);
    }

    #[test]
    fn test_builtins_are_known() {
        let names: Vec<String> = Preset::builtins().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["simple", "professional", "archival", "by_camera", "minimal"]
        );
        assert!(Preset::builtin("missing").is_none());
    }

    #[test]
    fn test_preset_ref_encoding() {
        assert_eq!(
            PresetRef::parse("__builtin__archival"),
            PresetRef::Builtin("archival".into())
        );
        assert_eq!(PresetRef::parse("mine"), PresetRef::User("mine".into()));
        assert_eq!(PresetRef::Builtin("simple".into()).encode(), "__builtin__simple");
        assert_eq!(PresetRef::User("x".into()).name(), "x");
    }
}
