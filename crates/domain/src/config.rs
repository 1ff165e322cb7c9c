//! Output configuration record
//!
//! Defines the settings the host stores per scene and hands to the engine on
//! every preview and render: the template, naming options and folder
//! organization toggles.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of digits frame numbers are zero-padded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct FramePadding(u8);

impl FramePadding {
    /// Smallest supported padding.
    pub const MIN: u8 = 1;
    /// Largest supported padding.
    pub const MAX: u8 = 8;

    /// Creates a padding value, rejecting anything outside `MIN..=MAX`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFramePadding` when out of range.
    pub fn new(digits: i64) -> Result<Self, DomainError> {
        u8::try_from(digits)
            .ok()
            .filter(|d| (Self::MIN..=Self::MAX).contains(d))
            .map(Self)
            .ok_or(DomainError::InvalidFramePadding(digits))
    }

    /// Creates a padding value, saturating at the supported bounds.
    #[must_use]
    pub fn clamped(digits: i64) -> Self {
        let clamped = digits.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MAX))
    }

    /// Number of digits.
    #[must_use]
    pub const fn digits(self) -> usize {
        self.0 as usize
    }

    /// Formats a frame number zero-padded to this width.
    #[must_use]
    pub fn pad(self, frame: i32) -> String {
        format!("{frame:0width$}", width = self.digits())
    }
}

impl Default for FramePadding {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<i64> for FramePadding {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FramePadding> for u8 {
    fn from(padding: FramePadding) -> Self {
        padding.0
    }
}

/// Text normalization settings applied to a resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SanitizationPolicy {
    /// Replace filesystem-illegal characters and tidy underscores.
    pub enabled: bool,
    /// Fold the whole result to lowercase.
    pub lowercase: bool,
    /// Digits used by the padded frame variables.
    pub frame_padding: FramePadding,
}

impl SanitizationPolicy {
    /// Policy that changes nothing.
    #[must_use]
    pub fn passthrough() -> Self {
        Self::default()
    }

    /// Policy with illegal-character cleanup on.
    #[must_use]
    pub fn sanitizing() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Sets lowercase folding.
    #[must_use]
    pub const fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Sets the frame padding.
    #[must_use]
    pub const fn with_frame_padding(mut self, padding: FramePadding) -> Self {
        self.frame_padding = padding;
        self
    }
}

/// Automatic subfolders inserted ahead of the template output.
///
/// Segments are always inserted in the order
/// project file → date → scene → camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FolderOptions {
    /// Use the project file name as the root folder.
    #[serde(default)]
    pub use_blend_root: bool,
    /// Add a folder named after the render date.
    #[serde(default)]
    pub per_date: bool,
    /// Add a folder named after the scene.
    #[serde(default)]
    pub per_scene: bool,
    /// Add a folder named after the active camera.
    #[serde(default)]
    pub per_camera: bool,
}

impl FolderOptions {
    /// Returns true if any toggle is on.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.use_blend_root || self.per_date || self.per_scene || self.per_camera
    }
}

/// The configuration record the host stores and passes to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Master toggle; when off the host's own output path is used untouched.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Path template with `{{variable}}` placeholders.
    #[serde(default = "default_template")]
    pub template: String,

    /// Use `base_path` instead of the directory of the host's output path.
    #[serde(default)]
    pub use_base_path: bool,

    /// Custom base directory.
    #[serde(default)]
    pub base_path: String,

    /// Folder organization toggles.
    #[serde(default = "default_folders")]
    pub folders: FolderOptions,

    /// Replace special characters and spaces with underscores.
    #[serde(default = "default_sanitize")]
    pub sanitize: bool,

    /// Convert the result to lowercase.
    #[serde(default)]
    pub lowercase: bool,

    /// Digits for padded frame numbers.
    #[serde(default)]
    pub frame_padding: FramePadding,
}

const fn default_enabled() -> bool {
    true
}

fn default_template() -> String {
    "{{scene}}_{{frame}}".to_string()
}

const fn default_folders() -> FolderOptions {
    FolderOptions {
        use_blend_root: true,
        per_date: false,
        per_scene: false,
        per_camera: false,
    }
}

const fn default_sanitize() -> bool {
    true
}

impl OutputConfig {
    /// Creates a configuration with default options and the given template.
    #[must_use]
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    /// The sanitization policy these options describe.
    #[must_use]
    pub const fn policy(&self) -> SanitizationPolicy {
        SanitizationPolicy {
            enabled: self.sanitize,
            lowercase: self.lowercase,
            frame_padding: self.frame_padding,
        }
    }

    /// The folder organization toggles.
    #[must_use]
    pub const fn folders(&self) -> FolderOptions {
        self.folders
    }

    /// The custom base path when one is switched on and non-empty.
    #[must_use]
    pub fn custom_base_path(&self) -> Option<&str> {
        let trimmed = self.base_path.trim();
        (self.use_base_path && !trimmed.is_empty()).then_some(trimmed)
    }

    /// Returns true when hooks should act: enabled with a non-empty template.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && !self.template.trim().is_empty()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            template: default_template(),
            use_base_path: false,
            base_path: String::new(),
            folders: default_folders(),
            sanitize: default_sanitize(),
            lowercase: false,
            frame_padding: FramePadding::default(),
        }
    }
}
