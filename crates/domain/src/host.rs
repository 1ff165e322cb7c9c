//! Host scene state
//!
//! The host application owns its scene and render settings. The engine only
//! ever sees them through [`HostState`], a plain value the host fills in
//! before each preview or render.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Inclusive frame range of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    /// First frame.
    pub start: i32,
    /// Last frame.
    pub end: i32,
}

impl FrameRange {
    /// The host's minimal frame bounds, used when no range is set.
    pub const MINIMAL: Self = Self { start: 1, end: 1 };

    /// Creates a new frame range.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}

impl Default for FrameRange {
    fn default() -> Self {
        Self::MINIMAL
    }
}

/// Render engine identifier as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderEngine {
    /// Path tracing engine (`CYCLES`).
    Cycles,
    /// Legacy rasterizer (`BLENDER_EEVEE`).
    Eevee,
    /// Rasterizer from host 4.2 on (`BLENDER_EEVEE_NEXT`).
    EeveeNext,
    /// Solid-shading engine (`BLENDER_WORKBENCH`).
    Workbench,
    /// Any engine the engine list does not know about, e.g. a third-party one.
    Other(String),
}

impl RenderEngine {
    /// Parses the host's engine identifier.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "CYCLES" => Self::Cycles,
            "BLENDER_EEVEE" => Self::Eevee,
            "BLENDER_EEVEE_NEXT" => Self::EeveeNext,
            "BLENDER_WORKBENCH" => Self::Workbench,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the host's identifier for this engine.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Cycles => "CYCLES",
            Self::Eevee => "BLENDER_EEVEE",
            Self::EeveeNext => "BLENDER_EEVEE_NEXT",
            Self::Workbench => "BLENDER_WORKBENCH",
            Self::Other(id) => id,
        }
    }

    /// Short display name: lowercase identifier without the `blender_` prefix.
    #[must_use]
    pub fn short_name(&self) -> String {
        let lower = self.identifier().to_lowercase();
        lower.replace("blender_", "")
    }

    /// Returns true for both EEVEE generations.
    #[must_use]
    pub const fn is_eevee(&self) -> bool {
        matches!(self, Self::Eevee | Self::EeveeNext)
    }
}

impl fmt::Display for RenderEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl Serialize for RenderEngine {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for RenderEngine {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        Ok(Self::from_identifier(&identifier))
    }
}

/// Per-engine sample settings exposed by the host.
///
/// Either field is `None` when the host build does not expose it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSamples {
    /// Cycles render samples.
    #[serde(default)]
    pub cycles: Option<u32>,
    /// EEVEE temporal anti-aliasing render samples.
    #[serde(default)]
    pub eevee_taa: Option<u32>,
}

/// Read-only view of the host's scene and render settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    /// Active scene name.
    pub scene_name: String,

    /// Path of the saved project file, `None` while unsaved.
    #[serde(default)]
    pub blend_file_path: Option<PathBuf>,

    /// Name of the active camera object, if any.
    #[serde(default)]
    pub active_camera: Option<String>,

    /// Scene frame range, `None` when the host reports none.
    #[serde(default)]
    pub frame_range: Option<FrameRange>,

    /// Frame the timeline cursor is on.
    #[serde(default = "default_frame_current")]
    pub frame_current: i32,

    /// Frames per second.
    pub fps: u32,

    /// Output width in pixels.
    pub resolution_x: u32,

    /// Output height in pixels.
    pub resolution_y: u32,

    /// Resolution scale in percent.
    pub resolution_percentage: u32,

    /// Output file format identifier (`PNG`, `OPEN_EXR`, ...).
    pub file_format: String,

    /// Active render engine.
    pub engine: RenderEngine,

    /// Sample settings for the engines that have them.
    #[serde(default)]
    pub samples: RenderSamples,

    /// Current render output path setting.
    #[serde(default)]
    pub output_path: String,
}

const fn default_frame_current() -> i32 {
    1
}

impl HostState {
    /// Creates host state for the named scene with factory render settings.
    #[must_use]
    pub fn new(scene_name: impl Into<String>) -> Self {
        Self {
            scene_name: scene_name.into(),
            ..Self::default()
        }
    }

    /// Sets the saved project file path.
    #[must_use]
    pub fn with_blend_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.blend_file_path = Some(path.into());
        self
    }

    /// Sets the active camera.
    #[must_use]
    pub fn with_camera(mut self, camera: impl Into<String>) -> Self {
        self.active_camera = Some(camera.into());
        self
    }

    /// Sets the frame range.
    #[must_use]
    pub const fn with_frame_range(mut self, start: i32, end: i32) -> Self {
        self.frame_range = Some(FrameRange::new(start, end));
        self
    }

    /// Sets the render engine.
    #[must_use]
    pub fn with_engine(mut self, engine: RenderEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the current output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Directory containing the project file, `None` while unsaved.
    #[must_use]
    pub fn blend_dir(&self) -> Option<PathBuf> {
        self.blend_file_path
            .as_ref()
            .and_then(|path| path.parent())
            .map(std::path::Path::to_path_buf)
    }
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            scene_name: "Scene".to_string(),
            blend_file_path: None,
            active_camera: None,
            frame_range: Some(FrameRange::new(1, 250)),
            frame_current: default_frame_current(),
            fps: 24,
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 100,
            file_format: "PNG".to_string(),
            engine: RenderEngine::EeveeNext,
            samples: RenderSamples::default(),
            output_path: "/tmp/".to_string(),
        }
    }
}
