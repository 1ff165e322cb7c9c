//! Render context snapshot
//!
//! An immutable value object holding every value a variable resolver may
//! read. A fresh snapshot is built for each resolution request; nothing here
//! queries the host.

use chrono::NaiveDateTime;

use crate::config::FramePadding;

/// Snapshot of scene and render values at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Active scene name.
    pub scene_name: String,
    /// Project file stem, or [`RenderContext::UNTITLED`] while unsaved.
    pub blend_file_name: String,
    /// Active camera name, if any.
    pub camera_name: Option<String>,
    /// Local wall-clock time the snapshot was taken.
    pub captured_at: NaiveDateTime,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Resolution scale in percent.
    pub resolution_percent: u32,
    /// Frames per second.
    pub fps: u32,
    /// Output file format identifier as reported by the host.
    pub format: String,
    /// Short engine name (`cycles`, `eevee_next`, ...).
    pub engine: String,
    /// Render sample count, `None` when the engine has none.
    pub samples: Option<u32>,
    /// First frame of the range.
    pub frame_start: i32,
    /// Last frame of the range.
    pub frame_end: i32,
    /// Current frame.
    pub frame_current: i32,
    /// Width the padded frame variables use.
    pub frame_padding: FramePadding,
}

impl RenderContext {
    /// Project file name used while the file is unsaved.
    pub const UNTITLED: &'static str = "untitled";
    /// Camera name used when the scene has no active camera.
    pub const NO_CAMERA: &'static str = "no_camera";
    /// Value used when a setting does not apply to the engine.
    pub const UNAVAILABLE: &'static str = "n/a";

    /// Date as `YYYY-MM-DD`.
    #[must_use]
    pub fn date(&self) -> String {
        self.captured_at.format("%Y-%m-%d").to_string()
    }

    /// Time as `HH-MM-SS`.
    #[must_use]
    pub fn time(&self) -> String {
        self.captured_at.format("%H-%M-%S").to_string()
    }

    /// Date and time as `YYYY-MM-DD_HH-MM-SS`.
    #[must_use]
    pub fn datetime(&self) -> String {
        self.captured_at.format("%Y-%m-%d_%H-%M-%S").to_string()
    }

    /// Camera name, or [`RenderContext::NO_CAMERA`].
    #[must_use]
    pub fn camera_or_fallback(&self) -> &str {
        self.camera_name.as_deref().unwrap_or(Self::NO_CAMERA)
    }

    /// Sample count as text, or [`RenderContext::UNAVAILABLE`].
    #[must_use]
    pub fn samples_or_fallback(&self) -> String {
        self.samples
            .map_or_else(|| Self::UNAVAILABLE.to_string(), |s| s.to_string())
    }

    /// Zero-pads a frame number to the snapshot's padding.
    #[must_use]
    pub fn pad_frame(&self, frame: i32) -> String {
        self.frame_padding.pad(frame)
    }
}
