//! Built-in template variables
//!
//! Every resolver here is total: values the host cannot provide resolve to a
//! fixed fallback (`no_camera`, `n/a`, `untitled`) instead of failing.

use rendernames_domain::RenderContext;

use super::registry::VariableDefinition;

/// The variables every registry starts with.
pub struct BuiltinVariables;

impl BuiltinVariables {
    /// Returns the built-in definitions in display order.
    #[must_use]
    pub fn definitions() -> Vec<VariableDefinition> {
        vec![
            // Scene & project
            VariableDefinition::new("scene", "Current scene name", |ctx| ctx.scene_name.clone())
                .with_example("Scene"),
            VariableDefinition::new("blend_file", "Project file name without extension", |ctx| {
                ctx.blend_file_name.clone()
            })
            .with_example("untitled"),
            // Frames
            VariableDefinition::new(
                "frame",
                "First frame of range, padded (the host appends frame numbers itself)",
                |ctx| ctx.pad_frame(ctx.frame_start),
            )
            .with_example("0001"),
            VariableDefinition::new("frame_start", "First frame of range, padded", |ctx| {
                ctx.pad_frame(ctx.frame_start)
            })
            .with_example("0001"),
            VariableDefinition::new("frame_end", "Last frame of range, padded", |ctx| {
                ctx.pad_frame(ctx.frame_end)
            })
            .with_example("0250"),
            VariableDefinition::new("frame_current", "Current frame, padded", |ctx| {
                ctx.pad_frame(ctx.frame_current)
            })
            .with_example("0042"),
            VariableDefinition::new("frame_range", "Frame range as start-end, unpadded", |ctx| {
                format!("{}-{}", ctx.frame_start, ctx.frame_end)
            })
            .with_example("1-250"),
            // Date & time
            VariableDefinition::new("date", "Current date (YYYY-MM-DD)", RenderContext::date)
                .with_example("2025-01-15"),
            VariableDefinition::new("time", "Current time (HH-MM-SS)", RenderContext::time)
                .with_example("14-30-00"),
            VariableDefinition::new("datetime", "Date and time combined", RenderContext::datetime)
                .with_example("2025-01-15_14-30-00"),
            VariableDefinition::new("year", "Current year", |ctx| {
                ctx.captured_at.format("%Y").to_string()
            })
            .with_example("2025"),
            VariableDefinition::new("month", "Current month", |ctx| {
                ctx.captured_at.format("%m").to_string()
            })
            .with_example("01"),
            VariableDefinition::new("day", "Current day", |ctx| {
                ctx.captured_at.format("%d").to_string()
            })
            .with_example("15"),
            // Camera
            VariableDefinition::new("camera", "Active camera name", |ctx| {
                ctx.camera_or_fallback().to_string()
            })
            .with_example("Camera"),
            // Resolution
            VariableDefinition::new("resolution", "Resolution (WxH)", |ctx| {
                format!("{}x{}", ctx.width, ctx.height)
            })
            .with_example("1920x1080"),
            VariableDefinition::new("width", "Resolution width", |ctx| ctx.width.to_string())
                .with_example("1920"),
            VariableDefinition::new("height", "Resolution height", |ctx| ctx.height.to_string())
                .with_example("1080"),
            VariableDefinition::new("percent", "Resolution percentage", |ctx| {
                ctx.resolution_percent.to_string()
            })
            .with_example("100"),
            // Render settings
            VariableDefinition::new("fps", "Frames per second", |ctx| ctx.fps.to_string())
                .with_example("24"),
            VariableDefinition::new("format", "Output format (png, jpeg, ...)", |ctx| {
                ctx.format.to_lowercase()
            })
            .with_example("png"),
            VariableDefinition::new("engine", "Render engine (cycles, eevee, ...)", |ctx| {
                ctx.engine.clone()
            })
            .with_example("cycles"),
            VariableDefinition::new("samples", "Render samples", RenderContext::samples_or_fallback)
                .with_example("128"),
        ]
    }
}
