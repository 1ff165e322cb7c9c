//! Context snapshot construction
//!
//! Turns host state into an immutable [`RenderContext`]. Building never
//! fails: missing values fall back to documented placeholders.

use std::path::Path;

use rendernames_domain::{
    FramePadding, FrameRange, HostState, RenderContext, RenderEngine, RenderSamples,
};

use crate::ports::Clock;

/// TAA sample count EEVEE uses when the host does not report one.
const EEVEE_DEFAULT_SAMPLES: u32 = 64;

/// Builds a fresh context snapshot per resolution request.
#[derive(Debug, Clone)]
pub struct ContextBuilder<C> {
    clock: C,
}

impl<C: Clock> ContextBuilder<C> {
    /// Creates a builder reading wall-clock time from `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Takes a snapshot of the host state.
    #[must_use]
    pub fn build(&self, host: &HostState, frame_padding: FramePadding) -> RenderContext {
        let range = host.frame_range.unwrap_or(FrameRange::MINIMAL);

        RenderContext {
            scene_name: host.scene_name.clone(),
            blend_file_name: blend_file_name(host.blend_file_path.as_deref()),
            camera_name: host.active_camera.clone(),
            captured_at: self.clock.now(),
            width: host.resolution_x,
            height: host.resolution_y,
            resolution_percent: host.resolution_percentage,
            fps: host.fps,
            format: host.file_format.clone(),
            engine: host.engine.short_name(),
            samples: samples_for(&host.engine, host.samples),
            frame_start: range.start,
            frame_end: range.end,
            frame_current: host.frame_current,
            frame_padding,
        }
    }
}

fn blend_file_name(path: Option<&Path>) -> String {
    path.and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map_or_else(|| RenderContext::UNTITLED.to_string(), str::to_string)
}

const fn samples_for(engine: &RenderEngine, samples: RenderSamples) -> Option<u32> {
    match engine {
        RenderEngine::Cycles => samples.cycles,
        RenderEngine::Eevee | RenderEngine::EeveeNext => match samples.eevee_taa {
            Some(count) => Some(count),
            None => Some(EEVEE_DEFAULT_SAMPLES),
        },
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn builder() -> ContextBuilder<FixedClock> {
        ContextBuilder::new(FixedClock(
            NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        ))
    }

    #[test]
    fn test_unsaved_file_and_no_camera_fall_back() {
        let ctx = builder().build(&HostState::default(), FramePadding::default());
        assert_eq!(ctx.blend_file_name, "untitled");
        assert_eq!(ctx.camera_or_fallback(), "no_camera");
        assert_eq!(ctx.date(), "2025-01-15");
    }

    #[test]
    fn test_saved_file_uses_stem() {
        let host = HostState::new("Shot").with_blend_file("/projects/film.v2.blend");
        let ctx = builder().build(&host, FramePadding::default());
        assert_eq!(ctx.blend_file_name, "film.v2");
    }

    #[test]
    fn test_missing_frame_range_uses_minimal_bounds() {
        let mut host = HostState::default();
        host.frame_range = None;
        let ctx = builder().build(&host, FramePadding::default());
        assert_eq!((ctx.frame_start, ctx.frame_end), (1, 1));
    }

    #[test]
    fn test_samples_follow_engine() {
        let mut host = HostState::default().with_engine(RenderEngine::Cycles);
        host.samples.cycles = Some(256);
        assert_eq!(builder().build(&host, FramePadding::default()).samples, Some(256));

        let host = HostState::default().with_engine(RenderEngine::EeveeNext);
        let ctx = builder().build(&host, FramePadding::default());
        assert_eq!(ctx.samples, Some(64));
        assert_eq!(ctx.engine, "eevee_next");

        let mut host = HostState::default().with_engine(RenderEngine::Eevee);
        host.samples.eevee_taa = Some(16);
        assert_eq!(builder().build(&host, FramePadding::default()).samples, Some(16));

        let host = HostState::default().with_engine(RenderEngine::Workbench);
        let ctx = builder().build(&host, FramePadding::default());
        assert_eq!(ctx.samples, None);
        assert_eq!(ctx.samples_or_fallback(), "n/a");
        assert_eq!(ctx.engine, "workbench");
    }

    #[test]
    fn test_padding_is_carried_not_applied() {
        let host = HostState::default().with_frame_range(7, 12);
        let ctx = builder().build(&host, FramePadding::new(6).unwrap());
        assert_eq!(ctx.frame_start, 7);
        assert_eq!(ctx.pad_frame(ctx.frame_start), "000007");
    }
}
