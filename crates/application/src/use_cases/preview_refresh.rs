//! Periodic preview refresh
//!
//! Some variables change without any property edit (date and time, the
//! active camera). The host calls [`PreviewRefresher::tick`] from a timer and
//! redraws only when the preview actually changed.

use std::time::Duration;

use rendernames_domain::{HostState, OutputConfig};

use crate::ports::Clock;

use super::output_path::{OutputPathResolver, ResolvedOutput};

/// Recommended timer interval between ticks.
pub const PREVIEW_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Remembers the last preview shown and reports changes.
#[derive(Debug, Default)]
pub struct PreviewRefresher {
    last: Option<ResolvedOutput>,
}

impl PreviewRefresher {
    /// Creates a refresher with nothing shown yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Re-resolves the preview. Returns the new preview when it differs from
    /// the last one, `None` when nothing changed.
    pub fn tick<C: Clock>(
        &mut self,
        resolver: &OutputPathResolver<C>,
        host: &HostState,
        config: &OutputConfig,
    ) -> Option<&ResolvedOutput> {
        let next = resolver.preview(host, config);
        if self.last.as_ref() == Some(&next) {
            return None;
        }
        self.last = Some(next);
        self.last.as_ref()
    }

    /// The preview last reported.
    #[must_use]
    pub const fn current(&self) -> Option<&ResolvedOutput> {
        self.last.as_ref()
    }

    /// Forgets the last preview so the next tick always reports.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
