//! Application use cases (preview, render hooks and preset orchestration).

mod output_path;
mod presets;
mod preview_refresh;
mod render_hooks;

pub use output_path::{OutputPathResolver, ResolvedOutput, base_path_for};
pub use presets::{PresetLibrary, PresetListing};
pub use preview_refresh::{PREVIEW_REFRESH_INTERVAL, PreviewRefresher};
pub use render_hooks::{AppliedOutput, RenderHooks};
