//! Render target port
//!
//! The host's writable output-path setting. The render hooks write the
//! computed path here before a render and put the original back afterwards.

/// The host's render output path setting.
pub trait RenderTarget {
    /// Returns the current output path.
    fn output_path(&self) -> String;

    /// Replaces the output path.
    fn set_output_path(&mut self, path: &str);
}

impl RenderTarget for String {
    fn output_path(&self) -> String {
        self.clone()
    }

    fn set_output_path(&mut self, path: &str) {
        path.clone_into(self);
    }
}
