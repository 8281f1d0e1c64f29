//! Rendering contract and default terminal renderer binding.
//!
//! `RenderSink` is the output interface consumed by orchestration code.
//! `Renderer` remains the default terminal implementation, but consumers and
//! tests can substitute a recording sink without touching stdout.

pub use crate::tui::Renderer;

/// Injectable rendering interface used by orchestration code.
pub trait RenderSink: Send + Sync {
    /// Render a bordered header box.
    fn header(&self, text: &str);
    /// Render a closing banner.
    fn footer(&self, text: &str);
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render a successful operation result.
    fn result(&self, operation: &str, value: f64);
    /// Render a failed operation with its error message.
    fn error(&self, operation: &str, message: &str);
    /// Render a bare success message.
    fn success(&self, message: &str);
    /// Render a bare warning message.
    fn warning(&self, message: &str);
    /// Render a bare info message.
    fn info(&self, message: &str);
}

impl RenderSink for Renderer {
    fn header(&self, text: &str) {
        self.header(text);
    }

    fn footer(&self, text: &str) {
        self.footer(text);
    }

    fn section(&self, title: &str) {
        self.section(title);
    }

    fn result(&self, operation: &str, value: f64) {
        self.result(operation, value);
    }

    fn error(&self, operation: &str, message: &str) {
        self.error(operation, message);
    }

    fn success(&self, message: &str) {
        self.success(message);
    }

    fn warning(&self, message: &str) {
        self.warning(message);
    }

    fn info(&self, message: &str) {
        self.info(message);
    }
}
