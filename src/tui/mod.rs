//! Terminal formatting: layout math, settings, and the concrete renderer.

pub mod layout;
pub mod renderer;
pub mod settings;

pub use renderer::Renderer;
