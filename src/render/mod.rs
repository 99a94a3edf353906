pub mod renderer;
pub mod sketch;

pub use renderer::Renderer;
pub use sketch::SketchRenderer;
