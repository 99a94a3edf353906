pub mod play;
pub mod sketch;

pub use play::PlayMode;
pub use sketch::SketchMode;
