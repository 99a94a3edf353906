pub mod handler;

pub use handler::{sketch_command, InputHandler, KeyAction, SketchCommand};
