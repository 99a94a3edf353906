//! The turtle model behind sketch mode

pub mod turtle;

pub use turtle::{SketchConfig, Stroke, Turtle};
