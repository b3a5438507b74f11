//! polyedit_canvas - drawing surface abstraction for the polygon editor
//!
//! This crate provides the structured [`Color`] type and the [`DrawSurface`]
//! trait that the annotator draws through. Any backend (a 2D canvas, a GPU
//! overlay, a test recorder) can satisfy it.

mod color;
mod recording;
mod surface;

pub use color::{Color, ColorParseError};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::DrawSurface;
