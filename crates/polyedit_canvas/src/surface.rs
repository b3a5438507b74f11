//! The drawing capability the annotator is given.

use crate::Color;

/// A 2D path-based drawing surface.
///
/// Coordinates are canvas pixels. Style is passed with every call that paints
/// so implementations never depend on state left behind by a previous caller.
/// Calls are executed immediately; the annotator does no batching.
pub trait DrawSurface {
    /// Current stroke width, used to size hit regions and vertex markers.
    fn line_width(&self) -> f32;

    /// Start a new, empty path.
    fn begin_path(&mut self);

    /// Move the pen without drawing.
    fn move_to(&mut self, x: f32, y: f32);

    /// Extend the current path with a straight segment.
    fn line_to(&mut self, x: f32, y: f32);

    /// Stroke the current path.
    fn stroke(&mut self, color: Color, width: f32);

    /// Fill the current path.
    fn fill(&mut self, color: Color);

    /// Draw a filled and outlined circle as its own path.
    fn circle(&mut self, x: f32, y: f32, radius: f32, fill: Color, stroke: Color, width: f32);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn line_width(&self) -> f32 {
        (**self).line_width()
    }

    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y);
    }

    fn stroke(&mut self, color: Color, width: f32) {
        (**self).stroke(color, width);
    }

    fn fill(&mut self, color: Color) {
        (**self).fill(color);
    }

    fn circle(&mut self, x: f32, y: f32, radius: f32, fill: Color, stroke: Color, width: f32) {
        (**self).circle(x, y, radius, fill, stroke, width);
    }
}
