//! Headless surface that records what was painted.
//!
//! Used when no real canvas is attached (replays, tests). Each paint call
//! snapshots the current path so the commands can be inspected afterwards.

use crate::{Color, DrawSurface};

/// Default stroke width for a fresh recording surface.
const DEFAULT_LINE_WIDTH: f32 = 1.0;

/// A painted primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// The current path was stroked.
    Stroke {
        /// Path vertices at the time of the stroke
        path: Vec<(f32, f32)>,
        /// Stroke colour
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// The current path was filled.
    Fill {
        /// Path vertices at the time of the fill
        path: Vec<(f32, f32)>,
        /// Fill colour
        color: Color,
    },
    /// A vertex marker.
    Circle {
        /// Centre X
        x: f32,
        /// Centre Y
        y: f32,
        /// Radius in canvas pixels
        radius: f32,
        /// Fill colour
        fill: Color,
        /// Outline colour
        stroke: Color,
    },
}

/// A [`DrawSurface`] that keeps a log of [`DrawCommand`]s.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    line_width: f32,
    path: Vec<(f32, f32)>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::with_line_width(DEFAULT_LINE_WIDTH)
    }

    pub fn with_line_width(line_width: f32) -> Self {
        Self {
            line_width,
            path: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Everything painted so far, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands and the current path.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.path.clear();
    }

    /// The last two vertices of every stroked path, i.e. the segment each
    /// incremental stroke added.
    pub fn stroked_segments(&self) -> Vec<((f32, f32), (f32, f32))> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Stroke { path, .. } if path.len() >= 2 => {
                    Some((path[path.len() - 2], path[path.len() - 1]))
                }
                _ => None,
            })
            .collect()
    }

    /// Number of vertex markers drawn.
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingSurface {
    fn line_width(&self) -> f32 {
        self.line_width
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        // A move starts a new subpath; only the latest one is tracked.
        self.path.clear();
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        // On an empty path a line_to behaves like move_to.
        self.path.push((x, y));
    }

    fn stroke(&mut self, color: Color, width: f32) {
        log::trace!("stroke {} points", self.path.len());
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            color,
            width,
        });
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: self.path.clone(),
            color,
        });
    }

    fn circle(&mut self, x: f32, y: f32, radius: f32, fill: Color, stroke: Color, _width: f32) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            fill,
            stroke,
        });
    }
}
