//! Interactive polygon annotator.
//!
//! [`PolygonAnnotator`] owns the vertices of the polygon being drawn and the
//! transient drag state for finished polygons. Finished shapes belong to the
//! caller and are addressed by id.
//!
//! Drawing lifecycle:
//! - Idle: no vertices, no boundary.
//! - Drawing: each click that misses the first vertex appends one.
//! - Closed: with at least three vertices, a click on the first vertex emits
//!   a [`DrawnShape`] and returns to Idle.
//!
//! [`PolygonAnnotator::cancel_annotating`] returns to Idle from anywhere.

mod drag;
mod draw;
mod midpoints;


pub use drag::DraggedPoint;
pub use midpoints::get_polygon_points_with_aux;

use polyedit_canvas::{Color, DrawSurface};
use serde::{Deserialize, Serialize};

use crate::config::DrawStyle;
use crate::constants::MIN_POLYGON_VERTICES;
use crate::geometry::{get_polygon_boundaries, is_intersecting_point};
use crate::model::{BoundaryRect, DrawnPoint, DrawnShape, Point, Polygon, ShapeId, ShapeKind};

/// Canvas dimensions in pixels. Shapes are kept inside `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Polygon drawing and editing controller.
///
/// `S` is the drawing surface. Without one (`None`), clicks are ignored and
/// draw helpers do nothing; the remaining operations are pure state updates.
#[derive(Debug)]
pub struct PolygonAnnotator<S> {
    canvas: CanvasSize,
    surface: Option<S>,
    style: DrawStyle,

    curr_polygon_points: Vec<Point>,
    boundary_rect: Option<BoundaryRect>,

    dragged_point: Option<DraggedPoint>,
    dragged_shape: Option<ShapeId>,

    /// `None` once every id up to `ShapeId::MAX` has been handed out.
    next_id: Option<ShapeId>,
}

impl<S: DrawSurface> PolygonAnnotator<S> {
    /// Create an annotator with the default draw style.
    pub fn new(canvas: CanvasSize, surface: Option<S>) -> Self {
        Self::with_style(canvas, surface, DrawStyle::default())
    }

    pub fn with_style(canvas: CanvasSize, surface: Option<S>, style: DrawStyle) -> Self {
        Self {
            canvas,
            surface,
            style,
            curr_polygon_points: Vec::new(),
            boundary_rect: None,
            dragged_point: None,
            dragged_shape: None,
            next_id: Some(1),
        }
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Id that the next finished polygon will receive.
    pub fn set_next_id(&mut self, id: ShapeId) {
        self.next_id = Some(id);
    }

    /// Vertices of the polygon being drawn.
    pub fn current_points(&self) -> &[Point] {
        &self.curr_polygon_points
    }

    /// Boundary of the polygon being drawn, `None` while idle.
    pub fn current_boundary(&self) -> Option<BoundaryRect> {
        self.boundary_rect
    }

    pub fn is_drawing(&self) -> bool {
        !self.curr_polygon_points.is_empty()
    }

    /// Hit radius for vertex picking: twice the stroke width, or the
    /// configured default when there is no surface.
    fn hit_radius(&self) -> f32 {
        self.surface
            .as_ref()
            .map_or(self.style.arc_radius, |s| s.line_width() * 2.0)
    }

    /// Append a vertex and grow the boundary to cover it.
    pub fn add_point(&mut self, p: Point) {
        self.curr_polygon_points.push(p);
        match self.boundary_rect.as_mut() {
            Some(rect) => rect.extend(p),
            None => self.boundary_rect = Some(BoundaryRect::from_point(p)),
        }
    }

    /// Drop the last vertex.
    ///
    /// The boundary is rebuilt from scratch because the removed vertex may
    /// have defined one of its edges.
    pub fn remove_last_point(&mut self) {
        if self.curr_polygon_points.pop().is_some() {
            log::debug!(
                "Removed last polygon point, {} left",
                self.curr_polygon_points.len()
            );
        }
        self.boundary_rect = get_polygon_boundaries(&self.curr_polygon_points);
    }

    /// Package the current vertices into a shape and return to Idle.
    ///
    /// Returns `None`, leaving the vertices in place, when fewer than three
    /// have been placed or when no shape id is left to assign.
    pub fn finish_polygon(&mut self, tag: &str) -> Option<DrawnShape> {
        if self.curr_polygon_points.len() < MIN_POLYGON_VERTICES {
            return None;
        }

        let Some(id) = self.next_id else {
            log::warn!("Shape ids exhausted, polygon left open");
            return None;
        };
        self.next_id = id.checked_add(1);

        let vertices = self
            .curr_polygon_points
            .iter()
            .copied()
            .map(DrawnPoint::from)
            .collect();
        let shape = DrawnShape {
            id,
            shape: ShapeKind::Polygon(Polygon::new(vertices)),
            boundary_rect: self.boundary_rect,
            tag: tag.to_string(),
        };

        log::debug!(
            "Finished polygon {} with {} vertices (tag '{}')",
            id,
            self.curr_polygon_points.len(),
            tag
        );

        self.curr_polygon_points.clear();
        self.boundary_rect = None;
        Some(shape)
    }

    /// Whether `(x, y)` lands on the first vertex of the polygon being drawn.
    pub fn is_intersecting_first_point(&self, x: f32, y: f32) -> bool {
        self.curr_polygon_points
            .first()
            .is_some_and(|first| is_intersecting_point(first, x, y, self.hit_radius()))
    }

    /// Handle a click while the polygon tool is active.
    ///
    /// A click on the first vertex tries to close the polygon; any other
    /// click adds a vertex and strokes the new edge. Without a surface the
    /// click is ignored.
    pub fn on_click(&mut self, x: f32, y: f32, color: Color, tag: &str) -> Option<DrawnShape> {
        if self.surface.is_none() {
            log::trace!("Ignoring click at ({:.1}, {:.1}): no drawing surface", x, y);
            return None;
        }

        if self.is_intersecting_first_point(x, y) {
            if self.curr_polygon_points.len() >= MIN_POLYGON_VERTICES {
                if let (Some(&first), Some(&last)) = (
                    self.curr_polygon_points.first(),
                    self.curr_polygon_points.last(),
                ) {
                    self.draw_line(last, first, color);
                }
            }
            return self.finish_polygon(tag);
        }

        let p = Point::new(x, y);
        if let Some(&last) = self.curr_polygon_points.last() {
            self.draw_line(last, p, color);
        }
        self.add_point(p);
        None
    }

    /// Discard the polygon being drawn.
    pub fn cancel_annotating(&mut self) {
        if !self.curr_polygon_points.is_empty() {
            log::debug!(
                "Cancelled polygon with {} points",
                self.curr_polygon_points.len()
            );
        }
        self.curr_polygon_points.clear();
        self.boundary_rect = None;
    }
}
