//! Dragging finished polygons and their vertices.

use polyedit_canvas::DrawSurface;

use super::{CanvasSize, PolygonAnnotator};
use crate::geometry::{is_intersecting_point, CursorHint};
use crate::model::{DrawnShape, Point, ShapeId, ShapeLookup};

/// The vertex grabbed by the pointer, addressed by its index in the dragged
/// shape's vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggedPoint {
    pub index: usize,
    /// Whether the vertex was an auxiliary midpoint when grabbed.
    pub is_aux: bool,
}

impl<S: DrawSurface> PolygonAnnotator<S> {
    /// Start a drag on `shape`.
    ///
    /// Grabs the first vertex under the pointer if there is one; otherwise the
    /// whole shape is grabbed for translation. Non-polygon shapes are ignored.
    pub fn on_mouse_down(&mut self, x: f32, y: f32, shape: &DrawnShape) {
        let Some(vertices) = shape.polygon_vertices() else {
            return;
        };

        let radius = self.hit_radius();
        self.dragged_point = vertices
            .iter()
            .position(|p| is_intersecting_point(p, x, y, radius))
            .map(|index| DraggedPoint {
                index,
                is_aux: vertices[index].is_aux,
            });
        self.dragged_shape = Some(shape.id);

        match self.dragged_point {
            Some(point) => log::debug!("Grabbed vertex {} of shape {}", point.index, shape.id),
            None => log::debug!("Grabbed shape {}", shape.id),
        }
    }

    /// Snap the grabbed vertex to `(x, y)`.
    pub fn move_dragged_point<L>(&mut self, x: f32, y: f32, shapes: &mut L)
    where
        L: ShapeLookup + ?Sized,
    {
        let (Some(id), Some(point)) = (self.dragged_shape, self.dragged_point) else {
            return;
        };

        match shapes.shape_mut(id) {
            Some(shape) => {
                if shape.update_vertex(point.index, Point::new(x, y)) {
                    log::trace!("Vertex {} of shape {} -> ({:.1}, {:.1})", point.index, id, x, y);
                } else {
                    log::warn!("Shape {} has no vertex {}", id, point.index);
                }
            }
            None => log::warn!("Dragged shape {} is no longer available", id),
        }
    }

    /// Translate `shape` by `(dx, dy)` without letting it leave the canvas.
    ///
    /// On each axis the move is shortened so the boundary edge stops exactly
    /// at the canvas edge. Shapes without a polygon or boundary are ignored.
    pub fn move_shape(&self, dx: f32, dy: f32, shape: &mut DrawnShape) {
        let Some(mut rect) = shape.boundary_rect else {
            return;
        };
        if shape.shape.as_polygon().is_none() {
            return;
        }

        let CanvasSize { width, height } = self.canvas;
        let move_x = if rect.x1 + dx < 0.0 {
            -rect.x1
        } else if rect.x2 + dx > width {
            width - rect.x2
        } else {
            dx
        };
        let move_y = if rect.y1 + dy < 0.0 {
            -rect.y1
        } else if rect.y2 + dy > height {
            height - rect.y2
        } else {
            dy
        };

        if move_x == 0.0 && move_y == 0.0 {
            return;
        }

        rect.translate(move_x, move_y);
        shape.boundary_rect = Some(rect);

        if let Some(poly) = shape.shape.as_polygon_mut() {
            for v in &mut poly.vertices {
                v.x += move_x;
                v.y += move_y;
            }
        }
        log::trace!("Moved shape {} by ({:.1}, {:.1})", shape.id, move_x, move_y);
    }

    /// End the current drag.
    ///
    /// If a single vertex was dragged the shape's boundary is rebuilt, since
    /// moving one vertex can shrink it as well as grow it.
    pub fn reset_dragging<L>(&mut self, shapes: &mut L)
    where
        L: ShapeLookup + ?Sized,
    {
        if let (Some(id), Some(_)) = (self.dragged_shape, self.dragged_point) {
            if let Some(shape) = shapes.shape_mut(id) {
                shape.refresh_boundaries();
                log::debug!("Refreshed boundary of shape {} after vertex drag", id);
            }
        }

        self.dragged_point = None;
        self.dragged_shape = None;
    }

    /// Whether a drag is in progress. The event layer uses this to suppress
    /// other interactions.
    pub fn is_moved_or_resized(&self) -> bool {
        self.dragged_point.is_some() || self.dragged_shape.is_some()
    }

    pub fn dragged_point(&self) -> Option<DraggedPoint> {
        self.dragged_point
    }

    pub fn dragged_shape_id(&self) -> Option<ShapeId> {
        self.dragged_shape
    }

    /// Cursor for the current drag.
    ///
    /// Reads the aux flag recorded by [`Self::on_mouse_down`]; promoting the
    /// grabbed midpoint afterwards does not change the hint until the next
    /// grab.
    pub fn cursor_hint(&self) -> CursorHint {
        match self.dragged_point {
            Some(point) if point.is_aux => CursorHint::Pointer,
            Some(_) => CursorHint::Move,
            None => CursorHint::None,
        }
    }
}
