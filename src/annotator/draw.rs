//! Draw helpers. Thin glue over the injected [`DrawSurface`]; every call
//! passes its colour and width explicitly.

use polyedit_canvas::{Color, DrawSurface};

use super::PolygonAnnotator;
use crate::model::{DrawnPoint, Point};

impl<S: DrawSurface> PolygonAnnotator<S> {
    /// Stroke a single segment.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let width = surface.line_width();
        surface.begin_path();
        surface.move_to(from.x, from.y);
        surface.line_to(to.x, to.y);
        surface.stroke(color, width);
    }

    /// Outline and fill a polygon.
    ///
    /// While a vertex is being dragged the auxiliary points are left out of
    /// the outline so the shape follows the real vertices only. Focused
    /// polygons also get a marker on every drawn point.
    pub fn draw_polygon(
        &mut self,
        points: &[DrawnPoint],
        color: Color,
        join_last_point: bool,
        is_focused: bool,
    ) {
        let Some(first) = points.first().copied() else {
            return;
        };
        let fill = color.with_alpha(self.style.polygon_fill_alpha);
        let hide_aux = self.dragged_point.is_some();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let visible: Vec<DrawnPoint> = points
            .iter()
            .filter(|p| !(hide_aux && p.is_aux))
            .copied()
            .collect();

        let width = surface.line_width();
        surface.begin_path();
        surface.move_to(first.x, first.y);
        for p in &visible {
            surface.line_to(p.x, p.y);
        }
        if join_last_point {
            surface.line_to(first.x, first.y);
        }
        surface.stroke(color, width);
        surface.fill(fill);

        if is_focused {
            for p in &visible {
                self.draw_point(p.x, p.y, color, p.is_aux);
            }
        }
    }

    /// Draw the polygon in progress plus a rubber band to the cursor.
    pub fn draw_preview_line(&mut self, x: f32, y: f32, color: Color) {
        let Some(&last) = self.curr_polygon_points.last() else {
            return;
        };
        if self.surface.is_none() {
            return;
        }

        let points: Vec<DrawnPoint> = self
            .curr_polygon_points
            .iter()
            .copied()
            .map(DrawnPoint::from)
            .collect();
        self.draw_polygon(&points, color, false, false);
        self.draw_line(last, Point::new(x, y), color);
    }

    /// Draw a vertex marker. Auxiliary markers are grey with a faded outline.
    pub fn draw_point(&mut self, x: f32, y: f32, color: Color, is_aux: bool) {
        let arc_radius = self.style.arc_radius;
        let aux_alpha = self.style.aux_point_stroke_alpha;
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let width = surface.line_width();
        let radius = arc_radius * width / 2.0;
        let (fill, stroke) = if is_aux {
            (Color::AUX_GRAY, color.with_alpha(aux_alpha))
        } else {
            (Color::WHITE, color)
        };
        surface.circle(x, y, radius, fill, stroke, width);
    }
}
