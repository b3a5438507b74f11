//! Vertex insertion and removal through auxiliary midpoints.

use polyedit_canvas::DrawSurface;

use super::PolygonAnnotator;
use crate::geometry::is_intersecting_point;
use crate::model::DrawnPoint;

/// Interleave an auxiliary midpoint after every real vertex, including the
/// closing edge from the last vertex back to the first.
///
/// Auxiliary points already in `points` are dropped first, so the result can
/// always be regenerated from a previous result.
pub fn get_polygon_points_with_aux(points: &[DrawnPoint]) -> Vec<DrawnPoint> {
    let real: Vec<DrawnPoint> = points.iter().filter(|p| !p.is_aux).copied().collect();
    let n = real.len();

    let mut items = Vec::with_capacity(n * 2);
    for (i, p) in real.iter().enumerate() {
        let next = &real[(i + 1) % n];
        let mid = p.point().midpoint(&next.point());
        items.push(*p);
        items.push(DrawnPoint::aux(mid.x, mid.y));
    }
    items
}

impl<S: DrawSurface> PolygonAnnotator<S> {
    /// Promote the auxiliary point under `(x, y)` to a real vertex.
    ///
    /// Only the first item under the pointer is considered. Returns true if it
    /// was auxiliary and has been promoted.
    pub fn try_to_add_aux_point(&self, x: f32, y: f32, items: &mut [DrawnPoint]) -> bool {
        let radius = self.hit_radius();
        match items
            .iter_mut()
            .find(|p| is_intersecting_point(&**p, x, y, radius))
        {
            Some(p) if p.is_aux => {
                p.is_aux = false;
                log::debug!("Promoted midpoint ({:.1}, {:.1}) to vertex", p.x, p.y);
                true
            }
            _ => false,
        }
    }

    /// Copy of `items` without any point under `(x, y)`.
    pub fn try_to_remove_point(&self, x: f32, y: f32, items: &[DrawnPoint]) -> Vec<DrawnPoint> {
        let radius = self.hit_radius();
        let kept: Vec<DrawnPoint> = items
            .iter()
            .filter(|p| !is_intersecting_point(*p, x, y, radius))
            .copied()
            .collect();
        if kept.len() != items.len() {
            log::debug!("Removed {} point(s)", items.len() - kept.len());
        }
        kept
    }
}
