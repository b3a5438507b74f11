//! Pure hit-testing and boundary helpers.
//!
//! Nothing here holds state; the annotator and the event layer call these to
//! decide what a pointer position refers to.

use crate::constants::ARC_RADIUS_DEFAULT;
use crate::model::{BoundaryRect, DrawnPoint, HasPosition, Point};

/// Cursor to show for a vertex under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Nothing grabbable.
    #[default]
    None,
    /// An auxiliary midpoint: clicking adds a vertex.
    Pointer,
    /// A real vertex: dragging moves it.
    Move,
}

impl CursorHint {
    /// CSS cursor name, empty for the default cursor.
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorHint::None => "",
            CursorHint::Pointer => "pointer",
            CursorHint::Move => "move",
        }
    }

    pub(crate) fn for_point(point: Option<&DrawnPoint>) -> Self {
        match point {
            Some(p) if p.is_aux => CursorHint::Pointer,
            Some(_) => CursorHint::Move,
            None => CursorHint::None,
        }
    }
}

/// Square hit test around `point` with half-width `2 * radius`.
///
/// Left, right and top edges are inclusive; the bottom edge is exclusive so
/// two regions stacked vertically never both claim the shared row.
pub fn is_intersecting_point(point: &impl HasPosition, x: f32, y: f32, radius: f32) -> bool {
    let Point { x: px, y: py } = point.position();
    let offset = 2.0 * radius;
    x >= px - offset && x <= px + offset && y >= py - offset && y < py + offset
}

/// z-component of `(b - a) x (p - a)`; positive when `p` is left of `a -> b`.
fn cross(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Point-in-polygon test using the nonzero winding rule.
///
/// With `is_focused`, any point within the vertex hit tolerance (scaled by
/// `1 / zoom`) counts as inside, so vertices on the outline can be grabbed.
pub fn is_intersecting_polygon<P: HasPosition>(
    p: Point,
    vertices: &[P],
    is_focused: bool,
    zoom: f32,
) -> bool {
    if is_focused
        && vertices
            .iter()
            .any(|v| is_intersecting_point(v, p.x, p.y, ARC_RADIUS_DEFAULT / zoom))
    {
        return true;
    }

    let n = vertices.len();
    let mut winding_number = 0i32;

    for i in 0..n {
        let a = vertices[i].position();
        let b = vertices[(i + 1) % n].position();

        if a.y <= p.y {
            // Upward crossing with p on the left
            if b.y > p.y && cross(a, b, p) > 0.0 {
                winding_number += 1;
            }
        } else if b.y <= p.y && cross(a, b, p) < 0.0 {
            // Downward crossing with p on the right
            winding_number -= 1;
        }
    }

    winding_number != 0
}

/// Tight axis-aligned box around `vertices`, `None` when there are none.
pub fn get_polygon_boundaries<P: HasPosition>(vertices: &[P]) -> Option<BoundaryRect> {
    let (first, rest) = vertices.split_first()?;
    let mut rect = BoundaryRect::from_point(first.position());
    for v in rest {
        rect.extend(v.position());
    }
    Some(rect)
}

/// Hover cursor for the first point under `(x, y)`.
pub fn get_polygon_point_cursor(points: &[DrawnPoint], x: f32, y: f32, zoom: f32) -> CursorHint {
    let hit = points
        .iter()
        .find(|p| is_intersecting_point(*p, x, y, ARC_RADIUS_DEFAULT / zoom));
    CursorHint::for_point(hit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_point_hit_square_region() {
        let p = Point::new(50.0, 50.0);
        // radius 4 -> half-width 8
        assert!(is_intersecting_point(&p, 50.0, 50.0, 4.0));
        assert!(is_intersecting_point(&p, 42.0, 42.0, 4.0));
        assert!(is_intersecting_point(&p, 58.0, 42.0, 4.0));
        // Corner of the square is inside, unlike a circle of the same width
        assert!(is_intersecting_point(&p, 57.9, 57.9, 4.0));
        assert!(!is_intersecting_point(&p, 58.1, 50.0, 4.0));
        assert!(!is_intersecting_point(&p, 50.0, 41.9, 4.0));
    }

    #[test]
    fn test_point_hit_bottom_edge_exclusive() {
        let p = Point::new(0.0, 0.0);
        assert!(is_intersecting_point(&p, 0.0, -8.0, 4.0));
        assert!(!is_intersecting_point(&p, 0.0, 8.0, 4.0));
        assert!(is_intersecting_point(&p, 8.0, 7.99, 4.0));
        assert!(is_intersecting_point(&p, -8.0, 0.0, 4.0));
    }

    #[test]
    fn test_winding_square() {
        let sq = square();
        assert!(is_intersecting_polygon(Point::new(5.0, 5.0), &sq, false, 1.0));
        assert!(!is_intersecting_polygon(Point::new(15.0, 5.0), &sq, false, 1.0));
    }

    #[test]
    fn test_winding_is_orientation_independent() {
        let mut sq = square();
        sq.reverse();
        assert!(is_intersecting_polygon(Point::new(5.0, 5.0), &sq, false, 1.0));
        assert!(!is_intersecting_polygon(Point::new(-1.0, 5.0), &sq, false, 1.0));
    }

    #[test]
    fn test_winding_concave() {
        // U shape: the notch between the arms is outside
        let u = vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 30.0),
            Point::new(20.0, 30.0),
            Point::new(20.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 30.0),
            Point::new(0.0, 30.0),
        ];
        assert!(is_intersecting_polygon(Point::new(5.0, 20.0), &u, false, 1.0));
        assert!(!is_intersecting_polygon(Point::new(15.0, 20.0), &u, false, 1.0));
    }

    #[test]
    fn test_focused_vertex_short_circuit() {
        let sq = square();
        // Just outside the corner: only the focused test accepts it
        let p = Point::new(-2.0, -2.0);
        assert!(!is_intersecting_polygon(p, &sq, false, 1.0));
        assert!(is_intersecting_polygon(p, &sq, true, 1.0));
    }

    #[test]
    fn test_focused_tolerance_shrinks_with_zoom() {
        let sq = square();
        // Default radius 4 -> half-width 8 at zoom 1, 2 at zoom 4
        let p = Point::new(-5.0, -5.0);
        assert!(is_intersecting_polygon(p, &sq, true, 1.0));
        assert!(!is_intersecting_polygon(p, &sq, true, 4.0));
    }

    #[test]
    fn test_polygon_with_too_few_vertices_is_empty() {
        let empty: Vec<Point> = Vec::new();
        assert!(!is_intersecting_polygon(Point::new(0.0, 0.0), &empty, false, 1.0));
    }

    #[test]
    fn test_boundaries() {
        let pts = vec![
            Point::new(3.0, 7.0),
            Point::new(-1.0, 2.0),
            Point::new(8.0, 9.0),
            Point::new(4.0, -3.0),
        ];
        assert_eq!(
            get_polygon_boundaries(&pts),
            Some(BoundaryRect::new(-1.0, -3.0, 8.0, 9.0))
        );
        assert_eq!(get_polygon_boundaries::<Point>(&[]), None);
    }

    #[test]
    fn test_point_cursor() {
        let pts = vec![DrawnPoint::new(0.0, 0.0), DrawnPoint::aux(50.0, 0.0)];
        assert_eq!(get_polygon_point_cursor(&pts, 1.0, 1.0, 1.0), CursorHint::Move);
        assert_eq!(get_polygon_point_cursor(&pts, 50.0, 1.0, 1.0), CursorHint::Pointer);
        assert_eq!(get_polygon_point_cursor(&pts, 25.0, 25.0, 1.0), CursorHint::None);
        assert_eq!(CursorHint::Pointer.as_str(), "pointer");
        assert_eq!(CursorHint::Move.as_str(), "move");
        assert_eq!(CursorHint::None.as_str(), "");
    }
}
