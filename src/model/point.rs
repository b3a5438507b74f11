//! Point and bounding-box primitives in canvas pixel space.

use serde::{Deserialize, Serialize};

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A polygon vertex as drawn on screen.
///
/// Auxiliary points are synthetic edge midpoints offered as click targets.
/// They only become real vertices once activated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawnPoint {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_aux: bool,
}

impl DrawnPoint {
    /// A real vertex.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            is_aux: false,
        }
    }

    /// An auxiliary midpoint.
    pub fn aux(x: f32, y: f32) -> Self {
        Self { x, y, is_aux: true }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for DrawnPoint {
    fn from(p: Point) -> Self {
        DrawnPoint::new(p.x, p.y)
    }
}

/// Anything with canvas coordinates. Lets the geometry functions accept both
/// plain and drawn points.
pub trait HasPosition {
    fn position(&self) -> Point;
}

impl HasPosition for Point {
    #[inline]
    fn position(&self) -> Point {
        *self
    }
}

impl HasPosition for DrawnPoint {
    #[inline]
    fn position(&self) -> Point {
        self.point()
    }
}

/// Axis-aligned bounding box stored as its two extreme corners.
///
/// Invariant for a polygon's box: `x1 <= x2` and `y1 <= y2`, tight around
/// every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundaryRect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Degenerate box around a single point.
    pub fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Grow the box to cover `p`. Each bound is only touched if `p` is
    /// outside it.
    pub fn extend(&mut self, p: Point) {
        if p.x < self.x1 {
            self.x1 = p.x;
        }
        if p.x > self.x2 {
            self.x2 = p.x;
        }
        if p.y < self.y1 {
            self.y1 = p.y;
        }
        if p.y > self.y2 {
            self.y2 = p.y;
        }
    }

    /// Shift both edges on each axis.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Inclusive containment check.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.x1 && p.x <= self.x2 && p.y >= self.y1 && p.y <= self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let m = Point::new(0.0, 0.0).midpoint(&Point::new(10.0, 4.0));
        assert_eq!(m, Point::new(5.0, 2.0));
    }

    #[test]
    fn test_extend_only_moves_exceeded_bounds() {
        let mut rect = BoundaryRect::from_point(Point::new(5.0, 5.0));
        rect.extend(Point::new(10.0, 3.0));
        assert_eq!(rect, BoundaryRect::new(5.0, 3.0, 10.0, 5.0));

        // Inside: untouched
        rect.extend(Point::new(7.0, 4.0));
        assert_eq!(rect, BoundaryRect::new(5.0, 3.0, 10.0, 5.0));
    }

    #[test]
    fn test_translate_and_size() {
        let mut rect = BoundaryRect::new(1.0, 2.0, 11.0, 22.0);
        rect.translate(4.0, -2.0);
        assert_eq!(rect, BoundaryRect::new(5.0, 0.0, 15.0, 20.0));
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 20.0);
        assert!(rect.contains(&Point::new(5.0, 20.0)));
        assert!(!rect.contains(&Point::new(4.9, 10.0)));
    }

    #[test]
    fn test_drawn_point_serde_omits_real_flag() {
        let json = serde_json::to_string(&DrawnPoint::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);

        let aux: DrawnPoint = serde_json::from_str(r#"{"x":1.0,"y":2.0,"is_aux":true}"#).unwrap();
        assert!(aux.is_aux);
        let real: DrawnPoint = serde_json::from_str(r#"{"x":1.0,"y":2.0}"#).unwrap();
        assert!(!real.is_aux);
    }
}
