//! In-memory collection of finished shapes.
//!
//! The annotator never owns finished shapes. It refers to them by id and
//! resolves that id through [`ShapeLookup`] whenever it needs to edit one.

use crate::geometry::is_intersecting_polygon;
use crate::model::{DrawnShape, Point, ShapeId};

/// Resolve a shape id to a mutable shape.
pub trait ShapeLookup {
    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut DrawnShape>;
}

impl ShapeLookup for DrawnShape {
    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut DrawnShape> {
        (self.id == id).then_some(self)
    }
}

impl ShapeLookup for [DrawnShape] {
    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut DrawnShape> {
        self.iter_mut().find(|s| s.id == id)
    }
}

impl ShapeLookup for Vec<DrawnShape> {
    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut DrawnShape> {
        self.as_mut_slice().shape_mut(id)
    }
}

/// Shapes for a single image, kept in drawing order (last is topmost).
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<DrawnShape>,
    /// Shape whose vertices are currently editable.
    focused_id: Option<ShapeId>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            focused_id: None,
        }
    }

    /// Add a shape, replacing any existing shape with the same id.
    pub fn insert(&mut self, shape: DrawnShape) {
        if let Some(existing) = self.shapes.iter_mut().find(|s| s.id == shape.id) {
            log::debug!("Replacing shape {}", shape.id);
            *existing = shape;
        } else {
            log::debug!("Adding {} shape {} ({})", shape.shape.name(), shape.id, shape.tag);
            self.shapes.push(shape);
        }
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<DrawnShape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        if self.focused_id == Some(id) {
            self.focused_id = None;
        }
        Some(self.shapes.remove(index))
    }

    pub fn get(&self, id: ShapeId) -> Option<&DrawnShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut DrawnShape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawnShape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn focus(&mut self, id: Option<ShapeId>) {
        self.focused_id = id;
    }

    pub fn focused(&self) -> Option<ShapeId> {
        self.focused_id
    }

    /// Topmost polygon under `point`. The focused polygon also answers for
    /// points near its vertices.
    pub fn hit_test(&self, point: Point, zoom: f32) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| {
                s.polygon_vertices().is_some_and(|vertices| {
                    is_intersecting_polygon(point, vertices, self.focused_id == Some(s.id), zoom)
                })
            })
            .map(|s| s.id)
    }

    pub fn into_shapes(self) -> Vec<DrawnShape> {
        self.shapes
    }
}

impl ShapeLookup for ShapeStore {
    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut DrawnShape> {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundaryRect, DrawnPoint};

    fn square(id: ShapeId, origin: f32) -> DrawnShape {
        DrawnShape::polygon(
            id,
            vec![
                DrawnPoint::new(origin, origin),
                DrawnPoint::new(origin + 10.0, origin),
                DrawnPoint::new(origin + 10.0, origin + 10.0),
                DrawnPoint::new(origin, origin + 10.0),
            ],
            "square",
        )
    }

    #[test]
    fn test_insert_remove() {
        let mut store = ShapeStore::new();
        store.insert(square(1, 0.0));
        store.insert(square(2, 50.0));
        assert_eq!(store.len(), 2);

        store.focus(Some(1));
        assert!(store.remove(1).is_some());
        assert_eq!(store.focused(), None);
        assert!(store.get(1).is_none());
        assert!(store.remove(1).is_none());
    }

    #[test]
    fn test_insert_same_id_replaces() {
        let mut store = ShapeStore::new();
        store.insert(square(1, 0.0));
        store.insert(square(1, 20.0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).and_then(|s| s.boundary_rect).map(|b| b.x1), Some(20.0));
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut store = ShapeStore::new();
        store.insert(square(1, 0.0));
        store.insert(square(2, 5.0));
        assert_eq!(store.hit_test(Point::new(7.0, 7.0), 1.0), Some(2));
        assert_eq!(store.hit_test(Point::new(2.0, 2.0), 1.0), Some(1));
        assert_eq!(store.hit_test(Point::new(40.0, 40.0), 1.0), None);
    }

    #[test]
    fn test_hit_test_focused_vertex() {
        let mut store = ShapeStore::new();
        store.insert(square(1, 10.0));
        let near_corner = Point::new(8.0, 8.0);
        assert_eq!(store.hit_test(near_corner, 1.0), None);
        store.focus(Some(1));
        assert_eq!(store.hit_test(near_corner, 1.0), Some(1));
    }

    #[test]
    fn test_hit_test_skips_rects() {
        let mut store = ShapeStore::new();
        store.insert(DrawnShape::rect(3, BoundaryRect::new(0.0, 0.0, 10.0, 10.0), "box"));
        assert_eq!(store.hit_test(Point::new(5.0, 5.0), 1.0), None);
    }

    #[test]
    fn test_store_lookup_by_id() {
        let mut store = ShapeStore::new();
        store.insert(square(1, 0.0));
        store.insert(square(2, 20.0));
        assert!(store.shape_mut(9).is_none());
        assert_eq!(store.shape_mut(2).map(|s| s.id), Some(2));
    }

    #[test]
    fn test_lookup_on_slices_and_single_shape() {
        let mut shapes = vec![square(1, 0.0), square(2, 20.0)];
        assert_eq!(shapes.shape_mut(2).map(|s| s.id), Some(2));
        assert!(shapes.shape_mut(3).is_none());

        let mut single = square(7, 0.0);
        assert!(single.shape_mut(7).is_some());
        assert!(single.shape_mut(8).is_none());
    }
}
