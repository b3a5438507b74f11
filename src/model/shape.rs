//! Finished shape records.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_POLYGON_VERTICES;
use crate::geometry::get_polygon_boundaries;
use crate::model::{BoundaryRect, DrawnPoint, Point};

/// Unique identifier for a finished shape.
pub type ShapeId = u32;

/// A polygon defined by an ordered vertex list. The edge cycle wraps from the
/// last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<DrawnPoint>,
}

impl Polygon {
    pub fn new(vertices: Vec<DrawnPoint>) -> Self {
        Self { vertices }
    }

    /// Whether the polygon has enough vertices to be closed.
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }
}

/// The geometry of an annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A polygon annotation.
    Polygon(Polygon),
    /// A rectangle annotation, drawn by a different tool.
    Rect(BoundaryRect),
}

impl ShapeKind {
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            ShapeKind::Polygon(poly) => Some(poly),
            ShapeKind::Rect(_) => None,
        }
    }

    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match self {
            ShapeKind::Polygon(poly) => Some(poly),
            ShapeKind::Rect(_) => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Polygon(_) => "polygon",
            ShapeKind::Rect(_) => "rect",
        }
    }
}

/// A finished annotation as handed to the shape store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnShape {
    pub id: ShapeId,
    pub shape: ShapeKind,
    #[serde(default)]
    pub boundary_rect: Option<BoundaryRect>,
    pub tag: String,
}

impl DrawnShape {
    /// A polygon shape with its boundary computed from `vertices`.
    pub fn polygon(id: ShapeId, vertices: Vec<DrawnPoint>, tag: impl Into<String>) -> Self {
        let boundary_rect = get_polygon_boundaries(&vertices);
        Self {
            id,
            shape: ShapeKind::Polygon(Polygon::new(vertices)),
            boundary_rect,
            tag: tag.into(),
        }
    }

    /// A rectangle shape.
    pub fn rect(id: ShapeId, rect: BoundaryRect, tag: impl Into<String>) -> Self {
        Self {
            id,
            shape: ShapeKind::Rect(rect),
            boundary_rect: Some(rect),
            tag: tag.into(),
        }
    }

    pub fn polygon_vertices(&self) -> Option<&[DrawnPoint]> {
        self.shape.as_polygon().map(|p| p.vertices.as_slice())
    }

    /// Set the vertex at `index` to `point`, keeping its aux flag.
    ///
    /// Returns false if this is not a polygon or the index is out of range.
    /// The boundary is left alone; call [`Self::refresh_boundaries`] once the
    /// edit is done.
    pub fn update_vertex(&mut self, index: usize, point: Point) -> bool {
        let Some(vertex) = self
            .shape
            .as_polygon_mut()
            .and_then(|poly| poly.vertices.get_mut(index))
        else {
            return false;
        };
        vertex.x = point.x;
        vertex.y = point.y;
        true
    }

    /// Recompute the boundary box from the current vertex list.
    pub fn refresh_boundaries(&mut self) {
        if let ShapeKind::Polygon(poly) = &self.shape {
            self.boundary_rect = get_polygon_boundaries(&poly.vertices);
        }
    }
}
