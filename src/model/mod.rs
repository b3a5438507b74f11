//! Data model for the polygon editor.

mod point;
mod shape;
mod store;

pub use point::{BoundaryRect, DrawnPoint, HasPosition, Point};
pub use shape::{DrawnShape, Polygon, ShapeId, ShapeKind};
pub use store::{ShapeLookup, ShapeStore};
