//! polyedit - interactive polygon editing for image annotation
//!
//! The crate provides the geometric state machine behind a polygon annotation
//! tool: click-to-add vertices, closing on the first vertex, dragging shapes
//! and single vertices inside the canvas, and inserting/removing vertices via
//! edge midpoints. Rendering goes through the [`polyedit_canvas::DrawSurface`]
//! trait so any backend can be plugged in.

pub mod annotator;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod model;
pub mod replay;

pub use annotator::{get_polygon_points_with_aux, CanvasSize, DraggedPoint, PolygonAnnotator};
pub use config::{AnnotatorConfig, ConfigError, DrawStyle, LogLevel};
pub use geometry::{
    get_polygon_boundaries, get_polygon_point_cursor, is_intersecting_point,
    is_intersecting_polygon, CursorHint,
};
pub use model::{
    BoundaryRect, DrawnPoint, DrawnShape, Point, Polygon, ShapeId, ShapeKind, ShapeLookup,
    ShapeStore,
};

pub use polyedit_canvas::{Color, ColorParseError, DrawSurface, RecordingSurface};
