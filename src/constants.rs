//! Global constants for the polygon editor

/// Hit radius used when no drawing surface is attached, and the base radius
/// for vertex markers and focused-polygon vertex hits.
pub const ARC_RADIUS_DEFAULT: f32 = 4.0;

/// Minimum number of vertices required to close a polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Alpha of the polygon body fill.
pub const POLYGON_FILL_ALPHA: f32 = 0.2;

/// Alpha of the outline around auxiliary vertex markers.
pub const AUX_POINT_STROKE_ALPHA: f32 = 0.5;

/// Default zoom factor for hit-test tolerance.
pub const DEFAULT_ZOOM: f32 = 1.0;
