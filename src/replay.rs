//! Headless replay of pointer events.
//!
//! A replay script lists the events the canvas layer would normally send
//! (clicks, drags, vertex edits). Running it drives a [`PolygonAnnotator`]
//! against a [`ShapeStore`] and a [`RecordingSurface`], which makes whole
//! interaction sequences reproducible outside a UI.

use std::path::Path;

use polyedit_canvas::{Color, ColorParseError, RecordingSurface};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotator::{get_polygon_points_with_aux, CanvasSize, PolygonAnnotator};
use crate::config::DrawStyle;
use crate::model::{DrawnShape, Point, ShapeId, ShapeStore};

/// One input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Polygon tool click.
    Click {
        x: f32,
        y: f32,
        color: String,
        tag: String,
    },
    /// Undo the last placed vertex of the polygon in progress.
    RemoveLastPoint,
    /// Abort the polygon in progress.
    Cancel,
    /// Press on a finished shape.
    MouseDown { x: f32, y: f32, shape: ShapeId },
    /// Pointer moved while a vertex is grabbed.
    DragTo { x: f32, y: f32 },
    /// Translate a whole shape.
    MoveBy { dx: f32, dy: f32, shape: ShapeId },
    /// Pointer released.
    MouseUp,
    /// Click on an edge midpoint of a shape to insert a vertex there.
    AddMidpoint { x: f32, y: f32, shape: ShapeId },
    /// Delete the vertex of a shape under the pointer.
    RemoveVertex { x: f32, y: f32, shape: ShapeId },
}

/// A complete replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub canvas: CanvasSize,
    /// Stroke width of the recording surface; the configured width if absent.
    #[serde(default)]
    pub line_width: Option<f32>,
    /// Run without a drawing surface.
    #[serde(default)]
    pub headless: bool,
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// State after the last event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayOutcome {
    /// Finished shapes in drawing order
    pub shapes: Vec<DrawnShape>,
    /// Vertices of a polygon still being drawn
    pub pending_points: Vec<Point>,
    /// Number of primitives painted on the recording surface
    pub draw_commands: usize,
}

/// Errors that abort a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// I/O error when reading the script
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed script
    #[error("Invalid replay script: {0}")]
    Json(#[from] serde_json::Error),

    /// Unparseable colour in a click event
    #[error("Event {index}: {source}")]
    Color {
        index: usize,
        #[source]
        source: ColorParseError,
    },
}

/// Run `script` from a fresh annotator and empty store.
pub fn run(script: &ReplayScript, style: DrawStyle) -> Result<ReplayOutcome, ReplayError> {
    let surface = (!script.headless).then(|| {
        RecordingSurface::with_line_width(script.line_width.unwrap_or(style.line_width))
    });
    let mut annotator = PolygonAnnotator::with_style(script.canvas, surface, style);
    let mut store = ShapeStore::new();

    for (index, event) in script.events.iter().enumerate() {
        log::trace!("Event {}: {:?}", index, event);
        apply(&mut annotator, &mut store, index, event)?;
    }

    let draw_commands = annotator.surface().map_or(0, |s| s.commands().len());
    let pending_points = annotator.current_points().to_vec();
    log::info!(
        "Replayed {} events: {} shapes, {} pending points",
        script.events.len(),
        store.len(),
        pending_points.len()
    );

    Ok(ReplayOutcome {
        shapes: store.into_shapes(),
        pending_points,
        draw_commands,
    })
}

fn apply(
    annotator: &mut PolygonAnnotator<RecordingSurface>,
    store: &mut ShapeStore,
    index: usize,
    event: &ReplayEvent,
) -> Result<(), ReplayError> {
    match event {
        ReplayEvent::Click { x, y, color, tag } => {
            if annotator.is_moved_or_resized() {
                log::debug!("Event {}: click ignored during drag", index);
                return Ok(());
            }
            let color: Color = color
                .parse()
                .map_err(|source| ReplayError::Color { index, source })?;
            if let Some(shape) = annotator.on_click(*x, *y, color, tag) {
                store.insert(shape);
            }
        }
        ReplayEvent::RemoveLastPoint => annotator.remove_last_point(),
        ReplayEvent::Cancel => annotator.cancel_annotating(),
        ReplayEvent::MouseDown { x, y, shape } => match store.get(*shape) {
            Some(target) => {
                annotator.on_mouse_down(*x, *y, target);
                store.focus(Some(*shape));
            }
            None => log::warn!("Event {}: unknown shape {}", index, shape),
        },
        ReplayEvent::DragTo { x, y } => annotator.move_dragged_point(*x, *y, store),
        ReplayEvent::MoveBy { dx, dy, shape } => match store.get_mut(*shape) {
            Some(target) => annotator.move_shape(*dx, *dy, target),
            None => log::warn!("Event {}: unknown shape {}", index, shape),
        },
        ReplayEvent::MouseUp => annotator.reset_dragging(store),
        ReplayEvent::AddMidpoint { x, y, shape } => {
            if annotator.is_moved_or_resized() {
                log::debug!("Event {}: midpoint insert ignored during drag", index);
                return Ok(());
            }
            let Some(target) = store.get_mut(*shape) else {
                log::warn!("Event {}: unknown shape {}", index, shape);
                return Ok(());
            };
            let Some(poly) = target.shape.as_polygon_mut() else {
                return Ok(());
            };
            let mut items = get_polygon_points_with_aux(&poly.vertices);
            if annotator.try_to_add_aux_point(*x, *y, &mut items) {
                poly.vertices = items.into_iter().filter(|p| !p.is_aux).collect();
                target.refresh_boundaries();
            }
        }
        ReplayEvent::RemoveVertex { x, y, shape } => {
            if annotator.is_moved_or_resized() {
                log::debug!("Event {}: vertex removal ignored during drag", index);
                return Ok(());
            }
            let Some(target) = store.get_mut(*shape) else {
                log::warn!("Event {}: unknown shape {}", index, shape);
                return Ok(());
            };
            let Some(poly) = target.shape.as_polygon_mut() else {
                return Ok(());
            };
            let kept = annotator.try_to_remove_point(*x, *y, &poly.vertices);
            if kept.len() >= crate::constants::MIN_POLYGON_VERTICES {
                poly.vertices = kept;
                target.refresh_boundaries();
            } else {
                log::debug!("Event {}: removal would leave fewer than 3 vertices", index);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoundaryRect;

    const TRIANGLE: &str = r#"{
        "canvas": {"width": 100.0, "height": 100.0},
        "events": [
            {"type": "click", "x": 10.0, "y": 10.0, "color": "rgba(255,0,0,1)", "tag": "roof"},
            {"type": "click", "x": 50.0, "y": 10.0, "color": "rgba(255,0,0,1)", "tag": "roof"},
            {"type": "click", "x": 30.0, "y": 40.0, "color": "rgba(255,0,0,1)", "tag": "roof"},
            {"type": "click", "x": 10.0, "y": 10.0, "color": "rgba(255,0,0,1)", "tag": "roof"}
        ]
    }"#;

    fn triangle_with(extra: &[ReplayEvent]) -> ReplayScript {
        let mut script = ReplayScript::from_json(TRIANGLE).unwrap();
        script.events.extend_from_slice(extra);
        script
    }

    #[test]
    fn test_replay_triangle() {
        let outcome = run(&triangle_with(&[]), DrawStyle::default()).unwrap();
        assert_eq!(outcome.shapes.len(), 1);
        assert!(outcome.pending_points.is_empty());
        // Two edges while drawing plus the closing edge
        assert_eq!(outcome.draw_commands, 3);

        let shape = &outcome.shapes[0];
        assert_eq!(shape.tag, "roof");
        assert_eq!(shape.boundary_rect, Some(BoundaryRect::new(10.0, 10.0, 50.0, 40.0)));
    }

    #[test]
    fn test_replay_headless_ignores_clicks() {
        let mut script = triangle_with(&[]);
        script.headless = true;
        let outcome = run(&script, DrawStyle::default()).unwrap();
        assert!(outcome.shapes.is_empty());
        assert!(outcome.pending_points.is_empty());
        assert_eq!(outcome.draw_commands, 0);
    }

    #[test]
    fn test_replay_vertex_drag_refreshes_boundary() {
        let script = triangle_with(&[
            ReplayEvent::MouseDown {
                x: 30.0,
                y: 40.0,
                shape: 1,
            },
            ReplayEvent::DragTo { x: 30.0, y: 90.0 },
            ReplayEvent::MouseUp,
        ]);
        let outcome = run(&script, DrawStyle::default()).unwrap();
        assert_eq!(
            outcome.shapes[0].boundary_rect,
            Some(BoundaryRect::new(10.0, 10.0, 50.0, 90.0))
        );
    }

    #[test]
    fn test_replay_move_is_clamped() {
        let script = triangle_with(&[ReplayEvent::MoveBy {
            dx: 500.0,
            dy: 0.0,
            shape: 1,
        }]);
        let outcome = run(&script, DrawStyle::default()).unwrap();
        assert_eq!(
            outcome.shapes[0].boundary_rect,
            Some(BoundaryRect::new(60.0, 10.0, 100.0, 40.0))
        );
    }

    #[test]
    fn test_replay_midpoint_insert_and_vertex_removal() {
        let script = triangle_with(&[
            // Midpoint of the top edge
            ReplayEvent::AddMidpoint {
                x: 30.0,
                y: 10.0,
                shape: 1,
            },
        ]);
        let outcome = run(&script, DrawStyle::default()).unwrap();
        let vertices = outcome.shapes[0].polygon_vertices().unwrap();
        assert_eq!(vertices.len(), 4);
        assert!(vertices.iter().all(|v| !v.is_aux));

        let mut events = script.events.clone();
        events.push(ReplayEvent::RemoveVertex {
            x: 30.0,
            y: 10.0,
            shape: 1,
        });
        let script = ReplayScript { events, ..script };
        let outcome = run(&script, DrawStyle::default()).unwrap();
        assert_eq!(outcome.shapes[0].polygon_vertices().unwrap().len(), 3);
    }

    #[test]
    fn test_replay_bad_color() {
        let script = ReplayScript {
            canvas: CanvasSize::new(10.0, 10.0),
            line_width: None,
            headless: false,
            events: vec![ReplayEvent::Click {
                x: 1.0,
                y: 1.0,
                color: "not-a-colour".to_string(),
                tag: "x".to_string(),
            }],
        };
        assert!(matches!(
            run(&script, DrawStyle::default()),
            Err(ReplayError::Color { index: 0, .. })
        ));
    }

    #[test]
    fn test_replay_unknown_shape_is_skipped() {
        let script = triangle_with(&[ReplayEvent::MoveBy {
            dx: 1.0,
            dy: 1.0,
            shape: 42,
        }]);
        assert!(run(&script, DrawStyle::default()).is_ok());
    }

    #[test]
    fn test_replay_vertex_edits_wait_for_drag_end() {
        let script = triangle_with(&[
            ReplayEvent::MouseDown {
                x: 30.0,
                y: 40.0,
                shape: 1,
            },
            ReplayEvent::AddMidpoint {
                x: 30.0,
                y: 10.0,
                shape: 1,
            },
            ReplayEvent::RemoveVertex {
                x: 10.0,
                y: 10.0,
                shape: 1,
            },
            ReplayEvent::DragTo { x: 30.0, y: 90.0 },
            ReplayEvent::MouseUp,
        ]);
        let outcome = run(&script, DrawStyle::default()).unwrap();
        let points: Vec<(f32, f32)> = outcome.shapes[0]
            .polygon_vertices()
            .unwrap()
            .iter()
            .map(|v| (v.x, v.y))
            .collect();
        // The grabbed vertex moved and no other vertex changed
        assert_eq!(points, vec![(10.0, 10.0), (50.0, 10.0), (30.0, 90.0)]);
    }
}
