//! Interaction controller for placing and dragging points.
//!
//! The controller is a two-state machine. While [`Phase::Placing`] it turns
//! clicks into new points; once the fourth point lands it switches to
//! [`Phase::Interactive`] and turns pointer down/move/up into drags. Input
//! that does not apply to the current phase is ignored.

use crate::geom::Point;
use crate::scene::{PointId, Scene};

/// Half-size of the square hit box around a point, in canvas pixels.
pub const HIT_TOLERANCE_PX: f64 = 5.0;

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fewer than four points placed; clicks place points.
    #[default]
    Placing,
    /// All four points placed; pointer input drags points.
    Interactive,
}

/// Cursor feedback requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Regular arrow.
    #[default]
    Default,
    /// Hovering a draggable point.
    Pointer,
    /// Dragging a point.
    Grabbing,
}

/// What the host should do after forwarding an event.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Nothing changed.
    Ignored,
    /// Only the cursor changed.
    Cursor(CursorStyle),
    /// The scene changed and must be redrawn.
    Redraw,
}

impl Response {
    /// Check whether the host must redraw the scene.
    pub fn needs_redraw(self) -> bool {
        matches!(self, Self::Redraw)
    }
}

/// Pointer-driven state machine over a [`Scene`].
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    phase: Phase,
    drag_target: Option<PointId>,
    cursor: CursorStyle,
}

impl InteractionController {
    /// Create a controller in the placing phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller whose phase matches an existing scene.
    pub fn for_scene(scene: &Scene) -> Self {
        Self {
            phase: phase_of(scene),
            ..Self::default()
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Point being dragged, if any.
    pub fn drag_target(&self) -> Option<PointId> {
        self.drag_target
    }

    /// Current cursor feedback.
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Placement click.
    pub fn click(&mut self, scene: &mut Scene, position: Point) -> Response {
        if self.phase != Phase::Placing {
            return Response::Ignored;
        }
        if !scene.add_point(position.x, position.y) {
            return Response::Ignored;
        }
        if scene.is_complete() {
            self.phase = Phase::Interactive;
            tracing::debug!("all points placed, entering interactive phase");
        }
        Response::Redraw
    }

    /// Pointer pressed. Starts a drag when a point is under the pointer.
    pub fn pointer_down(&mut self, scene: &Scene, position: Point) -> Response {
        if self.phase != Phase::Interactive {
            return Response::Ignored;
        }
        self.drag_target = scene.find_point_near(position.x, position.y, HIT_TOLERANCE_PX);
        match self.drag_target {
            Some(id) => {
                tracing::debug!(label = %id.label(), "drag started");
                self.set_cursor(CursorStyle::Grabbing)
            }
            None => Response::Ignored,
        }
    }

    /// Pointer moved. Drags the active point, or updates hover feedback.
    pub fn pointer_move(&mut self, scene: &mut Scene, position: Point) -> Response {
        if self.phase != Phase::Interactive {
            return Response::Ignored;
        }
        match self.drag_target {
            Some(id) => {
                if scene.move_point(id, position.x, position.y) {
                    Response::Redraw
                } else {
                    Response::Ignored
                }
            }
            None => {
                let hovered = scene
                    .find_point_near(position.x, position.y, HIT_TOLERANCE_PX)
                    .is_some();
                self.set_cursor(if hovered {
                    CursorStyle::Pointer
                } else {
                    CursorStyle::Default
                })
            }
        }
    }

    /// Pointer released. Always ends any drag.
    pub fn pointer_up(&mut self) -> Response {
        if let Some(id) = self.drag_target.take() {
            tracing::debug!(label = %id.label(), "drag finished");
        }
        self.set_cursor(CursorStyle::Default)
    }

    /// Clear the scene and return to the placing phase.
    pub fn reset(&mut self, scene: &mut Scene) -> Response {
        scene.reset();
        self.phase = Phase::Placing;
        self.drag_target = None;
        self.cursor = CursorStyle::Default;
        Response::Redraw
    }

    fn set_cursor(&mut self, cursor: CursorStyle) -> Response {
        if self.cursor == cursor {
            return Response::Ignored;
        }
        self.cursor = cursor;
        Response::Cursor(cursor)
    }
}

fn phase_of(scene: &Scene) -> Phase {
    if scene.is_complete() {
        Phase::Interactive
    } else {
        Phase::Placing
    }
}
