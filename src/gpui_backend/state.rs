use crate::geom::{Point, ScreenPoint};
use crate::interaction::Response;
use crate::transform::CanvasTransform;

/// Layout state shared between the canvas prepaint pass and input handlers.
#[derive(Debug, Clone, Default)]
pub(crate) struct SceneUiState {
    pub(crate) transform: Option<CanvasTransform>,
    /// Scene generation of the last frame built.
    pub(crate) painted_generation: Option<u64>,
}

impl SceneUiState {
    /// Map a window position onto the canvas. `None` until the canvas is laid out.
    pub(crate) fn canvas_point(&self, position: ScreenPoint) -> Option<Point> {
        self.transform
            .as_ref()
            .map(|transform| transform.screen_to_canvas(position))
    }

    /// Whether a handler's response requires the view to re-render.
    ///
    /// Cursor changes always do. Scene changes only do when the scene has moved
    /// past the generation of the last frame built.
    pub(crate) fn needs_refresh(&self, response: Response, generation: u64) -> bool {
        match response {
            Response::Ignored => false,
            Response::Cursor(_) => true,
            Response::Redraw => self.painted_generation != Some(generation),
        }
    }
}
