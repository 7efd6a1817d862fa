use gpui::{Bounds, Pixels};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{RenderList, build_scene_render};
use crate::scene::Scene;
use crate::style::Theme;
use crate::transform::CanvasTransform;

use super::state::SceneUiState;

#[derive(Debug, Clone)]
pub(crate) struct SceneFrame {
    pub(crate) render: RenderList,
}

pub(crate) fn build_frame(
    scene: &Scene,
    theme: &Theme,
    state: &mut SceneUiState,
    bounds: Bounds<Pixels>,
) -> SceneFrame {
    let origin_x = f32::from(bounds.origin.x);
    let origin_y = f32::from(bounds.origin.y);
    let screen = ScreenRect::new(
        ScreenPoint::new(origin_x, origin_y),
        ScreenPoint::new(
            origin_x + f32::from(bounds.size.width),
            origin_y + f32::from(bounds.size.height),
        ),
    );

    let Some(transform) = CanvasTransform::new(screen) else {
        state.transform = None;
        return SceneFrame {
            render: RenderList::new(),
        };
    };

    if state.transform.map(|previous| previous.size()) != Some(transform.size()) {
        let (width, height) = transform.size();
        tracing::debug!(width, height, "canvas resized");
    }
    state.transform = Some(transform);
    state.painted_generation = Some(scene.generation());

    SceneFrame {
        render: build_scene_render(scene, theme, &transform),
    }
}
