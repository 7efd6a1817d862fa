use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, SharedString,
    Window, canvas, div, px,
};

use crate::geom::{Point as CanvasPoint, ScreenPoint};
use crate::interaction::{CursorStyle, InteractionController, Phase, Response};
use crate::report::scene_report;
use crate::scene::Scene;

use super::config::SceneViewConfig;
use super::frame::build_frame;
use super::paint::{paint_frame, to_hsla};
use super::state::SceneUiState;

/// A GPUI view that lets the user place and drag the four scene points.
///
/// The first four clicks place A, B, C and D. After that, points can be
/// dragged and both circles and their intersections follow immediately.
pub struct GpuiSceneView {
    scene: Scene,
    controller: InteractionController,
    state: Arc<RwLock<SceneUiState>>,
    config: SceneViewConfig,
}

impl GpuiSceneView {
    /// Create an empty scene view.
    ///
    /// Uses the default [`SceneViewConfig`].
    pub fn new() -> Self {
        Self::with_config(SceneViewConfig::default())
    }

    /// Create an empty scene view with a custom configuration.
    pub fn with_config(config: SceneViewConfig) -> Self {
        Self::with_scene(Scene::new(), config)
    }

    /// Create a view over an existing scene.
    ///
    /// A complete scene starts out draggable.
    pub fn with_scene(scene: Scene, config: SceneViewConfig) -> Self {
        Self {
            controller: InteractionController::for_scene(&scene),
            scene,
            state: Arc::new(RwLock::new(SceneUiState::default())),
            config,
        }
    }

    /// Access the scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Clear all points and return to placement.
    pub fn reset(&mut self, cx: &mut Context<Self>) {
        let response = self.controller.reset(&mut self.scene);
        self.apply(response, cx);
    }

    fn canvas_point(&self, position: Point<Pixels>) -> Option<CanvasPoint> {
        let state = self.state.read().expect("scene state lock");
        state.canvas_point(screen_point(position))
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let Some(position) = self.canvas_point(ev.position) else {
            return;
        };
        let response = match self.controller.phase() {
            Phase::Placing => self.controller.click(&mut self.scene, position),
            Phase::Interactive => self.controller.pointer_down(&self.scene, position),
        };
        self.apply(response, cx);
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let Some(position) = self.canvas_point(ev.position) else {
            return;
        };
        let response = self.controller.pointer_move(&mut self.scene, position);
        self.apply(response, cx);
    }

    fn on_mouse_up(&mut self, cx: &mut Context<Self>) {
        let response = self.controller.pointer_up();
        self.apply(response, cx);
    }

    fn apply(&self, response: Response, cx: &mut Context<Self>) {
        let refresh = self
            .state
            .read()
            .expect("scene state lock")
            .needs_refresh(response, self.scene.generation());
        if refresh {
            cx.notify();
        }
    }
}

impl Default for GpuiSceneView {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for GpuiSceneView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let scene = self.scene.clone();
        let state = Arc::clone(&self.state);
        let theme = self.config.theme.clone();
        let report = if self.config.show_report {
            scene_report(&self.scene)
        } else {
            String::new()
        };

        let surface = div()
            .size_full()
            .cursor(gpui_cursor(self.controller.cursor()))
            .child({
                let theme = theme.clone();
                canvas(
                    move |bounds, _, _| {
                        let mut state = state.write().expect("scene state lock");
                        build_frame(&scene, &theme, &mut state, bounds)
                    },
                    move |_, frame, window, cx| {
                        paint_frame(&frame, window, cx);
                    },
                )
                .size_full()
            })
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _: &MouseUpEvent, _, cx| {
                    this.on_mouse_up(cx);
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, _: &MouseUpEvent, _, cx| {
                    this.on_mouse_up(cx);
                }),
            );

        let overlay = div()
            .absolute()
            .top(px(8.0))
            .left(px(8.0))
            .occlude()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .text_size(px(13.0))
            .text_color(to_hsla(theme.report_text))
            .child(
                div()
                    .px(px(10.0))
                    .py(px(4.0))
                    .border_1()
                    .border_color(to_hsla(theme.report_text))
                    .rounded(px(4.0))
                    .cursor_pointer()
                    .child("Reset")
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _: &MouseDownEvent, _, cx| {
                            cx.stop_propagation();
                            this.reset(cx);
                        }),
                    ),
            )
            .when(!report.is_empty(), |overlay| {
                overlay.child(
                    div().flex().flex_col().children(
                        report
                            .lines()
                            .map(|line| div().child(SharedString::from(line.to_string()))),
                    ),
                )
            });

        div()
            .relative()
            .size_full()
            .bg(to_hsla(theme.background))
            .child(surface)
            .child(overlay)
    }
}

fn gpui_cursor(cursor: CursorStyle) -> gpui::CursorStyle {
    match cursor {
        CursorStyle::Default => gpui::CursorStyle::Arrow,
        CursorStyle::Pointer => gpui::CursorStyle::PointingHand,
        CursorStyle::Grabbing => gpui::CursorStyle::ClosedHand,
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
