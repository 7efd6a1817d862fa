//! gpui_circles is an interactive two-circle intersection explorer for GPUI.
//!
//! Four placed points define two circles: the first centered at A through B,
//! the second centered at C through D. The crate computes where the circles
//! cross and keeps that answer current while points are dragged.
//!
//! The core ([`scene`], [`intersect`], [`interaction`], [`render`]) is
//! backend-agnostic. The `gpui` feature (on by default) adds a ready-made view.

#![forbid(unsafe_code)]

pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod interaction;
pub mod intersect;
pub mod render;
pub mod report;
pub mod scene;
pub mod style;
pub mod transform;

pub use geom::{Circle, Point, ScreenPoint, ScreenRect};
#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiSceneView, SceneViewConfig};
pub use interaction::{CursorStyle, HIT_TOLERANCE_PX, InteractionController, Phase, Response};
pub use intersect::{Intersections, intersect_circles};
pub use render::{Color, LineStyle, RenderCommand, RenderList, TextStyle, build_scene_render};
pub use report::scene_report;
pub use scene::{POINT_COUNT, PointId, PointLabel, Scene, SceneError, SceneGeometry};
pub use style::Theme;
pub use transform::CanvasTransform;
