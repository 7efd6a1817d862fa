//! GPUI integration for gpui_circles.
//!
//! This module provides a GPUI view that owns a [`Scene`](crate::scene::Scene),
//! forwards mouse input to the [`InteractionController`](crate::interaction::InteractionController),
//! and paints the scene on a canvas that fills the window.

mod config;
mod frame;
mod paint;
mod state;
mod view;

pub use config::SceneViewConfig;
pub use view::GpuiSceneView;
