use crate::style::Theme;

/// Configuration for the GPUI scene view.
#[derive(Debug, Clone)]
pub struct SceneViewConfig {
    /// Show the coordinate report overlay.
    pub show_report: bool,
    /// Colors and sizes used to draw the scene.
    pub theme: Theme,
}

impl Default for SceneViewConfig {
    fn default() -> Self {
        Self {
            show_report: true,
            theme: Theme::default(),
        }
    }
}
