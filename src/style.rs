//! Colors and sizes used when drawing a scene.

use crate::render::Color;

/// Visual theme for the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Outline and fill of the first circle (A, |AB|).
    pub first_circle: Color,
    /// Outline and fill of the second circle (C, |CD|).
    pub second_circle: Color,
    /// Alpha applied to circle fills.
    pub circle_fill_alpha: f32,
    /// Placed points and their labels.
    pub point: Color,
    /// Translucent intersection markers.
    pub intersection_marker: Color,
    /// Intersection points and their "i" labels.
    pub intersection_label: Color,
    /// Report text in the overlay.
    pub report_text: Color,
    /// Radius of point and intersection markers in pixels.
    pub marker_radius: f32,
    /// Label font size in pixels.
    pub label_size: f32,
    /// Circle outline width in pixels.
    pub stroke_width: f32,
}

impl Theme {
    /// Light theme on a white canvas.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            first_circle: Color::new(0.0, 0.0, 1.0, 1.0),
            second_circle: Color::new(1.0, 1.0, 0.0, 1.0),
            circle_fill_alpha: 0.2,
            point: Color::BLACK,
            intersection_marker: Color::new(0.0, 0.5, 0.0, 0.5),
            intersection_label: Color::new(1.0, 0.0, 0.0, 1.0),
            report_text: Color::BLACK,
            marker_radius: 2.5,
            label_size: 20.0,
            stroke_width: 1.0,
        }
    }

    /// Dark theme for low-light displays.
    pub fn dark() -> Self {
        Self {
            background: Color::new(0.08, 0.09, 0.11, 1.0),
            first_circle: Color::new(0.35, 0.55, 1.0, 1.0),
            second_circle: Color::new(0.95, 0.85, 0.25, 1.0),
            point: Color::new(0.9, 0.9, 0.9, 1.0),
            intersection_marker: Color::new(0.3, 0.85, 0.4, 0.5),
            intersection_label: Color::new(1.0, 0.4, 0.4, 1.0),
            report_text: Color::new(0.9, 0.9, 0.9, 1.0),
            ..Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
