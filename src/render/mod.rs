//! Rendering primitives and scene projection.
//!
//! These types are backend-agnostic and are used by render backends (such as
//! the GPUI backend) to describe how a scene should be drawn. Commands are
//! painted in order, later commands on top of earlier ones.

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::scene::Scene;
use crate::style::Theme;
use crate::transform::CanvasTransform;

/// Offset of a label from the point it names, in pixels.
const LABEL_OFFSET: (f32, f32) = (5.0, -5.0);

/// Label drawn next to intersection points.
const INTERSECTION_LABEL: &str = "i";

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A single draw instruction in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole surface with a color.
    Clear {
        /// Surface bounds.
        rect: ScreenRect,
        /// Background color.
        color: Color,
    },
    /// Stroke a circle outline and fill its interior.
    Circle {
        /// Circle center.
        center: ScreenPoint,
        /// Radius in pixels.
        radius: f32,
        /// Outline styling.
        stroke: LineStyle,
        /// Interior fill, usually translucent.
        fill: Color,
    },
    /// Fill a small disc.
    Disc {
        /// Disc center.
        center: ScreenPoint,
        /// Radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Draw text with its baseline starting at `position`.
    Text {
        /// Baseline start.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    fn push_labeled_point(&mut self, center: ScreenPoint, label: &str, color: Color, theme: &Theme) {
        self.push(RenderCommand::Disc {
            center,
            radius: theme.marker_radius,
            color,
        });
        self.push(RenderCommand::Text {
            position: ScreenPoint::new(center.x + LABEL_OFFSET.0, center.y + LABEL_OFFSET.1),
            text: label.to_string(),
            style: TextStyle {
                color,
                size: theme.label_size,
            },
        });
    }
}

/// Project the current scene into draw commands.
///
/// The list always starts with a clear. A complete scene adds both circles,
/// then the labeled points, then the intersection markers and their labels.
/// An incomplete scene only shows its placed points.
pub fn build_scene_render(
    scene: &Scene,
    theme: &Theme,
    transform: &CanvasTransform,
) -> RenderList {
    let mut render = RenderList::new();
    render.push(RenderCommand::Clear {
        rect: transform.screen(),
        color: theme.background,
    });

    let geometry = scene.recompute();

    if let Some(circles) = geometry.circles {
        for (circle, color) in circles
            .iter()
            .zip([theme.first_circle, theme.second_circle])
        {
            render.push(RenderCommand::Circle {
                center: transform.canvas_to_screen(circle.center),
                radius: circle.radius as f32,
                stroke: LineStyle {
                    color,
                    width: theme.stroke_width,
                },
                fill: color.with_alpha(theme.circle_fill_alpha),
            });
        }
    }

    for (id, point) in scene.iter() {
        render.push_labeled_point(
            transform.canvas_to_screen(point),
            id.label().as_str(),
            theme.point,
            theme,
        );
    }

    let intersections: Vec<ScreenPoint> = geometry
        .intersections
        .iter()
        .map(|point: &Point| transform.canvas_to_screen(*point))
        .collect();
    for center in &intersections {
        render.push(RenderCommand::Disc {
            center: *center,
            radius: theme.marker_radius,
            color: theme.intersection_marker,
        });
    }
    for center in intersections {
        render.push_labeled_point(center, INTERSECTION_LABEL, theme.intersection_label, theme);
    }

    render
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> CanvasTransform {
        CanvasTransform::new(ScreenRect::new(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(400.0, 300.0),
        ))
        .expect("valid transform")
    }

    fn complete_scene() -> Scene {
        Scene::from_points(&[
            Point::new(100.0, 100.0),
            Point::new(150.0, 100.0),
            Point::new(180.0, 100.0),
            Point::new(230.0, 100.0),
        ])
        .expect("valid preset")
    }

    fn kinds(render: &RenderList) -> Vec<&'static str> {
        render
            .commands()
            .iter()
            .map(|command| match command {
                RenderCommand::Clear { .. } => "clear",
                RenderCommand::Circle { .. } => "circle",
                RenderCommand::Disc { .. } => "disc",
                RenderCommand::Text { .. } => "text",
            })
            .collect()
    }

    #[test]
    fn empty_scene_only_clears() {
        let render = build_scene_render(&Scene::new(), &Theme::default(), &transform());
        assert_eq!(kinds(&render), ["clear"]);
    }

    #[test]
    fn partial_scene_draws_points_without_circles() {
        let scene = Scene::from_points(&[Point::new(10.0, 10.0), Point::new(20.0, 20.0)])
            .expect("valid preset");
        let render = build_scene_render(&scene, &Theme::default(), &transform());
        assert_eq!(kinds(&render), ["clear", "disc", "text", "disc", "text"]);
    }

    #[test]
    fn complete_scene_draw_order() {
        let render = build_scene_render(&complete_scene(), &Theme::default(), &transform());
        let mut expected = vec!["clear", "circle", "circle"];
        expected.extend(["disc", "text"].repeat(4));
        expected.extend(["disc", "disc"]);
        expected.extend(["disc", "text"].repeat(2));
        assert_eq!(kinds(&render), expected);
    }

    #[test]
    fn labels_and_colors() {
        let theme = Theme::default();
        let render = build_scene_render(&complete_scene(), &theme, &transform());
        let labels: Vec<(&str, Color)> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, style, .. } => Some((text.as_str(), style.color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            [
                ("A", theme.point),
                ("B", theme.point),
                ("C", theme.point),
                ("D", theme.point),
                ("i", theme.intersection_label),
                ("i", theme.intersection_label),
            ]
        );
        match &render.commands()[1] {
            RenderCommand::Circle { radius, fill, .. } => {
                assert!((radius - 50.0).abs() < 1e-4);
                assert_eq!(fill.a, theme.circle_fill_alpha);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn surface_origin_offsets_commands() {
        let transform = CanvasTransform::new(ScreenRect::new(
            ScreenPoint::new(10.0, 20.0),
            ScreenPoint::new(410.0, 320.0),
        ))
        .expect("valid transform");
        let scene = Scene::from_points(&[Point::new(1.0, 2.0)]).expect("valid preset");
        let render = build_scene_render(&scene, &Theme::default(), &transform);
        assert_eq!(
            render.commands()[1],
            RenderCommand::Disc {
                center: ScreenPoint::new(11.0, 22.0),
                radius: 2.5,
                color: Color::BLACK,
            }
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let scene = complete_scene();
        let theme = Theme::dark();
        assert_eq!(
            build_scene_render(&scene, &theme, &transform()),
            build_scene_render(&scene, &theme, &transform())
        );
    }
}
