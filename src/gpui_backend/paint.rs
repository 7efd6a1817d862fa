use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, Pixels, TextRun, Window, font, point, px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, LineStyle, RenderCommand, TextStyle};

use super::frame::SceneFrame;

const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

pub(crate) fn paint_frame(frame: &SceneFrame, window: &mut Window, cx: &mut App) {
    for command in frame.render.commands() {
        match command {
            RenderCommand::Clear { rect, color } => {
                paint_clear(window, *rect, *color);
            }
            RenderCommand::Circle {
                center,
                radius,
                stroke,
                fill,
            } => {
                paint_circle(window, *center, *radius, *stroke, *fill);
            }
            RenderCommand::Disc {
                center,
                radius,
                color,
            } => {
                paint_circle(
                    window,
                    *center,
                    *radius,
                    LineStyle {
                        color: TRANSPARENT,
                        width: 0.0,
                    },
                    *color,
                );
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                paint_text(window, cx, *position, text, style);
            }
        }
    }
}

fn paint_clear(window: &mut Window, rect: ScreenRect, color: Color) {
    window.paint_quad(quad(
        to_bounds(rect),
        Corners::all(px(0.0)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(TRANSPARENT),
        BorderStyle::default(),
    ));
}

// A fully rounded quad is a circle; the border is the outline.
fn paint_circle(window: &mut Window, center: ScreenPoint, radius: f32, stroke: LineStyle, fill: Color) {
    if radius <= 0.0 {
        return;
    }
    let bounds = Bounds::from_corners(
        point(px(center.x - radius), px(center.y - radius)),
        point(px(center.x + radius), px(center.y + radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(fill),
        Edges::all(px(stroke.width.min(radius))),
        to_rgba(stroke.color),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size);
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    // Commands anchor text at its baseline; GPUI paints from the top of the line.
    let origin = point(px(position.x), px(position.y) - shaped.ascent);
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}
