//! Coordinate transforms between canvas and screen space.
//!
//! Canvas space is the drawing surface's own pixel grid with its origin at the
//! surface's top-left corner. Screen space is the window's pixel grid. The two
//! differ only by the surface origin; there is no scaling.

use crate::geom::{Point, ScreenPoint, ScreenRect};

/// Transform from canvas coordinates into screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    screen: ScreenRect,
}

impl CanvasTransform {
    /// Create a transform for a surface occupying `screen`.
    ///
    /// Returns `None` for a surface without positive area.
    pub fn new(screen: ScreenRect) -> Option<Self> {
        if !screen.is_valid() {
            return None;
        }
        Some(Self { screen })
    }

    /// Surface bounds in screen space.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Surface size in pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.screen.width(), self.screen.height())
    }

    /// Check whether a screen point falls on the surface.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        self.screen.contains(point)
    }

    /// Map a canvas point into screen space.
    pub fn canvas_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(
            (self.screen.min.x as f64 + point.x) as f32,
            (self.screen.min.y as f64 + point.y) as f32,
        )
    }

    /// Map a screen point into canvas space.
    pub fn screen_to_canvas(&self, point: ScreenPoint) -> Point {
        Point::new(
            point.x as f64 - self.screen.min.x as f64,
            point.y as f64 - self.screen.min.y as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_roundtrip() {
        let screen = ScreenRect::new(ScreenPoint::new(20.0, 40.0), ScreenPoint::new(820.0, 640.0));
        let transform = CanvasTransform::new(screen).expect("valid transform");
        let point = Point::new(100.5, 7.25);
        let screen_point = transform.canvas_to_screen(point);
        assert_eq!(screen_point, ScreenPoint::new(120.5, 47.25));
        assert_eq!(transform.screen_to_canvas(screen_point), point);
        assert_eq!(transform.size(), (800.0, 600.0));
    }

    #[test]
    fn rejects_empty_surface() {
        let screen = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(0.0, 100.0));
        assert!(CanvasTransform::new(screen).is_none());
    }
}
