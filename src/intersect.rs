//! Circle-circle intersection.
//!
//! The engine is a pure function over two circles. Every degeneracy (disjoint
//! circles, containment, coincident circles, non-finite input) resolves to
//! [`Intersections::Empty`]; nothing here can fail.

use crate::geom::{Circle, Point};

/// Intersection points of two circles.
///
/// A tangency is reported as a [`Intersections::Pair`] of two coincident
/// points, never as a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersections {
    /// No discrete intersection points.
    Empty,
    /// Two intersection points, in a fixed order.
    ///
    /// The first point is offset to the left of the center-to-center axis
    /// (in a y-up frame), the second to the right.
    Pair([Point; 2]),
}

impl Intersections {
    /// Intersection points as a slice of zero or two elements.
    pub fn as_slice(&self) -> &[Point] {
        match self {
            Self::Empty => &[],
            Self::Pair(points) => points,
        }
    }

    /// Number of intersection points (0 or 2).
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check whether there are no intersection points.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Iterate over the intersection points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a Intersections {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compute the intersection points of two circles.
///
/// Uses the radical-line construction: the foot point lies at signed distance
/// `a = (r0² - r1² + d²) / 2d` from the first center along the center axis, and
/// the two points sit `h = sqrt(r0² - a²)` either side of it.
pub fn intersect_circles(c0: &Circle, c1: &Circle) -> Intersections {
    if !c0.is_valid() || !c1.is_valid() {
        return Intersections::Empty;
    }

    let (r0, r1) = (c0.radius, c1.radius);
    let dx = c1.center.x - c0.center.x;
    let dy = c1.center.y - c0.center.y;
    let d = dx.hypot(dy);

    if d > r0 + r1 || d < (r0 - r1).abs() {
        return Intersections::Empty;
    }
    // Concentric equal circles: infinitely many shared points, and the
    // construction below would divide by zero.
    if d == 0.0 {
        return Intersections::Empty;
    }

    // Factored forms of (r0² - r1² + d²) / 2d and sqrt(r0² - a²) keep the
    // intermediates in range for radii whose squares would overflow.
    let a = (r0 - r1) * (r0 + r1) / (2.0 * d) + d / 2.0;
    let h = (r0 - a).max(0.0).sqrt() * (r0 + a).max(0.0).sqrt();
    if !a.is_finite() || !h.is_finite() {
        return Intersections::Empty;
    }
    let foot = Point::new(c0.center.x + dx * (a / d), c0.center.y + dy * (a / d));
    let rx = -dy * (h / d);
    let ry = dx * (h / d);

    let points = [
        Point::new(foot.x + rx, foot.y + ry),
        Point::new(foot.x - rx, foot.y - ry),
    ];
    if !points.iter().all(Point::is_finite) {
        return Intersections::Empty;
    }
    Intersections::Pair(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point::new(x, y), r)
    }

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn two_intersections_in_fixed_order() {
        let result = intersect_circles(&circle(0.0, 0.0, 5.0), &circle(8.0, 0.0, 5.0));
        let points = result.as_slice();
        assert_eq!(points.len(), 2);
        assert_close(points[0], Point::new(4.0, 3.0));
        assert_close(points[1], Point::new(4.0, -3.0));
    }

    #[test]
    fn far_apart_circles_do_not_intersect() {
        let result = intersect_circles(&circle(0.0, 0.0, 5.0), &circle(20.0, 0.0, 5.0));
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn contained_circle_does_not_intersect() {
        let result = intersect_circles(&circle(0.0, 0.0, 10.0), &circle(1.0, 1.0, 2.0));
        assert_eq!(result, Intersections::Empty);
    }

    #[test]
    fn concentric_circles_do_not_intersect() {
        assert!(intersect_circles(&circle(3.0, 3.0, 4.0), &circle(3.0, 3.0, 2.0)).is_empty());
        assert!(intersect_circles(&circle(3.0, 3.0, 4.0), &circle(3.0, 3.0, 4.0)).is_empty());
    }

    #[test]
    fn identical_zero_radius_circles_are_empty() {
        assert!(intersect_circles(&circle(1.0, 1.0, 0.0), &circle(1.0, 1.0, 0.0)).is_empty());
    }

    #[test]
    fn external_tangency_yields_coincident_pair() {
        let result = intersect_circles(&circle(0.0, 0.0, 3.0), &circle(5.0, 0.0, 2.0));
        let points = result.as_slice();
        assert_eq!(points.len(), 2);
        assert_close(points[0], Point::new(3.0, 0.0));
        assert_close(points[1], points[0]);
    }

    #[test]
    fn internal_tangency_yields_coincident_pair() {
        let result = intersect_circles(&circle(0.0, 0.0, 5.0), &circle(2.0, 0.0, 3.0));
        let points = result.as_slice();
        assert_eq!(points.len(), 2);
        assert_close(points[0], Point::new(5.0, 0.0));
        assert_close(points[1], Point::new(5.0, 0.0));
    }

    #[test]
    fn points_lie_on_both_circles() {
        let pairs = [
            (circle(10.0, 20.0, 30.0), circle(40.0, 15.0, 25.0)),
            (circle(-3.5, 7.25, 12.0), circle(4.0, -2.0, 9.5)),
            (circle(100.0, 100.0, 80.0), circle(130.0, 190.0, 60.0)),
        ];
        for (c0, c1) in pairs {
            let result = intersect_circles(&c0, &c1);
            assert_eq!(result.len(), 2, "{c0:?} {c1:?}");
            for point in &result {
                let scale = c0.radius.max(c1.radius);
                assert!((point.distance(c0.center) - c0.radius).abs() < 1e-6 * scale);
                assert!((point.distance(c1.center) - c1.radius).abs() < 1e-6 * scale);
            }
        }
    }

    #[test]
    fn huge_radii_stay_finite() {
        let c0 = circle(0.0, 0.0, 1e155);
        let c1 = circle(1e150, 0.0, 1e155);
        let result = intersect_circles(&c0, &c1);
        assert_eq!(result.len(), 2);
        for point in &result {
            assert!(point.is_finite(), "{point:?}");
            assert!((point.distance(c0.center) - c0.radius).abs() < 1e-6 * c0.radius);
            assert!((point.distance(c1.center) - c1.radius).abs() < 1e-6 * c1.radius);
        }
    }

    #[test]
    fn overflowing_geometry_is_empty_not_nan() {
        let result = intersect_circles(&circle(0.0, 0.0, 1e308), &circle(1e308, 0.0, 1e308));
        assert!(result.iter().all(Point::is_finite));
        let result = intersect_circles(&circle(-1e308, 0.0, 1e308), &circle(1e308, 0.0, 1e308));
        assert!(result.iter().all(Point::is_finite));
    }

    #[test]
    fn non_finite_input_is_empty() {
        assert!(intersect_circles(&circle(f64::NAN, 0.0, 5.0), &circle(8.0, 0.0, 5.0)).is_empty());
        assert!(
            intersect_circles(&circle(0.0, 0.0, f64::INFINITY), &circle(8.0, 0.0, 5.0)).is_empty()
        );
        assert!(intersect_circles(&circle(0.0, 0.0, -5.0), &circle(8.0, 0.0, 5.0)).is_empty());
    }
}
