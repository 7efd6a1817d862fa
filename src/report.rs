//! Plain-text coordinate report.

use std::fmt::{self, Write as _};

use crate::scene::Scene;

/// Format the placed points and intersections with two decimals.
///
/// Values exactly halfway between two hundredths round away from zero.
/// An empty scene yields an empty report.
pub fn scene_report(scene: &Scene) -> String {
    let mut out = String::new();
    if scene.is_empty() {
        return out;
    }

    out.push_str("Points:\n");
    for (id, point) in scene.iter() {
        let _ = writeln!(
            out,
            "Point {}: ({}, {})",
            id.label(),
            Hundredths(point.x),
            Hundredths(point.y)
        );
    }

    let intersections = scene.recompute().intersections;
    if !intersections.is_empty() {
        out.push_str("Intersections:\n");
        for (index, point) in intersections.iter().enumerate() {
            let _ = writeln!(
                out,
                "Intersection {}: ({}, {})",
                index + 1,
                Hundredths(point.x),
                Hundredths(point.y)
            );
        }
    }
    out
}

/// A coordinate shown with two decimals.
///
/// `{:.2}` breaks exact ties to even; ties here round away from zero instead.
struct Hundredths(f64);

impl fmt::Display for Hundredths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let scaled = value * 100.0;
        // A double with an exact tie in the third decimal has at most three
        // binary fraction digits, so scaling by 8 is exact and integral.
        let exact_tie = (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5;
        if exact_tie {
            write!(f, "{:.2}", scaled.round() / 100.0)
        } else {
            write!(f, "{value:.2}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    #[test]
    fn empty_scene_has_empty_report() {
        assert_eq!(scene_report(&Scene::new()), "");
    }

    #[test]
    fn partial_scene_lists_points_only() {
        let scene = Scene::from_points(&[Point::new(1.0, 2.346)]).expect("valid preset");
        assert_eq!(scene_report(&scene), "Points:\nPoint A: (1.00, 2.35)\n");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        let scene = Scene::from_points(&[Point::new(10.125, 0.375), Point::new(-10.125, 2.5)])
            .expect("valid preset");
        assert_eq!(
            scene_report(&scene),
            "Points:\nPoint A: (10.13, 0.38)\nPoint B: (-10.13, 2.50)\n"
        );
    }

    #[test]
    fn near_ties_keep_their_binary_value() {
        assert_eq!(Hundredths(1.005).to_string(), "1.00");
        assert_eq!(Hundredths(0.125).to_string(), "0.13");
        assert_eq!(Hundredths(-0.375).to_string(), "-0.38");
        assert_eq!(Hundredths(7.0).to_string(), "7.00");
    }

    #[test]
    fn complete_scene_lists_intersections() {
        let scene = Scene::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(8.0, 0.0),
            Point::new(13.0, 0.0),
        ])
        .expect("valid preset");
        assert_eq!(
            scene_report(&scene),
            "Points:\n\
             Point A: (0.00, 0.00)\n\
             Point B: (5.00, 0.00)\n\
             Point C: (8.00, 0.00)\n\
             Point D: (13.00, 0.00)\n\
             Intersections:\n\
             Intersection 1: (4.00, 3.00)\n\
             Intersection 2: (4.00, -3.00)\n"
        );
    }

    #[test]
    fn disjoint_circles_omit_intersections() {
        let scene = Scene::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(25.0, 0.0),
        ])
        .expect("valid preset");
        assert!(!scene_report(&scene).contains("Intersections"));
    }
}
