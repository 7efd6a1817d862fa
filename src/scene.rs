//! Scene model: the four user-placed points and the geometry derived from them.
//!
//! Points are placed one at a time and keep the label of their placement slot
//! (A, B, C, D) for their whole lifetime. Circles and intersections are never
//! cached; every query derives them from the current point positions.

use std::fmt;

use crate::geom::{Circle, Point};
use crate::intersect::{Intersections, intersect_circles};

/// Number of points that completes a scene.
pub const POINT_COUNT: usize = 4;

/// Stable reference to a placed point.
///
/// Ids are placement slots, so a point keeps its id (and label) while dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(usize);

impl PointId {
    /// Placement index (0 for the first point).
    pub fn index(self) -> usize {
        self.0
    }

    /// Role label assigned at placement time.
    pub fn label(self) -> PointLabel {
        PointLabel::from_index(self.0)
    }
}

/// Fixed role of a point, derived from its placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointLabel {
    /// Center of the first circle.
    A,
    /// Rim point of the first circle.
    B,
    /// Center of the second circle.
    C,
    /// Rim point of the second circle.
    D,
}

impl PointLabel {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Self::A,
            1 => Self::B,
            2 => Self::C,
            _ => Self::D,
        }
    }

    /// Single-letter label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when building a scene from a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// More than four points were supplied.
    TooManyPoints {
        /// Number of points supplied.
        count: usize,
    },
    /// A point has a NaN or infinite coordinate.
    NonFinite {
        /// Index of the offending point.
        index: usize,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPoints { count } => {
                write!(f, "a scene holds at most {POINT_COUNT} points, got {count}")
            }
            Self::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Geometry derived from a complete scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneGeometry {
    /// Circle (A, |AB|) and circle (C, |CD|), present only for a complete scene.
    pub circles: Option<[Circle; 2]>,
    /// Intersections of the two circles.
    pub intersections: Intersections,
}

impl SceneGeometry {
    /// Geometry of an incomplete scene.
    pub const fn empty() -> Self {
        Self {
            circles: None,
            intersections: Intersections::Empty,
        }
    }
}

/// The set of placed points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    points: Vec<Point>,
    generation: u64,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from up to four points, placed in order.
    pub fn from_points(points: &[Point]) -> Result<Self, SceneError> {
        if points.len() > POINT_COUNT {
            return Err(SceneError::TooManyPoints {
                count: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(SceneError::NonFinite { index });
        }
        Ok(Self {
            points: points.to_vec(),
            generation: 0,
        })
    }

    /// Placed points in placement order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Placed points with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| (PointId(index), *point))
    }

    /// Number of placed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether no points are placed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether all four points are placed.
    pub fn is_complete(&self) -> bool {
        self.points.len() == POINT_COUNT
    }

    /// Mutation counter, bumped by every change to the point set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Look up a placed point.
    pub fn point(&self, id: PointId) -> Option<Point> {
        self.points.get(id.0).copied()
    }

    /// Place a new point. Returns false once the scene is complete.
    pub fn add_point(&mut self, x: f64, y: f64) -> bool {
        if self.is_complete() {
            return false;
        }
        let point = Point::new(x, y);
        if !point.is_finite() {
            tracing::warn!(x, y, "ignoring non-finite point placement");
            return false;
        }
        self.points.push(point);
        self.generation += 1;
        tracing::debug!(
            label = %PointId(self.points.len() - 1).label(),
            x,
            y,
            "placed point"
        );
        true
    }

    /// Move a placed point. Only a complete scene accepts moves.
    ///
    /// Returns whether the point changed.
    pub fn move_point(&mut self, id: PointId, x: f64, y: f64) -> bool {
        if !self.is_complete() {
            return false;
        }
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!(x, y, "ignoring non-finite point move");
            return false;
        }
        let Some(point) = self.points.get_mut(id.0) else {
            return false;
        };
        *point = Point::new(x, y);
        self.generation += 1;
        true
    }

    /// First point (in placement order) within `tolerance` of `(x, y)` on both axes.
    pub fn find_point_near(&self, x: f64, y: f64, tolerance: f64) -> Option<PointId> {
        self.points
            .iter()
            .position(|point| (point.x - x).abs() < tolerance && (point.y - y).abs() < tolerance)
            .map(PointId)
    }

    /// The two circles (A, |AB|) and (C, |CD|) of a complete scene.
    pub fn circles(&self) -> Option<[Circle; 2]> {
        let [a, b, c, d] = <[Point; POINT_COUNT]>::try_from(self.points.as_slice()).ok()?;
        Some([Circle::through(a, b), Circle::through(c, d)])
    }

    /// Derive circles and intersections from the current points.
    pub fn recompute(&self) -> SceneGeometry {
        let Some([first, second]) = self.circles() else {
            return SceneGeometry::empty();
        };
        let intersections = intersect_circles(&first, &second);
        tracing::trace!(
            r1 = first.radius,
            r2 = second.radius,
            intersections = intersections.len(),
            "recomputed scene geometry"
        );
        SceneGeometry {
            circles: Some([first, second]),
            intersections,
        }
    }

    /// Remove all points.
    pub fn reset(&mut self) {
        self.points.clear();
        self.generation += 1;
        tracing::debug!("scene reset");
    }
}
