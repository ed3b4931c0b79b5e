use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::LineSegment2;

/// Centerline of one interior frame bar (mullion).
///
/// Always holds at least two points: a straight grid divider, a radial
/// spoke, or a region border.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePath {
    points: Vec<Point2>,
}

impl FramePath {
    /// Creates a path from an ordered point list.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for fewer than 2 points.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "frame path needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Total length along the path.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

impl From<LineSegment2> for FramePath {
    fn from(segment: LineSegment2) -> Self {
        Self {
            points: vec![segment.p1, segment.p2],
        }
    }
}
