use crate::math::{Point2, Vector2, TOLERANCE};

/// A straight 2D line segment from `p1` to `p2`.
///
/// Also used for region borders: the segment keeps the orientation of the
/// counter-clockwise outline edge it was taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment2 {
    pub p1: Point2,
    pub p2: Point2,
}

impl LineSegment2 {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.p1, &self.p2)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// Unit direction from `p1` to `p2`, or `None` for a zero-length segment.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2> {
        let d = self.p2 - self.p1;
        let len = d.norm();
        (len > TOLERANCE).then(|| d / len)
    }

    /// Unit normal pointing to the right of `p1 -> p2`.
    ///
    /// For an edge of a counter-clockwise outline this points outward.
    #[must_use]
    pub fn right_normal(&self) -> Option<Vector2> {
        self.direction().map(|d| Vector2::new(d.y, -d.x))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_and_length() {
        let s = LineSegment2::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert!((s.length() - 5.0).abs() < 1e-12);
        assert!((s.midpoint() - Point2::new(1.5, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn right_normal_of_leftward_edge_points_up() {
        // Top edge of a CCW box runs right-to-left; outward is +y.
        let s = LineSegment2::new(Point2::new(1.0, 1.0), Point2::new(0.0, 1.0));
        let n = s.right_normal().unwrap();
        assert!((n.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_has_no_direction() {
        let p = Point2::new(1.0, 1.0);
        assert!(LineSegment2::new(p, p).direction().is_none());
    }
}
