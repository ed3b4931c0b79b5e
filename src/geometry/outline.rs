use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_ring_dist;
use crate::math::intersect_2d::{segment_ring_intersections_2d, segment_segment_intersect_2d};
use crate::math::polygon_2d::{
    centroid_2d, dedup_ring, diameter_2d, is_simple_2d, point_in_polygon_2d, signed_area_2d,
};
use crate::math::{Point2, POINT_TOLERANCE, TOLERANCE};

use super::{Aabb2, LineSegment2};

/// A simple closed 2D polygon in wall-local coordinates.
///
/// Vertices are stored without the closing duplicate; the edge from the last
/// vertex back to the first is implied. Window shapes are always built
/// counter-clockwise, but orientation is not forced here so that callers can
/// check it as an invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    vertices: Vec<Point2>,
    centroid: Point2,
}

impl Outline {
    /// Creates an outline from a vertex ring.
    ///
    /// Consecutive duplicates and a repeated closing vertex are removed.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than 3 distinct vertices
    /// remain or the enclosed area is zero.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        let vertices = dedup_ring(&points, POINT_TOLERANCE);
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "outline needs at least 3 distinct vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        let centroid = centroid_2d(&vertices)
            .ok_or_else(|| GeometryError::Degenerate("outline has zero area".to_owned()))?;
        Ok(Self { vertices, centroid })
    }

    /// The vertex ring, without the closing duplicate.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// The vertex ring with the first vertex repeated at the end.
    #[must_use]
    pub fn closed_vertices(&self) -> Vec<Point2> {
        let mut closed = self.vertices.clone();
        closed.push(self.vertices[0]);
        closed
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: an outline has at least 3 vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the edges in ring order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment2> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| LineSegment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    #[must_use]
    pub fn centroid(&self) -> Point2 {
        self.centroid
    }

    /// Maximum distance between any two vertices.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        diameter_2d(&self.vertices)
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        // Non-empty by construction.
        Aabb2::from_points(&self.vertices).unwrap_or(Aabb2 {
            min: self.centroid,
            max: self.centroid,
        })
    }

    #[must_use]
    pub fn is_simple(&self) -> bool {
        is_simple_2d(&self.vertices)
    }

    /// Returns `true` if the point lies strictly inside (boundary points are ambiguous).
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_in_polygon_2d(point, &self.vertices)
    }

    /// Distance from a point to the nearest edge.
    #[must_use]
    pub fn distance_to_boundary(&self, point: &Point2) -> f64 {
        point_to_ring_dist(point, &self.vertices)
    }

    /// Returns a copy scaled by `factor` about the centroid.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        let c = self.centroid;
        Self {
            vertices: self.vertices.iter().map(|v| c + (v - c) * factor).collect(),
            centroid: c,
        }
    }

    /// Points where `segment` crosses the outline boundary, in edge order.
    ///
    /// A crossing exactly at a vertex is reported once.
    #[must_use]
    pub fn intersection_positions(&self, segment: &LineSegment2) -> Vec<Point2> {
        let mut result: Vec<Point2> = Vec::new();
        for (pt, _) in segment_ring_intersections_2d(&segment.p1, &segment.p2, &self.vertices) {
            if !result.iter().any(|r| (r - pt).norm() < POINT_TOLERANCE) {
                result.push(pt);
            }
        }
        result
    }

    /// Outline edges crossed by `segment`, in edge order.
    #[must_use]
    pub fn intersection_segments(&self, segment: &LineSegment2) -> Vec<LineSegment2> {
        self.edges()
            .filter(|e| segment_segment_intersect_2d(&segment.p1, &segment.p2, &e.p1, &e.p2).is_some())
            .collect()
    }

    /// Index of the vertex equal to `point` (within tolerance).
    #[must_use]
    pub fn index_of(&self, point: &Point2) -> Option<usize> {
        self.vertices.iter().position(|v| (v - point).norm() < POINT_TOLERANCE)
    }

    /// Index of the vertex nearest to `point`.
    #[must_use]
    pub fn closest_vertex_index(&self, point: &Point2) -> usize {
        let mut best = 0;
        let mut best_d = f64::MAX;
        for (i, v) in self.vertices.iter().enumerate() {
            let d = (v - point).norm_squared();
            if d < best_d - TOLERANCE {
                best = i;
                best_d = d;
            }
        }
        best
    }
}
