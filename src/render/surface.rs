use crate::geometry::{FramePath, Outline};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::{Triangle2, Triangle3};

/// Maps wall-local 2D coordinates onto a wall in 3D world space.
///
/// Wall-local `x` runs along the wall and `y` runs up.
pub trait WallSurface {
    /// Outward unit normal of the wall at a wall-local point.
    fn normal_at(&self, point: &Point2) -> Vector3;

    fn convert_to_3d(&self, point: &Point2) -> Point3;

    /// Texture coordinate shared by all geometry on this wall.
    fn tex_coords_global(&self, point: &Point3) -> Point2;

    fn convert_polygon_to_3d(&self, outline: &Outline) -> Vec<Point3> {
        outline.vertices().iter().map(|p| self.convert_to_3d(p)).collect()
    }

    fn convert_polyline_to_3d(&self, path: &FramePath) -> Vec<Point3> {
        path.points().iter().map(|p| self.convert_to_3d(p)).collect()
    }

    fn convert_triangle_to_3d(&self, triangle: &Triangle2) -> Triangle3 {
        triangle.map(|p| self.convert_to_3d(&p))
    }
}

/// A vertical planar wall in a Z-up world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarWall {
    origin: Point3,
    along: Vector3,
}

impl PlanarWall {
    /// Creates a wall through `origin` running along the horizontal part of
    /// `direction`.
    ///
    /// Returns `None` if `direction` is vertical or zero.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Option<Self> {
        let horizontal = Vector3::new(direction.x, direction.y, 0.0);
        let len = horizontal.norm();
        if len < TOLERANCE {
            return None;
        }
        Some(Self {
            origin,
            along: horizontal / len,
        })
    }

    /// The wall in the world XZ plane facing -Y.
    #[must_use]
    pub fn xz() -> Self {
        Self {
            origin: Point3::origin(),
            along: Vector3::x(),
        }
    }
}

impl WallSurface for PlanarWall {
    fn normal_at(&self, _point: &Point2) -> Vector3 {
        self.along.cross(&Vector3::z())
    }

    fn convert_to_3d(&self, point: &Point2) -> Point3 {
        self.origin + self.along * point.x + Vector3::z() * point.y
    }

    fn tex_coords_global(&self, point: &Point3) -> Point2 {
        Point2::new(self.along.dot(&point.coords), point.z)
    }
}
