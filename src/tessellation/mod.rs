mod cdt;
mod earcut;
mod strip;
mod sweep;

pub use cdt::CdtKernel;
pub use earcut::EarcutKernel;
pub use strip::{ring_strip, strip_triangles};
pub use sweep::{ExtrudeOptions, SweepShape};

use crate::error::Result;
use crate::geometry::Outline;
use crate::math::{Point2, Point3, Vector3};
use crate::operations::offset::InsetPolygon2D;

/// A 2D triangle, counter-clockwise.
pub type Triangle2 = [Point2; 3];

/// A 3D triangle.
pub type Triangle3 = [Point3; 3];

/// Polygon triangulation and buffering primitives used by window rendering.
///
/// Implementations must be deterministic: the same input always yields the
/// same triangles in the same order.
pub trait GeometryKernel: Send + Sync {
    /// Triangulates the area inside `outer` and outside every ring in `holes`.
    ///
    /// Rings are given without a closing duplicate vertex. Returned triangles
    /// are counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError` if the polygon cannot be triangulated.
    fn triangulate(&self, outer: &[Point2], holes: &[Vec<Point2>]) -> Result<Vec<Triangle2>>;

    /// Shrinks `outline` by `distance`, possibly splitting it into several loops.
    ///
    /// # Errors
    ///
    /// Returns `OffsetError` if the outline collapses.
    fn buffer_inward(&self, outline: &Outline, distance: f64) -> Result<Vec<Outline>> {
        InsetPolygon2D::new(outline.vertices().to_vec(), distance).execute()
    }
}

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends another mesh, offsetting its indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn append(&mut self, other: &TriangleMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|[a, b, c]| [a + base, b + base, c + base]));
    }

    /// Sum of triangle areas.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                );
                (b - a).cross(&(c - a)).norm() * 0.5
            })
            .sum()
    }
}

/// Reorders a 2D triangle to counter-clockwise.
pub(crate) fn orient_ccw(tri: Triangle2) -> Triangle2 {
    let [a, b, c] = tri;
    let cross = (b - a).perp(&(c - a));
    if cross < 0.0 {
        [a, c, b]
    } else {
        tri
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn orient_ccw_flips_clockwise() {
        let cw = [Point2::new(0.0, 0.0), Point2::new(0.0, 1.0), Point2::new(1.0, 0.0)];
        let [a, b, c] = orient_ccw(cw);
        assert!((b - a).perp(&(c - a)) > 0.0);
    }

    #[test]
    fn append_offsets_indices() {
        let tri = TriangleMesh {
            vertices: vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            normals: vec![Vector3::z(); 3],
            uvs: vec![Point2::origin(); 3],
            indices: vec![[0, 1, 2]],
        };
        let mut mesh = tri.clone();
        mesh.append(&tri);
        assert_eq!(mesh.indices[1], [3, 4, 5]);
        assert!((mesh.surface_area() - 1.0).abs() < 1e-12);
    }
}
