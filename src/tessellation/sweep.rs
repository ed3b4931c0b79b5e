use crate::error::{Result, TessellationError};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

use super::TriangleMesh;

/// Upper bound for the miter stretch at path corners.
const MITER_LIMIT: f64 = 2.0;

/// Whether to close the ends of an extruded shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtrudeOptions {
    pub start_cap: bool,
    pub end_cap: bool,
}

impl ExtrudeOptions {
    /// Both ends capped.
    #[must_use]
    pub fn capped() -> Self {
        Self {
            start_cap: true,
            end_cap: true,
        }
    }
}

/// Sweeps a 2D cross-section along a 3D polyline.
///
/// The profile's `x` axis maps to the side direction and its `y` axis to the
/// supplied up vector at each path point. The profile must be convex and
/// counter-clockwise; side faces then point outward. Corners are mitered,
/// with the stretch clamped at [`MITER_LIMIT`].
#[derive(Debug)]
pub struct SweepShape<'a> {
    profile: &'a [Point2],
    path: &'a [Point3],
    up: &'a [Vector3],
    options: ExtrudeOptions,
}

impl<'a> SweepShape<'a> {
    /// `up` holds either one vector per path point or a single vector for all.
    #[must_use]
    pub fn new(profile: &'a [Point2], path: &'a [Point3], up: &'a [Vector3], options: ExtrudeOptions) -> Self {
        Self {
            profile,
            path,
            up,
            options,
        }
    }

    /// Executes the sweep.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidInput`] for a profile with fewer
    /// than 3 points, a path with fewer than 2 points, a zero-length path
    /// segment, a mismatched up-vector count, or an up vector parallel to
    /// the path.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let n = self.path.len();
        if self.profile.len() < 3 {
            return Err(TessellationError::InvalidInput("sweep profile needs 3 points".into()).into());
        }
        if n < 2 {
            return Err(TessellationError::InvalidInput("sweep path needs 2 points".into()).into());
        }
        if self.up.len() != n && self.up.len() != 1 {
            return Err(TessellationError::InvalidInput(format!(
                "{} up vectors for {n} path points",
                self.up.len()
            ))
            .into());
        }

        let mut segments = Vec::with_capacity(n - 1);
        for w in self.path.windows(2) {
            let d = w[1] - w[0];
            let len = d.norm();
            if len < TOLERANCE {
                return Err(TessellationError::InvalidInput("zero-length sweep segment".into()).into());
            }
            segments.push(d / len);
        }

        let mut rings: Vec<Vec<Point3>> = Vec::with_capacity(n);
        let mut tangents = Vec::with_capacity(n);
        for i in 0..n {
            let d_in = segments[i.saturating_sub(1)];
            let d_out = segments[i.min(n - 2)];
            let sum = d_in + d_out;
            let tangent = if sum.norm() < TOLERANCE { d_out } else { sum.normalize() };

            let up_hint = self.up[if self.up.len() == 1 { 0 } else { i }];
            let up = up_hint - tangent * up_hint.dot(&tangent);
            if up.norm() < TOLERANCE {
                return Err(
                    TessellationError::InvalidInput(format!("up vector parallel to path at {i}")).into()
                );
            }
            let up = up.normalize();
            let side = up.cross(&tangent);

            let cos_half = tangent.dot(&d_out).max(1.0 / MITER_LIMIT);
            let bend = d_out - d_in;
            let bend = if bend.norm() < TOLERANCE { None } else { Some(bend.normalize()) };

            let ring = self
                .profile
                .iter()
                .map(|q| {
                    let mut offset = side * q.x + up * q.y;
                    if let Some(b) = bend {
                        offset += b * (offset.dot(&b) * (1.0 / cos_half - 1.0));
                    }
                    self.path[i] + offset
                })
                .collect();
            rings.push(ring);
            tangents.push(tangent);
        }

        let mut mesh = TriangleMesh::default();
        let m = self.profile.len();
        let mut length = 0.0;
        for i in 0..n - 1 {
            let next_length = length + (self.path[i + 1] - self.path[i]).norm();
            let (a, b) = (&rings[i], &rings[i + 1]);
            for k in 0..m {
                let k1 = (k + 1) % m;
                #[allow(clippy::cast_precision_loss)]
                let (v0, v1) = (k as f64 / m as f64, (k + 1) as f64 / m as f64);
                push_triangle(
                    &mut mesh,
                    [a[k], b[k1], b[k]],
                    [Point2::new(length, v0), Point2::new(next_length, v1), Point2::new(next_length, v0)],
                );
                push_triangle(
                    &mut mesh,
                    [a[k], a[k1], b[k1]],
                    [Point2::new(length, v0), Point2::new(length, v1), Point2::new(next_length, v1)],
                );
            }
            length = next_length;
        }

        if self.options.start_cap {
            push_cap(&mut mesh, self.profile, &rings[0], true);
        }
        if self.options.end_cap {
            push_cap(&mut mesh, self.profile, &rings[n - 1], false);
        }

        Ok(mesh)
    }
}

/// Appends a flat-shaded triangle.
#[allow(clippy::cast_possible_truncation)]
fn push_triangle(mesh: &mut TriangleMesh, tri: [Point3; 3], uvs: [Point2; 3]) {
    let normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
    let normal = if normal.norm() < TOLERANCE {
        Vector3::zeros()
    } else {
        normal.normalize()
    };
    let base = mesh.vertices.len() as u32;
    mesh.vertices.extend_from_slice(&tri);
    mesh.normals.extend_from_slice(&[normal; 3]);
    mesh.uvs.extend_from_slice(&uvs);
    mesh.indices.push([base, base + 1, base + 2]);
}

/// Fan-triangulates a profile ring. The start cap is reversed to face backward.
fn push_cap(mesh: &mut TriangleMesh, profile: &[Point2], ring: &[Point3], reverse: bool) {
    for k in 1..ring.len() - 1 {
        let (tri, uvs) = if reverse {
            ([ring[0], ring[k + 1], ring[k]], [profile[0], profile[k + 1], profile[k]])
        } else {
            ([ring[0], ring[k], ring[k + 1]], [profile[0], profile[k], profile[k + 1]])
        };
        push_triangle(mesh, tri, uvs);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_profile() -> Vec<Point2> {
        vec![
            Point2::new(-0.5, -0.5),
            Point2::new(0.5, -0.5),
            Point2::new(0.5, 0.5),
            Point2::new(-0.5, 0.5),
        ]
    }

    #[test]
    fn straight_box_with_caps() {
        let profile = unit_profile();
        let path = [Point3::origin(), Point3::new(2.0, 0.0, 0.0)];
        let up = [Vector3::z()];
        let mesh = SweepShape::new(&profile, &path, &up, ExtrudeOptions::capped()).execute().unwrap();
        // 4 sides x 2 + 2 caps x 2
        assert_eq!(mesh.triangle_count(), 12);
        assert!((mesh.surface_area() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn side_normals_point_outward() {
        let profile = unit_profile();
        let path = [Point3::origin(), Point3::new(0.0, 0.0, 3.0)];
        let up = [Vector3::y()];
        let mesh = SweepShape::new(&profile, &path, &up, ExtrudeOptions::capped()).execute().unwrap();
        let axis_mid = Point3::new(0.0, 0.0, 1.5);
        for tri in &mesh.indices {
            let a = mesh.vertices[tri[0] as usize];
            let b = mesh.vertices[tri[1] as usize];
            let c = mesh.vertices[tri[2] as usize];
            let centroid = Point3::from((a.coords + b.coords + c.coords) / 3.0);
            let n = mesh.normals[tri[0] as usize];
            assert!(n.dot(&(centroid - axis_mid)) > 0.0, "inward face at {centroid}");
        }
    }

    #[test]
    fn miter_corner_keeps_width() {
        let profile = unit_profile();
        let path = [Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
        let up = [Vector3::z()];
        let mesh = SweepShape::new(&profile, &path, &up, ExtrudeOptions::default()).execute().unwrap();
        assert_eq!(mesh.triangle_count(), 16);
        // The corner ring reaches out to the miter point (1.5, -0.5).
        assert!(mesh
            .vertices
            .iter()
            .any(|v| (v.x - 1.5).abs() < 1e-9 && (v.y + 0.5).abs() < 1e-9));
    }

    #[test]
    fn up_count_mismatch_is_rejected() {
        let profile = unit_profile();
        let path = [Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let up = [Vector3::z(), Vector3::z()];
        assert!(SweepShape::new(&profile, &path, &up, ExtrudeOptions::default()).execute().is_err());
    }
}
