use tracing::trace;

use crate::error::{Result, TessellationError};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::{strip_triangles, ExtrudeOptions, SweepShape, Triangle3, TriangleMesh};

use super::{Material, Target};

/// All geometry drawn with one material.
#[derive(Debug, Clone)]
pub struct MeshBatch {
    pub material: Material,
    pub mesh: TriangleMesh,
}

/// A [`Target`] that collects geometry into one triangle mesh per material.
///
/// Batches keep the order in which their materials were first drawn.
#[derive(Debug, Clone, Default)]
pub struct MeshTarget {
    batches: Vec<MeshBatch>,
}

impl MeshTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn batches(&self) -> &[MeshBatch] {
        &self.batches
    }

    /// The batch for the material called `name`, if anything was drawn with it.
    #[must_use]
    pub fn batch(&self, name: &str) -> Option<&MeshBatch> {
        self.batches.iter().find(|b| b.material.name == name)
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.batches.iter().map(|b| b.mesh.triangle_count()).sum()
    }

    fn mesh_for(&mut self, material: &Material) -> &mut TriangleMesh {
        let index = match self.batches.iter().position(|b| &b.material == material) {
            Some(i) => i,
            None => {
                self.batches.push(MeshBatch {
                    material: material.clone(),
                    mesh: TriangleMesh::default(),
                });
                self.batches.len() - 1
            }
        };
        &mut self.batches[index].mesh
    }
}

fn face_normal(a: &Point3, b: &Point3, c: &Point3) -> Option<Vector3> {
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    (len > TOLERANCE).then(|| n / len)
}

fn check_tex_coords(vertices: usize, tex_coords: &[Point2]) -> Result<()> {
    if tex_coords.len() == vertices {
        Ok(())
    } else {
        Err(TessellationError::InvalidInput(format!(
            "{} texture coordinates for {vertices} vertices",
            tex_coords.len()
        ))
        .into())
    }
}

impl Target for MeshTarget {
    #[allow(clippy::cast_possible_truncation)]
    fn draw_triangles(
        &mut self,
        material: &Material,
        triangles: &[Triangle3],
        tex_coords: &[Point2],
    ) -> Result<()> {
        check_tex_coords(triangles.len() * 3, tex_coords)?;
        let mesh = self.mesh_for(material);
        for (tri, uvs) in triangles.iter().zip(tex_coords.chunks_exact(3)) {
            let Some(normal) = face_normal(&tri[0], &tri[1], &tri[2]) else {
                continue;
            };
            let base = mesh.vertices.len() as u32;
            mesh.vertices.extend_from_slice(tri);
            mesh.normals.extend_from_slice(&[normal; 3]);
            mesh.uvs.extend_from_slice(uvs);
            mesh.indices.push([base, base + 1, base + 2]);
        }
        trace!(material = %material.name, triangles = triangles.len(), "draw triangles");
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw_triangle_strip(
        &mut self,
        material: &Material,
        strip: &[Point3],
        tex_coords: &[Point2],
    ) -> Result<()> {
        check_tex_coords(strip.len(), tex_coords)?;
        let smooth = material.smooth;
        let mesh = self.mesh_for(material);

        if smooth {
            // Shared vertices with area-weighted normals.
            let base = mesh.vertices.len();
            let mut normals = vec![Vector3::zeros(); strip.len()];
            let mut indices = Vec::new();
            for [a, b, c] in strip_triangles(strip.len()) {
                let (pa, pb, pc) = (strip[a as usize], strip[b as usize], strip[c as usize]);
                let n = (pb - pa).cross(&(pc - pa));
                if n.norm() < TOLERANCE {
                    continue;
                }
                for i in [a, b, c] {
                    normals[i as usize] += n;
                }
                indices.push([a + base as u32, b + base as u32, c + base as u32]);
            }
            mesh.vertices.extend_from_slice(strip);
            mesh.normals
                .extend(normals.into_iter().map(|n| if n.norm() < TOLERANCE { n } else { n.normalize() }));
            mesh.uvs.extend_from_slice(tex_coords);
            mesh.indices.extend(indices);
        } else {
            for [a, b, c] in strip_triangles(strip.len()) {
                let (a, b, c) = (a as usize, b as usize, c as usize);
                let Some(normal) = face_normal(&strip[a], &strip[b], &strip[c]) else {
                    continue;
                };
                let base = mesh.vertices.len() as u32;
                mesh.vertices.extend_from_slice(&[strip[a], strip[b], strip[c]]);
                mesh.normals.extend_from_slice(&[normal; 3]);
                mesh.uvs.extend_from_slice(&[tex_coords[a], tex_coords[b], tex_coords[c]]);
                mesh.indices.push([base, base + 1, base + 2]);
            }
        }
        trace!(material = %material.name, vertices = strip.len(), smooth, "draw triangle strip");
        Ok(())
    }

    fn draw_extruded_shape(
        &mut self,
        material: &Material,
        shape: &[Point2],
        path: &[Point3],
        up: &[Vector3],
        options: ExtrudeOptions,
    ) -> Result<()> {
        let swept = SweepShape::new(shape, path, up, options).execute()?;
        self.mesh_for(material).append(&swept);
        trace!(material = %material.name, path_points = path.len(), "draw extruded shape");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tessellation::ring_strip;

    fn square_ring(z: f64) -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(0.0, 1.0, z),
        ]
    }

    #[test]
    fn batches_by_material() {
        let glass = Material::new("glass", [0.5, 0.5, 1.0, 0.3]);
        let frame = Material::new("frame", [1.0; 4]);
        let tri = [Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        let uv = [Point2::origin(); 3];

        let mut target = MeshTarget::new();
        target.draw_triangles(&glass, &[tri], &uv).unwrap();
        target.draw_triangles(&frame, &[tri], &uv).unwrap();
        target.draw_triangles(&glass, &[tri], &uv).unwrap();

        assert_eq!(target.batches().len(), 2);
        assert_eq!(target.batch("glass").unwrap().mesh.triangle_count(), 2);
        assert_eq!(target.triangle_count(), 3);
    }

    #[test]
    fn tex_coord_count_is_checked() {
        let tri = [Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        let mut target = MeshTarget::new();
        let res = target.draw_triangles(&Material::new("m", [1.0; 4]), &[tri], &[Point2::origin()]);
        assert!(res.is_err());
    }

    #[test]
    fn smooth_strip_shares_vertices() {
        let strip = ring_strip(&square_ring(0.0), &square_ring(1.0));
        let uv = vec![Point2::origin(); strip.len()];
        let flat = Material::new("flat", [1.0; 4]);
        let smooth = flat.make_smooth();

        let mut target = MeshTarget::new();
        target.draw_triangle_strip(&flat, &strip, &uv).unwrap();
        target.draw_triangle_strip(&smooth, &strip, &uv).unwrap();

        let flat_mesh = &target.batches()[0].mesh;
        let smooth_mesh = &target.batches()[1].mesh;
        assert_eq!(flat_mesh.triangle_count(), 8);
        assert_eq!(smooth_mesh.triangle_count(), 8);
        assert_eq!(flat_mesh.vertices.len(), 24);
        assert_eq!(smooth_mesh.vertices.len(), strip.len());
        assert!((smooth_mesh.surface_area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn extruded_shape_is_swept() {
        let profile = [
            Point2::new(-0.1, -0.1),
            Point2::new(0.1, -0.1),
            Point2::new(0.1, 0.1),
            Point2::new(-0.1, 0.1),
        ];
        let path = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let mut target = MeshTarget::new();
        target
            .draw_extruded_shape(
                &Material::new("bar", [1.0; 4]),
                &profile,
                &path,
                &[Vector3::z()],
                ExtrudeOptions::default(),
            )
            .unwrap();
        assert_eq!(target.triangle_count(), 8);
    }
}
