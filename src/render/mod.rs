//! Rendering feed: wall-surface mapping, draw-call sink and materials.

mod mesh_target;
mod surface;
mod texcoord;

pub use mesh_target::{MeshBatch, MeshTarget};
pub use surface::{PlanarWall, WallSurface};
pub use texcoord::{strip_wall_tex_coords, triangle_tex_coords};

pub use crate::tessellation::ExtrudeOptions;

use crate::error::Result;
use crate::math::{Point2, Point3, Vector3};
use crate::tessellation::Triangle3;

/// Surface appearance handed through to the drawing sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// Linear RGBA.
    pub color: [f32; 4],
    /// Whether normals should be averaged across shared vertices.
    pub smooth: bool,
}

impl Material {
    #[must_use]
    pub fn new(name: impl Into<String>, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            color,
            smooth: false,
        }
    }

    /// Returns a copy with smooth shading enabled.
    #[must_use]
    pub fn make_smooth(&self) -> Self {
        Self {
            smooth: true,
            ..self.clone()
        }
    }
}

/// Receives the 3D geometry of rendered windows.
pub trait Target {
    /// Draws independent triangles. `tex_coords` holds one entry per vertex.
    ///
    /// # Errors
    ///
    /// Implementations report rejected input through `FenestraError`.
    fn draw_triangles(
        &mut self,
        material: &Material,
        triangles: &[Triangle3],
        tex_coords: &[Point2],
    ) -> Result<()>;

    /// Draws a triangle strip. `tex_coords` holds one entry per vertex.
    ///
    /// # Errors
    ///
    /// Implementations report rejected input through `FenestraError`.
    fn draw_triangle_strip(
        &mut self,
        material: &Material,
        strip: &[Point3],
        tex_coords: &[Point2],
    ) -> Result<()>;

    /// Sweeps `shape` along `path`, orienting its `y` axis along `up`.
    ///
    /// # Errors
    ///
    /// Implementations report rejected input through `FenestraError`.
    fn draw_extruded_shape(
        &mut self,
        material: &Material,
        shape: &[Point2],
        path: &[Point3],
        up: &[Vector3],
        options: ExtrudeOptions,
    ) -> Result<()>;
}

/// A buffered call to a [`Target`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Triangles {
        material: Material,
        triangles: Vec<Triangle3>,
        tex_coords: Vec<Point2>,
    },
    TriangleStrip {
        material: Material,
        strip: Vec<Point3>,
        tex_coords: Vec<Point2>,
    },
    ExtrudedShape {
        material: Material,
        shape: Vec<Point2>,
        path: Vec<Point3>,
        up: Vec<Vector3>,
        options: ExtrudeOptions,
    },
}

impl DrawCall {
    /// Replays this call on `target`.
    ///
    /// # Errors
    ///
    /// Propagates the target's error.
    pub fn emit(&self, target: &mut dyn Target) -> Result<()> {
        match self {
            Self::Triangles {
                material,
                triangles,
                tex_coords,
            } => target.draw_triangles(material, triangles, tex_coords),
            Self::TriangleStrip {
                material,
                strip,
                tex_coords,
            } => target.draw_triangle_strip(material, strip, tex_coords),
            Self::ExtrudedShape {
                material,
                shape,
                path,
                up,
                options,
            } => target.draw_extruded_shape(material, shape, path, up, *options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_smooth_keeps_name_and_color() {
        let m = Material::new("frame", [1.0, 0.5, 0.25, 1.0]);
        let s = m.make_smooth();
        assert!(s.smooth && !m.smooth);
        assert_eq!(s.name, m.name);
        assert_eq!(s.color, m.color);
    }
}
