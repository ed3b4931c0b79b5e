use tracing::debug;

use crate::error::Result;
use crate::geometry::{FramePath, Outline};
use crate::math::{Point2, Point3, Vector3};
use crate::render::{
    strip_wall_tex_coords, triangle_tex_coords, DrawCall, ExtrudeOptions, Material, WallSurface,
};
use crate::tessellation::{ring_strip, GeometryKernel, Triangle2, Triangle3};
use crate::window::FrameDimensions;

/// Turns a window's 2D outline, pane and frame paths into 3D draw calls.
///
/// Nothing is drawn here: the calls are returned so that a window is only
/// emitted once every piece of it has been built.
#[derive(Debug)]
pub struct LiftWindow<'a> {
    outline: &'a Outline,
    pane: &'a Outline,
    frame_paths: &'a [FramePath],
    dimensions: &'a FrameDimensions,
    pane_material: &'a Material,
    frame_material: &'a Material,
    smooth_sides: bool,
}

impl<'a> LiftWindow<'a> {
    #[must_use]
    pub fn new(
        outline: &'a Outline,
        pane: &'a Outline,
        frame_paths: &'a [FramePath],
        dimensions: &'a FrameDimensions,
        pane_material: &'a Material,
        frame_material: &'a Material,
    ) -> Self {
        Self {
            outline,
            pane,
            frame_paths,
            dimensions,
            pane_material,
            frame_material,
            smooth_sides: false,
        }
    }

    /// Shades the inner sides of the outer frame smoothly (for round windows).
    #[must_use]
    pub fn with_smooth_sides(mut self, smooth: bool) -> Self {
        self.smooth_sides = smooth;
        self
    }

    /// Builds the draw calls: pane, outer frame front, outer frame sides and
    /// one extruded bar per frame path, in that order.
    ///
    /// # Errors
    ///
    /// - `TessellationError` if the pane or frame cannot be triangulated
    /// - `OffsetError` if the outer frame buffer collapses
    pub fn execute(&self, surface: &dyn WallSurface, kernel: &dyn GeometryKernel) -> Result<Vec<DrawCall>> {
        let dims = self.dimensions;
        let normal = surface.normal_at(&self.outline.centroid());
        let to_back = normal * -dims.depth;
        let to_outer_frame = normal * (dims.outer_frame_thickness - dims.depth);

        let mut calls = Vec::with_capacity(2 + self.frame_paths.len() + 1);

        // Pane
        let pane_triangles = lift_triangles(surface, &kernel.triangulate(self.pane.vertices(), &[])?, to_back);
        calls.push(DrawCall::Triangles {
            material: self.pane_material.clone(),
            tex_coords: triangle_tex_coords(surface, &pane_triangles),
            triangles: pane_triangles,
        });

        // Outer frame front face
        let inner_outlines = kernel.buffer_inward(self.outline, dims.outer_frame_width)?;
        let holes: Vec<Vec<Point2>> = inner_outlines.iter().map(|o| o.vertices().to_vec()).collect();
        let front_triangles = lift_triangles(
            surface,
            &kernel.triangulate(self.outline.vertices(), &holes)?,
            to_outer_frame,
        );
        calls.push(DrawCall::Triangles {
            material: self.frame_material.clone(),
            tex_coords: triangle_tex_coords(surface, &front_triangles),
            triangles: front_triangles,
        });

        // Outer frame sides
        let side_material = if self.smooth_sides {
            self.frame_material.make_smooth()
        } else {
            self.frame_material.clone()
        };
        for inner in &inner_outlines {
            let mut ring = surface.convert_polygon_to_3d(inner);
            // Walk clockwise so the strip faces into the opening.
            ring.reverse();
            let front: Vec<Point3> = ring.iter().map(|p| p + to_outer_frame).collect();
            let back: Vec<Point3> = ring.iter().map(|p| p + to_back).collect();
            let strip = ring_strip(&front, &back);
            calls.push(DrawCall::TriangleStrip {
                material: side_material.clone(),
                tex_coords: strip_wall_tex_coords(&strip),
                strip,
            });
        }

        // Inner frame bars
        let half_w = dims.inner_frame_width / 2.0;
        let half_t = dims.inner_frame_thickness / 2.0;
        let bar_shape = vec![
            Point2::new(-half_w, -half_t),
            Point2::new(half_w, -half_t),
            Point2::new(half_w, half_t),
            Point2::new(-half_w, half_t),
        ];
        for path in self.frame_paths {
            let path_3d: Vec<Point3> = surface
                .convert_polyline_to_3d(path)
                .into_iter()
                .map(|p| p + to_back)
                .collect();
            calls.push(DrawCall::ExtrudedShape {
                material: self.frame_material.clone(),
                shape: bar_shape.clone(),
                up: vec![normal; path_3d.len()],
                path: path_3d,
                options: ExtrudeOptions::default(),
            });
        }

        debug!(
            frame_loops = inner_outlines.len(),
            frame_bars = self.frame_paths.len(),
            draw_calls = calls.len(),
            "lifted window geometry"
        );
        Ok(calls)
    }
}

fn lift_triangles(surface: &dyn WallSurface, triangles: &[Triangle2], shift: Vector3) -> Vec<Triangle3> {
    triangles
        .iter()
        .map(|t| surface.convert_triangle_to_3d(t).map(|p| p + shift))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{LineSegment2, WindowShape};
    use crate::render::PlanarWall;
    use crate::tessellation::{CdtKernel, EarcutKernel};

    fn square() -> Outline {
        WindowShape::Rectangle.build(Point2::new(0.0, 0.0), 1.0, 1.0).unwrap()
    }

    fn material(name: &str) -> Material {
        Material::new(name, [1.0; 4])
    }

    #[test]
    fn square_window_draw_calls() {
        let outline = square();
        let pane = outline.scale(0.9);
        let paths = vec![FramePath::from(LineSegment2::new(Point2::new(0.0, 0.05), Point2::new(0.0, 0.95)))];
        let dims = FrameDimensions::default();
        let (glass, frame) = (material("glass"), material("frame"));
        let calls = LiftWindow::new(&outline, &pane, &paths, &dims, &glass, &frame)
            .execute(&PlanarWall::xz(), &CdtKernel)
            .unwrap();

        assert_eq!(calls.len(), 4);
        let DrawCall::Triangles { triangles, .. } = &calls[0] else {
            panic!("pane must come first");
        };
        // Pane is pushed back along -normal (+y for the XZ wall).
        for tri in triangles {
            for p in tri {
                assert!((p.y - dims.depth).abs() < 1e-12);
            }
        }
        let DrawCall::Triangles { triangles, .. } = &calls[1] else {
            panic!("frame front second");
        };
        let area: f64 = triangles.iter().map(|[a, b, c]| (b - a).cross(&(c - a)).norm() / 2.0).sum();
        assert!((area - (1.0 - 0.64)).abs() < 1e-9);
        assert!(matches!(calls[2], DrawCall::TriangleStrip { .. }));
        let DrawCall::ExtrudedShape { path, up, .. } = &calls[3] else {
            panic!("bar last");
        };
        assert_eq!(path.len(), up.len());
        assert!((path[0].y - dims.depth).abs() < 1e-12);
    }

    #[test]
    fn front_face_points_out_of_the_wall() {
        let outline = square();
        let pane = outline.scale(0.9);
        let dims = FrameDimensions::default();
        let (glass, frame) = (material("glass"), material("frame"));
        let wall = PlanarWall::xz();
        let calls = LiftWindow::new(&outline, &pane, &[], &dims, &glass, &frame)
            .execute(&wall, &EarcutKernel)
            .unwrap();
        let normal = wall.normal_at(&Point2::origin());
        let DrawCall::Triangles { triangles, .. } = &calls[1] else {
            panic!("frame front second");
        };
        for [a, b, c] in triangles {
            assert!((b - a).cross(&(c - a)).dot(&normal) > 0.0);
        }
    }

    #[test]
    fn frame_sides_face_the_opening() {
        let outline = square();
        let pane = outline.scale(0.9);
        let dims = FrameDimensions::default();
        let (glass, frame) = (material("glass"), material("frame"));
        let calls = LiftWindow::new(&outline, &pane, &[], &dims, &glass, &frame)
            .with_smooth_sides(true)
            .execute(&PlanarWall::xz(), &CdtKernel)
            .unwrap();
        let DrawCall::TriangleStrip { material, strip, .. } = &calls[2] else {
            panic!("strip third");
        };
        assert!(material.smooth);
        // First strip triangle lies on a side of the opening; its normal points to the center.
        let center = Point3::new(0.0, 0.0, 0.5);
        let (a, b, c) = (strip[0], strip[1], strip[2]);
        let n = (b - a).cross(&(c - a));
        assert!(n.dot(&(center - a)) > 0.0);
    }
}
