use crate::math::{Point2, Point3};
use crate::tessellation::Triangle3;

use super::WallSurface;

/// Global wall texture coordinates, one per triangle vertex.
#[must_use]
pub fn triangle_tex_coords(surface: &dyn WallSurface, triangles: &[Triangle3]) -> Vec<Point2> {
    triangles
        .iter()
        .flat_map(|tri| tri.iter().map(|p| surface.tex_coords_global(p)))
        .collect()
}

/// Texture coordinates for a strip built by `ring_strip`.
///
/// `u` is the distance travelled along the front ring; `v` is 0 on the front
/// ring and 1 on the back ring.
#[must_use]
pub fn strip_wall_tex_coords(strip: &[Point3]) -> Vec<Point2> {
    let mut coords = Vec::with_capacity(strip.len());
    let mut u = 0.0;
    for (i, pair) in strip.chunks(2).enumerate() {
        if i > 0 {
            u += (pair[0] - strip[2 * (i - 1)]).norm();
        }
        coords.push(Point2::new(u, 0.0));
        if pair.len() == 2 {
            coords.push(Point2::new(u, 1.0));
        }
    }
    coords
}
