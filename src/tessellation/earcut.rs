use crate::error::{Result, TessellationError};
use crate::math::Point2;

use super::{orient_ccw, GeometryKernel, Triangle2};

/// Ear-clipping triangulation kernel backed by `earcutr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutKernel;

impl GeometryKernel for EarcutKernel {
    fn triangulate(&self, outer: &[Point2], holes: &[Vec<Point2>]) -> Result<Vec<Triangle2>> {
        if outer.len() < 3 {
            return Err(
                TessellationError::InvalidInput(format!("outer ring has {} points", outer.len())).into()
            );
        }
        let valid_holes: Vec<&Vec<Point2>> = holes.iter().filter(|h| h.len() >= 3).collect();

        // Flatten vertices for earcutr
        let total_points = outer.len() + valid_holes.iter().map(|h| h.len()).sum::<usize>();
        let mut points: Vec<Point2> = Vec::with_capacity(total_points);
        let mut vertices = Vec::with_capacity(total_points * 2);
        let mut hole_indices = Vec::with_capacity(valid_holes.len());

        for p in outer {
            points.push(*p);
            vertices.extend_from_slice(&[p.x, p.y]);
        }
        for hole in valid_holes {
            hole_indices.push(points.len());
            for p in hole {
                points.push(*p);
                vertices.extend_from_slice(&[p.x, p.y]);
            }
        }

        let indices = earcutr::earcut(&vertices, &hole_indices, 2)
            .map_err(|e| TessellationError::Failed(format!("earcut: {e:?}")))?;
        if indices.is_empty() {
            return Err(TessellationError::Failed("earcut produced no triangles".into()).into());
        }

        Ok(indices
            .chunks_exact(3)
            .map(|c| orient_ccw([points[c[0]], points[c[1]], points[c[2]]]))
            .collect())
    }
}
