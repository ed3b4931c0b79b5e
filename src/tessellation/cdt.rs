use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{Result, TessellationError};
use crate::math::Point2;

use super::{orient_ccw, GeometryKernel, Triangle2};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Constrained Delaunay triangulation kernel backed by `spade`.
///
/// Every ring becomes a closed loop of constraint edges; faces are kept when
/// an odd number of constraints separates them from the outer face.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdtKernel;

impl GeometryKernel for CdtKernel {
    fn triangulate(&self, outer: &[Point2], holes: &[Vec<Point2>]) -> Result<Vec<Triangle2>> {
        let mut cdt = Cdt::new();
        insert_constraint_loop(&mut cdt, outer)?;
        for hole in holes {
            insert_constraint_loop(&mut cdt, hole)?;
        }

        let interior = classify_interior_faces(&cdt);
        let triangles: Vec<Triangle2> = cdt
            .inner_faces()
            .filter(|face| interior.contains(&face.fix().index()))
            .map(|face| {
                orient_ccw(face.vertices().map(|v| {
                    let p = v.position();
                    Point2::new(p.x, p.y)
                }))
            })
            .collect();

        if triangles.is_empty() {
            return Err(
                TessellationError::Failed("constrained triangulation has no interior faces".into()).into()
            );
        }
        Ok(triangles)
    }
}

fn insert_constraint_loop(cdt: &mut Cdt, points: &[Point2]) -> Result<()> {
    if points.len() < 3 {
        return Err(TessellationError::InvalidInput(format!(
            "constraint loop needs at least 3 points, got {}",
            points.len()
        ))
        .into());
    }

    let mut handles = Vec::with_capacity(points.len());
    for p in points {
        let h = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::InvalidInput("polygon rings intersect".into()).into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Flood-fills from the outer face; crossing a constraint edge increments the
/// depth. Odd depth means interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
