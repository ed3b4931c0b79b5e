use crate::math::{Point2, POINT_TOLERANCE};

use super::self_intersect::Crossing;

/// A piece of the raw offset ring between two consecutive crossings.
#[derive(Debug, Clone)]
pub struct RingSlice {
    pub points: Vec<Point2>,
}

/// Cuts the raw ring at every crossing.
///
/// Each crossing contributes a cut on both of its segments, so the slices
/// start and end on crossing points.
#[must_use]
pub fn build(ring: &[Point2], crossings: &[Crossing]) -> Vec<RingSlice> {
    let n = ring.len();
    let mut cuts: Vec<Vec<(f64, Point2)>> = vec![Vec::new(); n];
    for c in crossings {
        cuts[c.seg_a].push((c.t_a, c.point));
        cuts[c.seg_b].push((c.t_b, c.point));
    }

    // Walk the ring, inserting cut points in order along each segment.
    let mut nodes: Vec<(Point2, bool)> = Vec::with_capacity(n + crossings.len() * 2);
    for (i, seg_cuts) in cuts.iter_mut().enumerate() {
        nodes.push((ring[i], false));
        seg_cuts.sort_by(|a, b| a.0.total_cmp(&b.0));
        nodes.extend(seg_cuts.iter().map(|&(_, p)| (p, true)));
    }

    let cut_positions: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, is_cut))| is_cut.then_some(i))
        .collect();

    let m = nodes.len();
    let mut slices = Vec::with_capacity(cut_positions.len());
    for (k, &start) in cut_positions.iter().enumerate() {
        let end = cut_positions[(k + 1) % cut_positions.len()];
        let mut points = vec![nodes[start].0];
        let mut i = (start + 1) % m;
        loop {
            points.push(nodes[i].0);
            if i == end {
                break;
            }
            i = (i + 1) % m;
        }
        // Coincident cuts produce zero-length slices.
        if points.windows(2).any(|w| (w[1] - w[0]).norm() > POINT_TOLERANCE) {
            slices.push(RingSlice { points });
        }
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::super::self_intersect::find_all;
    use super::*;

    #[test]
    fn bowtie_splits_into_two_slices() {
        let bowtie = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let slices = build(&bowtie, &find_all(&bowtie));
        assert_eq!(slices.len(), 2);
        let center = Point2::new(0.5, 0.5);
        for s in &slices {
            assert!((s.points[0] - center).norm() < 1e-12);
            assert!((s.points[s.points.len() - 1] - center).norm() < 1e-12);
        }
    }
}
