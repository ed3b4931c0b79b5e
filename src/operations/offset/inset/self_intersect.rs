use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;

/// A crossing between two non-adjacent segments of a closed ring.
#[derive(Debug, Clone, Copy)]
pub struct Crossing {
    pub point: Point2,
    pub seg_a: usize,
    pub t_a: f64,
    pub seg_b: usize,
    pub t_b: f64,
}

/// Finds all crossings between non-adjacent segments of `ring`.
///
/// Segment `i` runs from `ring[i]` to `ring[(i + 1) % n]`.
#[must_use]
pub fn find_all(ring: &[Point2]) -> Vec<Crossing> {
    let n = ring.len();
    let mut result = Vec::new();
    if n < 4 {
        return result;
    }
    for i in 0..n {
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if let Some((point, t_a, t_b)) =
                segment_segment_intersect_2d(&ring[i], &ring[(i + 1) % n], &ring[j], &ring[(j + 1) % n])
            {
                result.push(Crossing {
                    point,
                    seg_a: i,
                    t_a,
                    seg_b: j,
                    t_b,
                });
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowtie_has_one_crossing() {
        let bowtie = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let crossings = find_all(&bowtie);
        assert_eq!(crossings.len(), 1);
        assert!((crossings[0].point - Point2::new(0.5, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn convex_ring_has_none() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(find_all(&square).is_empty());
    }
}
