use crate::math::Point2;

use super::slice::RingSlice;

/// Squared distance under which slice endpoints are joined.
const JOIN_TOLERANCE_SQ: f64 = 1e-16;

/// Stitches slices into closed loops by matching end points to start points.
///
/// Greedy: each chain is extended by the unused slice whose start is nearest
/// to the chain's end. Chains that do not close are discarded. Returned loops
/// do not repeat their first point.
#[must_use]
pub fn connect(slices: &[&RingSlice]) -> Vec<Vec<Point2>> {
    let n = slices.len();
    let mut used = vec![false; n];
    let mut loops = Vec::new();

    for start in 0..n {
        if used[start] {
            continue;
        }
        used[start] = true;
        let mut chain: Vec<Point2> = slices[start].points.clone();

        loop {
            let Some(&first) = chain.first() else { break };
            let Some(&end) = chain.last() else { break };
            if chain.len() > 2 && (end - first).norm_squared() < JOIN_TOLERANCE_SQ {
                chain.pop();
                loops.push(chain);
                break;
            }

            let mut best: Option<usize> = None;
            let mut best_dist_sq = JOIN_TOLERANCE_SQ;
            for (candidate, slice) in slices.iter().enumerate() {
                if used[candidate] {
                    continue;
                }
                let dist_sq = (slice.points[0] - end).norm_squared();
                if dist_sq < best_dist_sq {
                    best_dist_sq = dist_sq;
                    best = Some(candidate);
                }
            }

            match best {
                Some(next) => {
                    used[next] = true;
                    chain.extend_from_slice(&slices[next].points[1..]);
                }
                None => break,
            }
        }
    }

    loops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(points: &[(f64, f64)]) -> RingSlice {
        RingSlice {
            points: points.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    #[test]
    fn chains_slices_into_a_loop() {
        let a = slice(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let b = slice(&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        let loops = connect(&[&b, &a]);
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 4);
    }

    #[test]
    fn open_chain_is_dropped() {
        let a = slice(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(connect(&[&a]).is_empty());
    }
}
