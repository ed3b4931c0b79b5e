use std::f64::consts::PI;

use crate::error::{OffsetError, Result};
use crate::math::arc_2d::sample_elliptic_arc;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Maximum angle covered by one chord of a round join.
const ROUND_JOIN_STEP: f64 = PI / 6.0;

/// Builds the raw (untrimmed) inward offset of a counter-clockwise ring.
///
/// Each edge is moved `distance` to its left. Convex corners become the
/// intersection of the two moved edges; reflex corners get a round join
/// around the original vertex. The result may self-intersect.
pub fn build(ring: &[Point2], distance: f64) -> Result<Vec<Point2>> {
    let n = ring.len();
    let mut directions = Vec::with_capacity(n);
    for i in 0..n {
        let d = ring[(i + 1) % n] - ring[i];
        let len = d.norm();
        if len < TOLERANCE {
            return Err(OffsetError::InvalidInput(format!("zero-length edge at vertex {i}")).into());
        }
        directions.push(d / len);
    }

    let left = |d: &Vector2| Vector2::new(-d.y, d.x);
    let mut raw = Vec::with_capacity(n * 2);

    for i in 0..n {
        let prev = (i + n - 1) % n;
        let (d0, d1) = (directions[prev], directions[i]);
        let (n0, n1) = (left(&d0), left(&d1));
        let v = ring[i];
        let turn = d0.x * d1.y - d0.y * d1.x;

        if turn.abs() < TOLERANCE && d0.dot(&d1) > 0.0 {
            // Collinear edges share the same offset line.
            raw.push(v + n1 * distance);
        } else if turn > 0.0 {
            let p0 = v + n0 * distance;
            let p1 = v + n1 * distance;
            match line_line_intersect_2d(&p0, &d0, &p1, &d1) {
                Some((t, _)) => raw.push(p0 + d0 * t),
                None => raw.push(p1),
            }
        } else {
            push_round_join(&mut raw, &v, &n0, &n1, distance);
        }
    }

    Ok(raw)
}

/// Appends an arc of radius `distance` around `v` from normal `n0` to `n1`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn push_round_join(raw: &mut Vec<Point2>, v: &Point2, n0: &Vector2, n1: &Vector2, distance: f64) {
    let a0 = n0.y.atan2(n0.x);
    let a1 = n1.y.atan2(n1.x);
    let mut sweep = a1 - a0;
    if sweep > PI {
        sweep -= 2.0 * PI;
    } else if sweep < -PI {
        sweep += 2.0 * PI;
    }
    let segments = (sweep.abs() / ROUND_JOIN_STEP).ceil().max(1.0) as usize;
    let u = Vector2::new(distance, 0.0);
    let w = Vector2::new(0.0, distance);
    raw.extend(sample_elliptic_arc(v, &u, &w, a0, sweep, segments));
}
