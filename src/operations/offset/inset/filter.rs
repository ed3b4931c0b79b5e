use crate::math::distance_2d::point_to_ring_dist;
use crate::math::polygon_2d::point_in_polygon_2d;
use crate::math::Point2;

use super::slice::RingSlice;

/// Fraction of the offset distance a kept point must keep from the original
/// boundary. Below 1.0 to tolerate chords of round joins.
const KEEP_RATIO: f64 = 0.9;

/// Returns `true` if every point lies inside `original` and at least
/// `KEEP_RATIO * distance` away from its boundary.
#[must_use]
pub fn points_valid(points: impl IntoIterator<Item = Point2>, original: &[Point2], distance: f64) -> bool {
    let threshold = distance * KEEP_RATIO;
    points
        .into_iter()
        .all(|p| point_in_polygon_2d(&p, original) && point_to_ring_dist(&p, original) >= threshold)
}

/// Keeps the slices whose segment midpoints all pass [`points_valid`].
///
/// Slices from inverted loops run closer to the original boundary than the
/// offset distance and are dropped.
#[must_use]
pub fn apply<'a>(slices: &'a [RingSlice], original: &[Point2], distance: f64) -> Vec<&'a RingSlice> {
    slices
        .iter()
        .filter(|s| {
            s.points.len() >= 2
                && points_valid(
                    s.points.windows(2).map(|w| nalgebra::center(&w[0], &w[1])),
                    original,
                    distance,
                )
        })
        .collect()
}
