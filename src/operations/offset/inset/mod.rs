mod filter;
mod raw_offset;
mod self_intersect;
mod slice;
mod stitch;

use tracing::trace;

use crate::error::{OffsetError, Result};
use crate::geometry::Outline;
use crate::math::polygon_2d::{dedup_ring, signed_area_2d};
use crate::math::{Point2, POINT_TOLERANCE, TOLERANCE};

/// Shrinks a simple polygon by a fixed distance using the slice-and-filter
/// algorithm.
///
/// The result may split into several loops where the polygon has narrow
/// necks. Every returned outline is counter-clockwise and lies at least
/// (approximately) `distance` inside the input.
#[derive(Debug)]
pub struct InsetPolygon2D {
    points: Vec<Point2>,
    distance: f64,
}

impl InsetPolygon2D {
    /// Creates a new inset operation. `points` may be in either orientation.
    #[must_use]
    pub fn new(points: Vec<Point2>, distance: f64) -> Self {
        Self { points, distance }
    }

    /// Executes the inset.
    ///
    /// # Errors
    ///
    /// - [`OffsetError::InvalidInput`] for a non-positive distance or fewer
    ///   than 3 distinct points
    /// - [`OffsetError::Collapsed`] if nothing of the polygon survives
    pub fn execute(&self) -> Result<Vec<Outline>> {
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(OffsetError::InvalidInput(format!("inset distance {}", self.distance)).into());
        }
        let mut ring = dedup_ring(&self.points, POINT_TOLERANCE);
        if ring.len() < 3 {
            return Err(OffsetError::InvalidInput(format!("{} distinct points", ring.len())).into());
        }
        let area = signed_area_2d(&ring);
        if area.abs() < TOLERANCE {
            return Err(OffsetError::InvalidInput("zero-area polygon".to_owned()).into());
        }
        if area < 0.0 {
            ring.reverse();
        }

        // Step 1: Build raw offset ring.
        let raw = raw_offset::build(&ring, self.distance)?;

        // Step 2: Find all self-intersections.
        let crossings = self_intersect::find_all(&raw);

        let candidates = if crossings.is_empty() {
            // An inverted ring keeps its orientation under a point reflection,
            // so it is rejected by distance instead.
            if filter::points_valid(raw.iter().copied(), &ring, self.distance) {
                vec![raw]
            } else {
                Vec::new()
            }
        } else {
            // Step 3: Slice at intersection points.
            let slices = slice::build(&raw, &crossings);

            // Step 4: Filter slices by distance to original.
            let valid = filter::apply(&slices, &ring, self.distance);

            // Step 5: Stitch valid slices into loops.
            stitch::connect(&valid)
        };

        let outlines: Vec<Outline> = candidates
            .into_iter()
            .filter_map(|loop_points| Outline::new(loop_points).ok())
            .filter(|o| o.is_counter_clockwise() && o.area() > TOLERANCE)
            .collect();

        trace!(
            distance = self.distance,
            crossings = crossings.len(),
            loops = outlines.len(),
            "inset polygon"
        );

        if outlines.is_empty() {
            return Err(OffsetError::Collapsed {
                distance: self.distance,
            }
            .into());
        }
        Ok(outlines)
    }
}
