use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::{FramePath, LineSegment2, Outline};
use crate::math::Point2;

/// Lays out straight horizontal and vertical dividers over a pane.
///
/// Each divider is an oversized line at an even fraction of the pane's
/// bounding box, clipped to the outermost crossings with the pane outline.
/// Non-rectangular panes therefore get dividers trimmed to their boundary.
#[derive(Debug)]
pub struct GridLayout<'a> {
    pane: &'a Outline,
    panes_horizontal: u32,
    panes_vertical: u32,
}

impl<'a> GridLayout<'a> {
    #[must_use]
    pub fn new(pane: &'a Outline, panes_horizontal: u32, panes_vertical: u32) -> Self {
        Self {
            pane,
            panes_horizontal,
            panes_vertical,
        }
    }

    /// Produces `(vertical - 1)` horizontal dividers followed by
    /// `(horizontal - 1)` vertical dividers.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DividerMiss`] if a divider line crosses the
    /// pane outline fewer than twice.
    pub fn execute(&self) -> Result<Vec<FramePath>> {
        let bbox = self.pane.bounding_box();
        let mut result = Vec::new();

        for i in 1..self.panes_vertical {
            let y = bbox.min.y + bbox.size_y() * f64::from(i) / f64::from(self.panes_vertical);
            let line = LineSegment2::new(
                Point2::new(bbox.min.x - bbox.size_x(), y),
                Point2::new(bbox.max.x + bbox.size_x(), y),
            );
            result.push(self.clip(&line, y, |p| p.x)?);
        }

        for i in 1..self.panes_horizontal {
            let x = bbox.min.x + bbox.size_x() * f64::from(i) / f64::from(self.panes_horizontal);
            let line = LineSegment2::new(
                Point2::new(x, bbox.min.y - bbox.size_y()),
                Point2::new(x, bbox.max.y + bbox.size_y()),
            );
            result.push(self.clip(&line, x, |p| p.y)?);
        }

        trace!(
            horizontal = self.panes_horizontal,
            vertical = self.panes_vertical,
            dividers = result.len(),
            "grid layout"
        );
        Ok(result)
    }

    /// Clips `line` to the extreme crossings along `key`.
    fn clip(&self, line: &LineSegment2, position: f64, key: impl Fn(&Point2) -> f64) -> Result<FramePath> {
        let hits = self.pane.intersection_positions(line);
        let min = hits.iter().min_by(|a, b| key(a).total_cmp(&key(b)));
        let max = hits.iter().max_by(|a, b| key(a).total_cmp(&key(b)));
        match (min, max) {
            (Some(min), Some(max)) if hits.len() >= 2 => Ok(LineSegment2::new(*min, *max).into()),
            _ => Err(GeometryError::DividerMiss {
                position,
                hits: hits.len(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FenestraError;
    use crate::geometry::WindowShape;

    #[test]
    fn two_by_one_rectangle_three_by_two_panes() {
        // 2m wide, 1m tall pane.
        let pane = WindowShape::Rectangle.build(Point2::new(1.0, 0.0), 2.0, 1.0).unwrap();
        let paths = GridLayout::new(&pane, 3, 2).execute().unwrap();
        assert_eq!(paths.len(), (2 - 1) + (3 - 1));

        let horizontal = &paths[0];
        assert!((horizontal.start() - Point2::new(0.0, 0.5)).norm() < 1e-9);
        assert!((horizontal.end() - Point2::new(2.0, 0.5)).norm() < 1e-9);

        for (path, x) in paths[1..].iter().zip([2.0 / 3.0, 4.0 / 3.0]) {
            assert!((path.start() - Point2::new(x, 0.0)).norm() < 1e-9);
            assert!((path.end() - Point2::new(x, 1.0)).norm() < 1e-9);
        }
    }

    #[test]
    fn divider_count_for_any_grid() {
        let pane = WindowShape::Rectangle.build(Point2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        for h in 1..5 {
            for v in 1..5 {
                let paths = GridLayout::new(&pane, h, v).execute().unwrap();
                assert_eq!(paths.len() as u32, (v - 1) + (h - 1));
            }
        }
    }

    #[test]
    fn dividers_are_trimmed_to_triangle() {
        let pane = WindowShape::Triangle.build(Point2::new(0.0, 0.0), 2.0, 2.0).unwrap();
        let paths = GridLayout::new(&pane, 1, 2).execute().unwrap();
        assert_eq!(paths.len(), 1);
        // At half height the triangle is 1m wide.
        assert!((paths[0].length() - 1.0).abs() < 1e-9);
        for p in paths[0].points() {
            assert!(pane.distance_to_boundary(p) < 1e-9);
        }
    }

    #[test]
    fn divider_touching_a_single_point_is_rejected() {
        // Two triangles meeting at (1, 1): the midline touches only the waist.
        let pane = Outline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ])
        .unwrap();
        let err = GridLayout::new(&pane, 1, 2).execute().unwrap_err();
        let FenestraError::Geometry(GeometryError::DividerMiss { position, hits }) = err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(hits, 1);
        assert!((position - 1.0).abs() < 1e-12);
    }

    #[test]
    fn divider_outside_pane_is_rejected() {
        let pane = WindowShape::Rectangle.build(Point2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        let line = LineSegment2::new(Point2::new(-2.0, 5.0), Point2::new(2.0, 5.0));
        let err = GridLayout::new(&pane, 1, 2).clip(&line, 5.0, |p| p.x).unwrap_err();
        assert!(matches!(
            err,
            FenestraError::Geometry(GeometryError::DividerMiss { hits: 0, .. })
        ));
    }

    #[test]
    fn dividers_end_on_circle_boundary() {
        let pane = WindowShape::Circle.build(Point2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        let paths = GridLayout::new(&pane, 3, 3).execute().unwrap();
        assert_eq!(paths.len(), 4);
        for path in &paths {
            for p in path.points() {
                assert!(pane.distance_to_boundary(p) < 1e-9);
            }
        }
    }
}
