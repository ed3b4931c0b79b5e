use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{FramePath, LineSegment2, Outline};
use crate::math::arc_2d::{compass_direction, normalize_degrees};
use crate::math::Point2;

/// Start of the sweep for a layout scoped to a region border (pointing left).
const PARTIAL_START_DEGREES: f64 = 270.0;
/// End of the sweep for a layout scoped to a region border (pointing right).
const PARTIAL_END_DEGREES: f64 = 90.0;

/// Lays out spokes radiating from a center point.
///
/// Angles use the compass convention of [`compass_direction`]: 0° is up and
/// angles grow clockwise.
#[derive(Debug)]
pub struct RadialLayout<'a> {
    pane: &'a Outline,
    panes_horizontal: u32,
    panes_vertical: u32,
    border: Option<LineSegment2>,
}

impl<'a> RadialLayout<'a> {
    #[must_use]
    pub fn new(pane: &'a Outline, panes_horizontal: u32, panes_vertical: u32) -> Self {
        Self {
            pane,
            panes_horizontal,
            panes_vertical,
            border: None,
        }
    }

    /// Scopes the layout to a region above `border`.
    ///
    /// Spokes then start at the border midpoint and sweep from 270° through
    /// 0° to 90°. The spoke at 270° is skipped since the border itself lies
    /// there.
    #[must_use]
    pub fn with_border(mut self, border: LineSegment2) -> Self {
        self.border = Some(border);
        self
    }

    /// Center the spokes radiate from.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.border.map_or_else(|| self.pane.centroid(), |b| b.midpoint())
    }

    /// Compass angles of the generated spokes, in degrees.
    #[must_use]
    pub fn spoke_angles(&self) -> Vec<f64> {
        let n = self.panes_horizontal;
        let (start, step) = match self.border {
            None => (0.0, 360.0 / f64::from(n)),
            Some(_) => (
                PARTIAL_START_DEGREES,
                normalize_degrees(PARTIAL_END_DEGREES - PARTIAL_START_DEGREES) / f64::from(n),
            ),
        };
        let first = u32::from(self.border.is_some());
        (first..n)
            .map(|i| normalize_degrees(start + step * f64::from(i)))
            .collect()
    }

    /// Produces one center-to-boundary spoke per angle.
    ///
    /// A spoke ends at its farthest crossing with the pane outline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::SpokeMiss`] if a spoke does not cross the
    /// pane outline.
    pub fn execute(&self) -> Result<Vec<FramePath>> {
        if self.panes_vertical > 1 {
            debug!(
                rings = self.panes_vertical,
                "concentric ring subdivision is not generated for radial layouts"
            );
        }

        let center = self.center();
        let reach = 2.0 * self.pane.diameter();
        let mut result = Vec::new();

        for angle in self.spoke_angles() {
            let ray = LineSegment2::new(center, center + compass_direction(angle) * reach);
            // The exit point: the center may sit just outside a region's pane.
            let end = self
                .pane
                .intersection_positions(&ray)
                .into_iter()
                .max_by(|a, b| (a - center).norm_squared().total_cmp(&(b - center).norm_squared()))
                .ok_or(GeometryError::SpokeMiss { angle_degrees: angle })?;
            result.push(LineSegment2::new(center, end).into());
        }

        trace!(spokes = result.len(), partial = self.border.is_some(), "radial layout");
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FenestraError;
    use crate::geometry::WindowShape;
    use crate::operations::{ComposeOutline, DerivePaneOutline};
    use crate::window::{RegionProperties, WindowParameters, WindowRegion};

    #[test]
    fn four_spokes_in_circle() {
        let pane = WindowShape::Circle.build(Point2::new(0.0, -1.0), 2.0, 2.0).unwrap();
        let paths = RadialLayout::new(&pane, 4, 1).execute().unwrap();
        assert_eq!(paths.len(), 4);

        let expected = [
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, -1.0),
            Point2::new(-1.0, 0.0),
        ];
        for (path, end) in paths.iter().zip(expected) {
            assert!(path.start().coords.norm() < 1e-9, "spoke must start at the center");
            assert!((path.end() - end).norm() < 1e-9, "{} != {end}", path.end());
            assert!((path.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn full_circle_angles_are_evenly_spaced() {
        let pane = WindowShape::Circle.build(Point2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        for n in [3, 5, 6, 8] {
            let layout = RadialLayout::new(&pane, n, 1);
            let angles = layout.spoke_angles();
            assert_eq!(angles.len() as u32, n);
            for w in angles.windows(2) {
                assert!((w[1] - w[0] - 360.0 / f64::from(n)).abs() < 1e-9);
            }
            let paths = layout.execute().unwrap();
            for path in &paths {
                assert!(pane.distance_to_boundary(&path.end()) < 1e-9);
            }
        }
    }

    #[test]
    fn partial_layout_skips_first_spoke() {
        let border = LineSegment2::new(Point2::new(0.5, 1.0), Point2::new(-0.5, 1.0));
        let region = WindowShape::Semicircle.build_on_segment(&border, 0.5).unwrap();
        let pane = region.scale(0.95);
        let layout = RadialLayout::new(&pane, 4, 1).with_border(border);

        let angles = layout.spoke_angles();
        assert_eq!(angles.len(), 3);
        for (a, e) in angles.iter().zip([315.0, 0.0, 45.0]) {
            assert!((a - e).abs() < 1e-9, "{a} != {e}");
        }

        let paths = layout.execute().unwrap();
        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert!((path.start() - Point2::new(0.0, 1.0)).norm() < 1e-12);
            assert!(path.end().y > 1.0, "spokes point into the arch");
            assert!(pane.distance_to_boundary(&path.end()) < 1e-9);
        }
    }

    #[test]
    fn single_spoke_partial_layout_is_empty() {
        let border = LineSegment2::new(Point2::new(0.5, 1.0), Point2::new(-0.5, 1.0));
        let pane = WindowShape::Semicircle.build_on_segment(&border, 0.5).unwrap();
        let paths = RadialLayout::new(&pane, 1, 1).with_border(border).execute().unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn spoke_missing_arch_over_triangle_is_rejected() {
        // The apex border of a triangle leaves the arch's spokes without a crossing.
        let params = WindowParameters::new(1.0, 1.0, WindowShape::Rectangle)
            .unwrap()
            .with_region(WindowRegion::Center, RegionProperties::new(WindowShape::Triangle))
            .with_region(WindowRegion::Top, RegionProperties::new(WindowShape::Semicircle));
        let composed = ComposeOutline::new(Point2::new(0.0, 0.0), &params).execute().unwrap();
        let derive = DerivePaneOutline::from_dimensions(&params.dimensions);
        let pane = derive.execute(&composed.regions[&WindowRegion::Top]);
        let border = composed.borders[&WindowRegion::Top];

        let err = RadialLayout::new(&pane, 3, 1)
            .with_border(border)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            FenestraError::Geometry(GeometryError::SpokeMiss { .. })
        ));
    }
}
