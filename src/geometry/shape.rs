use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigurationError, GeometryError, Result};
use crate::math::arc_2d::sample_elliptic_arc;
use crate::math::{Point2, Vector2};

use super::{LineSegment2, Outline};

/// Number of vertices used to approximate a full circle or ellipse.
///
/// A multiple of 4 so that the top, bottom, left and right extremes are
/// vertices.
pub const CIRCLE_SEGMENTS: usize = 32;

/// Number of segments used for a half circle or half ellipse.
pub const SEMICIRCLE_SEGMENTS: usize = 16;

/// Outline shape of a window or window region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowShape {
    #[default]
    Rectangle,
    Circle,
    Triangle,
    Semicircle,
}

impl WindowShape {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Semicircle => "semicircle",
        }
    }

    /// Builds the counter-clockwise outline for a window whose bottom-center
    /// is at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for non-positive sizes.
    pub fn build(self, position: Point2, width: f64, height: f64) -> Result<Outline> {
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "{} of size {width} x {height}",
                self.name()
            ))
            .into());
        }
        let (x, y) = (position.x, position.y);
        let half_w = width / 2.0;
        let points = match self {
            Self::Rectangle => vec![
                Point2::new(x - half_w, y),
                Point2::new(x + half_w, y),
                Point2::new(x + half_w, y + height),
                Point2::new(x - half_w, y + height),
            ],
            Self::Circle => {
                let mut pts = sample_elliptic_arc(
                    &Point2::new(x, y + height / 2.0),
                    &Vector2::new(half_w, 0.0),
                    &Vector2::new(0.0, height / 2.0),
                    FRAC_PI_2,
                    TAU,
                    CIRCLE_SEGMENTS,
                );
                pts.pop();
                pts
            }
            Self::Triangle => vec![
                Point2::new(x - half_w, y),
                Point2::new(x + half_w, y),
                Point2::new(x, y + height),
            ],
            Self::Semicircle => sample_elliptic_arc(
                &position,
                &Vector2::new(half_w, 0.0),
                &Vector2::new(0.0, height),
                0.0,
                PI,
                SEMICIRCLE_SEGMENTS,
            ),
        };
        Outline::new(points)
    }

    /// Builds a region outline attached to `border`, extending `height` away
    /// from it.
    ///
    /// `border` must be an edge of a counter-clockwise neighbour outline, so
    /// the new region lies to its right. The result is counter-clockwise and
    /// contains both border endpoints as vertices.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::UnsupportedRegionShape`] for [`WindowShape::Circle`]
    /// - [`GeometryError::Degenerate`] for a zero-length border or non-positive height
    pub fn build_on_segment(self, border: &LineSegment2, height: f64) -> Result<Outline> {
        let normal = border
            .right_normal()
            .ok_or_else(|| GeometryError::Degenerate("zero-length region border".to_owned()))?;
        if height <= 0.0 {
            return Err(GeometryError::Degenerate(format!("region height {height}")).into());
        }
        let offset = normal * height;
        let (p1, p2) = (border.p1, border.p2);
        let points = match self {
            Self::Rectangle => vec![p1, p1 + offset, p2 + offset, p2],
            Self::Triangle => vec![p1, border.midpoint() + offset, p2],
            Self::Semicircle => {
                let mid = border.midpoint();
                sample_elliptic_arc(&mid, &(p1 - mid), &offset, 0.0, PI, SEMICIRCLE_SEGMENTS)
            }
            Self::Circle => {
                return Err(ConfigurationError::UnsupportedRegionShape(self.name()).into());
            }
        };
        Outline::new(points)
    }
}

impl fmt::Display for WindowShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowShape {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "circle" | "round" => Ok(Self::Circle),
            "triangle" => Ok(Self::Triangle),
            "semicircle" | "arch" => Ok(Self::Semicircle),
            _ => Err(ConfigurationError::Parse {
                kind: "window shape",
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ALL: [WindowShape; 4] = [
        WindowShape::Rectangle,
        WindowShape::Circle,
        WindowShape::Triangle,
        WindowShape::Semicircle,
    ];

    #[test]
    fn every_shape_is_simple_and_ccw() {
        for shape in ALL {
            for (w, h) in [(1.0, 1.0), (0.4, 2.5), (3.0, 0.2)] {
                let o = shape.build(Point2::new(2.0, 1.0), w, h).unwrap();
                assert!(o.is_counter_clockwise(), "{shape} {w}x{h}");
                assert!(o.is_simple(), "{shape} {w}x{h}");
            }
        }
    }

    #[test]
    fn shapes_fit_their_box() {
        for shape in ALL {
            let bb = shape.build(Point2::new(0.0, 0.0), 2.0, 1.0).unwrap().bounding_box();
            assert!((bb.size_x() - 2.0).abs() < 1e-9, "{shape}");
            assert!((bb.size_y() - 1.0).abs() < 1e-9, "{shape}");
            assert!(bb.min.y.abs() < 1e-9, "{shape}");
        }
    }

    #[test]
    fn circle_has_vertices_at_the_extremes() {
        let o = WindowShape::Circle.build(Point2::new(0.0, 0.0), 2.0, 2.0).unwrap();
        assert_eq!(o.len(), CIRCLE_SEGMENTS);
        for p in [
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(-1.0, 1.0),
        ] {
            assert!(o.index_of(&p).is_some(), "missing {p}");
        }
    }

    #[test]
    fn region_on_segment_contains_border_endpoints() {
        let border = LineSegment2::new(Point2::new(0.5, 1.0), Point2::new(-0.5, 1.0));
        for shape in [WindowShape::Rectangle, WindowShape::Triangle, WindowShape::Semicircle] {
            let o = shape.build_on_segment(&border, 1.0).unwrap();
            assert!(o.is_counter_clockwise(), "{shape}");
            assert!(o.index_of(&border.p1).is_some(), "{shape}");
            assert!(o.index_of(&border.p2).is_some(), "{shape}");
            let bb = o.bounding_box();
            assert!((bb.min.y - 1.0).abs() < 1e-9, "{shape} must sit on top of the border");
            assert!((bb.max.y - 2.0).abs() < 1e-9, "{shape}");
        }
    }

    #[test]
    fn circle_cannot_be_anchored_on_segment() {
        let border = LineSegment2::new(Point2::new(0.5, 1.0), Point2::new(-0.5, 1.0));
        assert!(WindowShape::Circle.build_on_segment(&border, 1.0).is_err());
    }

    #[test]
    fn parse_shape_names() {
        assert_eq!("Circle".parse::<WindowShape>().unwrap(), WindowShape::Circle);
        assert_eq!("arch".parse::<WindowShape>().unwrap(), WindowShape::Semicircle);
        assert!("hexagon".parse::<WindowShape>().is_err());
    }
}
