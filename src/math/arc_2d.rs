//! Elliptic arc sampling and compass angles.
//!
//! Window shapes are built from axis-aligned or segment-aligned ellipses, so
//! arcs are expressed as a center, two half-axes and a sweep.

use super::{Point2, Vector2};

/// Samples `segments + 1` points on an elliptic arc.
///
/// The ellipse is centered at `center` with half-axis `u` (angle 0) and
/// half-axis `v` (angle π/2). Angles are in radians, counter-clockwise from
/// `u` toward `v`. Both endpoints are included.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_elliptic_arc(
    center: &Point2,
    u: &Vector2,
    v: &Vector2,
    start_angle: f64,
    sweep: f64,
    segments: usize,
) -> Vec<Point2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let a = start_angle + sweep * i as f64 / segments as f64;
            center + u * a.cos() + v * a.sin()
        })
        .collect()
}

/// Unit direction for a compass angle in degrees.
///
/// 0° points up (+y) and angles grow clockwise, so 90° points along +x.
#[must_use]
pub fn compass_direction(degrees: f64) -> Vector2 {
    let rad = degrees.to_radians();
    Vector2::new(rad.sin(), rad.cos())
}

/// Normalizes an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}
