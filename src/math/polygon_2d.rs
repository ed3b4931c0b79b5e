use super::intersect_2d::segment_segment_intersect_2d;
use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Area-weighted centroid of a polygon ring.
///
/// Returns `None` for rings with (near) zero area.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Option<Point2> {
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        return None;
    }
    let n = points.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        let cross = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    let k = 1.0 / (6.0 * area);
    Some(Point2::new(cx * k, cy * k))
}

/// Maximum distance between any two vertices.
#[must_use]
pub fn diameter_2d(points: &[Point2]) -> f64 {
    let mut max_sq: f64 = 0.0;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            max_sq = max_sq.max((b - a).norm_squared());
        }
    }
    max_sq.sqrt()
}

/// Removes consecutive duplicate vertices, including a duplicated closing vertex.
#[must_use]
pub fn dedup_ring(points: &[Point2], tolerance: f64) -> Vec<Point2> {
    let mut ring: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        if ring.last().is_some_and(|last| (p - last).norm() < tolerance) {
            continue;
        }
        ring.push(p);
    }
    while ring.len() > 1 && ring.first().zip(ring.last()).is_some_and(|(f, l)| (f - l).norm() < tolerance) {
        ring.pop();
    }
    ring
}

/// Returns `true` if no two non-adjacent edges of the ring intersect.
#[must_use]
pub fn is_simple_2d(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for j in i + 1..n {
            // Adjacent edges share a vertex; skip them.
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            if segment_segment_intersect_2d(a0, a1, b0, b1).is_some() {
                return false;
            }
        }
    }
    true
}

/// Point-in-polygon test using the winding number.
///
/// Non-zero winding means inside. Points exactly on the boundary may land on
/// either side.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    winding_number_2d(point, polygon) != 0
}

fn winding_number_2d(p: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = &verts[i];
        let b = &verts[(i + 1) % n];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if a.y <= p.y {
            if b.y > p.y && cross > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && cross < 0.0 {
            winding -= 1;
        }
    }
    winding
}
