use crate::math::Point3;

/// Interleaves two rings into a closed triangle strip.
///
/// Produces `front[0], back[0], front[1], back[1], …` and repeats the first
/// pair at the end so the strip wraps around. Both rings must have the same
/// length.
#[must_use]
pub fn ring_strip(front: &[Point3], back: &[Point3]) -> Vec<Point3> {
    let n = front.len().min(back.len());
    let mut strip = Vec::with_capacity(2 * n + 2);
    for i in 0..n {
        strip.push(front[i]);
        strip.push(back[i]);
    }
    if n > 0 {
        strip.push(front[0]);
        strip.push(back[0]);
    }
    strip
}

/// Index triples of the triangles encoded by a strip of `len` vertices.
///
/// Every second triangle is flipped so all triangles share the winding of the
/// first one.
#[allow(clippy::cast_possible_truncation)]
pub fn strip_triangles(len: usize) -> impl Iterator<Item = [u32; 3]> {
    (0..len.saturating_sub(2)).map(|i| {
        let i = i as u32;
        if i % 2 == 0 {
            [i, i + 1, i + 2]
        } else {
            [i + 1, i, i + 2]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_strip_wraps_around() {
        let front: Vec<Point3> = (0..3).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        let back: Vec<Point3> = front.iter().map(|p| p + nalgebra::Vector3::new(0.0, 1.0, 0.0)).collect();
        let strip = ring_strip(&front, &back);
        assert_eq!(strip.len(), 8);
        assert_eq!(strip[6], front[0]);
        assert_eq!(strip[7], back[0]);
    }

    #[test]
    fn strip_triangles_alternate_winding() {
        let tris: Vec<_> = strip_triangles(5).collect();
        assert_eq!(tris, vec![[0, 1, 2], [2, 1, 3], [2, 3, 4]]);
        assert_eq!(strip_triangles(2).count(), 0);
    }
}
