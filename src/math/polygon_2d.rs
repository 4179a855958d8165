use std::collections::HashSet;

use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
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

/// Returns the left-pointing perpendicular of a vector (rotated +90°).
///
/// For a clockwise loop in a y-up frame this points out of the polygon.
#[must_use]
pub fn perpendicular(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Normalizes `v`, returning the zero vector when `v` is too short to have a
/// direction.
#[must_use]
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector2::zeros)
}

/// Scales a direction so its dominant component has magnitude exactly 1.
///
/// `(0.707, 0.707)` becomes `(1, 1)`, `(1, 0)` is unchanged. The zero vector
/// is returned as-is.
#[must_use]
pub fn pixel_snap(v: Vector2) -> Vector2 {
    let dominant = v.x.abs().max(v.y.abs());
    if dominant < TOLERANCE {
        return Vector2::zeros();
    }
    v / dominant
}

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross_2d(a: Vector2, b: Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `true` when `p` lies on the closed segment `a → b`.
///
/// The point must be collinear with the segment and its projection on the
/// segment's dominant axis must fall inside the segment's range on that axis.
/// A zero-length segment contains nothing.
#[must_use]
pub fn lies_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    let ab = b - a;
    if ab.x.abs() < TOLERANCE && ab.y.abs() < TOLERANCE {
        return false;
    }
    if cross_2d(p - a, ab).abs() > TOLERANCE {
        return false;
    }
    let (pv, av, bv) = if ab.x.abs() >= ab.y.abs() {
        (p.x, a.x, b.x)
    } else {
        (p.y, a.y, b.y)
    };
    pv >= av.min(bv) - TOLERANCE && pv <= av.max(bv) + TOLERANCE
}

/// Removes exactly coincident points, keeping the first occurrence of each.
#[must_use]
pub fn dedup_points(points: &[Point2]) -> Vec<Point2> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .filter(|p| seen.insert(point_key(p)))
        .copied()
        .collect()
}

/// Bit-exact hash key for a point. `-0.0` and `0.0` map to the same key.
fn point_key(p: &Point2) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}
