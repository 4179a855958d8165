use crate::geometry::Vertex;
use crate::math::polygon_2d::{normalize_or_zero, perpendicular, pixel_snap};
use crate::math::{Point2, Vector2};

/// Below this length the sum of the two edge normals is treated as zero.
const DEGENERATE_NORMAL_EPSILON: f64 = 1e-6;

/// Builds vertices with pixel-snapped outward normals from a closed,
/// clockwise point loop.
///
/// A point whose predecessor and successor coincide is a dangling spur and
/// produces no vertex. Output order follows input order.
#[must_use]
pub fn points_to_vertices(points: &[Point2]) -> Vec<Vertex> {
    let n = points.len();
    let mut vertices = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];
        if prev == next {
            continue;
        }
        vertices.push(Vertex::new(curr, pixel_snap(vertex_normal(&prev, &curr, &next))));
    }
    vertices
}

/// Unit outward normal at `curr`, before pixel snapping.
fn vertex_normal(prev: &Point2, curr: &Point2, next: &Point2) -> Vector2 {
    let na = normalize_or_zero(perpendicular(curr - prev));
    let nb = normalize_or_zero(perpendicular(next - curr));
    let sum = na + nb;
    if sum.norm() >= DEGENERATE_NORMAL_EPSILON {
        return sum.normalize();
    }

    // Edge normals cancel: the path reverses at `curr`.
    let turn = normalize_or_zero(next - curr) - normalize_or_zero(prev - curr);
    let fallback = normalize_or_zero(perpendicular(turn));
    if fallback != Vector2::zeros() {
        return fallback;
    }

    // Exact reversal: the tip points away from where the path came from.
    normalize_or_zero(curr - prev)
}
