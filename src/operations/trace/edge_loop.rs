use std::collections::HashSet;

use crate::geometry::Edge;
use crate::math::{coord_to_point, Point2};

/// Removes repeated edges, keeping the first occurrence of each.
#[must_use]
pub fn dedup_edges(edges: &[Edge]) -> Vec<Edge> {
    let mut seen = HashSet::with_capacity(edges.len());
    edges.iter().filter(|e| seen.insert(**e)).copied().collect()
}

/// Converts a closed edge loop into its ordered corner points.
///
/// Each deduplicated edge contributes its start corner; the end of the last
/// edge is the start of the first and is not repeated.
#[must_use]
pub fn edge_loop_to_points(edges: &[Edge]) -> Vec<Point2> {
    dedup_edges(edges)
        .into_iter()
        .map(|e| coord_to_point(e.start))
        .collect()
}
