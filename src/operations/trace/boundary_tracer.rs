use tracing::{debug, trace, warn};

use crate::error::{Result, TraceError};
use crate::geometry::{Contour, Edge, Neighbor};
use crate::math::{Coord, Point2};
use crate::raster::AlphaMask;

use super::edge_loop::edge_loop_to_points;

/// The start pixel is treated as entered from this side.
const START_ENTRY: Neighbor = Neighbor::South;

/// Walks the outer boundary of the first opaque island in a mask.
///
/// The start pixel is the first opaque one scanning columns left to right
/// and each column bottom to top. From there the walk circles every visited
/// pixel's 8-neighbourhood clockwise, beginning just after the transparent
/// neighbour it entered from, and moves to the first opaque neighbour it
/// finds. Every transparent N/E/S/W neighbour passed along the way marks a
/// boundary side, so the emitted sides chain into one clockwise loop of unit
/// edges.
///
/// Other islands and interior holes are not traced.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryTracer<'a> {
    mask: &'a AlphaMask,
    threshold: f32,
}

impl<'a> BoundaryTracer<'a> {
    /// Creates a tracer using the mask's own threshold.
    #[must_use]
    pub fn new(mask: &'a AlphaMask) -> Self {
        Self {
            mask,
            threshold: mask.threshold(),
        }
    }

    /// Overrides the transparency threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Runs the walk.
    ///
    /// # Errors
    ///
    /// - `TraceError::NoOpaquePixels` if every sample is transparent
    /// - `TraceError::Unclosed` if the walk exceeds its step bound
    pub fn trace(&self) -> Result<TraceResult> {
        let start = self.find_start().ok_or(TraceError::NoOpaquePixels)?;
        debug!(x = start.x, y = start.y, "tracing boundary");

        // Every move emits the side facing the entry neighbour and no side is
        // emitted twice before the loop closes, so the number of moves is
        // bounded by the number of pixel sides.
        let max_moves = 4 * self.mask.width() * self.mask.height() + 1;

        let mut walk = Walk::default();
        let mut curr = start;
        let mut entry = START_ENTRY;
        let mut moves = 0usize;

        'walk: loop {
            let mut dir = entry;
            let mut next = None;
            for _ in 0..Neighbor::CLOCKWISE.len() {
                dir = dir.clockwise();
                let candidate = curr + dir.offset();
                if !self.is_transparent(candidate) {
                    next = Some(candidate);
                    break;
                }
                if walk.emit(dir.side_of(curr)) {
                    break 'walk;
                }
            }

            // No opaque neighbour: a single isolated pixel, already closed.
            let Some(next) = next else {
                break;
            };

            moves += 1;
            if moves > max_moves {
                warn!(moves, "boundary walk exceeded its step bound");
                return Err(TraceError::Unclosed { steps: moves }.into());
            }

            entry = dir.backtrack();
            trace!(x = next.x, y = next.y, ?entry, "step");
            if walk.emit(entry.side_of(next)) {
                break;
            }
            curr = next;
            if curr == start && entry == START_ENTRY {
                break;
            }
        }

        debug!(edges = walk.edges.len(), moves, "boundary closed");
        Ok(TraceResult {
            start,
            edges: walk.edges,
        })
    }

    /// First opaque pixel, scanning x outer and y inner.
    fn find_start(&self) -> Option<Coord> {
        let width = i32::try_from(self.mask.width()).ok()?;
        let height = i32::try_from(self.mask.height()).ok()?;
        (0..width)
            .flat_map(|x| (0..height).map(move |y| Coord::new(x, y)))
            .find(|&c| !self.is_transparent(c))
    }

    fn is_transparent(&self, c: Coord) -> bool {
        self.mask.is_transparent_with(c, self.threshold)
    }
}

/// Edge buffer that recognises when the loop has come back to its first edge.
#[derive(Debug, Default)]
struct Walk {
    edges: Vec<Edge>,
}

impl Walk {
    /// Appends `side` if present. Returns `true` when `side` is the first
    /// edge of the loop, which means the loop is closed.
    fn emit(&mut self, side: Option<Edge>) -> bool {
        let Some(side) = side else {
            return false;
        };
        if self.edges.first() == Some(&side) {
            return true;
        }
        self.edges.push(side);
        false
    }
}

/// Output of [`BoundaryTracer::trace`]: the raw clockwise edge loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceResult {
    start: Coord,
    edges: Vec<Edge>,
}

impl TraceResult {
    /// The pixel the walk started from.
    #[must_use]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Unit edges in the order they were emitted.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ordered corner points of the loop.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        edge_loop_to_points(&self.edges)
    }

    /// Builds the contour for this loop.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if the loop has fewer than 3
    /// usable vertices.
    pub fn to_contour(&self) -> Result<Contour> {
        Contour::from_points(&self.points())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::OutlineError;
    use crate::math::polygon_2d::signed_area_2d;

    /// Builds a mask from rows written top row first, `#` opaque.
    fn mask(rows: &[&str]) -> AlphaMask {
        let height = rows.len();
        let width = rows[0].len();
        AlphaMask::from_fn(width, height, |x, y| {
            if rows[height - 1 - y].as_bytes()[x] == b'#' {
                1.0
            } else {
                0.0
            }
        })
        .unwrap()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn corners(points: &[Point2]) -> Vec<(i32, i32)> {
        points.iter().map(|p| (p.x as i32, p.y as i32)).collect()
    }

    fn assert_closed(edges: &[Edge]) {
        for i in 0..edges.len() {
            let next = edges[(i + 1) % edges.len()];
            assert_eq!(edges[i].end, next.start, "gap after edge {i}");
        }
    }

    #[test]
    fn empty_mask_fails() {
        let err = BoundaryTracer::new(&mask(&["..", ".."])).trace().unwrap_err();
        assert!(matches!(err, OutlineError::Trace(TraceError::NoOpaquePixels)));
    }

    #[test]
    fn single_pixel() {
        let result = BoundaryTracer::new(&mask(&["#"])).trace().unwrap();
        assert_eq!(result.start(), Coord::new(0, 0));
        assert_eq!(result.edges().len(), 4);
        assert_closed(result.edges());
        assert_eq!(corners(&result.points()), vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn single_pixel_inside_larger_mask() {
        let result = BoundaryTracer::new(&mask(&["...", ".#.", "..."])).trace().unwrap();
        assert_eq!(result.start(), Coord::new(1, 1));
        assert_eq!(corners(&result.points()), vec![(1, 1), (1, 2), (2, 2), (2, 1)]);
    }

    #[test]
    fn horizontal_pair() {
        let result = BoundaryTracer::new(&mask(&["##"])).trace().unwrap();
        assert_closed(result.edges());
        assert_eq!(
            corners(&result.points()),
            vec![(0, 0), (0, 1), (1, 1), (2, 1), (2, 0), (1, 0)]
        );
    }

    #[test]
    fn vertical_pair_closes() {
        // Never re-enters the start pixel from the south.
        let result = BoundaryTracer::new(&mask(&["#", "#"])).trace().unwrap();
        assert_closed(result.edges());
        assert_eq!(
            corners(&result.points()),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0)]
        );
    }

    #[test]
    fn l_shape() {
        let result = BoundaryTracer::new(&mask(&["#.", "##"])).trace().unwrap();
        assert_closed(result.edges());
        assert_eq!(
            corners(&result.points()),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (2, 1), (2, 0), (1, 0)]
        );
    }

    #[test]
    fn diagonal_neighbours_are_one_island() {
        let result = BoundaryTracer::new(&mask(&[".#", "#."])).trace().unwrap();
        assert_closed(result.edges());
        let pts = corners(&result.points());
        assert_eq!(pts.len(), 8);
        // The shared corner is passed twice.
        assert_eq!(pts.iter().filter(|&&p| p == (1, 1)).count(), 2);
    }

    #[test]
    fn loop_is_clockwise() {
        let result = BoundaryTracer::new(&mask(&[".##.", "####", ".#.."])).trace().unwrap();
        assert_closed(result.edges());
        assert!(signed_area_2d(&result.points()) < 0.0);
        assert!((signed_area_2d(&result.points()) + 7.0).abs() < 1e-9);
    }

    #[test]
    fn only_first_island_is_traced() {
        let result = BoundaryTracer::new(&mask(&["#..#", "#..#"])).trace().unwrap();
        assert_eq!(result.start(), Coord::new(0, 0));
        assert!(result.points().iter().all(|p| p.x <= 1.0));
    }

    #[test]
    fn hole_is_not_traced() {
        let result = BoundaryTracer::new(&mask(&["###", "#.#", "###"])).trace().unwrap();
        assert_closed(result.edges());
        // Only the 3x3 outer square, 12 unit edges.
        assert_eq!(result.edges().len(), 12);
        assert!((signed_area_2d(&result.points()) + 9.0).abs() < 1e-9);
    }

    #[test]
    fn start_uses_column_major_scan() {
        // (0, 2) is the only opaque pixel in column 0.
        let result = BoundaryTracer::new(&mask(&["#.", "..", ".#"])).trace().unwrap();
        assert_eq!(result.start(), Coord::new(0, 2));
    }

    #[test]
    fn threshold_override() {
        let m = AlphaMask::new(2, 1, vec![0.3, 0.9]).unwrap();
        let result = BoundaryTracer::new(&m).with_threshold(0.5).trace().unwrap();
        assert_eq!(result.start(), Coord::new(1, 0));
        assert_eq!(result.edges().len(), 4);
    }

    #[test]
    fn large_blob_does_not_recurse() {
        let m = AlphaMask::from_fn(400, 400, |x, y| {
            // Jagged staircase edge along the diagonal.
            if x + y < 500 {
                1.0
            } else {
                0.0
            }
        })
        .unwrap();
        let result = BoundaryTracer::new(&m).trace().unwrap();
        assert_closed(result.edges());
        assert_eq!(result.edges().len(), 2 * 400 + 2 * 400);
    }
}
