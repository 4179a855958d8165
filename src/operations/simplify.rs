use crate::error::Result;
use crate::geometry::Contour;
use crate::math::polygon_2d::lies_on_segment;
use crate::math::Point2;

/// Removes vertices lying strictly inside the straight run between their
/// neighbours.
///
/// Corners and diagonal transitions are kept because they are never on the
/// segment joining their two neighbours. Each vertex is judged against its
/// neighbours in the input contour, so the result is stable under repeated
/// simplification.
#[derive(Debug)]
pub struct Simplify<'a> {
    contour: &'a Contour,
}

impl<'a> Simplify<'a> {
    /// Creates a new `Simplify` operation.
    #[must_use]
    pub fn new(contour: &'a Contour) -> Self {
        Self { contour }
    }

    /// Executes the simplification.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than 3 vertices survive.
    pub fn execute(&self) -> Result<Contour> {
        let points: Vec<Point2> = self.contour.points().collect();
        let n = points.len();
        let kept: Vec<Point2> = (0..n)
            .filter(|&i| {
                let prev = &points[(i + n - 1) % n];
                let next = &points[(i + 1) % n];
                let p = &points[i];
                p == prev || p == next || !lies_on_segment(p, prev, next)
            })
            .map(|i| points[i])
            .collect();
        Contour::from_points(&kept)
    }
}
