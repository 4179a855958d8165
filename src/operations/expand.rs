use crate::error::Result;
use crate::geometry::Contour;
use crate::math::Point2;

/// Offsets every vertex by `amount` along its pixel normal.
///
/// Negative amounts shrink the contour. Narrow features can fold over each
/// other; the result is not checked for self-intersection.
#[derive(Debug)]
pub struct Expand<'a> {
    contour: &'a Contour,
    amount: f64,
}

impl<'a> Expand<'a> {
    /// Creates a new `Expand` operation.
    #[must_use]
    pub fn new(contour: &'a Contour, amount: f64) -> Self {
        Self { contour, amount }
    }

    /// Executes the offset and rebuilds the vertex normals.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if the moved points no longer
    /// form at least 3 vertices.
    pub fn execute(&self) -> Result<Contour> {
        let points: Vec<Point2> = self
            .contour
            .vertices()
            .iter()
            .map(|v| v.offset_position(self.amount))
            .collect();
        Contour::from_points(&points)
    }
}
