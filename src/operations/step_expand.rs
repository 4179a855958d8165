use tracing::debug;

use crate::error::Result;
use crate::geometry::Contour;
use crate::math::polygon_2d::dedup_points;
use crate::math::Point2;
use crate::operations::normals::points_to_vertices;

/// Offsets a contour one pixel at a time, `|steps|` times.
///
/// Each step moves every vertex one unit along its pixel normal (outward for
/// positive `steps`, inward for negative), merges vertices that land on the
/// same position and recomputes the normals before the next step. Merging
/// lets concave regions lose vertices as they close up, which keeps narrow
/// features from folding as quickly as a single [`Expand`] would, but does
/// not rule it out.
///
/// [`Expand`]: super::Expand
#[derive(Debug)]
pub struct StepExpand<'a> {
    contour: &'a Contour,
    steps: i32,
}

impl<'a> StepExpand<'a> {
    /// Creates a new `StepExpand` operation.
    #[must_use]
    pub fn new(contour: &'a Contour, steps: i32) -> Self {
        Self { contour, steps }
    }

    /// Executes the stepped offset.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if the contour collapses below
    /// 3 vertices.
    pub fn execute(&self) -> Result<Contour> {
        if self.steps == 0 {
            return Ok(self.contour.clone());
        }
        let unit = f64::from(self.steps.signum());
        let mut vertices = self.contour.vertices().to_vec();
        for step in 0..self.steps.unsigned_abs() {
            let moved: Vec<Point2> = vertices.iter().map(|v| v.offset_position(unit)).collect();
            let points = dedup_points(&moved);
            vertices = points_to_vertices(&points);
            debug!(
                step,
                merged = moved.len() - points.len(),
                vertices = vertices.len(),
                "expanded one pixel"
            );
        }
        Contour::new(vertices)
    }
}
