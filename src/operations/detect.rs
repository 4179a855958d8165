use tracing::debug;

use crate::error::Result;
use crate::geometry::Contour;
use crate::raster::AlphaMask;

use super::trace::BoundaryTracer;

/// Detects the outer contour of the first opaque island in a mask.
#[derive(Debug)]
pub struct DetectContour<'a> {
    mask: &'a AlphaMask,
    threshold: f32,
}

impl<'a> DetectContour<'a> {
    /// Creates a detection using the mask's own threshold.
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

    /// Executes the detection.
    ///
    /// # Errors
    ///
    /// - `TraceError::NoOpaquePixels` if the mask is fully transparent
    /// - `GeometryError::TooFewPoints` if the traced loop is degenerate
    pub fn execute(&self) -> Result<Contour> {
        let traced = BoundaryTracer::new(self.mask)
            .with_threshold(self.threshold)
            .trace()?;
        let contour = traced.to_contour()?;
        debug!(
            width = self.mask.width(),
            height = self.mask.height(),
            edges = traced.edges().len(),
            vertices = contour.vertex_count(),
            "contour detected"
        );
        Ok(contour)
    }
}

/// Detects the outer contour of `mask` at the mask's threshold.
///
/// # Errors
///
/// See [`DetectContour::execute`].
pub fn detect(mask: &AlphaMask) -> Result<Contour> {
    DetectContour::new(mask).execute()
}
