use tracing::debug;

use crate::error::Result;
use crate::geometry::Contour;
use crate::math::TOLERANCE;
use crate::operations::DetectContour;
use crate::raster::{AlphaMask, DEFAULT_THRESHOLD};

/// Settings for turning a mask into a finished outline.
///
/// Steps run in a fixed order: detection at `alpha_threshold`, then
/// simplification, then `step_expand` whole-pixel steps, then a continuous
/// `expand`. Zero offsets are skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineConfig {
    /// Opacity at or below which a pixel is outside the shape.
    pub alpha_threshold: f32,
    /// Drop vertices in the middle of straight runs.
    pub simplify: bool,
    /// Whole-pixel offset; negative shrinks.
    pub step_expand: i32,
    /// Continuous offset along the pixel normals; negative shrinks.
    pub expand: f64,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_THRESHOLD,
            simplify: false,
            step_expand: 0,
            expand: 0.0,
        }
    }
}

impl OutlineConfig {
    #[must_use]
    pub fn with_alpha_threshold(mut self, threshold: f32) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    #[must_use]
    pub fn with_step_expand(mut self, steps: i32) -> Self {
        self.step_expand = steps;
        self
    }

    #[must_use]
    pub fn with_expand(mut self, amount: f64) -> Self {
        self.expand = amount;
        self
    }

    /// Runs the configured pipeline on `mask`. The mask's own threshold is
    /// ignored in favour of `alpha_threshold`.
    ///
    /// # Errors
    ///
    /// Propagates errors from detection and from each transform.
    pub fn detect(&self, mask: &AlphaMask) -> Result<Contour> {
        let mut contour = DetectContour::new(mask)
            .with_threshold(self.alpha_threshold)
            .execute()?;
        if self.simplify {
            contour = contour.simplify()?;
        }
        if self.step_expand != 0 {
            contour = contour.step_expand(self.step_expand)?;
        }
        if self.expand.abs() >= TOLERANCE {
            contour = contour.expand(self.expand)?;
        }
        debug!(config = ?self, vertices = contour.vertex_count(), "outline built");
        Ok(contour)
    }
}
