use crate::math::{Point2, Vector2};

/// A contour vertex with its pixel-snapped outward normal.
///
/// The dominant component of `pixel_normal` has magnitude exactly 1; the
/// other component lies in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point2,
    pub pixel_normal: Vector2,
}

impl Vertex {
    #[must_use]
    pub fn new(position: Point2, pixel_normal: Vector2) -> Self {
        Self {
            position,
            pixel_normal,
        }
    }

    /// Position moved `amount` units along the pixel normal.
    #[must_use]
    pub fn offset_position(&self, amount: f64) -> Point2 {
        self.position + self.pixel_normal * amount
    }
}
