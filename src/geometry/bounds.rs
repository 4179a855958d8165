use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// Axis-aligned bounds of a contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Computes the bounds of at least three points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than 3 points are given.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut count = 0usize;
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min = min.inf(&p);
            max = max.sup(&p);
            count += 1;
        }
        if count < 3 {
            return Err(GeometryError::TooFewPoints { count }.into());
        }
        Ok(Self { min, max })
    }

    /// Extent of the box, `max - min`.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    /// Half the size, measured from the origin rather than from `min`.
    ///
    /// Only equals the geometric centre when `min` is the origin; see
    /// [`Bounds::midpoint`] for the centre of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::from(self.size() / 2.0)
    }

    /// Geometric centre of the box, `(min + max) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::OutlineError;

    #[test]
    fn min_max_size() {
        let b = Bounds::from_points([
            Point2::new(1.0, 2.0),
            Point2::new(4.0, -1.0),
            Point2::new(2.0, 5.0),
        ])
        .unwrap();
        assert_eq!(b.min, Point2::new(1.0, -1.0));
        assert_eq!(b.max, Point2::new(4.0, 5.0));
        assert_abs_diff_eq!(b.size(), Vector2::new(3.0, 6.0));
    }

    #[test]
    fn center_is_half_size_not_midpoint() {
        // The centre is measured from the origin; it only matches the box
        // midpoint when min is the origin.
        let b = Bounds::from_points([
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 6.0),
        ])
        .unwrap();
        assert_eq!(b.center(), Point2::new(1.0, 2.0));
        assert_eq!(b.midpoint(), Point2::new(3.0, 4.0));
        assert_ne!(b.center(), b.midpoint());
    }

    #[test]
    fn center_matches_midpoint_at_origin() {
        let b = Bounds::from_points([
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
        ])
        .unwrap();
        assert_eq!(b.center(), b.midpoint());
    }

    #[test]
    fn too_few_points() {
        let err = Bounds::from_points([Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Geometry(GeometryError::TooFewPoints { count: 2 })
        ));
    }
}
