use crate::error::{MaskError, Result};
use crate::math::Coord;

/// Opacity at or below which a sample counts as transparent.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Row layout of an external pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// First row in the buffer is the bottom row (the mask's own convention).
    #[default]
    BottomUp,
    /// First row in the buffer is the top row (usual for decoded images).
    TopDown,
}

/// Read-only grid of opacity samples with a transparency threshold.
///
/// The origin is the bottom-left sample; `x` grows to the right and `y`
/// grows upward. Samples are stored row-major (`index = y * width + x`).
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaMask {
    width: usize,
    height: usize,
    threshold: f32,
    opacity: Vec<f32>,
}

impl AlphaMask {
    /// Creates a mask from a row-major, bottom-up opacity buffer with the
    /// default threshold.
    ///
    /// # Errors
    ///
    /// - `MaskError::ZeroDimension` if either dimension is zero
    /// - `MaskError::TooLarge` if a dimension does not fit the lattice
    /// - `MaskError::SizeMismatch` if `opacity.len() != width * height`
    pub fn new(width: usize, height: usize, opacity: Vec<f32>) -> Result<Self> {
        let expected = checked_len(width, height, opacity.len())?;
        if opacity.len() != expected {
            return Err(MaskError::SizeMismatch {
                expected,
                actual: opacity.len(),
            }
            .into());
        }
        Ok(Self {
            width,
            height,
            threshold: DEFAULT_THRESHOLD,
            opacity,
        })
    }

    /// Creates a mask by sampling `f(x, y)` for every coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`AlphaMask::new`], minus the size mismatch.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f32,
    {
        let len = checked_len(width, height, 0)?;
        let mut opacity = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                opacity.push(f(x, y));
            }
        }
        Self::new(width, height, opacity)
    }

    /// Creates a mask from the alpha channel of tightly packed RGBA8 pixels.
    ///
    /// # Errors
    ///
    /// Returns `MaskError::SizeMismatch` if `rgba.len() != width * height * 4`,
    /// plus the dimension errors of [`AlphaMask::new`].
    pub fn from_rgba8(width: usize, height: usize, rgba: &[u8], order: RowOrder) -> Result<Self> {
        Self::from_channel(width, height, rgba, 4, 3, order)
    }

    /// Creates a mask from single-channel 8-bit alpha samples.
    ///
    /// # Errors
    ///
    /// Returns `MaskError::SizeMismatch` if `alpha.len() != width * height`,
    /// plus the dimension errors of [`AlphaMask::new`].
    pub fn from_alpha8(width: usize, height: usize, alpha: &[u8], order: RowOrder) -> Result<Self> {
        Self::from_channel(width, height, alpha, 1, 0, order)
    }

    fn from_channel(
        width: usize,
        height: usize,
        bytes: &[u8],
        stride: usize,
        channel: usize,
        order: RowOrder,
    ) -> Result<Self> {
        let len = checked_len(width, height, bytes.len())?;
        let expected = len.checked_mul(stride).ok_or(MaskError::TooLarge { width, height })?;
        if bytes.len() != expected {
            return Err(MaskError::SizeMismatch {
                expected,
                actual: bytes.len(),
            }
            .into());
        }
        Self::from_fn(width, height, |x, y| {
            let row = match order {
                RowOrder::BottomUp => y,
                RowOrder::TopDown => height - 1 - y,
            };
            f32::from(bytes[(row * width + x) * stride + channel]) / 255.0
        })
    }

    /// Returns this mask with a different transparency threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Copies the `width` x `height` rectangle whose bottom-left sample is at
    /// `(x, y)`, keeping the threshold. Used to cut a sprite out of an atlas.
    ///
    /// # Errors
    ///
    /// - `MaskError::ZeroDimension` if the region is empty
    /// - `MaskError::RegionOutOfBounds` if the region leaves the mask
    pub fn sub_region(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MaskError::ZeroDimension { width, height }.into());
        }
        let fits = x
            .checked_add(width)
            .zip(y.checked_add(height))
            .is_some_and(|(right, top)| right <= self.width && top <= self.height);
        if !fits {
            return Err(MaskError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                mask_width: self.width,
                mask_height: self.height,
            }
            .into());
        }
        let mut opacity = Vec::with_capacity(width * height);
        for row in y..y + height {
            let start = row * self.width + x;
            opacity.extend_from_slice(&self.opacity[start..start + width]);
        }
        Ok(Self {
            width,
            height,
            threshold: self.threshold,
            opacity,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns the opacity at `(x, y)`, or `None` outside the mask.
    #[must_use]
    pub fn opacity(&self, x: usize, y: usize) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.opacity[y * self.width + x])
    }

    /// Returns `true` if `c` is out of bounds or its opacity is at or below
    /// the mask threshold.
    #[must_use]
    pub fn is_transparent(&self, c: Coord) -> bool {
        self.is_transparent_with(c, self.threshold)
    }

    /// Same as [`AlphaMask::is_transparent`] with an explicit threshold.
    #[must_use]
    pub fn is_transparent_with(&self, c: Coord, threshold: f32) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(c.x), usize::try_from(c.y)) else {
            return true;
        };
        self.opacity(x, y).is_none_or(|a| a <= threshold)
    }

    /// Returns `true` if no sample is above the threshold.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opacity.iter().all(|&a| a <= self.threshold)
    }
}

/// Validates dimensions and returns `width * height`.
fn checked_len(width: usize, height: usize, actual: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(MaskError::ZeroDimension { width, height }.into());
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(MaskError::TooLarge { width, height }.into());
    }
    width.checked_mul(height).ok_or_else(|| {
        MaskError::SizeMismatch {
            expected: usize::MAX,
            actual,
        }
        .into()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::OutlineError;

    #[test]
    fn new_rejects_zero_dimension() {
        let err = AlphaMask::new(0, 3, vec![]).unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Mask(MaskError::ZeroDimension { width: 0, height: 3 })
        ));
    }

    #[test]
    fn new_rejects_size_mismatch() {
        let err = AlphaMask::new(2, 2, vec![1.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Mask(MaskError::SizeMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn default_threshold_is_one_tenth() {
        let mask = AlphaMask::new(1, 1, vec![0.1]).unwrap();
        assert!((mask.threshold() - 0.1).abs() < f32::EPSILON);
        // At the threshold counts as transparent.
        assert!(mask.is_transparent(Coord::new(0, 0)));
        assert!(mask.is_empty());
    }

    #[test]
    fn out_of_bounds_is_transparent() {
        let mask = AlphaMask::new(1, 1, vec![1.0]).unwrap();
        assert!(!mask.is_transparent(Coord::new(0, 0)));
        assert!(mask.is_transparent(Coord::new(-1, 0)));
        assert!(mask.is_transparent(Coord::new(0, -1)));
        assert!(mask.is_transparent(Coord::new(1, 0)));
        assert!(mask.is_transparent(Coord::new(0, 1)));
    }

    #[test]
    fn row_major_bottom_up_indexing() {
        // Row y = 0 first: only (1, 0) is opaque.
        let mask = AlphaMask::new(2, 2, vec![0.0, 1.0, 0.0, 0.0]).unwrap();
        assert!(mask.is_transparent(Coord::new(0, 0)));
        assert!(!mask.is_transparent(Coord::new(1, 0)));
        assert!(mask.is_transparent(Coord::new(1, 1)));
    }

    #[test]
    fn with_threshold_changes_classification() {
        let mask = AlphaMask::new(1, 1, vec![0.5]).unwrap();
        assert!(!mask.is_transparent(Coord::new(0, 0)));
        let mask = mask.with_threshold(0.5);
        assert!(mask.is_transparent(Coord::new(0, 0)));
    }

    #[test]
    fn from_rgba8_top_down_flips_rows() {
        // Top row opaque, bottom row clear.
        let rgba = [
            0, 0, 0, 255, 0, 0, 0, 255, //
            0, 0, 0, 0, 0, 0, 0, 0,
        ];
        let mask = AlphaMask::from_rgba8(2, 2, &rgba, RowOrder::TopDown).unwrap();
        assert!(mask.is_transparent(Coord::new(0, 0)));
        assert!(!mask.is_transparent(Coord::new(0, 1)));
        assert!((mask.opacity(1, 1).unwrap() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn from_alpha8_bottom_up() {
        let mask = AlphaMask::from_alpha8(2, 1, &[0, 200], RowOrder::BottomUp).unwrap();
        assert!(mask.is_transparent(Coord::new(0, 0)));
        assert!(!mask.is_transparent(Coord::new(1, 0)));
    }

    #[test]
    fn from_rgba8_rejects_short_buffer() {
        let err = AlphaMask::from_rgba8(2, 2, &[0; 15], RowOrder::BottomUp).unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Mask(MaskError::SizeMismatch { expected: 16, actual: 15 })
        ));
    }

    #[test]
    fn sub_region_copies_rect() {
        #[allow(clippy::cast_precision_loss)]
        let mask = AlphaMask::from_fn(4, 3, |x, y| (y * 4 + x) as f32).unwrap();
        let sub = mask.sub_region(1, 1, 2, 2).unwrap();
        assert_eq!(sub.width(), 2);
        assert_eq!(sub.height(), 2);
        assert_eq!(sub.opacity(0, 0), Some(5.0));
        assert_eq!(sub.opacity(1, 1), Some(10.0));
        assert_eq!(sub.opacity(2, 0), None);
    }

    #[test]
    fn sub_region_out_of_bounds() {
        let mask = AlphaMask::new(2, 2, vec![1.0; 4]).unwrap();
        assert!(matches!(
            mask.sub_region(1, 0, 2, 1).unwrap_err(),
            OutlineError::Mask(MaskError::RegionOutOfBounds { .. })
        ));
        assert!(matches!(
            mask.sub_region(0, 0, 0, 1).unwrap_err(),
            OutlineError::Mask(MaskError::ZeroDimension { .. })
        ));
    }
}
