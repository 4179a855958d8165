use thiserror::Error;

/// Top-level error type for outline detection.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error(transparent)]
    Mask(#[from] MaskError),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while building an alpha mask from external pixel data.
#[derive(Debug, Error)]
pub enum MaskError {
    #[error("mask dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("mask dimensions {width}x{height} exceed the addressable lattice")]
    TooLarge { width: usize, height: usize },

    #[error("buffer size mismatch: expected {expected} samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("region {width}x{height} at ({x}, {y}) is outside the {mask_width}x{mask_height} mask")]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        mask_width: usize,
        mask_height: usize,
    },
}

/// Errors raised by the boundary walk.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("mask contains no opaque pixels")]
    NoOpaquePixels,

    #[error("boundary walk did not close after {steps} steps")]
    Unclosed { steps: usize },
}

/// Errors related to polygon construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("at least 3 points are required, got {count}")]
    TooFewPoints { count: usize },
}

/// Convenience type alias for results using [`OutlineError`].
pub type Result<T> = std::result::Result<T, OutlineError>;
