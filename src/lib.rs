//! Outer boundary extraction for pixel-art alpha masks.
//!
//! [`detect`] walks the first opaque island of an [`AlphaMask`] and returns a
//! clockwise [`Contour`] whose vertices carry pixel-snapped outward normals.
//! Contours can then be simplified or offset, either continuously
//! ([`Contour::expand`]) or in whole-pixel steps ([`Contour::step_expand`]).

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod raster;

pub use config::OutlineConfig;
pub use error::{OutlineError, Result};
pub use geometry::{Bounds, Contour, Vertex};
pub use operations::{detect, BoundaryTracer, DetectContour, TraceResult};
pub use raster::{AlphaMask, RowOrder};
