pub mod polygon_2d;

/// 2D point type for vertex positions.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type for directions and normals.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Integer lattice coordinate: pixel indices and pixel corners.
pub type Coord = nalgebra::Point2<i32>;

/// Integer offset between two lattice coordinates.
pub type Offset = nalgebra::Vector2<i32>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts a lattice coordinate to a floating-point position.
#[must_use]
pub fn coord_to_point(c: Coord) -> Point2 {
    Point2::new(f64::from(c.x), f64::from(c.y))
}
