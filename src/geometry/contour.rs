use crate::error::Result;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;
use crate::operations::{points_to_vertices, Expand, Simplify, StepExpand};

use super::{Bounds, Vertex};

/// A closed, clockwise outline with per-vertex pixel normals.
///
/// Immutable: every transform returns a new contour.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    vertices: Vec<Vertex>,
    bounds: Bounds,
}

impl Contour {
    /// Creates a contour from vertices in traversal order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than 3 vertices are given.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self> {
        let bounds = Bounds::from_points(vertices.iter().map(|v| v.position))?;
        Ok(Self { vertices, bounds })
    }

    /// Creates a contour from a clockwise point loop, computing the normals.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than 3 vertices remain
    /// after dangling spurs are dropped.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        Self::new(points_to_vertices(points))
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex positions in order.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Consecutive position pairs, including the closing pair from the last
    /// vertex back to the first. Suited to drawing the outline as lines.
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i].position, self.vertices[(i + 1) % n].position))
    }

    /// Shoelace area; negative for clockwise outlines.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let points: Vec<Point2> = self.points().collect();
        signed_area_2d(&points)
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Drops vertices in the middle of straight runs.
    ///
    /// # Errors
    ///
    /// See [`Simplify::execute`].
    pub fn simplify(&self) -> Result<Self> {
        Simplify::new(self).execute()
    }

    /// Offsets the outline by `amount` along the pixel normals.
    ///
    /// # Errors
    ///
    /// See [`Expand::execute`].
    pub fn expand(&self, amount: f64) -> Result<Self> {
        Expand::new(self, amount).execute()
    }

    /// Offsets the outline one pixel at a time, `|steps|` times.
    ///
    /// # Errors
    ///
    /// See [`StepExpand::execute`].
    pub fn step_expand(&self, steps: i32) -> Result<Self> {
        StepExpand::new(self, steps).execute()
    }
}
