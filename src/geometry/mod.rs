mod bounds;
mod contour;
mod edge;
mod vertex;

pub use bounds::Bounds;
pub use contour::Contour;
pub use edge::{Edge, Neighbor};
pub use vertex::Vertex;
