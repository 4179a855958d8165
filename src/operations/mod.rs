mod detect;
mod expand;
pub mod normals;
mod simplify;
mod step_expand;
pub mod trace;

pub use detect::{detect, DetectContour};
pub use expand::Expand;
pub use normals::points_to_vertices;
pub use simplify::Simplify;
pub use step_expand::StepExpand;
pub use trace::{BoundaryTracer, TraceResult};
