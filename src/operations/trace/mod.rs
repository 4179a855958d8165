mod boundary_tracer;
pub mod edge_loop;

pub use boundary_tracer::{BoundaryTracer, TraceResult};
