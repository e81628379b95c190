pub mod delaunay_ops;
mod plane_equation;
mod tin;
mod tin_vertex;
mod triangle;

pub use plane_equation::PlaneEquation;
pub use tin::{Tin, MIN_TIN_VERTICES};
pub use tin_vertex::TinVertex;
pub use triangle::Triangle;
