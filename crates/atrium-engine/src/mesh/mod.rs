//! CPU mesh data and the generators that produce it.

pub mod geometry;
mod vertex;

pub use geometry::{create_box, create_cylinder, create_grid};
pub use vertex::{MeshData, Vertex};
