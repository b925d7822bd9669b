//! # Mesh Operations
//!
//! Topology-changing operations: face extrusion, shell solidify, and the
//! hole/wireframe compositions built from them.

pub mod extrude;
pub mod holes;
pub mod solidify;
pub mod wireframe;

pub use extrude::{extrude_face, Bevel, ExtrudeParams};
pub use holes::Holes;
pub use solidify::{solidify, Solidify};
pub use wireframe::Wireframe;
