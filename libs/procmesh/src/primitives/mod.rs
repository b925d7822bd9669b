//! # Primitives
//!
//! Reference shape generators. Every generator builds its mesh through the
//! vertex/face insertion primitives only, is deterministic (same parameters
//! produce the same counts), and returns a fresh instance per call.

pub mod cube;
pub mod cylinder;
pub mod plane;
pub mod sphere;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use plane::create_plane;
pub use sphere::create_sphere;
