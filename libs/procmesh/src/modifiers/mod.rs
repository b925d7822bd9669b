//! # Per-Vertex Modifiers
//!
//! Deformations with no cross-vertex dependency: each vertex is rewritten
//! independently, so the maps run through rayon's parallel iterators. Noise
//! is the one sequential exception (a single deterministic RNG stream).

pub mod bend;
pub mod noise;
pub mod ripple;
pub mod rotate;
pub mod scale;
pub mod spherify;
pub mod translate;
pub mod wave;

pub use bend::Bend;
pub use noise::Noise;
pub use ripple::Ripple;
pub use rotate::{Axis, Rotate};
pub use scale::Scale;
pub use spherify::Spherify;
pub use translate::Translate;
pub use wave::Wave;
