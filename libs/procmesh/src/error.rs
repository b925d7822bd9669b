//! # Mesh Errors
//!
//! Error types for mesh construction and modifier operations.

use thiserror::Error;

/// Errors that can occur in the mesh kernel.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Numeric parameter outside its documented domain
    #[error("Parameter out of range: {name} = {value} ({message})")]
    InvalidRange {
        name: &'static str,
        value: f64,
        message: &'static str,
    },

    /// Face with fewer vertices than a polygon requires
    #[error("Degenerate face: {message}")]
    DegenerateFace { message: String },

    /// Face index referencing a vertex that does not exist
    #[error("Dangling vertex index {index} (vertex count: {count})")]
    DanglingIndex { index: u32, count: usize },

    /// Operation addressed to a face that does not exist
    #[error("Face index {index} out of bounds (face count: {count})")]
    FaceOutOfBounds { index: usize, count: usize },

    /// Topology the boundary-detection rule cannot classify
    #[error("Non-manifold topology: {message}")]
    NonManifold { message: String },
}

impl MeshError {
    /// Creates an out-of-range parameter error.
    pub fn invalid_range(name: &'static str, value: f64, message: &'static str) -> Self {
        Self::InvalidRange {
            name,
            value,
            message,
        }
    }

    /// Creates a degenerate face error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateFace {
            message: message.into(),
        }
    }

    /// Creates a non-manifold topology error.
    pub fn non_manifold(message: impl Into<String>) -> Self {
        Self::NonManifold {
            message: message.into(),
        }
    }
}
