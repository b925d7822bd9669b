//! # Scale
//!
//! Scales every vertex about the origin, uniformly or per-axis.

use glam::DVec3;
use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;

/// Scaling modifier. Non-uniform factors are allowed; a negative component
/// mirrors the mesh across that axis (the caller owns the winding
/// consequences).
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    /// Per-axis scale factor.
    pub factor: DVec3,
}

impl Default for Scale {
    fn default() -> Self {
        Self { factor: DVec3::ONE }
    }
}

impl Modifier for Scale {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        let factor = self.factor;
        mesh.vertices_mut().par_iter_mut().for_each(|v| *v *= factor);
        Ok(())
    }
}
