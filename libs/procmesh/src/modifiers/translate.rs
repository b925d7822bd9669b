//! # Translate
//!
//! Moves every vertex by a fixed offset.

use glam::DVec3;
use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;

/// Translation modifier. `delta = (0, 0, 0)` is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translate {
    /// Offset added to every vertex.
    pub delta: DVec3,
}

impl Modifier for Translate {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        let delta = self.delta;
        mesh.vertices_mut().par_iter_mut().for_each(|v| *v += delta);
        Ok(())
    }
}
