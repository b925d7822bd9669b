//! # Wireframe
//!
//! Turns a surface into a lattice of thin struts: punch holes first, then
//! solidify the resulting open mesh so every hole edge grows a rim. The
//! two-step order is load-bearing; solidifying before punching would
//! stitch the wrong boundary set.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;
use crate::ops::holes::Holes;
use crate::ops::solidify::Solidify;

/// Hole-then-solidify composition.
#[derive(Debug, Clone)]
pub struct Wireframe {
    /// Relative hole size, within `[0, 1]`.
    pub percentage: f64,
    /// Strut thickness handed to solidify.
    pub thickness: f64,
}

impl Modifier for Wireframe {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        Holes {
            percentage: self.percentage,
        }
        .apply(mesh)?;
        Solidify {
            thickness: self.thickness,
        }
        .apply(mesh)
    }
}
