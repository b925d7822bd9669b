//! # Bend
//!
//! Bends the mesh along the X axis onto a circular arc in the XZ plane.

use config::constants::EPSILON;
use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;

/// Bend modifier.
///
/// `factor` is the arc curvature (1 / bend radius); each vertex's X
/// coordinate is mapped to an angle `factor * x` along a circle of radius
/// `1 / factor` centered above the origin. A near-zero factor is gated to
/// the identity, since the deformation divides by it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bend {
    /// Arc curvature; `0.0` leaves the mesh unchanged.
    pub factor: f64,
}

impl Modifier for Bend {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        if self.factor.abs() < EPSILON {
            return Ok(());
        }

        let factor = self.factor;
        let radius = 1.0 / factor;
        mesh.vertices_mut().par_iter_mut().for_each(|v| {
            let theta = v.x * factor;
            let r = radius - v.z;
            v.x = r * theta.sin();
            v.z = radius - r * theta.cos();
        });
        Ok(())
    }
}
