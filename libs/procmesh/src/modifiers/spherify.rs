//! # Spherify
//!
//! Lerps every vertex toward its projection on a sphere around the origin.

use config::constants::EPSILON;
use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;

/// Spherify modifier.
///
/// Each vertex moves `strength` of the way toward the point at distance
/// `radius` along its own direction from the origin. `strength = 0` is the
/// identity, `strength = 1` projects fully onto the sphere. A vertex at
/// the origin has no direction and is left in place.
#[derive(Debug, Clone, Copy)]
pub struct Spherify {
    /// Target sphere radius; must be positive.
    pub radius: f64,
    /// Blend factor within `[0, 1]`.
    pub strength: f64,
}

impl Modifier for Spherify {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        if self.radius <= 0.0 {
            return Err(MeshError::invalid_range(
                "radius",
                self.radius,
                "must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(MeshError::invalid_range(
                "strength",
                self.strength,
                "must be within [0, 1]",
            ));
        }

        let (radius, strength) = (self.radius, self.strength);
        mesh.vertices_mut().par_iter_mut().for_each(|v| {
            let len = v.length();
            if len < EPSILON {
                return;
            }
            let on_sphere = *v / len * radius;
            *v = v.lerp(on_sphere, strength);
        });
        Ok(())
    }
}
