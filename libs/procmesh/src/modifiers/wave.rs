//! # Wave
//!
//! Sinusoidal Z displacement along the X axis.

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;

/// Wave modifier: `z += amplitude * sin(tau * x / wavelength + phase)`.
#[derive(Debug, Clone, Copy)]
pub struct Wave {
    pub amplitude: f64,
    /// Spatial period of the wave; must be positive (the displacement
    /// divides by it).
    pub wavelength: f64,
    pub phase: f64,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            wavelength: 1.0,
            phase: 0.0,
        }
    }
}

impl Modifier for Wave {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        if self.wavelength <= 0.0 {
            return Err(MeshError::invalid_range(
                "wavelength",
                self.wavelength,
                "must be positive",
            ));
        }

        let (amplitude, wavelength, phase) = (self.amplitude, self.wavelength, self.phase);
        mesh.vertices_mut().par_iter_mut().for_each(|v| {
            v.z += amplitude * (TAU * v.x / wavelength + phase).sin();
        });
        Ok(())
    }
}
