//! # Ripple
//!
//! Radial sinusoidal Z displacement: concentric waves around the Z axis.

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;

/// Ripple modifier: `z += amplitude * sin(tau * r / wavelength + phase)`
/// with `r = sqrt(x^2 + y^2)`.
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub amplitude: f64,
    /// Radial period of the ripple; must be positive.
    pub wavelength: f64,
    pub phase: f64,
}

impl Default for Ripple {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            wavelength: 1.0,
            phase: 0.0,
        }
    }
}

impl Modifier for Ripple {
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
            let r = v.x.hypot(v.y);
            v.z += amplitude * (TAU * r / wavelength + phase).sin();
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    #[test]
    fn test_ripple_is_radially_symmetric() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(-1.0, 0.0, 0.0));

        Ripple {
            amplitude: 0.5,
            wavelength: 4.0,
            phase: 0.0,
        }
        .apply(&mut mesh)
        .unwrap();

        let z0 = mesh.vertex(0).z;
        assert_relative_eq!(mesh.vertex(1).z, z0, epsilon = 1e-12);
        assert_relative_eq!(mesh.vertex(2).z, z0, epsilon = 1e-12);
        assert_relative_eq!(z0, 0.5, epsilon = 1e-12); // sin(tau/4) = 1
    }

    #[test]
    fn test_non_positive_wavelength_rejected() {
        let mut mesh = Mesh::new();
        let result = Ripple {
            wavelength: -1.0,
            ..Ripple::default()
        }
        .apply(&mut mesh);
        assert!(matches!(result, Err(MeshError::InvalidRange { .. })));
    }
}
