//! # Noise
//!
//! Seeded pseudo-random vertex jitter.

use config::constants::EPSILON;
use glam::DVec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;

/// Noise modifier: displaces every vertex by an independent random offset
/// with each component drawn uniformly from `[-amplitude, amplitude]`.
///
/// Deterministic for a given seed and vertex order. Runs sequentially: all
/// vertices share one RNG stream, unlike the other per-vertex modifiers.
#[derive(Debug, Clone, Copy)]
pub struct Noise {
    /// Maximum per-component displacement; must be non-negative.
    pub amplitude: f64,
    /// RNG seed.
    pub seed: u64,
}

impl Modifier for Noise {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        if self.amplitude < 0.0 {
            return Err(MeshError::invalid_range(
                "amplitude",
                self.amplitude,
                "must be non-negative",
            ));
        }
        if self.amplitude < EPSILON {
            return Ok(());
        }

        let amplitude = self.amplitude;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for v in mesh.vertices_mut() {
            let jitter = DVec3::new(
                rng.gen_range(-amplitude..=amplitude),
                rng.gen_range(-amplitude..=amplitude),
                rng.gen_range(-amplitude..=amplitude),
            );
            *v += jitter;
        }
        Ok(())
    }
}
