//! # Rotate
//!
//! Rotates every vertex about one of the principal axes.

use glam::{DMat3, DVec3};
use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;

/// A principal rotation axis.
///
/// A closed enum: the "unrecognized axis" failure mode of stringly-typed
/// axis parameters cannot occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation modifier: rotates about `axis` by `angle_degrees`.
#[derive(Debug, Clone, Copy)]
pub struct Rotate {
    pub axis: Axis,
    pub angle_degrees: f64,
}

impl Modifier for Rotate {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        let radians = self.angle_degrees.to_radians();
        let matrix = match self.axis {
            Axis::X => DMat3::from_rotation_x(radians),
            Axis::Y => DMat3::from_rotation_y(radians),
            Axis::Z => DMat3::from_rotation_z(radians),
        };
        mesh.vertices_mut()
            .par_iter_mut()
            .for_each(|v| *v = matrix * *v);
        Ok(())
    }
}
