//! # Hole Punching
//!
//! Opens a proportionally-sized hole in every face by extruding the face
//! in-plane toward its centroid and removing it, leaving an annulus of
//! side quads around the opening.

use config::constants::EPSILON;
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;
use crate::ops::extrude::{extrude_face, ExtrudeParams};

/// Hole-punching modifier.
///
/// `percentage` is the hole's linear size relative to the face:
/// `0.0` leaves every face geometrically and topologically unchanged,
/// `1.0` removes every face outright (the hole consumes the full face
/// area), and anything between extrudes each face with
/// `scale = percentage, amount = 0, remove_face = true`.
#[derive(Debug, Clone)]
pub struct Holes {
    /// Relative hole size, within `[0, 1]`.
    pub percentage: f64,
}

impl Modifier for Holes {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        let p = self.percentage;
        if !(0.0..=1.0).contains(&p) {
            return Err(MeshError::invalid_range(
                "percentage",
                p,
                "must be within [0, 1]",
            ));
        }
        if mesh.is_empty() || mesh.face_count() == 0 {
            return Ok(());
        }
        if p < EPSILON {
            return Ok(());
        }

        let original = mesh.face_count();

        if 1.0 - p < EPSILON {
            // The hole is the whole face: no ring, no annulus.
            for face_index in (0..original).rev() {
                mesh.remove_face(face_index)?;
            }
            debug!(faces = original, "holes consumed every face");
            return Ok(());
        }

        let params = ExtrudeParams {
            scale: p,
            amount: 0.0,
            remove_face: true,
        };
        // Walk the original face list from the back: each removal only
        // shifts faces past the current index, which are already done or
        // freshly appended quads.
        for face_index in (0..original).rev() {
            extrude_face(mesh, face_index, &params)?;
        }

        debug!(
            faces = original,
            percentage = p,
            "punched holes"
        );
        Ok(())
    }
}
