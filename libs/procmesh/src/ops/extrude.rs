//! # Face Extrusion
//!
//! The shared building block for beveling, inset, and hole creation: scale
//! a face's ring about its centroid, displace it along the face normal, and
//! wall the old ring to the new one with quads.

use crate::error::MeshError;
use crate::mesh::{Face, Mesh};
use crate::modifier::Modifier;

/// Parameters for face extrusion.
#[derive(Debug, Clone)]
pub struct ExtrudeParams {
    /// Ring scale about the face centroid (must be non-negative).
    /// `0.0` collapses the new ring to a single point at the centroid.
    pub scale: f64,
    /// Displacement along the face normal (any sign).
    pub amount: f64,
    /// Delete the face instead of rewriting it onto the new ring.
    pub remove_face: bool,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            amount: 0.0,
            remove_face: false,
        }
    }
}

/// Extrudes a single face.
///
/// For each vertex `v` of the face, inserts a new vertex at
/// `(v - C) * scale + C + N * amount` (C = centroid, N = face normal), then
/// emits one side-wall quad `[i, i+1, i+1', i']` per edge of the face,
/// preserving outward winding. The face itself is either rewritten onto
/// the new ring or removed, per [`ExtrudeParams::remove_face`].
///
/// `scale = 1, amount = 0` is a geometric no-op that still duplicates the
/// ring: the new coincident vertices are inserted, not deduplicated. This
/// is load-bearing for the hole/wireframe compositions and is deliberately
/// not optimized away.
///
/// # Errors
///
/// `InvalidRange` for a negative scale; `FaceOutOfBounds` for a bad face
/// index. Both are checked before any mutation.
pub fn extrude_face(
    mesh: &mut Mesh,
    face_index: usize,
    params: &ExtrudeParams,
) -> Result<(), MeshError> {
    if params.scale < 0.0 {
        return Err(MeshError::invalid_range(
            "scale",
            params.scale,
            "must be non-negative",
        ));
    }

    // Both calls validate the face index before anything is touched.
    let normal = mesh.face_normal(face_index)?;
    let centroid = mesh.face_centroid(face_index)?;
    let old_ring: Vec<u32> = mesh.face(face_index)?.indices().to_vec();
    let n = old_ring.len();

    // New ring: scaled about the centroid, displaced along the normal.
    let mut new_ring = Vec::with_capacity(n);
    for &i in &old_ring {
        let v = mesh.vertex(i);
        let moved = (v - centroid) * params.scale + centroid + normal * params.amount;
        new_ring.push(mesh.add_vertex(moved));
    }

    // Side walls: one quad per edge, old ring to new ring.
    for i in 0..n {
        let a = old_ring[i];
        let b = old_ring[(i + 1) % n];
        let a_new = new_ring[i];
        let b_new = new_ring[(i + 1) % n];
        mesh.add_face(vec![a, b, b_new, a_new])?;
    }

    if params.remove_face {
        mesh.remove_face(face_index)?;
    } else {
        *mesh.face_mut(face_index)? = Face::new(new_ring);
    }

    Ok(())
}

/// Bevels every face of the mesh: each face is extruded onto a scaled,
/// displaced copy of itself and kept, growing a rim of side quads.
#[derive(Debug, Clone)]
pub struct Bevel {
    /// Ring scale about each face centroid.
    pub scale: f64,
    /// Displacement along each face normal.
    pub amount: f64,
}

impl Modifier for Bevel {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        if self.scale < 0.0 {
            return Err(MeshError::invalid_range(
                "scale",
                self.scale,
                "must be non-negative",
            ));
        }
        if mesh.is_empty() || mesh.face_count() == 0 {
            return Ok(());
        }

        let params = ExtrudeParams {
            scale: self.scale,
            amount: self.amount,
            remove_face: false,
        };
        // Only the original face list is beveled; the side quads this loop
        // appends land past `original` and are skipped.
        let original = mesh.face_count();
        for face_index in 0..original {
            extrude_face(mesh, face_index, &params)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn single_quad() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(vec![0, 1, 2, 3]).unwrap();
        mesh
    }

    #[test]
    fn test_extrude_lifts_face_along_normal() {
        let mut mesh = single_quad();
        let params = ExtrudeParams {
            scale: 1.0,
            amount: 2.0,
            remove_face: false,
        };
        extrude_face(&mut mesh, 0, &params).unwrap();

        // 4 new vertices, 4 side quads, face kept.
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 5);

        // The kept face now references the lifted ring.
        for &i in mesh.face(0).unwrap().indices() {
            assert!((mesh.vertex(i).z - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_extrude_identity_quirk_doubles_vertices() {
        // scale=1, amount=0: positions unchanged, ring still duplicated.
        let mut mesh = single_quad();
        extrude_face(&mut mesh, 0, &ExtrudeParams::default()).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 5); // original + 4 side quads
        for i in 0..4u32 {
            assert_eq!(mesh.vertex(i), mesh.vertex(i + 4));
        }
    }

    #[test]
    fn test_extrude_scale_zero_collapses_to_centroid() {
        let mut mesh = single_quad();
        let params = ExtrudeParams {
            scale: 0.0,
            amount: 0.0,
            remove_face: false,
        };
        extrude_face(&mut mesh, 0, &params).unwrap();

        let centroid = DVec3::new(0.5, 0.5, 0.0);
        for i in 4..8u32 {
            assert!((mesh.vertex(i) - centroid).length() < 1e-12);
        }
    }

    #[test]
    fn test_extrude_remove_face() {
        let mut mesh = single_quad();
        let params = ExtrudeParams {
            scale: 0.5,
            amount: 0.0,
            remove_face: true,
        };
        extrude_face(&mut mesh, 0, &params).unwrap();

        // Face removed, 4 side quads remain.
        assert_eq!(mesh.face_count(), 4);
        assert_eq!(mesh.vertex_count(), 8);
        assert!(mesh.validate());
    }

    #[test]
    fn test_extrude_negative_scale_rejected_before_mutation() {
        let mut mesh = single_quad();
        let params = ExtrudeParams {
            scale: -0.5,
            ..ExtrudeParams::default()
        };
        let result = extrude_face(&mut mesh, 0, &params);
        assert!(matches!(result, Err(MeshError::InvalidRange { .. })));
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_extrude_bad_face_index() {
        let mut mesh = single_quad();
        let result = extrude_face(&mut mesh, 3, &ExtrudeParams::default());
        assert!(matches!(result, Err(MeshError::FaceOutOfBounds { .. })));
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn test_bevel_every_face() {
        let mut mesh = crate::primitives::create_cube(DVec3::splat(2.0), true).unwrap();
        let bevel = Bevel {
            scale: 0.8,
            amount: 0.1,
        };
        bevel.apply(&mut mesh).unwrap();

        // 6 faces kept + 4 side quads each.
        assert_eq!(mesh.face_count(), 6 + 6 * 4);
        assert_eq!(mesh.vertex_count(), 8 + 6 * 4);
        assert!(mesh.validate());
    }

    #[test]
    fn test_bevel_empty_mesh_is_noop() {
        let mut mesh = Mesh::new();
        Bevel {
            scale: 0.5,
            amount: 0.1,
        }
        .apply(&mut mesh)
        .unwrap();
        assert!(mesh.is_empty());
    }
}
