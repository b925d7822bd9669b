//! # Vertex Normal Computation
//!
//! Derives one normal per vertex from the faces that reference it.

use glam::DVec3;

use crate::mesh::Mesh;

/// Computes a normal for every vertex of the mesh.
///
/// Each face is visited once; its (normalized Newell) normal is added to
/// the accumulator of every vertex it references, then each accumulator is
/// normalized. The average is unweighted: a face contributes equally to
/// each of its vertices regardless of interior angle or area.
///
/// A vertex referenced by zero faces keeps the zero vector. Callers must
/// tolerate this rather than treat it as an error; loose vertices are a
/// separate validity class.
pub fn vertex_normals(mesh: &Mesh) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; mesh.vertex_count()];

    for face_index in 0..mesh.face_count() {
        // The index is in range by construction, so neither lookup can fail.
        let (Ok(face), Ok(face_normal)) = (mesh.face(face_index), mesh.face_normal(face_index))
        else {
            continue;
        };
        for &i in face.indices() {
            normals[i as usize] += face_normal;
        }
    }

    for normal in &mut normals {
        let len = normal.length();
        if len > 0.0 {
            *normal /= len;
        }
    }

    normals
}
