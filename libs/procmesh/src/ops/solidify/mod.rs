//! # Solidify (Shell Offset with Boundary Stitching)
//!
//! Converts a zero-thickness surface (open or closed) into a shell of
//! finite thickness: the original surface is kept, an inward-displaced,
//! winding-flipped duplicate is appended, and every open boundary edge is
//! bridged with a quad connecting the two shells.
//!
//! ## Algorithm
//!
//! 1. Compute per-vertex normals on the original mesh.
//! 2. Freeze a directed-edge snapshot of the original face list.
//! 3. Clone the mesh into an inner copy.
//! 4. Flip the inner copy's winding.
//! 5. Displace every inner vertex along its original normal by `-thickness`.
//! 6. Merge the inner copy (indices shift by the pre-merge vertex count `k`).
//! 7. Bridge every snapshot edge whose reverse is absent from the snapshot
//!    with the quad `[to, from, k+from, k+to]`.
//!
//! The snapshot in step 2 must be taken before any structural mutation;
//! deriving it after the merge would mistake the appended shell's edges for
//! reverse matches and miss every boundary.
//!
//! The resulting face count is `2F + B` (F original faces, B boundary
//! edges): a watertight input yields two nested shells and zero bridges, an
//! open sheet yields a fully stitched, closed thin shell.


use std::collections::HashSet;

use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifier::Modifier;
use crate::normals::vertex_normals;

/// An ordered pair of vertex indices derived from two consecutive indices
/// of one face. Not stored persistently; rebuilt from a pinned face-list
/// snapshot whenever topology needs to be reasoned about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    pub from: u32,
    pub to: u32,
}

impl DirectedEdge {
    /// The same edge walked the other way.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Thickens the mesh into a shell of the given thickness.
///
/// `thickness = 0`, an empty vertex set, or an empty face set is a no-op.
/// Beyond that the operation performs no upfront validation; a malformed
/// input fails through the underlying mesh operations. This is a
/// documented simplification, not a gap.
///
/// # Errors
///
/// `NonManifold` if any directed edge is claimed by more than one face (an
/// edge shared by three or more faces, or two neighbors with inconsistent
/// winding). Detected while freezing the snapshot, before any mutation.
pub fn solidify(mesh: &mut Mesh, thickness: f64) -> Result<(), MeshError> {
    if thickness == 0.0 || mesh.is_empty() || mesh.face_count() == 0 {
        return Ok(());
    }

    // Steps 1-2 read the original, unmodified mesh.
    let normals = vertex_normals(mesh);

    let mut edge_list: Vec<DirectedEdge> = Vec::new();
    let mut edge_set: HashSet<DirectedEdge> = HashSet::new();
    for face in mesh.faces() {
        for (from, to) in face.edges() {
            let edge = DirectedEdge { from, to };
            if !edge_set.insert(edge) {
                return Err(MeshError::non_manifold(format!(
                    "directed edge ({from}, {to}) is claimed by more than one face"
                )));
            }
            edge_list.push(edge);
        }
    }

    // Steps 3-5: inner shell faces away from the outer one and sits
    // `thickness` behind it along the pre-flip vertex normals.
    let mut inner = mesh.clone();
    inner.flip_winding();
    for (vertex, normal) in inner.vertices_mut().iter_mut().zip(&normals) {
        *vertex -= *normal * thickness;
    }

    // Step 6: merge shifts the inner indices by k.
    let k = mesh.vertex_count() as u32;
    mesh.merge(&inner);

    // Step 7: bridge boundary edges. Walking `edge_list` (not the set)
    // keeps the bridge face order deterministic.
    let mut boundary_count = 0usize;
    for edge in &edge_list {
        if !edge_set.contains(&edge.reversed()) {
            // Wound so the quad's outward normal points away from the
            // shell interior, consistent with the outer surface.
            mesh.add_face(vec![edge.to, edge.from, k + edge.from, k + edge.to])?;
            boundary_count += 1;
        }
    }

    debug!(
        boundary_edges = boundary_count,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "solidify complete"
    );

    Ok(())
}

/// Shell-offset modifier.
#[derive(Debug, Clone)]
pub struct Solidify {
    /// Shell thickness; the duplicate surface is displaced inward by this
    /// amount. Zero is a no-op.
    pub thickness: f64,
}

impl Modifier for Solidify {
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        solidify(mesh, self.thickness)
    }
}
