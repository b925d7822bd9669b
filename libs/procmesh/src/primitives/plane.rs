//! # Plane Primitive
//!
//! Generates an open quad-grid sheet in the XY plane. The canonical open
//! surface: every perimeter edge is a boundary edge.

use glam::{DVec2, DVec3, UVec2};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a flat grid of quads centered at the origin, facing +Z.
///
/// # Arguments
///
/// * `size` - Extent along X and Y
/// * `segments` - Number of cells along X and Y
///
/// # Returns
///
/// A mesh with `(sx+1)*(sy+1)` vertices and `sx*sy` quad faces; its
/// boundary consists of `2*(sx+sy)` open edges.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::create_plane;
/// use glam::{DVec2, UVec2};
///
/// let mesh = create_plane(DVec2::splat(10.0), UVec2::new(2, 3)).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_plane(size: DVec2, segments: UVec2) -> Result<Mesh, MeshError> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(MeshError::invalid_range(
            "size",
            size.min_element(),
            "must be positive",
        ));
    }
    if segments.x == 0 || segments.y == 0 {
        return Err(MeshError::invalid_range(
            "segments",
            segments.min_element() as f64,
            "must be at least 1",
        ));
    }

    let (sx, sy) = (segments.x as usize, segments.y as usize);
    let mut mesh = Mesh::with_capacity((sx + 1) * (sy + 1), sx * sy);

    let step = DVec2::new(size.x / sx as f64, size.y / sy as f64);
    let origin = -size / 2.0;

    for j in 0..=sy {
        for i in 0..=sx {
            mesh.add_vertex(DVec3::new(
                origin.x + i as f64 * step.x,
                origin.y + j as f64 * step.y,
                0.0,
            ));
        }
    }

    let row = (sx + 1) as u32;
    for j in 0..sy as u32 {
        for i in 0..sx as u32 {
            let v0 = j * row + i;
            // Counter-clockwise viewed from +Z.
            mesh.add_face(vec![v0, v0 + 1, v0 + 1 + row, v0 + row])?;
        }
    }

    Ok(mesh)
}
