//! # Cube Primitive
//!
//! Generates a closed box of six quad faces.

use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a cube or rectangular prism mesh.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - If true, center at origin; if false, corner at origin
///
/// # Returns
///
/// A watertight mesh with 8 vertices and 6 outward-wound quad faces: every
/// directed edge has exactly one reverse partner, so solidify finds no
/// boundary to stitch.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::splat(10.0), false).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_cube(size: DVec3, center: bool) -> Result<Mesh, MeshError> {
    if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::invalid_range(
            "size",
            size.min_element(),
            "must be positive",
        ));
    }

    let mut mesh = Mesh::with_capacity(8, 6);

    let (min, max) = if center {
        let half = size / 2.0;
        (-half, half)
    } else {
        (DVec3::ZERO, size)
    };

    // Bottom ring (z = min.z), then top ring (z = max.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // One quad per side, counter-clockwise seen from outside.
    mesh.add_face(vec![v0, v3, v2, v1])?; // bottom (z = min.z)
    mesh.add_face(vec![v4, v5, v6, v7])?; // top (z = max.z)
    mesh.add_face(vec![v0, v1, v5, v4])?; // front (y = min.y)
    mesh.add_face(vec![v2, v3, v7, v6])?; // back (y = max.y)
    mesh.add_face(vec![v3, v0, v4, v7])?; // left (x = min.x)
    mesh.add_face(vec![v1, v2, v6, v5])?; // right (x = max.x)

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let mesh = create_cube(DVec3::splat(10.0), false).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cube_not_centered() {
        let mesh = create_cube(DVec3::splat(10.0), false).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::splat(10.0));
    }

    #[test]
    fn test_cube_centered() {
        let mesh = create_cube(DVec3::splat(10.0), true).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-5.0));
        assert_eq!(max, DVec3::splat(5.0));
    }

    #[test]
    fn test_cube_faces_point_outward() {
        let mesh = create_cube(DVec3::splat(2.0), true).unwrap();
        for i in 0..mesh.face_count() {
            let normal = mesh.face_normal(i).unwrap();
            let centroid = mesh.face_centroid(i).unwrap();
            assert!(normal.dot(centroid) > 0.0, "face {i} points inward");
        }
    }

    #[test]
    fn test_cube_is_watertight() {
        // Every directed edge must have exactly one reverse partner.
        use std::collections::HashSet;

        let mesh = create_cube(DVec3::splat(1.0), false).unwrap();
        let mut edges = HashSet::new();
        for face in mesh.faces() {
            for edge in face.edges() {
                assert!(edges.insert(edge), "edge {edge:?} claimed twice");
            }
        }
        for &(from, to) in &edges {
            assert!(edges.contains(&(to, from)), "edge ({from},{to}) is open");
        }
    }

    #[test]
    fn test_cube_invalid_size() {
        assert!(create_cube(DVec3::new(0.0, 10.0, 10.0), false).is_err());
        assert!(create_cube(DVec3::new(-5.0, 10.0, 10.0), false).is_err());
    }
}
