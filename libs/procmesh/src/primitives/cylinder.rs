//! # Cylinder Primitive
//!
//! Generates a closed cylinder: side quads plus two n-gon polygon caps.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a cylinder mesh along the Z axis.
///
/// # Arguments
///
/// * `height` - Height along Z
/// * `radius` - Cylinder radius
/// * `center` - If true, center vertically at origin
/// * `segments` - Number of segments around the circumference
///
/// # Returns
///
/// A watertight mesh: `2 * segments` vertices, `segments` side quads and
/// two `segments`-gon caps.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(10.0, 5.0, false, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 64);
/// assert_eq!(mesh.face_count(), 34);
/// ```
pub fn create_cylinder(
    height: f64,
    radius: f64,
    center: bool,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::invalid_range(
            "height",
            height,
            "must be positive",
        ));
    }
    if radius <= 0.0 {
        return Err(MeshError::invalid_range(
            "radius",
            radius,
            "must be positive",
        ));
    }
    if segments < 3 {
        return Err(MeshError::invalid_range(
            "segments",
            segments as f64,
            "must be at least 3",
        ));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, n + 2);

    let z_bottom = if center { -height / 2.0 } else { 0.0 };
    let z_top = z_bottom + height;

    // Bottom ring, then top ring, both counter-clockwise seen from +Z.
    for &z in &[z_bottom, z_top] {
        for j in 0..n {
            let theta = TAU * j as f64 / n as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z));
        }
    }

    let n = n as u32;
    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_face(vec![j, j_next, n + j_next, n + j])?;
    }

    // Bottom cap winds clockwise seen from +Z so its normal points down.
    mesh.add_face((0..n).rev().collect())?;
    mesh.add_face((n..2 * n).collect())?;

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(10.0, 5.0, false, 16).unwrap();
        assert_eq!(mesh.vertex_count(), 32);
        assert_eq!(mesh.face_count(), 18);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cylinder_caps_are_ngons() {
        let mesh = create_cylinder(4.0, 1.0, false, 8).unwrap();
        assert_eq!(mesh.face(8).unwrap().len(), 8);
        assert_eq!(mesh.face(9).unwrap().len(), 8);
    }

    #[test]
    fn test_cylinder_cap_normals() {
        let mesh = create_cylinder(4.0, 1.0, true, 8).unwrap();
        let bottom = mesh.face_normal(8).unwrap();
        let top = mesh.face_normal(9).unwrap();
        assert!((bottom + DVec3::Z).length() < 1e-12);
        assert!((top - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_cylinder_centered() {
        let mesh = create_cylinder(10.0, 2.0, true, 12).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!((min.z + 5.0).abs() < 1e-12);
        assert!((max.z - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_cylinder_is_watertight() {
        use std::collections::HashSet;

        let mesh = create_cylinder(2.0, 1.0, false, 6).unwrap();
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
    fn test_cylinder_invalid_parameters() {
        assert!(create_cylinder(0.0, 1.0, false, 8).is_err());
        assert!(create_cylinder(1.0, -1.0, false, 8).is_err());
        assert!(create_cylinder(1.0, 1.0, false, 2).is_err());
    }
}
