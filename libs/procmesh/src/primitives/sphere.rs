//! # Sphere Primitive
//!
//! Generates a sphere from latitude/longitude tessellation: quad bands
//! between rings, triangle fans at the poles.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a sphere mesh centered at the origin.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `segments` - Number of segments around the circumference
///
/// # Returns
///
/// A watertight mesh with two pole vertices, `segments` vertices per
/// interior ring, quad faces between rings and triangle fans at each pole.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 16).unwrap();
/// assert!(mesh.vertex_count() > 0);
/// assert!(mesh.validate());
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
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

    let stacks = (segments / 2).max(2);
    let n = segments;

    let mut mesh = Mesh::new();

    let north = mesh.add_vertex(DVec3::new(0.0, 0.0, radius));

    // Interior rings, north to south.
    let mut rings: Vec<Vec<u32>> = Vec::with_capacity((stacks - 1) as usize);
    for i in 1..stacks {
        let phi = PI * i as f64 / stacks as f64;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let mut ring = Vec::with_capacity(n as usize);
        for j in 0..n {
            let theta = TAU * j as f64 / n as f64;
            ring.push(mesh.add_vertex(DVec3::new(
                radius * sin_phi * theta.cos(),
                radius * sin_phi * theta.sin(),
                radius * cos_phi,
            )));
        }
        rings.push(ring);
    }

    let south = mesh.add_vertex(DVec3::new(0.0, 0.0, -radius));

    // North fan.
    let first = &rings[0];
    for j in 0..n as usize {
        let j_next = (j + 1) % n as usize;
        mesh.add_face(vec![north, first[j], first[j_next]])?;
    }

    // Quad bands between consecutive rings.
    for pair in rings.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        for j in 0..n as usize {
            let j_next = (j + 1) % n as usize;
            mesh.add_face(vec![upper[j], lower[j], lower[j_next], upper[j_next]])?;
        }
    }

    // South fan, theta walked backwards to keep the normal outward.
    let last = &rings[rings.len() - 1];
    for j in 0..n as usize {
        let j_next = (j + 1) % n as usize;
        mesh.add_face(vec![south, last[j_next], last[j]])?;
    }

    Ok(mesh)
}
