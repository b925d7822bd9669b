//! # Mesh Data Structure
//!
//! Core indexed mesh representation: vertex positions plus polygon faces.

use config::constants::{DEGENERATE_NORMAL_EPSILON, MIN_FACE_VERTICES};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// An ordered sequence of vertex indices defining a polygon.
///
/// The index order defines the winding, which defines the outward-normal
/// direction via the right-hand rule. A face must reference at least three
/// vertices; arity is enforced at insertion by [`Mesh::add_face`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    indices: Vec<u32>,
}

impl Face {
    pub(crate) fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// Returns the vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of vertices (= number of edges) of the polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the face references no vertices. Never true for a
    /// face stored in a [`Mesh`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates the directed edges `(from, to)` of the polygon, wrapping
    /// from the last index back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }

    /// Reverses the winding order, flipping the outward-normal direction.
    pub fn reverse(&mut self) {
        self.indices.reverse();
    }
}

/// An indexed polygon mesh.
///
/// All geometry calculations use f64. Vertices are identified solely by
/// their position in the vertex sequence; the sequence is never reordered
/// or compacted implicitly, so indices recorded before a modifier call stay
/// valid afterwards. Faces are never deduplicated: two faces with identical
/// index sets may coexist (extrusion with `scale=1, amount=0` produces
/// exactly that).
///
/// # Example
///
/// ```rust
/// use procmesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(vec![0, 1, 2]).unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Polygon faces (index sequences into `vertices`)
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a polygon face from an index list and returns its face index.
    ///
    /// Validates before mutating: the face must have at least
    /// [`MIN_FACE_VERTICES`] indices and every index must reference an
    /// existing vertex. On error the mesh is unchanged.
    pub fn add_face(&mut self, indices: Vec<u32>) -> Result<usize, MeshError> {
        if indices.len() < MIN_FACE_VERTICES {
            return Err(MeshError::degenerate(format!(
                "face needs at least {} vertices, got {}",
                MIN_FACE_VERTICES,
                indices.len()
            )));
        }
        let vertex_count = self.vertices.len();
        for &index in &indices {
            if index as usize >= vertex_count {
                return Err(MeshError::DanglingIndex {
                    index,
                    count: vertex_count,
                });
            }
        }
        let face_index = self.faces.len();
        self.faces.push(Face::new(indices));
        Ok(face_index)
    }

    /// Removes the face at `index`, returning it.
    ///
    /// The remaining faces keep their relative order; vertex indices are
    /// untouched, so removal never invalidates other faces.
    pub fn remove_face(&mut self, index: usize) -> Result<Face, MeshError> {
        if index >= self.faces.len() {
            return Err(MeshError::FaceOutOfBounds {
                index,
                count: self.faces.len(),
            });
        }
        Ok(self.faces.remove(index))
    }

    /// Removes every face whose index appears in `indices`.
    ///
    /// Surviving faces keep their relative order. Out-of-bounds entries are
    /// rejected before any face is removed.
    pub fn remove_faces(&mut self, indices: &[usize]) -> Result<(), MeshError> {
        let count = self.faces.len();
        if let Some(&bad) = indices.iter().find(|&&i| i >= count) {
            return Err(MeshError::FaceOutOfBounds { index: bad, count });
        }
        let doomed: std::collections::HashSet<usize> = indices.iter().copied().collect();
        let mut i = 0;
        self.faces.retain(|_| {
            let keep = !doomed.contains(&i);
            i += 1;
            keep
        });
        Ok(())
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a mutable reference to the vertices.
    ///
    /// Positions may be rewritten freely; the slice length cannot change,
    /// so face indices stay valid.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [DVec3] {
        &mut self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns a reference to the face at the given index.
    pub fn face(&self, index: usize) -> Result<&Face, MeshError> {
        self.faces.get(index).ok_or(MeshError::FaceOutOfBounds {
            index,
            count: self.faces.len(),
        })
    }

    pub(crate) fn face_mut(&mut self, index: usize) -> Result<&mut Face, MeshError> {
        let count = self.faces.len();
        self.faces
            .get_mut(index)
            .ok_or(MeshError::FaceOutOfBounds { index, count })
    }

    /// Computes the outward normal of a face using Newell's method.
    ///
    /// Robust for non-triangular, non-convex, near-planar polygons. Returns
    /// the zero vector for a degenerate polygon (collinear or coincident
    /// vertices).
    pub fn face_normal(&self, index: usize) -> Result<DVec3, MeshError> {
        let face = self.face(index)?;
        let mut normal = DVec3::ZERO;
        for (from, to) in face.edges() {
            let a = self.vertices[from as usize];
            let b = self.vertices[to as usize];
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        if normal.length_squared() < DEGENERATE_NORMAL_EPSILON {
            return Ok(DVec3::ZERO);
        }
        Ok(normal.normalize())
    }

    /// Computes the centroid of a face (arithmetic mean of its vertices).
    pub fn face_centroid(&self, index: usize) -> Result<DVec3, MeshError> {
        let face = self.face(index)?;
        let mut sum = DVec3::ZERO;
        for &i in face.indices() {
            sum += self.vertices[i as usize];
        }
        Ok(sum / face.len() as f64)
    }

    /// Reverses the winding of every face, flipping the mesh inside out.
    pub fn flip_winding(&mut self) {
        for face in &mut self.faces {
            face.reverse();
        }
    }

    /// Merges another mesh into this one.
    ///
    /// The appended faces' indices are shifted by the receiver's pre-merge
    /// vertex count. Solidify relies on exactly this shift rule to address
    /// inner-shell vertices as `k + i`.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for face in &other.faces {
            let shifted: Vec<u32> = face.indices().iter().map(|&i| i + offset).collect();
            self.faces.push(Face::new(shifted));
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every face has at least three indices
    /// - Every face index references an existing vertex
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for face in &self.faces {
            if face.len() < MIN_FACE_VERTICES {
                return false;
            }
            if face.indices().iter().any(|&i| i >= vertex_count) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_face() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        let idx = mesh.add_face(vec![0, 1, 2]).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0).unwrap().indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_mesh_add_face_too_small() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        let result = mesh.add_face(vec![0, 1]);
        assert!(result.is_err());
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_face_dangling_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        let result = mesh.add_face(vec![0, 1, 2]);
        assert!(matches!(
            result,
            Err(MeshError::DanglingIndex { index: 1, count: 1 })
        ));
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_remove_face_keeps_order() {
        let mut mesh = Mesh::new();
        for _ in 0..3 {
            mesh.add_vertex(DVec3::ZERO);
        }
        mesh.add_face(vec![0, 1, 2]).unwrap();
        mesh.add_face(vec![2, 1, 0]).unwrap();
        mesh.add_face(vec![1, 2, 0]).unwrap();

        let removed = mesh.remove_face(1).unwrap();
        assert_eq!(removed.indices(), &[2, 1, 0]);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.face(0).unwrap().indices(), &[0, 1, 2]);
        assert_eq!(mesh.face(1).unwrap().indices(), &[1, 2, 0]);
    }

    #[test]
    fn test_mesh_remove_faces_rejects_out_of_bounds_before_mutating() {
        let mut mesh = Mesh::new();
        for _ in 0..3 {
            mesh.add_vertex(DVec3::ZERO);
        }
        mesh.add_face(vec![0, 1, 2]).unwrap();

        let result = mesh.remove_faces(&[0, 7]);
        assert!(result.is_err());
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_face_edges_wrap() {
        let face = Face::new(vec![3, 5, 9]);
        let edges: Vec<(u32, u32)> = face.edges().collect();
        assert_eq!(edges, vec![(3, 5), (5, 9), (9, 3)]);
    }

    #[test]
    fn test_face_normal_quad() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(vec![0, 1, 2, 3]).unwrap();

        let normal = mesh.face_normal(0).unwrap();
        assert!((normal - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_face_normal_degenerate() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0)); // collinear
        mesh.add_face(vec![0, 1, 2]).unwrap();

        assert_eq!(mesh.face_normal(0).unwrap(), DVec3::ZERO);
    }

    #[test]
    fn test_face_centroid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(2.0, 2.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 2.0, 0.0));
        mesh.add_face(vec![0, 1, 2, 3]).unwrap();

        assert_eq!(mesh.face_centroid(0).unwrap(), DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_mesh_merge_shifts_indices() {
        let mut mesh1 = Mesh::new();
        mesh1.add_vertex(DVec3::ZERO);
        mesh1.add_vertex(DVec3::X);
        mesh1.add_vertex(DVec3::Y);
        mesh1.add_face(vec![0, 1, 2]).unwrap();

        let mut mesh2 = Mesh::new();
        mesh2.add_vertex(DVec3::Z);
        mesh2.add_vertex(DVec3::new(1.0, 0.0, 1.0));
        mesh2.add_vertex(DVec3::new(0.0, 1.0, 1.0));
        mesh2.add_face(vec![0, 1, 2]).unwrap();

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.face_count(), 2);
        assert_eq!(mesh1.face(1).unwrap().indices(), &[3, 4, 5]); // Offset by 3
    }

    #[test]
    fn test_flip_winding_reverses_normal() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(vec![0, 1, 2]).unwrap();

        let before = mesh.face_normal(0).unwrap();
        mesh.flip_winding();
        let after = mesh.face_normal(0).unwrap();
        assert!((before + after).length() < 1e-12);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(vec![0, 1, 2]).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_mesh_duplicate_faces_allowed() {
        let mut mesh = Mesh::new();
        for _ in 0..3 {
            mesh.add_vertex(DVec3::ZERO);
        }
        mesh.add_face(vec![0, 1, 2]).unwrap();
        mesh.add_face(vec![0, 1, 2]).unwrap();
        assert_eq!(mesh.face_count(), 2);
        assert!(mesh.validate());
    }
}
