//! # Procmesh
//!
//! In-memory indexed-polygon-mesh kernel for procedurally building and
//! transforming 3D surfaces.
//!
//! ## Architecture
//!
//! ```text
//! generator (primitives) → Mesh → Modifier chain → Mesh
//! ```
//!
//! A generator produces a fresh [`Mesh`]; zero or more [`Modifier`]s are
//! applied in sequence, each mutating the mesh in place through an exclusive
//! reference. Faces are arbitrary polygons (index sequences of length >= 3),
//! not just triangles; winding order defines the outward normal by the
//! right-hand rule.
//!
//! ## Algorithms
//!
//! - **Vertex normals**: unweighted average of Newell face normals
//! - **Extrusion**: per-face ring duplication with side-wall quads
//! - **Solidify**: shell offset with directed-edge boundary stitching
//! - **Holes / Wireframe**: compositions of extrusion and solidify
//!
//! ## Usage
//!
//! ```rust
//! use procmesh::primitives::create_plane;
//! use procmesh::ops::solidify::Solidify;
//! use procmesh::Modifier;
//! use glam::{DVec2, UVec2};
//!
//! let mut mesh = create_plane(DVec2::splat(10.0), UVec2::splat(1)).unwrap();
//! Solidify { thickness: 0.5 }.apply(&mut mesh).unwrap();
//! assert_eq!(mesh.face_count(), 6); // 2 shells + 4 stitched boundary edges
//! ```

pub mod error;
pub mod mesh;
pub mod modifier;
pub mod modifiers;
pub mod normals;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use mesh::{Face, Mesh};
pub use modifier::{Modifier, Pipeline};
pub use normals::vertex_normals;
