//! # Modifier Contract
//!
//! The single operation every mesh transformation exposes, plus a pipeline
//! helper for applying an ordered stack of modifiers.

use crate::error::MeshError;
use crate::mesh::Mesh;

/// A mesh transformation applied in place.
///
/// The mesh is threaded through the whole chain as one exclusively-borrowed
/// buffer; on success the invariants of [`Mesh`] hold (no dangling indices,
/// no implicit vertex reordering). On error, the primitives that validate
/// up front (extrusion, the per-vertex modifiers) leave the mesh untouched.
pub trait Modifier {
    /// Applies the modifier to the mesh.
    fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError>;
}

/// An ordered stack of modifiers applied in sequence.
///
/// # Example
///
/// ```rust
/// use procmesh::{Mesh, Pipeline};
/// use procmesh::modifiers::Translate;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let pipeline = Pipeline::new()
///     .with(Translate { delta: DVec3::X })
///     .with(Translate { delta: DVec3::Y });
/// pipeline.apply(&mut mesh).unwrap();
/// ```
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Modifier>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a modifier stage, builder-style.
    pub fn with(mut self, modifier: impl Modifier + 'static) -> Self {
        self.stages.push(Box::new(modifier));
        self
    }

    /// Appends a boxed modifier stage.
    pub fn push(&mut self, modifier: Box<dyn Modifier>) {
        self.stages.push(modifier);
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Applies every stage to the mesh, in order, stopping at the first
    /// error.
    pub fn apply(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        for stage in &self.stages {
            stage.apply(mesh)?;
        }
        Ok(())
    }
}
