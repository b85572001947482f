// src/geometry/mod.rs
// Geometry module hub: mesh arena, topology handles, and shared error type
// Exists to centralize construction, extrusion, and validation of way geometry
// RELEVANT FILES:src/geometry/build.rs,src/geometry/extrude.rs,src/geometry/validate.rs

mod build;
mod extrude;
mod validate;

pub use build::{build_polygon, build_polyline};
pub use extrude::{extrude_chain, extrude_face, Extrusion};
pub use validate::{validate_mesh, MeshStats, MeshValidationIssue, MeshValidationReport};

use glam::Vec3;

/// Arena-style mesh accumulator.
///
/// Vertices, n-gon faces, and open edges live in flat buffers; faces and
/// edges reference vertices by stable `u32` index, never by address. In
/// shared mode one buffer accumulates every way of the run; in isolated mode
/// each way gets a fresh buffer that is finalized into an output entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    pub positions: Vec<[f32; 3]>,
    pub faces: Vec<Vec<u32>>,
    pub edges: Vec<[u32; 2]>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, face_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            faces: Vec::with_capacity(face_capacity),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex indices of a face, in ring order.
    pub fn face(&self, handle: FaceHandle) -> &[u32] {
        &self.faces[handle.0]
    }

    pub(crate) fn push_vertex(&mut self, point: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push([point.x, point.y, point.z]);
        index
    }

    pub(crate) fn push_face(&mut self, vertices: Vec<u32>) -> FaceHandle {
        self.faces.push(vertices);
        FaceHandle(self.faces.len() - 1)
    }
}

/// Stable index of a face within its [`MeshBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceHandle(pub usize);

/// A run of consecutively created vertices joined by open edges.
///
/// The chain is never implicitly closed; a chain of `n` vertices carries
/// `n - 1` edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeChain {
    pub(crate) start_vertex: u32,
    pub(crate) vertex_count: u32,
}

impl EdgeChain {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count as usize
    }

    pub fn edge_count(&self) -> usize {
        self.vertex_count as usize - 1
    }
}

/// Error type returned by geometry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("polygon requires at least three vertices, got {0}")]
    PolygonTooSmall(usize),

    #[error("polyline requires at least two vertices, got {0}")]
    PolylineTooSmall(usize),

    #[error("extrusion thickness must be non-negative, got {0}")]
    NegativeThickness(f32),

    #[error("extrusion thickness must be finite")]
    NonFiniteThickness,

    #[error("face index {0} out of bounds")]
    UnknownFace(usize),

    #[error("edge chain references vertices past the end of the buffer")]
    ChainOutOfBounds,
}

/// Convenience alias for geometry results.
pub type GeometryResult<T> = Result<T, GeometryError>;
