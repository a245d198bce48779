//! Error types for mesh analysis and repair.

use mesh_types::MeshError;
use thiserror::Error;

/// Result type for repair operations.
pub type Result<T> = std::result::Result<T, RepairError>;

/// Errors that can occur while repairing a mesh.
///
/// These never escape [`repair`](crate::repair); they are folded into a
/// [`RepairResult`](crate::RepairResult) with `success == false`.
#[derive(Debug, Error)]
pub enum RepairError {
    /// Mesh has no triangles.
    #[error("mesh is empty")]
    EmptyMesh,

    /// Mesh buffers are malformed.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// Every triangle failed the degeneracy test, nothing would survive.
    #[error("all {count} triangles are degenerate")]
    AllDegenerate {
        /// Number of triangles in the input.
        count: usize,
    },
}
