//! Error types for mesh decimation operations.

use mesh_types::MeshError;
use thiserror::Error;

/// Errors that can occur during decimation operations.
///
/// [`decimate`](crate::decimate) folds these into a failed
/// [`DecimationResult`](crate::DecimationResult); they are only returned
/// directly by [`cluster_vertices`](crate::cluster_vertices).
#[derive(Debug, Error)]
pub enum DecimateError {
    /// Mesh has no triangles.
    #[error("Mesh has no triangles")]
    EmptyMesh,

    /// Mesh buffers are malformed.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// All vertices coincide, so no cell size can be derived.
    #[error("Mesh bounds have zero extent")]
    DegenerateBounds,

    /// Cell size is not a positive finite number.
    #[error("Invalid cell size: {0}")]
    InvalidCellSize(f64),

    /// Clustering removed every triangle.
    #[error("Clustering collapsed all {0} triangles")]
    Collapsed(usize),
}

/// Result type for decimation operations.
pub type DecimateResult<T> = std::result::Result<T, DecimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DecimateError::EmptyMesh;
        assert_eq!(format!("{err}"), "Mesh has no triangles");

        let err = DecimateError::InvalidCellSize(-1.5);
        assert!(format!("{err}").contains("-1.5"));

        let err = DecimateError::from(MeshError::MalformedPositions { len: 10 });
        assert!(format!("{err}").starts_with("Invalid mesh"));
    }
}
