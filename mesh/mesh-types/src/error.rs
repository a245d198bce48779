//! Structural errors for triangle soups.

use thiserror::Error;

/// A triangle soup that cannot be processed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// The position buffer does not hold whole triangles.
    #[error("position buffer holds {len} floats, expected a multiple of 9")]
    MalformedPositions {
        /// Length of the position buffer.
        len: usize,
    },

    /// The normal buffer does not line up with the positions.
    #[error("normal buffer holds {normals} floats but positions hold {positions}")]
    NormalLengthMismatch {
        /// Length of the position buffer.
        positions: usize,
        /// Length of the normal buffer.
        normals: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at float index {index}")]
    NonFinite {
        /// Offset of the bad value in the position buffer.
        index: usize,
    },
}
