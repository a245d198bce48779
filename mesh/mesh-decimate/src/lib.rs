//! Mesh simplification using uniform spatial-hash vertex clustering.
//!
//! This crate reduces the triangle count of heavy imported parts so they
//! stay interactive in the viewport. It trades exactness for speed: the
//! requested triangle count is a target, not a guarantee.
//!
//! # Example
//!
//! ```
//! use mesh_types::{TriangleSoup, unit_cube};
//! use mesh_decimate::{decimate_with_params, DecimateParams};
//!
//! let cube = TriangleSoup::from_indexed(&unit_cube());
//!
//! let result = decimate_with_params(&cube, &DecimateParams::with_target_triangles(6));
//! println!("{result}");
//! assert!(result.final_triangles <= result.original_triangles);
//! ```
//!
//! # Algorithm
//!
//! 1. Derive a cell size from the largest bounding-box dimension, scaled by
//!    `sqrt(1 - target / original)` and a fixed [`CELL_SCALE`]
//! 2. Hash every vertex to its grid cell; the first vertex in a cell
//!    represents every later vertex landing there
//! 3. Rebuild triangles on the representatives, dropping collapsed and
//!    degenerate ones
//! 4. Recompute area-weighted vertex normals on the merged mesh and expand
//!    it back to a soup
//!
//! Meshes already at or under the target are returned verbatim, so running
//! decimation twice with the same target is a no-op the second time.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod decimate;
mod error;
mod params;
mod result;

// Re-export main types and functions
pub use decimate::{cluster_vertices, decimate, decimate_with_params};
pub use error::{DecimateError, DecimateResult};
pub use params::{CELL_SCALE, DecimateParams};
pub use result::DecimationResult;
