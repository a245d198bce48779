//! Mesh analysis and repair for triangle soups.
//!
//! This crate provides:
//! - Mesh analysis: degenerate faces, boundary and non-manifold edges,
//!   bounds and a human-readable issue list
//! - Degenerate triangle removal
//! - Flat normal recomputation
//!
//! Edges are identified by welded vertex indices, so a soup whose
//! neighbouring triangles duplicate shared corners is still recognised as
//! closed.
//!
//! # Example
//!
//! ```
//! use mesh_types::{TriangleSoup, unit_cube};
//! use mesh_repair::{analyze, repair_with_analysis, RepairParams};
//!
//! let soup = TriangleSoup::from_indexed(&unit_cube());
//!
//! let analysis = analyze(&soup);
//! assert!(analysis.is_manifold);
//!
//! let result = repair_with_analysis(&soup, Some(&analysis), &RepairParams::default());
//! assert!(result.success);
//! assert_eq!(result.triangle_count, 12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod analyze;
mod error;
mod repair;

pub use adjacency::MeshAdjacency;
pub use analyze::{AnalysisParams, AnalysisResult, analyze, analyze_with_params};
pub use error::{RepairError, Result};
pub use mesh_types::{DEFAULT_TRIANGLE_BUDGET, DEGENERATE_EPSILON};
pub use repair::{
    RepairParams, RepairResult, remove_degenerate_triangles, repair, repair_with_analysis,
};
