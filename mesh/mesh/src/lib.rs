//! Mesh toolkit for fixture CAD.
//!
//! This umbrella crate re-exports the mesh-* crates and adds the staged
//! pipeline that prepares an imported part for interactive use. Every crate
//! is plain Rust with no rendering dependencies, so the same code runs in a
//! desktop app, a worker thread, or a headless service.
//!
//! # Quick Start
//!
//! ```
//! use mesh::prelude::*;
//!
//! // A loader hands over a non-indexed soup
//! let part = TriangleSoup::from_indexed(&mesh::types::unit_cube());
//!
//! // Analyze, repair if needed, decimate if heavy
//! let result = run_pipeline(&part, &PipelineOptions::default(), |stage, percent, message| {
//!     println!("[{stage} {percent:>3}%] {message}");
//! });
//! assert!(result.analysis.is_manifold);
//!
//! // Outline the part on the ground plane with a 5 unit margin
//! let points = collect_world_points(&[(&result.final_mesh, Matrix4::identity())]);
//! let footprint = build_footprint(&points, 5.0, 100.0, 100.0);
//! assert!(footprint.area() > 1.0);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `TriangleSoup`, `IndexedMesh`, `Vertex`, `Triangle`, `Aabb`
//! - [`repair`] - Manifold analysis and degenerate-triangle repair
//! - [`decimate`] - Spatial-hash vertex-clustering simplification
//! - [`baseplate`] - Ground-plane footprints and section merging
//! - [`pipeline`] - Analyze, repair and decimate in one staged run
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize the value types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod pipeline;

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `TriangleSoup`, `IndexedMesh`, `Vertex`, `Triangle`, `Aabb`.
pub use mesh_types as types;

/// Manifold analysis and degenerate-triangle repair.
pub use mesh_repair as repair;

/// Mesh simplification (vertex clustering).
pub use mesh_decimate as decimate;

/// Ground-plane footprints and baseplate section merging.
pub use mesh_baseplate as baseplate;

pub use pipeline::{
    MeshPipeline, PipelineOptions, PipelineResult, PipelineStage, run_pipeline,
};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for mesh processing.
///
/// This module re-exports the most commonly used types and functions.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{
        Aabb, AccelerationBuilder, IndexedMesh, Matrix4, MeshBounds, Point2, Point3, TriangleSoup,
    };

    // Analysis and repair
    pub use mesh_repair::{AnalysisResult, RepairResult, analyze, repair};

    // Decimation
    pub use mesh_decimate::{DecimationResult, decimate};

    // Baseplate
    pub use mesh_baseplate::{
        BaseplateSection, Polygon, build_footprint, collect_world_points, merge_sections,
    };

    // Pipeline
    pub use crate::pipeline::{PipelineOptions, PipelineResult, PipelineStage, run_pipeline};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        // Verify prelude types are accessible
        use prelude::*;

        let soup = TriangleSoup::new();
        assert_eq!(soup.vertex_count(), 0);
        assert_eq!(soup.triangle_count(), 0);

        let merged = merge_sections(&[]);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_module_reexports() {
        // Verify all modules are accessible
        let _ = types::IndexedMesh::new();
        let _ = repair::RepairParams::default();
        let _ = decimate::DecimateParams::default();
        let _ = baseplate::FootprintParams::default();
        let _ = PipelineOptions::default();
    }
}
