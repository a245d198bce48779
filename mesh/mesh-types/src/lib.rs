//! Core mesh types for the fixture mesh toolkit.
//!
//! This crate provides the foundational types shared by every processing stage:
//!
//! - [`TriangleSoup`] - The canonical non-indexed mesh (9 `f32` per triangle)
//! - [`IndexedMesh`] - A shared-vertex mesh, used internally where topology matters
//! - [`Vertex`] - A point in 3D space with an optional normal
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Canonical Representation
//!
//! Importers hand the pipeline a [`TriangleSoup`]: three vertices per
//! triangle, vertices physically duplicated across neighbouring triangles.
//! Every stage consumes and produces soups. [`IndexedMesh`] is an internal
//! detail of stages that need shared vertices (edge counting, clustering).
//!
//! # Units
//!
//! Coordinates are unit-agnostic. The fixed epsilons used downstream assume
//! millimetre-scale parts.
//!
//! # Coordinate System
//!
//! Y is up. The ground plane is spanned by X and Z, so footprints are
//! expressed as `(x, z)` pairs.
//!
//! # Example
//!
//! ```
//! use mesh_types::{TriangleSoup, MeshBounds};
//!
//! let soup = TriangleSoup::from_positions(vec![
//!     0.0, 0.0, 0.0,
//!     1.0, 0.0, 0.0,
//!     0.0, 1.0, 0.0,
//! ]);
//!
//! assert_eq!(soup.triangle_count(), 1);
//! assert_eq!(soup.vertex_count(), 3);
//! assert!(soup.check().is_ok());
//! assert!((soup.bounds().max_extent() - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod mesh;
mod soup;
mod traits;
mod triangle;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use error::MeshError;
pub use mesh::{IndexedMesh, unit_cube};
pub use soup::{DEFAULT_TRIANGLE_BUDGET, TriangleSoup};
pub use traits::{AccelerationBuilder, AccelerationError, MeshBounds};
pub use triangle::{DEGENERATE_EPSILON, Triangle};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point2, Point3, Vector2, Vector3};
