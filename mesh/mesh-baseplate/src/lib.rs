//! Baseplate geometry on the ground plane.
//!
//! This crate turns placed parts into the 2D outlines a fixture baseplate is
//! extruded from:
//!
//! - **Footprints**: sample world-space vertices, wrap them in a convex hull
//!   and push it outward by a margin ([`build_footprint`])
//! - **Sections**: merge user-drawn rectangular sections that overlap
//!   ([`merge_sections`])
//!
//! # Coordinates
//!
//! Y is up and is dropped on projection. A [`Polygon`] point stores world X
//! in `.x` and world Z in `.y`.
//!
//! # Example
//!
//! ```
//! use mesh_baseplate::{
//!     build_footprint_with, collect_world_points, FootprintParams, OffsetStrategy,
//! };
//! use mesh_types::{Matrix4, TriangleSoup, Vector3, unit_cube};
//!
//! let cube = TriangleSoup::from_indexed(&unit_cube());
//! let placed = Matrix4::new_translation(&Vector3::new(20.0, 0.0, 0.0));
//! let points = collect_world_points(&[(&cube, Matrix4::identity()), (&cube, placed)]);
//!
//! let params = FootprintParams::new(1.0, 50.0, 50.0).with_offset(OffsetStrategy::Miter);
//! let footprint = build_footprint_with(&points, &params);
//!
//! // Hull of both cubes: 21 x 1, grown by 1 on every side
//! assert!((footprint.area() - 23.0 * 3.0).abs() < 1e-9);
//! ```
//!
//! # Failure Semantics
//!
//! Footprint building never fails: when the input has no hull (fewer than
//! three distinct points) a rounded rectangle of the caller's fallback size
//! is returned so the baseplate stays renderable.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod footprint;
mod hull;
mod merge;
mod offset;
mod params;
mod polygon;
mod rounded;
mod sample;
mod section;

pub use footprint::{build_footprint, build_footprint_with};
pub use hull::convex_hull;
pub use merge::{merge_sections, merge_sections_counted};
pub use offset::{offset_miter, offset_radial};
pub use params::{
    CORNER_RADIUS_RATIO, DEDUP_QUANTUM, DEFAULT_CORNER_SEGMENTS, FootprintParams, MAX_FOOTPRINT_SAMPLES,
    MITER_LIMIT, NEAR_PARALLEL_EPSILON, OffsetStrategy,
};
pub use polygon::{Polygon, Winding};
pub use rounded::rounded_rectangle;
pub use sample::{collect_world_points, project_to_ground};
pub use section::{BaseplateSection, SectionIdGenerator, next_section_id};
