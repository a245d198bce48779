//! Traits for mesh types.

use crate::{Aabb, TriangleSoup};
use nalgebra::Point3;

/// Trait for types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    fn bounds(&self) -> Aabb;

    /// Compute the bounding box, returning `None` if empty.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() { None } else { Some(b) }
    }

    /// Get the center of the bounding box.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}

/// Error returned by an [`AccelerationBuilder`].
pub type AccelerationError = Box<dyn std::error::Error + Send + Sync>;

/// Builds a bounding-volume hierarchy (or any other acceleration structure)
/// for a freshly produced mesh.
///
/// Implemented by the host application. Stages that replace a mesh invoke
/// it afterwards; a failure only costs ray-cast performance and is never
/// propagated as a stage failure.
pub trait AccelerationBuilder {
    /// Discard any structure built for a previous mesh and build one for `mesh`.
    ///
    /// # Errors
    ///
    /// Returns the builder's own error if the structure cannot be built.
    fn rebuild(&self, mesh: &TriangleSoup) -> Result<(), AccelerationError>;
}

impl<F> AccelerationBuilder for F
where
    F: Fn(&TriangleSoup) -> Result<(), AccelerationError>,
{
    fn rebuild(&self, mesh: &TriangleSoup) -> Result<(), AccelerationError> {
        self(mesh)
    }
}
