//! Triangle type for geometric calculations.

use nalgebra::{Point3, Vector3};

/// Squared cross-product length below which a triangle counts as degenerate.
///
/// Absolute, in squared native units. Assumes millimetre-scale input, so
/// very small or very large parts may need a different threshold.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// A triangle with concrete vertex positions.
///
/// Used transiently while walking a mesh; it stores positions rather than
/// indices.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-10);
/// assert!(!tri.is_degenerate(1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Build a triangle from the 9 floats of one soup entry.
    ///
    /// Returns `None` if `coords` holds fewer than 9 values.
    #[must_use]
    pub fn from_f32(coords: &[f32]) -> Option<Self> {
        let c = coords.get(..9)?;
        Some(Self {
            v0: Point3::new(f64::from(c[0]), f64::from(c[1]), f64::from(c[2])),
            v1: Point3::new(f64::from(c[3]), f64::from(c[4]), f64::from(c[5])),
            v2: Point3::new(f64::from(c[6]), f64::from(c[7]), f64::from(c[8])),
        })
    }

    /// Cross product of the two edges leaving `v0`.
    ///
    /// Its direction follows the right-hand rule and its magnitude equals
    /// twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the unit face normal.
    ///
    /// Returns `None` for zero-area triangles.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        self.normal_unnormalized().try_normalize(f64::EPSILON)
    }

    /// Compute the area of the triangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Degeneracy test on the squared edge cross product.
    ///
    /// The triangle is degenerate when `|e1 × e2|²` falls below `epsilon`.
    /// The threshold is absolute, in squared native units.
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3};
    ///
    /// let collinear = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// );
    /// assert!(collinear.is_degenerate(1e-12));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.normal_unnormalized().norm_squared() < epsilon
    }

    /// Get vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }
}
