//! Baseplate sections and their identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// ID generator for merged sections.
///
/// Thread-safe counter for generating unique IDs.
pub struct SectionIdGenerator {
    next_id: AtomicU64,
}

impl Default for SectionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionIdGenerator {
    /// Create a new ID generator starting at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
        }
    }

    /// Generate the next unique ID, formatted `merged-<n>`.
    pub fn next(&self) -> String {
        format!("merged-{}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

static ID_GENERATOR: SectionIdGenerator = SectionIdGenerator::new();

/// Generate a new unique section ID from the process-wide counter.
#[must_use]
pub fn next_section_id() -> String {
    ID_GENERATOR.next()
}

/// Axis-aligned rectangle on the ground plane.
///
/// Invariant: `min_x <= max_x` and `min_z <= max_z`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseplateSection {
    /// Identifier, kept while the section is untouched by merging.
    pub id: String,
    /// Minimum X.
    pub min_x: f64,
    /// Maximum X.
    pub max_x: f64,
    /// Minimum Z.
    pub min_z: f64,
    /// Maximum Z.
    pub max_z: f64,
}

impl BaseplateSection {
    /// Create a section from two X and two Z bounds in any order.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_baseplate::BaseplateSection;
    ///
    /// let s = BaseplateSection::new("a", 10.0, 0.0, 5.0, -5.0);
    /// assert_eq!((s.min_x, s.max_x, s.min_z, s.max_z), (0.0, 10.0, -5.0, 5.0));
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, x0: f64, x1: f64, z0: f64, z1: f64) -> Self {
        Self {
            id: id.into(),
            min_x: x0.min(x1),
            max_x: x0.max(x1),
            min_z: z0.min(z1),
            max_z: z0.max(z1),
        }
    }

    /// Whether the two rectangles overlap on both axes.
    ///
    /// Rectangles that only touch along an edge or corner count as overlapping.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_z < other.min_z
            || self.min_z > other.max_z)
    }

    /// Bounding union of two sections under a fresh identifier.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.expand_to(other);
        merged.id = next_section_id();
        merged
    }

    /// Grow in place to cover `other`, keeping the current identifier.
    pub(crate) fn expand_to(&mut self, other: &Self) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_z = self.min_z.min(other.min_z);
        self.max_z = self.max_z.max(other.max_z);
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along Z.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Ground area covered.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.depth()
    }
}

impl fmt::Display for BaseplateSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [x {:.2}..{:.2}, z {:.2}..{:.2}]",
            self.id, self.min_x, self.max_x, self.min_z, self.max_z
        )
    }
}
