//! Parameters for footprint building.

/// Grid spacing used to deduplicate projected points.
pub const DEDUP_QUANTUM: f64 = 0.01;

/// Upper bound on the number of points fed to the hull.
pub const MAX_FOOTPRINT_SAMPLES: usize = 5000;

/// Miter offsets are clamped to this multiple of the margin.
pub const MITER_LIMIT: f64 = 4.0;

/// Averaged edge normals shorter than this are treated as undefined.
pub const NEAR_PARALLEL_EPSILON: f64 = 0.001;

/// Segments per quarter-round corner of the fallback rectangle.
pub const DEFAULT_CORNER_SEGMENTS: usize = 8;

/// Corner radius of the fallback rectangle, as a fraction of its smaller side.
pub const CORNER_RADIUS_RATIO: f64 = 0.1;

/// How a hull is pushed outward by the margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetStrategy {
    /// Push every vertex directly away from the vertex centroid.
    ///
    /// Cheap and approximate: edges do not stay parallel to the originals.
    #[default]
    Radial,

    /// Push every vertex along the bisector of its two edge normals, so
    /// edges stay parallel at the margin distance.
    Miter,
}

/// Parameters for [`build_footprint_with`](crate::build_footprint_with).
///
/// # Example
///
/// ```
/// use mesh_baseplate::{FootprintParams, OffsetStrategy};
///
/// let params = FootprintParams::new(5.0, 120.0, 80.0).with_offset(OffsetStrategy::Miter);
/// assert_eq!(params.offset, OffsetStrategy::Miter);
/// assert_eq!(params.sample_limit, 5000);
/// ```
#[derive(Debug, Clone)]
pub struct FootprintParams {
    /// Outward margin added around the hull.
    pub margin: f64,
    /// Width (along X) of the fallback rectangle.
    pub fallback_width: f64,
    /// Height (along Z) of the fallback rectangle.
    pub fallback_height: f64,
    /// Offset variant. Default: [`OffsetStrategy::Radial`]
    pub offset: OffsetStrategy,
    /// Maximum number of input points considered. Default: [`MAX_FOOTPRINT_SAMPLES`]
    pub sample_limit: usize,
    /// Deduplication grid spacing. Default: [`DEDUP_QUANTUM`]
    pub dedup_quantum: f64,
    /// Miter clamp as a multiple of the margin. Default: [`MITER_LIMIT`]
    pub miter_limit: f64,
    /// Threshold below which a miter direction is undefined. Default: [`NEAR_PARALLEL_EPSILON`]
    pub near_parallel_epsilon: f64,
    /// Segments per fallback corner. Default: [`DEFAULT_CORNER_SEGMENTS`]
    pub corner_segments: usize,
}

impl Default for FootprintParams {
    fn default() -> Self {
        Self {
            margin: 0.0,
            fallback_width: 100.0,
            fallback_height: 100.0,
            offset: OffsetStrategy::Radial,
            sample_limit: MAX_FOOTPRINT_SAMPLES,
            dedup_quantum: DEDUP_QUANTUM,
            miter_limit: MITER_LIMIT,
            near_parallel_epsilon: NEAR_PARALLEL_EPSILON,
            corner_segments: DEFAULT_CORNER_SEGMENTS,
        }
    }
}

impl FootprintParams {
    /// Create params with a margin and fallback size, defaults elsewhere.
    #[must_use]
    pub fn new(margin: f64, fallback_width: f64, fallback_height: f64) -> Self {
        Self {
            margin,
            fallback_width,
            fallback_height,
            ..Default::default()
        }
    }

    /// Select the offset variant.
    #[must_use]
    pub const fn with_offset(mut self, offset: OffsetStrategy) -> Self {
        self.offset = offset;
        self
    }

    /// Set the maximum number of sampled points.
    #[must_use]
    pub const fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }

    /// Set the deduplication grid spacing.
    #[must_use]
    pub const fn with_dedup_quantum(mut self, quantum: f64) -> Self {
        self.dedup_quantum = quantum;
        self
    }

    /// Set the miter clamp.
    #[must_use]
    pub const fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    /// Set the number of segments per fallback corner.
    #[must_use]
    pub const fn with_corner_segments(mut self, segments: usize) -> Self {
        self.corner_segments = segments;
        self
    }
}
