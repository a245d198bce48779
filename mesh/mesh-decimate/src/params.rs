//! Parameters for mesh decimation.

use mesh_types::{DEFAULT_TRIANGLE_BUDGET, DEGENERATE_EPSILON};

/// Fraction of the largest bounding-box dimension used as the base cell size.
pub const CELL_SCALE: f64 = 0.01;

/// Parameters for mesh decimation.
#[derive(Debug, Clone)]
pub struct DecimateParams {
    /// Requested triangle count. Best effort: the result may land above or
    /// below it. Meshes at or under it are returned unchanged.
    /// Default: [`DEFAULT_TRIANGLE_BUDGET`]
    pub target_triangles: usize,

    /// Base cell size as a fraction of the largest bounding-box dimension.
    /// Default: [`CELL_SCALE`]
    pub cell_scale: f64,

    /// Degeneracy threshold applied to rebuilt triangles.
    /// Default: [`DEGENERATE_EPSILON`]
    pub degenerate_epsilon: f64,
}

impl Default for DecimateParams {
    fn default() -> Self {
        Self {
            target_triangles: DEFAULT_TRIANGLE_BUDGET,
            cell_scale: CELL_SCALE,
            degenerate_epsilon: DEGENERATE_EPSILON,
        }
    }
}

impl DecimateParams {
    /// Create params targeting a specific triangle count.
    #[must_use]
    pub fn with_target_triangles(count: usize) -> Self {
        Self {
            target_triangles: count,
            ..Default::default()
        }
    }

    /// Create params that merge more aggressively (cells four times larger).
    #[must_use]
    pub fn aggressive(count: usize) -> Self {
        Self {
            target_triangles: count,
            cell_scale: CELL_SCALE * 4.0,
            ..Default::default()
        }
    }

    /// Set the cell scale.
    #[must_use]
    pub const fn with_cell_scale(mut self, scale: f64) -> Self {
        self.cell_scale = scale;
        self
    }

    /// Set the degeneracy threshold for rebuilt triangles.
    #[must_use]
    pub const fn with_degenerate_epsilon(mut self, epsilon: f64) -> Self {
        self.degenerate_epsilon = epsilon;
        self
    }

    /// Edge length of a clustering cell for a mesh of `original` triangles
    /// whose largest bounding-box dimension is `max_extent`.
    ///
    /// `max_extent * cell_scale * sqrt(1 - target / original)`: the further
    /// the target is below the original count, the larger the cells.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Triangle counts stay far below 2^52
    pub fn cell_size(&self, max_extent: f64, original: usize) -> f64 {
        if original == 0 {
            return 0.0;
        }
        let keep = (self.target_triangles as f64 / original as f64).min(1.0);
        max_extent * self.cell_scale * (1.0 - keep).sqrt()
    }
}
