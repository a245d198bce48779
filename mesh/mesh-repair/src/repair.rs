//! Degenerate-triangle removal and normal recomputation.
//!
//! Repair always works on a copy of the input soup. It removes degenerate
//! triangles and recomputes normals; it does not fill holes, weld vertices
//! or fix winding.

use mesh_types::{DEGENERATE_EPSILON, Triangle, TriangleSoup};
use tracing::{info, warn};

use crate::analyze::{AnalysisResult, counted};
use crate::error::{RepairError, Result};

/// Configuration parameters for mesh repair.
///
/// # Example
///
/// ```
/// use mesh_repair::RepairParams;
///
/// let params = RepairParams::default().with_recompute_normals(false);
/// assert!(!params.recompute_normals);
/// ```
#[derive(Debug, Clone)]
pub struct RepairParams {
    /// Degeneracy threshold on `|e1 × e2|²`.
    ///
    /// Default: [`DEGENERATE_EPSILON`]
    pub degenerate_epsilon: f64,

    /// Whether to rebuild the normal buffer after removal.
    ///
    /// Default: `true`
    pub recompute_normals: bool,
}

impl Default for RepairParams {
    fn default() -> Self {
        Self {
            degenerate_epsilon: DEGENERATE_EPSILON,
            recompute_normals: true,
        }
    }
}

impl RepairParams {
    /// Only remove degenerate triangles, keeping the surviving normals as-is.
    #[must_use]
    pub fn removal_only() -> Self {
        Self {
            recompute_normals: false,
            ..Default::default()
        }
    }

    /// Set the degeneracy threshold.
    #[must_use]
    pub const fn with_degenerate_epsilon(mut self, epsilon: f64) -> Self {
        self.degenerate_epsilon = epsilon;
        self
    }

    /// Enable or disable normal recomputation.
    #[must_use]
    pub const fn with_recompute_normals(mut self, recompute: bool) -> Self {
        self.recompute_normals = recompute;
        self
    }
}

/// Result of a repair operation.
///
/// On success `mesh` holds the repaired copy and ownership passes to the
/// caller. On failure `mesh` is `None` and `error` explains why.
#[derive(Debug, Clone, Default)]
pub struct RepairResult {
    /// Whether the repair completed.
    pub success: bool,
    /// The repaired mesh.
    pub mesh: Option<TriangleSoup>,
    /// Triangle count of the repaired mesh (zero on failure).
    pub triangle_count: usize,
    /// Actions taken, in execution order.
    pub actions: Vec<String>,
    /// Failure message.
    pub error: Option<String>,
}

impl RepairResult {
    fn failed(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
            ..Default::default()
        }
    }

    /// Check if the repair changed anything.
    #[must_use]
    pub fn had_changes(&self) -> bool {
        !self.actions.is_empty()
    }
}

impl std::fmt::Display for RepairResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "Repair failed: {error}");
        }
        write!(f, "Repair: {} triangles", self.triangle_count)?;
        if !self.actions.is_empty() {
            write!(f, " ({})", self.actions.join(", "))?;
        }
        Ok(())
    }
}

/// Repair a mesh with default parameters.
///
/// # Example
///
/// ```
/// use mesh_types::TriangleSoup;
/// use mesh_repair::repair;
///
/// let soup = TriangleSoup::from_positions(vec![
///     0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, // valid
///     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, // collinear
/// ]);
///
/// let result = repair(&soup);
/// assert!(result.success);
/// assert_eq!(result.triangle_count, 1);
/// assert_eq!(result.actions[0], "removed 1 degenerate triangle");
/// ```
#[must_use]
pub fn repair(mesh: &TriangleSoup) -> RepairResult {
    repair_with_analysis(mesh, None, &RepairParams::default())
}

/// Repair a mesh, reusing a prior analysis when one is available.
///
/// If `analysis` reports no degenerate faces, the degenerate pass is
/// skipped. The input mesh is never modified. Errors are reported through
/// the result, never returned or raised.
#[must_use]
pub fn repair_with_analysis(
    mesh: &TriangleSoup,
    analysis: Option<&AnalysisResult>,
    params: &RepairParams,
) -> RepairResult {
    info!(triangles = mesh.triangle_count(), "Repairing mesh");

    match try_repair(mesh, analysis, params) {
        Ok(result) => {
            info!(
                triangles = result.triangle_count,
                actions = result.actions.len(),
                "Repair complete"
            );
            result
        }
        Err(err) => {
            warn!(error = %err, "Repair failed");
            RepairResult::failed(err.to_string())
        }
    }
}

fn try_repair(
    mesh: &TriangleSoup,
    analysis: Option<&AnalysisResult>,
    params: &RepairParams,
) -> Result<RepairResult> {
    mesh.check()?;
    if mesh.is_empty() {
        return Err(RepairError::EmptyMesh);
    }

    let mut repaired = mesh.clone();
    let mut actions = Vec::new();

    let skip_degenerate = analysis.is_some_and(|a| a.degenerate_face_count == 0);
    if !skip_degenerate {
        let removed = remove_degenerate_triangles(&mut repaired, params.degenerate_epsilon);
        if repaired.is_empty() {
            return Err(RepairError::AllDegenerate { count: removed });
        }
        if removed > 0 {
            actions.push(format!(
                "removed {}",
                counted(removed, "degenerate triangle", "degenerate triangles")
            ));
        }
    }

    if params.recompute_normals {
        repaired.recompute_normals();
        actions.push("recomputed vertex normals".to_string());
    }

    Ok(RepairResult {
        success: true,
        triangle_count: repaired.triangle_count(),
        mesh: Some(repaired),
        actions,
        error: None,
    })
}

/// Remove triangles whose squared edge cross product is below `epsilon`.
///
/// Their position floats and, when present, their normal floats are both
/// dropped. Returns the number of triangles removed.
///
/// # Example
///
/// ```
/// use mesh_types::TriangleSoup;
/// use mesh_repair::remove_degenerate_triangles;
///
/// let mut soup = TriangleSoup::from_positions(vec![
///     0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 10.0, 0.0, 0.0, // collinear
/// ]);
///
/// assert_eq!(remove_degenerate_triangles(&mut soup, 1e-12), 1);
/// assert!(soup.is_empty());
/// ```
pub fn remove_degenerate_triangles(mesh: &mut TriangleSoup, epsilon: f64) -> usize {
    let keep: Vec<bool> = mesh
        .positions
        .chunks_exact(TriangleSoup::FLOATS_PER_TRIANGLE)
        .map(|c| Triangle::from_f32(c).is_some_and(|tri| !tri.is_degenerate(epsilon)))
        .collect();

    let removed = keep.iter().filter(|&&k| !k).count();
    if removed == 0 {
        return 0;
    }

    mesh.positions = retain_triangles(&mesh.positions, &keep);
    mesh.normals = mesh.normals.as_deref().map(|n| retain_triangles(n, &keep));

    removed
}

fn retain_triangles(buffer: &[f32], keep: &[bool]) -> Vec<f32> {
    buffer
        .chunks_exact(TriangleSoup::FLOATS_PER_TRIANGLE)
        .zip(keep)
        .filter(|&(_, &k)| k)
        .flat_map(|(chunk, _)| chunk.iter().copied())
        .collect()
}
