//! Mesh analysis and health reporting.
//!
//! Checks a triangle soup for degenerate faces and for edges that are not
//! shared by exactly two triangles.

use mesh_types::{
    Aabb, DEFAULT_TRIANGLE_BUDGET, DEGENERATE_EPSILON, MeshBounds, TriangleSoup, Vector3,
};
use tracing::debug;

use crate::adjacency::MeshAdjacency;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for mesh analysis.
#[derive(Debug, Clone)]
pub struct AnalysisParams {
    /// Degeneracy threshold on `|e1 × e2|²`.
    pub degenerate_epsilon: f64,
    /// Triangle count above which a high-triangle-count advisory is issued.
    pub triangle_budget: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            degenerate_epsilon: DEGENERATE_EPSILON,
            triangle_budget: DEFAULT_TRIANGLE_BUDGET,
        }
    }
}

impl AnalysisParams {
    /// Use a custom degeneracy threshold.
    #[must_use]
    pub const fn with_degenerate_epsilon(mut self, epsilon: f64) -> Self {
        self.degenerate_epsilon = epsilon;
        self
    }

    /// Use a custom triangle budget.
    #[must_use]
    pub const fn with_triangle_budget(mut self, budget: usize) -> Self {
        self.triangle_budget = budget;
        self
    }
}

/// Result of analyzing a mesh.
///
/// A derived value: nothing in it changes after [`analyze`] returns.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisResult {
    /// True iff there are no degenerate faces, no boundary edges and no
    /// non-manifold edges.
    pub is_manifold: bool,
    /// Number of triangles.
    pub triangle_count: usize,
    /// Number of (non-shared) vertices, three per triangle.
    pub vertex_count: usize,
    /// Whether any edge is used by more than two triangles.
    pub has_non_manifold_edges: bool,
    /// Whether any triangle failed the degeneracy test.
    pub has_degenerate_faces: bool,

    /// Bounding box of every vertex.
    pub bounds: Aabb,
    /// Extent of `bounds` along each axis.
    pub size: Vector3<f64>,

    /// Number of degenerate triangles.
    pub degenerate_face_count: usize,
    /// Number of edges used by more than two triangles.
    pub non_manifold_edge_count: usize,
    /// Number of edges used by exactly one triangle.
    pub boundary_edge_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,

    /// Triangle budget the advisory was checked against.
    pub triangle_budget: usize,

    /// Human-readable issues: degenerate faces, non-manifold edges,
    /// boundary edges, then the triangle-count advisory.
    pub issues: Vec<String>,
}

impl AnalysisResult {
    /// Check if the repair stage should run.
    #[must_use]
    pub const fn needs_repair(&self) -> bool {
        !self.is_manifold
    }

    /// Check if the triangle count is above the budget.
    #[must_use]
    pub const fn exceeds_budget(&self) -> bool {
        self.triangle_count > self.triangle_budget
    }

    /// Check if the surface has holes.
    #[must_use]
    pub const fn has_boundary_edges(&self) -> bool {
        self.boundary_edge_count > 0
    }
}

impl std::fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mesh Analysis:")?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(
            f,
            "  Size: {:.3} x {:.3} x {:.3}",
            self.size.x, self.size.y, self.size.z
        )?;
        writeln!(
            f,
            "  Manifold: {}",
            if self.is_manifold { "Yes" } else { "No" }
        )?;

        if !self.issues.is_empty() {
            writeln!(f, "  Issues:")?;
            for issue in &self.issues {
                writeln!(f, "    - {issue}")?;
            }
        }

        Ok(())
    }
}

/// Analyze a mesh with default parameters.
///
/// # Example
///
/// ```
/// use mesh_types::TriangleSoup;
/// use mesh_repair::analyze;
///
/// let soup = TriangleSoup::from_positions(vec![
///     0.0, 0.0, 0.0,
///     0.0, 0.0, 1.0,
///     1.0, 0.0, 0.0,
/// ]);
///
/// let analysis = analyze(&soup);
/// assert_eq!(analysis.triangle_count, 1);
/// assert_eq!(analysis.boundary_edge_count, 3);
/// assert!(!analysis.is_manifold);
/// ```
#[must_use]
pub fn analyze(mesh: &TriangleSoup) -> AnalysisResult {
    analyze_with_params(mesh, &AnalysisParams::default())
}

/// Analyze a mesh with custom parameters.
///
/// Edges are keyed by welded vertex indices, so corners duplicated across
/// neighbouring triangles of the soup are recognised as the same vertex.
/// Trailing floats that do not form a whole triangle are ignored.
#[must_use]
pub fn analyze_with_params(mesh: &TriangleSoup, params: &AnalysisParams) -> AnalysisResult {
    let triangle_count = mesh.triangle_count();
    let vertex_count = mesh.vertex_count();

    let degenerate_face_count = mesh
        .triangles()
        .filter(|tri| tri.is_degenerate(params.degenerate_epsilon))
        .count();

    let indexed = mesh.to_indexed();
    let adjacency = MeshAdjacency::build(&indexed.faces);
    let boundary_edge_count = adjacency.boundary_edge_count();
    let non_manifold_edge_count = adjacency.non_manifold_edge_count();

    let bounds = mesh.bounds();

    let mut issues = Vec::new();
    if degenerate_face_count > 0 {
        issues.push(counted(degenerate_face_count, "degenerate face", "degenerate faces"));
    }
    if non_manifold_edge_count > 0 {
        issues.push(counted(
            non_manifold_edge_count,
            "non-manifold edge",
            "non-manifold edges",
        ));
    }
    if boundary_edge_count > 0 {
        issues.push(format!(
            "{} (mesh has holes)",
            counted(boundary_edge_count, "boundary edge", "boundary edges")
        ));
    }
    if triangle_count > params.triangle_budget {
        issues.push(format!(
            "High triangle count ({triangle_count}), decimation to {} recommended",
            params.triangle_budget
        ));
    }

    let is_manifold =
        degenerate_face_count == 0 && non_manifold_edge_count == 0 && boundary_edge_count == 0;

    debug!(
        triangles = triangle_count,
        welded_vertices = indexed.vertex_count(),
        degenerate = degenerate_face_count,
        non_manifold = non_manifold_edge_count,
        boundary = boundary_edge_count,
        is_manifold,
        "Mesh analyzed"
    );

    AnalysisResult {
        is_manifold,
        triangle_count,
        vertex_count,
        has_non_manifold_edges: non_manifold_edge_count > 0,
        has_degenerate_faces: degenerate_face_count > 0,
        bounds,
        size: bounds.size(),
        degenerate_face_count,
        non_manifold_edge_count,
        boundary_edge_count,
        edge_count: adjacency.edge_count(),
        triangle_budget: params.triangle_budget,
        issues,
    }
}

/// `count` followed by the noun in the matching number, e.g. "1 degenerate face".
pub(crate) fn counted(count: usize, singular: &str, plural: &str) -> String {
    format!("{count} {}", if count == 1 { singular } else { plural })
}
