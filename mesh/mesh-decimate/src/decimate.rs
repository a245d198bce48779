//! Core mesh decimation algorithm.
//!
//! Implements uniform spatial-hash vertex clustering: vertices falling into
//! the same grid cell are merged into the first one seen there.

// Mesh indices and counts don't overflow in practice
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use mesh_types::{IndexedMesh, MeshBounds, MeshError, Triangle, TriangleSoup, Vertex};
use tracing::{debug, info, warn};

use crate::error::{DecimateError, DecimateResult};
use crate::params::DecimateParams;
use crate::result::DecimationResult;

/// Integer coordinates of a clustering cell.
type CellKey = (i64, i64, i64);

/// Decimate a mesh towards `target_triangles` with default parameters.
///
/// # Example
///
/// ```
/// use mesh_types::{TriangleSoup, unit_cube};
/// use mesh_decimate::decimate;
///
/// let cube = TriangleSoup::from_indexed(&unit_cube());
///
/// // Already under target: returned verbatim
/// let result = decimate(&cube, 100);
/// assert!(result.success);
/// assert_eq!(result.mesh.as_ref(), Some(&cube));
/// assert_eq!(result.reduction_percent, 0.0);
/// ```
#[must_use]
pub fn decimate(mesh: &TriangleSoup, target_triangles: usize) -> DecimationResult {
    decimate_with_params(mesh, &DecimateParams::with_target_triangles(target_triangles))
}

/// Decimate a mesh using spatial-hash vertex clustering.
///
/// Meshes already at or under the target are returned as a verbatim copy
/// with zero reduction. Otherwise the result is best effort: the final
/// count never exceeds the original but is not guaranteed to reach the
/// target. Failures are reported through the result, never raised.
#[must_use]
pub fn decimate_with_params(mesh: &TriangleSoup, params: &DecimateParams) -> DecimationResult {
    let original_triangles = mesh.triangle_count();

    // A trailing partial triangle makes the count meaningless
    if let Err(err @ MeshError::MalformedPositions { .. }) = mesh.check() {
        warn!(error = %err, "Decimation rejected malformed mesh");
        return DecimationResult::failed(original_triangles, DecimateError::from(err).to_string());
    }

    // Don't decimate if already at or below target. The copy is verbatim,
    // so non-finite coordinates or odd normal buffers pass through untouched.
    if original_triangles <= params.target_triangles {
        debug!(
            triangles = original_triangles,
            target = params.target_triangles,
            "Mesh within target, skipping decimation"
        );
        return DecimationResult::unchanged(mesh);
    }

    if let Err(err) = mesh.check() {
        warn!(error = %err, "Decimation rejected malformed mesh");
        return DecimationResult::failed(original_triangles, DecimateError::from(err).to_string());
    }

    info!(
        original = original_triangles,
        target = params.target_triangles,
        "Starting mesh decimation"
    );

    match simplify(mesh, params) {
        Ok(simplified) => {
            let result = DecimationResult::decimated(original_triangles, simplified);
            info!(
                original = result.original_triangles,
                final_count = result.final_triangles,
                reduction_percent = result.reduction_percent,
                "Decimation complete"
            );
            result
        }
        Err(err) => {
            warn!(error = %err, "Decimation failed");
            DecimationResult::failed(original_triangles, err.to_string())
        }
    }
}

fn simplify(mesh: &TriangleSoup, params: &DecimateParams) -> DecimateResult<TriangleSoup> {
    let extent = mesh.bounds().max_extent();
    if extent <= 0.0 {
        return Err(DecimateError::DegenerateBounds);
    }

    let cell_size = params.cell_size(extent, mesh.triangle_count());
    let mut merged = cluster_vertices(mesh, cell_size, params.degenerate_epsilon)?;
    merged.compute_vertex_normals();

    Ok(TriangleSoup::from_indexed(&merged))
}

/// Merge vertices sharing a grid cell and rebuild the surviving triangles.
///
/// Each vertex maps to cell `(floor(x / s), floor(y / s), floor(z / s))`.
/// The first vertex to land in a cell becomes its representative at its
/// own position; later vertices in that cell are remapped to it. Triangles
/// whose corners collapse onto fewer than three representatives, or that
/// fail the degeneracy test after remapping, are dropped.
///
/// The returned mesh carries no normals.
///
/// # Errors
///
/// - [`DecimateError::EmptyMesh`] if the soup has no triangles
/// - [`DecimateError::InvalidCellSize`] if `cell_size` is not positive and finite
/// - [`DecimateError::Collapsed`] if no triangle survives
pub fn cluster_vertices(
    mesh: &TriangleSoup,
    cell_size: f64,
    degenerate_epsilon: f64,
) -> DecimateResult<IndexedMesh> {
    if mesh.is_empty() {
        return Err(DecimateError::EmptyMesh);
    }
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(DecimateError::InvalidCellSize(cell_size));
    }

    let mut grid: HashMap<CellKey, u32> = HashMap::new();
    let mut merged = IndexedMesh::with_capacity(0, mesh.triangle_count());
    let mut remap: Vec<u32> = Vec::with_capacity(mesh.vertex_count());

    for point in mesh.points() {
        let key = cell_key(point.x, point.y, point.z, cell_size);
        let next = merged.vertices.len() as u32;
        let index = *grid.entry(key).or_insert_with(|| {
            merged.vertices.push(Vertex::new(point));
            next
        });
        remap.push(index);
    }

    let mut collapsed = 0usize;
    let mut degenerate = 0usize;

    for corners in remap.chunks_exact(3) {
        let face = [corners[0], corners[1], corners[2]];
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            collapsed += 1;
            continue;
        }

        let tri = Triangle::new(
            merged.vertices[face[0] as usize].position,
            merged.vertices[face[1] as usize].position,
            merged.vertices[face[2] as usize].position,
        );
        if tri.is_degenerate(degenerate_epsilon) {
            degenerate += 1;
            continue;
        }

        merged.faces.push(face);
    }

    debug!(
        cell_size,
        cells = grid.len(),
        collapsed,
        degenerate,
        kept = merged.faces.len(),
        "Vertices clustered"
    );

    if merged.faces.is_empty() {
        return Err(DecimateError::Collapsed(mesh.triangle_count()));
    }

    Ok(merged)
}

#[inline]
fn cell_key(x: f64, y: f64, z: f64, cell_size: f64) -> CellKey {
    (
        (x / cell_size).floor() as i64,
        (y / cell_size).floor() as i64,
        (z / cell_size).floor() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::unit_cube;

    /// Flat `n` x `n` grid of quads on the unit square in the XZ plane.
    #[allow(clippy::cast_precision_loss)]
    fn grid(n: usize) -> TriangleSoup {
        let step = 1.0 / n as f32;
        let mut positions = Vec::with_capacity(n * n * 18);
        for i in 0..n {
            for j in 0..n {
                let (x0, z0) = (i as f32 * step, j as f32 * step);
                let (x1, z1) = (x0 + step, z0 + step);
                positions.extend([x0, 0.0, z0, x0, 0.0, z1, x1, 0.0, z0]);
                positions.extend([x1, 0.0, z0, x0, 0.0, z1, x1, 0.0, z1]);
            }
        }
        TriangleSoup::from_positions(positions)
    }

    #[test]
    fn test_under_target_is_verbatim() {
        let cube = TriangleSoup::from_indexed(&unit_cube());
        let result = decimate(&cube, 12);

        assert!(result.success);
        assert!(!result.was_decimated());
        assert_eq!(result.original_triangles, 12);
        assert_eq!(result.final_triangles, 12);
        assert_eq!(result.mesh.map(|m| m.positions), Some(cube.positions));
    }

    #[test]
    fn test_grid_is_reduced() {
        let soup = grid(300);
        let result = decimate(&soup, 40_000);

        assert!(result.success);
        assert_eq!(result.original_triangles, 180_000);
        assert!(result.final_triangles < result.original_triangles);
        assert!(result.reduction_percent > 0.0);

        let mesh = result.mesh.unwrap_or_default();
        assert!(mesh.check().is_ok());
        assert_eq!(mesh.triangle_count(), result.final_triangles);
        assert!(mesh.normals.is_some());
    }

    #[test]
    fn test_decimated_normals_stay_vertical() {
        let result = decimate(&grid(120), 1_000);
        let mesh = result.mesh.unwrap_or_default();
        let normals = mesh.normals.unwrap_or_default();

        assert!(!normals.is_empty());
        for n in normals.chunks_exact(3) {
            assert!(n[0].abs() < 1e-5 && n[2].abs() < 1e-5, "normal {n:?}");
        }
    }

    #[test]
    fn test_rerun_is_noop() {
        let first = decimate(&grid(300), 40_000);
        let mesh = first.mesh.unwrap_or_default();
        assert!(mesh.triangle_count() <= 40_000);

        let second = decimate(&mesh, 40_000);
        assert!(second.success);
        assert!(second.reduction_percent.abs() < f64::EPSILON);
        assert_eq!(second.mesh.as_ref(), Some(&mesh));
    }

    #[test]
    fn test_zero_extent_fails() {
        let soup = TriangleSoup::from_positions(vec![1.0; 18]);
        let result = decimate(&soup, 1);

        assert!(!result.success);
        assert!(result.mesh.is_none());
        assert_eq!(result.error.as_deref(), Some("Mesh bounds have zero extent"));
    }

    #[test]
    fn test_malformed_fails() {
        let soup = TriangleSoup::from_positions(vec![0.0; 20]);
        let result = decimate(&soup, 0);
        assert!(!result.success);
        assert!(result.error.is_some_and(|e| e.starts_with("Invalid mesh")));
    }

    #[test]
    fn test_non_finite_over_target_fails() {
        let mut soup = grid(4);
        soup.positions[7] = f32::INFINITY;
        let result = decimate(&soup, 2);

        assert!(!result.success);
        assert!(result.mesh.is_none());
        assert!(result.error.is_some_and(|e| e.contains("non-finite")));
    }

    #[test]
    fn test_empty_is_noop() {
        let result = decimate(&TriangleSoup::new(), 0);
        assert!(result.success);
        assert_eq!(result.final_triangles, 0);
    }

    #[test]
    fn test_cluster_first_vertex_is_representative() {
        let soup = TriangleSoup::from_positions(vec![
            0.1, 0.1, 0.1, 5.0, 0.0, 0.0, 0.0, 0.0, 5.0, //
            0.2, 0.2, 0.2, 0.0, 0.0, 5.0, 5.0, 0.0, 5.0,
        ]);
        let merged = cluster_vertices(&soup, 1.0, 1e-12).unwrap();

        assert_eq!(merged.vertex_count(), 4);
        assert_eq!(merged.faces, vec![[0, 1, 2], [0, 2, 3]]);
        assert!((merged.vertices[0].position.x - f64::from(0.1_f32)).abs() < 1e-12);
    }

    #[test]
    fn test_cluster_drops_collapsed_triangles() {
        let soup = TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.5, //
            0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 3.0,
        ]);
        let merged = cluster_vertices(&soup, 1.0, 1e-12).unwrap();
        assert_eq!(merged.face_count(), 1);
    }

    #[test]
    fn test_cluster_rejects_bad_cell_size() {
        let soup = TriangleSoup::from_indexed(&unit_cube());
        assert!(matches!(
            cluster_vertices(&soup, 0.0, 1e-12),
            Err(DecimateError::InvalidCellSize(_))
        ));
        assert!(matches!(
            cluster_vertices(&TriangleSoup::new(), 1.0, 1e-12),
            Err(DecimateError::EmptyMesh)
        ));
    }

    #[test]
    fn test_cluster_everything_collapsed() {
        let soup = TriangleSoup::from_indexed(&unit_cube());
        assert!(matches!(
            cluster_vertices(&soup, 10.0, 1e-12),
            Err(DecimateError::Collapsed(12))
        ));
    }
}
