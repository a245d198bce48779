//! Ground-plane sampling of world-space points.

// Quantized keys fit comfortably in i64 for any sane coordinate range
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashSet;
use mesh_types::{Matrix4, Point2, Point3, TriangleSoup};

/// Gather every vertex of every mesh in world space.
///
/// Each mesh's positions are transformed by its paired world matrix.
///
/// # Example
///
/// ```
/// use mesh_baseplate::collect_world_points;
/// use mesh_types::{Matrix4, TriangleSoup, Vector3};
///
/// let soup = TriangleSoup::from_positions(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// let shift = Matrix4::new_translation(&Vector3::new(10.0, 0.0, 0.0));
///
/// let points = collect_world_points(&[(&soup, shift)]);
/// assert_eq!(points.len(), 3);
/// assert!((points[1].x - 11.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn collect_world_points(meshes: &[(&TriangleSoup, Matrix4<f64>)]) -> Vec<Point3<f64>> {
    let total = meshes.iter().map(|(soup, _)| soup.vertex_count()).sum();
    let mut points = Vec::with_capacity(total);
    for (soup, transform) in meshes {
        points.extend(soup.points().map(|p| transform.transform_point(&p)));
    }
    points
}

/// Project points onto the ground plane, thinning and deduplicating them.
///
/// Inputs are visited at a stride of `ceil(n / sample_limit)`, so at most
/// `sample_limit` points are considered and small inputs are visited in
/// full. Each visited point becomes `(x, z)`; points that quantize to the
/// same `dedup_quantum` grid cell as an earlier one are dropped. The first
/// point seen in a cell keeps its exact coordinates.
///
/// A `sample_limit` of zero disables thinning. A non-positive or
/// non-finite quantum disables deduplication of distinct points.
#[must_use]
pub fn project_to_ground(
    points: &[Point3<f64>],
    sample_limit: usize,
    dedup_quantum: f64,
) -> Vec<Point2<f64>> {
    let stride = if sample_limit == 0 {
        1
    } else {
        points.len().div_ceil(sample_limit).max(1)
    };
    let quantized = dedup_quantum.is_finite() && dedup_quantum > 0.0;

    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    let mut exact: HashSet<(u64, u64)> = HashSet::new();
    let mut projected = Vec::new();

    for point in points.iter().step_by(stride) {
        if !point.x.is_finite() || !point.z.is_finite() {
            continue;
        }
        let fresh = if quantized {
            seen.insert((
                (point.x / dedup_quantum).round() as i64,
                (point.z / dedup_quantum).round() as i64,
            ))
        } else {
            exact.insert(((point.x + 0.0).to_bits(), (point.z + 0.0).to_bits()))
        };
        if fresh {
            projected.push(Point2::new(point.x, point.z));
        }
    }

    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::Vector3;

    #[test]
    fn test_projection_drops_height() {
        let points = [Point3::new(1.0, 50.0, 2.0), Point3::new(3.0, -7.0, 4.0)];
        let ground = project_to_ground(&points, 100, 0.01);
        assert_eq!(ground, vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]);
    }

    #[test]
    fn test_dedup_within_quantum() {
        let points = [
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.001, 5.0, 1.002),
            Point3::new(1.0, 9.0, 1.0),
            Point3::new(2.0, 0.0, 1.0),
        ];
        let ground = project_to_ground(&points, 100, 0.01);
        assert_eq!(ground.len(), 2);
        assert_eq!(ground[0], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_stride_caps_samples() {
        let points: Vec<_> = (0..20_000)
            .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
            .collect();
        let ground = project_to_ground(&points, 5000, 0.01);
        assert_eq!(ground.len(), 5000);
        assert_eq!(ground[1], Point2::new(4.0, 0.0));
    }

    #[test]
    fn test_small_input_fully_visited() {
        let points: Vec<_> = (0..10).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        assert_eq!(project_to_ground(&points, 5000, 0.01).len(), 10);
        assert_eq!(project_to_ground(&points, 0, 0.01).len(), 10);
    }

    #[test]
    fn test_collect_applies_each_transform() {
        let tri = TriangleSoup::from_positions(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let a = Matrix4::identity();
        let b = Matrix4::new_translation(&Vector3::new(0.0, 0.0, 5.0));

        let points = collect_world_points(&[(&tri, a), (&tri, b)]);
        assert_eq!(points.len(), 6);
        assert!((points[3].z - 5.0).abs() < 1e-12);
        assert!((points[5].z - 6.0).abs() < 1e-12);
    }
}
