//! Outward polygon offsets.
//!
//! Two variants push a hull outward by a margin:
//!
//! - [`offset_radial`] moves each vertex straight away from the vertex
//!   centroid. It only guarantees a slightly larger loop, not a true
//!   Minkowski offset.
//! - [`offset_miter`] moves each vertex along the bisector of its edge
//!   normals so every edge ends up parallel to the original at the margin
//!   distance, clamping spikes at acute corners.

use mesh_types::{Point2, Vector2};

use crate::polygon::Polygon;

/// Push every vertex away from the vertex centroid by `margin`.
///
/// A vertex sitting exactly on the centroid has no direction and stays put.
///
/// # Example
///
/// ```
/// use mesh_baseplate::{offset_radial, Polygon};
/// use mesh_types::Point2;
///
/// let square = Polygon::new(vec![
///     Point2::new(-1.0, -1.0),
///     Point2::new(1.0, -1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(-1.0, 1.0),
/// ]);
///
/// let grown = offset_radial(&square, 2.0_f64.sqrt());
/// assert!((grown.points[2].x - 2.0).abs() < 1e-12);
/// assert!(grown.area() > square.area());
/// ```
#[must_use]
pub fn offset_radial(polygon: &Polygon, margin: f64) -> Polygon {
    let Some(centroid) = polygon.centroid() else {
        return polygon.clone();
    };

    let points = polygon
        .points
        .iter()
        .map(|&p| {
            let dir = p - centroid;
            let len = dir.norm();
            if len > 0.0 { p + dir * (margin / len) } else { p }
        })
        .collect();

    Polygon::new(points)
}

/// Push every vertex outward along its miter direction.
///
/// Winding is detected from the signed area (positive means
/// counter-clockwise) and each edge's outward normal is its direction
/// rotated by -90 degrees for CCW loops or +90 degrees for CW loops. At each
/// vertex the two adjacent normals are averaged; the vertex moves along the
/// normalized average by `margin / cos(theta)`, where `theta` is the angle
/// between an edge normal and the average. The distance is clamped to
/// `miter_limit * |margin|`.
///
/// When the averaged normal is shorter than `near_parallel_epsilon` the
/// edges fold back on each other and the vertex moves along a single edge
/// normal by `margin`. Zero-length edges contribute no normal; a vertex
/// with neither normal stays put.
///
/// Polygons with fewer than three points are returned unchanged.
#[must_use]
pub fn offset_miter(
    polygon: &Polygon,
    margin: f64,
    miter_limit: f64,
    near_parallel_epsilon: f64,
) -> Polygon {
    let n = polygon.len();
    if n < 3 {
        return polygon.clone();
    }

    let ccw = polygon.signed_area() > 0.0;
    let normals: Vec<Option<Vector2<f64>>> = polygon
        .edges()
        .map(|(a, b)| edge_normal(a, b, ccw))
        .collect();
    let max_distance = miter_limit.abs() * margin.abs();

    let points = (0..n)
        .map(|i| {
            let p = polygon.points[i];
            let prev = normals[(i + n - 1) % n];
            let next = normals[i];

            match (prev, next) {
                (Some(a), Some(b)) => {
                    let average = (a + b) * 0.5;
                    let len = average.norm();
                    if len < near_parallel_epsilon {
                        return p + a * margin;
                    }
                    let dir = average / len;
                    let cos = a.dot(&dir);
                    let distance = (margin / cos).clamp(-max_distance, max_distance);
                    p + dir * distance
                }
                (Some(single), None) | (None, Some(single)) => p + single * margin,
                (None, None) => p,
            }
        })
        .collect();

    Polygon::new(points)
}

/// Unit outward normal of edge `a -> b`, or `None` for a zero-length edge.
fn edge_normal(a: Point2<f64>, b: Point2<f64>, ccw: bool) -> Option<Vector2<f64>> {
    let d = b - a;
    let len = d.norm();
    if len <= f64::EPSILON {
        return None;
    }
    let normal = if ccw {
        Vector2::new(d.y, -d.x)
    } else {
        Vector2::new(-d.y, d.x)
    };
    Some(normal / len)
}
