//! 2D convex hull via Andrew's monotone chain.

use mesh_types::Point2;

use crate::polygon::Polygon;

/// Compute the convex hull of ground-plane points.
///
/// Points are sorted by `x` then `z` and exact duplicates removed. Lower and
/// upper chains are built independently, popping the last accepted point
/// while the next candidate makes a non-left turn (cross product `<= 0`).
/// Collinear points on the hull boundary are therefore dropped.
///
/// The result is counter-clockwise and does not repeat its first point.
/// Returns `None` when fewer than three non-collinear points remain.
///
/// # Example
///
/// ```
/// use mesh_baseplate::{convex_hull, Winding};
/// use mesh_types::Point2;
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let hull = convex_hull(&points).unwrap();
/// assert_eq!(hull.len(), 4);
/// assert_eq!(hull.winding(), Winding::CounterClockwise);
/// ```
#[must_use]
pub fn convex_hull(points: &[Point2<f64>]) -> Option<Polygon> {
    let mut sorted: Vec<Point2<f64>> = points
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .copied()
        .collect();
    if sorted.len() < 3 {
        return None;
    }

    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return None;
    }

    let mut lower: Vec<Point2<f64>> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        push_left_turn(&mut lower, p);
    }

    let mut upper: Vec<Point2<f64>> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        push_left_turn(&mut upper, p);
    }

    // Each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.append(&mut upper);

    if lower.len() < 3 {
        return None;
    }
    Some(Polygon::new(lower))
}

fn push_left_turn(chain: &mut Vec<Point2<f64>>, p: Point2<f64>) {
    while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
        chain.pop();
    }
    chain.push(p);
}

/// Z component of `(a - o) x (b - o)`. Positive for a left turn.
#[inline]
pub(crate) fn cross(o: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Winding;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_hull() {
        let points = [
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 0.0),
        ];
        let hull = convex_hull(&points).unwrap();

        assert_eq!(
            hull.points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ]
        );
        assert_relative_eq!(hull.signed_area(), 100.0);
    }

    #[test]
    fn test_interior_and_duplicate_points_ignored() {
        let mut points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(3.0, 5.0),
        ];
        points.extend([Point2::new(3.0, 1.0), Point2::new(3.0, 2.0), Point2::new(0.0, 0.0)]);

        let hull = convex_hull(&points).unwrap();
        assert_eq!(hull.len(), 3);
        assert_eq!(hull.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_collinear_boundary_points_dropped() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert_eq!(convex_hull(&points).map(|h| h.len()), Some(4));
    }

    #[test]
    fn test_insufficient_points() {
        assert!(convex_hull(&[]).is_none());
        assert!(convex_hull(&[Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)]).is_none());
        assert!(convex_hull(&[Point2::new(1.0, 1.0); 5]).is_none());
    }

    #[test]
    fn test_collinear_input_has_no_hull() {
        let points: Vec<_> = (0..6).map(|i| Point2::new(f64::from(i), f64::from(i))).collect();
        assert!(convex_hull(&points).is_none());
    }

    #[test]
    fn test_cross_sign() {
        let o = Point2::new(0.0, 0.0);
        assert!(cross(o, Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)) > 0.0);
        assert!(cross(o, Point2::new(0.0, 1.0), Point2::new(1.0, 0.0)) < 0.0);
    }
}
