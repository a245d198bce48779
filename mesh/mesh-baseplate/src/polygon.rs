//! Closed 2D polygons in ground-plane coordinates.

use mesh_types::Point2;

/// Orientation of a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero signed area (collinear or fewer than three points).
    Degenerate,
}

/// A closed loop of ground-plane points.
///
/// Each point stores `(x, z)`: `point.x` is world X and `point.y` is world Z.
/// The last point connects back to the first; it is not repeated.
///
/// Winding is significant and is detected from the signed area rather than
/// assumed. Polygons produced by this crate are counter-clockwise.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    /// Loop vertices.
    pub points: Vec<Point2<f64>>,
}

impl Polygon {
    /// Create a polygon from its loop vertices.
    #[must_use]
    pub const fn new(points: Vec<Point2<f64>>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate the edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace signed area. Positive for counter-clockwise loops.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let twice: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
        twice * 0.5
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Detected winding order.
    #[must_use]
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Average of the loop vertices, or `None` for an empty polygon.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Option<Point2<f64>> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(Point2::origin(), |acc, p| acc + p.coords);
        Some(sum / self.points.len() as f64)
    }

    /// Total length of all edges, closing edge included.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| (b - a).norm()).sum()
    }

    /// Even-odd point containment test.
    ///
    /// Points exactly on an edge may report either way.
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let t = (point.y - a.y) / (b.y - a.y);
                if point.x < a.x + t * (b.x - a.x) {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// The same loop with opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}
