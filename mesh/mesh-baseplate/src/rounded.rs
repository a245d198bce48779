//! Rounded-rectangle fallback footprint.

#![allow(clippy::cast_precision_loss)]

use std::f64::consts::FRAC_PI_2;

use mesh_types::Point2;

use crate::params::CORNER_RADIUS_RATIO;
use crate::polygon::Polygon;

/// Build a rounded rectangle centred on the origin.
///
/// The rectangle spans `width` along X and `height` along Z. Its corner
/// radius is [`CORNER_RADIUS_RATIO`] of the smaller dimension. Each corner is
/// a quarter arc sampled with `corner_segments` segments (at least one),
/// and consecutive arcs are joined by the four straight sides. The loop
/// starts where the bottom side meets the bottom-right arc and runs
/// counter-clockwise.
///
/// Negative dimensions are taken by magnitude.
///
/// # Example
///
/// ```
/// use mesh_baseplate::{rounded_rectangle, Winding};
///
/// let rect = rounded_rectangle(100.0, 50.0, 8);
/// assert_eq!(rect.len(), 36);
/// assert_eq!(rect.winding(), Winding::CounterClockwise);
/// ```
#[must_use]
pub fn rounded_rectangle(width: f64, height: f64, corner_segments: usize) -> Polygon {
    let half_w = width.abs() * 0.5;
    let half_h = height.abs() * 0.5;
    let radius = CORNER_RADIUS_RATIO * width.abs().min(height.abs());
    let segments = corner_segments.max(1);

    // (arc centre, start angle) for bottom-right, top-right, top-left, bottom-left
    let corners = [
        (Point2::new(half_w - radius, -half_h + radius), -FRAC_PI_2),
        (Point2::new(half_w - radius, half_h - radius), 0.0),
        (Point2::new(-half_w + radius, half_h - radius), FRAC_PI_2),
        (Point2::new(-half_w + radius, -half_h + radius), 2.0 * FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * (segments + 1));
    for (centre, start) in corners {
        for k in 0..=segments {
            let angle = start + FRAC_PI_2 * (k as f64 / segments as f64);
            points.push(Point2::new(
                centre.x + radius * angle.cos(),
                centre.y + radius * angle.sin(),
            ));
        }
    }

    Polygon::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Winding;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_point_count_and_winding() {
        let rect = rounded_rectangle(40.0, 20.0, 4);
        assert_eq!(rect.len(), 20);
        assert_eq!(rect.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_area_approaches_rounded_rectangle() {
        let rect = rounded_rectangle(100.0, 60.0, 256);
        let radius: f64 = 6.0;
        let exact = 100.0 * 60.0 - (4.0 - PI) * radius * radius;
        assert_relative_eq!(rect.area(), exact, max_relative = 1e-4);
    }

    #[test]
    fn test_centred_and_bounded() {
        let rect = rounded_rectangle(30.0, 10.0, 8);
        for p in &rect.points {
            assert!(p.x.abs() <= 15.0 + 1e-9);
            assert!(p.y.abs() <= 5.0 + 1e-9);
        }
        let c = rect.centroid().unwrap_or_else(Point2::origin);
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-9);

        // Straight right side joins the two right-hand arcs
        assert_relative_eq!(rect.points[0].x, 14.0, epsilon = 1e-9);
        assert_relative_eq!(rect.points[0].y, -5.0, epsilon = 1e-9);
        assert_relative_eq!(rect.points[8].x, 15.0, epsilon = 1e-9);
        assert_relative_eq!(rect.points[8].y, -4.0, epsilon = 1e-9);
        assert_relative_eq!(rect.points[9].x, 15.0, epsilon = 1e-9);
        assert_relative_eq!(rect.points[9].y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_dimensions_use_magnitude() {
        let a = rounded_rectangle(-20.0, 10.0, 3);
        let b = rounded_rectangle(20.0, 10.0, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_segments_chamfers() {
        let rect = rounded_rectangle(10.0, 10.0, 0);
        assert_eq!(rect.len(), 8);
    }
}
