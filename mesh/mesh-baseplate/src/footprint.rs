//! Footprint building: sample, hull, offset, or fall back.

use mesh_types::Point3;
use tracing::{debug, warn};

use crate::hull::convex_hull;
use crate::offset::{offset_miter, offset_radial};
use crate::params::{FootprintParams, OffsetStrategy};
use crate::polygon::Polygon;
use crate::rounded::rounded_rectangle;
use crate::sample::project_to_ground;

/// Build a ground-plane footprint around world-space points.
///
/// Uses the radial offset and default sampling. See
/// [`build_footprint_with`] for the full behaviour.
///
/// # Example
///
/// ```
/// use mesh_baseplate::build_footprint;
/// use mesh_types::Point3;
///
/// let corners = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(10.0, 3.0, 10.0),
///     Point3::new(0.0, 3.0, 10.0),
/// ];
///
/// let footprint = build_footprint(&corners, 2.0, 50.0, 50.0);
/// assert_eq!(footprint.len(), 4);
/// assert!(footprint.area() > 100.0);
/// ```
#[must_use]
pub fn build_footprint(
    points: &[Point3<f64>],
    margin: f64,
    fallback_width: f64,
    fallback_height: f64,
) -> Polygon {
    build_footprint_with(
        points,
        &FootprintParams::new(margin, fallback_width, fallback_height),
    )
}

/// Build a ground-plane footprint with explicit parameters.
///
/// Points are projected to `(x, z)`, thinned and deduplicated, then wrapped
/// in a counter-clockwise convex hull which is pushed outward by the margin
/// using the selected [`OffsetStrategy`].
///
/// When no hull exists (fewer than three distinct points, or all collinear)
/// a rounded rectangle of the fallback size is returned instead. This never
/// fails, so a baseplate can always be drawn.
#[must_use]
pub fn build_footprint_with(points: &[Point3<f64>], params: &FootprintParams) -> Polygon {
    let ground = project_to_ground(points, params.sample_limit, params.dedup_quantum);

    let Some(hull) = convex_hull(&ground) else {
        warn!(
            input_points = points.len(),
            distinct_points = ground.len(),
            width = params.fallback_width,
            height = params.fallback_height,
            "Footprint hull unavailable, using rounded rectangle"
        );
        return rounded_rectangle(
            params.fallback_width,
            params.fallback_height,
            params.corner_segments,
        );
    };

    let footprint = match params.offset {
        OffsetStrategy::Radial => offset_radial(&hull, params.margin),
        OffsetStrategy::Miter => offset_miter(
            &hull,
            params.margin,
            params.miter_limit,
            params.near_parallel_epsilon,
        ),
    };

    debug!(
        input_points = points.len(),
        sampled_points = ground.len(),
        hull_vertices = hull.len(),
        margin = params.margin,
        area = footprint.area(),
        "Footprint built"
    );

    footprint
}
