//! Property-based tests for footprints and section merging.
//!
//! Run with: cargo test -p mesh-baseplate -- proptest

#![allow(clippy::unwrap_used)]

use mesh_baseplate::{
    BaseplateSection, FootprintParams, OffsetStrategy, Winding, build_footprint_with, convex_hull,
    merge_sections, merge_sections_counted,
};
use mesh_types::{Point2, Point3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point2() -> impl Strategy<Value = Point2<f64>> {
    (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, z)| Point2::new(x, z))
}

fn arb_point3() -> impl Strategy<Value = Point3<f64>> {
    (-100.0f64..100.0, -10.0f64..10.0, -100.0f64..100.0).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn arb_section() -> impl Strategy<Value = BaseplateSection> {
    (0.0f64..100.0, 0.5f64..30.0, 0.0f64..100.0, 0.5f64..30.0)
        .prop_map(|(x, w, z, d)| BaseplateSection::new("user", x, x + w, z, z + d))
}

/// Distance of `p` to the left of edge `a -> b`, negative if to the right.
fn left_distance(a: Point2<f64>, b: Point2<f64>, p: Point2<f64>) -> f64 {
    let edge = b - a;
    (edge.x * (p.y - a.y) - edge.y * (p.x - a.x)) / edge.norm()
}

fn covers(outer: &BaseplateSection, inner: &BaseplateSection) -> bool {
    outer.min_x <= inner.min_x
        && outer.max_x >= inner.max_x
        && outer.min_z <= inner.min_z
        && outer.max_z >= inner.max_z
}

// =============================================================================
// Hull Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every input point lies inside or on the hull, which is convex and CCW.
    #[test]
    fn proptest_hull_contains_all_points(points in prop::collection::vec(arb_point2(), 3..60)) {
        if let Some(hull) = convex_hull(&points) {
            prop_assert_eq!(hull.winding(), Winding::CounterClockwise);

            let n = hull.len();
            for i in 0..n {
                let (a, b) = (hull.points[i], hull.points[(i + 1) % n]);
                for p in &points {
                    prop_assert!(left_distance(a, b, *p) >= -1e-9);
                }
                // Convex at every vertex
                let c = hull.points[(i + 2) % n];
                prop_assert!(left_distance(a, b, c) > -1e-9);
            }
        }
    }

    /// A positive margin never shrinks the footprint, for either strategy.
    #[test]
    fn proptest_margin_grows_footprint(
        points in prop::collection::vec(arb_point3(), 3..60),
        margin in 0.1f64..10.0,
        miter in any::<bool>(),
    ) {
        let strategy = if miter { OffsetStrategy::Miter } else { OffsetStrategy::Radial };
        let bare = build_footprint_with(
            &points,
            &FootprintParams::new(0.0, 10.0, 10.0).with_offset(strategy),
        );
        let grown = build_footprint_with(
            &points,
            &FootprintParams::new(margin, 10.0, 10.0).with_offset(strategy),
        );

        prop_assert!(grown.area() >= bare.area() - 1e-9);
        prop_assert!(!grown.is_empty());
    }
}

// =============================================================================
// Merge Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Merging the merged output again changes nothing.
    #[test]
    fn proptest_merge_idempotent(sections in prop::collection::vec(arb_section(), 0..25)) {
        let once = merge_sections(&sections);
        let (twice, merges) = merge_sections_counted(&once);

        prop_assert_eq!(merges, 0);
        prop_assert_eq!(twice, once);
    }

    /// No two output sections overlap and every input is covered by one.
    #[test]
    fn proptest_merge_leaves_no_overlap(sections in prop::collection::vec(arb_section(), 0..25)) {
        let (merged, merges) = merge_sections_counted(&sections);

        prop_assert_eq!(merged.len() + merges, sections.len());
        for (i, a) in merged.iter().enumerate() {
            for b in &merged[i + 1..] {
                prop_assert!(!a.overlaps(b), "{} overlaps {}", a, b);
            }
        }
        for input in &sections {
            prop_assert!(merged.iter().any(|m| covers(m, input)));
        }
    }
}
