//! Property-based tests for the classification query.
//!
//! Run with: cargo test -p anchor-classify -- proptest

use anchor_classify::{classify_at, SearchParams};
use anchor_types::{AnchorGeometry, AnchorId, FaceClassification, MeshAnchor, RigidTransform};
use nalgebra::{Point3, UnitQuaternion, Vector3};
use proptest::prelude::*;

/// Vertex positions bounded so the face centroid stays well inside the 4 m
/// origin cutoff of the default parameters.
fn arb_vertex() -> impl Strategy<Value = [f32; 3]> {
    prop::array::uniform3(-1.0..1.0f32)
}

fn arb_triangle() -> impl Strategy<Value = [[f32; 3]; 3]> {
    prop::array::uniform3(arb_vertex())
}

/// A rigid transform with a bounded translation and an arbitrary rotation
/// about an axis-aligned direction.
fn arb_transform() -> impl Strategy<Value = RigidTransform> {
    (
        prop::array::uniform3(-2.0..2.0f32),
        0.0..std::f32::consts::TAU,
        0..3usize,
    )
        .prop_map(|(translation, angle, axis)| {
            let axis = match axis {
                0 => Vector3::x_axis(),
                1 => Vector3::y_axis(),
                _ => Vector3::z_axis(),
            };
            RigidTransform::new(
                UnitQuaternion::from_axis_angle(&axis, angle),
                Vector3::new(translation[0], translation[1], translation[2]),
            )
        })
}

proptest! {
    /// The decoded centroid is always the component-wise mean of the face's
    /// vertices.
    #[test]
    fn centroid_is_component_wise_mean(triangle in arb_triangle()) {
        let geometry = AnchorGeometry::from_parts(&triangle, &[[0, 1, 2]], None).unwrap();
        let centroid = geometry.face_centroid(0);

        for component in 0..3 {
            let mean =
                (triangle[0][component] + triangle[1][component] + triangle[2][component]) / 3.0;
            prop_assert!((centroid[component] - mean).abs() < 1e-6);
        }
    }

    /// A query placed exactly at a face's world centroid always matches that
    /// face, whatever the anchor's rigid transform.
    #[test]
    fn query_at_world_centroid_always_matches(
        triangle in arb_triangle(),
        transform in arb_transform(),
        code in 0..8u8,
    ) {
        let geometry =
            AnchorGeometry::from_parts(&triangle, &[[0, 1, 2]], Some(&[code])).unwrap();
        let anchor = MeshAnchor::new(AnchorId::new(1), transform, geometry);
        let query = anchor.world_face_centroid(0);

        let result = classify_at(
            &[anchor],
            query,
            &SearchParams::default(),
        );

        let result = result.expect("query at the face centroid must match");
        prop_assert_eq!(result.face, 0);
        prop_assert_eq!(result.classification, FaceClassification::from_raw(code));
        prop_assert!((result.centroid - query).norm() <= 0.05);
    }

    /// A query farther than the acceptance radius from the face centroid
    /// never matches, whatever direction it is offset in.
    #[test]
    fn query_outside_radius_never_matches(
        triangle in arb_triangle(),
        direction in prop::array::uniform3(-1.0..1.0f32),
        margin in 0.051..1.0f32,
    ) {
        let norm =
            (direction[0].powi(2) + direction[1].powi(2) + direction[2].powi(2)).sqrt();
        prop_assume!(norm > 1e-3);

        let geometry = AnchorGeometry::from_parts(&triangle, &[[0, 1, 2]], None).unwrap();
        let anchor = MeshAnchor::new(AnchorId::new(1), RigidTransform::identity(), geometry);
        let centroid = anchor.world_face_centroid(0);
        let offset = Vector3::new(direction[0], direction[1], direction[2]) / norm * margin;
        let query = Point3::from(centroid.coords + offset);

        // The offset direction is unit length up to f32 rounding; stay clear
        // of the boundary so rounding cannot flip the outcome.
        prop_assume!((query - centroid).norm() > 0.0505);

        let result = classify_at(&[anchor], query, &SearchParams::default());
        prop_assert!(result.is_none());
    }
}
