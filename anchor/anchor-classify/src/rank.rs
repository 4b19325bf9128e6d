//! Anchor pre-filtering and nearest-first ordering.

use anchor_types::MeshAnchor;
use nalgebra::Point3;

/// Filters and orders a snapshot of anchors for searching.
///
/// Anchors whose **transform origin** lies farther than `cutoff` from the
/// query point are dropped; the rest are ordered by ascending origin
/// distance. The sort is stable, so ties keep their snapshot order.
///
/// The origin is a proxy for proximity, not a bound on the mesh: an anchor
/// can carry geometry far from its origin. The filter only optimizes search
/// order; correctness is enforced by the per-face acceptance radius in
/// [`classify_at`](crate::classify_at).
///
/// # Example
///
/// ```
/// use anchor_classify::rank_anchors;
/// use anchor_types::{AnchorGeometry, AnchorId, MeshAnchor, RigidTransform};
/// use nalgebra::{Point3, Vector3};
///
/// let geometry = AnchorGeometry::from_parts(
///     &[[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.0, 0.1, 0.0]],
///     &[[0, 1, 2]],
///     None,
/// )
/// .unwrap();
/// let at = |id: u64, x: f32| {
///     MeshAnchor::new(
///         AnchorId::new(id),
///         RigidTransform::from_translation(Vector3::new(x, 0.0, 0.0)),
///         geometry.clone(),
///     )
/// };
///
/// let anchors = vec![at(1, 3.0), at(2, 1.0), at(3, 9.0)];
/// let ranked = rank_anchors(&anchors, &Point3::origin(), 4.0);
///
/// // Nearest first; the 9 m anchor is beyond the cutoff.
/// let ids: Vec<_> = ranked.iter().map(|a| a.id.0).collect();
/// assert_eq!(ids, [2, 1]);
/// ```
#[must_use]
pub fn rank_anchors<'a>(
    anchors: &'a [MeshAnchor],
    query: &Point3<f32>,
    cutoff: f32,
) -> Vec<&'a MeshAnchor> {
    let mut ranked: Vec<(&MeshAnchor, f32)> = anchors
        .iter()
        .filter_map(|anchor| {
            let distance = (anchor.origin() - query).norm();
            (distance <= cutoff).then_some((anchor, distance))
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(anchor, _)| anchor).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anchor_types::{AnchorGeometry, AnchorId, RigidTransform};
    use nalgebra::Vector3;

    fn anchor_at(id: u64, origin: [f32; 3]) -> MeshAnchor {
        let geometry = AnchorGeometry::from_parts(
            &[[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.0, 0.1, 0.0]],
            &[[0, 1, 2]],
            None,
        )
        .unwrap();
        MeshAnchor::new(
            AnchorId::new(id),
            RigidTransform::from_translation(Vector3::new(origin[0], origin[1], origin[2])),
            geometry,
        )
    }

    fn ids(ranked: &[&MeshAnchor]) -> Vec<u64> {
        ranked.iter().map(|a| a.id.0).collect()
    }

    #[test]
    fn orders_by_ascending_origin_distance() {
        let anchors = vec![
            anchor_at(1, [3.0, 0.0, 0.0]),
            anchor_at(2, [1.0, 0.0, 0.0]),
            anchor_at(3, [2.0, 0.0, 0.0]),
        ];
        let ranked = rank_anchors(&anchors, &Point3::origin(), 4.0);
        assert_eq!(ids(&ranked), [2, 3, 1]);
    }

    #[test]
    fn drops_anchors_beyond_cutoff() {
        let anchors = vec![
            anchor_at(1, [1.0, 0.0, 0.0]),
            anchor_at(2, [4.5, 0.0, 0.0]),
        ];
        let ranked = rank_anchors(&anchors, &Point3::origin(), 4.0);
        assert_eq!(ids(&ranked), [1]);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let anchors = vec![anchor_at(1, [4.0, 0.0, 0.0])];
        let ranked = rank_anchors(&anchors, &Point3::origin(), 4.0);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn ties_keep_snapshot_order() {
        let anchors = vec![
            anchor_at(1, [1.0, 0.0, 0.0]),
            anchor_at(2, [0.0, 1.0, 0.0]),
            anchor_at(3, [0.0, 0.0, 1.0]),
        ];
        let ranked = rank_anchors(&anchors, &Point3::origin(), 4.0);
        assert_eq!(ids(&ranked), [1, 2, 3]);
    }

    #[test]
    fn empty_snapshot_ranks_empty() {
        let ranked = rank_anchors(&[], &Point3::origin(), 4.0);
        assert!(ranked.is_empty());
    }

    #[test]
    fn distance_is_measured_from_query_point() {
        let anchors = vec![
            anchor_at(1, [0.0, 0.0, 0.0]),
            anchor_at(2, [10.0, 0.0, 0.0]),
        ];
        let ranked = rank_anchors(&anchors, &Point3::new(10.0, 0.0, 0.0), 4.0);
        assert_eq!(ids(&ranked), [2]);
    }
}
