//! Parallel classification of several query points over one snapshot.

use anchor_types::{FaceMatch, MeshAnchor};
use nalgebra::Point3;
use rayon::prelude::*;
use tracing::debug;

use crate::search::{classify_at, SearchParams};

/// Runs [`classify_at`] for each query point against one shared snapshot.
///
/// A single detector pass can yield several bounding-box points from the
/// same frame; classifying them shares the snapshot instead of re-taking it
/// per point. Queries are independent (no deduplication of identical
/// points) and run in parallel; results are returned positionally, matched
/// to the input order.
///
/// # Example
///
/// ```
/// use anchor_classify::{classify_batch, SearchParams};
/// use anchor_types::{AnchorGeometry, AnchorId, MeshAnchor, RigidTransform};
/// use nalgebra::Point3;
///
/// let geometry = AnchorGeometry::from_parts(
///     &[[0.0, 0.0, 0.0], [0.3, 0.0, 0.0], [0.0, 0.3, 0.0]],
///     &[[0, 1, 2]],
///     Some(&[2]),
/// )
/// .unwrap();
/// let anchors = vec![MeshAnchor::new(
///     AnchorId::new(1),
///     RigidTransform::identity(),
///     geometry,
/// )];
///
/// let points = [Point3::new(0.1, 0.1, 0.0), Point3::new(5.0, 5.0, 5.0)];
/// let results = classify_batch(&anchors, &points, &SearchParams::default());
///
/// assert!(results[0].is_some());
/// assert!(results[1].is_none());
/// ```
#[must_use]
pub fn classify_batch(
    anchors: &[MeshAnchor],
    points: &[Point3<f32>],
    params: &SearchParams,
) -> Vec<Option<FaceMatch>> {
    debug!(
        points = points.len(),
        anchors = anchors.len(),
        "starting batch classification"
    );
    points
        .par_iter()
        .map(|point| classify_at(anchors, *point, params))
        .collect()
}
