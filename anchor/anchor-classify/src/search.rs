//! The nearest-face classification search.

use anchor_types::traits::AnchorSource;
use anchor_types::{FaceMatch, MeshAnchor};
use nalgebra::Point3;
use tracing::debug;

use crate::error::SearchError;
use crate::rank::rank_anchors;

/// Default anchor cutoff distance, in meters.
pub const DEFAULT_CUTOFF_DISTANCE: f32 = 4.0;

/// Default per-face acceptance radius, in meters.
pub const DEFAULT_ACCEPTANCE_RADIUS: f32 = 0.05;

/// Tunable parameters for the classification search.
///
/// Both distances are in meters. Defaults match the capture pipeline's fixed
/// constants: a 4 m coarse cutoff on the anchor origin and a 5 cm acceptance
/// radius on the face centroid.
///
/// # Example
///
/// ```
/// use anchor_classify::SearchParams;
///
/// let params = SearchParams::new()
///     .with_cutoff_distance(2.0)
///     .with_acceptance_radius(0.1);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Anchors whose origin is farther than this from the query point are
    /// not searched.
    pub cutoff_distance: f32,

    /// Maximum distance between the query point and a face centroid for the
    /// face to match.
    pub acceptance_radius: f32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            cutoff_distance: DEFAULT_CUTOFF_DISTANCE,
            acceptance_radius: DEFAULT_ACCEPTANCE_RADIUS,
        }
    }
}

impl SearchParams {
    /// Creates parameters with the default distances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the anchor cutoff distance in meters.
    #[must_use]
    pub const fn with_cutoff_distance(mut self, meters: f32) -> Self {
        self.cutoff_distance = meters;
        self
    }

    /// Sets the per-face acceptance radius in meters.
    #[must_use]
    pub const fn with_acceptance_radius(mut self, meters: f32) -> Self {
        self.acceptance_radius = meters;
        self
    }

    /// Checks that both distances are positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] naming the offending parameter.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.cutoff_distance.is_finite() || self.cutoff_distance <= 0.0 {
            return Err(SearchError::InvalidCutoff(self.cutoff_distance));
        }
        if !self.acceptance_radius.is_finite() || self.acceptance_radius <= 0.0 {
            return Err(SearchError::InvalidAcceptanceRadius(self.acceptance_radius));
        }
        Ok(())
    }
}

/// Searches a snapshot of anchors for a face near the query point.
///
/// Anchors are visited nearest-origin-first after the coarse cutoff (see
/// [`rank_anchors`]); faces within each anchor are visited in index order.
/// The **first** face whose world-space centroid lies within
/// `params.acceptance_radius` of `query` is returned; the search does not
/// continue looking for a globally nearer face.
///
/// Returns `None` when no face qualifies. That is the normal negative
/// result ("classification unavailable at this point"), not a failure.
///
/// The scan is exhaustive over all ranked (anchor, face) pairs in the worst
/// case, so hosts with a time-critical frame loop run it off-thread; the
/// snapshot is immutable and the call touches no live state.
///
/// # Example
///
/// ```
/// use anchor_classify::{classify_at, SearchParams};
/// use anchor_types::{AnchorGeometry, AnchorId, MeshAnchor, RigidTransform};
/// use nalgebra::Point3;
///
/// let geometry = AnchorGeometry::from_parts(
///     &[[0.0, 0.0, 0.0], [0.3, 0.0, 0.0], [0.0, 0.3, 0.0]],
///     &[[0, 1, 2]],
///     Some(&[1]),
/// )
/// .unwrap();
/// let anchors = vec![MeshAnchor::new(
///     AnchorId::new(1),
///     RigidTransform::identity(),
///     geometry,
/// )];
///
/// // Query at the face centroid (0.1, 0.1, 0).
/// let hit = classify_at(&anchors, Point3::new(0.1, 0.1, 0.0), &SearchParams::default());
/// assert!(hit.is_some());
///
/// // Query far from every face.
/// let miss = classify_at(&anchors, Point3::new(2.0, 2.0, 2.0), &SearchParams::default());
/// assert!(miss.is_none());
/// ```
#[must_use]
pub fn classify_at(
    anchors: &[MeshAnchor],
    query: Point3<f32>,
    params: &SearchParams,
) -> Option<FaceMatch> {
    let ranked = rank_anchors(anchors, &query, params.cutoff_distance);
    debug!(
        anchors = anchors.len(),
        ranked = ranked.len(),
        "starting face classification query"
    );

    for anchor in ranked {
        for face in 0..anchor.geometry.face_count() {
            let centroid = anchor.world_face_centroid(face);
            let distance = (centroid - query).norm();
            if distance <= params.acceptance_radius {
                let classification = anchor.geometry.face_classification(face);
                debug!(
                    anchor = %anchor.id,
                    face,
                    distance,
                    %classification,
                    "face matched"
                );
                return Some(FaceMatch {
                    anchor: anchor.id,
                    face,
                    centroid,
                    classification,
                });
            }
        }
    }

    debug!("no face within acceptance radius");
    None
}

/// Façade pairing validated parameters with an anchor source.
///
/// `classify` takes a snapshot from the source and runs [`classify_at`] over
/// it. The snapshot is owned and the scan is pure, so a host can move the
/// whole call onto a worker thread; results of concurrent queries complete
/// in no particular order and are matched to their own request context by
/// the caller.
///
/// # Example
///
/// ```
/// use anchor_classify::{Classifier, SearchParams};
/// use anchor_types::{AnchorGeometry, AnchorId, MeshAnchor, RigidTransform};
/// use nalgebra::Point3;
///
/// let geometry = AnchorGeometry::from_parts(
///     &[[0.0, 0.0, 0.0], [0.3, 0.0, 0.0], [0.0, 0.3, 0.0]],
///     &[[0, 1, 2]],
///     Some(&[3]),
/// )
/// .unwrap();
/// let anchors = vec![MeshAnchor::new(
///     AnchorId::new(1),
///     RigidTransform::identity(),
///     geometry,
/// )];
///
/// let classifier = Classifier::new(SearchParams::default()).unwrap();
/// let result = classifier.classify(&anchors, Point3::new(0.1, 0.1, 0.0));
/// assert!(result.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    params: SearchParams,
}

impl Classifier {
    /// Creates a classifier with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when a distance is non-positive or non-finite.
    pub fn new(params: SearchParams) -> Result<Self, SearchError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameters this classifier searches with.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Snapshots the source and searches for a face near `query`.
    #[must_use]
    pub fn classify<S: AnchorSource + ?Sized>(
        &self,
        source: &S,
        query: Point3<f32>,
    ) -> Option<FaceMatch> {
        let snapshot = source.snapshot();
        classify_at(&snapshot, query, &self.params)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            params: SearchParams::default(),
        }
    }
}
