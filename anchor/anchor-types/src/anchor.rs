//! Mesh anchors and query results.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classification::FaceClassification;
use crate::geometry::AnchorGeometry;
use crate::transform::RigidTransform;

/// Identifier of a mesh anchor, assigned by the tracking subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorId(pub u64);

impl AnchorId {
    /// Creates an anchor identifier.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AnchorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "anchor#{}", self.0)
    }
}

/// A tracked, spatially-located chunk of reconstructed environment geometry.
///
/// Anchors are created, updated, and destroyed by the external tracking
/// subsystem; this type is an immutable snapshot taken at query time. The
/// live anchor set may have changed by the time a query result is used, and
/// stale results are acceptable (the query is a best-effort spatial lookup,
/// not a transactional one).
#[derive(Debug, Clone)]
pub struct MeshAnchor {
    /// Identifier assigned by the tracking subsystem.
    pub id: AnchorId,
    /// Rigid transform placing local geometry into world space.
    pub transform: RigidTransform,
    /// The anchor's geometry buffer set.
    pub geometry: AnchorGeometry,
}

impl MeshAnchor {
    /// Creates an anchor snapshot.
    #[must_use]
    pub const fn new(id: AnchorId, transform: RigidTransform, geometry: AnchorGeometry) -> Self {
        Self {
            id,
            transform,
            geometry,
        }
    }

    /// The anchor origin in world space.
    ///
    /// This is the transform origin, not the mesh extent; geometry can sit
    /// arbitrarily far from it.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Point3<f32> {
        self.transform.position()
    }

    /// The world-space centroid of a face.
    ///
    /// Decodes the local centroid and applies the anchor's rigid transform.
    ///
    /// # Panics
    ///
    /// Panics if `face` is out of range; callers iterate
    /// `0..geometry.face_count()`.
    #[must_use]
    pub fn world_face_centroid(&self, face: usize) -> Point3<f32> {
        self.transform
            .transform_point(&self.geometry.face_centroid(face))
    }
}

/// A successful classification query: the first face found whose world-space
/// centroid lies within the acceptance radius of the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMatch {
    /// The anchor the face belongs to.
    pub anchor: AnchorId,
    /// The face index within that anchor.
    pub face: usize,
    /// The face centroid in world space, suitable for marker placement.
    pub centroid: Point3<f32>,
    /// The face's semantic classification.
    pub classification: FaceClassification,
}
