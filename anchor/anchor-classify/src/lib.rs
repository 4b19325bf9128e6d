//! Spatial nearest-face classification queries over mesh-anchor snapshots.
//!
//! Given a world-space point and a snapshot of tracked mesh anchors, find the
//! first mesh face whose world-space centroid lies within a small acceptance
//! radius of the point, and report that face's semantic classification along
//! with its centroid:
//!
//! - [`rank_anchors`] - Coarse pre-filter and nearest-first ordering of the
//!   anchor set (4 m cutoff on the anchor origin)
//! - [`classify_at`] - The search itself: anchors in ranked order, faces in
//!   index order, first face within the acceptance radius wins
//! - [`Classifier`] - Façade pairing validated [`SearchParams`] with an
//!   [`AnchorSource`](anchor_types::traits::AnchorSource)
//! - [`classify_batch`] - Parallel variant for several query points over one
//!   shared snapshot
//! - [`LabelCache`] - Per-classification entity cache for the rendering
//!   collaborator
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero host-platform dependencies**. Anchors
//! arrive as [`anchor_types::MeshAnchor`] snapshots; everything here is pure
//! computation over those snapshots.
//!
//! # Search policy
//!
//! The search returns the **first** qualifying face, not the globally
//! nearest one. The acceptance radius (5 cm by default) is small relative to
//! typical reconstruction face spacing, so in practice at most one face
//! qualifies; returning early keeps worst-case latency bounded by the faces
//! actually scanned. This policy is deliberate and load-bearing: do not
//! replace it with a full nearest-neighbor pass.
//!
//! # Concurrency
//!
//! A query runs against an immutable snapshot and touches no live state, so
//! the whole call is plain `Send` work. Hosts that must not stall a frame
//! loop hand the snapshot and point to a worker thread and match each result
//! to its own request context; completion order across in-flight queries is
//! unspecified, and overlapping identical queries are not deduplicated.
//!
//! # Example
//!
//! ```
//! use anchor_classify::{classify_at, SearchParams};
//! use anchor_types::{AnchorGeometry, AnchorId, FaceClassification, MeshAnchor, RigidTransform};
//! use nalgebra::Point3;
//!
//! let geometry = AnchorGeometry::from_parts(
//!     &[[0.0, 0.0, 0.0], [0.3, 0.0, 0.0], [0.0, 0.3, 0.0]],
//!     &[[0, 1, 2]],
//!     Some(&[4]),
//! )
//! .unwrap();
//! let anchors = vec![MeshAnchor::new(
//!     AnchorId::new(1),
//!     RigidTransform::identity(),
//!     geometry,
//! )];
//!
//! let result = classify_at(&anchors, Point3::new(0.1, 0.1, 0.0), &SearchParams::default());
//! assert_eq!(result.unwrap().classification, FaceClassification::Table);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod batch;
mod error;
mod label;
mod rank;
mod search;

pub use batch::classify_batch;
pub use error::SearchError;
pub use label::LabelCache;
pub use rank::rank_anchors;
pub use search::{
    classify_at, Classifier, SearchParams, DEFAULT_ACCEPTANCE_RADIUS, DEFAULT_CUTOFF_DISTANCE,
};

// Re-export the result type alongside the query that produces it
pub use anchor_types::FaceMatch;
