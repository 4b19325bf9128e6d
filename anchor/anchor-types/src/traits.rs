//! Capability traits for the host subsystems.
//!
//! The AR tracking, detection, and rendering frameworks live behind these
//! traits so the query logic has no compile-time dependency on any host
//! platform API. Tests implement them with synthetic in-memory data.

use nalgebra::Point3;

use crate::anchor::{FaceMatch, MeshAnchor};

/// Provides point-in-time snapshots of the tracked mesh anchor set.
///
/// The live collection is owned and mutated exclusively by the tracking
/// subsystem; a snapshot is a consistent copy that a query can scan without
/// holding any lock over live state.
pub trait AnchorSource {
    /// Takes a snapshot of the currently tracked anchors.
    fn snapshot(&self) -> Vec<MeshAnchor>;
}

/// Produces world-space query points.
///
/// Points originate from user tap ray-casts or detector bounding-box
/// ray-casts; both producers are host-side and out of scope here.
pub trait QuerySource {
    /// Drains the pending query points.
    fn query_points(&mut self) -> Vec<Point3<f32>>;
}

/// Consumes classification results for display.
///
/// The rendering collaborator places a text label and marker entity at the
/// matched centroid.
pub trait LabelSink {
    /// Places a label for a successful query.
    fn place_label(&mut self, result: &FaceMatch);
}

impl AnchorSource for Vec<MeshAnchor> {
    fn snapshot(&self) -> Vec<MeshAnchor> {
        self.clone()
    }
}

impl AnchorSource for [MeshAnchor] {
    fn snapshot(&self) -> Vec<MeshAnchor> {
        self.to_vec()
    }
}
