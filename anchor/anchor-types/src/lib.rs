//! Core types for mesh-anchor face classification.
//!
//! This crate provides the foundational types consumed by the classification
//! query in `anchor-classify`:
//!
//! - [`MeshAnchor`] - A tracked chunk of reconstructed environment geometry
//! - [`AnchorGeometry`] - Strided buffer views over an anchor's vertex, face
//!   and per-face classification data
//! - [`RigidTransform`] - Rotation + translation mapping anchor-local
//!   coordinates to world space
//! - [`FaceClassification`] - Semantic label attached to a mesh face
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero host-platform dependencies**. The AR
//! tracking, rendering, and detection subsystems that produce and consume
//! these types appear only as the capability traits in [`traits`], so the
//! query logic can be unit-tested with synthetic in-memory buffers.
//!
//! # Units & Precision
//!
//! All coordinates are **meters** in `f32`. The capture pipeline delivers
//! single-precision geometry; this crate keeps that precision end to end
//! rather than widening and re-narrowing.
//!
//! # Buffer Contract
//!
//! Anchor geometry arrives as three parallel binary buffers, addressed by
//! byte offset and stride:
//!
//! - vertex positions: exactly three little-endian `f32` per vertex
//! - face indices: exactly one `u32` per index slot, three slots per face
//! - classifications (optional): exactly one unsigned byte per face
//!
//! Shape violations are caught at construction and reported as
//! [`GeometryError`]. Out-of-range face indices are a caller contract
//! violation and panic; callers iterate `0..face_count()`.
//!
//! # Example
//!
//! ```
//! use anchor_types::{AnchorGeometry, FaceClassification};
//!
//! let geometry = AnchorGeometry::from_parts(
//!     &[[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]],
//!     &[[0, 1, 2]],
//!     Some(&[2]),
//! )
//! .unwrap();
//!
//! let centroid = geometry.face_centroid(0);
//! assert!((centroid.x - 1.0).abs() < 1e-6);
//! assert!((centroid.y - 1.0).abs() < 1e-6);
//! assert_eq!(geometry.face_classification(0), FaceClassification::Floor);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod anchor;
mod buffer;
mod classification;
mod error;
mod geometry;
mod transform;
pub mod traits;

pub use anchor::{AnchorId, FaceMatch, MeshAnchor};
pub use buffer::{ClassificationBuffer, FaceBuffer, VertexBuffer, BYTES_PER_VERTEX};
pub use classification::FaceClassification;
pub use error::GeometryError;
pub use geometry::AnchorGeometry;
pub use transform::RigidTransform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};
