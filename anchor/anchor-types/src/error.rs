//! Error types for geometry buffer construction.

/// Errors reported when a geometry buffer set violates the documented
/// buffer contract.
///
/// These indicate an integration mismatch with the reconstruction engine,
/// not a runtime condition to retry.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// The vertex stride cannot hold three 32-bit floats.
    #[error("vertex stride {stride} is smaller than {expected} bytes (three f32 per vertex)")]
    VertexStride {
        /// The offending stride in bytes.
        stride: usize,
        /// The minimum stride in bytes.
        expected: usize,
    },

    /// The face index width is not one 32-bit unsigned integer.
    #[error("expected 4 bytes per vertex index, got {bytes}")]
    IndexWidth {
        /// The offending index width in bytes.
        bytes: usize,
    },

    /// Faces are not triangles.
    #[error("expected 3 vertex indices per face, got {indices}")]
    FaceArity {
        /// The offending index count per face.
        indices: usize,
    },

    /// The classification stride is zero.
    #[error("classification stride must be at least 1 byte")]
    ClassificationStride,

    /// A buffer is too small for its declared element count.
    #[error("{buffer} buffer holds {len} bytes but {needed} are addressed")]
    BufferTooSmall {
        /// Which buffer is undersized.
        buffer: &'static str,
        /// Bytes required by offset, stride, and count.
        needed: usize,
        /// Bytes actually present.
        len: usize,
    },

    /// The classification buffer does not carry one entry per face.
    #[error("classification buffer has {classifications} entries for {faces} faces")]
    ClassificationCount {
        /// Entries in the classification buffer.
        classifications: usize,
        /// Faces in the face buffer.
        faces: usize,
    },
}
