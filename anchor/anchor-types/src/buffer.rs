//! Strided views over the reconstruction engine's binary geometry buffers.
//!
//! The engine exposes mesh data as raw byte buffers addressed by offset and
//! stride. These views decode fixed-size values in place: a read computes
//! `offset + stride * index` and pulls the bytes at that position, never
//! copying a whole buffer.
//!
//! Buffers are held as `Arc<[u8]>` so an anchor snapshot is cheap to clone
//! and can be handed to a worker thread without copying geometry.

use std::sync::Arc;

use nalgebra::Point3;

use crate::error::GeometryError;

/// Bytes per vertex position: three little-endian `f32`.
pub const BYTES_PER_VERTEX: usize = 12;

/// Bytes per face vertex index: one little-endian `u32`.
const BYTES_PER_INDEX: usize = 4;

/// Vertex indices per face. Reconstruction meshes are triangulated.
const INDICES_PER_FACE: usize = 3;

#[inline]
fn read_f32(data: &[u8], at: usize) -> f32 {
    f32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

#[inline]
fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// A strided view over a vertex position buffer.
///
/// Each vertex is exactly three little-endian `f32` (twelve bytes); the
/// stride may be larger when the engine interleaves other attributes.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use anchor_types::VertexBuffer;
///
/// let mut bytes = Vec::new();
/// for coord in [1.0f32, 2.0, 3.0] {
///     bytes.extend_from_slice(&coord.to_le_bytes());
/// }
/// let data: Arc<[u8]> = bytes.into();
///
/// let vertices = VertexBuffer::new(data, 0, 12, 1).unwrap();
/// let position = vertices.position(0);
/// assert_eq!(position.x, 1.0);
/// assert_eq!(position.z, 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    data: Arc<[u8]>,
    offset: usize,
    stride: usize,
    count: usize,
}

impl VertexBuffer {
    /// Creates a view over `count` vertices starting at `offset` with the
    /// given `stride`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the stride cannot hold a vertex or the
    /// buffer is too small for the addressed range.
    pub fn new(
        data: Arc<[u8]>,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Result<Self, GeometryError> {
        if stride < BYTES_PER_VERTEX {
            return Err(GeometryError::VertexStride {
                stride,
                expected: BYTES_PER_VERTEX,
            });
        }
        let needed = if count == 0 {
            0
        } else {
            offset + stride * (count - 1) + BYTES_PER_VERTEX
        };
        if data.len() < needed {
            return Err(GeometryError::BufferTooSmall {
                buffer: "vertex",
                needed,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            offset,
            stride,
            count,
        })
    }

    /// Number of vertices in the view.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Decodes the position of the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Face index buffers are guaranteed
    /// by the engine to reference valid vertices, so a panic here means the
    /// buffer set was assembled inconsistently.
    #[must_use]
    pub fn position(&self, index: u32) -> Point3<f32> {
        let index = index as usize;
        assert!(
            index < self.count,
            "vertex index {} out of range for {} vertices",
            index,
            self.count
        );
        let at = self.offset + self.stride * index;
        Point3::new(
            read_f32(&self.data, at),
            read_f32(&self.data, at + 4),
            read_f32(&self.data, at + 8),
        )
    }
}

/// A view over a face index buffer.
///
/// Faces are tightly packed: three little-endian `u32` vertex indices per
/// face, in face order.
#[derive(Debug, Clone)]
pub struct FaceBuffer {
    data: Arc<[u8]>,
    count: usize,
}

impl FaceBuffer {
    /// Creates a view over `count` faces.
    ///
    /// `bytes_per_index` and `indices_per_face` are taken as declared by the
    /// engine and checked against the supported layout (4-byte indices,
    /// triangles).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] on an unsupported index width or face arity,
    /// or when the buffer is too small for `count` faces.
    pub fn new(
        data: Arc<[u8]>,
        bytes_per_index: usize,
        indices_per_face: usize,
        count: usize,
    ) -> Result<Self, GeometryError> {
        if bytes_per_index != BYTES_PER_INDEX {
            return Err(GeometryError::IndexWidth {
                bytes: bytes_per_index,
            });
        }
        if indices_per_face != INDICES_PER_FACE {
            return Err(GeometryError::FaceArity {
                indices: indices_per_face,
            });
        }
        let needed = count * INDICES_PER_FACE * BYTES_PER_INDEX;
        if data.len() < needed {
            return Err(GeometryError::BufferTooSmall {
                buffer: "face",
                needed,
                len: data.len(),
            });
        }
        Ok(Self { data, count })
    }

    /// Number of faces in the view.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Decodes one vertex index of a face.
    ///
    /// `slot` is the index position within the face, `0..3`.
    ///
    /// # Panics
    ///
    /// Panics if `face` or `slot` is out of range; callers iterate
    /// `0..count()` and `0..3`.
    #[must_use]
    pub fn vertex_index(&self, face: usize, slot: usize) -> u32 {
        assert!(
            face < self.count,
            "face index {} out of range for {} faces",
            face,
            self.count
        );
        assert!(slot < INDICES_PER_FACE, "face index slot {slot} out of range");
        let at = (face * INDICES_PER_FACE + slot) * BYTES_PER_INDEX;
        read_u32(&self.data, at)
    }
}

/// A strided view over a per-face classification buffer.
///
/// Each face has exactly one unsigned byte holding its raw classification
/// code.
#[derive(Debug, Clone)]
pub struct ClassificationBuffer {
    data: Arc<[u8]>,
    offset: usize,
    stride: usize,
    count: usize,
}

impl ClassificationBuffer {
    /// Creates a view over `count` classification bytes starting at `offset`
    /// with the given `stride`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the stride is zero or the buffer is too
    /// small for the addressed range.
    pub fn new(
        data: Arc<[u8]>,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Result<Self, GeometryError> {
        if stride == 0 {
            return Err(GeometryError::ClassificationStride);
        }
        let needed = if count == 0 {
            0
        } else {
            offset + stride * (count - 1) + 1
        };
        if data.len() < needed {
            return Err(GeometryError::BufferTooSmall {
                buffer: "classification",
                needed,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            offset,
            stride,
            count,
        })
    }

    /// Number of classification entries in the view.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Reads the raw classification byte for a face.
    ///
    /// # Panics
    ///
    /// Panics if `face` is out of range; callers iterate `0..count()`.
    #[must_use]
    pub fn raw(&self, face: usize) -> u8 {
        assert!(
            face < self.count,
            "face index {} out of range for {} classifications",
            face,
            self.count
        );
        self.data[self.offset + self.stride * face]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn float_bytes(values: &[f32]) -> Arc<[u8]> {
        let mut bytes = Vec::with_capacity(values.len() * 4);
        for v in values {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes.into()
    }

    #[test]
    fn vertex_buffer_reads_packed_floats() {
        let data = float_bytes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let vertices = VertexBuffer::new(data, 0, BYTES_PER_VERTEX, 2).unwrap();

        assert_eq!(vertices.position(0), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(vertices.position(1), Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn vertex_buffer_honors_offset_and_stride() {
        // 4 bytes of leading padding, then 16-byte stride with 4 bytes of
        // trailing padding per vertex.
        let mut bytes = vec![0xFF; 4];
        for v in [[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]] {
            for c in v {
                bytes.extend_from_slice(&c.to_le_bytes());
            }
            bytes.extend_from_slice(&[0xAA; 4]);
        }
        let vertices = VertexBuffer::new(bytes.into(), 4, 16, 2).unwrap();

        assert_eq!(vertices.position(0), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(vertices.position(1), Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn vertex_buffer_rejects_narrow_stride() {
        let data = float_bytes(&[0.0; 3]);
        let result = VertexBuffer::new(data, 0, 8, 1);
        assert!(matches!(result, Err(GeometryError::VertexStride { .. })));
    }

    #[test]
    fn vertex_buffer_rejects_short_buffer() {
        let data = float_bytes(&[0.0; 3]);
        let result = VertexBuffer::new(data, 0, BYTES_PER_VERTEX, 2);
        assert!(matches!(result, Err(GeometryError::BufferTooSmall { .. })));
    }

    #[test]
    #[should_panic(expected = "vertex index 1 out of range")]
    fn vertex_buffer_panics_out_of_range() {
        let data = float_bytes(&[0.0; 3]);
        let vertices = VertexBuffer::new(data, 0, BYTES_PER_VERTEX, 1).unwrap();
        let _ = vertices.position(1);
    }

    #[test]
    fn face_buffer_reads_packed_indices() {
        let mut bytes = Vec::new();
        for index in [0u32, 1, 2, 2, 1, 3] {
            bytes.extend_from_slice(&index.to_le_bytes());
        }
        let faces = FaceBuffer::new(bytes.into(), 4, 3, 2).unwrap();

        assert_eq!(faces.vertex_index(0, 0), 0);
        assert_eq!(faces.vertex_index(0, 2), 2);
        assert_eq!(faces.vertex_index(1, 0), 2);
        assert_eq!(faces.vertex_index(1, 2), 3);
    }

    #[test]
    fn face_buffer_rejects_wrong_index_width() {
        let result = FaceBuffer::new(vec![0u8; 12].into(), 2, 3, 1);
        assert!(matches!(result, Err(GeometryError::IndexWidth { bytes: 2 })));
    }

    #[test]
    fn face_buffer_rejects_non_triangles() {
        let result = FaceBuffer::new(vec![0u8; 16].into(), 4, 4, 1);
        assert!(matches!(result, Err(GeometryError::FaceArity { indices: 4 })));
    }

    #[test]
    fn classification_buffer_reads_strided_bytes() {
        let data: Arc<[u8]> = vec![7u8, 0xFF, 2, 0xFF, 4, 0xFF].into();
        let classifications = ClassificationBuffer::new(data, 0, 2, 3).unwrap();

        assert_eq!(classifications.raw(0), 7);
        assert_eq!(classifications.raw(1), 2);
        assert_eq!(classifications.raw(2), 4);
    }

    #[test]
    fn classification_buffer_rejects_zero_stride() {
        let result = ClassificationBuffer::new(vec![0u8; 4].into(), 0, 0, 4);
        assert!(matches!(result, Err(GeometryError::ClassificationStride)));
    }

    #[test]
    fn empty_views_are_valid() {
        let empty: Arc<[u8]> = Vec::new().into();
        assert!(VertexBuffer::new(empty.clone(), 0, BYTES_PER_VERTEX, 0).is_ok());
        assert!(FaceBuffer::new(empty.clone(), 4, 3, 0).is_ok());
        assert!(ClassificationBuffer::new(empty, 0, 1, 0).is_ok());
    }
}
