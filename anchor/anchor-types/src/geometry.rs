//! An anchor's geometry buffer set and the face decoding operations.

use nalgebra::Point3;

use crate::buffer::{ClassificationBuffer, FaceBuffer, VertexBuffer, BYTES_PER_VERTEX};
use crate::classification::FaceClassification;
use crate::error::GeometryError;

/// The three parallel buffers describing one anchor's mesh.
///
/// - vertex positions in anchor-local space,
/// - faces as vertex index triples,
/// - optional per-face classification codes.
///
/// Decoding is a pure read of the underlying buffers. Face indices passed to
/// the decoding methods must be in `0..face_count()`; out-of-range indices
/// panic rather than returning an error, since they indicate a caller bug and
/// not a runtime condition.
///
/// # Example
///
/// ```
/// use anchor_types::{AnchorGeometry, FaceClassification};
///
/// let geometry = AnchorGeometry::from_parts(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     &[[0, 1, 2]],
///     Some(&[1]),
/// )
/// .unwrap();
///
/// assert_eq!(geometry.face_count(), 1);
/// assert_eq!(geometry.face_vertex_indices(0), [0, 1, 2]);
/// assert_eq!(geometry.face_classification(0), FaceClassification::Wall);
/// ```
#[derive(Debug, Clone)]
pub struct AnchorGeometry {
    vertices: VertexBuffer,
    faces: FaceBuffer,
    classification: Option<ClassificationBuffer>,
}

impl AnchorGeometry {
    /// Assembles a geometry buffer set from its three views.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ClassificationCount`] when a classification
    /// buffer is present but does not carry one entry per face.
    pub fn new(
        vertices: VertexBuffer,
        faces: FaceBuffer,
        classification: Option<ClassificationBuffer>,
    ) -> Result<Self, GeometryError> {
        if let Some(classification) = &classification {
            if classification.count() != faces.count() {
                return Err(GeometryError::ClassificationCount {
                    classifications: classification.count(),
                    faces: faces.count(),
                });
            }
        }
        Ok(Self {
            vertices,
            faces,
            classification,
        })
    }

    /// Packs plain vertex, face, and classification arrays into the engine's
    /// canonical buffer layout.
    ///
    /// Used by tests and host shims that assemble synthetic anchors.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ClassificationCount`] when the classification
    /// slice does not carry one code per face.
    pub fn from_parts(
        vertices: &[[f32; 3]],
        faces: &[[u32; 3]],
        classifications: Option<&[u8]>,
    ) -> Result<Self, GeometryError> {
        let mut vertex_bytes = Vec::with_capacity(vertices.len() * BYTES_PER_VERTEX);
        for vertex in vertices {
            for coord in vertex {
                vertex_bytes.extend_from_slice(&coord.to_le_bytes());
            }
        }
        let mut face_bytes = Vec::with_capacity(faces.len() * 12);
        for face in faces {
            for index in face {
                face_bytes.extend_from_slice(&index.to_le_bytes());
            }
        }

        let vertex_view =
            VertexBuffer::new(vertex_bytes.into(), 0, BYTES_PER_VERTEX, vertices.len())?;
        let face_view = FaceBuffer::new(face_bytes.into(), 4, 3, faces.len())?;
        let classification_view = match classifications {
            Some(codes) => Some(ClassificationBuffer::new(
                codes.to_vec().into(),
                0,
                1,
                codes.len(),
            )?),
            None => None,
        };

        Self::new(vertex_view, face_view, classification_view)
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertices.count()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub const fn face_count(&self) -> usize {
        self.faces.count()
    }

    /// Whether a classification buffer is present.
    #[inline]
    #[must_use]
    pub const fn has_classification(&self) -> bool {
        self.classification.is_some()
    }

    /// The vertex indices of a face.
    #[must_use]
    pub fn face_vertex_indices(&self, face: usize) -> [u32; 3] {
        [
            self.faces.vertex_index(face, 0),
            self.faces.vertex_index(face, 1),
            self.faces.vertex_index(face, 2),
        ]
    }

    /// The decoded positions of a face's vertices, in anchor-local space.
    #[must_use]
    pub fn face_vertices(&self, face: usize) -> [Point3<f32>; 3] {
        let [a, b, c] = self.face_vertex_indices(face);
        [
            self.vertices.position(a),
            self.vertices.position(b),
            self.vertices.position(c),
        ]
    }

    /// The geometric centroid of a face, in anchor-local space.
    ///
    /// Component-wise arithmetic mean of the three vertices. Degenerate
    /// (collinear or zero-area) faces get no special handling; their centroid
    /// is still the vertex mean.
    #[must_use]
    pub fn face_centroid(&self, face: usize) -> Point3<f32> {
        let [a, b, c] = self.face_vertices(face);
        Point3::new(
            (a.x + b.x + c.x) / 3.0,
            (a.y + b.y + c.y) / 3.0,
            (a.z + b.z + c.z) / 3.0,
        )
    }

    /// The semantic classification of a face.
    ///
    /// Decodes to [`FaceClassification::None`] when the anchor carries no
    /// classification buffer or the raw code is unrecognized.
    #[must_use]
    pub fn face_classification(&self, face: usize) -> FaceClassification {
        match &self.classification {
            Some(buffer) => FaceClassification::from_raw(buffer.raw(face)),
            None => FaceClassification::None,
        }
    }
}
