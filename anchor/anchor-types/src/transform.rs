//! Rigid transformation mapping anchor-local coordinates to world space.

use nalgebra::{Matrix4, Point3, Rotation3, UnitQuaternion, Vector3};

/// A rigid transformation consisting of rotation and translation.
///
/// Reconstruction transforms are rigid by contract: no scale, no shear. The
/// transformation is applied in the order: rotate -> translate.
///
/// # Example
///
/// ```
/// use anchor_types::RigidTransform;
/// use nalgebra::{Point3, UnitQuaternion, Vector3};
/// use std::f32::consts::PI;
///
/// // Rotate 90 degrees around Z, then translate.
/// let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), PI / 2.0);
/// let translation = Vector3::new(1.0, 2.0, 3.0);
/// let transform = RigidTransform::new(rotation, translation);
///
/// let transformed = transform.transform_point(&Point3::new(1.0, 0.0, 0.0));
/// assert!((transformed.y - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    /// Rotation as a unit quaternion.
    pub rotation: UnitQuaternion<f32>,
    /// Translation vector.
    pub translation: Vector3<f32>,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Creates a new rigid transform with the given rotation and translation.
    #[must_use]
    pub const fn new(rotation: UnitQuaternion<f32>, translation: Vector3<f32>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Creates an identity transform (no rotation or translation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Creates a transform with only translation.
    #[must_use]
    pub fn from_translation(translation: Vector3<f32>) -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation,
        }
    }

    /// Creates a transform with only rotation.
    #[must_use]
    pub fn from_rotation(rotation: UnitQuaternion<f32>) -> Self {
        Self {
            rotation,
            translation: Vector3::zeros(),
        }
    }

    /// Decodes the column-major 4x4 matrix the tracking engine hands over.
    ///
    /// The upper-left 3x3 block is taken as the rotation and the fourth
    /// column as the translation. The matrix must be rigid (orthonormal
    /// rotation block, no scale); the tracking engine guarantees this and no
    /// re-orthonormalization is attempted.
    #[must_use]
    pub fn from_matrix4(matrix: &Matrix4<f32>) -> Self {
        let rotation_block = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let rotation =
            UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation_block));
        let translation = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);
        Self {
            rotation,
            translation,
        }
    }

    /// The transform origin, i.e. where the anchor's local origin lands in
    /// world space.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point3<f32> {
        Point3::from(self.translation)
    }

    /// Transforms a 3D point from local to world coordinates.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::from(self.rotation * point.coords + self.translation)
    }

    /// Transforms a 3D vector (direction).
    ///
    /// Vectors are rotated but not translated.
    #[inline]
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f32>) -> Vector3<f32> {
        self.rotation * vector
    }

    /// Composes this transform with another (self * other).
    ///
    /// The result applies `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.translation + self.rotation * other.translation,
        }
    }

    /// Computes the inverse of this transform.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.inverse();
        Self {
            rotation: inv_rotation,
            translation: inv_rotation * (-self.translation),
        }
    }

    /// Converts to a column-major 4x4 homogeneous transformation matrix.
    #[must_use]
    pub fn to_matrix4(&self) -> Matrix4<f32> {
        let mut mat = Matrix4::identity();

        let rot_mat = self.rotation.to_rotation_matrix();
        for i in 0..3 {
            for j in 0..3 {
                mat[(i, j)] = rot_mat[(i, j)];
            }
        }

        mat[(0, 3)] = self.translation.x;
        mat[(1, 3)] = self.translation.y;
        mat[(2, 3)] = self.translation.z;

        mat
    }
}
