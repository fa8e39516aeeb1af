#![warn(missing_docs)]

//! Math types for the lucent scene core.
//!
//! Thin wrappers around nalgebra providing the types the scene graph
//! works in: points, vectors, directions, and the affine [`Transform`]
//! that relates a node's frame to its parent's frame.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D surface-parameter space.
pub type Point2 = nalgebra::Point2<f64>;

/// A 4x4 affine transform between two coordinate frames.
///
/// In the scene graph a `Transform` maps child-frame coordinates into
/// the parent frame; its [`inverse`](Transform::inverse) maps back.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Compose: apply `other` first, then `self` (`self * other`).
    ///
    /// Walking a node chain upward, `to_world = parent.then(&child)`
    /// accumulates child-to-parent transforms root-most first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point (applies rotation, scale and translation).
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    ///
    /// The result is deliberately not renormalized: ray directions keep
    /// their length across frame changes so ray parameters stay
    /// comparable between sibling frames.
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Transform a surface normal (inverse transpose of the upper-left 3x3).
    pub fn apply_normal(&self, n: &Vec3) -> Vec3 {
        let m3 = self.matrix.fixed_view::<3, 3>(0, 0);
        if let Some(inv) = m3.try_inverse() {
            inv.transpose() * n
        } else {
            // Degenerate transform — return input unchanged
            *n
        }
    }

    /// Inverse of this transform, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Maximum absolute deviation of `self * other` from the identity.
    ///
    /// Used to check that a stored transform pair is still mutually
    /// inverse within numerical noise.
    pub fn deviation_from_inverse(&self, other: &Transform) -> f64 {
        let product = self.matrix * other.matrix;
        let mut worst: f64 = 0.0;
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                worst = worst.max((product[(row, col)] - expected).abs());
            }
        }
        worst
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in scene units.
    pub linear: f64,
    /// Ray-parameter tolerance.
    pub parametric: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-9 parametric).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        parametric: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if two ray parameters are effectively equal.
    pub fn params_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.parametric
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_is_noop() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!((t.apply_point(&p) - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation_moves_points_not_vectors() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = t.apply_point(&Point3::new(1.0, 2.0, 3.0));
        assert!((p.x - 11.0).abs() < 1e-12);
        assert!((p.y - 22.0).abs() < 1e-12);
        assert!((p.z - 33.0).abs() < 1e-12);

        let v = t.apply_vec(&Vec3::new(1.0, 2.0, 3.0));
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);
        assert!((v.z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(PI / 2.0);
        let p = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_preserves_vector_length_change() {
        let t = Transform::scale(2.0, 3.0, 4.0);
        let v = t.apply_vec(&Vec3::new(1.0, 1.0, 1.0));
        assert!((v.x - 2.0).abs() < 1e-12);
        assert!((v.y - 3.0).abs() < 1e-12);
        assert!((v.z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_then_applies_right_operand_first() {
        let translate = Transform::translation(1.0, 0.0, 0.0);
        let scale = Transform::scale(2.0, 2.0, 2.0);
        // scale.then(translate): translate first, then scale.
        let composed = scale.then(&translate);
        let p = composed.apply_point(&Point3::origin());
        assert!((p.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Transform::rotation_y(0.7).then(&Transform::translation(1.0, 2.0, 3.0));
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        let back = inv.apply_point(&t.apply_point(&p));
        assert!((back - p).norm() < 1e-12);
        assert!(t.deviation_from_inverse(&inv) < 1e-12);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let flat = Transform::scale(1.0, 1.0, 0.0);
        assert!(flat.inverse().is_none());
    }

    #[test]
    fn test_normal_transform_under_nonuniform_scale() {
        // A plane with normal +z squashed along z: the normal must stay
        // along +z, not shrink with the geometry.
        let t = Transform::scale(1.0, 1.0, 0.5);
        let n = t.apply_normal(&Vec3::new(0.0, 0.0, 1.0));
        assert!(n.x.abs() < 1e-12);
        assert!(n.y.abs() < 1e-12);
        assert!(n.z > 1.0);
    }

    #[test]
    fn test_tolerance_params_equal() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.params_equal(1.0, 1.0 + 1e-10));
        assert!(!tol.params_equal(1.0, 1.001));
        assert!(tol.points_equal(
            &Point3::new(1.0, 2.0, 3.0),
            &Point3::new(1.0 + 1e-10, 2.0, 3.0)
        ));
    }
}
