//! Ray representation and frame changes.

use lucent_math::{Point3, Transform, Vec3};

/// A ray defined by origin and direction in some node's frame.
///
/// The direction is *not* normalized, and frame changes never
/// renormalize it: a boundary at parameter `t` in one frame sits at the
/// same `t` after the ray is mapped into a sibling frame, which is what
/// lets boundary lists from differently-transformed children be merged
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray (unnormalized).
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// Express this ray in another frame.
    ///
    /// `m` maps this ray's frame into the target frame; origin and
    /// direction are mapped separately so translation only affects the
    /// origin.
    pub fn transformed(&self, m: &Transform) -> Ray {
        Ray {
            origin: m.apply_point(&self.origin),
            direction: m.apply_vec(&self.direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        let p = ray.at(3.0);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 6.0).abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_transformed_ray_keeps_parameter() {
        // Mapping the ray and evaluating must commute with evaluating
        // and mapping the point, for the same t, even under scaling.
        let ray = Ray::new(Point3::new(-2.0, 1.0, 0.5), Vec3::new(1.0, 0.0, 0.25));
        let m = Transform::scale(2.0, 3.0, 4.0).then(&Transform::translation(1.0, -1.0, 0.0));
        let mapped = ray.transformed(&m);
        for t in [0.0, 0.5, 2.0, -1.5] {
            let direct = m.apply_point(&ray.at(t));
            assert!((mapped.at(t) - direct).norm() < 1e-12);
        }
    }

    #[test]
    fn test_transformed_direction_not_renormalized() {
        let ray = Ray::new(Point3::origin(), Vec3::new(1.0, 0.0, 0.0));
        let m = Transform::scale(0.5, 0.5, 0.5);
        let mapped = ray.transformed(&m);
        assert!((mapped.direction.norm() - 0.5).abs() < 1e-12);
    }
}
