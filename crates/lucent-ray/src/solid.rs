//! Boundary records and the contract leaf solids must satisfy.

use std::fmt;

use lucent_math::{Point2, Point3, Vec3};

use crate::{NodeId, Ray};

/// A single boundary along a ray where it enters or leaves a solid.
///
/// Boundary lists are kept sorted ascending by `t` and alternate
/// entry/exit starting with an entry. A region that already contains
/// the whole ray start is opened by a boundary at `t = -INFINITY`.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Ray parameter of the boundary. `±INFINITY` is legal as a
    /// sentinel for unbounded regions.
    pub t: f64,
    /// `true` where the ray passes from outside to inside.
    pub enter: bool,
    /// The leaf node that produced this boundary, or `None` for
    /// synthetic boundaries manufactured during merging.
    pub solid: Option<NodeId>,
}

impl Intersection {
    /// Create a boundary record.
    pub fn new(t: f64, enter: bool, solid: Option<NodeId>) -> Self {
        Self { t, enter, solid }
    }

    /// Synthetic entry at `t = -INFINITY` with no originating solid.
    pub fn unbounded_entry() -> Self {
        Self {
            t: f64::NEG_INFINITY,
            enter: true,
            solid: None,
        }
    }
}

/// Surface data for one boundary, filled in on demand.
///
/// Boundary queries (shadow tests, set operations) only need `t`;
/// shading needs position, normal and surface parameters. Leaves
/// compute these lazily through [`Solid::complete`].
#[derive(Debug, Clone, Copy)]
pub struct SurfacePoint {
    /// Position of the boundary on the surface.
    pub point: Point3,
    /// Outward surface normal (unnormalized).
    pub normal: Vec3,
    /// Surface parameter coordinates at the boundary.
    pub uv: Point2,
}

/// Contract for leaf geometry.
///
/// Implementations receive rays in their own local frame and report
/// every boundary along the full parametric line, negative parameters
/// included, sorted ascending by `t` and alternating entry/exit
/// starting with an entry. A solid that contains the whole negative
/// ray end opens with an entry at `t = -INFINITY`. The `solid`
/// back-reference is filled in by the scene after the call.
///
/// The merge path performs no validation; a leaf that breaks the
/// ordering or alternation contract produces wrong combined output,
/// not an error. Leaf implementations are expected to pin their
/// contract in their own test suites.
pub trait Solid: fmt::Debug + Send + Sync {
    /// All boundaries of this solid along `ray`, boundary-only.
    fn intersect(&self, ray: &Ray) -> Vec<Intersection>;

    /// Fill in surface data for one previously reported boundary.
    fn complete(&self, ray: &Ray, hit: &Intersection) -> SurfacePoint;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_entry_sentinel() {
        let b = Intersection::unbounded_entry();
        assert!(b.t.is_infinite() && b.t < 0.0);
        assert!(b.enter);
        assert!(b.solid.is_none());
    }
}
