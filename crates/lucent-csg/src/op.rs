//! The boolean set-operation vocabulary.

use serde::{Deserialize, Serialize};

/// Boolean set operation combining two solids.
///
/// The operation is fully described by its effect on a pair of
/// inside/outside states, see [`SetOp::inside`]; the interval merge
/// never needs anything beyond that predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOp {
    /// Inside either solid.
    Union,
    /// Inside both solids.
    Intersection,
    /// Inside the left solid but not the right.
    Difference,
    /// Inside exactly one of the two solids.
    Xor,
}

impl SetOp {
    /// Combined inside-state for a point that is inside the left
    /// operand iff `left` and inside the right operand iff `right`.
    #[inline]
    pub fn inside(self, left: bool, right: bool) -> bool {
        match self {
            SetOp::Union => left || right,
            SetOp::Intersection => left && right,
            SetOp::Difference => left && !right,
            SetOp::Xor => left ^ right,
        }
    }
}
