//! Scene nodes: one record shape, three behaviors.

use std::collections::HashMap;

use lucent_csg::SetOp;
use lucent_math::Transform;
use lucent_ray::{NodeId, Solid};

use crate::attr::AttrValue;

/// Behavior of a node when a ray reaches it.
#[derive(Debug)]
pub enum NodeKind {
    /// Plain grouping node.
    ///
    /// A group with children forwards rays to its *first* child only;
    /// remaining children are ignored by intersection queries. A group
    /// is a frame and attribute holder, not an implicit union; holders
    /// of multiple intersectable children want [`NodeKind::Csg`].
    Group,
    /// Boolean combinator: children are intersected in insertion order
    /// and reduced pairwise, left to right, under the operation.
    Csg(SetOp),
    /// Leaf carrying intersectable geometry.
    Solid(Box<dyn Solid>),
}

/// A node in the scene hierarchy.
///
/// All variants share the same record: a frame relative to the parent,
/// an ordered child list, local attributes, and the behavior tag. The
/// arena owns every node; parent links are plain keys.
#[derive(Debug)]
pub struct SceneNode {
    pub(crate) parent: Option<NodeId>,
    pub(crate) to_parent: Transform,
    pub(crate) from_parent: Transform,
    pub(crate) children: Vec<NodeId>,
    pub(crate) object_root: bool,
    pub(crate) attributes: HashMap<String, AttrValue>,
    pub(crate) kind: NodeKind,
}

impl SceneNode {
    pub(crate) fn detached(kind: NodeKind) -> Self {
        Self {
            parent: None,
            to_parent: Transform::identity(),
            from_parent: Transform::identity(),
            children: Vec::new(),
            object_root: false,
            attributes: HashMap::new(),
            kind,
        }
    }

    /// The owning parent, or `None` for the root and detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Transform mapping this node's frame into the parent frame.
    pub fn to_parent(&self) -> &Transform {
        &self.to_parent
    }

    /// Transform mapping the parent frame into this node's frame.
    ///
    /// Kept mutually inverse with [`to_parent`](Self::to_parent); both
    /// are set together at attachment time.
    pub fn from_parent(&self) -> &Transform {
        &self.from_parent
    }

    /// Children in insertion order.
    ///
    /// The order is semantically meaningful: combinators reduce left to
    /// right over it, and plain groups intersect the first entry only.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node anchors object space for its subtree.
    pub fn is_object_root(&self) -> bool {
        self.object_root
    }

    /// The node's intersection behavior.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }
}
