//! The scene arena and its query surface.

use slotmap::SlotMap;

use lucent_csg::{merge, SetOp};
use lucent_math::Transform;
use lucent_ray::{Intersection, NodeId, Ray, Solid, SurfacePoint};

use crate::attr::{self, AttrValue};
use crate::error::SceneError;
use crate::node::{NodeKind, SceneNode};

/// A hierarchy of transformable nodes answering ray queries.
///
/// Nodes live in an arena and reference each other by [`NodeId`]; the
/// arena owns every node and the parent link is never an ownership
/// edge. Assembly (adding and attaching nodes, setting attributes) is
/// a `&mut self` affair and must finish before queries start; queries
/// themselves are `&self` only, so independent rays may be traced from
/// many threads against the same scene.
#[derive(Debug)]
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
    root: NodeId,
}

impl Scene {
    /// Create a scene holding a single empty group node as root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::detached(NodeKind::Group));
        Self { nodes, root }
    }

    /// The root node. Its local frame is world space.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Add a detached grouping node.
    pub fn add_group(&mut self) -> NodeId {
        self.nodes.insert(SceneNode::detached(NodeKind::Group))
    }

    /// Add a detached boolean combinator node.
    pub fn add_csg(&mut self, op: SetOp) -> NodeId {
        self.nodes.insert(SceneNode::detached(NodeKind::Csg(op)))
    }

    /// Add a detached leaf node carrying `solid`.
    pub fn add_solid(&mut self, solid: Box<dyn Solid>) -> NodeId {
        self.nodes.insert(SceneNode::detached(NodeKind::Solid(solid)))
    }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics if `id` does not resolve in this scene.
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id]
    }

    /// Attach `child` under `parent` with the given child-to-parent
    /// transform.
    ///
    /// The inverse is computed here and stored alongside, so the pair
    /// can never go out of sync. Fails fast on a singular transform,
    /// on a child that already has a parent, and on attachments that
    /// would close a cycle; the graph is left untouched on every error.
    pub fn attach(
        &mut self,
        parent: NodeId,
        child: NodeId,
        to_parent: Transform,
    ) -> Result<(), SceneError> {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return Err(SceneError::InvalidNode);
        }
        if self.nodes[child].parent.is_some() {
            return Err(SceneError::AlreadyAttached);
        }
        // Walk up from the parent: the child must not be an ancestor.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(SceneError::Cycle);
            }
            cursor = self.nodes[id].parent;
        }
        let from_parent = to_parent.inverse().ok_or(SceneError::SingularTransform)?;

        let node = &mut self.nodes[child];
        node.to_parent = to_parent;
        node.from_parent = from_parent;
        node.parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Mark or unmark `node` as the anchor of object space for its
    /// subtree.
    ///
    /// # Panics
    /// Panics if `node` does not resolve in this scene.
    pub fn set_object_root(&mut self, node: NodeId, flag: bool) {
        self.nodes[node].object_root = flag;
    }

    /// Set or overwrite a local attribute on `node`.
    ///
    /// Ancestors and descendants are unaffected; descendants without
    /// their own entry will see the new value through inheritance.
    ///
    /// # Panics
    /// Panics if `node` does not resolve in this scene.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: AttrValue) {
        self.nodes[node]
            .attributes
            .insert(name.to_string(), value);
    }

    /// Resolve an attribute on `node`, consulting ancestors.
    ///
    /// Returns the nearest value walking towards the root, or `None`
    /// if no ancestor defines the name. A missing attribute is an
    /// expected outcome, not an error.
    ///
    /// # Panics
    /// Panics if `node` does not resolve in this scene.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&AttrValue> {
        let n = &self.nodes[node];
        match n.attributes.get(name) {
            Some(value) => Some(value),
            None => n.parent.and_then(|p| self.attribute(p, name)),
        }
    }

    /// The attribute value set on `node` itself, never consulting
    /// ancestors.
    ///
    /// # Panics
    /// Panics if `node` does not resolve in this scene.
    pub fn local_attribute(&self, node: NodeId, name: &str) -> Option<&AttrValue> {
        self.nodes[node].attributes.get(name)
    }

    /// All texture names visible at `node`, ancestors first.
    ///
    /// Unlike other attributes, textures accumulate along the walk:
    /// the result is every ancestor's textures followed by this node's
    /// own `texture` attribute, which may hold a single texture or a
    /// sequence. Empty when nothing is defined anywhere on the path.
    ///
    /// # Panics
    /// Panics if `node` does not resolve in this scene.
    pub fn textures(&self, node: NodeId) -> Vec<String> {
        let n = &self.nodes[node];
        let mut list = match n.parent {
            Some(p) => self.textures(p),
            None => Vec::new(),
        };
        match n.attributes.get(attr::TEXTURE) {
            Some(AttrValue::Texture(name)) => list.push(name.clone()),
            Some(AttrValue::Textures(names)) => list.extend(names.iter().cloned()),
            _ => {}
        }
        list
    }

    /// Transform from `node`'s local frame to world space.
    ///
    /// Composed fresh on every call from the stored child-to-parent
    /// transforms; nothing is cached, so edits between calls are always
    /// reflected.
    ///
    /// # Panics
    /// Panics if `node` does not resolve in this scene.
    pub fn to_world(&self, node: NodeId) -> Transform {
        let mut m = Transform::identity();
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let n = &self.nodes[id];
            m = n.to_parent.then(&m);
            cursor = n.parent;
        }
        m
    }

    /// Transform from `node`'s local frame to its object space.
    ///
    /// Same composition as [`to_world`](Self::to_world) but the ascent
    /// stops at the nearest node flagged as object root. That node's
    /// local frame *is* object space, so a flagged node maps to itself
    /// by the identity. Falls back to world space when no ancestor is
    /// flagged. Anchoring textures this way keeps them attached to an
    /// animated subtree instead of swimming through it.
    ///
    /// # Panics
    /// Panics if `node` does not resolve in this scene.
    pub fn to_object(&self, node: NodeId) -> Transform {
        let mut m = Transform::identity();
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let n = &self.nodes[id];
            if n.object_root {
                break;
            }
            m = n.to_parent.then(&m);
            cursor = n.parent;
        }
        m
    }

    /// All boundaries of the scene's combined solid along `ray`.
    ///
    /// `ray` is expressed in world space. The result is sorted
    /// ascending by parameter and alternates entry/exit starting with
    /// an entry; it is empty when nothing is hit.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection> {
        self.intersect_node(self.root, ray)
    }

    /// Intersection query against one node, `ray` given in that node's
    /// local frame.
    fn intersect_node(&self, id: NodeId, ray: &Ray) -> Vec<Intersection> {
        let node = &self.nodes[id];
        match &node.kind {
            NodeKind::Group => match node.children.first() {
                Some(&first) => {
                    let local = ray.transformed(&self.nodes[first].from_parent);
                    self.intersect_node(first, &local)
                }
                None => Vec::new(),
            },
            NodeKind::Csg(op) => self.intersect_csg(node, *op, ray),
            NodeKind::Solid(solid) => {
                let mut boundaries = solid.intersect(ray);
                for boundary in &mut boundaries {
                    boundary.solid = Some(id);
                }
                boundaries
            }
        }
    }

    /// Left-associative reduction of a combinator's children.
    fn intersect_csg(&self, node: &SceneNode, op: SetOp, ray: &Ray) -> Vec<Intersection> {
        let mut children = node.children.iter();
        let mut acc = match children.next() {
            Some(&first) => {
                let local = ray.transformed(&self.nodes[first].from_parent);
                self.intersect_node(first, &local)
            }
            None => return Vec::new(),
        };
        for &child in children {
            let local = ray.transformed(&self.nodes[child].from_parent);
            let right = self.intersect_node(child, &local);
            acc = merge(&acc, &right, op);
        }
        acc
    }

    /// Fill in world-space surface data for one boundary.
    ///
    /// `ray` must be the world-space ray the boundary came from. The
    /// originating leaf recomputes its surface data in its local frame
    /// and the result is mapped back out, normals through the inverse
    /// transpose.
    pub fn complete(&self, ray: &Ray, hit: &Intersection) -> Result<SurfacePoint, SceneError> {
        let id = hit.solid.ok_or(SceneError::SyntheticBoundary)?;
        let node = self.nodes.get(id).ok_or(SceneError::InvalidNode)?;
        let solid = match &node.kind {
            NodeKind::Solid(solid) => solid,
            _ => return Err(SceneError::NotASolid),
        };
        let to_world = self.to_world(id);
        let from_world = to_world.inverse().ok_or(SceneError::SingularTransform)?;
        let local = solid.complete(&ray.transformed(&from_world), hit);
        Ok(SurfacePoint {
            point: to_world.apply_point(&local.point),
            normal: to_world.apply_normal(&local.normal),
            uv: local.uv,
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
