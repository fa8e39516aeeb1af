//! Error types for scene assembly and completion queries.

use thiserror::Error;

/// Errors that can occur while assembling or querying a scene.
///
/// Missing attributes and rays that hit nothing are not errors; they
/// are ordinary `None`/empty results.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The supplied transform has no inverse.
    #[error("Transform is singular, child frame would be unreachable")]
    SingularTransform,

    /// The child already has a parent.
    #[error("Node is already attached to a parent")]
    AlreadyAttached,

    /// The attachment would make a node an ancestor of itself.
    #[error("Attachment would create a cycle")]
    Cycle,

    /// A node key is stale or belongs to a different scene.
    #[error("Node key does not resolve in this scene")]
    InvalidNode,

    /// Surface completion was requested for a synthetic boundary.
    #[error("Boundary has no originating solid")]
    SyntheticBoundary,

    /// Surface completion was requested for a node that is not a leaf.
    #[error("Node does not carry leaf geometry")]
    NotASolid,
}
