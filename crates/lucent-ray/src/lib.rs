#![warn(missing_docs)]

//! Ray representation, boundary records and the leaf-solid contract
//! for the lucent scene core.
//!
//! - [`Ray`] - a ray expressed in some node's coordinate frame
//! - [`Intersection`] - a single entry/exit boundary along a ray
//! - [`SurfacePoint`] - deferred surface data for a chosen boundary
//! - [`Solid`] - the contract leaf geometry must satisfy
//! - [`NodeId`] - stable key of a node in a scene arena

mod ray;
mod solid;

pub use ray::Ray;
pub use solid::{Intersection, Solid, SurfacePoint};

slotmap::new_key_type! {
    /// Stable key of a node in a scene arena.
    ///
    /// Parent and child links in the scene graph are expressed as keys,
    /// so no node ever owns its parent. Boundary records carry the key
    /// of the leaf that produced them.
    pub struct NodeId;
}
