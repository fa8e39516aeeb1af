#![warn(missing_docs)]

//! Arena-based scene graph with attribute inheritance and CSG
//! traversal.
//!
//! A [`Scene`] holds every node in a slotmap arena and wires them into
//! a hierarchy by key: parents own nothing, the child list is the only
//! holding edge. Each node carries a mutually-inverse transform pair
//! relating it to its parent, an optional set of inheritable
//! attributes, and one of three behaviors: plain group, boolean
//! combinator, or leaf solid.
//!
//! Ray queries enter at the root in world space, are re-expressed in
//! each child frame on the way down, and come back as one sorted
//! entry/exit boundary list for the whole combined solid.

pub mod attr;
mod error;
mod node;
mod scene;

pub use attr::{AttrValue, Color, Material};
pub use error::SceneError;
pub use node::{NodeKind, SceneNode};
pub use scene::Scene;
