#![warn(missing_docs)]

//! Hierarchical CSG ray-intersection core.
//!
//! A scene graph of transformable nodes whose leaves are intersectable
//! solids, combined through boolean set operations evaluated lazily
//! per ray. The crate answers one question: where along a given ray
//! does the combined solid begin and end.
//!
//! # Architecture
//!
//! - [`Scene`] - node arena, attribute inheritance, ray traversal
//! - [`SetOp`] / [`merge`] - boolean vocabulary and the interval sweep
//! - [`Ray`], [`Intersection`], [`SurfacePoint`] - query types
//! - [`Solid`] - the contract leaf geometry plugs in through
//!
//! Shading, lighting, cameras and persistence live outside this core
//! and consume it through [`Scene::intersect`], [`Scene::complete`]
//! and the attribute API.
//!
//! # Example
//!
//! ```ignore
//! use lucent::{attr, AttrValue, Ray, Scene, SetOp, Transform};
//!
//! let mut scene = Scene::new();
//! let bored = scene.add_csg(SetOp::Difference);
//! let block = scene.add_solid(Box::new(my_block));
//! let bore = scene.add_solid(Box::new(my_cylinder));
//! scene.attach(scene.root(), bored, Transform::identity())?;
//! scene.attach(bored, block, Transform::identity())?;
//! scene.attach(bored, bore, Transform::translation(0.5, 0.0, 0.0))?;
//! scene.set_attribute(bored, attr::TEXTURE, AttrValue::Texture("steel".into()));
//!
//! let boundaries = scene.intersect(&Ray::new(eye, view_dir));
//! if let Some(entry) = boundaries.iter().find(|b| b.enter && b.t > 0.0) {
//!     let surface = scene.complete(&Ray::new(eye, view_dir), entry)?;
//! }
//! ```

pub use lucent_csg::{merge, SetOp};
pub use lucent_math::{Dir3, Point2, Point3, Tolerance, Transform, Vec3};
pub use lucent_ray::{Intersection, NodeId, Ray, Solid, SurfacePoint};
pub use lucent_scene::{attr, AttrValue, Color, Material, NodeKind, Scene, SceneError, SceneNode};
