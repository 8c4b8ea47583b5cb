//! Collider adapters: one uniform query contract over every primitive kind.
//!
//! The 2D adapters ([`BoxCollider2d`], [`CircleCollider2d`],
//! [`CapsuleCollider2d`], [`CompositeCollider2d`], [`EdgeCollider2d`]) query
//! the XY plane within their [`DepthRange`](crate::query::DepthRange). The 3D
//! adapters ([`BoxCollider3d`], [`SphereCollider3d`], [`CapsuleCollider3d`])
//! additionally resolve multi-ray fans across their depth.

pub use self::adapter::ColliderAdapter;
pub use self::box2d::BoxCollider2d;
pub use self::box3d::BoxCollider3d;
pub use self::capsule2d::CapsuleCollider2d;
pub use self::capsule3d::CapsuleCollider3d;
pub use self::circle2d::CircleCollider2d;
pub use self::collider::{Collider, DEFAULT_SKIN, POINT_OVERLAP_RADIUS};
pub use self::composite2d::CompositeCollider2d;
pub use self::edge2d::EdgeCollider2d;
pub use self::factory::{adapter_constructor, resolve_adapter, AdapterConstructor, AdapterError};
pub use self::sphere3d::SphereCollider3d;
pub use self::trigger::{TriggerDetector, TriggerEvent};
pub use crate::query::multi_ray::MAX_RAYS_COUNT;

#[macro_use]
pub(crate) mod planar;
#[macro_use]
pub(crate) mod spatial;

mod adapter;
mod box2d;
mod box3d;
mod capsule2d;
mod capsule3d;
mod circle2d;
mod collider;
mod composite2d;
mod edge2d;
mod factory;
mod sphere3d;
mod trigger;
