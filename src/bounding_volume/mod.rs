//! Bounding volumes of collider primitives.

pub use self::aabb::Aabb;
pub use self::aabb_utils::{local_point_cloud_aabb, point_cloud_aabb};

mod aabb;
mod aabb_primitive;
mod aabb_utils;

/// Free functions computing the world-space bounds of specific primitives.
pub mod details {
    pub use super::aabb_primitive::{ball_aabb, capsule_aabb, cuboid_aabb};
}
