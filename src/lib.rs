/*!
collider-adapter
================

**collider-adapter** puts 2D and 3D collider primitives (boxes, circles,
spheres, capsules, composite polygons and edge chains) behind one uniform
query contract: raycasts, shape casts, overlap tests and wide multi-ray
closest-hit resolution.

The crate does not detect collisions itself. Every query is forwarded to a
[`PhysicsBackend`](query::PhysicsBackend) supplied by the host engine, and the
raw answers are normalized into [`HitRecord`](query::HitRecord)s.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // Casts take the same parameter list as the backend.
#![allow(clippy::module_inception)]

#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod collider;
pub mod query;
pub mod shape;

/// Aliases for the mathematical types used throughout this crate.
///
/// 2D primitives live in the XY plane of the same 3D space; their Z coordinate
/// is the depth used by [`DepthRange`](crate::query::DepthRange) filtering.
pub mod math {
    pub use na::{Isometry3, Point2, Point3, Translation3, UnitQuaternion, Vector2, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the ambient space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
