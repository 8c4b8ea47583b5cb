//! Collider primitives handled by the adapters.

pub use self::ball::{Circle, Sphere};
pub use self::capsule::{
    capsule_points, Capsule2d, Capsule3d, CapsuleDirection, CapsuleDirection2d,
};
pub use self::cuboid::{Box2d, Box3d};
pub use self::polyline::{Composite, CompositeGeometry, EdgeChain};
#[doc(inline)]
pub use self::primitive::{
    ColliderHandle, Dimension, OwnerHandle, Primitive, PrimitiveKind, PrimitiveShape,
};

mod ball;
mod capsule;
mod cuboid;
mod polyline;
mod primitive;

use crate::math::{Point, Point2, Real, Vector, Vector2};

/// Lifts a planar vector into the XY plane of the 3D space.
#[inline]
pub(crate) fn lift_vector(v: &Vector2<Real>) -> Vector<Real> {
    Vector::new(v.x, v.y, 0.0)
}

/// Lifts a planar point into the XY plane of the 3D space.
#[inline]
pub(crate) fn lift_point(p: &Point2<Real>) -> Point<Real> {
    Point::new(p.x, p.y, 0.0)
}
