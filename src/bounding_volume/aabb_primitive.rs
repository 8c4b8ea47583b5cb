use crate::bounding_volume::aabb::absolute_transform_vector;
use crate::bounding_volume::{point_cloud_aabb, Aabb};
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{lift_point, lift_vector, PrimitiveShape};

/// Computes the AABB of a ball of radius `radius` centered at `center`.
///
/// With `planar` set, the box has a zero extent along `z`, as for a 2D circle.
#[inline]
pub fn ball_aabb(center: &Point<Real>, radius: Real, planar: bool) -> Aabb {
    let z = if planar { 0.0 } else { radius };
    Aabb::from_half_extents(*center, Vector::new(radius, radius, z))
}

/// Computes the world-space AABB of a box with the given local center and
/// half-extents, transformed by `pos`.
#[inline]
pub fn cuboid_aabb(
    pos: &Isometry<Real>,
    center: &Vector<Real>,
    half_extents: &Vector<Real>,
) -> Aabb {
    let ws_center = pos * Point::from(*center);
    Aabb::from_half_extents(ws_center, absolute_transform_vector(pos, half_extents))
}

/// Computes the AABB of a capsule from its world-space core segment.
#[inline]
pub fn capsule_aabb(a: &Point<Real>, b: &Point<Real>, radius: Real, planar: bool) -> Aabb {
    let z = if planar { 0.0 } else { radius };
    let margin = Vector::new(radius, radius, z);
    Aabb::new(a.inf(b), a.sup(b)).add_half_extents(&margin)
}

impl PrimitiveShape {
    /// Computes the world-space AABB of this primitive transformed by `pos`.
    ///
    /// 2D primitives have a zero extent along `z`. Point-defined primitives
    /// without any point are bounded by the degenerate box at their offset.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        match self {
            PrimitiveShape::Box2d(b) => cuboid_aabb(
                pos,
                &lift_vector(&b.offset),
                &lift_vector(&b.half_extents()),
            ),
            PrimitiveShape::Circle(c) => {
                let center = pos * Point::from(lift_vector(&c.offset));
                ball_aabb(&center, c.radius, true)
            }
            PrimitiveShape::Capsule2d(c) => {
                let (a, b) = c.local_points();
                capsule_aabb(&(pos * a), &(pos * b), c.radius(), true)
            }
            PrimitiveShape::Composite(c) => {
                point_cloud_aabb(pos, c.points().map(|pt| lift_point(&pt)))
                    .unwrap_or_else(|| degenerate_aabb(pos, &lift_vector(&c.offset)))
            }
            PrimitiveShape::Edge(e) => point_cloud_aabb(
                pos,
                e.points.iter().map(|pt| lift_point(&(pt + e.offset))),
            )
            .unwrap_or_else(|| degenerate_aabb(pos, &lift_vector(&e.offset))),
            PrimitiveShape::Box3d(b) => cuboid_aabb(pos, &b.center, &b.half_extents()),
            PrimitiveShape::Sphere(s) => ball_aabb(&(pos * Point::from(s.center)), s.radius, false),
            PrimitiveShape::Capsule3d(c) => {
                let (a, b) = c.world_points(pos);
                capsule_aabb(&a, &b, c.radius, false)
            }
        }
    }
}

fn degenerate_aabb(pos: &Isometry<Real>, offset: &Vector<Real>) -> Aabb {
    let pt = pos * Point::from(*offset);
    Aabb::new(pt, pt)
}
