//! Shape casts issued from the volume of a collider.
//!
//! Each function reads the geometry of the primitive identified by `collider`,
//! derives the swept shape from it and forwards the cast to the backend. The
//! cast origin is the position of the primitive's pose plus
//! [`CastFilter::offset`]; the swept shape is shrunk by [`CastFilter::skin`].

use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use crate::query::error::validate_distance;
use crate::query::{CastFilter, HitRecord, PhysicsBackend, QueryError, QueryShape};
use crate::shape::{capsule_points, ColliderHandle, Primitive, PrimitiveKind};

fn primitive_of_kind(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    expected: PrimitiveKind,
) -> Result<&Primitive, QueryError> {
    let primitive = backend.primitive(collider)?;
    let found = primitive.kind();

    if found == expected {
        Ok(primitive)
    } else {
        Err(QueryError::KindMismatch { expected, found })
    }
}

/// The world-space origin of a cast issued from `primitive`.
fn cast_origin(primitive: &Primitive, filter: &CastFilter) -> Vector<Real> {
    primitive.pose.translation.vector + filter.offset
}

/// The pose of a 2D cast: rotated about `z` by `filter.angle` degrees.
fn planar_pose(origin: Vector<Real>, filter: &CastFilter) -> Isometry<Real> {
    let rotation = Rotation::from_axis_angle(&Vector::z_axis(), filter.angle.to_radians());
    Isometry::from_parts(Translation::from(origin), rotation)
}

fn planar_direction(direction: &Vector<Real>) -> Vector<Real> {
    Vector::new(direction.x, direction.y, 0.0)
}

/// Forwards the cast to the backend, never reporting `collider` itself.
fn sweep(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    shape: &QueryShape,
    pose: &Isometry<Real>,
    direction: &Vector<Real>,
    filter: &CastFilter,
    planar: bool,
) -> Result<Option<HitRecord>, QueryError> {
    let distance = validate_distance(filter.distance)?;
    let Some(dir) = direction.try_normalize(Real::EPSILON) else {
        return Ok(None);
    };
    let query_filter = if planar {
        filter.planar_filter(collider)
    } else {
        filter.spatial_filter(collider)
    };

    let hit = backend.shape_cast(shape, pose, &dir, distance, &query_filter)?;

    if filter.draw {
        log::debug!(
            "{:?} cast from {} along {} up to {}: {:?}",
            shape,
            pose.translation.vector,
            dir,
            distance,
            hit.map(|hit| hit.point)
        );
    }

    Ok(hit)
}

/// Casts the box of a 2D box primitive.
///
/// The swept box has the size of the primitive bounds minus the skin, and is
/// rotated by `filter.angle`.
pub fn cast_box_2d(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    filter: &CastFilter,
) -> Result<Option<HitRecord>, QueryError> {
    let primitive = primitive_of_kind(backend, collider, PrimitiveKind::Box2d)?;
    let size = backend.bounds(collider)?.extents().xy();
    let size = size.add_scalar(-filter.skin);
    let shape = QueryShape::Cuboid {
        half_extents: Vector::new(size.x * 0.5, size.y * 0.5, 0.0),
    };
    let pose = planar_pose(cast_origin(primitive, filter), filter);
    let direction = planar_direction(&filter.direction);

    sweep(backend, collider, &shape, &pose, &direction, filter, true)
}

/// Casts the circle of a 2D circle primitive, its radius shrunk by the skin.
pub fn cast_circle_2d(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    filter: &CastFilter,
) -> Result<Option<HitRecord>, QueryError> {
    let primitive = primitive_of_kind(backend, collider, PrimitiveKind::Circle2d)?;
    let radius = primitive
        .shape
        .as_circle()
        .map(|circle| circle.radius)
        .unwrap_or_default();
    let shape = QueryShape::Ball {
        radius: radius - filter.skin,
    };
    let pose = Isometry::new(cast_origin(primitive, filter), Vector::zeros());
    let direction = planar_direction(&filter.direction);

    sweep(backend, collider, &shape, &pose, &direction, filter, true)
}

/// Casts the capsule of a 2D capsule primitive.
///
/// The swept capsule has the size of the primitive minus the skin, keeps its
/// direction and is rotated by `filter.angle`.
pub fn cast_capsule_2d(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    filter: &CastFilter,
) -> Result<Option<HitRecord>, QueryError> {
    let primitive = primitive_of_kind(backend, collider, PrimitiveKind::Capsule2d)?;
    let Some(capsule) = primitive.shape.as_capsule_2d() else {
        return Ok(None);
    };

    let mut shrunk = *capsule;
    shrunk.size = shrunk.size.add_scalar(-filter.skin);
    let radius = shrunk.radius();
    let (a, b) = capsule_points(radius, shrunk.height(), shrunk.axis(), &Vector::zeros());
    let shape = QueryShape::Capsule { a, b, radius };
    let pose = planar_pose(cast_origin(primitive, filter), filter);
    let direction = planar_direction(&filter.direction);

    sweep(backend, collider, &shape, &pose, &direction, filter, true)
}

/// Casts the own geometry of a 2D composite or edge chain.
///
/// At most one hit is returned. `filter.offset`, `filter.angle` and
/// `filter.skin` do not apply to point-defined geometry.
pub fn cast_primitive_2d(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    filter: &CastFilter,
) -> Result<Option<HitRecord>, QueryError> {
    let primitive = backend.primitive(collider)?;
    match primitive.kind() {
        PrimitiveKind::Composite2d | PrimitiveKind::Edge2d => {}
        found => {
            return Err(QueryError::KindMismatch {
                expected: PrimitiveKind::Composite2d,
                found,
            })
        }
    }

    let shape = QueryShape::Primitive(collider);
    sweep(
        backend,
        collider,
        &shape,
        &primitive.pose,
        &planar_direction(&filter.direction),
        filter,
        true,
    )
}

/// Casts the box of a 3D box primitive.
///
/// The swept box has the size of the primitive bounds minus the skin and the
/// orientation of the primitive pose.
pub fn cast_box_3d(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    filter: &CastFilter,
) -> Result<Option<HitRecord>, QueryError> {
    let primitive = primitive_of_kind(backend, collider, PrimitiveKind::Box3d)?;
    let size = backend.bounds(collider)?.extents();
    let size = size.add_scalar(-filter.skin);
    let shape = QueryShape::Cuboid {
        half_extents: size * 0.5,
    };
    let pose = Isometry::from_parts(
        Translation::from(cast_origin(primitive, filter)),
        primitive.pose.rotation,
    );

    sweep(
        backend,
        collider,
        &shape,
        &pose,
        &filter.direction,
        filter,
        false,
    )
}

/// Casts the sphere of a 3D sphere primitive, its radius shrunk by the skin.
pub fn cast_sphere_3d(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    filter: &CastFilter,
) -> Result<Option<HitRecord>, QueryError> {
    let primitive = primitive_of_kind(backend, collider, PrimitiveKind::Sphere3d)?;
    let radius = primitive
        .shape
        .as_sphere()
        .map(|sphere| sphere.radius)
        .unwrap_or_default();
    let shape = QueryShape::Ball {
        radius: radius - filter.skin,
    };
    let pose = Isometry::new(cast_origin(primitive, filter), Vector::zeros());

    sweep(
        backend,
        collider,
        &shape,
        &pose,
        &filter.direction,
        filter,
        false,
    )
}

/// Casts the capsule of a 3D capsule primitive.
///
/// The core segment is rebuilt around the cast origin from the shrunk radius,
/// along the capsule axis rotated by the primitive pose.
pub fn cast_capsule_3d(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    filter: &CastFilter,
) -> Result<Option<HitRecord>, QueryError> {
    let primitive = primitive_of_kind(backend, collider, PrimitiveKind::Capsule3d)?;
    let Some(capsule) = primitive.shape.as_capsule_3d() else {
        return Ok(None);
    };

    let radius = capsule.radius - filter.skin;
    let (a, b) = capsule_points(radius, capsule.height, capsule.direction, &Vector::zeros());
    let rotation = primitive.pose.rotation;
    let shape = QueryShape::Capsule {
        a: Point::from(rotation * a.coords),
        b: Point::from(rotation * b.coords),
        radius,
    };
    let pose = Isometry::new(cast_origin(primitive, filter), Vector::zeros());

    sweep(
        backend,
        collider,
        &shape,
        &pose,
        &filter.direction,
        filter,
        false,
    )
}
