use approx::assert_relative_eq;
use collider_adapter::collider::{
    BoxCollider2d, BoxCollider3d, CapsuleCollider2d, CapsuleCollider3d, CircleCollider2d,
    Collider, CompositeCollider2d, SphereCollider3d,
};
use collider_adapter::math::{Isometry, Point, Point2, Real, Vector, Vector2};
use collider_adapter::query::{
    cast, CastFilter, DepthRange, HitRecord, LayerMask, QueryError, QueryShape,
};
use collider_adapter::shape::{
    Box2d, Box3d, Capsule2d, Capsule3d, CapsuleDirection, CapsuleDirection2d, Circle,
    ColliderHandle, Composite, CompositeGeometry, OwnerHandle, Primitive, PrimitiveKind, Sphere,
};

use crate::world::{at, World};

fn single(primitive: Primitive) -> (World, ColliderHandle) {
    let mut world = World::new();
    let handle = world.insert(primitive);
    (world, handle)
}

#[test]
fn box_2d_cast_sweeps_its_bounds() {
    let (world, handle) = single(Primitive::new(
        Box2d::new(Vector2::new(2.0, 1.0)),
        at(1.0, 2.0, 0.5),
        OwnerHandle(1),
    ));
    let depth = DepthRange::new(-1.0, 1.0);
    let collider = BoxCollider2d::new(handle).with_depth_range(depth);
    let direction = Vector::new(2.0, 0.0, 0.7);

    let hit = collider
        .cast(&world, &direction, 3.0, LayerMask::layer(2), false)
        .unwrap();
    assert_eq!(hit, None);

    let request = world.last_cast();
    assert_eq!(
        request.shape,
        QueryShape::Cuboid {
            half_extents: Vector::new(1.0, 0.5, 0.0)
        }
    );
    assert_eq!(request.pose.translation.vector, Vector::new(1.0, 2.0, 0.5));
    assert_eq!(request.direction, Vector::x());
    assert_eq!(request.max_distance, 3.0);
    assert_eq!(request.filter.layer_mask, LayerMask::layer(2));
    assert_eq!(request.filter.depth, Some(depth));
    assert_eq!(request.filter.exclude, Some(handle));
}

#[test]
fn box_2d_cast_follows_the_forward_angle() {
    let pose = Isometry::new(Vector::zeros(), Vector::z() * core::f32::consts::FRAC_PI_2);
    let (world, handle) = single(Primitive::new(
        Box2d::new(Vector2::new(2.0, 2.0)),
        pose,
        OwnerHandle(1),
    ));
    let collider = BoxCollider2d::new(handle);

    let angle = collider.forward_angle(&world).unwrap();
    assert_relative_eq!(angle, 90.0, epsilon = 1.0e-4);

    let _ = collider
        .cast(&world, &Vector::y(), 1.0, LayerMask::ALL, false)
        .unwrap();
    assert_relative_eq!(
        world.last_cast().pose.rotation.angle(),
        core::f32::consts::FRAC_PI_2,
        epsilon = 1.0e-4
    );
}

#[test]
fn circle_cast_with_offset_and_skin() {
    let circle = Primitive::new(Circle::new(1.0), at(1.0, 2.0, 0.0), OwnerHandle(1));
    let (world, handle) = single(circle);
    let collider = CircleCollider2d::new(handle);
    let filter = CastFilter::new(-Vector::y(), 4.0)
        .with_offset(Vector::new(0.5, 0.0, 0.0))
        .with_skin(0.25);

    let _ = collider.cast_with_filter(&world, &filter).unwrap();

    let request = world.last_cast();
    assert_eq!(request.shape, QueryShape::Ball { radius: 0.75 });
    assert_eq!(request.pose, at(1.5, 2.0, 0.0));
    assert_eq!(request.direction, -Vector::y());
}

#[test]
fn capsule_2d_cast_keeps_its_direction() {
    let (world, handle) = single(Primitive::new(
        Capsule2d::new(Vector2::new(1.0, 3.0), CapsuleDirection2d::Vertical),
        at(0.0, 0.0, 0.0),
        OwnerHandle(1),
    ));

    let _ = CapsuleCollider2d::new(handle)
        .cast(&world, &Vector::x(), 1.0, LayerMask::ALL, false)
        .unwrap();

    assert_eq!(
        world.last_cast().shape,
        QueryShape::Capsule {
            a: Point::new(0.0, -1.0, 0.0),
            b: Point::new(0.0, 1.0, 0.0),
            radius: 0.5,
        }
    );
}

#[test]
fn composite_cast_sweeps_its_own_geometry() {
    let composite = Composite::new(
        vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]],
        CompositeGeometry::Outlines,
    );
    let pose = at(3.0, 0.0, 0.0);
    let (mut world, handle) = single(Primitive::new(composite, pose, OwnerHandle(1)));
    let scripted = HitRecord::new(
        Point::new(4.0, 0.0, 0.0),
        -Vector::x(),
        1.0,
        ColliderHandle(9),
        OwnerHandle(9),
    );
    world.cast_response = Some(scripted);

    let hit = CompositeCollider2d::new(handle)
        .cast(&world, &Vector::x(), 2.0, LayerMask::ALL, true)
        .unwrap();

    assert_eq!(hit, Some(scripted));
    let request = world.last_cast();
    assert_eq!(request.shape, QueryShape::Primitive(handle));
    assert_eq!(request.pose, pose);
    assert_eq!(request.filter.exclude, Some(handle));
}

#[test]
fn box_3d_cast_keeps_the_pose_rotation() {
    let pose = Isometry::new(Vector::new(0.0, 1.0, 0.0), Vector::y() * 0.3);
    let cuboid = Primitive::new(Box3d::new(Vector::repeat(2.0)), pose, OwnerHandle(1));
    let (world, handle) = single(cuboid);
    let collider = BoxCollider3d::new(handle);
    let bounds = collider.bounds(&world).unwrap();

    let _ = collider
        .cast_with_filter(&world, &CastFilter::new(Vector::z(), 5.0).with_skin(0.2))
        .unwrap();

    let request = world.last_cast();
    assert_eq!(
        request.shape,
        QueryShape::Cuboid {
            half_extents: bounds.extents().add_scalar(-0.2) * 0.5
        }
    );
    assert_eq!(request.pose.rotation, pose.rotation);
    assert_eq!(request.filter.depth, None);
}

#[test]
fn sphere_3d_cast() {
    let sphere = Primitive::new(Sphere::new(2.0), at(0.0, 0.0, 1.0), OwnerHandle(1));
    let (world, handle) = single(sphere);
    let direction = Vector::new(0.0, 0.0, -3.0);

    let _ = SphereCollider3d::new(handle)
        .cast(&world, &direction, 5.0, LayerMask::ALL, false)
        .unwrap();

    let request = world.last_cast();
    assert_eq!(request.shape, QueryShape::Ball { radius: 2.0 });
    assert_eq!(request.pose, at(0.0, 0.0, 1.0));
    assert_eq!(request.direction, -Vector::z());
    assert_eq!(request.filter.exclude, Some(handle));
}

#[test]
fn capsule_3d_cast_follows_the_pose_rotation() {
    let axis_angle = Vector::z() * core::f32::consts::FRAC_PI_2;
    let pose = Isometry::new(Vector::new(5.0, 0.0, 0.0), axis_angle);
    let (world, handle) = single(Primitive::new(
        Capsule3d::new(0.5, 3.0, CapsuleDirection::X),
        pose,
        OwnerHandle(1),
    ));

    let _ = CapsuleCollider3d::new(handle)
        .cast(&world, &Vector::x(), 5.0, LayerMask::ALL, false)
        .unwrap();

    let request = world.last_cast();
    let QueryShape::Capsule { a, b, radius } = request.shape else {
        panic!("unexpected cast shape {:?}", request.shape);
    };
    assert_eq!(radius, 0.5);
    assert_relative_eq!(a, Point::new(0.0, -1.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(b, Point::new(0.0, 1.0, 0.0), epsilon = 1.0e-5);
    assert_eq!(request.pose.translation.vector, Vector::new(5.0, 0.0, 0.0));
}

#[test]
fn degenerate_and_invalid_casts() {
    let circle = Primitive::new(Circle::new(1.0), at(0.0, 0.0, 0.0), OwnerHandle(1));
    let (world, handle) = single(circle);
    let collider = CircleCollider2d::new(handle);

    // Only the ignored depth component is set.
    assert_eq!(
        collider.cast(&world, &Vector::z(), 1.0, LayerMask::ALL, false),
        Ok(None)
    );
    assert!(world.casts().is_empty());

    assert_eq!(
        collider.cast(&world, &Vector::x(), -2.0, LayerMask::ALL, false),
        Err(QueryError::InvalidDistance(-2.0))
    );
    assert_eq!(
        cast::cast_box_2d(&world, handle, &CastFilter::new(Vector::x(), 1.0)),
        Err(QueryError::KindMismatch {
            expected: PrimitiveKind::Box2d,
            found: PrimitiveKind::Circle2d,
        })
    );
}

#[test]
fn raycasts_report_distances_along_normalized_directions() {
    let mut world = World::new();
    let own = world.insert(
        Primitive::new(Circle::new(0.5), at(0.0, 0.0, 0.0), OwnerHandle(1))
            .with_layer(1),
    );
    let _ = world.insert(Primitive::new(
        Box2d::new(Vector2::new(1.0, 1.0)),
        at(4.5, 0.0, 0.0),
        OwnerHandle(2),
    ));
    let collider = CircleCollider2d::new(own);
    let direction = Vector::new(10.0, 0.0, 3.0);

    let hit = collider
        .raycast(
            &world,
            &Point::origin(),
            &direction,
            10.0,
            LayerMask::layer(0),
            false,
        )
        .unwrap()
        .unwrap();

    assert_relative_eq!(hit.distance, 4.0 as Real);
    assert_eq!(hit.normal, -Vector::x());
    assert_eq!(hit.owner, Some(OwnerHandle(2)));
}
