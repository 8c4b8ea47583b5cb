use approx::assert_relative_eq;
use collider_adapter::bounding_volume::Aabb;
use collider_adapter::collider::{
    BoxCollider2d, BoxCollider3d, CapsuleCollider2d, CapsuleCollider3d, CircleCollider2d,
    Collider, CompositeCollider2d, EdgeCollider2d, SphereCollider3d,
};
use collider_adapter::math::{Point, Point2, Vector, Vector2};
use collider_adapter::query::{BackendError, PhysicsBackend, QueryError};
use collider_adapter::shape::{
    Box2d, Box3d, Capsule2d, Capsule3d, CapsuleDirection, CapsuleDirection2d, Circle,
    ColliderHandle, Composite, CompositeGeometry, EdgeChain, OwnerHandle, Primitive,
    PrimitiveKind, Sphere,
};

use crate::world::{at, World};

fn world_with(primitive: Primitive) -> (World, ColliderHandle) {
    let mut world = World::new();
    let handle = world.insert(primitive);
    (world, handle)
}

#[test]
fn box_sizes_are_taken_as_is() {
    let (mut world, handle) = world_with(Primitive::new(
        Box2d::new(Vector2::new(1.0, 1.0)),
        at(0.0, 0.0, 0.0),
        OwnerHandle(1),
    ));
    let collider = BoxCollider2d::new(handle);
    let size = Vector::new(3.0, 4.0, 5.0);

    collider.set_size(&mut world, size).unwrap();

    assert_eq!(collider.size(&world).unwrap(), Vector::new(3.0, 4.0, 0.0));

    let (mut world, handle) = world_with(Primitive::new(
        Box3d::new(Vector::repeat(1.0)),
        at(0.0, 0.0, 0.0),
        OwnerHandle(1),
    ));
    let collider = BoxCollider3d::new(handle);
    let size = Vector::new(1.0, 2.0, 3.0);

    collider.set_size(&mut world, size).unwrap();

    assert_eq!(collider.size(&world).unwrap(), size);
    assert_eq!(collider.half_size(&world).unwrap(), size * 0.5);
    assert_eq!(collider.biggest_size_axis(&world).unwrap(), 3.0);
}

#[test]
fn round_sizes_become_a_radius() {
    let circle = Primitive::new(Circle::new(1.0), at(0.0, 0.0, 0.0), OwnerHandle(1));
    let sphere = Primitive::new(Sphere::new(1.0), at(0.0, 0.0, 0.0), OwnerHandle(2));
    let (mut world, circle) = world_with(circle);
    let sphere = world.insert(sphere);
    let capsule_2d = world.insert(Primitive::new(
        Capsule2d::new(Vector2::new(1.0, 4.0), CapsuleDirection2d::Vertical),
        at(0.0, 0.0, 0.0),
        OwnerHandle(3),
    ));
    let capsule_3d = world.insert(Primitive::new(
        Capsule3d::new(0.5, 4.0, CapsuleDirection::Y),
        at(0.0, 0.0, 0.0),
        OwnerHandle(4),
    ));

    let circle = CircleCollider2d::new(circle);
    let size = Vector::new(3.0, 4.0, 0.0);
    circle.set_size(&mut world, size).unwrap();
    assert_eq!(circle.radius(&world), Ok(5.0));

    let sphere = SphereCollider3d::new(sphere);
    let size = Vector::new(1.0, 2.0, 2.0);
    sphere.set_size(&mut world, size).unwrap();
    assert_eq!(sphere.radius(&world), Ok(3.0));

    let capsule_2d = CapsuleCollider2d::new(capsule_2d);
    let size = Vector::new(0.0, 3.0, 4.0);
    capsule_2d.set_size(&mut world, size).unwrap();
    assert_eq!(capsule_2d.radius(&world), Ok(5.0));
    let primitive = world.primitive(capsule_2d.handle()).unwrap();
    assert_eq!(primitive.shape.as_capsule_2d().unwrap().height(), 4.0);

    let capsule_3d = CapsuleCollider3d::new(capsule_3d);
    let size = Vector::new(2.0, 3.0, 6.0);
    capsule_3d.set_size(&mut world, size).unwrap();
    assert_eq!(capsule_3d.radius(&world), Ok(7.0));
    let primitive = world.primitive(capsule_3d.handle()).unwrap();
    assert_eq!(primitive.shape.as_capsule_3d().unwrap().height, 4.0);
}

#[test]
fn point_defined_sizes_are_ignored() {
    let composite = Composite::new(
        vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 1.0),
        ]],
        CompositeGeometry::Polygons,
    );
    let edge = EdgeChain::new(vec![Point2::new(-1.0, 0.0), Point2::new(1.0, 0.5)]);
    let (mut world, composite_handle) =
        world_with(Primitive::new(composite, at(0.0, 0.0, 0.0), OwnerHandle(1)));
    let edge_handle = world.insert(Primitive::new(edge, at(0.0, 0.0, 0.0), OwnerHandle(2)));

    let before = world.primitive(composite_handle).unwrap().clone();
    CompositeCollider2d::new(composite_handle)
        .set_size(&mut world, Vector::new(10.0, 10.0, 10.0))
        .unwrap();
    assert_eq!(world.primitive(composite_handle).unwrap(), &before);

    let before = world.primitive(edge_handle).unwrap().clone();
    EdgeCollider2d::new(edge_handle)
        .set_size(&mut world, Vector::new(10.0, 10.0, 10.0))
        .unwrap();
    assert_eq!(world.primitive(edge_handle).unwrap(), &before);
}

#[test]
fn resizing_the_wrong_kind_fails() {
    let circle = Primitive::new(Circle::new(1.0), at(0.0, 0.0, 0.0), OwnerHandle(1));
    let (mut world, handle) = world_with(circle);
    let size = Vector::repeat(1.0);

    assert_eq!(
        BoxCollider2d::new(handle).set_size(&mut world, size),
        Err(QueryError::KindMismatch {
            expected: PrimitiveKind::Box2d,
            found: PrimitiveKind::Circle2d,
        })
    );

    let missing = ColliderHandle(42);
    assert_eq!(
        SphereCollider3d::new(missing).set_size(&mut world, size),
        Err(QueryError::Backend(BackendError::UnknownCollider(missing)))
    );
}

#[test]
fn offsets() {
    let (mut world, handle) = world_with(Primitive::new(
        Box2d::new(Vector2::new(1.0, 1.0)),
        at(1.0, 1.0, 0.0),
        OwnerHandle(1),
    ));
    let collider = BoxCollider2d::new(handle);
    let offset = Vector::new(0.5, -0.5, 3.0);

    collider.set_offset(&mut world, offset).unwrap();

    assert_eq!(collider.offset(&world).unwrap(), offset.xy().push(0.0));
    assert_eq!(collider.center(&world).unwrap(), Point::new(1.5, 0.5, 0.0));

    let sphere = world.insert(Primitive::new(
        Sphere::new(1.0).with_center(Vector::new(0.0, 2.0, 0.0)),
        at(1.0, 0.0, 0.0),
        OwnerHandle(2),
    ));
    let sphere = SphereCollider3d::new(sphere);

    assert_eq!(sphere.offset(&world).unwrap(), Vector::new(0.0, 2.0, 0.0));
    sphere.set_offset(&mut world, Vector::z()).unwrap();
    assert_eq!(sphere.center(&world).unwrap(), Point::new(1.0, 0.0, 1.0));
}

#[test]
fn bounds_queries() {
    let (mut world, handle) = world_with(Primitive::new(
        Box3d::new(Vector::repeat(2.0)),
        at(0.0, 0.0, 0.0),
        OwnerHandle(1),
    ));
    let other = world.insert(Primitive::new(
        Box3d::new(Vector::repeat(2.0)),
        at(1.5, 0.0, 0.0),
        OwnerHandle(2),
    ));
    let collider = BoxCollider3d::new(handle);
    let other = BoxCollider3d::new(other);

    let inner = Aabb::new(Point::new(-0.5, -0.5, -0.5), Point::new(0.5, 0.5, 0.5));
    let straddling = Aabb::new(Point::new(0.5, 0.5, 0.5), Point::new(3.0, 3.0, 3.0));
    let outside = Aabb::new(Point::new(2.0, 2.0, 2.0), Point::new(3.0, 3.0, 3.0));

    assert!(collider.is_inside(&world, &inner).unwrap());
    assert!(!collider.is_inside(&world, &straddling).unwrap());
    assert!(collider.is_overlapping_bounds(&world, &straddling).unwrap());
    assert!(!collider.is_overlapping_bounds(&world, &outside).unwrap());

    assert_eq!(collider.intersection(&world, &outside).unwrap(), None);
    let shared = collider.intersection_with(&world, &other).unwrap().unwrap();
    assert_relative_eq!(shared.mins, Point::new(0.5, -1.0, -1.0));
    assert_relative_eq!(shared.maxs, Point::new(1.0, 1.0, 1.0));

    let closest = collider
        .closest_point(&world, &Point::new(5.0, 0.5, -3.0))
        .unwrap();
    assert_eq!(closest, Point::new(1.0, 0.5, -1.0));

    collider.sync_transforms(&mut world);
    assert_eq!(world.syncs, 1);
}
