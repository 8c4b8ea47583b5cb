use collider_adapter::collider::{Collider, SphereCollider3d, TriggerDetector, TriggerEvent};
use collider_adapter::query::{LayerMask, PhysicsBackend};
use collider_adapter::shape::{OwnerHandle, Primitive, Sphere};

use crate::world::{at, World};

#[test]
fn detector_reports_enter_stay_and_exit() {
    let mut world = World::new();
    let origin = at(0.0, 0.0, 0.0);
    let own = world.insert(Primitive::new(Sphere::new(1.0), origin, OwnerHandle(1)));
    let visitor = world.insert(
        Primitive::new(Sphere::new(1.0), at(1.5, 0.0, 0.0), OwnerHandle(2))
            .with_layer(4),
    );
    world.set_enabled(visitor, false).unwrap();

    let collider = SphereCollider3d::new(own);
    let mut detector =
        TriggerDetector::for_collider(&collider, &mut world, LayerMask::layer(4)).unwrap();

    assert!(collider.is_trigger(&world).unwrap());
    assert_eq!(detector.update(&collider, &mut world), Ok(None));
    assert!(!detector.is_colliding());

    world.set_enabled(visitor, true).unwrap();
    assert_eq!(
        detector.update(&collider, &mut world),
        Ok(Some(TriggerEvent::Enter))
    );
    assert_eq!(
        detector.update(&collider, &mut world),
        Ok(Some(TriggerEvent::Stay))
    );
    assert!(detector.is_colliding());

    world.set_enabled(visitor, false).unwrap();
    assert_eq!(
        detector.update(&collider, &mut world),
        Ok(Some(TriggerEvent::Exit))
    );
    assert_eq!(detector.update(&collider, &mut world), Ok(None));
}

#[test]
fn detector_ignores_other_layers() {
    let mut world = World::new();
    let origin = at(0.0, 0.0, 0.0);
    let own = world.insert(Primitive::new(Sphere::new(1.0), origin, OwnerHandle(1)));
    let _ = world.insert(Primitive::new(
        Sphere::new(1.0),
        at(1.5, 0.0, 0.0),
        OwnerHandle(2),
    ));
    let collider = SphereCollider3d::new(own);
    let mut detector = TriggerDetector::new(LayerMask::layer(4));

    assert_eq!(detector.update(&collider, &mut world), Ok(None));
    assert!(!collider.is_trigger(&world).unwrap());
}
