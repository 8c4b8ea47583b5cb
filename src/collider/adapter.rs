use crate::bounding_volume::Aabb;
use crate::collider::{
    BoxCollider2d, BoxCollider3d, CapsuleCollider2d, CapsuleCollider3d, CircleCollider2d,
    Collider, CompositeCollider2d, EdgeCollider2d, SphereCollider3d,
};
use crate::math::{Point, Real, Vector};
use crate::query::{
    BackendError, HitRecord, LayerMask, OverlapBuffer, PhysicsBackend, QueryError, RayFan,
    TriggerPolicy,
};
use crate::shape::{ColliderHandle, Dimension, OwnerHandle, PrimitiveKind};

/// A collider adapter of any supported primitive kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColliderAdapter {
    /// Adapter of a 2D box.
    Box2d(BoxCollider2d),
    /// Adapter of a 2D circle.
    Circle2d(CircleCollider2d),
    /// Adapter of a 2D capsule.
    Capsule2d(CapsuleCollider2d),
    /// Adapter of a 2D composite.
    Composite2d(CompositeCollider2d),
    /// Adapter of a 2D edge chain.
    Edge2d(EdgeCollider2d),
    /// Adapter of a 3D box.
    Box3d(BoxCollider3d),
    /// Adapter of a 3D sphere.
    Sphere3d(SphereCollider3d),
    /// Adapter of a 3D capsule.
    Capsule3d(CapsuleCollider3d),
}

impl ColliderAdapter {
    /// The primitive kind this adapter wraps.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            ColliderAdapter::Box2d(_) => PrimitiveKind::Box2d,
            ColliderAdapter::Circle2d(_) => PrimitiveKind::Circle2d,
            ColliderAdapter::Capsule2d(_) => PrimitiveKind::Capsule2d,
            ColliderAdapter::Composite2d(_) => PrimitiveKind::Composite2d,
            ColliderAdapter::Edge2d(_) => PrimitiveKind::Edge2d,
            ColliderAdapter::Box3d(_) => PrimitiveKind::Box3d,
            ColliderAdapter::Sphere3d(_) => PrimitiveKind::Sphere3d,
            ColliderAdapter::Capsule3d(_) => PrimitiveKind::Capsule3d,
        }
    }

    /// The wrapped adapter as a trait object.
    pub fn as_collider(&self) -> &dyn Collider {
        match self {
            ColliderAdapter::Box2d(c) => c,
            ColliderAdapter::Circle2d(c) => c,
            ColliderAdapter::Capsule2d(c) => c,
            ColliderAdapter::Composite2d(c) => c,
            ColliderAdapter::Edge2d(c) => c,
            ColliderAdapter::Box3d(c) => c,
            ColliderAdapter::Sphere3d(c) => c,
            ColliderAdapter::Capsule3d(c) => c,
        }
    }

    /// The radius of round adapters, `None` for the others.
    pub fn radius(&self, backend: &dyn PhysicsBackend) -> Result<Option<Real>, QueryError> {
        match self {
            ColliderAdapter::Circle2d(c) => c.radius(backend).map(Some),
            ColliderAdapter::Capsule2d(c) => c.radius(backend).map(Some),
            ColliderAdapter::Sphere3d(c) => c.radius(backend).map(Some),
            ColliderAdapter::Capsule3d(c) => c.radius(backend).map(Some),
            _ => Ok(None),
        }
    }
}

macro_rules! impl_from_adapter(
    ($($Adapter: ident => $Variant: ident),*) => {$(
        impl From<$Adapter> for ColliderAdapter {
            #[inline]
            fn from(adapter: $Adapter) -> Self {
                ColliderAdapter::$Variant(adapter)
            }
        }
    )*}
);

impl_from_adapter!(
    BoxCollider2d => Box2d,
    CircleCollider2d => Circle2d,
    CapsuleCollider2d => Capsule2d,
    CompositeCollider2d => Composite2d,
    EdgeCollider2d => Edge2d,
    BoxCollider3d => Box3d,
    SphereCollider3d => Sphere3d,
    CapsuleCollider3d => Capsule3d
);

impl Collider for ColliderAdapter {
    fn handle(&self) -> ColliderHandle {
        self.as_collider().handle()
    }

    fn dimension(&self) -> Dimension {
        self.as_collider().dimension()
    }

    fn bounds(&self, backend: &dyn PhysicsBackend) -> Result<Aabb, BackendError> {
        self.as_collider().bounds(backend)
    }

    fn offset(&self, backend: &dyn PhysicsBackend) -> Result<Vector<Real>, BackendError> {
        self.as_collider().offset(backend)
    }

    fn set_size(
        &self,
        backend: &mut dyn PhysicsBackend,
        size: Vector<Real>,
    ) -> Result<(), QueryError> {
        self.as_collider().set_size(backend, size)
    }

    fn overlap_with_triggers(
        &self,
        backend: &mut dyn PhysicsBackend,
        layer_mask: LayerMask,
        triggers: TriggerPolicy,
        limit: usize,
        buffer: &mut OverlapBuffer,
    ) -> Result<usize, QueryError> {
        self.as_collider()
            .overlap_with_triggers(backend, layer_mask, triggers, limit, buffer)
    }

    fn try_get_overlapping_component(
        &self,
        backend: &dyn PhysicsBackend,
        point: &Point<Real>,
        layer_mask: LayerMask,
        draw: bool,
    ) -> Result<Option<OwnerHandle>, QueryError> {
        self.as_collider()
            .try_get_overlapping_component(backend, point, layer_mask, draw)
    }

    fn cast(
        &self,
        backend: &dyn PhysicsBackend,
        direction: &Vector<Real>,
        max_distance: Real,
        layer_mask: LayerMask,
        draw: bool,
    ) -> Result<Option<HitRecord>, QueryError> {
        self.as_collider()
            .cast(backend, direction, max_distance, layer_mask, draw)
    }

    fn raycast(
        &self,
        backend: &dyn PhysicsBackend,
        origin: &Point<Real>,
        direction: &Vector<Real>,
        distance: Real,
        layer_mask: LayerMask,
        draw: bool,
    ) -> Result<Option<HitRecord>, QueryError> {
        self.as_collider()
            .raycast(backend, origin, direction, distance, layer_mask, draw)
    }

    fn raycasts(
        &self,
        backend: &dyn PhysicsBackend,
        fan: &RayFan,
    ) -> Result<Option<HitRecord>, QueryError> {
        self.as_collider().raycasts(backend, fan)
    }
}
