//! Queries shared by every 3D collider.

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::error::validate_distance;
use crate::query::multi_ray;
use crate::query::{
    overlap_self, BackendError, HitRecord, LayerMask, OverlapBuffer, PhysicsBackend, QueryError,
    QueryFilter, QueryShape, Ray, RayFan, TriggerPolicy,
};
use crate::shape::{ColliderHandle, OwnerHandle};

use super::POINT_OVERLAP_RADIUS;

/// The offset of the bounds center from the collider position.
pub(crate) fn offset(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
) -> Result<Vector<Real>, BackendError> {
    let center = backend.bounds(collider)?.center();
    Ok(center.coords - backend.pose(collider)?.translation.vector)
}

/// Casts a single ray that never reports `collider` itself.
pub(crate) fn raycast(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    origin: &Point<Real>,
    direction: &Vector<Real>,
    distance: Real,
    layer_mask: LayerMask,
    draw: bool,
) -> Result<Option<HitRecord>, QueryError> {
    let distance = validate_distance(distance)?;
    let Some(ray) = Ray::normalized(*origin, direction) else {
        return Ok(None);
    };

    let filter = QueryFilter::new(layer_mask).excluding(collider);
    let hit = backend.raycast(&ray, distance, &filter)?;

    if draw {
        log::debug!(
            "3D raycast from {} along {} up to {}: {:?}",
            ray.origin,
            ray.dir,
            distance,
            hit.map(|hit| hit.point)
        );
    }

    Ok(hit)
}

/// Fires the three segments of a depth fan spanning the bounds of the collider.
pub(crate) fn raycasts(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
    fan: &RayFan,
) -> Result<Option<HitRecord>, QueryError> {
    let half_size = backend.bounds(collider)?.half_extents();
    multi_ray::closest_hit_depth_fan(fan, &half_size, |origin| {
        raycast(
            backend,
            collider,
            origin,
            &fan.direction,
            fan.distance,
            fan.layer_mask,
            fan.draw,
        )
    })
}

pub(crate) fn overlap(
    backend: &mut dyn PhysicsBackend,
    collider: ColliderHandle,
    (shape, pose): (QueryShape, Isometry<Real>),
    layer_mask: LayerMask,
    triggers: TriggerPolicy,
    limit: usize,
    buffer: &mut OverlapBuffer,
) -> Result<usize, QueryError> {
    overlap_self(
        backend,
        collider,
        &shape,
        &pose,
        &QueryFilter::new(layer_mask).with_triggers(triggers),
        limit,
        buffer,
    )
}

/// The owner of the solid primitive found by a tiny ball at `point`.
///
/// Only the first primitive reported by the backend is considered: if it is
/// a trigger, nothing is reported.
pub(crate) fn overlapping_component(
    backend: &dyn PhysicsBackend,
    point: &Point<Real>,
    layer_mask: LayerMask,
    draw: bool,
) -> Result<Option<OwnerHandle>, QueryError> {
    let ball = QueryShape::Ball {
        radius: POINT_OVERLAP_RADIUS,
    };
    let pose = Isometry::new(point.coords, Vector::zeros());
    let mut first = None;

    backend.overlap_shape(&ball, &pose, &QueryFilter::new(layer_mask), &mut |found| {
        first = Some(found);
        false
    })?;

    let mut owner = None;
    if let Some(found) = first {
        if !backend.is_trigger(found)? {
            owner = Some(backend.owner(found)?);
        }
    }

    if draw {
        log::debug!("3D point overlap at {}: {:?}", point, owner);
    }

    Ok(owner)
}

macro_rules! impl_spatial_collider(
    ($Adapter: ident, $kind: ident) => {
        impl $Adapter {
            #[doc = concat!("Wraps the ", stringify!($kind), " primitive identified by `handle`.")]
            pub fn new(handle: $crate::shape::ColliderHandle) -> Self {
                Self { handle }
            }
        }

        impl $crate::collider::Collider for $Adapter {
            fn handle(&self) -> $crate::shape::ColliderHandle {
                self.handle
            }

            fn dimension(&self) -> $crate::shape::Dimension {
                $crate::shape::Dimension::Three
            }

            fn offset(
                &self,
                backend: &dyn $crate::query::PhysicsBackend,
            ) -> Result<$crate::math::Vector<$crate::math::Real>, $crate::query::BackendError> {
                $crate::collider::spatial::offset(backend, self.handle)
            }

            fn set_size(
                &self,
                backend: &mut dyn $crate::query::PhysicsBackend,
                size: $crate::math::Vector<$crate::math::Real>,
            ) -> Result<(), $crate::query::QueryError> {
                self.resize(backend, size)
            }

            fn overlap_with_triggers(
                &self,
                backend: &mut dyn $crate::query::PhysicsBackend,
                layer_mask: $crate::query::LayerMask,
                triggers: $crate::query::TriggerPolicy,
                limit: usize,
                buffer: &mut $crate::query::OverlapBuffer,
            ) -> Result<usize, $crate::query::QueryError> {
                let volume = self.overlap_volume(&*backend)?;
                $crate::collider::spatial::overlap(
                    backend,
                    self.handle,
                    volume,
                    layer_mask,
                    triggers,
                    limit,
                    buffer,
                )
            }

            fn try_get_overlapping_component(
                &self,
                backend: &dyn $crate::query::PhysicsBackend,
                point: &$crate::math::Point<$crate::math::Real>,
                layer_mask: $crate::query::LayerMask,
                draw: bool,
            ) -> Result<Option<$crate::shape::OwnerHandle>, $crate::query::QueryError> {
                $crate::collider::spatial::overlapping_component(backend, point, layer_mask, draw)
            }

            fn cast(
                &self,
                backend: &dyn $crate::query::PhysicsBackend,
                direction: &$crate::math::Vector<$crate::math::Real>,
                max_distance: $crate::math::Real,
                layer_mask: $crate::query::LayerMask,
                draw: bool,
            ) -> Result<Option<$crate::query::HitRecord>, $crate::query::QueryError> {
                let filter = $crate::query::CastFilter::new(*direction, max_distance)
                    .with_layer_mask(layer_mask)
                    .with_skin($crate::collider::DEFAULT_SKIN)
                    .with_draw(draw);
                self.cast_with_filter(backend, &filter)
            }

            fn raycast(
                &self,
                backend: &dyn $crate::query::PhysicsBackend,
                origin: &$crate::math::Point<$crate::math::Real>,
                direction: &$crate::math::Vector<$crate::math::Real>,
                distance: $crate::math::Real,
                layer_mask: $crate::query::LayerMask,
                draw: bool,
            ) -> Result<Option<$crate::query::HitRecord>, $crate::query::QueryError> {
                $crate::collider::spatial::raycast(
                    backend,
                    self.handle,
                    origin,
                    direction,
                    distance,
                    layer_mask,
                    draw,
                )
            }

            fn raycasts(
                &self,
                backend: &dyn $crate::query::PhysicsBackend,
                fan: &$crate::query::RayFan,
            ) -> Result<Option<$crate::query::HitRecord>, $crate::query::QueryError> {
                $crate::collider::spatial::raycasts(backend, self.handle, fan)
            }
        }
    }
);
