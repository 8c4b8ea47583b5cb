//! Queries shared by every 2D collider.
//!
//! 2D colliders live in the XY plane: their rays and casts ignore the `z`
//! component of directions, and every query is restricted to the
//! [`DepthRange`] of the collider.

use crate::math::{Point, Real, Vector};
use crate::query::error::validate_distance;
use crate::query::{
    overlap_self, BackendError, DepthRange, HitRecord, LayerMask, OverlapBuffer, PhysicsBackend,
    QueryError, QueryFilter, QueryShape, Ray, TriggerPolicy,
};
use crate::shape::{lift_vector, ColliderHandle, OwnerHandle};

pub(crate) fn offset(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
) -> Result<Vector<Real>, BackendError> {
    Ok(backend.primitive(collider)?.shape.local_offset())
}

/// The rotation of the collider about `z`, in degrees within `[0, 360)`.
pub(crate) fn forward_angle(
    backend: &dyn PhysicsBackend,
    collider: ColliderHandle,
) -> Result<Real, BackendError> {
    let (_, _, yaw) = backend.pose(collider)?.rotation.euler_angles();
    Ok(yaw.to_degrees().rem_euclid(360.0))
}

pub(crate) fn raycast(
    backend: &dyn PhysicsBackend,
    origin: &Point<Real>,
    direction: &Vector<Real>,
    distance: Real,
    filter: &QueryFilter,
    draw: bool,
) -> Result<Option<HitRecord>, QueryError> {
    let distance = validate_distance(distance)?;
    let direction = lift_vector(&direction.xy());
    let Some(ray) = Ray::normalized(*origin, &direction) else {
        return Ok(None);
    };

    let hit = backend.raycast(&ray, distance, filter)?;

    if draw {
        log::debug!(
            "2D raycast from {} along {} up to {}: {:?}",
            ray.origin,
            ray.dir,
            distance,
            hit.map(|hit| hit.point)
        );
    }

    Ok(hit)
}

/// Overlaps the own geometry of the collider, itself excluded.
pub(crate) fn overlap(
    backend: &mut dyn PhysicsBackend,
    collider: ColliderHandle,
    depth: DepthRange,
    layer_mask: LayerMask,
    triggers: TriggerPolicy,
    limit: usize,
    buffer: &mut OverlapBuffer,
) -> Result<usize, QueryError> {
    let pose = backend.pose(collider)?;
    overlap_self(
        backend,
        collider,
        &QueryShape::Primitive(collider),
        &pose,
        &QueryFilter::planar(layer_mask, depth).with_triggers(triggers),
        limit,
        buffer,
    )
}

/// The owner of the solid primitive containing `point`.
///
/// 2D backends only detect points inside composites using
/// [`CompositeGeometry::Polygons`](crate::shape::CompositeGeometry::Polygons);
/// callers must make sure the queried geometry is set up that way.
pub(crate) fn overlapping_component(
    backend: &dyn PhysicsBackend,
    point: &Point<Real>,
    filter: &QueryFilter,
    draw: bool,
) -> Result<Option<OwnerHandle>, QueryError> {
    let mut owner = None;
    if let Some(found) = backend.overlap_point(point, filter)? {
        if !backend.is_trigger(found)? {
            owner = Some(backend.owner(found)?);
        }
    }

    if draw {
        log::debug!("2D point overlap at {}: {:?}", point, owner);
    }

    Ok(owner)
}

macro_rules! impl_planar_collider(
    ($Adapter: ident, $kind: ident) => {
        impl $Adapter {
            #[doc = concat!("Wraps the ", stringify!($kind), " primitive identified by `handle`.")]
            pub fn new(handle: $crate::shape::ColliderHandle) -> Self {
                Self {
                    handle,
                    depth: $crate::query::DepthRange::UNBOUNDED,
                }
            }

            /// Restricts every query of this collider to the given depth band.
            pub fn with_depth_range(mut self, depth: $crate::query::DepthRange) -> Self {
                self.depth = depth;
                self
            }

            /// The depth band every query of this collider is restricted to.
            pub fn depth_range(&self) -> $crate::query::DepthRange {
                self.depth
            }

            /// Restricts every query of this collider to the given depth band.
            pub fn set_depth_range(&mut self, depth: $crate::query::DepthRange) {
                self.depth = depth;
            }

            /// The rotation of this collider about `z`, in degrees within `[0, 360)`.
            pub fn forward_angle(
                &self,
                backend: &dyn $crate::query::PhysicsBackend,
            ) -> Result<$crate::math::Real, $crate::query::BackendError> {
                $crate::collider::planar::forward_angle(backend, self.handle)
            }

            fn query_filter(
                &self,
                layer_mask: $crate::query::LayerMask,
            ) -> $crate::query::QueryFilter {
                $crate::query::QueryFilter::planar(layer_mask, self.depth)
            }
        }

        impl $crate::collider::Collider for $Adapter {
            fn handle(&self) -> $crate::shape::ColliderHandle {
                self.handle
            }

            fn dimension(&self) -> $crate::shape::Dimension {
                $crate::shape::Dimension::Two
            }

            fn offset(
                &self,
                backend: &dyn $crate::query::PhysicsBackend,
            ) -> Result<$crate::math::Vector<$crate::math::Real>, $crate::query::BackendError> {
                $crate::collider::planar::offset(backend, self.handle)
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
                $crate::collider::planar::overlap(
                    backend,
                    self.handle,
                    self.depth,
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
                $crate::collider::planar::overlapping_component(
                    backend,
                    point,
                    &self.query_filter(layer_mask),
                    draw,
                )
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
                    .with_angle(self.forward_angle(backend)?)
                    .with_depth(self.depth)
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
                $crate::collider::planar::raycast(
                    backend,
                    origin,
                    direction,
                    distance,
                    &self.query_filter(layer_mask).excluding(self.handle),
                    draw,
                )
            }
        }
    }
);
