use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::multi_ray;
use crate::query::{
    BackendError, HitRecord, LayerMask, OverlapBuffer, PhysicsBackend, QueryError, RayFan,
    TriggerPolicy,
};
use crate::shape::{ColliderHandle, Dimension, OwnerHandle};

/// The skin of the casts issued by [`Collider::cast`].
pub const DEFAULT_SKIN: Real = 0.0;

/// The radius of the ball probing 3D point overlaps.
pub const POINT_OVERLAP_RADIUS: Real = 0.01;

/// The uniform set of queries every collider adapter supports.
///
/// A collider wraps exactly one live primitive of a [`PhysicsBackend`],
/// identified by [`Collider::handle`]. Its state (flags, geometry, pose) is
/// stored by the backend, so every method takes the backend as argument:
/// a shared reference for queries, a mutable one for setters and for the
/// overlap queries that temporarily exclude the collider itself.
///
/// The trait is object safe and implemented by each adapter as well as by
/// the [`ColliderAdapter`](crate::collider::ColliderAdapter) enum.
pub trait Collider {
    /// The primitive wrapped by this collider.
    fn handle(&self) -> ColliderHandle;

    /// Whether this collider wraps a 2D or a 3D primitive.
    fn dimension(&self) -> Dimension;

    /// Does the primitive take part in queries?
    fn is_enabled(&self, backend: &dyn PhysicsBackend) -> Result<bool, BackendError> {
        backend.is_enabled(self.handle())
    }

    /// Includes or excludes the primitive from every query.
    fn set_enabled(
        &self,
        backend: &mut dyn PhysicsBackend,
        enabled: bool,
    ) -> Result<(), BackendError> {
        backend.set_enabled(self.handle(), enabled)
    }

    /// Is the primitive trigger-only?
    fn is_trigger(&self, backend: &dyn PhysicsBackend) -> Result<bool, BackendError> {
        backend.is_trigger(self.handle())
    }

    /// Makes the primitive trigger-only or solid.
    fn set_trigger(
        &self,
        backend: &mut dyn PhysicsBackend,
        is_trigger: bool,
    ) -> Result<(), BackendError> {
        backend.set_trigger(self.handle(), is_trigger)
    }

    /// The world-space bounds of the primitive.
    fn bounds(&self, backend: &dyn PhysicsBackend) -> Result<Aabb, BackendError> {
        backend.bounds(self.handle())
    }

    /// The center of the bounds.
    fn center(&self, backend: &dyn PhysicsBackend) -> Result<Point<Real>, BackendError> {
        Ok(self.bounds(backend)?.center())
    }

    /// The size of the bounds.
    fn size(&self, backend: &dyn PhysicsBackend) -> Result<Vector<Real>, BackendError> {
        Ok(self.bounds(backend)?.extents())
    }

    /// Half of the size of the bounds.
    fn half_size(&self, backend: &dyn PhysicsBackend) -> Result<Vector<Real>, BackendError> {
        Ok(self.bounds(backend)?.half_extents())
    }

    /// The offset of the geometry from the collider position.
    fn offset(&self, backend: &dyn PhysicsBackend) -> Result<Vector<Real>, BackendError>;

    /// Moves the geometry relative to the collider position.
    fn set_offset(
        &self,
        backend: &mut dyn PhysicsBackend,
        offset: Vector<Real>,
    ) -> Result<(), BackendError> {
        backend
            .primitive_mut(self.handle())?
            .shape
            .set_local_offset(offset);
        Ok(())
    }

    /// Resizes the geometry.
    ///
    /// Boxes take `size` as is. Round primitives take its magnitude as their
    /// radius. Point-defined primitives ignore it.
    fn set_size(
        &self,
        backend: &mut dyn PhysicsBackend,
        size: Vector<Real>,
    ) -> Result<(), QueryError>;

    /// Applies pending pose changes of the backend.
    fn sync_transforms(&self, backend: &mut dyn PhysicsBackend) {
        backend.sync_transforms()
    }

    /// The point of the primitive closest to `position`.
    fn closest_point(
        &self,
        backend: &dyn PhysicsBackend,
        position: &Point<Real>,
    ) -> Result<Point<Real>, BackendError> {
        backend.closest_point(self.handle(), position)
    }

    /// Collects up to `limit` primitives on `layer_mask` overlapping this
    /// collider, itself excluded.
    ///
    /// `buffer` is cleared first and receives the results; their count is
    /// returned.
    ///
    /// Trigger-only primitives follow the global setting of the backend.
    fn overlap(
        &self,
        backend: &mut dyn PhysicsBackend,
        layer_mask: LayerMask,
        limit: usize,
        buffer: &mut OverlapBuffer,
    ) -> Result<usize, QueryError> {
        self.overlap_with_triggers(backend, layer_mask, TriggerPolicy::UseGlobal, limit, buffer)
    }

    /// Same as [`Collider::overlap`], with trigger-only primitives handled
    /// according to `triggers`.
    fn overlap_with_triggers(
        &self,
        backend: &mut dyn PhysicsBackend,
        layer_mask: LayerMask,
        triggers: TriggerPolicy,
        limit: usize,
        buffer: &mut OverlapBuffer,
    ) -> Result<usize, QueryError>;

    /// Does any primitive on `layer_mask` overlap this collider?
    fn is_colliding(
        &self,
        backend: &mut dyn PhysicsBackend,
        layer_mask: LayerMask,
    ) -> Result<bool, QueryError> {
        let mut buffer = OverlapBuffer::new();
        Ok(self.overlap(backend, layer_mask, 1, &mut buffer)? > 0)
    }

    /// The owner of the first primitive on `layer_mask` overlapping this
    /// collider.
    fn try_get_colliding_component(
        &self,
        backend: &mut dyn PhysicsBackend,
        layer_mask: LayerMask,
    ) -> Result<Option<OwnerHandle>, QueryError> {
        let mut buffer = OverlapBuffer::new();
        let _ = self.overlap(backend, layer_mask, 1, &mut buffer)?;
        Ok(buffer.owners().first().copied())
    }

    /// The owners of up to `capacity` primitives on `layer_mask` overlapping
    /// this collider, in backend order.
    ///
    /// The returned slice borrows `buffer` and is only valid until its next
    /// use.
    fn colliding_components<'b>(
        &self,
        backend: &mut dyn PhysicsBackend,
        layer_mask: LayerMask,
        capacity: usize,
        buffer: &'b mut OverlapBuffer,
    ) -> Result<&'b [OwnerHandle], QueryError> {
        let _ = self.overlap(backend, layer_mask, capacity, buffer)?;
        Ok(buffer.owners())
    }

    /// The owner of the solid primitive on `layer_mask` located at `point`.
    ///
    /// Trigger-only primitives are never reported. With `draw`, the query
    /// and its result are logged.
    fn try_get_overlapping_component(
        &self,
        backend: &dyn PhysicsBackend,
        point: &Point<Real>,
        layer_mask: LayerMask,
        draw: bool,
    ) -> Result<Option<OwnerHandle>, QueryError>;

    /// Is a solid primitive on `layer_mask` located at `point`?
    fn is_overlapping_point(
        &self,
        backend: &dyn PhysicsBackend,
        point: &Point<Real>,
        layer_mask: LayerMask,
        draw: bool,
    ) -> Result<bool, QueryError> {
        Ok(self
            .try_get_overlapping_component(backend, point, layer_mask, draw)?
            .is_some())
    }

    /// Sweeps the volume of this collider along `direction` and returns the
    /// first primitive on `layer_mask` hit within `max_distance`.
    fn cast(
        &self,
        backend: &dyn PhysicsBackend,
        direction: &Vector<Real>,
        max_distance: Real,
        layer_mask: LayerMask,
        draw: bool,
    ) -> Result<Option<HitRecord>, QueryError>;

    /// Casts a single ray and returns the first primitive on `layer_mask` hit
    /// within `distance`.
    fn raycast(
        &self,
        backend: &dyn PhysicsBackend,
        origin: &Point<Real>,
        direction: &Vector<Real>,
        distance: Real,
        layer_mask: LayerMask,
        draw: bool,
    ) -> Result<Option<HitRecord>, QueryError>;

    /// Fires the rays of `fan` and returns the closest hit strictly nearer than
    /// `fan.distance`.
    fn raycasts(
        &self,
        backend: &dyn PhysicsBackend,
        fan: &RayFan,
    ) -> Result<Option<HitRecord>, QueryError> {
        multi_ray::closest_hit(fan, |origin| {
            self.raycast(
                backend,
                origin,
                &fan.direction,
                fan.distance,
                fan.layer_mask,
                fan.draw,
            )
        })
    }

    /// Are both corners of `bounds` inside the bounds of this collider?
    fn is_inside(&self, backend: &dyn PhysicsBackend, bounds: &Aabb) -> Result<bool, BackendError> {
        Ok(self.bounds(backend)?.contains(bounds))
    }

    /// Is any corner of `bounds` inside the bounds of this collider?
    fn is_overlapping_bounds(
        &self,
        backend: &dyn PhysicsBackend,
        bounds: &Aabb,
    ) -> Result<bool, BackendError> {
        let own = self.bounds(backend)?;
        let corners = [bounds.mins, bounds.maxs];
        Ok(corners.iter().any(|p| own.contains_local_point(p)))
    }

    /// The region shared by `bounds` and the bounds of this collider.
    fn intersection(
        &self,
        backend: &dyn PhysicsBackend,
        bounds: &Aabb,
    ) -> Result<Option<Aabb>, BackendError> {
        Ok(self.bounds(backend)?.intersection(bounds))
    }

    /// The region shared by the bounds of `other` and of this collider.
    fn intersection_with(
        &self,
        backend: &dyn PhysicsBackend,
        other: &dyn Collider,
    ) -> Result<Option<Aabb>, BackendError> {
        self.intersection(backend, &other.bounds(backend)?)
    }

    /// The largest component of [`Collider::size`].
    fn biggest_size_axis(&self, backend: &dyn PhysicsBackend) -> Result<Real, BackendError> {
        Ok(self.size(backend)?.max())
    }
}
