//! The physics backend answering every collider query.
//!
//! # Overview
//!
//! Colliders never detect collisions themselves. Each query is translated into
//! one of the few primitive requests of [`PhysicsBackend`], implemented by the
//! host engine (or by a deterministic test double):
//!
//! - [`PhysicsBackend::raycast`] for single rays,
//! - [`PhysicsBackend::shape_cast`] for swept shapes,
//! - [`PhysicsBackend::overlap_shape`] and [`PhysicsBackend::overlap_point`]
//!   for static overlaps.
//!
//! The backend also owns the state of every live primitive, reachable through
//! its [`ColliderHandle`]: geometry, pose, enabled and trigger flags, layer and
//! owner.
//!
//! # Contract
//!
//! - Disabled primitives are never reported by any query.
//! - The primitive named by [`QueryFilter::exclude`] is never reported. Rays
//!   and casts issued from a collider exclude it, so a query starting inside
//!   its own collider does not hit it at distance zero.
//! - Ray and cast directions are normalized by the caller, so every distance
//!   is a world-space distance.
//! - [`QueryFilter::depth`] is only set for 2D queries and must be checked
//!   against the `z` coordinate of each candidate's pose.

use arrayvec::ArrayVec;

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{BackendError, HitRecord, QueryFilter, Ray};
use crate::shape::{ColliderHandle, OwnerHandle, Primitive, PrimitiveKind};

/// The number of primitives an [`OverlapBuffer`] can hold.
pub const OVERLAP_BUFFER_CAPACITY: usize = 10;

/// The shape swept by a cast or tested by an overlap query.
///
/// Every variant is expressed in the local frame of the pose passed along with
/// it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum QueryShape {
    /// A box with the given half-extents.
    Cuboid {
        /// Half of the size of the box along each local axis.
        half_extents: Vector<Real>,
    },
    /// A ball with the given radius.
    Ball {
        /// The radius of the ball.
        radius: Real,
    },
    /// A capsule around the segment `[a, b]`.
    Capsule {
        /// The first end-point of the core segment.
        a: Point<Real>,
        /// The second end-point of the core segment.
        b: Point<Real>,
        /// The radius of the capsule.
        radius: Real,
    },
    /// The own geometry of a live primitive.
    ///
    /// Used for point-defined primitives (composites and edge chains) whose
    /// shape cannot be summarized by a box or a radius.
    Primitive(ColliderHandle),
}

/// Trait implemented by the physics engine answering collider queries.
///
/// The trait is object safe: colliders only ever see a `&dyn PhysicsBackend`
/// or a `&mut dyn PhysicsBackend`.
pub trait PhysicsBackend {
    /// The record of the primitive identified by `collider`.
    fn primitive(&self, collider: ColliderHandle) -> Result<&Primitive, BackendError>;

    /// The mutable record of the primitive identified by `collider`.
    fn primitive_mut(&mut self, collider: ColliderHandle) -> Result<&mut Primitive, BackendError>;

    /// The kind of the primitive identified by `collider`.
    fn kind(&self, collider: ColliderHandle) -> Result<PrimitiveKind, BackendError> {
        Ok(self.primitive(collider)?.kind())
    }

    /// The world-space bounds of the primitive identified by `collider`.
    fn bounds(&self, collider: ColliderHandle) -> Result<Aabb, BackendError> {
        let primitive = self.primitive(collider)?;
        Ok(primitive.shape.aabb(&primitive.pose))
    }

    /// Does the primitive take part in queries?
    fn is_enabled(&self, collider: ColliderHandle) -> Result<bool, BackendError> {
        Ok(self.primitive(collider)?.enabled)
    }

    /// Includes or excludes the primitive from every query.
    fn set_enabled(
        &mut self,
        collider: ColliderHandle,
        enabled: bool,
    ) -> Result<(), BackendError> {
        self.primitive_mut(collider)?.enabled = enabled;
        Ok(())
    }

    /// Is the primitive trigger-only?
    fn is_trigger(&self, collider: ColliderHandle) -> Result<bool, BackendError> {
        Ok(self.primitive(collider)?.is_trigger)
    }

    /// Makes the primitive trigger-only or solid.
    fn set_trigger(
        &mut self,
        collider: ColliderHandle,
        is_trigger: bool,
    ) -> Result<(), BackendError> {
        self.primitive_mut(collider)?.is_trigger = is_trigger;
        Ok(())
    }

    /// The object owning the primitive.
    fn owner(&self, collider: ColliderHandle) -> Result<OwnerHandle, BackendError> {
        Ok(self.primitive(collider)?.owner)
    }

    /// The world transform of the primitive.
    fn pose(&self, collider: ColliderHandle) -> Result<Isometry<Real>, BackendError> {
        Ok(self.primitive(collider)?.pose)
    }

    /// The point of the primitive closest to `point`.
    ///
    /// Points inside the primitive are returned unchanged.
    fn closest_point(
        &self,
        collider: ColliderHandle,
        point: &Point<Real>,
    ) -> Result<Point<Real>, BackendError>;

    /// Applies pending pose changes before the next query.
    fn sync_transforms(&mut self) {}

    /// Casts a ray and returns the closest hit within `max_distance`.
    fn raycast(
        &self,
        ray: &Ray,
        max_distance: Real,
        filter: &QueryFilter,
    ) -> Result<Option<HitRecord>, BackendError>;

    /// Sweeps `shape`, placed at `pose`, along `direction` and returns the first
    /// contact within `max_distance`.
    fn shape_cast(
        &self,
        shape: &QueryShape,
        pose: &Isometry<Real>,
        direction: &Vector<Real>,
        max_distance: Real,
        filter: &QueryFilter,
    ) -> Result<Option<HitRecord>, BackendError>;

    /// Reports every primitive overlapping `shape` placed at `pose`.
    ///
    /// `callback` is called once per overlapping primitive; the backend stops
    /// as soon as it returns `false`.
    fn overlap_shape(
        &self,
        shape: &QueryShape,
        pose: &Isometry<Real>,
        filter: &QueryFilter,
        callback: &mut dyn FnMut(ColliderHandle) -> bool,
    ) -> Result<(), BackendError>;

    /// The primitive containing `point`, if any.
    ///
    /// 2D backends typically only detect composites with polygon geometry.
    fn overlap_point(
        &self,
        _point: &Point<Real>,
        _filter: &QueryFilter,
    ) -> Result<Option<ColliderHandle>, BackendError> {
        Err(BackendError::Unsupported)
    }
}

/// Caller-owned storage for the results of overlap queries.
///
/// The buffer is cleared at the start of every overlap query it is passed to,
/// and results are borrowed from it, so they cannot outlive the next query.
#[derive(Clone, Debug, Default)]
pub struct OverlapBuffer {
    colliders: ArrayVec<ColliderHandle, OVERLAP_BUFFER_CAPACITY>,
    owners: ArrayVec<OwnerHandle, OVERLAP_BUFFER_CAPACITY>,
}

impl OverlapBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximum number of results this buffer holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        OVERLAP_BUFFER_CAPACITY
    }

    /// The number of results of the last query.
    #[inline]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Did the last query find nothing?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// The primitives found by the last query, in backend order.
    #[inline]
    pub fn colliders(&self) -> &[ColliderHandle] {
        &self.colliders
    }

    /// The owners of the primitives found by the last query.
    #[inline]
    pub fn owners(&self) -> &[OwnerHandle] {
        &self.owners
    }

    /// Removes every result.
    pub fn clear(&mut self) {
        self.colliders.clear();
        self.owners.clear();
    }

    /// Records a primitive; returns `false` once `limit` results are stored.
    pub(crate) fn push_collider(&mut self, collider: ColliderHandle, limit: usize) -> bool {
        let limit = limit.min(OVERLAP_BUFFER_CAPACITY);
        if self.colliders.len() < limit {
            self.colliders.push(collider);
        }
        self.colliders.len() < limit
    }

    /// Resolves the owner of every recorded primitive.
    pub(crate) fn resolve_owners(
        &mut self,
        backend: &dyn PhysicsBackend,
    ) -> Result<(), BackendError> {
        self.owners.clear();
        for collider in &self.colliders {
            self.owners.push(backend.owner(*collider)?);
        }
        Ok(())
    }
}
