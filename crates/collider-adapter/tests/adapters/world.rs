//! A deterministic in-memory backend.
//!
//! Rays are tested against the bounds of every primitive, except spheres which
//! get an exact ball test. 2D primitives extend infinitely along `z`. Shape
//! casts only return the scripted `cast_response`, and overlaps compare bounds.

use std::cell::RefCell;

use collider_adapter::bounding_volume::details::{ball_aabb, capsule_aabb, cuboid_aabb};
use collider_adapter::bounding_volume::Aabb;
use collider_adapter::math::{Isometry, Point, Real, Vector};
use collider_adapter::query::{
    BackendError, HitRecord, PhysicsBackend, QueryFilter, QueryShape, Ray, TriggerPolicy,
};
use collider_adapter::shape::{ColliderHandle, Dimension, OwnerHandle, Primitive, PrimitiveShape};
use slab::Slab;

#[derive(Clone, Debug, PartialEq)]
pub struct CastRequest {
    pub shape: QueryShape,
    pub pose: Isometry<Real>,
    pub direction: Vector<Real>,
    pub max_distance: Real,
    pub filter: QueryFilter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlapRequest {
    pub shape: QueryShape,
    pub pose: Isometry<Real>,
    pub filter: QueryFilter,
    /// The primitives that were disabled while the request ran.
    pub disabled: Vec<ColliderHandle>,
}

#[derive(Default)]
pub struct World {
    primitives: Slab<Primitive>,
    /// Whether triggers are reported by filters using `TriggerPolicy::UseGlobal`.
    pub queries_hit_triggers: bool,
    /// Makes every query fail with `BackendError::Other`.
    pub failing: bool,
    /// Makes owner lookups fail with `BackendError::Other`.
    pub failing_owners: bool,
    /// The hit returned by every shape cast.
    pub cast_response: Option<HitRecord>,
    pub syncs: usize,
    casts: RefCell<Vec<CastRequest>>,
    overlaps: RefCell<Vec<OverlapRequest>>,
}

impl World {
    pub fn new() -> Self {
        Self {
            queries_hit_triggers: true,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, primitive: Primitive) -> ColliderHandle {
        ColliderHandle(self.primitives.insert(primitive) as u32)
    }

    pub fn casts(&self) -> Vec<CastRequest> {
        self.casts.borrow().clone()
    }

    pub fn last_cast(&self) -> CastRequest {
        self.casts
            .borrow()
            .last()
            .cloned()
            .expect("no cast was issued")
    }

    pub fn overlaps(&self) -> Vec<OverlapRequest> {
        self.overlaps.borrow().clone()
    }

    fn check_failure(&self) -> Result<(), BackendError> {
        if self.failing {
            Err(BackendError::Other("injected failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn candidates<'a>(
        &'a self,
        filter: &'a QueryFilter,
    ) -> impl Iterator<Item = (ColliderHandle, &'a Primitive)> + 'a {
        self.primitives
            .iter()
            .map(|(i, primitive)| (ColliderHandle(i as u32), primitive))
            .filter(move |candidate| self.accepts(candidate, filter))
    }

    fn accepts(
        &self,
        (handle, primitive): &(ColliderHandle, &Primitive),
        filter: &QueryFilter,
    ) -> bool {
        let triggers_ok = match filter.triggers {
            TriggerPolicy::UseGlobal => self.queries_hit_triggers || !primitive.is_trigger,
            TriggerPolicy::Ignore => !primitive.is_trigger,
            TriggerPolicy::Collide => true,
        };

        let depth = primitive.pose.translation.vector.z;
        primitive.enabled && triggers_ok && filter.accepts(*handle, primitive.layer, depth)
    }

    /// The bounds used by queries: 2D primitives are unbounded along `z`.
    fn query_bounds(primitive: &Primitive) -> Aabb {
        let mut aabb = primitive.shape.aabb(&primitive.pose);
        if primitive.kind().dimension() == Dimension::Two {
            aabb.mins.z = -Real::INFINITY;
            aabb.maxs.z = Real::INFINITY;
        }
        aabb
    }

    fn shape_bounds(
        &self,
        shape: &QueryShape,
        pose: &Isometry<Real>,
    ) -> Result<Aabb, BackendError> {
        Ok(match shape {
            QueryShape::Cuboid { half_extents } => {
                cuboid_aabb(pose, &Vector::zeros(), half_extents)
            }
            QueryShape::Ball { radius } => ball_aabb(&(pose * Point::origin()), *radius, false),
            QueryShape::Capsule { a, b, radius } => {
                capsule_aabb(&(pose * a), &(pose * b), *radius, false)
            }
            QueryShape::Primitive(handle) => Self::query_bounds(self.primitive(*handle)?),
        })
    }
}

/// Slab test, returning the entry distance and the normal of the entry face.
fn ray_aabb(aabb: &Aabb, ray: &Ray, max_distance: Real) -> Option<(Real, Vector<Real>)> {
    let mut tmin: Real = 0.0;
    let mut tmax = max_distance;
    let mut normal = Vector::zeros();

    for i in 0..3 {
        if ray.dir[i] == 0.0 {
            if ray.origin[i] < aabb.mins[i] || ray.origin[i] > aabb.maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / ray.dir[i];
            let mut t1 = (aabb.mins[i] - ray.origin[i]) * denom;
            let mut t2 = (aabb.maxs[i] - ray.origin[i]) * denom;
            let mut sign = -1.0;

            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
                sign = 1.0;
            }

            if t1 > tmin {
                tmin = t1;
                normal = Vector::ith(i, sign);
            }

            tmax = tmax.min(t2);

            if tmin > tmax {
                return None;
            }
        }
    }

    Some((tmin, normal))
}

fn ray_ball(
    center: &Point<Real>,
    radius: Real,
    ray: &Ray,
    max_distance: Real,
) -> Option<(Real, Vector<Real>)> {
    let dcenter = ray.origin - center;
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    if c > 0.0 && b > 0.0 {
        return None;
    }

    let delta = b * b - c;
    if delta < 0.0 {
        return None;
    }

    let t = (-b - delta.sqrt()).max(0.0);
    if t > max_distance {
        return None;
    }

    let normal = (ray.point_at(t) - center)
        .try_normalize(1.0e-6)
        .unwrap_or_else(Vector::zeros);
    Some((t, normal))
}

impl PhysicsBackend for World {
    fn primitive(&self, collider: ColliderHandle) -> Result<&Primitive, BackendError> {
        self.primitives
            .get(collider.into_raw() as usize)
            .ok_or(BackendError::UnknownCollider(collider))
    }

    fn primitive_mut(&mut self, collider: ColliderHandle) -> Result<&mut Primitive, BackendError> {
        self.primitives
            .get_mut(collider.into_raw() as usize)
            .ok_or(BackendError::UnknownCollider(collider))
    }

    fn closest_point(
        &self,
        collider: ColliderHandle,
        point: &Point<Real>,
    ) -> Result<Point<Real>, BackendError> {
        let aabb = self.bounds(collider)?;
        Ok(Point::from(
            point.coords.sup(&aabb.mins.coords).inf(&aabb.maxs.coords),
        ))
    }

    fn owner(&self, collider: ColliderHandle) -> Result<OwnerHandle, BackendError> {
        if self.failing_owners {
            return Err(BackendError::Other("owner lookup failed".to_string()));
        }

        Ok(self.primitive(collider)?.owner)
    }

    fn sync_transforms(&mut self) {
        self.syncs += 1;
    }

    fn raycast(
        &self,
        ray: &Ray,
        max_distance: Real,
        filter: &QueryFilter,
    ) -> Result<Option<HitRecord>, BackendError> {
        self.check_failure()?;

        let mut best: Option<HitRecord> = None;

        for (handle, primitive) in self.candidates(filter) {
            let hit = match &primitive.shape {
                PrimitiveShape::Sphere(sphere) => ray_ball(
                    &(primitive.pose * Point::from(sphere.center)),
                    sphere.radius,
                    ray,
                    max_distance,
                ),
                _ => ray_aabb(&Self::query_bounds(primitive), ray, max_distance),
            };

            if let Some((distance, normal)) = hit {
                if best.map(|best| distance < best.distance).unwrap_or(true) {
                    best = Some(HitRecord::new(
                        ray.point_at(distance),
                        normal,
                        distance,
                        handle,
                        primitive.owner,
                    ));
                }
            }
        }

        Ok(best)
    }

    fn shape_cast(
        &self,
        shape: &QueryShape,
        pose: &Isometry<Real>,
        direction: &Vector<Real>,
        max_distance: Real,
        filter: &QueryFilter,
    ) -> Result<Option<HitRecord>, BackendError> {
        self.casts.borrow_mut().push(CastRequest {
            shape: *shape,
            pose: *pose,
            direction: *direction,
            max_distance,
            filter: *filter,
        });
        self.check_failure()?;

        Ok(self.cast_response)
    }

    fn overlap_shape(
        &self,
        shape: &QueryShape,
        pose: &Isometry<Real>,
        filter: &QueryFilter,
        callback: &mut dyn FnMut(ColliderHandle) -> bool,
    ) -> Result<(), BackendError> {
        self.overlaps.borrow_mut().push(OverlapRequest {
            shape: *shape,
            pose: *pose,
            filter: *filter,
            disabled: self
                .primitives
                .iter()
                .filter(|(_, primitive)| !primitive.enabled)
                .map(|(i, _)| ColliderHandle(i as u32))
                .collect(),
        });
        self.check_failure()?;

        let bounds = self.shape_bounds(shape, pose)?;

        for (handle, primitive) in self.candidates(filter) {
            if Self::query_bounds(primitive).intersects(&bounds) && !callback(handle) {
                break;
            }
        }

        Ok(())
    }

    fn overlap_point(
        &self,
        point: &Point<Real>,
        filter: &QueryFilter,
    ) -> Result<Option<ColliderHandle>, BackendError> {
        self.check_failure()?;

        Ok(self
            .candidates(filter)
            .find(|(_, primitive)| {
                Self::query_bounds(primitive).contains_local_point(point)
            })
            .map(|(handle, _)| handle))
    }
}

/// A pose translated to `(x, y, z)`, without rotation.
pub fn at(x: Real, y: Real, z: Real) -> Isometry<Real> {
    Isometry::translation(x, y, z)
}
