//! Closest-hit resolution over a fan of parallel rays.
//!
//! A single ray misses everything narrower than the gap between two rays.
//! The resolvers of this module approximate a "thick" ray by firing several
//! parallel rays evenly spaced along a segment, and keep the closest hit:
//!
//! - [`closest_hit`] samples the segment `[point1, point2]` of a [`RayFan`].
//! - [`closest_hit_depth_fan`] additionally samples the two copies of that
//!   segment shifted backward and forward across the depth of a collider, so a
//!   whole plane of rays is covered.
//!
//! Hits are compared with a strict `<`, starting from the maximum distance of
//! the fan: a hit exactly at that distance is never reported, and among hits
//! at the same distance the first one found wins.

use crate::math::{Point, Real, Vector};
use crate::query::error::validate_distance;
use crate::query::{HitRecord, LayerMask, QueryError};

/// The maximum number of rays fired along one segment.
pub const MAX_RAYS_COUNT: usize = 64;
/// The number of rays fired along one segment when unspecified.
pub const DEFAULT_RAYS_COUNT: usize = 2;
/// How far the shifted segments of a depth fan stay inside the collider.
pub const DEPTH_FAN_SKIN: Real = 1.0e-4;

/// The description of a fan of parallel rays.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayFan {
    /// The first end-point of the sampled segment.
    pub point1: Point<Real>,
    /// The second end-point of the sampled segment.
    pub point2: Point<Real>,
    /// The direction shared by every ray. It does not need to be normalized.
    pub direction: Vector<Real>,
    /// The maximum distance of every ray.
    pub distance: Real,
    /// Only primitives on these layers are detected.
    pub layer_mask: LayerMask,
    /// The number of rays fired along each segment, clamped to
    /// `[1, MAX_RAYS_COUNT]`.
    pub rays_count: usize,
    /// The largest angle, in degrees, between a hit normal and `-direction`
    /// for the hit to be accepted. Only used by depth fans.
    pub angle_limit: Option<Real>,
    /// Logs every ray and the closest hit.
    pub draw: bool,
}

impl RayFan {
    /// A fan of [`DEFAULT_RAYS_COUNT`] rays detecting every layer.
    pub fn new(
        point1: Point<Real>,
        point2: Point<Real>,
        direction: Vector<Real>,
        distance: Real,
    ) -> Self {
        Self {
            point1,
            point2,
            direction,
            distance,
            layer_mask: LayerMask::ALL,
            rays_count: DEFAULT_RAYS_COUNT,
            angle_limit: None,
            draw: false,
        }
    }

    /// Sets the detected layers.
    pub fn with_layer_mask(mut self, layer_mask: LayerMask) -> Self {
        self.layer_mask = layer_mask;
        self
    }

    /// Sets the number of rays fired along each segment.
    pub fn with_rays_count(mut self, rays_count: usize) -> Self {
        self.rays_count = rays_count;
        self
    }

    /// Rejects hits whose normal deviates from `-direction` by more than
    /// `degrees`.
    pub fn with_angle_limit(mut self, degrees: Real) -> Self {
        self.angle_limit = Some(degrees);
        self
    }

    /// Enables logging of the fan.
    pub fn with_draw(mut self, draw: bool) -> Self {
        self.draw = draw;
        self
    }

    /// The number of rays actually fired along each segment.
    pub fn clamped_rays_count(&self) -> usize {
        let clamped = self.rays_count.clamp(1, MAX_RAYS_COUNT);
        if clamped != self.rays_count {
            log::trace!(
                "ray fan count {} clamped to {}",
                self.rays_count,
                clamped
            );
        }
        clamped
    }
}

/// Iterates through `rays_count` origins evenly spaced on `[point1, point2]`.
///
/// The first origin is `point1`; the last one is `point2` unless
/// `rays_count == 1`.
pub fn fan_origins(
    point1: Point<Real>,
    point2: Point<Real>,
    rays_count: usize,
) -> impl Iterator<Item = Point<Real>> {
    let fraction = 1.0 / rays_count.saturating_sub(1).max(1) as Real;
    (0..rays_count).map(move |i| point1.lerp(&point2, i as Real * fraction))
}

/// Accumulates the closest accepted hit among candidates.
#[derive(Copy, Clone, Debug)]
pub struct ClosestHit {
    closest_distance: Real,
    best: Option<HitRecord>,
    inverse_direction: Vector<Real>,
    angle_limit: Option<Real>,
}

impl ClosestHit {
    /// Starts an accumulator bounded by `distance`.
    ///
    /// With an `angle_limit` (in degrees), hits whose normal deviates from
    /// `-direction` by more than the limit are rejected.
    pub fn new(distance: Real, direction: &Vector<Real>, angle_limit: Option<Real>) -> Self {
        Self {
            closest_distance: distance,
            best: None,
            inverse_direction: -direction,
            angle_limit,
        }
    }

    /// Is the angle between `normal` and the inverse cast direction allowed?
    pub fn is_allowed_angle(&self, normal: &Vector<Real>) -> bool {
        match self.angle_limit {
            Some(limit) => normal.angle(&self.inverse_direction).to_degrees() <= limit,
            None => true,
        }
    }

    /// Offers a candidate; returns `true` if it became the closest hit.
    pub fn offer(&mut self, hit: HitRecord) -> bool {
        let is_closest = hit.has_collider()
            && hit.distance < self.closest_distance
            && self.is_allowed_angle(&hit.normal);

        if is_closest {
            self.closest_distance = hit.distance;
            self.best = Some(hit);
        }

        is_closest
    }

    /// The closest hit so far.
    pub fn best(&self) -> Option<&HitRecord> {
        self.best.as_ref()
    }

    /// The closest accepted hit, if any.
    pub fn into_hit(self) -> Option<HitRecord> {
        self.best
    }
}

fn resolve<F>(
    fan: &RayFan,
    segments: &[(Point<Real>, Point<Real>)],
    angle_limit: Option<Real>,
    mut raycast: F,
) -> Result<Option<HitRecord>, QueryError>
where
    F: FnMut(&Point<Real>) -> Result<Option<HitRecord>, QueryError>,
{
    let distance = validate_distance(fan.distance)?;
    let rays_count = fan.clamped_rays_count();
    let mut closest = ClosestHit::new(distance, &fan.direction, angle_limit);

    for (point1, point2) in segments {
        for origin in fan_origins(*point1, *point2, rays_count) {
            if let Some(hit) = raycast(&origin)? {
                let _ = closest.offer(hit);
            }
        }
    }

    let hit = closest.into_hit();
    if fan.draw {
        if let Some(hit) = &hit {
            log::debug!("closest hit of the ray fan at {}", hit.point);
        }
    }

    Ok(hit)
}

/// Fires the rays of `fan` along `[point1, point2]` and returns the closest hit.
///
/// `raycast` performs one ray from the given origin along `fan.direction` up
/// to `fan.distance`. The angle limit of the fan is ignored.
pub fn closest_hit<F>(fan: &RayFan, raycast: F) -> Result<Option<HitRecord>, QueryError>
where
    F: FnMut(&Point<Real>) -> Result<Option<HitRecord>, QueryError>,
{
    resolve(fan, &[(fan.point1, fan.point2)], None, raycast)
}

/// The three segments sampled by a depth fan, in firing order: backward,
/// middle, forward.
///
/// The backward and forward segments are the fan segment shifted along
/// `direction × (point2 - point1)` by the projection of `half_size` on that
/// axis, minus [`DEPTH_FAN_SKIN`]. A degenerate segment or direction yields
/// three identical segments.
pub fn depth_fan_segments(
    fan: &RayFan,
    half_size: &Vector<Real>,
) -> [(Point<Real>, Point<Real>); 3] {
    let direction = fan
        .direction
        .try_normalize(Real::EPSILON)
        .unwrap_or_else(Vector::zeros);
    let points_direction = (fan.point2 - fan.point1)
        .try_normalize(Real::EPSILON)
        .unwrap_or_else(Vector::zeros);
    let depth_direction = direction.cross(&points_direction);
    let half_depth = depth_direction.dot(half_size);
    let sign = if half_depth >= 0.0 { 1.0 } else { -1.0 };
    let shift = depth_direction * (half_depth - DEPTH_FAN_SKIN * sign);

    [
        (fan.point1 - shift, fan.point2 - shift),
        (fan.point1, fan.point2),
        (fan.point1 + shift, fan.point2 + shift),
    ]
}

/// Fires the rays of `fan` along the three [`depth_fan_segments`] and returns
/// the closest hit satisfying the angle limit of the fan.
pub fn closest_hit_depth_fan<F>(
    fan: &RayFan,
    half_size: &Vector<Real>,
    raycast: F,
) -> Result<Option<HitRecord>, QueryError>
where
    F: FnMut(&Point<Real>) -> Result<Option<HitRecord>, QueryError>,
{
    let segments = depth_fan_segments(fan, half_size);
    resolve(fan, &segments, fan.angle_limit, raycast)
}
