//! Rays handed to the physics backend.

use crate::math::{Point, Real, Vector};

/// A ray: a half-line starting at `origin` and extending along `dir`.
///
/// Adapters always hand normalized directions to the backend, so the
/// parameter `t` of [`Ray::point_at`] is a world-space distance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Creates a ray with a normalized direction.
    ///
    /// Returns `None` if `dir` is too small to be normalized.
    pub fn normalized(origin: Point<Real>, dir: &Vector<Real>) -> Option<Ray> {
        dir.try_normalize(Real::EPSILON)
            .map(|dir| Ray::new(origin, dir))
    }

    /// Computes the point at the given parameter on this half-line.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}
