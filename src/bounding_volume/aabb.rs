//! Axis Aligned Bounding Box.

use crate::math::{Isometry, Point, Real, Vector, DIM};
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// This is the `bounds` of every collider: the smallest world-space box,
/// aligned with the coordinate axes, enclosing the primitive.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis
/// - **maxs**: The point with the largest coordinates on each axis
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`
///
/// 2D primitives produce bounds with a zero extent along `z`, located at the
/// depth of their pose.
///
/// # Example
///
/// ```rust
/// use collider_adapter::bounding_volume::Aabb;
/// use nalgebra::{Point3, Vector3};
///
/// let aabb = Aabb::from_center_size(Point3::origin(), Vector3::new(2.0, 4.0, 0.0));
///
/// assert_eq!(aabb.center(), Point3::origin());
/// assert_eq!(aabb.extents(), Vector3::new(2.0, 4.0, 0.0)); // Full size
/// assert_eq!(aabb.half_extents().y, 2.0);
/// assert!(aabb.contains_local_point(&Point3::new(1.0, -2.0, 0.0)));
/// ```
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX`
    /// and `maxs` components set to `-Real::MAX`.
    ///
    /// This is often used as the initial value of some AABB merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(<Real as Bounded>::max_value()).into(),
            Vector::repeat(-<Real as Bounded>::max_value()).into(),
        )
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB from its center and its full size along each axis.
    #[inline]
    pub fn from_center_size(center: Point<Real>, size: Vector<Real>) -> Self {
        Self::from_half_extents(center, size * 0.5)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB, i.e., its full size along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    ///
    /// Points lying exactly on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Does `self` contain `other` entirely?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        self.contains_local_point(&other.mins) && self.contains_local_point(&other.maxs)
    }

    /// Do `self` and `other` share at least one point?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if self.mins[i] > other.maxs[i] || self.maxs[i] < other.mins[i] {
                return false;
            }
        }

        true
    }

    /// Computes the intersection of this `Aabb` and another one.
    ///
    /// Returns `None` if the two boxes are disjoint.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb {
            mins: Point::from(self.mins.coords.sup(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.inf(&other.maxs.coords)),
        };

        for i in 0..DIM {
            if result.mins[i] > result.maxs[i] {
                return None;
            }
        }

        Some(result)
    }

    /// Returns a copy of this AABB grown by `half_extents` on every side.
    #[inline]
    pub fn add_half_extents(&self, half_extents: &Vector<Real>) -> Self {
        Self {
            mins: self.mins - half_extents,
            maxs: self.maxs + half_extents,
        }
    }
}

/// Transforms a vector by the absolute value of the rotation matrix of `m`.
///
/// This is how the half-extents of a rotated box map to the half-extents of
/// its world-space AABB.
#[inline]
pub(crate) fn absolute_transform_vector(m: &Isometry<Real>, v: &Vector<Real>) -> Vector<Real> {
    m.rotation.to_rotation_matrix().into_inner().abs() * *v
}
