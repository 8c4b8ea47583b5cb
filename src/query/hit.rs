use crate::math::{Point, Real, Vector};
use crate::shape::{ColliderHandle, OwnerHandle};

/// The normalized result of a single raycast or shape cast.
///
/// `point`, `normal` and `distance` are only meaningful when
/// [`HitRecord::has_collider`] is `true`.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct HitRecord {
    /// The world-space contact point.
    pub point: Point<Real>,
    /// The surface normal at `point`.
    pub normal: Vector<Real>,
    /// The distance travelled by the query before the contact.
    pub distance: Real,
    /// The primitive that was hit.
    pub collider: Option<ColliderHandle>,
    /// The object owning the primitive that was hit.
    pub owner: Option<OwnerHandle>,
}

impl HitRecord {
    /// Creates a hit on the given primitive.
    pub fn new(
        point: Point<Real>,
        normal: Vector<Real>,
        distance: Real,
        collider: ColliderHandle,
        owner: OwnerHandle,
    ) -> Self {
        Self {
            point,
            normal,
            distance,
            collider: Some(collider),
            owner: Some(owner),
        }
    }

    /// Does this record refer to an actual primitive?
    #[inline]
    pub fn has_collider(&self) -> bool {
        self.collider.is_some()
    }
}
