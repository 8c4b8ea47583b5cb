use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};

/// Computes the AABB of a set of points transformed by `m`.
///
/// Returns `None` if `pts` is empty.
pub fn point_cloud_aabb<I>(m: &Isometry<Real>, pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = Point<Real>>,
{
    local_point_cloud_aabb(pts.into_iter().map(|pt| m * pt))
}

/// Computes the AABB of a set of points.
///
/// Returns `None` if `pts` is empty.
pub fn local_point_cloud_aabb<I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter().peekable();
    let _ = it.peek()?;
    let mut aabb = Aabb::new_invalid();

    for pt in it {
        aabb.take_point(pt);
    }

    Some(aabb)
}
