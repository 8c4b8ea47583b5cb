//! Self-excluding overlap queries.

use crate::math::{Isometry, Real};
use crate::query::{
    OverlapBuffer, PhysicsBackend, QueryError, QueryFilter, QueryShape, SelfExclusionGuard,
};
use crate::shape::ColliderHandle;

/// Collects up to `limit` primitives overlapping `shape` placed at `pose`,
/// ignoring `collider` itself.
///
/// `collider` is disabled for the duration of the backend query and its
/// previous enabled flag is restored afterwards, even if the query fails.
/// `buffer` is cleared first; on success it holds the found primitives and
/// their owners, and their count is returned. `limit` is capped by the
/// buffer capacity.
pub fn overlap_self(
    backend: &mut dyn PhysicsBackend,
    collider: ColliderHandle,
    shape: &QueryShape,
    pose: &Isometry<Real>,
    filter: &QueryFilter,
    limit: usize,
    buffer: &mut OverlapBuffer,
) -> Result<usize, QueryError> {
    buffer.clear();
    if limit == 0 {
        return Ok(0);
    }

    {
        let guard = SelfExclusionGuard::new(backend, collider)?;
        let result = guard.overlap_shape(shape, pose, filter, &mut |found| {
            buffer.push_collider(found, limit)
        });

        if let Err(err) = result {
            log::debug!(
                "overlap query of {:?} failed, restoring its enabled flag to {}: {}",
                collider,
                guard.was_enabled(),
                err
            );
            buffer.clear();
            return Err(err.into());
        }
    }

    if let Err(err) = buffer.resolve_owners(backend) {
        buffer.clear();
        return Err(err.into());
    }

    Ok(buffer.len())
}
