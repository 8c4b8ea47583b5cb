use crate::math::{Real, Vector};
use crate::query::{cast, CastFilter, DepthRange, HitRecord, PhysicsBackend, QueryError};
use crate::shape::ColliderHandle;

/// Adapter of a 2D composite primitive.
///
/// The geometry is defined by the points of its polygons: it cannot be
/// resized, and casts sweep the composite itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompositeCollider2d {
    handle: ColliderHandle,
    depth: DepthRange,
}

impl CompositeCollider2d {
    /// Sweeps the composite with full control over the cast parameters.
    pub fn cast_with_filter(
        &self,
        backend: &dyn PhysicsBackend,
        filter: &CastFilter,
    ) -> Result<Option<HitRecord>, QueryError> {
        cast::cast_primitive_2d(backend, self.handle, filter)
    }

    fn resize(&self, _: &mut dyn PhysicsBackend, _: Vector<Real>) -> Result<(), QueryError> {
        Ok(())
    }
}

impl_planar_collider!(CompositeCollider2d, Composite2d);
