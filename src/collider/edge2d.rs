use crate::math::{Real, Vector};
use crate::query::{cast, CastFilter, DepthRange, HitRecord, PhysicsBackend, QueryError};
use crate::shape::ColliderHandle;

/// Adapter of a 2D edge chain primitive.
///
/// Like composites, edge chains are point-defined and ignore resizing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeCollider2d {
    handle: ColliderHandle,
    depth: DepthRange,
}

impl EdgeCollider2d {
    /// Sweeps the edge chain with full control over the cast parameters.
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

impl_planar_collider!(EdgeCollider2d, Edge2d);
