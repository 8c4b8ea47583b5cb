use crate::math::{Real, Vector};
use crate::query::{cast, CastFilter, DepthRange, HitRecord, PhysicsBackend, QueryError};
use crate::shape::{ColliderHandle, PrimitiveKind};

/// Adapter of a 2D box primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxCollider2d {
    handle: ColliderHandle,
    depth: DepthRange,
}

impl BoxCollider2d {
    /// Sweeps the box with full control over the cast parameters.
    pub fn cast_with_filter(
        &self,
        backend: &dyn PhysicsBackend,
        filter: &CastFilter,
    ) -> Result<Option<HitRecord>, QueryError> {
        cast::cast_box_2d(backend, self.handle, filter)
    }

    // The width and height of the box are taken as is.
    fn resize(
        &self,
        backend: &mut dyn PhysicsBackend,
        size: Vector<Real>,
    ) -> Result<(), QueryError> {
        let primitive = backend.primitive_mut(self.handle)?;
        let found = primitive.kind();
        let shape = primitive
            .shape
            .as_box_2d_mut()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Box2d,
                found,
            })?;
        shape.size = size.xy();
        Ok(())
    }
}

impl_planar_collider!(BoxCollider2d, Box2d);
