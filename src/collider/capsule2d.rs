use crate::math::{Real, Vector};
use crate::query::{cast, CastFilter, DepthRange, HitRecord, PhysicsBackend, QueryError};
use crate::shape::{ColliderHandle, PrimitiveKind};

/// Adapter of a 2D capsule primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CapsuleCollider2d {
    handle: ColliderHandle,
    depth: DepthRange,
}

impl CapsuleCollider2d {
    /// The radius of the rounded caps.
    pub fn radius(&self, backend: &dyn PhysicsBackend) -> Result<Real, QueryError> {
        let primitive = backend.primitive(self.handle)?;
        primitive
            .shape
            .as_capsule_2d()
            .map(|capsule| capsule.radius())
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Capsule2d,
                found: primitive.kind(),
            })
    }

    /// Sweeps the capsule with full control over the cast parameters.
    pub fn cast_with_filter(
        &self,
        backend: &dyn PhysicsBackend,
        filter: &CastFilter,
    ) -> Result<Option<HitRecord>, QueryError> {
        cast::cast_capsule_2d(backend, self.handle, filter)
    }

    // The magnitude of `size` becomes the radius, the height is kept.
    fn resize(
        &self,
        backend: &mut dyn PhysicsBackend,
        size: Vector<Real>,
    ) -> Result<(), QueryError> {
        let primitive = backend.primitive_mut(self.handle)?;
        let found = primitive.kind();
        let shape = primitive
            .shape
            .as_capsule_2d_mut()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Capsule2d,
                found,
            })?;
        shape.set_radius(size.norm());
        Ok(())
    }
}

impl_planar_collider!(CapsuleCollider2d, Capsule2d);
