use crate::math::{Real, Vector};
use crate::query::{cast, CastFilter, DepthRange, HitRecord, PhysicsBackend, QueryError};
use crate::shape::{ColliderHandle, PrimitiveKind};

/// Adapter of a 2D circle primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleCollider2d {
    handle: ColliderHandle,
    depth: DepthRange,
}

impl CircleCollider2d {
    /// The radius of the circle.
    pub fn radius(&self, backend: &dyn PhysicsBackend) -> Result<Real, QueryError> {
        let primitive = backend.primitive(self.handle)?;
        primitive
            .shape
            .as_circle()
            .map(|circle| circle.radius)
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Circle2d,
                found: primitive.kind(),
            })
    }

    /// Sweeps the circle with full control over the cast parameters.
    pub fn cast_with_filter(
        &self,
        backend: &dyn PhysicsBackend,
        filter: &CastFilter,
    ) -> Result<Option<HitRecord>, QueryError> {
        cast::cast_circle_2d(backend, self.handle, filter)
    }

    // The magnitude of `size` becomes the radius.
    fn resize(
        &self,
        backend: &mut dyn PhysicsBackend,
        size: Vector<Real>,
    ) -> Result<(), QueryError> {
        let primitive = backend.primitive_mut(self.handle)?;
        let found = primitive.kind();
        let shape = primitive
            .shape
            .as_circle_mut()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Circle2d,
                found,
            })?;
        shape.radius = size.norm();
        Ok(())
    }
}

impl_planar_collider!(CircleCollider2d, Circle2d);
