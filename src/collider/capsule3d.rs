use crate::math::{Isometry, Real, Vector};
use crate::query::{cast, CastFilter, HitRecord, PhysicsBackend, QueryError, QueryShape};
use crate::shape::{Capsule3d, ColliderHandle, PrimitiveKind};

/// Adapter of a 3D capsule primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CapsuleCollider3d {
    handle: ColliderHandle,
}

impl CapsuleCollider3d {
    fn capsule<'a>(
        &self,
        backend: &'a dyn PhysicsBackend,
    ) -> Result<(&'a Capsule3d, Isometry<Real>), QueryError> {
        let primitive = backend.primitive(self.handle)?;
        let capsule = primitive
            .shape
            .as_capsule_3d()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Capsule3d,
                found: primitive.kind(),
            })?;
        Ok((capsule, primitive.pose))
    }

    /// The radius of the capsule.
    pub fn radius(&self, backend: &dyn PhysicsBackend) -> Result<Real, QueryError> {
        Ok(self.capsule(backend)?.0.radius)
    }

    /// Sweeps the capsule with full control over the cast parameters.
    pub fn cast_with_filter(
        &self,
        backend: &dyn PhysicsBackend,
        filter: &CastFilter,
    ) -> Result<Option<HitRecord>, QueryError> {
        cast::cast_capsule_3d(backend, self.handle, filter)
    }

    /// The capsule tested by overlap queries, its core segment in world space.
    fn overlap_volume(
        &self,
        backend: &dyn PhysicsBackend,
    ) -> Result<(QueryShape, Isometry<Real>), QueryError> {
        let (capsule, pose) = self.capsule(backend)?;
        let (a, b) = capsule.world_points(&pose);

        Ok((
            QueryShape::Capsule {
                a,
                b,
                radius: capsule.radius,
            },
            Isometry::identity(),
        ))
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
            .as_capsule_3d_mut()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Capsule3d,
                found,
            })?;
        shape.radius = size.norm();
        Ok(())
    }
}

impl_spatial_collider!(CapsuleCollider3d, Capsule3d);
