use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{cast, CastFilter, HitRecord, PhysicsBackend, QueryError, QueryShape};
use crate::shape::{ColliderHandle, PrimitiveKind, Sphere};

/// Adapter of a 3D sphere primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereCollider3d {
    handle: ColliderHandle,
}

impl SphereCollider3d {
    fn sphere<'a>(
        &self,
        backend: &'a dyn PhysicsBackend,
    ) -> Result<(&'a Sphere, Isometry<Real>), QueryError> {
        let primitive = backend.primitive(self.handle)?;
        let sphere = primitive
            .shape
            .as_sphere()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Sphere3d,
                found: primitive.kind(),
            })?;
        Ok((sphere, primitive.pose))
    }

    /// The radius of the sphere.
    pub fn radius(&self, backend: &dyn PhysicsBackend) -> Result<Real, QueryError> {
        Ok(self.sphere(backend)?.0.radius)
    }

    /// Sweeps the sphere with full control over the cast parameters.
    pub fn cast_with_filter(
        &self,
        backend: &dyn PhysicsBackend,
        filter: &CastFilter,
    ) -> Result<Option<HitRecord>, QueryError> {
        cast::cast_sphere_3d(backend, self.handle, filter)
    }

    /// The ball tested by overlap queries.
    fn overlap_volume(
        &self,
        backend: &dyn PhysicsBackend,
    ) -> Result<(QueryShape, Isometry<Real>), QueryError> {
        let (sphere, pose) = self.sphere(backend)?;
        let center = pose * Point::from(sphere.center);

        Ok((
            QueryShape::Ball {
                radius: sphere.radius,
            },
            Isometry::new(center.coords, Vector::zeros()),
        ))
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
            .as_sphere_mut()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Sphere3d,
                found,
            })?;
        shape.radius = size.norm();
        Ok(())
    }
}

impl_spatial_collider!(SphereCollider3d, Sphere3d);
