use crate::math::{Isometry, Point, Real, Translation, Vector};
use crate::query::{cast, CastFilter, HitRecord, PhysicsBackend, QueryError, QueryShape};
use crate::shape::{ColliderHandle, PrimitiveKind};

/// Adapter of a 3D box primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxCollider3d {
    handle: ColliderHandle,
}

impl BoxCollider3d {
    /// Sweeps the box with full control over the cast parameters.
    pub fn cast_with_filter(
        &self,
        backend: &dyn PhysicsBackend,
        filter: &CastFilter,
    ) -> Result<Option<HitRecord>, QueryError> {
        cast::cast_box_3d(backend, self.handle, filter)
    }

    /// The oriented box tested by overlap queries.
    fn overlap_volume(
        &self,
        backend: &dyn PhysicsBackend,
    ) -> Result<(QueryShape, Isometry<Real>), QueryError> {
        let primitive = backend.primitive(self.handle)?;
        let shape = primitive
            .shape
            .as_box_3d()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Box3d,
                found: primitive.kind(),
            })?;
        let center = primitive.pose * Point::from(shape.center);
        let pose = Isometry::from_parts(Translation::from(center.coords), primitive.pose.rotation);

        Ok((
            QueryShape::Cuboid {
                half_extents: shape.half_extents(),
            },
            pose,
        ))
    }

    fn resize(
        &self,
        backend: &mut dyn PhysicsBackend,
        size: Vector<Real>,
    ) -> Result<(), QueryError> {
        let primitive = backend.primitive_mut(self.handle)?;
        let found = primitive.kind();
        let shape = primitive
            .shape
            .as_box_3d_mut()
            .ok_or(QueryError::KindMismatch {
                expected: PrimitiveKind::Box3d,
                found,
            })?;
        shape.size = size;
        Ok(())
    }
}

impl_spatial_collider!(BoxCollider3d, Box3d);
