//! Selection of the adapter matching a backend primitive.

use crate::collider::{
    BoxCollider2d, BoxCollider3d, CapsuleCollider2d, CapsuleCollider3d, CircleCollider2d,
    ColliderAdapter, CompositeCollider2d, EdgeCollider2d, SphereCollider3d,
};
use crate::query::{BackendError, PhysicsBackend};
use crate::shape::{ColliderHandle, Dimension, PrimitiveKind};

/// Errors raised while choosing an adapter.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum AdapterError {
    /// No adapter exists for this kind of primitive.
    #[error("{0} primitives do not have an adapter")]
    UnsupportedPrimitive(PrimitiveKind),
    /// There is no primitive to adapt.
    #[error("no primitive to adapt")]
    NoPrimitive,
    /// The backend failed to describe a candidate primitive.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A function wrapping a primitive handle into its adapter.
pub type AdapterConstructor = fn(ColliderHandle) -> ColliderAdapter;

/// The constructor of the adapter handling `kind` primitives.
pub fn adapter_constructor(kind: PrimitiveKind) -> Result<AdapterConstructor, AdapterError> {
    let constructor: AdapterConstructor = match kind {
        PrimitiveKind::Box2d => |h| BoxCollider2d::new(h).into(),
        PrimitiveKind::Circle2d => |h| CircleCollider2d::new(h).into(),
        PrimitiveKind::Capsule2d => |h| CapsuleCollider2d::new(h).into(),
        PrimitiveKind::Composite2d => |h| CompositeCollider2d::new(h).into(),
        PrimitiveKind::Edge2d => |h| EdgeCollider2d::new(h).into(),
        PrimitiveKind::Box3d => |h| BoxCollider3d::new(h).into(),
        PrimitiveKind::Sphere3d => |h| SphereCollider3d::new(h).into(),
        PrimitiveKind::Capsule3d => |h| CapsuleCollider3d::new(h).into(),
        PrimitiveKind::Polygon2d | PrimitiveKind::Mesh3d => {
            log::warn!("{} primitives do not have an adapter", kind);
            return Err(AdapterError::UnsupportedPrimitive(kind));
        }
    };

    Ok(constructor)
}

impl ColliderAdapter {
    /// The adapter of the primitive identified by `handle`.
    pub fn for_primitive(
        backend: &dyn PhysicsBackend,
        handle: ColliderHandle,
    ) -> Result<Self, AdapterError> {
        let constructor = adapter_constructor(backend.kind(handle)?)?;
        Ok(constructor(handle))
    }
}

/// Picks the adapter of an object owning the `candidates` primitives.
///
/// An `existing` adapter always wins. Otherwise the first 2D candidate is
/// adapted, and the first 3D one only if there is no 2D candidate.
pub fn resolve_adapter(
    existing: Option<ColliderAdapter>,
    backend: &dyn PhysicsBackend,
    candidates: &[ColliderHandle],
) -> Result<ColliderAdapter, AdapterError> {
    if let Some(adapter) = existing {
        return Ok(adapter);
    }

    let mut first_3d = None;

    for &candidate in candidates {
        match backend.kind(candidate)?.dimension() {
            Dimension::Two => return ColliderAdapter::for_primitive(backend, candidate),
            Dimension::Three => {
                if first_3d.is_none() {
                    first_3d = Some(candidate);
                }
            }
        }
    }

    match first_3d {
        Some(candidate) => ColliderAdapter::for_primitive(backend, candidate),
        None => Err(AdapterError::NoPrimitive),
    }
}
