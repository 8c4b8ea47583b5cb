use core::ops::{Deref, DerefMut};

use crate::query::{BackendError, PhysicsBackend};
use crate::shape::ColliderHandle;

/// Keeps a primitive disabled for as long as the guard lives.
///
/// Overlap queries issued from a collider's own volume would always report
/// the collider itself. The guard disables the primitive on creation and
/// restores its previous enabled flag when dropped, whichever way the scope
/// is left.
///
/// The guard dereferences to the backend, so queries are issued through it.
pub struct SelfExclusionGuard<'a> {
    backend: &'a mut dyn PhysicsBackend,
    collider: ColliderHandle,
    was_enabled: bool,
}

impl<'a> SelfExclusionGuard<'a> {
    /// Disables `collider` until the returned guard is dropped.
    pub fn new(
        backend: &'a mut dyn PhysicsBackend,
        collider: ColliderHandle,
    ) -> Result<Self, BackendError> {
        let was_enabled = backend.is_enabled(collider)?;
        backend.set_enabled(collider, false)?;

        Ok(Self {
            backend,
            collider,
            was_enabled,
        })
    }

    /// The excluded primitive.
    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }

    /// The enabled flag restored on drop.
    pub fn was_enabled(&self) -> bool {
        self.was_enabled
    }
}

impl<'a> Deref for SelfExclusionGuard<'a> {
    type Target = dyn PhysicsBackend + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.backend
    }
}

impl<'a> DerefMut for SelfExclusionGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.backend
    }
}

impl Drop for SelfExclusionGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.backend.set_enabled(self.collider, self.was_enabled) {
            log::error!(
                "failed to restore the enabled flag of {:?}: {}",
                self.collider,
                err
            );
        }
    }
}
