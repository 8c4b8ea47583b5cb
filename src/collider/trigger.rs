//! Enter/stay/exit detection on top of [`Collider::is_colliding`].

use crate::collider::Collider;
use crate::query::{LayerMask, PhysicsBackend, QueryError};

/// The transition reported by a [`TriggerDetector`] update.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// The collider started overlapping a target.
    Enter,
    /// The collider is still overlapping a target.
    Stay,
    /// The collider stopped overlapping every target.
    Exit,
}

/// Tracks whether a collider overlaps anything on some layers, update after
/// update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerDetector {
    /// The layers whose primitives are detected.
    pub target_layers: LayerMask,
    is_colliding: bool,
}

impl TriggerDetector {
    /// A detector of the `target_layers`, initially not colliding.
    pub fn new(target_layers: LayerMask) -> Self {
        Self {
            target_layers,
            is_colliding: false,
        }
    }

    /// A detector of the `target_layers` that turns `collider` into a trigger.
    pub fn for_collider(
        collider: &dyn Collider,
        backend: &mut dyn PhysicsBackend,
        target_layers: LayerMask,
    ) -> Result<Self, QueryError> {
        collider.set_trigger(backend, true)?;
        Ok(Self::new(target_layers))
    }

    /// Was the collider overlapping a target at the last update?
    pub fn is_colliding(&self) -> bool {
        self.is_colliding
    }

    /// Queries the collider and reports the transition since the last update.
    ///
    /// Returns `None` while nothing is overlapping. On error the previous
    /// state is kept.
    pub fn update(
        &mut self,
        collider: &dyn Collider,
        backend: &mut dyn PhysicsBackend,
    ) -> Result<Option<TriggerEvent>, QueryError> {
        let was_colliding = self.is_colliding;
        self.is_colliding = collider.is_colliding(backend, self.target_layers)?;

        Ok(match (was_colliding, self.is_colliding) {
            (false, true) => Some(TriggerEvent::Enter),
            (true, true) => Some(TriggerEvent::Stay),
            (true, false) => Some(TriggerEvent::Exit),
            (false, false) => None,
        })
    }
}
