//! Non-persistent queries issued from colliders.
//!
//! Every query ends up in one of the primitive requests of a
//! [`PhysicsBackend`]. This module provides the types flowing through that
//! boundary and the free functions colliders are built from:
//!
//! * [`cast`] sweeps the volume of a primitive, e.g. [`cast::cast_box_2d`].
//! * [`overlap_self`] collects the primitives overlapping a volume while
//!   excluding the querying primitive through a [`SelfExclusionGuard`].
//! * [`multi_ray`] reduces a fan of parallel rays to its closest hit.
//!
//! No hit is reported as `Ok(None)`; [`QueryError`] is kept for invalid
//! parameters and backend failures.

pub use self::backend::{OverlapBuffer, PhysicsBackend, QueryShape, OVERLAP_BUFFER_CAPACITY};
pub use self::error::{BackendError, QueryError};
pub use self::filter::{CastFilter, DepthRange, QueryFilter, TriggerPolicy};
pub use self::guard::SelfExclusionGuard;
pub use self::hit::HitRecord;
pub use self::layer_mask::LayerMask;
pub use self::multi_ray::{ClosestHit, RayFan};
pub use self::overlap::overlap_self;
pub use self::ray::Ray;

mod backend;
pub mod cast;
pub(crate) mod error;
mod filter;
mod guard;
mod hit;
mod layer_mask;
pub mod multi_ray;
mod overlap;
mod ray;
