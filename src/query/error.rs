use crate::math::Real;
use crate::shape::{ColliderHandle, PrimitiveKind};

/// Error reported by a [`PhysicsBackend`](crate::query::PhysicsBackend).
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum BackendError {
    /// The handle does not identify any live primitive.
    #[error("no primitive is registered under {0:?}.")]
    UnknownCollider(ColliderHandle),
    /// The backend does not provide this query.
    #[error("this query is not supported by the physics backend.")]
    Unsupported,
    /// Any other failure of the backend.
    #[error("physics backend failure: {0}")]
    Other(String),
}

/// Error returned by collider queries.
///
/// Finding nothing is not an error: queries report it as `Ok(None)` or an
/// empty result.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum QueryError {
    /// The maximum distance of a query was negative or NaN.
    #[error("the query distance {0} must be a non-negative number.")]
    InvalidDistance(Real),
    /// The adapter and the primitive it wraps disagree on the primitive kind.
    #[error("expected a {expected} primitive, found a {found}.")]
    KindMismatch {
        /// The kind the adapter was built for.
        expected: PrimitiveKind,
        /// The kind the backend reported.
        found: PrimitiveKind,
    },
    /// The physics backend failed to answer.
    #[error("Backend Error: {0}")]
    Backend(#[from] BackendError),
}

/// Rejects negative and NaN distances.
#[inline]
pub(crate) fn validate_distance(distance: Real) -> Result<Real, QueryError> {
    if distance >= 0.0 {
        Ok(distance)
    } else {
        Err(QueryError::InvalidDistance(distance))
    }
}
