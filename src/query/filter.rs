//! Filters restricting what a query may detect.

use crate::math::{Real, Vector};
use crate::query::LayerMask;
use crate::shape::ColliderHandle;

/// A band of depths (`z` coordinates) a 2D query is restricted to.
///
/// 2D primitives are infinite along `z`, so the band is checked against the
/// depth of their pose. Nothing enforces `min <= max`; an inverted range
/// simply contains no depth.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DepthRange {
    /// The smallest depth detected.
    pub min: Real,
    /// The largest depth detected.
    pub max: Real,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl DepthRange {
    /// The range containing every depth.
    pub const UNBOUNDED: Self = Self {
        min: Real::NEG_INFINITY,
        max: Real::INFINITY,
    };

    /// Creates the range `[min, max]`.
    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    /// Is `depth` within this range, bounds included?
    #[inline]
    pub fn contains(&self, depth: Real) -> bool {
        self.min <= depth && depth <= self.max
    }
}

/// How trigger-only primitives take part in a query.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TriggerPolicy {
    /// Follow the global setting of the backend.
    #[default]
    UseGlobal,
    /// Never report triggers.
    Ignore,
    /// Always report triggers.
    Collide,
}

/// The filter every backend query receives.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct QueryFilter {
    /// Only primitives on these layers are detected.
    pub layer_mask: LayerMask,
    /// Depth band of 2D queries; always `None` for 3D queries.
    pub depth: Option<DepthRange>,
    /// How trigger-only primitives are handled.
    pub triggers: TriggerPolicy,
    /// A primitive that is never reported, usually the one issuing the query.
    pub exclude: Option<ColliderHandle>,
}

impl QueryFilter {
    /// A 3D filter detecting the layers in `layer_mask`.
    pub fn new(layer_mask: LayerMask) -> Self {
        Self {
            layer_mask,
            depth: None,
            triggers: TriggerPolicy::UseGlobal,
            exclude: None,
        }
    }

    /// A 2D filter detecting the layers in `layer_mask` within `depth`.
    pub fn planar(layer_mask: LayerMask, depth: DepthRange) -> Self {
        Self {
            depth: Some(depth),
            ..Self::new(layer_mask)
        }
    }

    /// Sets how trigger-only primitives are handled.
    pub fn with_triggers(mut self, triggers: TriggerPolicy) -> Self {
        self.triggers = triggers;
        self
    }

    /// Never reports `collider`.
    pub fn excluding(mut self, collider: ColliderHandle) -> Self {
        self.exclude = Some(collider);
        self
    }

    /// Does this filter accept the primitive `collider` on `layer`, located
    /// at `depth`?
    ///
    /// Trigger handling is left to the backend.
    pub fn accepts(&self, collider: ColliderHandle, layer: u32, depth: Real) -> bool {
        self.exclude != Some(collider)
            && self.layer_mask.contains_layer(layer)
            && self.depth.map(|range| range.contains(depth)).unwrap_or(true)
    }
}

/// The parameters of a shape cast issued from a collider.
///
/// `angle` and `depth` are only used by 2D casts.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CastFilter {
    /// Only primitives on these layers are detected.
    pub layer_mask: LayerMask,
    /// Offset of the cast origin from the collider position.
    pub offset: Vector<Real>,
    /// The cast direction. It does not need to be normalized.
    pub direction: Vector<Real>,
    /// The maximum cast distance.
    pub distance: Real,
    /// The rotation of 2D casts about `z`, in degrees.
    pub angle: Real,
    /// Depth band of 2D casts.
    pub depth: DepthRange,
    /// Shrinks the cast shape. A negative skin expands it.
    pub skin: Real,
    /// Logs the cast and its result.
    pub draw: bool,
}

impl Default for CastFilter {
    fn default() -> Self {
        Self {
            layer_mask: LayerMask::ALL,
            offset: Vector::zeros(),
            direction: Vector::zeros(),
            distance: 0.0,
            angle: 0.0,
            depth: DepthRange::UNBOUNDED,
            skin: crate::collider::DEFAULT_SKIN,
            draw: false,
        }
    }
}

impl CastFilter {
    /// A cast along `direction` up to `distance`, detecting every layer.
    pub fn new(direction: Vector<Real>, distance: Real) -> Self {
        Self {
            direction,
            distance,
            ..Self::default()
        }
    }

    /// Sets the detected layers.
    pub fn with_layer_mask(mut self, layer_mask: LayerMask) -> Self {
        self.layer_mask = layer_mask;
        self
    }

    /// Sets the offset of the cast origin.
    pub fn with_offset(mut self, offset: Vector<Real>) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the rotation of 2D casts, in degrees.
    pub fn with_angle(mut self, angle: Real) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the depth band of 2D casts.
    pub fn with_depth(mut self, depth: DepthRange) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the skin shrinking the cast shape.
    pub fn with_skin(mut self, skin: Real) -> Self {
        self.skin = skin;
        self
    }

    /// Enables logging of the cast.
    pub fn with_draw(mut self, draw: bool) -> Self {
        self.draw = draw;
        self
    }

    /// The filter of a 2D backend cast issued from `collider`.
    pub fn planar_filter(&self, collider: ColliderHandle) -> QueryFilter {
        QueryFilter::planar(self.layer_mask, self.depth).excluding(collider)
    }

    /// The filter of a 3D backend cast issued from `collider`.
    pub fn spatial_filter(&self, collider: ColliderHandle) -> QueryFilter {
        QueryFilter::new(self.layer_mask).excluding(collider)
    }
}
