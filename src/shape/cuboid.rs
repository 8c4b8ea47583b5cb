//! Box primitives.

use crate::math::{Real, Vector, Vector2};

/// A 2D box primitive.
///
/// The box is rotated with its pose; `size` is its full extent along the
/// local `x` and `y` axes.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Box2d {
    /// The full width and height of the box.
    pub size: Vector2<Real>,
    /// The position of the box center relative to its pose.
    pub offset: Vector2<Real>,
}

impl Box2d {
    /// Creates a new box centered on its pose.
    #[inline]
    pub fn new(size: Vector2<Real>) -> Box2d {
        Box2d {
            size,
            offset: Vector2::zeros(),
        }
    }

    /// Moves the box center relative to its pose.
    #[inline]
    pub fn with_offset(mut self, offset: Vector2<Real>) -> Self {
        self.offset = offset;
        self
    }

    /// Half of the size of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector2<Real> {
        self.size * 0.5
    }
}

/// A 3D box primitive.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Box3d {
    /// The full size of the box along its local axes.
    pub size: Vector<Real>,
    /// The position of the box center relative to its pose.
    pub center: Vector<Real>,
}

impl Box3d {
    /// Creates a new box centered on its pose.
    #[inline]
    pub fn new(size: Vector<Real>) -> Box3d {
        Box3d {
            size,
            center: Vector::zeros(),
        }
    }

    /// Moves the box center relative to its pose.
    #[inline]
    pub fn with_center(mut self, center: Vector<Real>) -> Self {
        self.center = center;
        self
    }

    /// Half of the size of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.size * 0.5
    }
}
