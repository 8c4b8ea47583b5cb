use crate::math::{Real, Vector, Vector2};

/// A 2D circle primitive.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The radius of the circle.
    pub radius: Real,
    /// The position of the circle center relative to its pose.
    pub offset: Vector2<Real>,
}

impl Circle {
    /// Creates a new circle centered on its pose.
    #[inline]
    pub fn new(radius: Real) -> Circle {
        Circle {
            radius,
            offset: Vector2::zeros(),
        }
    }

    /// Moves the circle center relative to its pose.
    #[inline]
    pub fn with_offset(mut self, offset: Vector2<Real>) -> Self {
        self.offset = offset;
        self
    }
}

/// A 3D sphere primitive.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
    /// The position of the sphere center relative to its pose.
    pub center: Vector<Real>,
}

impl Sphere {
    /// Creates a new sphere centered on its pose.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Sphere {
            radius,
            center: Vector::zeros(),
        }
    }

    /// Moves the sphere center relative to its pose.
    #[inline]
    pub fn with_center(mut self, center: Vector<Real>) -> Self {
        self.center = center;
        self
    }
}
