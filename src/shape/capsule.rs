use crate::math::{Isometry, Point, Real, Vector, Vector2};
use crate::shape::lift_vector;

/// The local axis a 3D capsule is aligned with.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CapsuleDirection {
    /// The local `x` axis.
    X,
    /// The local `y` axis.
    #[default]
    Y,
    /// The local `z` axis.
    Z,
}

impl CapsuleDirection {
    /// The direction matching the discrete axis index `0 → X`, `1 → Y`, `2 → Z`.
    ///
    /// Returns `None` for any other index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(CapsuleDirection::X),
            1 => Some(CapsuleDirection::Y),
            2 => Some(CapsuleDirection::Z),
            _ => None,
        }
    }

    /// The discrete axis index of this direction.
    pub fn index(self) -> usize {
        match self {
            CapsuleDirection::X => 0,
            CapsuleDirection::Y => 1,
            CapsuleDirection::Z => 2,
        }
    }

    /// The unit vector of this axis.
    pub fn axis(self) -> Vector<Real> {
        Vector::ith(self.index(), 1.0)
    }
}

/// The local axis a 2D capsule is elongated along.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CapsuleDirection2d {
    /// Elongated along the local `y` axis.
    #[default]
    Vertical,
    /// Elongated along the local `x` axis.
    Horizontal,
}

/// Computes the two end-points of the core segment of a capsule, in the local
/// frame of its pose.
///
/// The points are `center ∓ axis * o` with `o = max(0, height / 2 - radius)`,
/// so a capsule whose height does not exceed its diameter degenerates to a
/// sphere.
///
/// # Example
///
/// ```
/// use collider_adapter::math::{Point, Vector};
/// use collider_adapter::shape::{capsule_points, CapsuleDirection};
///
/// let (a, b) = capsule_points(0.5, 2.0, CapsuleDirection::Y, &Vector::zeros());
/// assert_eq!(a, Point::new(0.0, -0.5, 0.0));
/// assert_eq!(b, Point::new(0.0, 0.5, 0.0));
/// ```
pub fn capsule_points(
    radius: Real,
    height: Real,
    direction: CapsuleDirection,
    center: &Vector<Real>,
) -> (Point<Real>, Point<Real>) {
    let offset = (height * 0.5 - radius).max(0.0);
    let axis = direction.axis() * offset;
    (Point::from(center - axis), Point::from(center + axis))
}

/// A 3D capsule primitive.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule3d {
    /// The radius of the capsule.
    pub radius: Real,
    /// The total height of the capsule, caps included.
    pub height: Real,
    /// The local axis the capsule is aligned with.
    pub direction: CapsuleDirection,
    /// The position of the capsule center relative to its pose.
    pub center: Vector<Real>,
}

impl Capsule3d {
    /// Creates a new capsule centered on its pose.
    pub fn new(radius: Real, height: Real, direction: CapsuleDirection) -> Self {
        Self {
            radius,
            height,
            direction,
            center: Vector::zeros(),
        }
    }

    /// Moves the capsule center relative to its pose.
    pub fn with_center(mut self, center: Vector<Real>) -> Self {
        self.center = center;
        self
    }

    /// The end-points of the core segment, in the local frame of the pose.
    pub fn local_points(&self) -> (Point<Real>, Point<Real>) {
        capsule_points(self.radius, self.height, self.direction, &self.center)
    }

    /// The end-points of the core segment, transformed by `pos`.
    pub fn world_points(&self, pos: &Isometry<Real>) -> (Point<Real>, Point<Real>) {
        let (a, b) = self.local_points();
        (pos * a, pos * b)
    }
}

/// A 2D capsule primitive.
///
/// Like a 2D box, the capsule is described by its full `size`; its radius is
/// half of the extent perpendicular to `direction`.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule2d {
    /// The full width and height of the capsule.
    pub size: Vector2<Real>,
    /// The local axis the capsule is elongated along.
    pub direction: CapsuleDirection2d,
    /// The position of the capsule center relative to its pose.
    pub offset: Vector2<Real>,
}

impl Capsule2d {
    /// Creates a new capsule centered on its pose.
    pub fn new(size: Vector2<Real>, direction: CapsuleDirection2d) -> Self {
        Self {
            size,
            direction,
            offset: Vector2::zeros(),
        }
    }

    /// Moves the capsule center relative to its pose.
    pub fn with_offset(mut self, offset: Vector2<Real>) -> Self {
        self.offset = offset;
        self
    }

    /// The radius of the rounded caps.
    pub fn radius(&self) -> Real {
        match self.direction {
            CapsuleDirection2d::Vertical => self.size.x * 0.5,
            CapsuleDirection2d::Horizontal => self.size.y * 0.5,
        }
    }

    /// Changes the radius of the caps, keeping the height unchanged.
    pub fn set_radius(&mut self, radius: Real) {
        match self.direction {
            CapsuleDirection2d::Vertical => self.size.x = radius * 2.0,
            CapsuleDirection2d::Horizontal => self.size.y = radius * 2.0,
        }
    }

    /// The total length of the capsule along its direction, caps included.
    pub fn height(&self) -> Real {
        match self.direction {
            CapsuleDirection2d::Vertical => self.size.y,
            CapsuleDirection2d::Horizontal => self.size.x,
        }
    }

    /// The 3D axis matching `direction`.
    pub fn axis(&self) -> CapsuleDirection {
        match self.direction {
            CapsuleDirection2d::Vertical => CapsuleDirection::Y,
            CapsuleDirection2d::Horizontal => CapsuleDirection::X,
        }
    }

    /// The end-points of the core segment, in the local frame of the pose.
    pub fn local_points(&self) -> (Point<Real>, Point<Real>) {
        capsule_points(
            self.radius(),
            self.height(),
            self.axis(),
            &lift_vector(&self.offset),
        )
    }
}
