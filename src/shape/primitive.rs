use crate::math::{Isometry, Real, Vector};
use crate::shape::{
    lift_vector, Box2d, Box3d, Capsule2d, Capsule3d, Circle, Composite, EdgeChain, Sphere,
};
use core::fmt;

/// Opaque identifier of one live primitive inside a physics backend.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub u32);

impl ColliderHandle {
    /// The raw index wrapped by this handle.
    #[inline]
    pub fn into_raw(self) -> u32 {
        self.0
    }
}

/// Opaque identifier of the object owning a primitive.
///
/// Hit records and overlap queries report owners so callers can attribute
/// results without knowing anything about the primitive itself.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerHandle(pub u64);

/// The dimensionality a primitive lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Planar primitive, infinite along the depth (`z`) axis.
    Two,
    /// Volumetric primitive.
    Three,
}

/// Enum representing the kind of every primitive a backend may report.
///
/// Only some kinds have an adapter; see
/// [`adapter_constructor`](crate::collider::adapter_constructor).
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A 2D box.
    Box2d,
    /// A 2D circle.
    Circle2d,
    /// A 2D capsule.
    Capsule2d,
    /// A 2D composite of polygons or outlines.
    Composite2d,
    /// A 2D chain of edges.
    Edge2d,
    /// A 2D free-form polygon.
    Polygon2d,
    /// A 3D box.
    Box3d,
    /// A 3D sphere.
    Sphere3d,
    /// A 3D capsule.
    Capsule3d,
    /// A 3D triangle mesh.
    Mesh3d,
}

impl PrimitiveKind {
    /// The dimension this kind of primitive lives in.
    pub fn dimension(self) -> Dimension {
        match self {
            PrimitiveKind::Box2d
            | PrimitiveKind::Circle2d
            | PrimitiveKind::Capsule2d
            | PrimitiveKind::Composite2d
            | PrimitiveKind::Edge2d
            | PrimitiveKind::Polygon2d => Dimension::Two,
            PrimitiveKind::Box3d
            | PrimitiveKind::Sphere3d
            | PrimitiveKind::Capsule3d
            | PrimitiveKind::Mesh3d => Dimension::Three,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveKind::Box2d => "2D box",
            PrimitiveKind::Circle2d => "2D circle",
            PrimitiveKind::Capsule2d => "2D capsule",
            PrimitiveKind::Composite2d => "2D composite",
            PrimitiveKind::Edge2d => "2D edge chain",
            PrimitiveKind::Polygon2d => "2D polygon",
            PrimitiveKind::Box3d => "3D box",
            PrimitiveKind::Sphere3d => "3D sphere",
            PrimitiveKind::Capsule3d => "3D capsule",
            PrimitiveKind::Mesh3d => "3D mesh",
        };
        f.pad(name)
    }
}

/// The geometry of a primitive, expressed in the local frame of its pose.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveShape {
    /// A 2D box.
    Box2d(Box2d),
    /// A 2D circle.
    Circle(Circle),
    /// A 2D capsule.
    Capsule2d(Capsule2d),
    /// A 2D composite.
    Composite(Composite),
    /// A 2D edge chain.
    Edge(EdgeChain),
    /// A 3D box.
    Box3d(Box3d),
    /// A 3D sphere.
    Sphere(Sphere),
    /// A 3D capsule.
    Capsule3d(Capsule3d),
}

impl PrimitiveShape {
    /// The kind of this primitive.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveShape::Box2d(_) => PrimitiveKind::Box2d,
            PrimitiveShape::Circle(_) => PrimitiveKind::Circle2d,
            PrimitiveShape::Capsule2d(_) => PrimitiveKind::Capsule2d,
            PrimitiveShape::Composite(_) => PrimitiveKind::Composite2d,
            PrimitiveShape::Edge(_) => PrimitiveKind::Edge2d,
            PrimitiveShape::Box3d(_) => PrimitiveKind::Box3d,
            PrimitiveShape::Sphere(_) => PrimitiveKind::Sphere3d,
            PrimitiveShape::Capsule3d(_) => PrimitiveKind::Capsule3d,
        }
    }

    /// The translation of the geometry relative to its pose.
    ///
    /// This is the `offset` of 2D primitives (with a zero `z`) and the local
    /// `center` of 3D primitives.
    pub fn local_offset(&self) -> Vector<Real> {
        match self {
            PrimitiveShape::Box2d(s) => lift_vector(&s.offset),
            PrimitiveShape::Circle(s) => lift_vector(&s.offset),
            PrimitiveShape::Capsule2d(s) => lift_vector(&s.offset),
            PrimitiveShape::Composite(s) => lift_vector(&s.offset),
            PrimitiveShape::Edge(s) => lift_vector(&s.offset),
            PrimitiveShape::Box3d(s) => s.center,
            PrimitiveShape::Sphere(s) => s.center,
            PrimitiveShape::Capsule3d(s) => s.center,
        }
    }

    /// Moves the geometry relative to its pose.
    ///
    /// 2D primitives only keep the `x` and `y` components.
    pub fn set_local_offset(&mut self, offset: Vector<Real>) {
        let planar = offset.xy();
        match self {
            PrimitiveShape::Box2d(s) => s.offset = planar,
            PrimitiveShape::Circle(s) => s.offset = planar,
            PrimitiveShape::Capsule2d(s) => s.offset = planar,
            PrimitiveShape::Composite(s) => s.offset = planar,
            PrimitiveShape::Edge(s) => s.offset = planar,
            PrimitiveShape::Box3d(s) => s.center = offset,
            PrimitiveShape::Sphere(s) => s.center = offset,
            PrimitiveShape::Capsule3d(s) => s.center = offset,
        }
    }

    /// The radius of round primitives, `None` for the others.
    pub fn radius(&self) -> Option<Real> {
        match self {
            PrimitiveShape::Circle(s) => Some(s.radius),
            PrimitiveShape::Sphere(s) => Some(s.radius),
            PrimitiveShape::Capsule2d(s) => Some(s.radius()),
            PrimitiveShape::Capsule3d(s) => Some(s.radius),
            _ => None,
        }
    }
}

/// Everything a backend tracks about one live primitive.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// The geometry, in the local frame of `pose`.
    pub shape: PrimitiveShape,
    /// The world transform of the owning object.
    pub pose: Isometry<Real>,
    /// Whether the primitive participates in queries.
    pub enabled: bool,
    /// Whether the primitive is trigger-only rather than solid.
    pub is_trigger: bool,
    /// The layer index (`0..32`) of the primitive.
    pub layer: u32,
    /// The object owning this primitive.
    pub owner: OwnerHandle,
}

impl Primitive {
    /// Creates an enabled, solid primitive on layer 0.
    pub fn new(shape: impl Into<PrimitiveShape>, pose: Isometry<Real>, owner: OwnerHandle) -> Self {
        Self {
            shape: shape.into(),
            pose,
            enabled: true,
            is_trigger: false,
            layer: 0,
            owner,
        }
    }

    /// Puts this primitive on the given layer.
    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }

    /// Marks this primitive as trigger-only.
    pub fn with_trigger(mut self, is_trigger: bool) -> Self {
        self.is_trigger = is_trigger;
        self
    }

    /// The kind of this primitive.
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }
}

macro_rules! impl_as_shape(
    ($($as_shape: ident, $as_shape_mut: ident => $Variant: ident($Shape: ident)),*) => {
        impl PrimitiveShape {$(
            #[doc = concat!(
                "Returns a reference to the underlying `",
                stringify!($Shape),
                "`, if there is one."
            )]
            #[inline]
            pub fn $as_shape(&self) -> Option<&$Shape> {
                match self {
                    PrimitiveShape::$Variant(shape) => Some(shape),
                    _ => None,
                }
            }

            #[doc = concat!(
                "Returns a mutable reference to the underlying `",
                stringify!($Shape),
                "`, if there is one."
            )]
            #[inline]
            pub fn $as_shape_mut(&mut self) -> Option<&mut $Shape> {
                match self {
                    PrimitiveShape::$Variant(shape) => Some(shape),
                    _ => None,
                }
            }
        )*}
    }
);

impl_as_shape!(
    as_box_2d, as_box_2d_mut => Box2d(Box2d),
    as_circle, as_circle_mut => Circle(Circle),
    as_capsule_2d, as_capsule_2d_mut => Capsule2d(Capsule2d),
    as_composite, as_composite_mut => Composite(Composite),
    as_edge, as_edge_mut => Edge(EdgeChain),
    as_box_3d, as_box_3d_mut => Box3d(Box3d),
    as_sphere, as_sphere_mut => Sphere(Sphere),
    as_capsule_3d, as_capsule_3d_mut => Capsule3d(Capsule3d)
);

macro_rules! impl_from_shape(
    ($($Shape: ident => $Variant: ident),*) => {$(
        impl From<$Shape> for PrimitiveShape {
            #[inline]
            fn from(shape: $Shape) -> Self {
                PrimitiveShape::$Variant(shape)
            }
        }
    )*}
);

impl_from_shape!(
    Box2d => Box2d,
    Circle => Circle,
    Capsule2d => Capsule2d,
    Composite => Composite,
    EdgeChain => Edge,
    Box3d => Box3d,
    Sphere => Sphere,
    Capsule3d => Capsule3d
);
