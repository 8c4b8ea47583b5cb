//! Point-defined 2D primitives.

use crate::math::{Point2, Real, Vector2};

/// How the paths of a [`Composite`] are interpreted.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CompositeGeometry {
    /// Each path is a hollow closed outline.
    #[default]
    Outlines,
    /// Each path is a solid polygon.
    ///
    /// Point-overlap queries only detect composites using this geometry.
    Polygons,
}

/// A 2D primitive merging several paths into one collider.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Composite {
    /// The translation applied to every path relative to the pose.
    pub offset: Vector2<Real>,
    /// The closed paths making up this composite.
    pub polygons: Vec<Vec<Point2<Real>>>,
    /// How the paths are interpreted.
    pub geometry: CompositeGeometry,
}

impl Composite {
    /// Creates a new composite from its closed paths.
    pub fn new(polygons: Vec<Vec<Point2<Real>>>, geometry: CompositeGeometry) -> Self {
        Self {
            offset: Vector2::zeros(),
            polygons,
            geometry,
        }
    }

    /// Translates every path relative to the pose.
    pub fn with_offset(mut self, offset: Vector2<Real>) -> Self {
        self.offset = offset;
        self
    }

    /// All the vertices of this composite, offset included.
    pub fn points(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.polygons
            .iter()
            .flat_map(|polygon| polygon.iter())
            .map(move |pt| pt + self.offset)
    }
}

/// A 2D primitive made of a chain of connected segments.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Clone, Default)]
pub struct EdgeChain {
    /// The translation applied to every point relative to the pose.
    pub offset: Vector2<Real>,
    /// The vertices of the chain; consecutive points form one edge.
    pub points: Vec<Point2<Real>>,
}

impl EdgeChain {
    /// Creates a new chain from its vertices.
    pub fn new(points: Vec<Point2<Real>>) -> Self {
        Self {
            offset: Vector2::zeros(),
            points,
        }
    }

    /// Translates every point relative to the pose.
    pub fn with_offset(mut self, offset: Vector2<Real>) -> Self {
        self.offset = offset;
        self
    }

    /// The number of edges of this chain.
    pub fn num_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Iterates through the edges of this chain, offset included.
    pub fn segments(&self) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
        self.points
            .windows(2)
            .map(move |w| (w[0] + self.offset, w[1] + self.offset))
    }
}
