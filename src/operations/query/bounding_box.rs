use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{Polygon, SolidId, SolidStore};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Smallest box containing every vertex of `polygons`, or `None` if there are none.
    #[must_use]
    pub fn from_polygons(polygons: &[Polygon]) -> Option<Self> {
        let mut vertices = polygons.iter().flat_map(|poly| poly.vertices().iter());
        let first = *vertices.next()?;
        let (min, max) = vertices.fold((first, first), |(lo, hi), v| (lo.inf(v), hi.sup(v)));
        Some(Self { min, max })
    }

    /// Edge lengths along X, Y and Z.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns `true` if the boxes intersect or touch.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| {
            self.min[i] <= other.max[i] + TOLERANCE && other.min[i] <= self.max[i] + TOLERANCE
        })
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
}

/// Computes the axis-aligned bounding box of a solid.
pub struct BoundingBox {
    solid: SolidId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing or has no boundary.
    pub fn execute(&self, store: &SolidStore) -> Result<Aabb> {
        let solid = store.solid(self.solid)?;
        Aabb::from_polygons(&solid.polygons)
            .ok_or_else(|| OperationError::EmptyResult("bounding box").into())
    }
}
