use crate::error::{OperationError, Result};
use crate::geometry::Profile;
use crate::math::{Point3, TOLERANCE};
use crate::operations::shaping::prism_polygons;
use crate::topology::{SolidData, SolidId, SolidStore};

use super::DEFAULT_SEGMENTS;

/// Creates a Z-aligned cylinder solid centered on a point.
///
/// The side is approximated by `segments` planar facets.
pub struct MakeCylinder {
    center: Point3,
    radius: f64,
    height: f64,
    segments: usize,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64, height: f64) -> Self {
        Self {
            center,
            radius,
            height,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the number of side facets.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation, creating the cylinder in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not positive, or fewer
    /// than three segments are requested.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if !self.radius.is_finite() || self.radius < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder radius must be positive".into()).into(),
            );
        }
        let circle = Profile::circle(self.radius, self.segments)?;
        let base = Point3::new(self.center.x, self.center.y, self.center.z - self.height / 2.0);
        let polygons = prism_polygons(&circle, base, self.height)?;
        Ok(store.add_solid(SolidData::new(polygons)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::BoundingBox;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn cylinder_is_centered() {
        let mut store = SolidStore::new();
        let solid = MakeCylinder::new(p(1.0, 0.0, 0.0), 2.0, 6.0)
            .execute(&mut store)
            .unwrap();

        let aabb = BoundingBox::new(solid).execute(&store).unwrap();
        assert_relative_eq!(aabb.min.z, -3.0);
        assert_relative_eq!(aabb.max.z, 3.0);
        assert_relative_eq!(aabb.max.x, 3.0, epsilon = 1e-9);
        assert_eq!(store.solid(solid).unwrap().polygons.len(), DEFAULT_SEGMENTS + 2);
    }

    #[test]
    fn zero_radius_fails() {
        let mut store = SolidStore::new();
        let result = MakeCylinder::new(p(0.0, 0.0, 0.0), 0.0, 5.0).execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn zero_height_fails() {
        let mut store = SolidStore::new();
        let result = MakeCylinder::new(p(0.0, 0.0, 0.0), 3.0, 0.0).execute(&mut store);
        assert!(result.is_err());
    }
}
