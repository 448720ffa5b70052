use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{Polygon, SolidData, SolidId, SolidStore};

use super::DEFAULT_SEGMENTS;

/// Creates a torus solid lying in the XY plane around a center point.
///
/// `P(u, v) = center + (R + r*cos(v)) * (cos(u), sin(u), 0) + r*sin(v) * Z`
///
/// The ring is divided into `segments` steps and the tube into half as many.
pub struct MakeTorus {
    center: Point3,
    major_radius: f64,
    minor_radius: f64,
    segments: usize,
}

impl MakeTorus {
    /// Creates a new `MakeTorus` operation.
    #[must_use]
    pub fn new(center: Point3, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            center,
            major_radius,
            minor_radius,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the number of steps around the ring.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation, creating the torus in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is not positive, the tube radius
    /// reaches the ring radius, or fewer than six segments are requested.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if !(self.minor_radius.is_finite() && self.minor_radius > TOLERANCE) {
            return Err(
                OperationError::InvalidInput("torus minor radius must be positive".into()).into(),
            );
        }
        if !self.major_radius.is_finite() || self.minor_radius >= self.major_radius {
            return Err(OperationError::InvalidInput(
                "torus minor radius must be less than major radius".into(),
            )
            .into());
        }
        if self.segments < 6 {
            return Err(OperationError::InvalidInput(format!(
                "torus needs at least 6 segments, got {}",
                self.segments
            ))
            .into());
        }

        let ring = self.segments;
        let tube = (self.segments / 2).max(3);
        let point = |i: usize, j: usize| {
            #[allow(clippy::cast_precision_loss)]
            let (u, v) = (
                TAU * (i % ring) as f64 / ring as f64,
                TAU * (j % tube) as f64 / tube as f64,
            );
            let rho = self.major_radius + self.minor_radius * v.cos();
            self.center + Vector3::new(rho * u.cos(), rho * u.sin(), self.minor_radius * v.sin())
        };

        let mut polygons = Vec::with_capacity(ring * tube);
        for i in 0..ring {
            for j in 0..tube {
                // Increasing u then increasing v winds outward.
                polygons.push(Polygon::new(vec![
                    point(i, j),
                    point(i + 1, j),
                    point(i + 1, j + 1),
                    point(i, j + 1),
                ])?);
            }
        }
        Ok(store.add_solid(SolidData::new(polygons)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{BoundingBox, Volume};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn torus_extent() {
        let mut store = SolidStore::new();
        let solid = MakeTorus::new(p(0.0, 0.0, 1.0), 3.0, 1.0)
            .execute(&mut store)
            .unwrap();

        let aabb = BoundingBox::new(solid).execute(&store).unwrap();
        assert_relative_eq!(aabb.max.x, 4.0, epsilon = 1e-9);
        assert_relative_eq!(aabb.min.x, -4.0, epsilon = 1e-9);
        assert!(aabb.max.z <= 2.0 + 1e-9);
        assert!(Volume::new(solid).execute(&store).unwrap() > 0.0);
    }

    #[test]
    fn fat_tube_fails() {
        let mut store = SolidStore::new();
        let result = MakeTorus::new(p(0.0, 0.0, 0.0), 1.0, 1.0).execute(&mut store);
        assert!(result.is_err());
    }
}
