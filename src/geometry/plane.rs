use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, PLANE_EPSILON, TOLERANCE};

/// An oriented plane `normal · p = w`.
///
/// The normal is unit length; the front side is the one it points into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    w: f64,
}

/// Position of a polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonSide {
    Coplanar,
    Front,
    Back,
    Spanning,
}

impl Plane {
    /// Creates a plane through `point` with the given normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the normal is zero-length.
    pub fn from_normal(point: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            w: normal.dot(&point.coords),
        })
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance from the plane; positive on the front side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.w
    }

    /// Returns the same plane facing the other way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Classifies a loop of points against the plane.
    #[must_use]
    pub fn classify(&self, points: &[Point3]) -> PolygonSide {
        let mut front = false;
        let mut back = false;
        for p in points {
            let t = self.signed_distance(p);
            if t > PLANE_EPSILON {
                front = true;
            } else if t < -PLANE_EPSILON {
                back = true;
            }
        }
        match (front, back) {
            (false, false) => PolygonSide::Coplanar,
            (true, false) => PolygonSide::Front,
            (false, true) => PolygonSide::Back,
            (true, true) => PolygonSide::Spanning,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn signed_distance_along_normal() {
        let plane = Plane::from_normal(p(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, 3.0)).unwrap();
        assert!((plane.signed_distance(&p(5.0, 1.0, 5.0)) - 3.0).abs() < TOLERANCE);
        assert!((plane.normal().norm() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn flipped_swaps_sides() {
        let plane = Plane::from_normal(p(0.0, 0.0, 0.0), Vector3::x()).unwrap();
        let q = p(1.0, 0.0, 0.0);
        assert!(plane.signed_distance(&q) > 0.0);
        assert!(plane.flipped().signed_distance(&q) < 0.0);
    }

    #[test]
    fn classify_spanning_and_coplanar() {
        let plane = Plane::from_normal(p(0.0, 0.0, 0.0), Vector3::z()).unwrap();
        let spanning = [p(0.0, 0.0, -1.0), p(1.0, 0.0, 1.0), p(0.0, 1.0, 1.0)];
        let flat = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        assert_eq!(plane.classify(&spanning), PolygonSide::Spanning);
        assert_eq!(plane.classify(&flat), PolygonSide::Coplanar);
    }

    #[test]
    fn zero_normal_fails() {
        assert!(Plane::from_normal(p(0.0, 0.0, 0.0), Vector3::zeros()).is_err());
    }
}
