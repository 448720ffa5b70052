use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Profile;
use crate::math::{Point3, TOLERANCE};
use crate::topology::{Polygon, SolidData, SolidId, SolidStore};

/// Extrudes a convex profile linearly along +Z to create a prism.
///
/// The bottom cap lies on `z = 0` and the top cap on `z = height`.
pub struct Extrude {
    profile: Profile,
    height: f64,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(profile: Profile, height: f64) -> Self {
        Self { profile, height }
    }

    /// Executes the extrusion, creating the solid in the solid store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the height is not positive,
    /// or [`GeometryError::NonConvexProfile`] for a concave profile.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let polygons = prism_polygons(&self.profile, Point3::origin(), self.height)?;
        Ok(store.add_solid(SolidData::new(polygons)))
    }
}

/// Boundary polygons of `profile` extruded by `height`, with the profile
/// origin moved to `base`.
pub(crate) fn prism_polygons(profile: &Profile, base: Point3, height: f64) -> Result<Vec<Polygon>> {
    if !height.is_finite() || height < TOLERANCE {
        return Err(OperationError::InvalidInput(format!(
            "extrusion height must be positive, got {height}"
        ))
        .into());
    }
    if !profile.is_convex() {
        return Err(GeometryError::NonConvexProfile.into());
    }

    let bottom: Vec<Point3> = profile
        .points()
        .iter()
        .map(|q| Point3::new(base.x + q.x, base.y + q.y, base.z))
        .collect();
    let top: Vec<Point3> = bottom
        .iter()
        .map(|v| Point3::new(v.x, v.y, v.z + height))
        .collect();

    let n = bottom.len();
    let mut polygons = Vec::with_capacity(n + 2);
    // Profile winds counter-clockwise: reversed it faces -Z.
    polygons.push(Polygon::new(bottom.iter().rev().copied().collect())?);
    polygons.push(Polygon::new(top.clone())?);
    for i in 0..n {
        let j = (i + 1) % n;
        polygons.push(Polygon::new(vec![bottom[i], bottom[j], top[j], top[i]])?);
    }
    Ok(polygons)
}
