use crate::error::{OperationError, Result};
use crate::math::{Matrix4, TOLERANCE};
use crate::topology::{Polygon, SolidData, SolidId, SolidStore};

/// Applies an arbitrary affine 4x4 transformation matrix to a solid.
pub struct GeneralTransform {
    solid: SolidId,
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(solid: SolidId, matrix: Matrix4) -> Self {
        Self { solid, matrix }
    }

    /// Executes the transformation, inserting the transformed copy as a new solid.
    ///
    /// Mirroring transforms reverse every polygon so normals stay outward.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing or the matrix is singular.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let det = self.matrix.fixed_view::<3, 3>(0, 0).determinant();
        if !det.is_finite() || det.abs() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("transform matrix is singular".into()).into(),
            );
        }
        let solid = store.solid(self.solid)?;
        let polygons = solid
            .polygons
            .iter()
            .map(|polygon| polygon.transformed(&self.matrix))
            .collect::<Result<Vec<Polygon>>>()?;
        Ok(store.add_solid(SolidData::new(polygons)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeBox;
    use crate::operations::query::Volume;
    use approx::assert_relative_eq;

    #[test]
    fn mirror_keeps_positive_volume() {
        let mut store = SolidStore::new();
        let solid = MakeBox::new(Point3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();
        let mirror = Matrix4::new_nonuniform_scaling(&Vector3::new(-1.0, 1.0, 1.0));
        let mirrored = GeneralTransform::new(solid, mirror)
            .execute(&mut store)
            .unwrap();

        assert_relative_eq!(Volume::new(mirrored).execute(&store).unwrap(), 6.0, epsilon = 1e-9);
        // The source solid is left untouched.
        assert_relative_eq!(Volume::new(solid).execute(&store).unwrap(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn singular_matrix_fails() {
        let mut store = SolidStore::new();
        let solid = MakeBox::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let flatten = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 1.0, 0.0));
        assert!(GeneralTransform::new(solid, flatten).execute(&mut store).is_err());
    }
}
