use crate::error::Result;
use crate::math::{Matrix4, Vector3};
use crate::topology::{SolidId, SolidStore};

use super::GeneralTransform;

/// Scales a solid about the origin, per axis.
pub struct Scale {
    solid: SolidId,
    factors: Vector3,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(solid: SolidId, factors: Vector3) -> Self {
        Self { solid, factors }
    }

    /// Executes the scaling, returning the scaled copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing or a factor is zero.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        GeneralTransform::new(self.solid, Matrix4::new_nonuniform_scaling(&self.factors))
            .execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::Volume;
    use approx::assert_relative_eq;

    #[test]
    fn in_plane_half_scale_quarters_volume() {
        let mut store = SolidStore::new();
        let solid = MakeBox::new(Point3::origin(), Vector3::new(2.0, 2.0, 2.0))
            .execute(&mut store)
            .unwrap();
        let scaled = Scale::new(solid, Vector3::new(0.5, 0.5, 1.0))
            .execute(&mut store)
            .unwrap();

        assert_relative_eq!(Volume::new(scaled).execute(&store).unwrap(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_factor_fails() {
        let mut store = SolidStore::new();
        let solid = MakeBox::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        assert!(Scale::new(solid, Vector3::new(1.0, 0.0, 1.0)).execute(&mut store).is_err());
    }
}
