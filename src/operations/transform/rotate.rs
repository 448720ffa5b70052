use crate::error::Result;
use crate::math::Vector3;
use crate::topology::{SolidId, SolidStore};

use super::GeneralTransform;

/// Rotates a solid about the origin by Euler angles.
///
/// The X rotation is applied first, then Y, then Z.
pub struct Rotate {
    solid: SolidId,
    angles: Vector3,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angles` - Rotation about X, Y and Z in radians.
    #[must_use]
    pub fn new(solid: SolidId, angles: Vector3) -> Self {
        Self { solid, angles }
    }

    /// Rotation about the Y axis only.
    #[must_use]
    pub fn about_y(solid: SolidId, angle: f64) -> Self {
        Self::new(solid, Vector3::new(0.0, angle, 0.0))
    }

    /// Executes the rotation, returning the rotated copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let rotation =
            nalgebra::Rotation3::from_euler_angles(self.angles.x, self.angles.y, self.angles.z);
        GeneralTransform::new(self.solid, rotation.to_homogeneous()).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::BoundingBox;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_about_x_swaps_y_and_z() {
        let mut store = SolidStore::new();
        let solid = MakeBox::new(Point3::origin(), Vector3::new(1.0, 2.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let rotated = Rotate::new(solid, Vector3::new(FRAC_PI_2, 0.0, 0.0))
            .execute(&mut store)
            .unwrap();

        let size = BoundingBox::new(rotated).execute(&store).unwrap().size();
        assert_relative_eq!(size, Vector3::new(1.0, 4.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn x_rotation_applies_before_z() {
        let mut store = SolidStore::new();
        // A box offset along +Y.
        let solid = MakeBox::new(Point3::new(0.0, 5.0, 0.0), Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        // X quarter turn sends +Y to +Z; the Z turn afterwards leaves it there.
        let rotated = Rotate::new(solid, Vector3::new(FRAC_PI_2, 0.0, FRAC_PI_2))
            .execute(&mut store)
            .unwrap();

        let center = BoundingBox::new(rotated).execute(&store).unwrap().center();
        assert_relative_eq!(center, Point3::new(0.0, 0.0, 5.0), epsilon = 1e-9);
    }
}
