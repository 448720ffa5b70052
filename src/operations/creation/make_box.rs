use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{Polygon, SolidData, SolidId, SolidStore};

/// Creates an axis-aligned box solid centered on a point.
pub struct MakeBox {
    center: Point3,
    size: Vector3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(center: Point3, size: Vector3) -> Self {
        Self { center, size }
    }

    /// Executes the operation, creating the box in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge length is not positive.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if self.size.iter().any(|&s| !s.is_finite() || s <= TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "box size must be positive, got {:?}",
                self.size.as_slice()
            ))
            .into());
        }
        let min = self.center - self.size / 2.0;
        let max = self.center + self.size / 2.0;
        let corner = |i: usize| {
            Point3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            )
        };

        // Corner index bits: 1 = +x, 2 = +y, 4 = +z. Each loop winds
        // counter-clockwise seen from outside.
        let faces: [[usize; 4]; 6] = [
            [0, 4, 6, 2], // -x
            [1, 3, 7, 5], // +x
            [0, 1, 5, 4], // -y
            [2, 6, 7, 3], // +y
            [0, 2, 3, 1], // -z
            [4, 5, 7, 6], // +z
        ];
        let polygons = faces
            .iter()
            .map(|face| Polygon::new(face.iter().map(|&i| corner(i)).collect()))
            .collect::<Result<Vec<_>>>()?;
        Ok(store.add_solid(SolidData::new(polygons)))
    }
}
