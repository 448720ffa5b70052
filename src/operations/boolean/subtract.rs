use crate::error::Result;
use crate::topology::{SolidId, SolidStore};

use super::engine::{boolean_execute, BooleanOp};

/// Subtracts the tool solid from the base solid.
pub struct Subtract {
    base: SolidId,
    tool: SolidId,
}

impl Subtract {
    /// Creates a new `Subtract` operation computing `base - tool`.
    #[must_use]
    pub fn new(base: SolidId, tool: SolidId) -> Self {
        Self { base, tool }
    }

    /// Executes the subtraction, creating the result solid in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if either solid is missing or nothing of the base remains.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        boolean_execute(store, self.base, self.tool, BooleanOp::Subtract)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeBox, MakeCylinder};
    use crate::operations::query::Volume;

    #[test]
    fn drilled_block_loses_volume() {
        let mut store = SolidStore::new();
        let block = MakeBox::new(Point3::origin(), Vector3::new(4.0, 4.0, 2.0))
            .execute(&mut store)
            .unwrap();
        let drill = MakeCylinder::new(Point3::origin(), 1.0, 4.0)
            .execute(&mut store)
            .unwrap();
        let drilled = Subtract::new(block, drill).execute(&mut store).unwrap();

        let hole = Volume::new(drill).execute(&store).unwrap() / 2.0;
        let volume = Volume::new(drilled).execute(&store).unwrap();
        assert!((volume - (32.0 - hole)).abs() < 1e-6, "got {volume}");
    }
}
