use tracing::debug;

use crate::error::{OperationError, Result};
use crate::topology::{Polygon, SolidData, SolidId, SolidStore};

use super::engine::{boolean_polygons, BooleanOp};

/// Fuses any number of solids into one.
///
/// Operands are combined pairwise level by level (a balanced reduction
/// tree), so each boolean only processes the geometry of its own subtree
/// instead of an ever-growing accumulator. The pairing order is fixed, so
/// the result is deterministic.
pub struct UnionAll {
    solids: Vec<SolidId>,
}

impl UnionAll {
    /// Creates a new `UnionAll` operation.
    #[must_use]
    pub fn new(solids: Vec<SolidId>) -> Self {
        Self { solids }
    }

    /// Executes the union, creating the fused solid in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if no solids are given or any solid is missing.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if self.solids.is_empty() {
            return Err(OperationError::InvalidInput("union of zero solids".into()).into());
        }
        let mut level: Vec<Vec<Polygon>> = self
            .solids
            .iter()
            .map(|&id| store.solid(id).map(|solid| solid.polygons.clone()))
            .collect::<std::result::Result<_, _>>()?;

        let mut depth = 0;
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut operands = level.into_iter();
            while let Some(a) = operands.next() {
                match operands.next() {
                    Some(b) => next.push(boolean_polygons(a, b, BooleanOp::Union)?),
                    None => next.push(a),
                }
            }
            level = next;
            depth += 1;
        }
        debug!(operands = self.solids.len(), depth, "fused solids");

        let polygons = level.pop().unwrap_or_default();
        Ok(store.add_solid(SolidData::new(polygons)))
    }
}
