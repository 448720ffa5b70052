use tracing::debug;

use crate::error::{ConfigError, Result, Stage, StageExt};
use crate::math::Vector3;
use crate::operations::boolean::UnionAll;
use crate::operations::creation::DEFAULT_SEGMENTS;
use crate::operations::query::{Aabb, BoundingBox};
use crate::operations::transform::Translate;
use crate::topology::{SolidId, SolidStore};

use super::cell::BuildCell;
use super::config::CellParams;
use super::grid::Grid;

/// Offset of the cell at column `x`, row `y` for a given pitch.
///
/// Columns are `0.75·pitch` apart and odd columns shift half a row up, so
/// neighbouring hexagons share a wall.
#[must_use]
pub fn cell_offset(x: usize, y: usize, pitch: f64) -> Vector3 {
    #[allow(clippy::cast_precision_loss)]
    let (col, row) = (x as f64, y as f64);
    let shift = if x % 2 == 1 { 0.5 } else { 0.0 };
    Vector3::new(
        0.75 * col * pitch,
        3.0_f64.sqrt() * 0.5 * pitch * (shift + row),
        0.0,
    )
}

/// A fused honeycomb lattice and its measured bounds.
#[derive(Debug, Clone, Copy)]
pub struct Lattice {
    /// The fused panel solid.
    pub solid: SolidId,
    /// Bounding box of the panel.
    pub bounds: Aabb,
    /// Number of cells that contributed geometry.
    pub cells: usize,
}

/// Tiles every non-empty cell of a grid and fuses them into one panel.
pub struct AssembleLattice<'a> {
    grid: &'a Grid,
    params: CellParams,
    segments: usize,
}

impl<'a> AssembleLattice<'a> {
    /// Creates a new `AssembleLattice` operation.
    #[must_use]
    pub fn new(grid: &'a Grid, params: CellParams) -> Self {
        Self {
            grid,
            params,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the curve resolution used by infilled cells.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGrid`] if no cell produces geometry, or a
    /// staged error if a cell or the fuse fails.
    pub fn execute(&self, store: &mut SolidStore) -> Result<Lattice> {
        let pitch = self.params.pitch();
        let mut placed = Vec::new();
        for (x, y, style) in self.grid.cells() {
            let Some(cell) = BuildCell::new(style, self.params)
                .with_segments(self.segments)
                .execute(store)?
            else {
                continue;
            };
            let moved = Translate::new(cell, cell_offset(x, y, pitch))
                .execute(store)
                .stage(Stage::Cell)?;
            placed.push(moved);
        }
        if placed.is_empty() {
            return Err(ConfigError::EmptyGrid.into());
        }

        let cells = placed.len();
        let solid = UnionAll::new(placed).execute(store).stage(Stage::Lattice)?;
        let bounds = BoundingBox::new(solid).execute(store).stage(Stage::Lattice)?;
        debug!(
            cells,
            width = bounds.size().x,
            depth = bounds.size().y,
            "assembled lattice"
        );
        Ok(Lattice {
            solid,
            bounds,
            cells,
        })
    }
}
