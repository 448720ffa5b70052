use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};

use tracing::debug;

use crate::error::{Result, Stage, StageExt};
use crate::geometry::Profile;
use crate::math::{Point3, Vector3};
use crate::operations::boolean::{Subtract, Union};
use crate::operations::creation::{MakeBox, DEFAULT_SEGMENTS};
use crate::operations::shaping::Extrude;
use crate::operations::transform::{Rotate, Translate};
use crate::topology::{SolidId, SolidStore};

use super::config::CellParams;
use super::grid::CellStyle;
use super::rounded_hexagon::RoundedHexagon;

/// Infill span relative to the cavity span; inscribes the rotated disc.
pub const INFILL_RATIO: f64 = 0.8658;

/// Builds the solid of one cell, centered on the origin and standing on `z = 0`.
///
/// The wall is an outer hexagon of span `size + 2·thickness` minus an inner
/// hexagon of span `size`. Open frames cut straight through; closed frames
/// keep a floor of `thickness / 2`.
pub struct BuildCell {
    style: CellStyle,
    params: CellParams,
    segments: usize,
}

impl BuildCell {
    /// Creates a new `BuildCell` operation.
    #[must_use]
    pub fn new(style: CellStyle, params: CellParams) -> Self {
        Self {
            style,
            params,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the curve resolution of the infill.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation.
    ///
    /// Returns `None` for [`CellStyle::Empty`].
    ///
    /// # Errors
    ///
    /// Returns an error tagged with [`Stage::Profile`] or [`Stage::Cell`] if
    /// a construction step degenerates.
    pub fn execute(&self, store: &mut SolidStore) -> Result<Option<SolidId>> {
        let floor_shift = match self.style {
            CellStyle::Empty => return Ok(None),
            CellStyle::OpenFrame => -self.params.thickness,
            CellStyle::ClosedFrame | CellStyle::FrameWithInfill => self.params.thickness / 2.0,
        };
        let wall = self.wall(store, floor_shift)?;
        let cell = if self.style == CellStyle::FrameWithInfill {
            let infill = BuildInfill::new(self.params)
                .with_segments(self.segments)
                .execute(store)?;
            Union::new(wall, infill).execute(store).stage(Stage::Cell)?
        } else {
            wall
        };
        debug!(style = ?self.style, polygons = store.solid(cell)?.polygons.len(), "built cell");
        Ok(Some(cell))
    }

    fn wall(&self, store: &mut SolidStore, floor_shift: f64) -> Result<SolidId> {
        let CellParams {
            size,
            thickness,
            height,
            ..
        } = self.params;
        let outer_profile = Profile::hexagon(self.params.outer_size()).stage(Stage::Profile)?;
        let inner_profile = Profile::hexagon(size).stage(Stage::Profile)?;

        let outer = Extrude::new(outer_profile, height)
            .execute(store)
            .stage(Stage::Cell)?;
        let inner = Extrude::new(inner_profile, height + 2.0 * thickness)
            .execute(store)
            .stage(Stage::Cell)?;
        let inner = Translate::new(inner, Vector3::new(0.0, 0.0, floor_shift))
            .execute(store)
            .stage(Stage::Cell)?;
        Subtract::new(outer, inner).execute(store).stage(Stage::Cell)
    }
}

/// Builds the decorative rounded-hexagon disc of an infilled cell.
///
/// Inside a cell the disc is cut down to the upper half of the cavity and its
/// top sits `inset` below the rim. In standalone mode it is left whole,
/// `height` thick and resting on `z = 0`, which is how the keychain medallion
/// is made.
pub struct BuildInfill {
    params: CellParams,
    standalone: bool,
    segments: usize,
}

impl BuildInfill {
    /// Creates a new `BuildInfill` operation for use inside a cell.
    #[must_use]
    pub fn new(params: CellParams) -> Self {
        Self {
            params,
            standalone: false,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Builds the disc unclipped, resting on `z = 0`.
    #[must_use]
    pub fn standalone(mut self) -> Self {
        self.standalone = true;
        self
    }

    /// Sets the curve resolution of the rounded rims.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error tagged with [`Stage::Cell`] if a construction step
    /// degenerates.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let CellParams {
            size,
            height,
            radius,
            inset,
            ..
        } = self.params;
        // In a cell the prism runs `radius` longer so the lifted top lands
        // at `height - inset`.
        let length = if self.standalone {
            height
        } else {
            height + radius
        };
        let disc = RoundedHexagon::new(INFILL_RATIO * size, length, radius)
            .with_segments(self.segments)
            .execute(store)
            .stage(Stage::Cell)?;
        // Lay the prism axis along Z and turn a vertex onto the X axis.
        let disc = Rotate::new(disc, Vector3::new(FRAC_PI_2, 0.0, FRAC_PI_6))
            .execute(store)
            .stage(Stage::Cell)?;

        if self.standalone {
            return Translate::new(disc, Vector3::new(0.0, 0.0, height / 2.0))
                .execute(store)
                .stage(Stage::Cell);
        }

        let lift = (height - radius) / 2.0 - inset;
        let disc = Translate::new(disc, Vector3::new(0.0, 0.0, lift))
            .execute(store)
            .stage(Stage::Cell)?;
        let clip = MakeBox::new(Point3::origin(), Vector3::new(size, size, height))
            .execute(store)
            .stage(Stage::Cell)?;
        Subtract::new(disc, clip).execute(store).stage(Stage::Cell)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{BoundingBox, Volume};
    use approx::assert_relative_eq;

    fn params() -> CellParams {
        CellParams::new(10.0, 1.0, 7.0, 1.0)
    }

    fn hex_area(span: f64) -> f64 {
        3.0 * 3.0_f64.sqrt() / 8.0 * span * span
    }

    #[test]
    fn empty_cell_has_no_geometry() {
        let mut store = SolidStore::new();
        let cell = BuildCell::new(CellStyle::Empty, params())
            .execute(&mut store)
            .unwrap();
        assert!(cell.is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn open_frame_volume_is_hexagon_ring() {
        let mut store = SolidStore::new();
        let cell = BuildCell::new(CellStyle::OpenFrame, params())
            .execute(&mut store)
            .unwrap()
            .unwrap();
        let volume = Volume::new(cell).execute(&store).unwrap();
        assert_relative_eq!(volume, (hex_area(12.0) - hex_area(10.0)) * 7.0, epsilon = 1e-6);

        let bb = BoundingBox::new(cell).execute(&store).unwrap();
        assert_relative_eq!(bb.min.z, 0.0, epsilon = 1e-9);
        assert_relative_eq!(bb.max.z, 7.0, epsilon = 1e-9);
        assert_relative_eq!(bb.size().x, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn closed_frame_keeps_half_thickness_floor() {
        let mut store = SolidStore::new();
        let cell = BuildCell::new(CellStyle::ClosedFrame, params())
            .execute(&mut store)
            .unwrap()
            .unwrap();
        let volume = Volume::new(cell).execute(&store).unwrap();
        let expected = hex_area(12.0) * 7.0 - hex_area(10.0) * 6.5;
        assert_relative_eq!(volume, expected, epsilon = 1e-6);
    }

    #[test]
    fn infill_stays_in_upper_half_of_footprint() {
        let mut store = SolidStore::new();
        let infill = BuildInfill::new(params()).execute(&mut store).unwrap();
        let bb = BoundingBox::new(infill).execute(&store).unwrap();
        assert!(bb.min.z >= 3.5 - 1e-6);
        assert!(bb.max.z <= 7.0);
        assert!(bb.min.x >= -5.0 && bb.max.x <= 5.0);
        assert!(bb.min.y >= -5.0 && bb.max.y <= 5.0);
    }

    #[test]
    fn infill_top_sits_inset_below_rim() {
        let mut store = SolidStore::new();
        let default_inset = params();
        let infill = BuildInfill::new(default_inset).execute(&mut store).unwrap();
        let bb = BoundingBox::new(infill).execute(&store).unwrap();
        assert_relative_eq!(bb.max.z, 7.0 - default_inset.inset, epsilon = 1e-6);
        assert_relative_eq!(bb.min.z, 3.5, epsilon = 1e-6);

        let flush = params().with_inset(0.0);
        let infill = BuildInfill::new(flush).execute(&mut store).unwrap();
        let bb = BoundingBox::new(infill).execute(&store).unwrap();
        assert_relative_eq!(bb.max.z, 7.0, epsilon = 1e-6);

        let sharp = CellParams::new(10.0, 1.0, 7.0, 0.0).with_inset(0.5);
        let infill = BuildInfill::new(sharp).execute(&mut store).unwrap();
        let bb = BoundingBox::new(infill).execute(&store).unwrap();
        assert_relative_eq!(bb.max.z, 6.5, epsilon = 1e-6);
    }

    #[test]
    fn standalone_infill_rests_on_ground() {
        let mut store = SolidStore::new();
        let disc = BuildInfill::new(params()).standalone().execute(&mut store).unwrap();
        let bb = BoundingBox::new(disc).execute(&store).unwrap();
        assert_relative_eq!(bb.min.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(bb.max.z, 7.0, epsilon = 1e-6);
        // A vertex points along X after the 30° turn.
        assert!(bb.size().x > bb.size().y);
    }

    #[test]
    fn infilled_cell_outweighs_open_frame() {
        let mut store = SolidStore::new();
        let open = BuildCell::new(CellStyle::OpenFrame, params())
            .execute(&mut store)
            .unwrap()
            .unwrap();
        let filled = BuildCell::new(CellStyle::FrameWithInfill, params())
            .execute(&mut store)
            .unwrap()
            .unwrap();
        let open_volume = Volume::new(open).execute(&store).unwrap();
        let filled_volume = Volume::new(filled).execute(&store).unwrap();
        assert!(filled_volume > open_volume);

        let open_bb = BoundingBox::new(open).execute(&store).unwrap();
        let filled_bb = BoundingBox::new(filled).execute(&store).unwrap();
        assert_relative_eq!(open_bb.min.x, filled_bb.min.x, epsilon = 1e-9);
        assert_relative_eq!(open_bb.max.y, filled_bb.max.y, epsilon = 1e-9);
    }
}
