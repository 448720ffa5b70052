use tracing::{debug, debug_span, info};

use crate::error::{ConfigError, Result, Stage, StageExt};
use crate::math::{Point2, Vector3};
use crate::operations::boolean::{Subtract, Union, UnionAll};
use crate::operations::creation::DEFAULT_SEGMENTS;
use crate::operations::query::BoundingBox;
use crate::operations::transform::Translate;
use crate::topology::{SolidId, SolidStore};

use super::config::{CellParams, HardwareConfig, KeychainConfig};
use super::grid::{Grid, StylePolicy};
use super::keychain::BuildKeychain;
use super::keyhole::{MakeKeyhole, MakeKeyholeBox, PlaceHardware};
use super::lattice::{AssembleLattice, Lattice};
use super::placement::{KeyholePlacement, ResolvePlacement};

/// Fewest circle segments the torus loop and cylinders can be built with.
pub const MIN_SEGMENTS: usize = 6;

/// Distance between the panel and the keychain, in medallion depths.
const KEYCHAIN_GAP: f64 = 1.5;

/// Adds mounting hardware and the optional keychain to a measured lattice.
///
/// Both support plugs are fused onto the panel first, then both keyholes
/// are cut in one subtraction.
pub struct ComposePanel {
    lattice: Lattice,
    keyholes: [Point2; 2],
    hardware: HardwareConfig,
    keychain: Option<(CellParams, KeychainConfig)>,
    segments: usize,
}

impl ComposePanel {
    /// Creates a new `ComposePanel` operation.
    #[must_use]
    pub fn new(lattice: Lattice, keyholes: [Point2; 2], hardware: HardwareConfig) -> Self {
        Self {
            lattice,
            keyholes,
            hardware,
            keychain: None,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Appends a keychain medallion built from `params` below the finished
    /// panel, plugs included.
    #[must_use]
    pub fn with_keychain(mut self, params: CellParams, config: KeychainConfig) -> Self {
        self.keychain = Some((params, config));
        self
    }

    /// Sets the curve resolution of the hardware and keychain.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the composition.
    ///
    /// # Errors
    ///
    /// Returns an error tagged with [`Stage::Keyhole`] or
    /// [`Stage::Composition`] if a step degenerates.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let plug = MakeKeyholeBox::new(self.hardware)
            .with_segments(self.segments)
            .execute(store)?;
        let keyhole = MakeKeyhole::new(self.hardware)
            .with_segments(self.segments)
            .execute(store)?;

        let mut body = vec![self.lattice.solid];
        let mut cutters = Vec::with_capacity(self.keyholes.len());
        for at in self.keyholes {
            body.push(PlaceHardware::new(plug, at, self.hardware).execute(store)?);
            cutters.push(PlaceHardware::new(keyhole, at, self.hardware).execute(store)?);
        }
        let body = UnionAll::new(body).execute(store).stage(Stage::Composition)?;
        let cutter = UnionAll::new(cutters).execute(store).stage(Stage::Composition)?;
        let panel = Subtract::new(body, cutter)
            .execute(store)
            .stage(Stage::Composition)?;
        debug!(polygons = store.solid(panel)?.polygons.len(), "cut keyholes");

        let Some((params, config)) = self.keychain else {
            return Ok(panel);
        };
        let keychain = BuildKeychain::new(params, config)
            .with_segments(self.segments)
            .execute(store)?;
        let bounds = BoundingBox::new(keychain.solid)
            .execute(store)
            .stage(Stage::Composition)?;
        // Measure after the plugs are fused, they can reach below the lattice.
        let panel_bounds = BoundingBox::new(panel)
            .execute(store)
            .stage(Stage::Composition)?;
        let target_y = panel_bounds.min.y - KEYCHAIN_GAP * keychain.medallion_depth;
        let shift = Vector3::new(
            panel_bounds.center().x - bounds.center().x,
            target_y - bounds.center().y,
            0.0,
        );
        let keychain = Translate::new(keychain.solid, shift)
            .execute(store)
            .stage(Stage::Composition)?;
        Union::new(panel, keychain)
            .execute(store)
            .stage(Stage::Composition)
    }
}

/// Generates a complete honeycomb wall panel from a style grid.
///
/// The lattice is built and measured first; keyhole positions are resolved
/// against its bounds, then the hardware and keychain are composed onto it.
/// Every intermediate solid stays in the store, the returned id is the
/// finished panel.
///
/// # Example
///
/// ```no_run
/// use honeycomb_panel::honeycomb::{CellParams, GeneratePanel, Grid, KeyholePlacement, StylePolicy};
/// use honeycomb_panel::topology::SolidStore;
///
/// let grid = Grid::parse(&[vec![1, 3, 1], vec![2, 1]], StylePolicy::Fallback)?;
/// let params = CellParams::new(10.0, 1.0, 7.0, 1.0);
/// let placement = KeyholePlacement::derived(60.0, 0.0, 0.0, 0.0);
///
/// let mut store = SolidStore::new();
/// let _panel = GeneratePanel::new(grid, params, placement).execute(&mut store)?;
/// # Ok::<(), honeycomb_panel::HoneycombError>(())
/// ```
pub struct GeneratePanel {
    grid: Grid,
    params: CellParams,
    placement: KeyholePlacement,
    hardware: HardwareConfig,
    keychain: Option<KeychainConfig>,
    segments: usize,
}

impl GeneratePanel {
    /// Creates a new `GeneratePanel` operation with default hardware and
    /// the keychain enabled.
    #[must_use]
    pub fn new(grid: Grid, params: CellParams, placement: KeyholePlacement) -> Self {
        Self {
            grid,
            params,
            placement,
            hardware: HardwareConfig::default(),
            keychain: Some(KeychainConfig::default()),
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Replaces the mounting hardware dimensions.
    #[must_use]
    pub fn with_hardware(mut self, hardware: HardwareConfig) -> Self {
        self.hardware = hardware;
        self
    }

    /// Sets the keychain loop, or disables the keychain with `None`.
    #[must_use]
    pub fn with_keychain(mut self, keychain: Option<KeychainConfig>) -> Self {
        self.keychain = keychain;
        self
    }

    /// Sets the number of segments used for every full circle.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Checks the whole configuration without building any geometry.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.params.validate()?;
        self.hardware.validate()?;
        if let Some(keychain) = &self.keychain {
            keychain.validate()?;
        }
        self.placement.validate()?;
        if self.segments < MIN_SEGMENTS {
            #[allow(clippy::cast_precision_loss)]
            let (value, min) = (self.segments as f64, MIN_SEGMENTS as f64);
            return Err(ConfigError::OutOfRange {
                parameter: "segments",
                value,
                min,
                max: f64::INFINITY,
            });
        }
        if self.grid.solid_cell_count() == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        Ok(())
    }

    /// Executes the pipeline, returning the finished panel.
    ///
    /// # Errors
    ///
    /// Returns [`HoneycombError::Config`](crate::HoneycombError::Config) for
    /// invalid configuration before any geometry is built, or a
    /// [`HoneycombError::Stage`](crate::HoneycombError::Stage) naming the
    /// step that failed.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        self.validate()?;
        let _span = debug_span!("generate_panel", cells = self.grid.solid_cell_count()).entered();

        let lattice = AssembleLattice::new(&self.grid, self.params)
            .with_segments(self.segments)
            .execute(store)?;
        let keyholes = ResolvePlacement::new(&self.placement, &lattice.bounds).execute()?;

        let mut compose =
            ComposePanel::new(lattice, keyholes, self.hardware).with_segments(self.segments);
        if let Some(config) = self.keychain {
            compose = compose.with_keychain(self.params, config);
        }
        let panel = compose.execute(store)?;

        info!(
            cells = lattice.cells,
            polygons = store.solid(panel)?.polygons.len(),
            keychain = self.keychain.is_some(),
            "generated panel"
        );
        Ok(panel)
    }
}

/// Parses numeric style codes and generates a panel in a fresh store.
///
/// Unknown codes fall back to open frames; build a [`Grid`] with
/// [`StylePolicy::Reject`] and use [`GeneratePanel`] directly to reject
/// them instead.
///
/// # Errors
///
/// See [`GeneratePanel::execute`].
pub fn generate(
    rows: &[Vec<i32>],
    params: CellParams,
    placement: KeyholePlacement,
) -> Result<(SolidStore, SolidId)> {
    let grid = Grid::parse(rows, StylePolicy::default())?;
    let mut store = SolidStore::new();
    let panel = GeneratePanel::new(grid, params, placement).execute(&mut store)?;
    Ok((store, panel))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HoneycombError;
    use crate::operations::query::Volume;

    fn params() -> CellParams {
        CellParams::new(10.0, 1.0, 7.0, 1.0)
    }

    fn centered() -> KeyholePlacement {
        KeyholePlacement::derived(0.0, 0.0, 0.0, 0.0)
    }

    #[test]
    fn invalid_params_fail_before_geometry() {
        let grid = Grid::parse(&[vec![1]], StylePolicy::Reject).unwrap();
        let bad = CellParams::new(10.0, 20.0, 7.0, 1.0);
        let mut store = SolidStore::new();
        let err = GeneratePanel::new(grid, bad, centered())
            .execute(&mut store)
            .unwrap_err();
        assert!(matches!(err, HoneycombError::Config(ConfigError::OutOfRange { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn empty_grid_fails_before_geometry() {
        let mut store = SolidStore::new();
        let err = GeneratePanel::new(Grid::default(), params(), centered())
            .execute(&mut store)
            .unwrap_err();
        assert!(matches!(err, HoneycombError::Config(ConfigError::EmptyGrid)));
        assert!(store.is_empty());
    }

    #[test]
    fn too_few_segments_rejected() {
        let grid = Grid::parse(&[vec![1]], StylePolicy::Reject).unwrap();
        let op = GeneratePanel::new(grid, params(), centered()).with_segments(4);
        assert!(matches!(
            op.validate(),
            Err(ConfigError::OutOfRange { parameter: "segments", .. })
        ));
    }

    #[test]
    fn keychain_extends_panel_downward() {
        let grid = Grid::parse(&[vec![1]], StylePolicy::Reject).unwrap();
        let mut store = SolidStore::new();
        let plain = GeneratePanel::new(grid.clone(), params(), centered())
            .with_keychain(None)
            .execute(&mut store)
            .unwrap();
        let with_keychain = GeneratePanel::new(grid, params(), centered())
            .execute(&mut store)
            .unwrap();

        let plain_bb = BoundingBox::new(plain).execute(&store).unwrap();
        let keychain_bb = BoundingBox::new(with_keychain).execute(&store).unwrap();
        assert!(keychain_bb.min.y < plain_bb.min.y);
        assert!(
            Volume::new(with_keychain).execute(&store).unwrap()
                > Volume::new(plain).execute(&store).unwrap()
        );
    }

    #[test]
    fn generate_parses_with_fallback() {
        let (store, panel) = generate(&[vec![9]], params(), centered()).unwrap();
        assert!(Volume::new(panel).execute(&store).unwrap() > 0.0);
    }
}
