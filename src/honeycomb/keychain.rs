use tracing::debug;

use crate::error::{Result, Stage, StageExt};
use crate::math::Point3;
use crate::operations::boolean::Union;
use crate::operations::creation::{MakeTorus, DEFAULT_SEGMENTS};
use crate::operations::query::BoundingBox;
use crate::topology::{SolidId, SolidStore};

use super::cell::BuildInfill;
use super::config::{CellParams, KeychainConfig};

/// A keychain medallion with its loop, before placement.
#[derive(Debug, Clone, Copy)]
pub struct Keychain {
    /// Medallion fused with the loop.
    pub solid: SolidId,
    /// Extent of the medallion alone along Y.
    pub medallion_depth: f64,
}

/// Builds a standalone infill medallion with a ring loop on its +Y side.
///
/// The loop lies flat in the XY plane at mid-height and overlaps the
/// medallion's edge by one tube radius.
pub struct BuildKeychain {
    params: CellParams,
    config: KeychainConfig,
    segments: usize,
}

impl BuildKeychain {
    /// Creates a new `BuildKeychain` operation.
    #[must_use]
    pub fn new(params: CellParams, config: KeychainConfig) -> Self {
        Self {
            params,
            config,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the curve resolution of the medallion and loop.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error tagged with [`Stage::Composition`] if the loop
    /// cannot be built or fused.
    pub fn execute(&self, store: &mut SolidStore) -> Result<Keychain> {
        let medallion = BuildInfill::new(self.params)
            .standalone()
            .with_segments(self.segments)
            .execute(store)?;
        let bounds = BoundingBox::new(medallion)
            .execute(store)
            .stage(Stage::Composition)?;

        let KeychainConfig {
            loop_radius,
            loop_thickness,
        } = self.config;
        let center = Point3::new(
            bounds.center().x,
            bounds.max.y + loop_radius - loop_thickness,
            bounds.center().z,
        );
        let ring = MakeTorus::new(center, loop_radius, loop_thickness)
            .with_segments(self.segments)
            .execute(store)
            .stage(Stage::Composition)?;
        let solid = Union::new(medallion, ring)
            .execute(store)
            .stage(Stage::Composition)?;

        let medallion_depth = bounds.size().y;
        debug!(medallion_depth, loop_radius, "built keychain");
        Ok(Keychain {
            solid,
            medallion_depth,
        })
    }
}
