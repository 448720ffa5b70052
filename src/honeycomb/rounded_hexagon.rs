use std::f64::consts::FRAC_PI_3;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Profile;
use crate::math::Vector3;
use crate::operations::boolean::Intersect;
use crate::operations::creation::DEFAULT_SEGMENTS;
use crate::operations::shaping::Extrude;
use crate::operations::transform::{Rotate, Translate};
use crate::topology::{SolidId, SolidStore};

/// Keeps the corner radius strictly below half of either profile dimension.
const ROUNDING_MARGIN: f64 = 1e-3;

/// Creates a hexagonal prism along Y whose end-cap rims are rounded.
///
/// A rounded rectangle `size × length` is extruded into a slab, and three
/// copies rotated 60° apart about Y are intersected. The flat-to-flat
/// distance across X and Z is `size`, and two vertices point along Z.
pub struct RoundedHexagon {
    size: f64,
    length: f64,
    radius: f64,
    segments: usize,
}

impl RoundedHexagon {
    /// Creates a new `RoundedHexagon` operation.
    #[must_use]
    pub fn new(size: f64, length: f64, radius: f64) -> Self {
        Self {
            size,
            length,
            radius,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the curve resolution of the rounded rims.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Corner radius after clamping to the profile dimensions.
    ///
    /// Radii too small to resolve give sharp corners.
    #[must_use]
    pub fn effective_radius(&self) -> f64 {
        let r = self
            .radius
            .min(self.size / 2.0 - ROUNDING_MARGIN)
            .min(self.length / 2.0 - ROUNDING_MARGIN);
        if r < ROUNDING_MARGIN {
            0.0
        } else {
            r
        }
    }

    /// Executes the operation, creating the prism in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` or `length` is not positive.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if !(self.size.is_finite() && self.length.is_finite() && self.radius.is_finite()) {
            return Err(OperationError::InvalidInput(
                "rounded hexagon dimensions must be finite".into(),
            )
            .into());
        }
        let r = self.effective_radius();
        let profile = Profile::rounded_rectangle(self.size, self.length, r, self.segments)?;

        let half_depth = self.size + r;
        let slab = Extrude::new(profile, 2.0 * half_depth).execute(store)?;
        let slab = Translate::new(slab, Vector3::new(0.0, 0.0, -half_depth)).execute(store)?;

        let tilted = Rotate::about_y(slab, FRAC_PI_3).execute(store)?;
        let steep = Rotate::about_y(slab, 2.0 * FRAC_PI_3).execute(store)?;
        let pair = Intersect::new(slab, tilted).execute(store)?;
        let prism = Intersect::new(pair, steep).execute(store)?;

        debug!(size = self.size, length = self.length, radius = r, "built rounded hexagon");
        Ok(prism)
    }
}
