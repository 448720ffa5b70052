use tracing::debug;

use crate::error::ConfigError;
use crate::math::Point2;
use crate::operations::query::Aabb;

use super::config::require_finite;

/// Fixed upward nudge applied to derived keyhole positions.
pub const DERIVED_Y_NUDGE: f64 = 5.5;

/// Where the two keyholes of a panel go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyholePlacement {
    /// Absolute XY coordinates of both keyholes.
    Explicit([Point2; 2]),
    /// Positions derived from the panel's bounding box.
    ///
    /// The spacings are percentages of the panel extent; the offsets are
    /// absolute.
    Derived {
        h_space: f64,
        h_offset: f64,
        v_space: f64,
        v_offset: f64,
    },
}

impl KeyholePlacement {
    /// Explicit placement at two points.
    #[must_use]
    pub fn explicit(first: Point2, second: Point2) -> Self {
        Self::Explicit([first, second])
    }

    /// Placement derived from the panel bounds.
    #[must_use]
    pub fn derived(h_space: f64, h_offset: f64, v_space: f64, v_offset: f64) -> Self {
        Self::Derived {
            h_space,
            h_offset,
            v_space,
            v_offset,
        }
    }

    /// Checks that every coordinate or parameter is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] for the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Explicit([first, second]) => {
                require_finite("keyhole x", first.x)?;
                require_finite("keyhole y", first.y)?;
                require_finite("keyhole x", second.x)?;
                require_finite("keyhole y", second.y)
            }
            Self::Derived {
                h_space,
                h_offset,
                v_space,
                v_offset,
            } => {
                require_finite("h_space", h_space)?;
                require_finite("h_offset", h_offset)?;
                require_finite("v_space", v_space)?;
                require_finite("v_offset", v_offset)
            }
        }
    }
}

/// Turns a [`KeyholePlacement`] into absolute keyhole coordinates once the
/// panel has been measured.
pub struct ResolvePlacement<'a> {
    placement: &'a KeyholePlacement,
    panel_bounds: &'a Aabb,
}

impl<'a> ResolvePlacement<'a> {
    /// Creates a new `ResolvePlacement` operation.
    #[must_use]
    pub fn new(placement: &'a KeyholePlacement, panel_bounds: &'a Aabb) -> Self {
        Self {
            placement,
            panel_bounds,
        }
    }

    /// Executes the resolution.
    ///
    /// Derived positions are `cx ∓ (h_space/100)·w/2 + h_offset` across and
    /// `cy + (v_space/100)·d/2 + v_offset + 5.5` up, where `w × d` is the
    /// panel's XY extent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] if the placement has a non-finite
    /// value.
    pub fn execute(&self) -> Result<[Point2; 2], ConfigError> {
        self.placement.validate()?;
        let points = match *self.placement {
            KeyholePlacement::Explicit(points) => points,
            KeyholePlacement::Derived {
                h_space,
                h_offset,
                v_space,
                v_offset,
            } => {
                let center = self.panel_bounds.center();
                let extent = self.panel_bounds.size();
                let spread = h_space / 100.0 * extent.x / 2.0;
                let y = center.y + v_space / 100.0 * extent.y / 2.0 + v_offset + DERIVED_Y_NUDGE;
                [
                    Point2::new(center.x - spread + h_offset, y),
                    Point2::new(center.x + spread + h_offset, y),
                ]
            }
        };
        debug!(
            x1 = points[0].x,
            y1 = points[0].y,
            x2 = points[1].x,
            y2 = points[1].y,
            "resolved keyhole placement"
        );
        Ok(points)
    }
}
