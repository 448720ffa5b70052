use tracing::debug;

use crate::error::{Result, Stage, StageExt};
use crate::math::{Point2, Point3, Vector3};
use crate::operations::boolean::UnionAll;
use crate::operations::creation::{MakeBox, MakeCylinder, DEFAULT_SEGMENTS};
use crate::operations::transform::{Scale, Translate};
use crate::topology::{SolidId, SolidStore};

use super::config::HardwareConfig;

/// Creates the support plug that reinforces the panel around a keyhole.
///
/// Two cylinders of radius `hole_radius + margin`, one at the origin and one
/// at `y = −span`, joined by a cuboid of the same width. The plug is built
/// at canonical size and centered in Z.
pub struct MakeKeyholeBox {
    hardware: HardwareConfig,
    segments: usize,
}

impl MakeKeyholeBox {
    /// Creates a new `MakeKeyholeBox` operation.
    #[must_use]
    pub fn new(hardware: HardwareConfig) -> Self {
        Self {
            hardware,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the number of facets of the round ends.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation, creating the plug in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error tagged with [`Stage::Keyhole`] if a primitive
    /// degenerates.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let hw = &self.hardware;
        let radius = hw.hole_radius + hw.margin;
        let h = hw.mount_height;
        let parts = vec![
            MakeCylinder::new(Point3::origin(), radius, h)
                .with_segments(self.segments)
                .execute(store),
            MakeCylinder::new(Point3::new(0.0, -hw.span, 0.0), radius, h)
                .with_segments(self.segments)
                .execute(store),
            MakeBox::new(
                Point3::new(0.0, -hw.span / 2.0, 0.0),
                Vector3::new(2.0 * radius, hw.span, h),
            )
            .execute(store),
        ];
        let parts = parts.into_iter().collect::<Result<Vec<_>>>().stage(Stage::Keyhole)?;
        UnionAll::new(parts).execute(store).stage(Stage::Keyhole)
    }
}

/// Creates the keyhole negative: the space removed from the panel so it
/// can hang on a screw head.
///
/// The head enters through the large hole at the origin, slides along the
/// slot towards `y = −span` and is held by the counterbored pocket there.
pub struct MakeKeyhole {
    hardware: HardwareConfig,
    segments: usize,
}

impl MakeKeyhole {
    /// Creates a new `MakeKeyhole` operation.
    #[must_use]
    pub fn new(hardware: HardwareConfig) -> Self {
        Self {
            hardware,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the number of facets of the round holes.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation, creating the negative in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error tagged with [`Stage::Keyhole`] if a primitive
    /// degenerates.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let hw = &self.hardware;
        let d = hw.step;
        let depth = hw.hole_depth;
        let entry = MakeCylinder::new(Point3::new(0.0, 0.0, -d), hw.hole_radius, depth + d)
            .with_segments(self.segments)
            .execute(store);
        let pocket = MakeCylinder::new(Point3::new(0.0, -hw.span, 0.0), hw.hole_radius, depth - d)
            .with_segments(self.segments)
            .execute(store);
        let shaft = MakeCylinder::new(Point3::new(0.0, -hw.span, -2.0 * d), hw.pilot_radius, 2.0 * d)
            .with_segments(self.segments)
            .execute(store);
        let slot = MakeBox::new(
            Point3::new(0.0, -hw.span / 2.0, -2.0 * d),
            Vector3::new(2.0 * hw.pilot_radius, hw.span, depth),
        )
        .execute(store);
        let channel = MakeBox::new(
            Point3::new(0.0, -hw.span / 2.0, 0.0),
            Vector3::new(2.0 * hw.hole_radius, hw.span, depth - d),
        )
        .execute(store);

        let parts = [entry, pocket, shaft, slot, channel]
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .stage(Stage::Keyhole)?;
        UnionAll::new(parts).execute(store).stage(Stage::Keyhole)
    }
}

/// Shrinks a canonical keyhole part in plane and moves it to a panel position.
///
/// The part is scaled by `(scale, scale, 1)` and its center lifted to half
/// the mount height.
pub struct PlaceHardware {
    solid: SolidId,
    at: Point2,
    hardware: HardwareConfig,
}

impl PlaceHardware {
    /// Creates a new `PlaceHardware` operation.
    #[must_use]
    pub fn new(solid: SolidId, at: Point2, hardware: HardwareConfig) -> Self {
        Self { solid, at, hardware }
    }

    /// Executes the placement, returning the moved copy.
    ///
    /// # Errors
    ///
    /// Returns an error tagged with [`Stage::Keyhole`] if the solid is
    /// missing or the scale is degenerate.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let s = self.hardware.scale;
        let scaled = Scale::new(self.solid, Vector3::new(s, s, 1.0))
            .execute(store)
            .stage(Stage::Keyhole)?;
        let offset = Vector3::new(self.at.x, self.at.y, self.hardware.mount_height / 2.0);
        let placed = Translate::new(scaled, offset)
            .execute(store)
            .stage(Stage::Keyhole)?;
        debug!(x = self.at.x, y = self.at.y, "placed keyhole hardware");
        Ok(placed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{BoundingBox, Volume};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn plug_spans_both_round_ends() {
        let mut store = SolidStore::new();
        let plug = MakeKeyholeBox::new(HardwareConfig::default())
            .execute(&mut store)
            .unwrap();
        let bb = BoundingBox::new(plug).execute(&store).unwrap();
        assert_relative_eq!(bb.max.x, 12.0, epsilon = 1e-9);
        assert_relative_eq!(bb.max.y, 12.0, epsilon = 1e-9);
        assert_relative_eq!(bb.min.y, -32.0, epsilon = 1e-9);
        assert_relative_eq!(bb.min.z, -3.5, epsilon = 1e-9);
        assert_relative_eq!(bb.max.z, 3.5, epsilon = 1e-9);
    }

    #[test]
    fn keyhole_steps_down_through_pocket() {
        let mut store = SolidStore::new();
        let keyhole = MakeKeyhole::new(HardwareConfig::default())
            .execute(&mut store)
            .unwrap();
        let bb = BoundingBox::new(keyhole).execute(&store).unwrap();
        // Entry hole reaches from -d - (depth + d)/2 to -d + (depth + d)/2.
        assert_relative_eq!(bb.min.z, -6.0, epsilon = 1e-9);
        assert_relative_eq!(bb.max.z, 2.25, epsilon = 1e-9);
        assert_relative_eq!(bb.max.y, 10.0, epsilon = 1e-9);
        assert_relative_eq!(bb.min.y, -30.0, epsilon = 1e-9);
    }

    #[test]
    fn keyhole_fits_inside_plug_footprint() {
        let mut store = SolidStore::new();
        let hardware = HardwareConfig::default();
        let plug = MakeKeyholeBox::new(hardware).execute(&mut store).unwrap();
        let keyhole = MakeKeyhole::new(hardware).execute(&mut store).unwrap();
        let plug_bb = BoundingBox::new(plug).execute(&store).unwrap();
        let keyhole_bb = BoundingBox::new(keyhole).execute(&store).unwrap();
        assert!(keyhole_bb.min.x > plug_bb.min.x && keyhole_bb.max.x < plug_bb.max.x);
        assert!(keyhole_bb.min.y > plug_bb.min.y && keyhole_bb.max.y < plug_bb.max.y);
    }

    #[test]
    fn placement_scales_in_plane_only() {
        let mut store = SolidStore::new();
        let hardware = HardwareConfig::default();
        let plug = MakeKeyholeBox::new(hardware).execute(&mut store).unwrap();
        let before = Volume::new(plug).execute(&store).unwrap();
        let placed = PlaceHardware::new(plug, p(3.0, -4.0), hardware)
            .execute(&mut store)
            .unwrap();
        let after = Volume::new(placed).execute(&store).unwrap();
        assert_relative_eq!(after, before * 0.25, epsilon = 1e-6);

        let bb = BoundingBox::new(placed).execute(&store).unwrap();
        assert_relative_eq!(bb.max.x, 3.0 + 6.0, epsilon = 1e-9);
        assert_relative_eq!(bb.max.y, -4.0 + 6.0, epsilon = 1e-9);
        assert_relative_eq!(bb.min.z, 0.0, epsilon = 1e-9);
        assert_relative_eq!(bb.max.z, 7.0, epsilon = 1e-9);
    }
}
