use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{is_convex, outward_normal, signed_area_2d};
use crate::math::{Point2, TOLERANCE};

/// A closed 2D outline in the XY plane, stored counter-clockwise.
///
/// Profiles are the input to [`Extrude`](crate::operations::shaping::Extrude).
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<Point2>,
}

impl Profile {
    /// Creates a profile from a closed loop of points (either winding).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for fewer than three points or
    /// a loop without area.
    pub fn new(mut points: Vec<Point2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "profile needs at least 3 points, got {}",
                points.len()
            ))
            .into());
        }
        let area = signed_area_2d(&points);
        if area.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("profile has no area".into()).into());
        }
        if area < 0.0 {
            points.reverse();
        }
        Ok(Self { points })
    }

    /// Regular hexagon with vertices at `(±size/2, 0)` and `(±size/4, ±√3·size/4)`.
    ///
    /// `size` is the vertex-to-vertex span along X; the flat-to-flat span
    /// along Y is `√3/2 · size`.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not positive.
    pub fn hexagon(size: f64) -> Result<Self> {
        require_positive("hexagon size", size)?;
        let b = 3.0_f64.sqrt() * size / 4.0;
        Self::new(vec![
            Point2::new(size / 2.0, 0.0),
            Point2::new(size / 4.0, b),
            Point2::new(-size / 4.0, b),
            Point2::new(-size / 2.0, 0.0),
            Point2::new(-size / 4.0, -b),
            Point2::new(size / 4.0, -b),
        ])
    }

    /// Axis-aligned rectangle `width × depth` centered on the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not positive.
    pub fn rectangle(width: f64, depth: f64) -> Result<Self> {
        require_positive("rectangle width", width)?;
        require_positive("rectangle depth", depth)?;
        let (hw, hd) = (width / 2.0, depth / 2.0);
        Self::new(vec![
            Point2::new(-hw, -hd),
            Point2::new(hw, -hd),
            Point2::new(hw, hd),
            Point2::new(-hw, hd),
        ])
    }

    /// Rectangle `width × depth` with corners rounded by `radius`.
    ///
    /// Built as the inner rectangle offset outward by `radius`, so the overall
    /// extent stays `width × depth`. A non-positive radius gives a plain
    /// rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if `2·radius` reaches either dimension.
    pub fn rounded_rectangle(width: f64, depth: f64, radius: f64, segments: usize) -> Result<Self> {
        if radius <= 0.0 {
            return Self::rectangle(width, depth);
        }
        Self::rectangle(width - 2.0 * radius, depth - 2.0 * radius)?.offset_round(radius, segments)
    }

    /// Circle approximated by `segments` vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or `segments < 3`.
    pub fn circle(radius: f64, segments: usize) -> Result<Self> {
        require_positive("circle radius", radius)?;
        if segments < 3 {
            return Err(GeometryError::Degenerate(format!(
                "circle needs at least 3 segments, got {segments}"
            ))
            .into());
        }
        #[allow(clippy::cast_precision_loss)]
        let points = (0..segments)
            .map(|i| {
                let a = TAU * i as f64 / segments as f64;
                Point2::new(radius * a.cos(), radius * a.sin())
            })
            .collect();
        Self::new(points)
    }

    /// Offsets a convex profile outward by `delta`, rounding every corner.
    ///
    /// `segments` is the resolution of a full circle; each corner arc gets a
    /// share proportional to its sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is not convex, `delta` is not
    /// positive, or an edge has zero length.
    pub fn offset_round(&self, delta: f64, segments: usize) -> Result<Self> {
        require_positive("offset delta", delta)?;
        if !self.is_convex() {
            return Err(GeometryError::NonConvexProfile.into());
        }
        let n = self.points.len();
        let mut out = Vec::with_capacity(n * (segments / 4 + 2));
        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let curr = self.points[i];
            let next = self.points[(i + 1) % n];
            let n_in = outward_normal(&prev, &curr)?;
            let n_out = outward_normal(&curr, &next)?;

            let a0 = n_in.y.atan2(n_in.x);
            let mut sweep = n_out.y.atan2(n_out.x) - a0;
            if sweep < 0.0 {
                sweep += TAU;
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let steps = ((segments as f64) * sweep / TAU).ceil().max(1.0) as usize;
            if sweep < TOLERANCE {
                out.push(curr + n_in * delta);
                continue;
            }
            for k in 0..=steps {
                #[allow(clippy::cast_precision_loss)]
                let a = a0 + sweep * k as f64 / steps as f64;
                out.push(Point2::new(curr.x + delta * a.cos(), curr.y + delta * a.sin()));
            }
        }
        Self::new(out)
    }

    /// Returns the counter-clockwise vertex loop.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Returns `true` if the outline is convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        is_convex(&self.points)
    }
}

fn require_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > TOLERANCE {
        Ok(())
    } else {
        Err(GeometryError::Degenerate(format!("{what} must be positive, got {value}")).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn hexagon_vertices_and_area() {
        let hex = Profile::hexagon(10.0).unwrap();
        let pts = hex.points();
        assert_eq!(pts.len(), 6);
        assert_relative_eq!(pts[0].x, 5.0);
        assert_relative_eq!(pts[1].y, 3.0_f64.sqrt() * 2.5);
        // 3√3/8 · size² for a vertex-to-vertex span of `size`
        assert_relative_eq!(hex.area(), 3.0 * 3.0_f64.sqrt() / 8.0 * 100.0, epsilon = 1e-9);
        assert!(hex.is_convex());
    }

    #[test]
    fn clockwise_input_is_reoriented() {
        let profile = Profile::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
        ])
        .unwrap();
        assert!(profile.area() > 0.0);
    }

    #[test]
    fn rounded_rectangle_keeps_extent() {
        let rr = Profile::rounded_rectangle(10.0, 6.0, 1.0, 64).unwrap();
        let max_x = rr.points().iter().map(|q| q.x).fold(f64::MIN, f64::max);
        let max_y = rr.points().iter().map(|q| q.y).fold(f64::MIN, f64::max);
        assert_relative_eq!(max_x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(max_y, 3.0, epsilon = 1e-9);
        // Area of a rounded rectangle: w·d − (4 − π)·r²
        assert_relative_eq!(rr.area(), 60.0 - (4.0 - PI), epsilon = 0.01);
        assert!(rr.is_convex());
    }

    #[test]
    fn zero_radius_gives_plain_rectangle() {
        let rr = Profile::rounded_rectangle(4.0, 2.0, 0.0, 32).unwrap();
        assert_eq!(rr.points().len(), 4);
        assert_relative_eq!(rr.area(), 8.0);
    }

    #[test]
    fn oversized_radius_fails() {
        assert!(Profile::rounded_rectangle(4.0, 2.0, 1.0, 32).is_err());
    }

    #[test]
    fn circle_area_converges() {
        let c = Profile::circle(2.0, 128).unwrap();
        assert_relative_eq!(c.area(), PI * 4.0, epsilon = 0.01);
        assert!(Profile::circle(2.0, 2).is_err());
    }

    #[test]
    fn non_convex_offset_fails() {
        let dart = Profile::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 2.0),
            Point2::new(0.5, 1.0),
        ])
        .unwrap();
        assert!(dart.offset_round(0.1, 16).is_err());
    }
}
