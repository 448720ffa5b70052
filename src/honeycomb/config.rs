use crate::error::ConfigError;

/// Cell dimensions shared by every cell of a panel.
///
/// `size` is the vertex-to-vertex span of a cell's cavity; walls of
/// `thickness` surround it, so neighbouring cells sit `size + thickness`
/// apart and share their walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellParams {
    /// Cavity span, vertex to vertex.
    pub size: f64,
    /// Wall thickness.
    pub thickness: f64,
    /// Extrusion height of the walls.
    pub height: f64,
    /// Edge rounding of the decorative infill.
    pub radius: f64,
    /// How far the infill top sits below its flush position.
    pub inset: f64,
}

impl CellParams {
    /// Creates cell parameters; the inset defaults to a quarter of the wall thickness.
    #[must_use]
    pub fn new(size: f64, thickness: f64, height: f64, radius: f64) -> Self {
        Self {
            size,
            thickness,
            height,
            radius,
            inset: thickness / 4.0,
        }
    }

    /// Sets the infill inset.
    #[must_use]
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Center-to-center spacing of neighbouring cells.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.size + self.thickness
    }

    /// Span of the outer wall hexagon.
    #[must_use]
    pub fn outer_size(&self) -> f64 {
        self.size + 2.0 * self.thickness
    }

    /// Checks every invariant of the parameters.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("size", self.size)?;
        require_finite("thickness", self.thickness)?;
        require_finite("height", self.height)?;
        require_finite("radius", self.radius)?;
        require_finite("inset", self.inset)?;
        require_positive("size", self.size)?;
        require_positive("thickness", self.thickness)?;
        require_positive("height", self.height)?;
        if self.thickness >= self.size {
            return Err(ConfigError::OutOfRange {
                parameter: "thickness",
                value: self.thickness,
                min: 0.0,
                max: self.size,
            });
        }
        require_range("radius", self.radius, 0.0, self.size.min(self.height) / 2.0)?;
        require_range("inset", self.inset, 0.0, self.height)?;
        Ok(())
    }
}

/// Dimensions of the mounting hardware the keyholes are cut for.
///
/// Keyhole and support plug are modelled at canonical size and shrunk in
/// plane by `scale` before placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareConfig {
    /// Height of the support plug and reference height for placement.
    pub mount_height: f64,
    /// Depth of each counterbore step.
    pub step: f64,
    /// Depth of the keyhole pocket.
    pub hole_depth: f64,
    /// Material left around the keyhole by the plug.
    pub margin: f64,
    /// Radius of the head clearance holes.
    pub hole_radius: f64,
    /// Radius of the shaft hole and slot half-width.
    pub pilot_radius: f64,
    /// Distance between the entry hole and the hanging hole.
    pub span: f64,
    /// In-plane scale applied before placement.
    pub scale: f64,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            mount_height: 7.0,
            step: 1.5,
            hole_depth: 6.0,
            margin: 2.0,
            hole_radius: 10.0,
            pilot_radius: 5.0,
            span: 20.0,
            scale: 0.5,
        }
    }
}

impl HardwareConfig {
    /// Radius of the support plug after scaling.
    #[must_use]
    pub fn plug_radius(&self) -> f64 {
        (self.hole_radius + self.margin) * self.scale
    }

    /// Checks every invariant of the hardware dimensions.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (parameter, value) in [
            ("mount height", self.mount_height),
            ("step", self.step),
            ("hole depth", self.hole_depth),
            ("margin", self.margin),
            ("hole radius", self.hole_radius),
            ("pilot radius", self.pilot_radius),
            ("span", self.span),
            ("scale", self.scale),
        ] {
            require_finite(parameter, value)?;
            require_positive(parameter, value)?;
        }
        require_range("pilot radius", self.pilot_radius, 0.0, self.hole_radius)?;
        if self.step >= self.hole_depth {
            return Err(ConfigError::OutOfRange {
                parameter: "step",
                value: self.step,
                min: 0.0,
                max: self.hole_depth,
            });
        }
        Ok(())
    }
}

/// Dimensions of the keychain loop attached to the medallion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeychainConfig {
    /// Radius from the loop center to the middle of its tube.
    pub loop_radius: f64,
    /// Radius of the loop tube.
    pub loop_thickness: f64,
}

impl Default for KeychainConfig {
    fn default() -> Self {
        Self {
            loop_radius: 3.0,
            loop_thickness: 1.0,
        }
    }
}

impl KeychainConfig {
    /// Checks every invariant of the loop dimensions.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("loop radius", self.loop_radius)?;
        require_finite("loop thickness", self.loop_thickness)?;
        require_positive("loop radius", self.loop_radius)?;
        require_positive("loop thickness", self.loop_thickness)?;
        if self.loop_thickness >= self.loop_radius {
            return Err(ConfigError::OutOfRange {
                parameter: "loop thickness",
                value: self.loop_thickness,
                min: 0.0,
                max: self.loop_radius,
            });
        }
        Ok(())
    }
}

pub(crate) fn require_finite(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { parameter, value })
    }
}

fn require_positive(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { parameter, value })
    }
}

fn require_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            parameter,
            value,
            min,
            max,
        })
    }
}
