use std::fmt;

use thiserror::Error;

/// Top-level error type for honeycomb panel construction.
#[derive(Debug, Error)]
pub enum HoneycombError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A construction step failed; `stage` names the pipeline stage.
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<HoneycombError>,
    },
}

impl HoneycombError {
    /// Wraps this error with the pipeline stage it occurred in.
    ///
    /// Errors that already carry a stage and configuration errors are
    /// returned unchanged.
    #[must_use]
    pub fn in_stage(self, stage: Stage) -> Self {
        match self {
            Self::Stage { .. } | Self::Config(_) => self,
            other => Self::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    /// Returns the pipeline stage this error is attributed to, if any.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Pipeline stages of panel construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Profile,
    Cell,
    Keyhole,
    Lattice,
    Composition,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Profile => "profile",
            Self::Cell => "cell",
            Self::Keyhole => "keyhole",
            Self::Lattice => "lattice",
            Self::Composition => "composition",
        };
        f.write_str(name)
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("profile is not convex")]
    NonConvexProfile,
}

/// Errors related to the solid store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to solid operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} produced an empty solid")]
    EmptyResult(&'static str),
}

/// Errors raised while validating user-supplied configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("{parameter} must be positive, got {value}")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unrecognized cell style {code} at row {row}, column {column}")]
    UnknownStyle { code: i32, row: usize, column: usize },

    #[error("grid contains no cells")]
    EmptyGrid,
}

/// Convenience type alias for results using [`HoneycombError`].
pub type Result<T> = std::result::Result<T, HoneycombError>;

/// Attaches a pipeline stage to the error of a result.
pub(crate) trait StageExt<T> {
    fn stage(self, stage: Stage) -> Result<T>;
}

impl<T> StageExt<T> for Result<T> {
    fn stage(self, stage: Stage) -> Result<T> {
        self.map_err(|e| e.in_stage(stage))
    }
}
