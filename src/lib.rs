//! Parametric honeycomb wall panels built from polygonal solids.
//!
//! Solids live in a [`topology::SolidStore`] and are combined with BSP
//! booleans; [`honeycomb::GeneratePanel`] runs the full construction.

pub mod error;
pub mod geometry;
pub mod honeycomb;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{ConfigError, HoneycombError, Result, Stage};
pub use honeycomb::{generate, CellParams, GeneratePanel, Grid, KeyholePlacement};
