//! Honeycomb wall panels: hexagonal cells tiled into a lattice, fitted with
//! keyhole mounts and an optional keychain medallion.

mod cell;
mod config;
mod grid;
mod keychain;
mod keyhole;
mod lattice;
mod panel;
mod placement;
mod rounded_hexagon;

pub use cell::{BuildCell, BuildInfill, INFILL_RATIO};
pub use config::{CellParams, HardwareConfig, KeychainConfig};
pub use grid::{CellStyle, Grid, StylePolicy};
pub use keychain::{BuildKeychain, Keychain};
pub use keyhole::{MakeKeyhole, MakeKeyholeBox, PlaceHardware};
pub use lattice::{cell_offset, AssembleLattice, Lattice};
pub use panel::{generate, ComposePanel, GeneratePanel, MIN_SEGMENTS};
pub use placement::{KeyholePlacement, ResolvePlacement, DERIVED_Y_NUDGE};
pub use rounded_hexagon::RoundedHexagon;
