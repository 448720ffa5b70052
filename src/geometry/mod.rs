pub mod plane;
pub mod profile;

pub use plane::{Plane, PolygonSide};
pub use profile::Profile;
