mod extrude;

pub use extrude::Extrude;
pub(crate) use extrude::prism_polygons;
