mod make_box;
mod make_cylinder;
mod make_torus;

pub use make_box::MakeBox;
pub use make_cylinder::MakeCylinder;
pub use make_torus::MakeTorus;

/// Default number of segments used to approximate a full circle.
pub const DEFAULT_SEGMENTS: usize = 32;
