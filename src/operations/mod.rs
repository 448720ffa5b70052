pub mod boolean;
pub mod creation;
pub mod query;
pub mod shaping;
pub mod transform;
