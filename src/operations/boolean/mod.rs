mod bsp;
mod engine;
mod intersect_op;
mod subtract;
mod union;
mod union_all;

pub use bsp::Node;
pub use engine::BooleanOp;
pub use intersect_op::Intersect;
pub use subtract::Subtract;
pub use union::Union;
pub use union_all::UnionAll;
