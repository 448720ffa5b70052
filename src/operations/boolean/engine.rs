use crate::error::{OperationError, Result};
use crate::operations::query::Aabb;
use crate::topology::{Polygon, SolidData, SolidId, SolidStore};

use super::bsp::Node;

/// The boolean operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

impl BooleanOp {
    fn name(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Subtract => "subtract",
            Self::Intersect => "intersect",
        }
    }
}

/// Executes a boolean operation on two stored solids, inserting the result.
///
/// # Errors
///
/// Returns an error if either solid is missing or the result is empty.
pub fn boolean_execute(
    store: &mut SolidStore,
    solid_a: SolidId,
    solid_b: SolidId,
    op: BooleanOp,
) -> Result<SolidId> {
    let a = store.solid(solid_a)?.polygons.clone();
    let b = store.solid(solid_b)?.polygons.clone();
    let polygons = boolean_polygons(a, b, op)?;
    Ok(store.add_solid(SolidData::new(polygons)))
}

/// Combines two closed polygon sets with a BSP-tree boolean.
///
/// # Errors
///
/// Returns [`OperationError::EmptyResult`] if nothing remains.
pub(crate) fn boolean_polygons(a: Vec<Polygon>, b: Vec<Polygon>, op: BooleanOp) -> Result<Vec<Polygon>> {
    let result = match (Aabb::from_polygons(&a), Aabb::from_polygons(&b)) {
        (Some(aabb_a), Some(aabb_b)) if aabb_a.overlaps(&aabb_b) => bsp_combine(a, b, op),
        _ => handle_disjoint(a, b, op),
    };
    if result.is_empty() {
        return Err(OperationError::EmptyResult(op.name()).into());
    }
    Ok(result)
}

/// Boxes do not touch, so no boundary needs splitting.
fn handle_disjoint(mut a: Vec<Polygon>, b: Vec<Polygon>, op: BooleanOp) -> Vec<Polygon> {
    match op {
        BooleanOp::Union => {
            a.extend(b);
            a
        }
        BooleanOp::Subtract => a,
        BooleanOp::Intersect => Vec::new(),
    }
}

fn bsp_combine(a: Vec<Polygon>, b: Vec<Polygon>, op: BooleanOp) -> Vec<Polygon> {
    let mut a = Node::new(a);
    let mut b = Node::new(b);
    match op {
        BooleanOp::Union => {
            a.clip_to(&b);
            b.clip_to(&a);
            b.invert();
            b.clip_to(&a);
            b.invert();
            a.build(b.into_polygons());
        }
        BooleanOp::Subtract => {
            a.invert();
            a.clip_to(&b);
            b.clip_to(&a);
            b.invert();
            b.clip_to(&a);
            b.invert();
            a.build(b.into_polygons());
            a.invert();
        }
        BooleanOp::Intersect => {
            a.invert();
            b.clip_to(&a);
            b.invert();
            a.clip_to(&b);
            b.clip_to(&a);
            a.build(b.into_polygons());
            a.invert();
        }
    }
    a.into_polygons()
}
