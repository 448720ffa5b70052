use super::polygon::Polygon;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the solid store.
    pub struct SolidId;
}

/// Data associated with a solid.
///
/// A solid is the closed boundary formed by its polygons; each polygon's
/// plane normal points out of the material.
#[derive(Debug, Clone, Default)]
pub struct SolidData {
    /// Boundary polygons.
    pub polygons: Vec<Polygon>,
}

impl SolidData {
    /// Creates solid data from boundary polygons.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Returns `true` if the solid has no boundary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
