use crate::error::Result;
use crate::topology::{Polygon, SolidId, SolidStore};

/// Computes the enclosed volume of a solid.
///
/// Fans every boundary polygon into triangles and sums the signed volumes
/// of the tetrahedra they form with the origin, `(1/6) * v0 . (v1 x v2)`.
/// Polygons split by boolean operations leave T-junctions on their edges,
/// which this sum tolerates.
pub struct Volume {
    solid: SolidId,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the signed volume.
    ///
    /// Positive for a correctly oriented closed solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn execute(&self, store: &SolidStore) -> Result<f64> {
        let solid = store.solid(self.solid)?;
        Ok(polygons_volume(&solid.polygons))
    }
}

pub(crate) fn polygons_volume(polygons: &[Polygon]) -> f64 {
    let mut signed_volume = 0.0;
    for polygon in polygons {
        let vertices = polygon.vertices();
        let v0 = vertices[0].coords;
        for pair in vertices[1..].windows(2) {
            let v1 = pair[0].coords;
            let v2 = pair[1].coords;
            signed_volume += v0.dot(&v1.cross(&v2));
        }
    }
    signed_volume / 6.0
}
