use crate::error::{OperationError, Result};
use crate::topology::{SolidId, SolidStore};

use super::TriangleMesh;

/// Tessellates all boundary polygons of a solid into one triangle mesh.
///
/// Boundary polygons are convex, so each is fanned from its first vertex.
/// Vertices are not shared between polygons; every triangle carries its
/// polygon's flat normal.
pub struct TessellateSolid {
    solid: SolidId,
}

impl TessellateSolid {
    /// Creates a new `TessellateSolid` operation.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the tessellation, returning a combined triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing or the mesh would exceed
    /// 32-bit indices.
    pub fn execute(&self, store: &SolidStore) -> Result<TriangleMesh> {
        let solid = store.solid(self.solid)?;
        let mut mesh = TriangleMesh::default();
        for polygon in &solid.polygons {
            let base = u32::try_from(mesh.vertices.len()).map_err(|_| {
                OperationError::InvalidInput("mesh exceeds 32-bit vertex indices".into())
            })?;
            let normal = *polygon.plane().normal();
            for &v in polygon.vertices() {
                mesh.vertices.push(v);
                mesh.normals.push(normal);
            }
            let count = u32::try_from(polygon.vertices().len()).map_err(|_| {
                OperationError::InvalidInput("polygon exceeds 32-bit vertex indices".into())
            })?;
            for k in 1..count.saturating_sub(1) {
                mesh.indices.push([base, base + k, base + k + 1]);
            }
        }
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeBox;

    #[test]
    fn box_tessellates_to_12_triangles() {
        let mut store = SolidStore::new();
        let solid = MakeBox::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let mesh = TessellateSolid::new(solid).execute(&store).unwrap();
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
            let n = mesh.normals[tri[0] as usize];
            // Winding agrees with the stored normal.
            assert!((b - a).cross(&(c - a)).dot(&n) > 0.0);
        }
    }
}
