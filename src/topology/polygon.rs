use crate::error::Result;
use crate::geometry::{Plane, PolygonSide};
use crate::math::polygon_2d::newell_normal;
use crate::math::{Matrix4, Point3, PLANE_EPSILON};

/// A planar, convex boundary polygon of a solid.
///
/// Vertices wind counter-clockwise when seen from the front of `plane`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

/// Destination lists for [`Polygon::split`].
#[derive(Debug, Default)]
pub struct SplitResult {
    pub coplanar_front: Vec<Polygon>,
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// Creates a polygon from its vertex loop, deriving the plane from the winding.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices enclose no area.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        let normal = newell_normal(&vertices)?;
        let plane = Plane::from_normal(vertices[0], normal)?;
        Ok(Self { vertices, plane })
    }

    fn with_plane(vertices: Vec<Point3>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    /// Returns the vertex loop.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the supporting plane.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses the winding and the plane orientation.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    /// Applies a 4x4 transform, keeping the normal pointing outward.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform collapses the polygon.
    pub fn transformed(&self, matrix: &Matrix4) -> Result<Self> {
        let mut vertices: Vec<Point3> = self
            .vertices
            .iter()
            .map(|v| matrix.transform_point(v))
            .collect();
        if matrix.fixed_view::<3, 3>(0, 0).determinant() < 0.0 {
            vertices.reverse();
        }
        Self::new(vertices)
    }

    /// Splits the polygon by `plane`, appending the pieces to `out`.
    ///
    /// Coplanar polygons go to `coplanar_front` or `coplanar_back` depending
    /// on whether they face the same way as `plane`.
    pub fn split(self, plane: &Plane, out: &mut SplitResult) {
        match plane.classify(&self.vertices) {
            PolygonSide::Coplanar => {
                if plane.normal().dot(self.plane.normal()) > 0.0 {
                    out.coplanar_front.push(self);
                } else {
                    out.coplanar_back.push(self);
                }
            }
            PolygonSide::Front => out.front.push(self),
            PolygonSide::Back => out.back.push(self),
            PolygonSide::Spanning => {
                let n = self.vertices.len();
                let mut front = Vec::with_capacity(n + 1);
                let mut back = Vec::with_capacity(n + 1);
                for i in 0..n {
                    let vi = self.vertices[i];
                    let vj = self.vertices[(i + 1) % n];
                    let ti = plane.signed_distance(&vi);
                    let tj = plane.signed_distance(&vj);
                    if ti >= -PLANE_EPSILON {
                        front.push(vi);
                    }
                    if ti <= PLANE_EPSILON {
                        back.push(vi);
                    }
                    let crosses = (ti > PLANE_EPSILON && tj < -PLANE_EPSILON)
                        || (ti < -PLANE_EPSILON && tj > PLANE_EPSILON);
                    if crosses {
                        let t = ti / (ti - tj);
                        let v = vi + (vj - vi) * t;
                        front.push(v);
                        back.push(v);
                    }
                }
                if front.len() >= 3 {
                    out.front.push(Self::with_plane(front, self.plane));
                }
                if back.len() >= 3 {
                    out.back.push(Self::with_plane(back, self.plane));
                }
            }
        }
    }
}
