use crate::geometry::Plane;
use crate::topology::polygon::SplitResult;
use crate::topology::Polygon;

/// A node of a binary space partitioning tree over boundary polygons.
///
/// Each node stores the polygons lying in its splitting plane; `front` and
/// `back` hold the polygons on either side. All traversals use explicit
/// stacks, so deep trees built from finely tessellated solids cannot
/// overflow the call stack.
#[derive(Debug, Default)]
pub struct Node {
    plane: Option<Plane>,
    front: Option<Box<Node>>,
    back: Option<Box<Node>>,
    polygons: Vec<Polygon>,
}

impl Node {
    /// Builds a tree from a solid's boundary polygons.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Converts solid space to empty space and back.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut Node> = vec![self];
        while let Some(node) = stack.pop() {
            for polygon in &mut node.polygons {
                polygon.flip();
            }
            node.plane = node.plane.as_ref().map(Plane::flipped);
            std::mem::swap(&mut node.front, &mut node.back);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    #[must_use]
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut kept = Vec::new();
        let mut stack: Vec<(&Node, Vec<Polygon>)> = vec![(self, polygons)];
        while let Some((node, polygons)) = stack.pop() {
            let Some(plane) = node.plane else {
                kept.extend(polygons);
                continue;
            };
            let mut split = SplitResult::default();
            for polygon in polygons {
                polygon.split(&plane, &mut split);
            }
            let SplitResult {
                coplanar_front,
                coplanar_back,
                mut front,
                mut back,
            } = split;
            front.extend(coplanar_front);
            back.extend(coplanar_back);

            match node.front.as_deref() {
                Some(child) => stack.push((child, front)),
                None => kept.extend(front),
            }
            // Polygons behind a leaf are inside the solid.
            if let Some(child) = node.back.as_deref() {
                stack.push((child, back));
            }
        }
        kept
    }

    /// Removes every polygon of this tree that lies inside `other`.
    pub fn clip_to(&mut self, other: &Node) {
        let mut stack: Vec<&mut Node> = vec![self];
        while let Some(node) = stack.pop() {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Inserts polygons into the tree, splitting them where needed.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut Node, Vec<Polygon>)> = vec![(self, polygons)];
        while let Some((node, polygons)) = stack.pop() {
            let mut polygons = polygons.into_iter();
            let mut split = SplitResult::default();
            let plane = match node.plane {
                Some(plane) => plane,
                None => {
                    // A fresh node takes its plane from the first polygon,
                    // which is coplanar by construction.
                    let Some(first) = polygons.next() else {
                        continue;
                    };
                    let plane = *first.plane();
                    node.plane = Some(plane);
                    node.polygons.push(first);
                    plane
                }
            };
            for polygon in polygons {
                polygon.split(&plane, &mut split);
            }
            node.polygons.append(&mut split.coplanar_front);
            node.polygons.append(&mut split.coplanar_back);

            if !split.front.is_empty() {
                let child = node.front.get_or_insert_with(Box::default);
                stack.push((&mut **child, split.front));
            }
            if !split.back.is_empty() {
                let child = node.back.get_or_insert_with(Box::default);
                stack.push((&mut **child, split.back));
            }
        }
    }

    /// Clones every polygon stored in the tree.
    #[must_use]
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = vec![self];
        while let Some(node) = stack.pop() {
            out.extend(node.polygons.iter().cloned());
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }
        out
    }

    /// Consumes the tree, returning every polygon it stores.
    #[must_use]
    pub fn into_polygons(mut self) -> Vec<Polygon> {
        let mut out = std::mem::take(&mut self.polygons);
        let mut stack: Vec<Box<Node>> =
            self.front.take().into_iter().chain(self.back.take()).collect();
        while let Some(mut node) = stack.pop() {
            out.append(&mut node.polygons);
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
        out
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> =
            self.front.take().into_iter().chain(self.back.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}
