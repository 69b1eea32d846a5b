//! Vertex arena and triangle bag storage.

use super::triangle::Triangle;
use crate::primitives::Point2;
use num_traits::Float;

/// Append-only vertex array plus the unordered bag of live triangles.
///
/// Pure storage and filtering: no operation here does geometric reasoning.
/// Vertex indices are stable handles — vertices are never removed or
/// renumbered, even when every triangle referencing them is gone.
#[derive(Debug, Clone)]
pub struct Mesh<F> {
    vertices: Vec<Point2<F>>,
    triangles: Vec<Triangle>,
}

impl<F: Float> Mesh<F> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Appends a vertex and returns its index.
    ///
    /// Indices are 0-based, monotonically increasing, and never reused.
    pub fn push_vertex(&mut self, p: Point2<F>) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }

    /// The vertex at `index`.
    #[inline]
    pub fn vertex(&self, index: usize) -> Point2<F> {
        self.vertices[index]
    }

    /// All vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Adds a triangle to the bag.
    pub fn push_triangle(&mut self, tri: Triangle) {
        self.triangles.push(tri);
    }

    /// All live triangles in bag order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of live triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns all triangles satisfying the predicate, in bag order.
    pub fn search<P>(&self, mut pred: P) -> Vec<Triangle>
    where
        P: FnMut(&Triangle) -> bool,
    {
        self.triangles.iter().copied().filter(|t| pred(t)).collect()
    }

    /// Removes and returns all triangles matching the predicate.
    ///
    /// One pass over the bag, splitting it into kept and drained triangles;
    /// survivors keep their relative order. The vertex array is untouched.
    pub fn drain_where<P>(&mut self, mut pred: P) -> Vec<Triangle>
    where
        P: FnMut(&Triangle) -> bool,
    {
        let mut drained = Vec::new();
        let mut kept = Vec::with_capacity(self.triangles.len());
        for tri in self.triangles.drain(..) {
            if pred(&tri) {
                drained.push(tri);
            } else {
                kept.push(tri);
            }
        }
        self.triangles = kept;
        drained
    }
}

impl<F: Float> Default for Mesh<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: usize, b: usize, c: usize) -> Triangle {
        Triangle::new(a, b, c).unwrap()
    }

    #[test]
    fn test_push_vertex_indices_monotonic() {
        let mut mesh: Mesh<f64> = Mesh::new();
        assert_eq!(mesh.push_vertex(Point2::new(0.0, 0.0)), 0);
        assert_eq!(mesh.push_vertex(Point2::new(1.0, 0.0)), 1);
        assert_eq!(mesh.push_vertex(Point2::new(0.0, 1.0)), 2);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertex(1), Point2::new(1.0, 0.0));
    }

    #[test]
    fn test_search() {
        let mut mesh: Mesh<f64> = Mesh::new();
        mesh.push_triangle(tri(0, 1, 2));
        mesh.push_triangle(tri(1, 2, 3));
        mesh.push_triangle(tri(2, 3, 4));

        let touching_1 = mesh.search(|t| t.contains_vertex(1));
        assert_eq!(touching_1, vec![tri(0, 1, 2), tri(1, 2, 3)]);
        assert_eq!(mesh.triangle_count(), 3);
    }

    #[test]
    fn test_drain_where_partitions() {
        let mut mesh: Mesh<f64> = Mesh::new();
        mesh.push_triangle(tri(0, 1, 2));
        mesh.push_triangle(tri(1, 2, 3));
        mesh.push_triangle(tri(2, 3, 4));
        mesh.push_triangle(tri(3, 4, 5));

        let drained = mesh.drain_where(|t| t.contains_vertex(1));
        assert_eq!(drained, vec![tri(0, 1, 2), tri(1, 2, 3)]);
        // Survivors stay, in order; vertices are untouched
        assert_eq!(mesh.triangles(), &[tri(2, 3, 4), tri(3, 4, 5)]);
    }

    #[test]
    fn test_drain_where_no_match() {
        let mut mesh: Mesh<f64> = Mesh::new();
        mesh.push_triangle(tri(0, 1, 2));
        let drained = mesh.drain_where(|t| t.contains_vertex(9));
        assert!(drained.is_empty());
        assert_eq!(mesh.triangle_count(), 1);
    }
}
