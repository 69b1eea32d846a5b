//! Incremental Delaunay triangulation using Bowyer-Watson point insertion.
//!
//! The mesh keeps the empty-circle property: no vertex lies strictly inside
//! the circumcircle of any triangle. It is built incrementally:
//!
//! 1. Seed with a caller-supplied super-triangle enclosing all later points
//! 2. Insert points one at a time: remove every triangle whose circumcircle
//!    contains the new point, then connect the point to each edge of the
//!    evacuated cavity's boundary
//! 3. After boundary loading, purge the triangles still touching the
//!    super-triangle's vertices
//!
//! # Complexity
//!
//! - Time: O(n) per insertion over the live triangle bag, O(n²) total
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use delaunum::Triangulation;
//!
//! // Unit square inside a generously sized super-triangle
//! let boundary = [-1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0];
//! let r = 5.0 / std::f64::consts::SQRT_2;
//! let super_tri = [0.0, 5.0, -r, -r, r, -r];
//!
//! let mut tri = Triangulation::from_boundary(&boundary, &super_tri, 1e-12).unwrap();
//! tri.add_point(0.25, 0.25).unwrap();
//!
//! assert_eq!(tri.vertex_count(), 8); // 3 super + 4 boundary + 1 sample
//! assert!(tri.triangle_count() > 0);
//! ```

use std::collections::HashSet;

use num_traits::Float;

use super::mesh::Mesh;
use super::triangle::{Edge, Triangle};
use crate::error::{DelaunayError, Result};
use crate::predicates::{in_circumcircle, orient2d, point_in_triangle, Orientation};
use crate::primitives::Point2;

/// Vertex indices of the super-triangle, always seeded first.
const SUPER_VERTICES: [usize; 3] = [0, 1, 2];

/// An incrementally built planar Delaunay triangulation.
///
/// Owns the vertex arena and triangle bag exclusively; insertion is
/// synchronous and runs to completion. On any returned error the mesh is
/// unchanged — validation and the circumcircle scan happen before the
/// first mutation.
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    mesh: Mesh<F>,
    eps: F,
}

impl<F: Float> Triangulation<F> {
    /// Creates a triangulation seeded with the given super-triangle.
    ///
    /// The super-triangle must enclose every point inserted later. That
    /// containment is checked for the boundary points of
    /// [`from_boundary`](Self::from_boundary), but remains the caller's
    /// responsibility for direct [`add_point`](Self::add_point) calls.
    ///
    /// `eps` is the tolerance used for degeneracy and coincident-point
    /// detection throughout the triangulation's life.
    ///
    /// # Errors
    ///
    /// - [`DelaunayError::NonFiniteCoordinate`] for NaN/infinite corners
    /// - [`DelaunayError::DegenerateTriangle`] if the corners are collinear
    ///   within `eps`
    pub fn new(super_triangle: [Point2<F>; 3], eps: F) -> Result<Self> {
        let [a, b, c] = super_triangle;
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(DelaunayError::NonFiniteCoordinate);
        }
        if orient2d(a, b, c, eps) == Orientation::Collinear {
            return Err(DelaunayError::DegenerateTriangle);
        }

        let mut mesh = Mesh::new();
        let i0 = mesh.push_vertex(a);
        let i1 = mesh.push_vertex(b);
        let i2 = mesh.push_vertex(c);
        mesh.push_triangle(Triangle::new(i0, i1, i2)?);

        Ok(Self { mesh, eps })
    }

    /// Builds the triangulation of a boundary point list.
    ///
    /// `boundary` is flat interleaved coordinates `[x0, y0, x1, y1, ...]`,
    /// inserted in list order; `super_triangle` is the three corners as
    /// `[x0, y0, x1, y1, x2, y2]`. After all boundary points are in, every
    /// triangle referencing a super-triangle vertex is removed by index
    /// membership (the three seed vertices themselves stay in the vertex
    /// array). Further [`add_point`](Self::add_point) calls remain legal.
    ///
    /// All input validation happens before the first insertion: list shape,
    /// finiteness, and strict containment of each boundary point in the
    /// super-triangle.
    ///
    /// # Errors
    ///
    /// - [`DelaunayError::OddBoundaryLength`] for a half-open coordinate pair
    /// - [`DelaunayError::NonFiniteCoordinate`] for NaN/infinite input
    /// - [`DelaunayError::PointOutsideSuperTriangle`] if the super-triangle
    ///   does not strictly contain some boundary point
    /// - any [`add_point`](Self::add_point) error for the individual
    ///   insertions, e.g. [`DelaunayError::DuplicateVertex`] for a repeated
    ///   boundary point
    pub fn from_boundary(boundary: &[F], super_triangle: &[F; 6], eps: F) -> Result<Self> {
        if boundary.len() % 2 != 0 {
            return Err(DelaunayError::OddBoundaryLength {
                len: boundary.len(),
            });
        }

        let a = Point2::new(super_triangle[0], super_triangle[1]);
        let b = Point2::new(super_triangle[2], super_triangle[3]);
        let c = Point2::new(super_triangle[4], super_triangle[5]);
        let mut tri = Self::new([a, b, c], eps)?;

        for (i, pair) in boundary.chunks_exact(2).enumerate() {
            let p = Point2::new(pair[0], pair[1]);
            if !p.is_finite() {
                return Err(DelaunayError::NonFiniteCoordinate);
            }
            if !point_in_triangle(p, a, b, c, eps) {
                return Err(DelaunayError::PointOutsideSuperTriangle { index: i });
            }
        }

        for pair in boundary.chunks_exact(2) {
            tri.add_point(pair[0], pair[1])?;
        }
        tri.purge_super();

        Ok(tri)
    }

    /// Inserts a point, restoring the Delaunay property, and returns the
    /// index of the new vertex.
    ///
    /// Every live triangle whose circumcircle strictly contains the point
    /// is removed; the edges of the removed set that bordered a surviving
    /// triangle (or the hull) each gain a new triangle to the inserted
    /// point. A point exactly on a circumcircle does not invalidate that
    /// triangle, so cocircular inputs keep whichever diagonal came first.
    ///
    /// # Errors
    ///
    /// - [`DelaunayError::NonFiniteCoordinate`] for NaN/infinite input
    /// - [`DelaunayError::DuplicateVertex`] if the point is within `eps`
    ///   of an existing vertex
    /// - [`DelaunayError::PointOutsideHull`] if no circumcircle contains
    ///   the point (it falls outside the triangulated region)
    /// - [`DelaunayError::DegenerateTriangle`] if a zero-area triangle is
    ///   met during the scan
    ///
    /// On error the mesh is unchanged.
    pub fn add_point(&mut self, x: F, y: F) -> Result<usize> {
        let p = Point2::new(x, y);
        if !p.is_finite() {
            return Err(DelaunayError::NonFiniteCoordinate);
        }

        let eps_sq = self.eps * self.eps;
        if let Some(index) = self
            .mesh
            .vertices()
            .iter()
            .position(|v| v.distance_squared(p) <= eps_sq)
        {
            return Err(DelaunayError::DuplicateVertex { index });
        }

        // Fallible scan first; the mesh is mutated only after every
        // circumcircle test has succeeded.
        let mut cavity: Vec<Triangle> = Vec::new();
        for tri in self.mesh.triangles() {
            let [ia, ib, ic] = tri.indices();
            let inside = in_circumcircle(
                p,
                self.mesh.vertex(ia),
                self.mesh.vertex(ib),
                self.mesh.vertex(ic),
                self.eps,
            )?;
            if inside {
                cavity.push(*tri);
            }
        }
        if cavity.is_empty() {
            return Err(DelaunayError::PointOutsideHull);
        }

        // Cavity boundary: collect every edge of the removed triangles and
        // sort. An edge appearing twice was shared between two cavity
        // triangles and is interior; an edge appearing once (equal to
        // neither sorted neighbor) borders the cavity and survives.
        let mut edges: Vec<Edge> = Vec::with_capacity(cavity.len() * 3);
        for tri in &cavity {
            edges.extend(tri.edges());
        }
        edges.sort_unstable();
        let boundary = locally_unique(&edges);

        let doomed: HashSet<Triangle> = cavity.iter().copied().collect();
        let removed = self.mesh.drain_where(|t| doomed.contains(t));
        debug_assert_eq!(removed.len(), cavity.len());

        let index = self.mesh.push_vertex(p);
        for edge in boundary {
            self.mesh.push_triangle(Triangle::new(edge.0, edge.1, index)?);
        }

        Ok(index)
    }

    /// Removes every triangle that references a super-triangle vertex.
    ///
    /// Membership is topological (index comparison), not geometric; the
    /// three seed vertices stay in the vertex array with their indices
    /// intact. Called by [`from_boundary`](Self::from_boundary) after
    /// boundary loading.
    pub fn purge_super(&mut self) {
        self.mesh
            .drain_where(|t| SUPER_VERTICES.iter().any(|&v| t.contains_vertex(v)));
    }

    /// All vertices in insertion order, super-triangle corners first.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        self.mesh.vertices()
    }

    /// Number of vertices, including the three super-triangle corners.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// All live triangles in bag order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        self.mesh.triangles()
    }

    /// Number of live triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Deduplicated edges of all live triangles, sorted by `(min, max)`
    /// index pair.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = Vec::with_capacity(self.mesh.triangle_count() * 3);
        for tri in self.mesh.triangles() {
            edges.extend(tri.edges());
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}

/// Entries of a sorted slice equal to neither neighbor occur exactly once.
fn locally_unique(edges: &[Edge]) -> Vec<Edge> {
    let mut unique = Vec::new();
    for (i, &e) in edges.iter().enumerate() {
        let dup_prev = i > 0 && edges[i - 1] == e;
        let dup_next = i + 1 < edges.len() && edges[i + 1] == e;
        if !dup_prev && !dup_next {
            unique.push(e);
        }
    }
    unique
}
