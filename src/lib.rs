//! delaunum - Incremental planar Delaunay triangulation
//!
//! Builds a Delaunay triangulation one point at a time with Bowyer-Watson
//! insertion: seed an enclosing super-triangle, insert points, purge the
//! scaffolding. The mesh keeps the empty-circle property — no vertex lies
//! strictly inside any triangle's circumcircle.

pub mod error;
pub mod io;
pub mod predicates;
pub mod primitives;
pub mod triangulation;

pub use error::{DelaunayError, Result};
pub use predicates::{in_circumcircle, orient2d, point_in_triangle, Orientation};
pub use primitives::{Point2, Vec2};
pub use triangulation::{Edge, Mesh, Triangle, Triangulation};
