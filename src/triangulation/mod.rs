//! Incremental Delaunay triangulation of 2D point sets.
//!
//! This module provides the triangulation engine plus its storage types:
//! the canonical [`Triangle`]/[`Edge`] index types, the [`Mesh`] arena, and
//! the [`Triangulation`] engine implementing Bowyer-Watson insertion.

mod delaunay;
mod mesh;
mod triangle;

pub use delaunay::Triangulation;
pub use mesh::Mesh;
pub use triangle::{Edge, Triangle};
