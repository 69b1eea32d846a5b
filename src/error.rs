//! Error types for delaunum.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`DelaunayError`].
pub type Result<T> = std::result::Result<T, DelaunayError>;

/// Errors that can occur while building or exporting a triangulation.
#[derive(Error, Debug)]
pub enum DelaunayError {
    /// A triangle was constructed with repeated vertex indices.
    #[error("triangle ({a}, {b}, {c}) has repeated vertex indices")]
    InvalidTriangle {
        /// First vertex index.
        a: usize,
        /// Second vertex index.
        b: usize,
        /// Third vertex index.
        c: usize,
    },

    /// A triangle with near-zero signed area was encountered in the
    /// circumcircle test.
    #[error("degenerate triangle (near-zero area) in circumcircle test")]
    DegenerateTriangle,

    /// An inserted point coincides with an existing vertex.
    #[error("point coincides with existing vertex {index}")]
    DuplicateVertex {
        /// Index of the coincident vertex.
        index: usize,
    },

    /// An inserted point lies outside every circumcircle of the current
    /// mesh, so no cavity can be formed for it.
    #[error("point lies outside the triangulated region")]
    PointOutsideHull,

    /// A flat boundary coordinate list has odd length.
    #[error("boundary coordinate list has odd length {len}")]
    OddBoundaryLength {
        /// The offending list length.
        len: usize,
    },

    /// An input coordinate is NaN or infinite.
    #[error("coordinate is not finite")]
    NonFiniteCoordinate,

    /// A boundary point is not strictly inside the super-triangle.
    #[error("boundary point {index} lies outside the super-triangle")]
    PointOutsideSuperTriangle {
        /// Position of the point in the boundary list.
        index: usize,
    },

    /// An unrecognized report section tag.
    #[error("unknown report section tag: {tag}")]
    UnknownSection {
        /// The tag that failed to parse.
        tag: String,
    },

    /// File I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
