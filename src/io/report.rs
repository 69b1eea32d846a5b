//! Plain-text triangulation reports.
//!
//! Writes caller-selected sections describing a finished triangulation:
//! vertex coordinates, triangle index triples, and the deduplicated edge
//! list. Sections appear in the order requested.
//!
//! # Format
//!
//! ```text
//! num_vertices: 4
//! -1.000000000 1.000000000
//! ...
//! num_triangles: 2
//! 3 4 5
//! ...
//! num_edges: 5
//! 3 4
//! ...
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use num_traits::Float;

use crate::error::{DelaunayError, Result};
use crate::triangulation::Triangulation;

/// A report section selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Vertex coordinates in insertion order.
    Vertex,
    /// Triangle vertex-index triples in bag order.
    Triangle,
    /// Deduplicated, sorted edge index pairs.
    Edge,
}

impl FromStr for Section {
    type Err = DelaunayError;

    /// Parses the section tags `VERTEX`, `TRIANGLE` and `EDGE`.
    ///
    /// Anything else is [`DelaunayError::UnknownSection`] — misspelled tags
    /// fail instead of silently dropping a section from the report.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "VERTEX" => Ok(Section::Vertex),
            "TRIANGLE" => Ok(Section::Triangle),
            "EDGE" => Ok(Section::Edge),
            _ => Err(DelaunayError::UnknownSection { tag: s.to_string() }),
        }
    }
}

/// Writes the selected report sections, in the given order, to `w`.
///
/// Coordinates are written with 9 decimal digits; indices as plain
/// whitespace-separated integers, one element per line after each
/// section's `num_*:` header.
pub fn write_report<F, W>(w: &mut W, tri: &Triangulation<F>, sections: &[Section]) -> Result<()>
where
    F: Float + fmt::Display,
    W: Write,
{
    for section in sections {
        match section {
            Section::Vertex => {
                writeln!(w, "num_vertices: {}", tri.vertex_count())?;
                for v in tri.vertices() {
                    writeln!(w, "{:.9} {:.9}", v.x, v.y)?;
                }
            }
            Section::Triangle => {
                writeln!(w, "num_triangles: {}", tri.triangle_count())?;
                for t in tri.triangles() {
                    let [a, b, c] = t.indices();
                    writeln!(w, "{} {} {}", a, b, c)?;
                }
            }
            Section::Edge => {
                let edges = tri.edges();
                writeln!(w, "num_edges: {}", edges.len())?;
                for e in &edges {
                    writeln!(w, "{} {}", e.0, e.1)?;
                }
            }
        }
    }
    Ok(())
}

/// Writes a report file at `path`.
///
/// Convenience wrapper over [`write_report`] using a buffered file writer.
pub fn save_report<F, P>(path: P, tri: &Triangulation<F>, sections: &[Section]) -> Result<()>
where
    F: Float + fmt::Display,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, tri, sections)?;
    writer.flush()?;
    Ok(())
}
