//! delaunum CLI - triangulate random samples of the unit square and write
//! a mesh report.
//!
//! Seeds the unit-square boundary inside a generous super-triangle, inserts
//! uniformly sampled interior points, and writes the selected report
//! sections.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use delaunum::io::{save_report, Section};
use delaunum::{DelaunayError, Triangulation};

#[derive(Parser)]
#[command(name = "delaunum")]
#[command(version, about = "Incremental Delaunay triangulation demo", long_about = None)]
struct Cli {
    /// Output report file
    #[arg(default_value = "output.txt")]
    output: PathBuf,

    /// Number of random interior points to insert
    #[arg(short = 'n', long, default_value = "1000")]
    samples: usize,

    /// RNG seed (from entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report sections to write, in order (VERTEX, TRIANGLE, EDGE)
    #[arg(long = "section", value_parser = parse_section, default_values = ["VERTEX", "EDGE"])]
    sections: Vec<Section>,
}

fn parse_section(s: &str) -> Result<Section, String> {
    s.parse().map_err(|e: DelaunayError| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> delaunum::Result<()> {
    // Unit square inside a super-triangle sized so the purge never strands
    // a boundary point
    let boundary = [-1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0];
    let r = 5.0 / std::f64::consts::SQRT_2;
    let super_triangle = [0.0, 5.0, -r, -r, r, -r];

    let mut tri = Triangulation::from_boundary(&boundary, &super_triangle, 1e-12)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut inserted = 0usize;
    while inserted < cli.samples {
        let x = rng.gen_range(-1.0..1.0);
        let y = rng.gen_range(-1.0..1.0);
        match tri.add_point(x, y) {
            Ok(_) => inserted += 1,
            // Resample draws that coincide with a vertex or fall outside
            // every circumcircle along the square's edge
            Err(DelaunayError::DuplicateVertex { .. }) | Err(DelaunayError::PointOutsideHull) => {}
            Err(e) => return Err(e),
        }
    }

    save_report(&cli.output, &tri, &cli.sections)?;
    println!(
        "wrote {} ({} vertices, {} triangles)",
        cli.output.display(),
        tri.vertex_count(),
        tri.triangle_count()
    );
    Ok(())
}
