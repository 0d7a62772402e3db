//! mesh-skin command line interface.
//!
//! Loads a brick mesh (or generates a grid), runs the configured passes and
//! writes the result as `simple_list.sli` plus any requested `.pos` views.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::{Builder, Target};
use log::{LevelFilter, info};

use mesh_skin::prelude::*;
use mesh_skin::report::banner;

/// Exterior-surface extraction and quality check for hexahedral meshes
#[derive(Parser)]
#[command(name = "mesh-skin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Exterior-surface extraction for brick meshes", long_about = None)]
struct Cli {
    /// Input mesh in simple-list format
    #[arg(short, long, conflicts_with = "grid")]
    input: Option<PathBuf>,

    /// Generate a unit-spaced NX x NY x NZ brick grid instead of reading a mesh
    #[arg(long, num_args = 3, value_names = ["NX", "NY", "NZ"])]
    grid: Option<Vec<usize>>,

    /// Processing parameters (JSON)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or(LevelFilter::Info);
    Builder::new()
        .filter_level(filter)
        .format_target(false)
        .target(Target::Stderr)
        .init();
}

fn load_mesh(cli: &Cli) -> Result<Mesh> {
    match (&cli.input, &cli.grid) {
        (Some(path), _) => SliReader
            .read_path(path)
            .with_context(|| format!("reading mesh {}", path.display())),
        (None, Some(dims)) => {
            let &[nx, ny, nz] = dims.as_slice() else {
                bail!("--grid takes three sizes");
            };
            let max = [nx as f64, ny as f64, nz as f64];
            Ok(brick_grid(nx, ny, nz, [0.0; 3], max)?)
        }
        (None, None) => bail!("either --input or --grid is required"),
    }
}

fn create(dir: &Path, name: &str) -> Result<BufWriter<File>> {
    let path = dir.join(name);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_outputs(
    dir: &Path,
    mesh: &Mesh,
    config: &ProcessingConfig,
    summary: &ProcessingSummary,
) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let limit = summary.original_node_count;
    SliWriter::with_node_limit(limit).write_path(dir.join("simple_list.sli"), mesh)?;

    let pos = PosWriter::with_node_limit(limit);
    if config.print_pos_nodes {
        let mut w = create(dir, "nodes_ID.pos")?;
        pos.write_node_ids(&mut w, mesh.nodes())?;
        w.flush()?;
        let mut w = create(dir, "nodes_boundary.pos")?;
        pos.write_node_boundary(&mut w, mesh.nodes())?;
        w.flush()?;
    }
    if config.print_pos_elements {
        let mut w = create(dir, "elements.pos")?;
        pos.write_elements(&mut w, mesh)?;
        w.flush()?;
    }
    if config.print_pos_surface {
        match &summary.surface {
            Some(surface) => {
                let mut w = create(dir, "surface.pos")?;
                pos.write_surface(&mut w, &surface.exterior_facets, mesh.nodes())?;
                w.flush()?;
            }
            None => log::warn!("surface view requested but surface extraction is disabled"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);
    info!("{}", banner());

    let start = Instant::now();
    let config = match &cli.params {
        Some(path) => ProcessingConfig::from_path(path)
            .with_context(|| format!("reading parameters {}", path.display()))?,
        None => ProcessingConfig::default(),
    };

    let mut mesh = load_mesh(&cli)?;
    info!(
        "loaded {} nodes, {} elements in {:.3?}",
        mesh.num_nodes(),
        mesh.num_elements(),
        start.elapsed()
    );

    let mut reporter = LogReporter;
    let summary = process(&mut mesh, &config, &mut reporter)?;
    if let Some(surface) = &summary.surface {
        info!(
            "marked {} facets, surface area {}",
            surface.marked_facets, surface.area
        );
    }

    write_outputs(&cli.output_dir, &mesh, &config, &summary)?;
    info!(
        "wrote results to {} ({:.3?} total)",
        cli.output_dir.display(),
        start.elapsed()
    );
    Ok(())
}
