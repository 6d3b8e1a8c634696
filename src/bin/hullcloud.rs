use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use hullcloud::algorithms::Algorithm;
use hullcloud::data::PointCloud;
use hullcloud::io;
use hullcloud::random::{random_cloud, Distribution};
use hullcloud::render;

/// Convex hulls of planar point clouds.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
  /// Point file: one `x y` pair per line, optional `X Y` header.
  #[arg(long, conflicts_with = "random")]
  input: Option<PathBuf>,
  /// Generate this many random points instead of reading a file.
  #[arg(long)]
  random: Option<usize>,
  #[arg(long, default_value = "uniform-unit")]
  distribution: Distribution,
  #[arg(long, default_value_t = 0)]
  seed: u64,
  /// graham, jarvis, quickhull, monotone or all.
  #[arg(long, default_value = "all")]
  algorithm: String,
  /// Cross products within this distance of zero count as co-linear.
  #[arg(long, default_value_t = 0.)]
  tolerance: f64,
  /// Write one SVG drawing per algorithm into this directory.
  #[arg(long)]
  svg: Option<PathBuf>,
  /// Write the hull points to this file, in the input format.
  #[arg(long)]
  output: Option<PathBuf>,
}

fn algorithms(name: &str) -> Result<Vec<Algorithm>> {
  if name.trim().eq_ignore_ascii_case("all") {
    return Ok(Algorithm::ALL.to_vec());
  }
  match name.parse::<Algorithm>() {
    Ok(algorithm) => Ok(vec![algorithm]),
    Err(msg) => bail!(msg),
  }
}

fn file_stem(algorithm: Algorithm) -> String {
  algorithm.name().to_ascii_lowercase().replace(' ', "_")
}

fn main() -> Result<()> {
  env_logger::init();
  let args = Cli::parse();

  let algorithms = algorithms(&args.algorithm)?;
  if args.output.is_some() && algorithms.len() != 1 {
    bail!("--output needs a single --algorithm");
  }

  let points = match (&args.input, args.random) {
    (Some(path), _) => {
      io::load_points(path).with_context(|| format!("Failed to read {}", path.display()))?
    }
    (None, Some(n)) => random_cloud(n, args.distribution, args.seed).points().to_vec(),
    (None, None) => bail!("either --input or --random is required"),
  };
  log::info!("Loaded {} points", points.len());
  let cloud = PointCloud::new(points).with_tolerance(args.tolerance);

  if let Some(dir) = &args.svg {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
  }

  for algorithm in algorithms {
    let now = Instant::now();
    let hull = cloud.convex_hull(algorithm);
    let duration = now.elapsed();
    log::info!("{} computed in {:?}", algorithm, duration);

    println!("{} ({} points):", algorithm, hull.len());
    for pt in hull.iter() {
      println!("  {}", pt);
    }

    if let Some(dir) = &args.svg {
      let path = dir.join(format!("{}.svg", file_stem(algorithm)));
      fs::write(&path, render::render_svg(&cloud, &hull, algorithm.name()))
        .with_context(|| format!("Failed to write {}", path.display()))?;
      log::info!("Saved {}", path.display());
    }

    if let Some(path) = &args.output {
      let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
      io::write_points(BufWriter::new(file), hull.points())
        .with_context(|| format!("Failed to write {}", path.display()))?;
      log::info!("Saved {}", path.display());
    }
  }

  Ok(())
}
