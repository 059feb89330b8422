//! # Noise Preview
//!
//! Renders a noise configuration as an ASCII heightmap, builds the
//! matching column mesh and times both.
//!
//! ```bash
//! # Built-in terrain preset
//! noise_preview --seed 7 --width 80 --depth 30
//!
//! # From a config file, with debug logs
//! RUST_LOG=debug noise_preview --config noise.toml
//! ```

use std::error::Error;
use std::hint::black_box;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use voxalis::diagnostics::{Benchmark, Clock, DurationUnit, SortBy};
use voxalis::noise::{NoiseConfig, ValueNoise};
use voxalis::preview::{heightmap_mesh, render_ascii, sample_heightmap};

#[derive(Parser, Debug)]
#[command(name = "noise_preview")]
#[command(about = "Preview and benchmark a VOXALIS noise configuration")]
struct Args {
    /// TOML noise config. Uses the terrain preset when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the terrain preset; ignored with --config.
    #[arg(short, long, default_value_t = 1337)]
    seed: i32,

    /// Columns in the preview.
    #[arg(short, long, default_value_t = 64)]
    width: usize,

    /// Rows in the preview.
    #[arg(short, long, default_value_t = 24)]
    depth: usize,

    /// World units between samples.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Tallest column of the preview mesh, in cells.
    #[arg(long, default_value_t = 16)]
    max_height: u32,

    /// Timed runs per benchmark case.
    #[arg(short, long, default_value_t = 50)]
    iterations: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => NoiseConfig::from_file(path)?,
        None => NoiseConfig::terrain(args.seed),
    };
    let fractal = config.build()?;
    tracing::info!(
        seed = config.seed,
        octaves = fractal.octaves(),
        frequency = fractal.frequency(),
        max_magnitude = fractal.max_magnitude(),
        "noise ready"
    );

    let heights = sample_heightmap(&fractal, args.width, args.depth, args.scale);
    println!("{}", render_ascii(&heights, args.width));

    Clock::log(
        "heightmap_mesh",
        || {
            let mesh = heightmap_mesh(&heights, args.width, args.max_height);
            tracing::info!(
                vertices = mesh.count(),
                triangles = mesh.triangle_count(),
                "preview mesh"
            );
        },
        DurationUnit::Milliseconds,
    );

    let base = ValueNoise::new(config.seed, config.frequency, config.amplitude);
    let (width, depth, scale) = (args.width, args.depth, args.scale);

    let mut bench = Benchmark::new(args.iterations);
    bench
        .add("value_noise_heightmap", || {
            black_box(sample_heightmap(&base, width, depth, scale));
        })
        .add("fractal_heightmap", || {
            black_box(sample_heightmap(&fractal, width, depth, scale));
        })
        .add("column_mesh", || {
            black_box(heightmap_mesh(&heights, width, args.max_height));
        });
    bench.process(SortBy::Average);

    Ok(())
}
