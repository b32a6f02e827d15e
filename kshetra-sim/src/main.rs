//! Kshetra-Sim - Marker-collection simulator
//!
//! Generates a walled arena, drops an agent into it, runs the hybrid
//! exploration strategy until every marker is collected, delivers the
//! haul to the nearest open corner, and writes an SVG report of the
//! run.

mod config;
mod error;
mod render;
mod trail;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use kshetra_arena::{
    deliver_to_corner, random_dimension, Agent, ArenaShape, Explorer, Grid, GridCoord, Heading,
    Outcome,
};

use config::SimConfig;
use error::Result;
use render::{SvgConfig, SvgRenderer};
use trail::TrailRecorder;

/// Grid arena exploration simulator.
#[derive(Parser, Debug)]
#[command(name = "kshetra-sim", version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a deterministic run (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the SVG report (overrides the config file)
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kshetra_sim=info".parse().unwrap())
                .add_directive("kshetra_arena=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            SimConfig::load(path)?
        }
        None if Path::new("kshetra.toml").exists() => {
            info!("Loading configuration from kshetra.toml");
            SimConfig::load(Path::new("kshetra.toml"))?
        }
        None => {
            info!("Using default configuration");
            SimConfig::default()
        }
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(svg) = &args.svg {
        config.output.svg_path = svg.to_string_lossy().into_owned();
    }

    info!("Kshetra-Sim v{}", env!("CARGO_PKG_VERSION"));
    run(&config)
}

fn run(config: &SimConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => {
            info!("Seeded run: {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut grid = build_arena(config, &mut rng)?;
    let mut agent = place_agent(config, &grid, &mut rng)?;

    let mut trail = TrailRecorder::new(
        &grid,
        agent.position(),
        Duration::from_millis(config.agent.step_delay_ms),
    );

    let summary = Explorer::new(&mut grid, &mut agent).run(&mut trail);
    match summary.outcome {
        Outcome::MarkersCleared => info!(
            "Collected all {} markers in {} steps ({} tiles visited)",
            summary.markers_collected, summary.steps, summary.tiles_visited
        ),
        Outcome::CoverageExhausted => warn!(
            "Coverage exhausted with {} markers left after {} steps",
            grid.marker_count(),
            summary.steps
        ),
        Outcome::TargetUnreachable => warn!(
            "Gave up on an unreachable target with {} markers left after {} steps",
            grid.marker_count(),
            summary.steps
        ),
    }

    let dropped = deliver_to_corner(&mut grid, &mut agent, &mut trail);
    if dropped > 0 {
        info!("Delivered {dropped} markers to {}", agent.position());
    }

    let svg_path = Path::new(&config.output.svg_path);
    SvgRenderer::new(&grid, SvgConfig::default())
        .with_title(format!(
            "Kshetra run: {} markers collected, {} moves",
            summary.markers_collected,
            trail.segments().len()
        ))
        .with_trail(trail.segments())
        .with_pickups(trail.collected())
        .with_drop_site(trail.drop_site().map(|(site, _)| site))
        .with_agent(&agent)
        .save(svg_path)?;
    info!("SVG report saved to {:?}", svg_path);

    Ok(())
}

/// Build the arena from fixed or random dimensions.
fn build_arena(config: &SimConfig, rng: &mut StdRng) -> Result<Grid> {
    let max = config.arena.max_dimension;
    let width = match config.arena.width {
        Some(w) => w,
        None => random_dimension(rng, max),
    };
    let height = match config.arena.height {
        Some(h) => h,
        None => random_dimension(rng, max),
    };

    let shape = config
        .arena
        .shape
        .unwrap_or_else(|| ArenaShape::ALL[rng.gen_range(0..ArenaShape::ALL.len())]);

    let generator = config.arena.generator(shape);
    info!(
        "Generating {width}x{height} arena: {:?}, {} obstacles, {} markers",
        generator.shape, generator.obstacle_count, generator.marker_count
    );

    let grid = Grid::generate(width, height, &generator, rng)?;
    Ok(grid)
}

/// Place the agent on its configured start tile, or randomly.
fn place_agent(config: &SimConfig, grid: &Grid, rng: &mut StdRng) -> Result<Agent> {
    let agent = match config.agent.fixed_start() {
        Some((x, y)) => {
            let start = GridCoord::new(x, y);
            Agent::validate_start(grid, start)?;
            let heading = Heading::ALL[rng.gen_range(0..4)];
            Agent::new(start, heading)
        }
        None => Agent::place_random(grid, rng)?,
    };
    info!(
        "Agent starts at {} facing {:?}",
        agent.position(),
        agent.heading()
    );
    Ok(agent)
}
