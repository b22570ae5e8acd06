//! VastuKhoj - collect-all-then-exit grid search
//!
//! Generates a random grid, then searches for the shortest walk that picks up
//! every collectible before finishing on the exit, drawing each search step.
//!
//! Usage:
//!   vastu-khoj                          # configs/config.yaml or defaults
//!   vastu-khoj --config my.yaml --seed 7
//!   vastu-khoj --size 8 --obstacles 12 --quiet

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Duration;

use vastu_khoj::{AsciiRenderer, KhojConfig, Result, run_episode};

/// Collect-all-then-exit grid search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults to configs/config.yaml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// RNG seed for a reproducible grid
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid side length in cells
    #[arg(long)]
    size: Option<usize>,

    /// Number of collectibles
    #[arg(long)]
    collectibles: Option<usize>,

    /// Number of obstacles
    #[arg(long)]
    obstacles: Option<usize>,

    /// Grids to sample before giving up
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Pause between frames in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Only draw the final path
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{} ({})", e, e.code());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path);
            KhojConfig::load(Path::new(path))?
        }
        None => KhojConfig::load_default()?,
    };
    apply_overrides(&mut config, &args);

    let env_config = config.to_environment_config();
    info!(
        "VastuKhoj v{}: {}x{} grid, {} collectibles, {} obstacles",
        env!("CARGO_PKG_VERSION"),
        env_config.size,
        env_config.size,
        env_config.collectibles,
        env_config.obstacles
    );

    let show_visits = config.render.enabled && !args.quiet;
    let mut renderer = AsciiRenderer::new(std::io::stdout().lock())
        .with_visits(show_visits)
        .with_final(config.render.show_final)
        .with_frame_delay(if show_visits {
            config.frame_delay()
        } else {
            Duration::ZERO
        });

    let episode = match env_config.seed {
        Some(seed) => run_episode(&env_config, &mut StdRng::seed_from_u64(seed), &mut renderer)?,
        None => run_episode(&env_config, &mut rand::rng(), &mut renderer)?,
    };
    drop(renderer);

    let result = &episode.result;
    if result.success {
        let path: Vec<String> = result.path.iter().map(|p| p.to_string()).collect();
        println!("Path found: [{}]", path.join(", "));
        println!(
            "Collected {}/{} in {} steps ({} states expanded)",
            result.collected,
            result.total,
            result.steps(),
            result.states_expanded
        );
    } else {
        println!(
            "No path found (collected {}/{}, {} states expanded)",
            result.collected, result.total, result.states_expanded
        );
    }

    Ok(())
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut KhojConfig, args: &Args) {
    let env = &mut config.environment;
    if let Some(seed) = args.seed {
        env.seed = Some(seed);
    }
    if let Some(size) = args.size {
        env.size = size;
    }
    if let Some(collectibles) = args.collectibles {
        env.collectibles = collectibles;
    }
    if let Some(obstacles) = args.obstacles {
        env.obstacles = obstacles;
    }
    if let Some(max_attempts) = args.max_attempts {
        env.max_attempts = max_attempts;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.render.frame_delay_ms = delay_ms;
    }
}
