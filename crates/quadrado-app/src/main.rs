//! Headless QUADRADO runner.
//!
//! Plays a scripted session against the simulation engine and reports the
//! outcome. Useful for soak-testing the core without a renderer.

mod game_loop;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quadrado_core::config::GameConfig;
use quadrado_sim::engine::SimConfig;
use quadrado_sim::persistence::{JsonUpgradeFile, DEFAULT_UPGRADES_PATH};

use crate::game_loop::{LoopOptions, Session};

#[derive(Debug, Parser)]
#[command(name = "quadrado", about = "Run a headless QUADRADO session")]
struct Args {
    /// RNG seed for the simulation and the scripted pilot.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Number of enemies in the wave.
    #[arg(long, default_value_t = 5)]
    enemies: usize,

    /// JSON game config. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Persisted upgrades file.
    #[arg(long, default_value = DEFAULT_UPGRADES_PATH)]
    upgrades: PathBuf,

    /// Pace ticks at the configured tick rate instead of running flat out.
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON.
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let game = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut session = Session::new(
        SimConfig {
            seed: args.seed,
            game,
            ..Default::default()
        },
        &JsonUpgradeFile::new(&args.upgrades),
        LoopOptions {
            enemies: args.enemies,
            realtime: args.realtime,
        },
    );

    let summary = session.run(args.ticks);
    info!(
        ticks = summary.ticks,
        phase = ?summary.phase,
        enemies_destroyed = summary.enemies_destroyed,
        shots = summary.shots,
        player_life = summary.player_life,
        "session finished"
    );

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&summary.last_snapshot)?);
    }
    Ok(())
}
