use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roomgen::{CollisionScope, Generation, GenerationConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Generate a room graph layout headlessly", long_about = None)]
struct Args {
    /// JSON generation config; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of rooms to place, origin included
    #[arg(short, long)]
    rooms: Option<usize>,
    /// Check candidates against every room instead of only open ones
    #[arg(long)]
    all_rooms: bool,
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    /// Print the full layout as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GenerationConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GenerationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(rooms) = args.rooms {
        config.target_room_count = rooms;
    }
    if args.all_rooms {
        config.collision_scope = CollisionScope::AllRooms;
    }

    let mut generation = Generation::new(config).context("Invalid generation config")?;
    let summary = generation.run_to_completion(args.max_ticks).context("Generation failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary.layout)
            .context("Failed to serialize layout")?;
        println!("{json}");
        return Ok(());
    }

    println!("Generation complete.");
    println!("Seed: {}", summary.layout.seed);
    println!("Rooms: {}", summary.placed);
    println!("Connections: {}", summary.layout.connection_count());
    println!("Ticks: {} ({} skipped)", summary.ticks, summary.skipped);
    println!("Layout Hash: 0x{:016x}", summary.layout.layout_hash());

    Ok(())
}
