use anyhow::{Result, bail};
use clap::Parser;
use roomgen::{CollisionScope, Generation, GenerationConfig, GenerationError, audit};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of consecutive seeds to run
    #[arg(long, default_value_t = 500)]
    runs: u64,
    #[arg(short, long, default_value_t = 60)]
    rooms: usize,
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    #[arg(long)]
    all_rooms: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let scope =
        if args.all_rooms { CollisionScope::AllRooms } else { CollisionScope::OpenRooms };

    info!(seed = args.seed, runs = args.runs, rooms = args.rooms, "starting fuzz harness");
    let mut stuck_runs = 0u64;
    let mut failed_runs = 0u64;

    for seed in args.seed..args.seed.saturating_add(args.runs) {
        let config = GenerationConfig {
            seed,
            target_room_count: args.rooms,
            collision_scope: scope,
            ..GenerationConfig::default()
        };
        let mut generation = Generation::new(config)?;

        match generation.run_to_completion(args.max_ticks) {
            Ok(_) => {}
            Err(GenerationError::NoOpenRooms { placed, .. }) => {
                // Not an invariant failure: the layout sealed itself in.
                stuck_runs += 1;
                info!(seed, placed, "run got stuck");
            }
            Err(err) => bail!("seed {seed}: {err}"),
        }

        let violations = audit(generation.builder());
        if !violations.is_empty() {
            failed_runs += 1;
            error!(seed, ?violations, "invariant violations");
        }
    }

    if failed_runs > 0 {
        bail!("{failed_runs} of {} runs violated invariants", args.runs);
    }
    println!("Fuzzing completed successfully ({stuck_runs} stuck runs).");
    Ok(())
}
