use std::env;
use std::process;

use app::app_loop::{AppState, FrameRequest, MAX_TICKS_PER_RUN};
use app::seed::{generate_runtime_seed, resolve_launch_options};
use macroquad::prelude::*;
use roomgen::{Generation, GenerationConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod frame_input;
mod render;
mod window_config;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

fn fail(message: &str) -> ! {
    error!("{message}");
    process::exit(2);
}

fn start_generation(base: &GenerationConfig, seed: u64) -> Generation {
    info!(seed, rooms = base.target_room_count, "starting generation");
    Generation::new(base.clone().with_seed(seed))
        .map(|generation| generation.with_tick_budget(MAX_TICKS_PER_RUN))
        .unwrap_or_else(|err| fail(&format!("invalid generation config: {err}")))
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let options = resolve_launch_options(&args, generate_runtime_seed())
        .unwrap_or_else(|err| fail(&format!("invalid arguments: {err}")));

    let mut base_config = match &options.config_path {
        Some(path) => GenerationConfig::load(path).unwrap_or_else(|err| {
            fail(&format!("failed to load config {}: {err}", path.display()))
        }),
        None => GenerationConfig::default(),
    };
    if let Some(rooms) = options.rooms {
        base_config.target_room_count = rooms;
    }

    let mut seed = options.seed.value();
    let mut generation = start_generation(&base_config, seed);
    let mut app_state = AppState::new();

    loop {
        let keys_pressed = frame_input::capture_keys_pressed();
        match app_state.tick(&mut generation, get_frame_time(), &keys_pressed) {
            FrameRequest::Continue => {}
            FrameRequest::Regenerate => {
                seed = generate_runtime_seed();
                generation = start_generation(&base_config, seed);
                app_state = AppState::new();
            }
            FrameRequest::Quit => break,
        }

        clear_background(BLACK);
        render::draw_frame(&app_state, &generation, seed);
        next_frame().await
    }
}
