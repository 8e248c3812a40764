pub mod app_loop;
pub mod seed;

use app_loop::{AppCompletion, AppMode};
use roomgen::Generation;

pub const APP_NAME: &str = "Room Graph";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a layout hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_layout_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

pub fn mode_label(mode: &AppMode) -> String {
    match mode {
        AppMode::Running => "running".to_string(),
        AppMode::Paused => "paused".to_string(),
        AppMode::Finished(AppCompletion::Complete) => "complete".to_string(),
        AppMode::Finished(AppCompletion::Failed(error)) => format!("failed: {error}"),
    }
}

/// One-line status shown above the layout.
pub fn status_line(mode: &AppMode, generation: &Generation, seed: u64) -> String {
    format!(
        "seed {}  rooms {}/{}  ticks {}  skipped {}  [{}]",
        format_seed(seed),
        generation.placed_count(),
        generation.target(),
        generation.ticks(),
        generation.skipped_count(),
        mode_label(mode),
    )
}
