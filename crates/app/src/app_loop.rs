use macroquad::prelude::KeyCode;
use roomgen::{Generation, GenerationError, RoomPlaced, TickOutcome};
use tracing::{info, warn};

/// Fixed delay between generation ticks while running.
pub const TICK_INTERVAL_SECS: f32 = 0.5;
/// Ticks a viewer run may spend before it is reported as stuck.
pub const MAX_TICKS_PER_RUN: u64 = 10_000;

/// How a run ended: every room placed, or the generator could not continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCompletion {
    Complete,
    Failed(GenerationError),
}

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Running,
    Paused,
    Finished(AppCompletion),
}

#[derive(Debug, PartialEq, Eq)]
pub enum FrameRequest {
    Continue,
    Regenerate,
    Quit,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Every placement seen so far, in order; the renderer draws from this.
    pub placed: Vec<RoomPlaced>,
    since_last_tick: f32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process input and pacing for a single frame. `frame_time` is the time
    /// elapsed since the previous frame in seconds.
    pub fn tick(
        &mut self,
        generation: &mut Generation,
        frame_time: f32,
        keys_pressed: &[KeyCode],
    ) -> FrameRequest {
        if keys_pressed.contains(&KeyCode::Escape) {
            return FrameRequest::Quit;
        }
        if keys_pressed.contains(&KeyCode::R) {
            return FrameRequest::Regenerate;
        }

        match self.mode {
            AppMode::Running | AppMode::Paused => {
                if keys_pressed.contains(&KeyCode::Space) {
                    self.mode = match self.mode {
                        AppMode::Running => AppMode::Paused,
                        _ => AppMode::Running,
                    };
                    self.since_last_tick = 0.0;
                }
                if keys_pressed.contains(&KeyCode::Right) && self.mode == AppMode::Paused {
                    self.advance(generation);
                }
            }
            AppMode::Finished(_) => {
                // Only regenerate/quit are valid once finished
            }
        }

        if self.mode == AppMode::Running {
            self.since_last_tick += frame_time;
            if self.since_last_tick >= TICK_INTERVAL_SECS {
                self.since_last_tick = 0.0;
                self.advance(generation);
            }
        }

        FrameRequest::Continue
    }

    fn advance(&mut self, generation: &mut Generation) {
        match generation.tick() {
            Ok(TickOutcome::Placed(event)) => {
                self.placed.push(event);
                if generation.is_complete() {
                    self.finish(AppCompletion::Complete);
                }
            }
            Ok(TickOutcome::Skipped { .. }) => {}
            Ok(TickOutcome::Complete) => self.finish(AppCompletion::Complete),
            Err(error) => {
                warn!(%error, "stopping generation");
                self.finish(AppCompletion::Failed(error));
            }
        }
    }

    fn finish(&mut self, completion: AppCompletion) {
        if completion == AppCompletion::Complete {
            info!(rooms = self.placed.len(), "layout complete");
        }
        self.mode = AppMode::Finished(completion);
    }
}

#[cfg(test)]
mod tests {
    use roomgen::GenerationConfig;

    use super::*;

    fn generation(rooms: usize) -> Generation {
        Generation::new(GenerationConfig::default().with_target_room_count(rooms)).expect("valid")
    }

    #[test]
    fn no_tick_before_interval_elapses() {
        let mut generation = generation(5);
        let mut app = AppState::new();
        app.tick(&mut generation, TICK_INTERVAL_SECS / 2.0, &[]);
        assert_eq!(generation.ticks(), 0);
        app.tick(&mut generation, TICK_INTERVAL_SECS / 2.0, &[]);
        assert_eq!(generation.ticks(), 1);
        assert_eq!(app.placed.len(), 1);
    }

    #[test]
    fn long_frame_still_ticks_once() {
        let mut generation = generation(5);
        let mut app = AppState::new();
        app.tick(&mut generation, TICK_INTERVAL_SECS * 10.0, &[]);
        assert_eq!(generation.ticks(), 1);
    }

    #[test]
    fn single_room_run_finishes_on_first_tick() {
        let mut generation = generation(1);
        let mut app = AppState::new();
        app.tick(&mut generation, TICK_INTERVAL_SECS, &[]);
        assert_eq!(app.mode, AppMode::Finished(AppCompletion::Complete));
        assert_eq!(app.placed.len(), 1);
        assert_eq!(app.placed[0].connector, None);
    }

    #[test]
    fn generation_error_finishes_the_run_and_keeps_the_error() {
        let mut generation = generation(30).with_tick_budget(2);
        let mut app = AppState::new();
        for _ in 0..3 {
            app.tick(&mut generation, TICK_INTERVAL_SECS, &[]);
        }

        let expected = GenerationError::TickBudgetExhausted { ticks: 2, placed: app.placed.len() };
        assert_eq!(app.mode, AppMode::Finished(AppCompletion::Failed(expected.clone())));

        app.tick(&mut generation, TICK_INTERVAL_SECS, &[KeyCode::Space, KeyCode::Right]);
        assert_eq!(generation.ticks(), 2);
        assert_eq!(app.mode, AppMode::Finished(AppCompletion::Failed(expected)));
    }

    #[test]
    fn escape_and_r_are_requests() {
        let mut generation = generation(3);
        let mut app = AppState::new();
        assert_eq!(app.tick(&mut generation, 0.0, &[KeyCode::R]), FrameRequest::Regenerate);
        assert_eq!(app.tick(&mut generation, 0.0, &[KeyCode::Escape]), FrameRequest::Quit);
    }
}
