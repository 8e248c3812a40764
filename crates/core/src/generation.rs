//! Schedule-agnostic generation run: one tick at a time until the target
//! room count is placed. Hosts decide when ticks happen.

use tracing::{debug, info, instrument, warn};

use crate::builder::{RoomGraphBuilder, StepResult};
use crate::config::GenerationConfig;
use crate::error::{ConfigError, GenerationError};
use crate::layout::Layout;
use crate::room::Room;
use crate::types::{Direction, RoomId};

/// Render-facing event for a committed room. The origin has no anchor and
/// no connector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomPlaced {
    pub room: Room,
    pub anchor: Option<RoomId>,
    pub connector: Option<Direction>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Placed(RoomPlaced),
    Skipped { anchor: RoomId, direction: Direction },
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSummary {
    pub ticks: u64,
    pub placed: usize,
    pub skipped: u64,
    pub layout: Layout,
}

pub struct Generation {
    builder: RoomGraphBuilder,
    ticks: u64,
    skipped: u64,
    tick_budget: Option<u64>,
}

impl Generation {
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        let builder = RoomGraphBuilder::new(config)?;
        Ok(Self { builder, ticks: 0, skipped: 0, tick_budget: None })
    }

    /// Makes `tick` fail once `max_ticks` ticks have been spent without
    /// reaching the target.
    pub fn with_tick_budget(mut self, max_ticks: u64) -> Self {
        self.tick_budget = Some(max_ticks);
        self
    }

    pub fn builder(&self) -> &RoomGraphBuilder {
        &self.builder
    }

    pub fn target(&self) -> usize {
        self.builder.config().target_room_count
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn placed_count(&self) -> usize {
        self.builder.room_count()
    }

    pub fn skipped_count(&self) -> u64 {
        self.skipped
    }

    pub fn is_complete(&self) -> bool {
        self.placed_count() >= self.target()
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(tick = self.ticks, placed = self.placed_count())
    )]
    pub fn tick(&mut self) -> Result<TickOutcome, GenerationError> {
        if self.is_complete() {
            return Ok(TickOutcome::Complete);
        }
        if self.tick_budget.is_some_and(|budget| self.ticks >= budget) {
            let error = GenerationError::TickBudgetExhausted {
                ticks: self.ticks,
                placed: self.placed_count(),
            };
            warn!(%error, "generation out of ticks");
            return Err(error);
        }
        self.ticks += 1;

        if self.placed_count() == 0 {
            let origin = self.builder.config().origin;
            let id = self.builder.place_origin_room(origin)?;
            let room = self.builder.room(id).cloned().ok_or(GenerationError::UnknownRoom(id))?;
            self.log_if_complete();
            return Ok(TickOutcome::Placed(RoomPlaced { room, anchor: None, connector: None }));
        }

        match self.builder.step() {
            Ok(StepResult::Placed(placement)) => {
                self.log_if_complete();
                Ok(TickOutcome::Placed(RoomPlaced {
                    room: placement.room,
                    anchor: Some(placement.anchor),
                    connector: Some(placement.direction),
                }))
            }
            Ok(StepResult::Skipped { anchor, direction, .. }) => {
                self.skipped += 1;
                Ok(TickOutcome::Skipped { anchor, direction })
            }
            Err(error) => {
                warn!(%error, "generation stuck");
                Err(error)
            }
        }
    }

    /// Ticks until complete, failing once `max_ticks` ticks have been spent
    /// without reaching the target.
    pub fn run_to_completion(
        &mut self,
        max_ticks: u64,
    ) -> Result<GenerationSummary, GenerationError> {
        while !self.is_complete() {
            if self.ticks >= max_ticks {
                return Err(GenerationError::TickBudgetExhausted {
                    ticks: self.ticks,
                    placed: self.placed_count(),
                });
            }
            self.tick()?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary {
            ticks: self.ticks,
            placed: self.placed_count(),
            skipped: self.skipped,
            layout: Layout::from_builder(&self.builder),
        }
    }

    fn log_if_complete(&self) {
        if self.is_complete() {
            info!(
                rooms = self.placed_count(),
                ticks = self.ticks,
                skipped = self.skipped,
                "generation complete"
            );
        } else {
            debug!(placed = self.placed_count(), target = self.target(), "room placed");
        }
    }
}
