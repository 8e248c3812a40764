//! Typed failures raised by configuration and room generation.

use std::io;

use thiserror::Error;

use crate::types::{Direction, Rect, RoomId};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no rooms with available connections ({placed} of {target} rooms placed)")]
    NoOpenRooms { placed: usize, target: usize },

    #[error("origin room has not been placed")]
    OriginMissing,

    #[error("origin room has already been placed")]
    OriginAlreadyPlaced,

    #[error("origin {rect:?} is not a {width}x{height} room")]
    InvalidOrigin { rect: Rect, width: i32, height: i32 },

    #[error("unknown room {0:?}")]
    UnknownRoom(RoomId),

    #[error("room {room:?} is already connected to the {direction:?}")]
    SlotOccupied { room: RoomId, direction: Direction },

    #[error("room {direction:?} of {anchor:?} falls outside the coordinate range")]
    CoordinateOverflow { anchor: RoomId, direction: Direction },

    #[error("tick budget exhausted after {ticks} ticks with {placed} rooms placed")]
    TickBudgetExhausted { ticks: u64, placed: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target room count must be at least 1")]
    ZeroTargetRoomCount,

    #[error("room size must be positive, got {width}x{height}")]
    NonPositiveRoomSize { width: i32, height: i32 },

    #[error("room size must be at most {max}, got {width}x{height}")]
    RoomSizeTooLarge { width: i32, height: i32, max: i32 },

    #[error("separation must not be negative, got {0}")]
    NegativeSeparation(i32),

    #[error("separation must be at most {max}, got {separation}")]
    SeparationTooLarge { separation: i32, max: i32 },

    #[error("origin rectangle must have top-left strictly above and left of bottom-right")]
    DegenerateOrigin,

    #[error("origin is {actual_width}x{actual_height} but rooms are {width}x{height}")]
    OriginSizeMismatch { width: i32, height: i32, actual_width: i64, actual_height: i64 },

    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
