//! Generation parameters, fixed for the lifetime of a run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{CollisionScope, Pos, Rect};

pub const DEFAULT_TARGET_ROOM_COUNT: usize = 12;
pub const DEFAULT_ROOM_WIDTH: i32 = 100;
pub const DEFAULT_ROOM_HEIGHT: i32 = 100;
pub const DEFAULT_SEPARATION: i32 = 20;
pub const DEFAULT_ORIGIN: Rect =
    Rect { top_left: Pos { y: 300, x: 600 }, bottom_right: Pos { y: 400, x: 700 } };
/// Upper bound for room width, room height and separation.
pub const MAX_ROOM_EXTENT: i32 = 1 << 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of rooms to place, origin included.
    pub target_room_count: usize,
    pub room_width: i32,
    pub room_height: i32,
    /// Gap left between neighbouring rooms; also the connector size.
    pub separation: i32,
    pub origin: Rect,
    pub seed: u64,
    pub collision_scope: CollisionScope,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_room_count: DEFAULT_TARGET_ROOM_COUNT,
            room_width: DEFAULT_ROOM_WIDTH,
            room_height: DEFAULT_ROOM_HEIGHT,
            separation: DEFAULT_SEPARATION,
            origin: DEFAULT_ORIGIN,
            seed: 0,
            collision_scope: CollisionScope::OpenRooms,
        }
    }
}

impl GenerationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_target_room_count(mut self, target_room_count: usize) -> Self {
        self.target_room_count = target_room_count;
        self
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_room_count == 0 {
            return Err(ConfigError::ZeroTargetRoomCount);
        }
        if self.room_width <= 0 || self.room_height <= 0 {
            return Err(ConfigError::NonPositiveRoomSize {
                width: self.room_width,
                height: self.room_height,
            });
        }
        if self.room_width > MAX_ROOM_EXTENT || self.room_height > MAX_ROOM_EXTENT {
            return Err(ConfigError::RoomSizeTooLarge {
                width: self.room_width,
                height: self.room_height,
                max: MAX_ROOM_EXTENT,
            });
        }
        if self.separation < 0 {
            return Err(ConfigError::NegativeSeparation(self.separation));
        }
        if self.separation > MAX_ROOM_EXTENT {
            return Err(ConfigError::SeparationTooLarge {
                separation: self.separation,
                max: MAX_ROOM_EXTENT,
            });
        }
        self.check_origin(self.origin)
    }

    /// Checks that `rect` is a well-formed room of the configured size.
    pub fn check_origin(&self, rect: Rect) -> Result<(), ConfigError> {
        let Some(origin) = Rect::from_corners(rect.top_left, rect.bottom_right) else {
            return Err(ConfigError::DegenerateOrigin);
        };
        let actual_width = i64::from(origin.bottom_right.x) - i64::from(origin.top_left.x);
        let actual_height = i64::from(origin.bottom_right.y) - i64::from(origin.top_left.y);
        if actual_width != i64::from(self.room_width)
            || actual_height != i64::from(self.room_height)
        {
            return Err(ConfigError::OriginSizeMismatch {
                width: self.room_width,
                height: self.room_height,
                actual_width,
                actual_height,
            });
        }
        Ok(())
    }
}
