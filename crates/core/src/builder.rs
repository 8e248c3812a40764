//! Room graph growth: anchor selection, collision checks, and connection wiring.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;
use tracing::{debug, instrument};

use crate::config::GenerationConfig;
use crate::error::{ConfigError, GenerationError};
use crate::geometry::{intersects, offset_rect};
use crate::random;
use crate::room::Room;
use crate::types::{CollisionScope, Direction, Rect, RoomId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub room: Room,
    pub anchor: RoomId,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    Placed(Placement),
    /// The candidate overlapped `blocked_by`; nothing was committed.
    Skipped { anchor: RoomId, direction: Direction, blocked_by: RoomId },
}

pub struct RoomGraphBuilder {
    config: GenerationConfig,
    rng: ChaCha8Rng,
    rooms: SlotMap<RoomId, Room>,
    // Creation order; `order[0]` is the origin.
    order: Vec<RoomId>,
    open_rooms: Vec<RoomId>,
}

impl RoomGraphBuilder {
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            rng,
            rooms: SlotMap::with_key(),
            order: Vec::new(),
            open_rooms: Vec::new(),
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn place_origin_room(&mut self, rect: Rect) -> Result<RoomId, GenerationError> {
        if !self.order.is_empty() {
            return Err(GenerationError::OriginAlreadyPlaced);
        }
        if self.config.check_origin(rect).is_err() {
            return Err(GenerationError::InvalidOrigin {
                rect,
                width: self.config.room_width,
                height: self.config.room_height,
            });
        }
        let id = self.commit(rect);
        debug!(?id, ?rect, "placed origin room");
        Ok(id)
    }

    /// Attempts to grow the graph by one room from a random open anchor in a
    /// random free direction.
    #[instrument(level = "debug", skip(self), fields(open = self.open_rooms.len()))]
    pub fn step(&mut self) -> Result<StepResult, GenerationError> {
        if self.order.is_empty() {
            return Err(GenerationError::OriginMissing);
        }
        let Some(anchor) = random::pick(&mut self.rng, &self.open_rooms) else {
            return Err(GenerationError::NoOpenRooms {
                placed: self.order.len(),
                target: self.config.target_room_count,
            });
        };
        let open_directions = self.room_or_err(anchor)?.open_directions();
        let Some(direction) = random::pick(&mut self.rng, &open_directions) else {
            unreachable!("open room {anchor:?} has no empty connection slot");
        };
        self.try_attach(anchor, direction)
    }

    /// Places a room next to `anchor` in `direction` unless the candidate
    /// collides with a room in the configured collision scope.
    pub fn try_attach(
        &mut self,
        anchor: RoomId,
        direction: Direction,
    ) -> Result<StepResult, GenerationError> {
        let anchor_room = self.room_or_err(anchor)?;
        if anchor_room.connection(direction).is_some() {
            return Err(GenerationError::SlotOccupied { room: anchor, direction });
        }
        let candidate = offset_rect(
            anchor_room.rect,
            direction,
            self.config.room_width,
            self.config.room_height,
            self.config.separation,
        )
        .ok_or(GenerationError::CoordinateOverflow { anchor, direction })?;

        if let Some(blocked_by) = self.find_collision(&candidate) {
            debug!(?anchor, ?direction, ?blocked_by, "candidate collides, skipping");
            return Ok(StepResult::Skipped { anchor, direction, blocked_by });
        }

        let id = self.commit(candidate);
        self.rooms[id].connect(direction.opposite(), anchor);
        self.rooms[anchor].connect(direction, id);
        if !self.rooms[id].has_open_slot() {
            self.open_rooms.retain(|&open| open != id);
        }
        if !self.rooms[anchor].has_open_slot() {
            self.open_rooms.retain(|&open| open != anchor);
            debug!(?anchor, "anchor sealed");
        }
        debug!(?id, ?anchor, ?direction, rect = ?candidate, "placed room");

        Ok(StepResult::Placed(Placement { room: self.rooms[id].clone(), anchor, direction }))
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn origin(&self) -> Option<&Room> {
        self.order.first().map(|&id| &self.rooms[id])
    }

    /// Rooms in creation order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.order.iter().map(|&id| &self.rooms[id])
    }

    pub fn open_rooms(&self) -> &[RoomId] {
        &self.open_rooms
    }

    pub fn is_open(&self, id: RoomId) -> bool {
        self.open_rooms.contains(&id)
    }

    pub fn room_count(&self) -> usize {
        self.order.len()
    }

    fn room_or_err(&self, id: RoomId) -> Result<&Room, GenerationError> {
        self.rooms.get(id).ok_or(GenerationError::UnknownRoom(id))
    }

    fn commit(&mut self, rect: Rect) -> RoomId {
        let id = self.rooms.insert_with_key(|id| Room::new(id, rect));
        self.order.push(id);
        self.open_rooms.push(id);
        id
    }

    fn find_collision(&self, candidate: &Rect) -> Option<RoomId> {
        let scope = match self.config.collision_scope {
            CollisionScope::OpenRooms => &self.open_rooms,
            CollisionScope::AllRooms => &self.order,
        };
        scope.iter().copied().find(|&id| intersects(candidate, &self.rooms[id].rect))
    }
}
