//! Committed room entity and its per-direction connection slots.

use crate::types::{Direction, Rect, RoomId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub rect: Rect,
    connections: [Option<RoomId>; 4],
}

impl Room {
    pub(crate) fn new(id: RoomId, rect: Rect) -> Self {
        Self { id, rect, connections: [None; 4] }
    }

    pub fn connection(&self, direction: Direction) -> Option<RoomId> {
        self.connections[direction.index()]
    }

    pub fn connections(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.connection(direction).map(|id| (direction, id)))
    }

    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.connection(direction).is_none())
            .collect()
    }

    pub fn has_open_slot(&self) -> bool {
        self.connections.iter().any(Option::is_none)
    }

    pub(crate) fn connect(&mut self, direction: Direction, other: RoomId) {
        debug_assert!(self.connections[direction.index()].is_none());
        self.connections[direction.index()] = Some(other);
    }
}
