//! Owned, index-addressed snapshot of a room graph for output and hashing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::builder::RoomGraphBuilder;
use crate::types::{Direction, Rect, RoomId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRoom {
    pub rect: Rect,
    /// Creation-order index of the neighbour in each direction (N, E, S, W).
    pub connections: [Option<usize>; 4],
    pub open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub seed: u64,
    pub room_width: i32,
    pub room_height: i32,
    pub separation: i32,
    pub rooms: Vec<LayoutRoom>,
}

impl Layout {
    pub fn from_builder(builder: &RoomGraphBuilder) -> Self {
        let index_of: HashMap<RoomId, usize> =
            builder.rooms().enumerate().map(|(index, room)| (room.id, index)).collect();
        let rooms = builder
            .rooms()
            .map(|room| LayoutRoom {
                rect: room.rect,
                connections: Direction::ALL.map(|direction| {
                    room.connection(direction).and_then(|id| index_of.get(&id).copied())
                }),
                open: builder.is_open(room.id),
            })
            .collect();
        let config = builder.config();
        Self {
            seed: config.seed,
            room_width: config.room_width,
            room_height: config.room_height,
            separation: config.separation,
            rooms,
        }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend(self.room_width.to_le_bytes());
        bytes.extend(self.room_height.to_le_bytes());
        bytes.extend(self.separation.to_le_bytes());
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend(room.rect.top_left.y.to_le_bytes());
            bytes.extend(room.rect.top_left.x.to_le_bytes());
            bytes.extend(room.rect.bottom_right.y.to_le_bytes());
            bytes.extend(room.rect.bottom_right.x.to_le_bytes());
            for connection in room.connections {
                // u32::MAX marks an empty slot.
                let encoded = connection.map_or(u32::MAX, |index| index as u32);
                bytes.extend(encoded.to_le_bytes());
            }
            bytes.push(u8::from(room.open));
        }
        bytes
    }

    pub fn layout_hash(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn connection_count(&self) -> usize {
        let slots: usize =
            self.rooms.iter().map(|room| room.connections.iter().flatten().count()).sum();
        slots / 2
    }
}
