//! Structural checks over a built room graph.

use std::collections::HashSet;

use crate::builder::RoomGraphBuilder;
use crate::geometry::intersects;
use crate::types::{Direction, RoomId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    DuplicateId(RoomId),
    DanglingConnection { room: RoomId, direction: Direction, target: RoomId },
    OneWayConnection { room: RoomId, direction: Direction, target: RoomId },
    SealedRoomStillOpen(RoomId),
    OpenRoomMissingFromOpenSet(RoomId),
    Overlap { first: RoomId, second: RoomId },
}

pub fn audit(builder: &RoomGraphBuilder) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut seen = HashSet::new();
    for room in builder.rooms() {
        if !seen.insert(room.id) {
            violations.push(Violation::DuplicateId(room.id));
        }
    }

    for room in builder.rooms() {
        for (direction, target) in room.connections() {
            match builder.room(target) {
                None => violations.push(Violation::DanglingConnection {
                    room: room.id,
                    direction,
                    target,
                }),
                Some(neighbour) if neighbour.connection(direction.opposite()) != Some(room.id) => {
                    violations.push(Violation::OneWayConnection {
                        room: room.id,
                        direction,
                        target,
                    });
                }
                Some(_) => {}
            }
        }

        match (room.has_open_slot(), builder.is_open(room.id)) {
            (false, true) => violations.push(Violation::SealedRoomStillOpen(room.id)),
            (true, false) => violations.push(Violation::OpenRoomMissingFromOpenSet(room.id)),
            _ => {}
        }
    }

    // Pairwise over every committed room, whatever the collision scope.
    let rooms: Vec<_> = builder.rooms().collect();
    for (index, first) in rooms.iter().enumerate() {
        for second in &rooms[index + 1..] {
            if intersects(&first.rect, &second.rect) {
                violations.push(Violation::Overlap { first: first.id, second: second.id });
            }
        }
    }

    violations
}
