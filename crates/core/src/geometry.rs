//! Rectangle primitives used by room placement and connector rendering.

use crate::types::{Direction, Pos, Rect};

impl Rect {
    /// Builds a rectangle from its corners, rejecting empty or inverted spans.
    pub fn from_corners(top_left: Pos, bottom_right: Pos) -> Option<Self> {
        if top_left.x < bottom_right.x && top_left.y < bottom_right.y {
            Some(Self { top_left, bottom_right })
        } else {
            None
        }
    }

    pub fn width(self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn center(self) -> Pos {
        Pos {
            y: self.top_left.y + self.height() / 2,
            x: self.top_left.x + self.width() / 2,
        }
    }

    pub fn intersects(self, other: &Self) -> bool {
        intersects(&self, other)
    }
}

/// Translates `rect` to the neighbouring cell in `direction`, leaving a
/// `separation` gap. The span orthogonal to `direction` is copied from `rect`.
/// Returns `None` when the neighbour would leave the `i32` coordinate range.
pub fn offset_rect(
    rect: Rect,
    direction: Direction,
    width: i32,
    height: i32,
    separation: i32,
) -> Option<Rect> {
    let Rect { top_left, bottom_right } = rect;
    let rect = match direction {
        Direction::North => {
            let bottom = top_left.y.checked_sub(separation)?;
            Rect {
                top_left: Pos { y: bottom.checked_sub(height)?, x: top_left.x },
                bottom_right: Pos { y: bottom, x: bottom_right.x },
            }
        }
        Direction::East => {
            let left = bottom_right.x.checked_add(separation)?;
            Rect {
                top_left: Pos { y: top_left.y, x: left },
                bottom_right: Pos { y: bottom_right.y, x: left.checked_add(width)? },
            }
        }
        Direction::South => {
            let top = bottom_right.y.checked_add(separation)?;
            Rect {
                top_left: Pos { y: top, x: top_left.x },
                bottom_right: Pos { y: top.checked_add(height)?, x: bottom_right.x },
            }
        }
        Direction::West => {
            let right = top_left.x.checked_sub(separation)?;
            Rect {
                top_left: Pos { y: top_left.y, x: right.checked_sub(width)? },
                bottom_right: Pos { y: bottom_right.y, x: right },
            }
        }
    };
    Some(rect)
}

/// Strict overlap on both axes. Rectangles that only share an edge do not
/// intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.top_left.x < b.bottom_right.x
        && b.top_left.x < a.bottom_right.x
        && a.top_left.y < b.bottom_right.y
        && b.top_left.y < a.bottom_right.y
}

/// Doorway square sitting in the gap between an anchor and the room placed
/// from it. `room` is the newly placed room and `direction` is the direction
/// travelled from the anchor to reach it.
pub fn connector_rect(room: Rect, direction: Direction, separation: i32) -> Rect {
    let half = separation / 2;
    let mid_x = room.top_left.x + room.width() / 2 - half;
    let mid_y = room.top_left.y + room.height() / 2 - half;
    let top_left = match direction {
        Direction::North => Pos { y: room.bottom_right.y, x: mid_x },
        Direction::East => Pos { y: mid_y, x: room.top_left.x - separation },
        Direction::South => Pos { y: room.top_left.y - separation, x: mid_x },
        Direction::West => Pos { y: mid_y, x: room.bottom_right.x },
    };
    Rect {
        top_left,
        bottom_right: Pos { y: top_left.y + separation, x: top_left.x + separation },
    }
}
