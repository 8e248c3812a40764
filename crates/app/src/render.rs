//! Drawing for placed rooms, connectors, and the status line.

use app::app_loop::AppState;
use app::status_line;
use macroquad::prelude::*;
use roomgen::{Generation, Rect, RoomPlaced, connector_rect};

const ORIGIN_FILL: u32 = 0xffff55;
const ROOM_FILL: u32 = 0xbb55ff;
const OUTLINE_THICKNESS: f32 = 1.0;
const STATUS_FONT_SIZE: f32 = 22.0;
const STATUS_PAD: f32 = 20.0;

pub fn draw_frame(app_state: &AppState, generation: &Generation, seed: u64) {
    let separation = generation.builder().config().separation;
    let offset = match app_state.placed.first() {
        Some(origin) => view_offset(origin.room.rect, screen_width(), screen_height()),
        None => Vec2::ZERO,
    };

    for (index, event) in app_state.placed.iter().enumerate() {
        draw_room(event.room.rect, offset, room_fill(index == 0));
        draw_connector(event, separation, offset);
    }

    let status = status_line(&app_state.mode, generation, seed);
    draw_text(&status, STATUS_PAD, STATUS_PAD + STATUS_FONT_SIZE / 2.0, STATUS_FONT_SIZE, WHITE);
    draw_text(
        "[Space] pause  [Right] step  [R] regenerate  [Esc] quit",
        STATUS_PAD,
        screen_height() - STATUS_PAD,
        STATUS_FONT_SIZE * 0.8,
        LIGHTGRAY,
    );
}

fn draw_room(rect: Rect, offset: Vec2, fill: Color) {
    let (x, y, width, height) = screen_rect(rect, offset);
    draw_rectangle(x, y, width, height, fill);
    draw_rectangle_lines(x, y, width, height, OUTLINE_THICKNESS, WHITE);
}

fn draw_connector(event: &RoomPlaced, separation: i32, offset: Vec2) {
    let Some(direction) = event.connector else {
        return;
    };
    let (x, y, width, height) =
        screen_rect(connector_rect(event.room.rect, direction, separation), offset);
    draw_rectangle(x, y, width, height, WHITE);
}

pub(crate) fn room_fill(is_origin: bool) -> Color {
    Color::from_hex(if is_origin { ORIGIN_FILL } else { ROOM_FILL })
}

/// Translation that puts the origin room's centre at the centre of the screen.
pub(crate) fn view_offset(origin: Rect, screen_width: f32, screen_height: f32) -> Vec2 {
    let center = origin.center();
    vec2(screen_width / 2.0 - center.x as f32, screen_height / 2.0 - center.y as f32)
}

pub(crate) fn screen_rect(rect: Rect, offset: Vec2) -> (f32, f32, f32, f32) {
    (
        rect.top_left.x as f32 + offset.x,
        rect.top_left.y as f32 + offset.y,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[cfg(test)]
mod tests;
