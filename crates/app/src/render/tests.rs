use super::{room_fill, screen_rect, view_offset};
use macroquad::prelude::{Color, vec2};
use roomgen::config::DEFAULT_ORIGIN;

#[test]
fn origin_uses_highlight_fill() {
    assert_eq!(room_fill(true), Color::from_hex(0xffff55));
    assert_eq!(room_fill(false), Color::from_hex(0xbb55ff));
    assert_ne!(room_fill(true), room_fill(false));
}

#[test]
fn origin_is_centred_on_screen() {
    let offset = view_offset(DEFAULT_ORIGIN, 1400.0, 800.0);
    assert_eq!(offset, vec2(50.0, 50.0));

    let (x, y, width, height) = screen_rect(DEFAULT_ORIGIN, offset);
    assert_eq!((x + width / 2.0, y + height / 2.0), (700.0, 400.0));
}

#[test]
fn screen_rect_keeps_room_size() {
    let (_, _, width, height) = screen_rect(DEFAULT_ORIGIN, vec2(-600.0, -300.0));
    assert_eq!((width, height), (100.0, 100.0));
}
