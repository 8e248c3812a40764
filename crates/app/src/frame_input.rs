//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const ACTION_KEYS: [KeyCode; 4] = [KeyCode::Space, KeyCode::Right, KeyCode::R, KeyCode::Escape];

pub fn capture_keys_pressed() -> Vec<KeyCode> {
    ACTION_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect()
}
