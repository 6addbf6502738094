//! Polls raylib for this frame's key presses and feeds them to the game.
use std::time::Instant;

use raylib::prelude::*;

use crate::core::game::Game;
use crate::core::input::{Flow, Key, handle_key};

const SPECIAL_KEYS: [(KeyboardKey, Key); 5] = [
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
];

/// Edge-triggered: every press is seen exactly once.
fn pressed_keys(window: &mut RaylibHandle) -> Vec<Key> {
    let mut keys = Vec::new();
    while let Some(c) = window.get_char_pressed() {
        keys.push(Key::Char(c));
    }
    for (raw, key) in SPECIAL_KEYS {
        if window.is_key_pressed(raw) {
            keys.push(key);
        }
    }
    keys
}

pub fn process_events(window: &mut RaylibHandle, game: &mut Game) -> Flow {
    for key in pressed_keys(window) {
        if handle_key(game, key, Instant::now()) == Flow::Quit {
            return Flow::Quit;
        }
    }
    Flow::Continue
}
