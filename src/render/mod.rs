//! Rendering: the 3D scene and the HUD overlay.
//!
//! Re-exports:
//! - `render3d`: World drawing and the raylib camera
//! - `hud`: Status line, controls and end-of-session banner

pub mod render3d;
pub mod hud;

use raylib::prelude::*;

use crate::core::game::Game;
use hud::{HudText, draw_hud};
use render3d::{WATER, camera_3d, render_3d};

/// Draws one complete frame from the current game state.
pub fn render_frame(window: &mut RaylibHandle, thread: &RaylibThread, game: &Game) {
    let width = window.get_screen_width();
    let height = window.get_screen_height();
    let hud = HudText::from_game(game);

    let mut d = window.begin_drawing(thread);
    d.clear_background(WATER);
    {
        let mut d3 = d.begin_mode3D(camera_3d(game));
        render_3d(&mut d3, game);
    }
    draw_hud(&mut d, &hud, width, height);
}
