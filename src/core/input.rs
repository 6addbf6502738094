//! Key bindings and how each intent changes the game.
//!
//! Keys map to an [`Intent`] without touching state; [`apply`] performs it and
//! then clamps the player back into the arena.
use std::time::Instant;

use tracing::debug;

use crate::core::camera::ViewMode;
use crate::core::config::{CAMERA_STEP, CAMERA_TURN_DEG};
use crate::core::game::Game;
use crate::core::math::Vec3;

/// A discrete key press as delivered by the window layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Escape,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intent {
    /// Step the player by `dir * speed` and face `yaw` (if any).
    MovePlayer { dir: Vec3, yaw: Option<f32> },
    CameraStrafe(f32),
    CameraPan(f32),
    CameraDolly(f32),
    CameraPitch(f32),
    CameraYaw(f32),
    AnimateMajors(bool),
    AnimateRegulars(bool),
    SetView(ViewMode),
    Restart,
    Quit,
}

/// Whether the loop should keep running after a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn map_key(key: Key) -> Option<Intent> {
    let step = |x: f32, y: f32, z: f32, yaw: Option<f32>| Intent::MovePlayer {
        dir: Vec3::new(x, y, z),
        yaw,
    };
    let intent = match key {
        Key::Up => Intent::CameraPitch(CAMERA_TURN_DEG),
        Key::Down => Intent::CameraPitch(-CAMERA_TURN_DEG),
        Key::Left => Intent::CameraYaw(CAMERA_TURN_DEG),
        Key::Right => Intent::CameraYaw(-CAMERA_TURN_DEG),
        Key::Escape => Intent::Quit,
        Key::Char(c) => match c {
            'w' => Intent::CameraPan(CAMERA_STEP),
            's' => Intent::CameraPan(-CAMERA_STEP),
            'a' => Intent::CameraStrafe(CAMERA_STEP),
            'd' => Intent::CameraStrafe(-CAMERA_STEP),
            'q' => Intent::CameraDolly(CAMERA_STEP),
            'e' => Intent::CameraDolly(-CAMERA_STEP),

            'i' => step(0.0, 0.0, -1.0, Some(0.0)),
            'k' => step(0.0, 0.0, 1.0, Some(180.0)),
            'j' => step(-1.0, 0.0, 0.0, Some(90.0)),
            'l' => step(1.0, 0.0, 0.0, Some(-90.0)),
            'u' => step(0.0, 1.0, 0.0, None),
            'o' => step(0.0, -1.0, 0.0, None),

            'm' => Intent::AnimateMajors(true),
            'n' => Intent::AnimateMajors(false),
            'v' => Intent::AnimateRegulars(true),
            'b' => Intent::AnimateRegulars(false),

            '1'..='5' => Intent::SetView(ViewMode::from_number(c as u8 - b'0')?),
            'r' | 'R' => Intent::Restart,
            _ => return None,
        },
    };
    Some(intent)
}

/// Whether an intent is honoured once the session is over.
fn allowed_when_over(intent: &Intent) -> bool {
    matches!(
        intent,
        Intent::Restart | Intent::Quit | Intent::CameraPitch(_) | Intent::CameraYaw(_)
    )
}

/// Performs `intent` on `game`. `now` becomes the clock reference on restart.
pub fn apply(game: &mut Game, intent: Intent, now: Instant) -> Flow {
    let honoured = if game.session.over {
        allowed_when_over(&intent)
    } else {
        !matches!(intent, Intent::Restart)
    };
    if !honoured {
        return Flow::Continue;
    }
    debug!(?intent, "input");
    let moves_camera = matches!(
        intent,
        Intent::CameraStrafe(_)
            | Intent::CameraPan(_)
            | Intent::CameraDolly(_)
            | Intent::CameraPitch(_)
            | Intent::CameraYaw(_)
    );
    match intent {
        Intent::MovePlayer { dir, yaw } => {
            let player = &mut game.player;
            let offset = dir * player.speed;
            player.snapshot();
            player.pos += offset;
            if let Some(yaw) = yaw {
                player.yaw = yaw;
            }
        }
        Intent::CameraStrafe(d) => game.camera.strafe(d),
        Intent::CameraPan(d) => game.camera.pan(d),
        Intent::CameraDolly(d) => game.camera.dolly(d),
        Intent::CameraPitch(a) => game.camera.rotate_pitch(a),
        Intent::CameraYaw(a) => game.camera.rotate_yaw(a),
        Intent::AnimateMajors(on) => game.scene.set_majors_animating(on),
        Intent::AnimateRegulars(on) => game.scene.set_regulars_animating(on),
        Intent::SetView(mode) => {
            game.session.view = mode;
            game.camera.apply_preset(mode, game.player.pos, game.player.yaw);
        }
        Intent::Restart => {
            game.restart(now);
            return Flow::Continue;
        }
        Intent::Quit => return Flow::Quit,
    }
    game.player.clamp_to_arena();
    // chase re-aims on everything except manual camera nudges
    if game.session.view == ViewMode::Chase && !moves_camera {
        game.camera.apply_preset(ViewMode::Chase, game.player.pos, game.player.yaw);
    }
    Flow::Continue
}

/// Maps and applies one key; unbound keys do nothing.
pub fn handle_key(game: &mut Game, key: Key, now: Instant) -> Flow {
    match map_key(key) {
        Some(intent) => apply(game, intent, now),
        None => Flow::Continue,
    }
}
