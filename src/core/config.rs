//! Tuning constants and the per-session game configuration.
use crate::core::math::Vec3;

pub const WINDOW_WIDTH: i32 = 640;
pub const WINDOW_HEIGHT: i32 = 480;
pub const WINDOW_TITLE: &str = "Coral Maze Escape";

/// Side length of the square arena floor.
pub const ARENA_SIZE: f32 = 10.0;
pub const WALL_HEIGHT: f32 = 1.0;
pub const WALL_THICKNESS: f32 = 0.2;

/// Seabed top surface; the player's centre rests here.
pub const GROUND_Y: f32 = 0.05 / 2.0 + 0.1;
pub const MAX_PLAYER_Y: f32 = 3.0;
pub const AIRBORNE_EPSILON: f32 = 0.01;
/// Forward tilt (degrees) while floating above the seabed.
pub const AIRBORNE_PITCH: f32 = 20.0;

pub const CAMERA_STEP: f32 = 0.1;
pub const CAMERA_TURN_DEG: f32 = 2.0;

pub const GOAL_PHASE_RATE: f32 = 1.5;
pub const REGULAR_PHASE_RATE: f32 = 1.2;
pub const MAJOR_PHASE_RATE: f32 = 1.0;
pub const COLOR_PHASE_RATE: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub time_limit: f32,
    pub player_spawn: Vec3,
    pub player_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit: 90.0,
            player_spawn: Vec3::new(5.0, GROUND_Y, 5.0),
            player_speed: 0.12,
        }
    }
}
