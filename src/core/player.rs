//! The diver.
use crate::core::aabb::{Aabb, FixedKind, PLAYER_HALF};
use crate::core::config::{
    AIRBORNE_EPSILON, AIRBORNE_PITCH, ARENA_SIZE, GROUND_Y, MAX_PLAYER_Y, WALL_THICKNESS,
};
use crate::core::math::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec3,
    pub yaw: f32,   // degrees, one of four cardinal headings
    pub pitch: f32, // derived from height each tick
    pub speed: f32,
    /// Position before the latest input-driven move.
    pub prev: Vec3,
}

impl Player {
    pub fn new(spawn: Vec3, speed: f32) -> Self {
        Self {
            pos: spawn,
            yaw: 0.0,
            pitch: 0.0,
            speed,
            prev: spawn,
        }
    }

    pub fn aabb(&self) -> Aabb {
        FixedKind::Player.aabb_at(self.pos)
    }

    /// Remembers the current position so a colliding move can be undone.
    pub fn snapshot(&mut self) {
        self.prev = self.pos;
    }

    pub fn revert(&mut self) {
        self.pos = self.prev;
    }

    pub fn is_airborne(&self) -> bool {
        self.pos.y > GROUND_Y + AIRBORNE_EPSILON
    }

    pub fn update_pitch(&mut self) {
        self.pitch = if self.is_airborne() { AIRBORNE_PITCH } else { 0.0 };
    }

    /// Keeps the player box inside the boundary walls and within the height band.
    pub fn clamp_to_arena(&mut self) {
        let lo_x = WALL_THICKNESS + PLAYER_HALF.x;
        let hi_x = ARENA_SIZE - WALL_THICKNESS - PLAYER_HALF.x;
        let lo_z = WALL_THICKNESS + PLAYER_HALF.z;
        let hi_z = ARENA_SIZE - WALL_THICKNESS - PLAYER_HALF.z;
        self.pos.x = self.pos.x.clamp(lo_x, hi_x);
        self.pos.z = self.pos.z.clamp(lo_z, hi_z);
        self.pos.y = self.pos.y.clamp(GROUND_Y, MAX_PLAYER_Y);
    }
}
