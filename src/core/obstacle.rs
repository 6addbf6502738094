//! Obstacles, seabed rocks and goal portals.
use crate::core::aabb::{Aabb, EntityKind, FixedKind};
use crate::core::config::{GOAL_PHASE_RATE, MAJOR_PHASE_RATE, REGULAR_PHASE_RATE};
use crate::core::math::Vec3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Crane-like wreck; blocks the player.
    Major,
    /// Rock with seaweed; decorative.
    Regular,
}

impl ObstacleKind {
    pub fn fixed_kind(self) -> FixedKind {
        match self {
            ObstacleKind::Major => FixedKind::MajorObstacle,
            ObstacleKind::Regular => FixedKind::RegularObstacle,
        }
    }

    pub fn entity_kind(self) -> EntityKind {
        self.fixed_kind().entity_kind()
    }

    pub fn phase_rate(self) -> f32 {
        match self {
            ObstacleKind::Major => MAJOR_PHASE_RATE,
            ObstacleKind::Regular => REGULAR_PHASE_RATE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec3,
    pub visible: bool,
    pub animating: bool,
    pub phase: f32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, z: f32) -> Self {
        Self {
            kind,
            pos: Vec3::new(x, 0.0, z),
            visible: true,
            animating: true,
            phase: 0.0,
        }
    }

    pub fn blocks(&self) -> bool {
        self.visible && self.kind.entity_kind().blocks()
    }

    pub fn aabb(&self) -> Aabb {
        self.kind.fixed_kind().aabb_at(self.pos)
    }

    pub fn advance(&mut self, dt: f32) {
        if self.animating {
            self.phase += dt * self.kind.phase_rate();
        }
    }
}

/// Large seabed rock; not part of the obstacle groups but still collidable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rock {
    pub center: Vec3,
    pub size: f32,
}

impl Rock {
    pub const fn new(x: f32, y: f32, z: f32, size: f32) -> Self {
        Self { center: Vec3::new(x, y, z), size }
    }

    /// Flattened sphere of diameter `size`, squashed to 60% height.
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(0.5 * self.size, 0.5 * self.size * 0.6, 0.5 * self.size)
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.center, self.half_extents())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Goal {
    pub pos: Vec3,
    pub visible: bool,
    pub phase: f32,
}

impl Goal {
    pub fn new(x: f32, y: f32, z: f32, phase: f32) -> Self {
        Self { pos: Vec3::new(x, y, z), visible: true, phase }
    }

    pub fn aabb(&self) -> Aabb {
        FixedKind::Goal.aabb_at(self.pos)
    }

    /// Goals spin regardless of any animation toggle.
    pub fn advance(&mut self, dt: f32) {
        self.phase += dt * GOAL_PHASE_RATE;
    }

    pub fn is_collected(&self) -> bool {
        !self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn only_visible_majors_block() {
        let mut major = Obstacle::new(ObstacleKind::Major, 2.0, 1.8);
        let regular = Obstacle::new(ObstacleKind::Regular, 3.4, 3.2);
        assert!(major.blocks());
        assert!(!regular.blocks());
        major.visible = false;
        assert!(!major.blocks());
    }

    #[test]
    fn paused_obstacle_keeps_phase() {
        let mut o = Obstacle::new(ObstacleKind::Regular, 0.0, 0.0);
        o.advance(1.0);
        assert_abs_diff_eq!(o.phase, 1.2, epsilon = 1e-6);
        o.animating = false;
        o.advance(1.0);
        assert_abs_diff_eq!(o.phase, 1.2, epsilon = 1e-6);
    }

    #[test]
    fn rock_box_is_flattened() {
        let rock = Rock::new(1.0, 0.08, 1.2, 0.35);
        let b = rock.aabb();
        assert_abs_diff_eq!(b.max.x - b.min.x, 0.35, epsilon = 1e-6);
        assert_abs_diff_eq!(b.max.y - b.min.y, 0.21, epsilon = 1e-6);
    }
}
