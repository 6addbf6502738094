//! World state: maze, obstacle groups, rocks, goals and the colour phase.
//!
//! Everything is derived from constants; resetting twice gives the same world.
use crate::core::config::COLOR_PHASE_RATE;
use crate::core::maze::{Maze, build_maze};
use crate::core::obstacle::{Goal, Obstacle, ObstacleKind, Rock};

pub const ROCKS: [Rock; 3] = [
    Rock::new(1.0, 0.08, 1.2, 0.35),
    Rock::new(8.2, 0.08, 1.6, 0.45),
    Rock::new(4.0, 0.08, 8.2, 0.30),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub maze: Maze,
    pub majors: Vec<Obstacle>,
    pub regulars: Vec<Obstacle>,
    pub rocks: Vec<Rock>,
    pub goals: Vec<Goal>,
    pub color_phase: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            maze: build_maze(),
            majors: vec![
                Obstacle::new(ObstacleKind::Major, 2.0, 1.8),
                Obstacle::new(ObstacleKind::Major, 7.2, 6.8),
            ],
            regulars: vec![
                Obstacle::new(ObstacleKind::Regular, 3.4, 3.2),
                Obstacle::new(ObstacleKind::Regular, 6.4, 2.2),
                Obstacle::new(ObstacleKind::Regular, 2.2, 8.4),
            ],
            rocks: ROCKS.to_vec(),
            goals: vec![
                Goal::new(4.5, 0.6, 3.7, 0.5), // corridor junction
                Goal::new(7.8, 1.6, 7.8, 1.5), // raised alcove, needs floating
                Goal::new(1.5, 0.65, 9.0, 2.5), // by the pillars
            ],
            color_phase: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_majors_animating(&mut self, on: bool) {
        self.majors.iter_mut().for_each(|o| o.animating = on);
    }

    pub fn set_regulars_animating(&mut self, on: bool) {
        self.regulars.iter_mut().for_each(|o| o.animating = on);
    }

    pub fn majors_animating(&self) -> bool {
        self.majors.iter().any(|o| o.animating)
    }

    pub fn regulars_animating(&self) -> bool {
        self.regulars.iter().any(|o| o.animating)
    }

    /// Hides goal `idx`. Returns false if it was already collected or does not exist.
    pub fn collect_goal(&mut self, idx: usize) -> bool {
        match self.goals.get_mut(idx) {
            Some(goal) if !goal.is_collected() => {
                goal.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn goal_count(&self) -> u32 {
        self.goals.len() as u32
    }

    /// Advances the colour phase and every animation phase by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.color_phase += dt * COLOR_PHASE_RATE;
        for o in self.majors.iter_mut().chain(self.regulars.iter_mut()) {
            o.advance(dt);
        }
        for g in &mut self.goals {
            g.advance(dt);
        }
    }
}
