//! Session state and the per-tick simulation step.
//!
//! `Game` is the single context owned by the main loop; input, update and
//! rendering all receive it by reference.
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::aabb::{Aabb, EntityKind};
use crate::core::camera::{Camera, ViewMode};
use crate::core::config::GameConfig;
use crate::core::player::Player;
use crate::core::scene::Scene;

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub time_left: f32,
    pub collected: u32,
    pub total: u32,
    pub over: bool,
    pub win: bool,
    pub view: ViewMode,
}

impl Session {
    pub fn new(time_limit: f32, total: u32) -> Self {
        Self {
            time_left: time_limit,
            collected: 0,
            total,
            over: false,
            win: false,
            view: ViewMode::Front,
        }
    }
}

/// Which blocking group stopped the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Blocker {
    Coral(usize),
    Major(usize),
    Rock(usize),
}

impl fmt::Display for Blocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocker::Coral(i) => write!(f, "coral #{i}"),
            Blocker::Major(i) => write!(f, "major obstacle #{i}"),
            Blocker::Rock(i) => write!(f, "rock #{i}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Collided(Blocker),
    GoalCollected { collected: u32, total: u32 },
    Won,
    TimeUp { win: bool },
}

pub struct Game {
    pub config: GameConfig,
    pub session: Session,
    pub scene: Scene,
    pub player: Player,
    pub camera: Camera,
    last_tick: Instant,
}

impl Game {
    pub fn new(config: GameConfig, now: Instant) -> Self {
        let scene = Scene::new();
        let session = Session::new(config.time_limit, scene.goal_count());
        let player = Player::new(config.player_spawn, config.player_speed);
        let mut camera = Camera::default();
        camera.apply_preset(session.view, player.pos, player.yaw);
        Self { config, session, scene, player, camera, last_tick: now }
    }

    /// Resets session, scene, player and camera, and restarts the clock at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.scene.reset();
        self.session = Session::new(self.config.time_limit, self.scene.goal_count());
        self.player = Player::new(self.config.player_spawn, self.config.player_speed);
        self.camera.apply_preset(self.session.view, self.player.pos, self.player.yaw);
        self.last_tick = now;
        info!("session restarted");
    }

    /// Runs one tick using the wall-clock time elapsed since the previous one.
    pub fn tick(&mut self, now: Instant) -> Vec<GameEvent> {
        if self.session.over {
            return Vec::new();
        }
        let dt = now.saturating_duration_since(self.last_tick);
        if dt == Duration::ZERO {
            return Vec::new();
        }
        self.last_tick = now;
        self.step(dt.as_secs_f32())
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.session.over || dt <= 0.0 {
            return events;
        }

        self.session.time_left -= dt;
        if self.session.time_left <= 0.0 {
            self.session.time_left = 0.0;
            self.session.over = true;
            self.session.win = self.session.collected >= self.session.total;
            info!(collected = self.session.collected, win = self.session.win, "time up");
            events.push(GameEvent::TimeUp { win: self.session.win });
            return events;
        }

        self.scene.advance(dt);
        self.player.update_pitch();

        let mut pbox = self.player.aabb();
        if let Some(blocker) = self.find_blocker(&pbox) {
            debug!(%blocker, pos = ?self.player.pos, "collision, reverting move");
            self.player.revert();
            pbox = self.player.aabb();
            events.push(GameEvent::Collided(blocker));
            // the chase camera follows the player back
            if self.session.view == ViewMode::Chase {
                self.camera.apply_preset(ViewMode::Chase, self.player.pos, self.player.yaw);
            }
        }

        self.collect_goals(&pbox, &mut events);
        events
    }

    /// Coral first, then majors, then rocks; the first hit wins.
    fn find_blocker(&self, pbox: &Aabb) -> Option<Blocker> {
        let scene = &self.scene;
        let corals_block = EntityKind::Coral.blocks();
        let rocks_block = EntityKind::Rock.blocks();
        scene
            .maze
            .iter()
            .position(|c| corals_block && c.visible && c.aabb().intersects(pbox))
            .map(Blocker::Coral)
            .or_else(|| {
                scene
                    .majors
                    .iter()
                    .position(|m| m.blocks() && m.aabb().intersects(pbox))
                    .map(Blocker::Major)
            })
            .or_else(|| {
                scene
                    .rocks
                    .iter()
                    .position(|r| rocks_block && r.aabb().intersects(pbox))
                    .map(Blocker::Rock)
            })
    }

    fn collect_goals(&mut self, pbox: &Aabb, events: &mut Vec<GameEvent>) {
        for index in 0..self.scene.goals.len() {
            let goal = &self.scene.goals[index];
            if !goal.visible || !goal.aabb().intersects(pbox) {
                continue;
            }
            if !self.scene.collect_goal(index) {
                continue;
            }
            self.session.collected = (self.session.collected + 1).min(self.session.total);
            info!(index, collected = self.session.collected, total = self.session.total, "goal collected");
            events.push(GameEvent::GoalCollected {
                collected: self.session.collected,
                total: self.session.total,
            });
            if self.session.collected >= self.session.total && !self.session.over {
                self.session.over = true;
                self.session.win = true;
                info!(time_left = self.session.time_left, "all goals collected");
                events.push(GameEvent::Won);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GROUND_Y;
    use crate::core::math::Vec3;
    use approx::assert_abs_diff_eq;

    fn game() -> Game {
        Game::new(GameConfig::default(), Instant::now())
    }

    #[test]
    fn starting_state() {
        let g = game();
        assert_eq!(g.session.collected, 0);
        assert_eq!(g.session.total, 3);
        assert_eq!(g.session.time_left, 90.0);
        assert!(!g.session.over);
        assert!(!g.session.win);
        assert_eq!(g.session.view, ViewMode::Front);
    }

    #[test]
    fn timer_expiry_loses() {
        let mut g = game();
        let mut events = Vec::new();
        for _ in 0..10 {
            events.extend(g.step(9.5));
        }
        assert!(g.session.over);
        assert!(!g.session.win);
        assert_eq!(g.session.time_left, 0.0);
        assert_eq!(events, vec![GameEvent::TimeUp { win: false }]);
    }

    #[test]
    fn time_up_skips_the_rest_of_the_tick() {
        let mut g = game();
        g.step(95.0);
        assert!(g.session.over);
        assert_eq!(g.scene.color_phase, 0.0);
        // over: further ticks are no-ops
        g.step(1.0);
        assert_eq!(g.scene.color_phase, 0.0);
    }

    #[test]
    fn non_positive_delta_is_ignored() {
        let mut g = game();
        let before = g.session.clone();
        assert!(g.step(0.0).is_empty());
        assert!(g.step(-1.0).is_empty());
        assert_eq!(g.session, before);
        assert_eq!(g.scene.color_phase, 0.0);
    }

    #[test]
    fn tick_uses_wall_clock_delta() {
        let start = Instant::now();
        let mut g = Game::new(GameConfig::default(), start);
        g.tick(start + Duration::from_millis(500));
        assert_abs_diff_eq!(g.session.time_left, 89.5, epsilon = 1e-4);
        // a clock reading from the past is not a tick
        g.tick(start);
        assert_abs_diff_eq!(g.session.time_left, 89.5, epsilon = 1e-4);
    }

    #[test]
    fn all_goals_in_one_tick_wins() {
        let mut g = game();
        let here = g.player.pos;
        for goal in &mut g.scene.goals {
            goal.pos = here;
        }
        let events = g.step(0.016);
        assert_eq!(g.session.collected, 3);
        assert!(g.session.over);
        assert!(g.session.win);
        assert!(g.scene.goals.iter().all(|goal| !goal.visible));
        assert_eq!(events.last(), Some(&GameEvent::Won));
    }

    #[test]
    fn collected_goal_is_not_counted_twice() {
        let mut g = game();
        g.scene.goals[0].pos = g.player.pos;
        g.step(0.016);
        g.step(0.016);
        assert_eq!(g.session.collected, 1);
        assert!(!g.session.over);
    }

    #[test]
    fn blocked_move_is_reverted() {
        let mut g = game();
        let before = g.player.pos;
        g.player.snapshot();
        // into the middle coral bar (z 4.0..4.4)
        g.player.pos = Vec3::new(5.0, GROUND_Y, 4.5);
        let events = g.step(0.016);
        assert_eq!(g.player.pos, before);
        assert_eq!(events, vec![GameEvent::Collided(Blocker::Coral(2))]);
    }

    #[test]
    fn rocks_block_too() {
        let mut g = game();
        let before = g.player.pos;
        g.player.snapshot();
        g.player.pos = Vec3::new(4.0, GROUND_Y, 8.2);
        let events = g.step(0.016);
        assert_eq!(g.player.pos, before);
        assert_eq!(events, vec![GameEvent::Collided(Blocker::Rock(2))]);
    }

    #[test]
    fn regular_obstacles_do_not_block() {
        let mut g = game();
        g.player.snapshot();
        let target = Vec3::new(6.4, GROUND_Y, 2.2);
        g.player.pos = target;
        assert!(g.step(0.016).is_empty());
        assert_eq!(g.player.pos, target);
    }

    #[test]
    fn major_obstacle_blocks() {
        let mut g = game();
        let before = g.player.pos;
        g.player.snapshot();
        g.player.pos = Vec3::new(7.2, GROUND_Y, 6.8);
        let events = g.step(0.016);
        assert_eq!(g.player.pos, before);
        assert_eq!(events, vec![GameEvent::Collided(Blocker::Major(1))]);
    }

    #[test]
    fn coral_is_checked_before_majors() {
        let mut g = game();
        // park a major on the middle coral bar so both overlap the player
        g.scene.majors[0].pos = Vec3::new(5.0, 0.0, 4.2);
        g.player.snapshot();
        g.player.pos = Vec3::new(5.0, GROUND_Y, 4.5);
        let pbox = g.player.aabb();
        assert!(g.scene.majors[0].aabb().intersects(&pbox));
        let events = g.step(0.016);
        assert_eq!(events, vec![GameEvent::Collided(Blocker::Coral(2))]);
    }

    #[test]
    fn chase_camera_keeps_manual_nudges_between_moves() {
        let mut g = game();
        g.session.view = ViewMode::Chase;
        g.camera.apply_preset(ViewMode::Chase, g.player.pos, g.player.yaw);
        g.camera.pan(0.1);
        let nudged = g.camera.snapshot();
        assert!(g.step(0.016).is_empty());
        assert_eq!(g.camera.snapshot(), nudged);

        g.player.snapshot();
        g.player.pos = Vec3::new(5.0, GROUND_Y, 4.5);
        g.step(0.016);
        let pose = g.camera.snapshot();
        assert_abs_diff_eq!(pose.center.z, g.player.pos.z, epsilon = 1e-5);
        assert_abs_diff_eq!(pose.eye.y, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn hidden_major_does_not_block() {
        let mut g = game();
        g.scene.majors[1].visible = false;
        g.player.snapshot();
        let target = Vec3::new(7.2, GROUND_Y, 6.8);
        g.player.pos = target;
        g.step(0.016);
        assert_eq!(g.player.pos, target);
    }

    #[test]
    fn restart_resets_everything() {
        let mut g = game();
        g.step(100.0);
        assert!(g.session.over);
        g.player.pos.x = 1.0;
        g.restart(Instant::now());
        assert!(!g.session.over);
        assert_eq!(g.session.time_left, 90.0);
        assert_eq!(g.player.pos, g.config.player_spawn);
        assert_eq!(g.scene, Scene::new());
    }
}
