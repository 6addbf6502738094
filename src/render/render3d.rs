//! Underwater scene drawn in raylib's immediate 3D mode.
//!
//! Read-only over the game state; nothing here feeds back into the simulation.
use raylib::prelude::*;

use crate::core::config::{ARENA_SIZE, WALL_HEIGHT, WALL_THICKNESS};
use crate::core::game::Game;
use crate::core::math::Vec3;
use crate::core::maze::CoralSegment;
use crate::core::obstacle::{Goal, Obstacle, Rock};
use crate::core::player::Player;

pub const WATER: Color = Color::new(5, 18, 31, 255);
const SEABED: Color = Color::new(15, 51, 31, 255);
const CORAL: Color = Color::new(230, 89, 128, 255);
const ROCK: Color = Color::new(51, 51, 64, 255);
const SEAWEED: Color = Color::new(13, 153, 51, 255);

/// Decorative seaweed outside the obstacle groups: `(x, z, height, phase offset)`.
const SEAWEED_PATCHES: [(f32, f32, f32, f32); 3] =
    [(2.2, 3.5, 0.9, 0.3), (6.8, 2.2, 0.7, -0.6), (4.5, 6.0, 0.8, 1.2)];

#[inline]
fn rgb(r: f32, g: f32, b: f32) -> Color {
    let f = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
    Color::new(f(r), f(g), f(b), 255)
}

#[inline]
fn v3(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

/// Tilts `offset` by `pitch` around X, then turns it by `yaw` around Y.
fn orient(offset: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    let (s, c) = pitch.to_radians().sin_cos();
    let tilted = Vec3::new(offset.x, offset.y * c - offset.z * s, offset.y * s + offset.z * c);
    tilted.rotated_y(yaw)
}

fn draw_seabed<D: RaylibDraw3D>(d: &mut D) {
    let mid = ARENA_SIZE / 2.0;
    d.draw_cube(Vector3::new(mid, 0.0, mid), ARENA_SIZE, 0.05, ARENA_SIZE, SEABED);
}

/// Boundary walls slowly cycle colour with the global phase.
fn draw_boundary<D: RaylibDraw3D>(d: &mut D, phase: f32) {
    let walls = [
        (0.0, 0.0, ARENA_SIZE, WALL_THICKNESS),
        (0.0, ARENA_SIZE - WALL_THICKNESS, ARENA_SIZE, WALL_THICKNESS),
        (0.0, 0.0, WALL_THICKNESS, ARENA_SIZE),
        (ARENA_SIZE - WALL_THICKNESS, 0.0, WALL_THICKNESS, ARENA_SIZE),
    ];
    for (i, (x, z, w, depth)) in walls.into_iter().enumerate() {
        let p = phase + i as f32;
        let color = rgb(
            0.4 + 0.2 * (p + x + z).sin(),
            0.2 + 0.15 * (p * 1.1 + x - z).cos(),
            0.25 + 0.15 * (p * 0.7 - x + z).sin(),
        );
        let center = Vector3::new(x + w / 2.0, WALL_HEIGHT / 2.0, z + depth / 2.0);
        d.draw_cube(center, w, WALL_HEIGHT, depth, color);
    }
}

fn draw_coral<D: RaylibDraw3D>(d: &mut D, c: &CoralSegment, phase: f32) {
    let center = c.center();
    d.draw_cube(v3(center), c.width, c.height, c.depth, CORAL);
    d.draw_cube_wires(v3(center), c.width, c.height, c.depth, rgb(0.6, 0.2, 0.3));
    // tubes on top, swaying a little
    for i in 0..3 {
        let base = center
            + Vec3::new((i as f32 - 1.0) * 0.15, c.height / 2.0, (phase + i as f32).sin() * 0.03);
        d.draw_cylinder(v3(base), 0.09, 0.09, 0.4, 10, CORAL);
    }
}

fn draw_seaweed<D: RaylibDraw3D>(d: &mut D, base: Vec3, height: f32, phase: f32) {
    let sway = (phase + base.x + base.z).sin() * 20.0;
    let a = base;
    let b = base + Vec3::new(-0.08, height / 2.0, 0.0).rotated_y(sway);
    let c = base + Vec3::new(0.08, height, 0.0).rotated_y(sway);
    d.draw_triangle3D(v3(a), v3(b), v3(c), SEAWEED);
    d.draw_triangle3D(v3(a), v3(c), v3(b), SEAWEED);
}

fn draw_rock<D: RaylibDraw3D>(d: &mut D, rock: &Rock) {
    let half = rock.half_extents();
    d.draw_sphere(v3(rock.center), half.y, ROCK);
    d.draw_cube(v3(rock.center), half.x * 1.6, half.y * 1.6, half.z * 1.6, ROCK);
}

fn draw_major<D: RaylibDraw3D>(d: &mut D, o: &Obstacle) {
    let turn = o.phase * 60.0;
    let at = |offset: Vec3| v3(o.pos + offset.rotated_y(turn));
    d.draw_cube(at(Vec3::new(0.0, 0.10, 0.0)), 0.7, 0.2, 0.7, rgb(0.6, 0.6, 0.6));
    d.draw_cylinder(at(Vec3::new(0.0, 0.2, 0.0)), 0.06, 0.06, 0.9, 12, rgb(0.45, 0.45, 0.5));
    d.draw_cube(at(Vec3::new(0.20, 0.72, 0.0)), 0.40, 0.09, 0.09, rgb(0.8, 0.4, 0.2));
    d.draw_cube(at(Vec3::new(0.40, 0.82, 0.0)), 0.28, 0.08, 0.08, rgb(0.7, 0.35, 0.2));
    d.draw_sphere(at(Vec3::new(0.48, 0.90, 0.0)), 0.04, rgb(0.95, 0.9, 0.3));
}

fn draw_regular<D: RaylibDraw3D>(d: &mut D, o: &Obstacle, phase: f32) {
    let turn = o.phase * 90.0;
    d.draw_sphere(v3(o.pos), 0.18, rgb(0.25, 0.25, 0.28));
    draw_seaweed(d, o.pos + Vec3::new(0.12, 0.0, 0.0).rotated_y(turn), 0.9, phase + o.pos.x);
    draw_seaweed(d, o.pos + Vec3::new(-0.12, 0.0, 0.0).rotated_y(turn), 0.7, phase - o.pos.x);
}

fn draw_goal<D: RaylibDraw3D>(d: &mut D, g: &Goal) {
    let center = g.pos + Vec3::new(0.0, 0.18 * (g.phase * 2.0).sin(), 0.0);
    let spin = g.phase * 40.0;
    d.draw_circle_3D(v3(center), 0.20, Vector3::new(0.0, 1.0, 0.0), spin, rgb(0.9, 0.5, 0.05));
    d.draw_circle_3D(v3(center), 0.17, Vector3::new(0.0, 1.0, 0.0), spin, rgb(0.9, 0.5, 0.05));
    d.draw_sphere(v3(center), 0.12, rgb(1.0, 0.8, 0.1));
    d.draw_cylinder(v3(center - Vec3::new(0.0, 0.55, 0.0)), 0.025, 0.025, 0.4, 8, rgb(0.95, 0.7, 0.15));
}

fn draw_diver<D: RaylibDraw3D>(d: &mut D, p: &Player) {
    const SCALE: f32 = 0.22;
    let yaw = p.yaw + 180.0;
    let at = |x: f32, y: f32, z: f32| v3(p.pos + orient(Vec3::new(x, y, z) * SCALE, yaw, p.pitch));
    let suit = rgb(0.15, 0.45, 0.7);
    let legs = rgb(0.1, 0.1, 0.2);

    d.draw_cube(at(0.0, 0.6, 0.0), 0.6 * SCALE, 0.9 * SCALE, 0.35 * SCALE, suit);
    d.draw_sphere(at(0.0, 1.15, 0.0), 0.225 * SCALE, rgb(0.95, 0.85, 0.75));
    d.draw_cube(at(-0.5, 0.7, 0.0), 0.18 * SCALE, 0.6 * SCALE, 0.18 * SCALE, suit);
    d.draw_cube(at(0.5, 0.7, 0.0), 0.18 * SCALE, 0.6 * SCALE, 0.18 * SCALE, suit);
    d.draw_cube(at(-0.18, 0.1, 0.0), 0.18 * SCALE, 0.6 * SCALE, 0.18 * SCALE, legs);
    d.draw_cube(at(0.18, 0.1, 0.0), 0.18 * SCALE, 0.6 * SCALE, 0.18 * SCALE, legs);
    // oxygen tank on the back
    d.draw_cylinder_ex(
        at(0.0, 0.2, -0.35),
        at(0.0, 1.0, -0.35),
        0.175 * SCALE,
        0.175 * SCALE,
        10,
        rgb(0.02, 0.45, 0.25),
    );
}

/// Draws every world entity. Hidden corals, obstacles and goals are skipped.
pub fn render_3d<D: RaylibDraw3D>(d: &mut D, game: &Game) {
    let scene = &game.scene;
    let phase = scene.color_phase;

    draw_seabed(d);
    draw_boundary(d, phase);
    for c in scene.maze.iter().filter(|c| c.visible) {
        draw_coral(d, c, phase);
    }
    for o in scene.majors.iter().filter(|o| o.visible) {
        draw_major(d, o);
    }
    for rock in &scene.rocks {
        draw_rock(d, rock);
    }
    for o in scene.regulars.iter().filter(|o| o.visible) {
        draw_regular(d, o, phase);
    }
    for (x, z, h, offset) in SEAWEED_PATCHES {
        draw_seaweed(d, Vec3::new(x, 0.0, z), h, phase + offset);
    }
    for g in scene.goals.iter().filter(|g| g.visible) {
        draw_goal(d, g);
    }
    draw_diver(d, &game.player);
}

/// raylib camera for the current pose; 60° vertical field of view.
pub fn camera_3d(game: &Game) -> Camera3D {
    let pose = game.camera.snapshot();
    Camera3D::perspective(v3(pose.eye), v3(pose.center), v3(pose.up), 60.0)
}
