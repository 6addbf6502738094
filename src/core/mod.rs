//! Core game types and logic (math, collision, world, simulation, input).
//!
//! Re-exports:
//! - `math`: 3D vector algebra
//! - `camera`: Eye/center/up camera and view presets
//! - `aabb`: Bounding boxes and the per-kind collision policy
//! - `config`: Tuning constants and session configuration
//! - `maze`: Coral wall layout
//! - `obstacle`: Obstacles, rocks and goal portals
//! - `scene`: World state and reset
//! - `player`: Player data, revert and arena clamp
//! - `game`: Session state and the simulation step
//! - `input`: Key bindings and intent application
//! - `process_events`: raylib key polling

pub mod math;
pub mod camera;
pub mod aabb;
pub mod config;
pub mod maze;
pub mod obstacle;
pub mod scene;
pub mod player;
pub mod game;
pub mod input;
pub mod process_events;
