//! Coral maze layout.
use crate::core::aabb::Aabb;
use crate::core::math::Vec3;

pub const CORAL_HEIGHT: f32 = 0.9;

/// Footprints as `(x, z, width, depth)`.
const LAYOUT: [(f32, f32, f32, f32); 7] = [
    (1.0, 1.0, 0.4, 6.5), // left wall
    (8.6, 2.0, 0.4, 6.0), // right wall
    (2.0, 4.0, 4.8, 0.4), // middle bar
    (4.2, 1.4, 0.4, 1.8), // divider near spawn
    (6.0, 6.0, 0.4, 1.8), // divider near the far side
    (3.0, 7.6, 0.6, 0.6), // pillar
    (5.6, 7.6, 0.6, 0.6), // pillar
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoralSegment {
    /// Minimum corner.
    pub origin: Vec3,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub visible: bool,
}

impl CoralSegment {
    pub fn new(x: f32, z: f32, width: f32, depth: f32) -> Self {
        Self {
            origin: Vec3::new(x, 0.0, z),
            width,
            height: CORAL_HEIGHT,
            depth,
            visible: true,
        }
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    pub fn center(&self) -> Vec3 {
        self.origin + self.size() * 0.5
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.origin, self.origin + self.size())
    }
}

pub type Maze = Vec<CoralSegment>;

pub fn build_maze() -> Maze {
    LAYOUT
        .iter()
        .map(|&(x, z, w, d)| CoralSegment::new(x, z, w, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_fixed() {
        let maze = build_maze();
        assert_eq!(maze.len(), 7);
        assert!(maze.iter().all(|c| c.visible && c.height == CORAL_HEIGHT));
        assert_eq!(maze, build_maze());
    }

    #[test]
    fn corridors_leave_the_arena_centre_open() {
        let centre = Aabb::new(Vec3::new(4.8, 0.0, 4.8), Vec3::new(5.2, 1.0, 5.2));
        assert!(build_maze().iter().all(|c| !c.aabb().intersects(&centre)));
    }
}
