//! Axis-aligned boxes and the per-kind collision policy.
//!
//! Boxes are always rebuilt from live positions right before a check.
use crate::core::math::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec3, half: Vec3) -> Self {
        Self { min: center - half, max: center + half }
    }

    /// Box standing on `base`, extending `half_xz` sideways and `height` upwards.
    pub fn grounded(base: Vec3, half_xz: f32, height: f32) -> Self {
        Self {
            min: Vec3::new(base.x - half_xz, base.y, base.z - half_xz),
            max: Vec3::new(base.x + half_xz, base.y + height, base.z + half_xz),
        }
    }

    /// Closed-interval overlap on all three axes; touching faces count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Goal,
    Coral,
    MajorObstacle,
    RegularObstacle,
    Rock,
}

/// Kinds whose box follows from position alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FixedKind {
    Player,
    Goal,
    MajorObstacle,
    RegularObstacle,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Symmetric about the entity position.
    Centered { half: Vec3 },
    /// Stands on the entity position.
    Grounded { half_xz: f32, height: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KindPolicy {
    pub blocking: bool,
}

pub const PLAYER_HALF: Vec3 = Vec3::new(0.14, 0.48, 0.14);
pub const GOAL_RADIUS: f32 = 0.20;
pub const MAJOR_HALF_XZ: f32 = 0.50;
pub const MAJOR_HEIGHT: f32 = 1.10;
pub const REGULAR_HALF_XZ: f32 = 0.60;
pub const REGULAR_HEIGHT: f32 = 0.90;

impl EntityKind {
    pub const fn policy(self) -> KindPolicy {
        let blocking = match self {
            EntityKind::Coral | EntityKind::MajorObstacle | EntityKind::Rock => true,
            EntityKind::Player | EntityKind::Goal | EntityKind::RegularObstacle => false,
        };
        KindPolicy { blocking }
    }

    #[inline]
    pub const fn blocks(self) -> bool {
        self.policy().blocking
    }
}

impl FixedKind {
    pub const fn entity_kind(self) -> EntityKind {
        match self {
            FixedKind::Player => EntityKind::Player,
            FixedKind::Goal => EntityKind::Goal,
            FixedKind::MajorObstacle => EntityKind::MajorObstacle,
            FixedKind::RegularObstacle => EntityKind::RegularObstacle,
        }
    }

    pub const fn shape(self) -> Shape {
        match self {
            FixedKind::Player => Shape::Centered { half: PLAYER_HALF },
            FixedKind::Goal => Shape::Centered {
                half: Vec3::new(GOAL_RADIUS, GOAL_RADIUS, GOAL_RADIUS),
            },
            FixedKind::MajorObstacle => {
                Shape::Grounded { half_xz: MAJOR_HALF_XZ, height: MAJOR_HEIGHT }
            }
            FixedKind::RegularObstacle => {
                Shape::Grounded { half_xz: REGULAR_HALF_XZ, height: REGULAR_HEIGHT }
            }
        }
    }

    pub fn aabb_at(self, pos: Vec3) -> Aabb {
        match self.shape() {
            Shape::Centered { half } => Aabb::from_center(pos, half),
            Shape::Grounded { half_xz, height } => Aabb::grounded(pos, half_xz, height),
        }
    }
}
