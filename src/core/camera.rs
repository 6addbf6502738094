//! Eye/center/up camera with relative moves and incremental rotation.
//!
//! Orientation lives entirely in the three vectors; every rotation re-derives
//! the view and right axes from them instead of storing yaw/pitch angles.
use crate::core::config::ARENA_SIZE;
use crate::core::math::Vec3;

/// What the renderer needs to build a view matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Front,
    Top,
    Side,
    Free,
    Chase,
}

impl ViewMode {
    /// Number shown on the HUD and bound to the number keys.
    pub fn number(self) -> u8 {
        match self {
            ViewMode::Front => 1,
            ViewMode::Top => 2,
            ViewMode::Side => 3,
            ViewMode::Free => 4,
            ViewMode::Chase => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(ViewMode::Front),
            2 => Some(ViewMode::Top),
            3 => Some(ViewMode::Side),
            4 => Some(ViewMode::Free),
            5 => Some(ViewMode::Chase),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    eye: Vec3,
    center: Vec3,
    up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO, Vec3::UP)
    }
}

impl Camera {
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self { eye, center, up }
    }

    /// Sideways along `up × view`.
    pub fn strafe(&mut self, d: f32) {
        let right = self.up.cross(self.center - self.eye).unit();
        self.translate(right * d);
    }

    /// Along the current up vector.
    pub fn pan(&mut self, d: f32) {
        self.translate(self.up.unit() * d);
    }

    /// Along the view direction.
    pub fn dolly(&mut self, d: f32) {
        self.translate((self.center - self.eye).unit() * d);
    }

    /// Tilts the view towards `up` by `deg` degrees and rebuilds `up`.
    pub fn rotate_pitch(&mut self, deg: f32) {
        let dist = (self.center - self.eye).length();
        let view = (self.center - self.eye).unit();
        let right = self.up.cross(view).unit();
        let (s, c) = deg.to_radians().sin_cos();
        let view = view * c + self.up * s;
        self.up = view.cross(right);
        self.center = self.eye + view * dist;
    }

    /// Turns the view towards the right axis by `deg` degrees. `up` is kept.
    pub fn rotate_yaw(&mut self, deg: f32) {
        let dist = (self.center - self.eye).length();
        let view = (self.center - self.eye).unit();
        let right = self.up.cross(view).unit();
        let (s, c) = deg.to_radians().sin_cos();
        let view = view * c + right * s;
        self.center = self.eye + view * dist;
    }

    pub fn snapshot(&self) -> CameraPose {
        CameraPose { eye: self.eye, center: self.center, up: self.up }
    }

    /// Places the camera for `mode`. Front and Chase aim at the player.
    pub fn apply_preset(&mut self, mode: ViewMode, player_pos: Vec3, player_yaw: f32) {
        let mid = ARENA_SIZE / 2.0;
        let (eye, center, up) = match mode {
            ViewMode::Front => (
                Vec3::new(mid, 6.0, ARENA_SIZE + 12.0),
                player_pos + Vec3::new(0.0, 0.8, 0.0),
                Vec3::UP,
            ),
            ViewMode::Top => (
                Vec3::new(mid, 20.0, mid),
                Vec3::new(mid, 0.0, mid),
                Vec3::new(0.0, 0.0, -1.0),
            ),
            ViewMode::Side => (Vec3::new(-8.0, 3.0, mid), Vec3::new(mid, 0.8, mid), Vec3::UP),
            ViewMode::Free => (
                Vec3::new(mid, 3.0, ARENA_SIZE + 2.0),
                Vec3::new(mid, 0.8, mid),
                Vec3::UP,
            ),
            ViewMode::Chase => {
                let (s, c) = player_yaw.to_radians().sin_cos();
                (
                    Vec3::new(player_pos.x + s * 3.0, 1.5, player_pos.z + c * 3.0),
                    player_pos + Vec3::new(0.0, 0.8, 0.0),
                    Vec3::UP,
                )
            }
        };
        self.eye = eye;
        self.center = center;
        self.up = up;
    }

    fn translate(&mut self, offset: Vec3) {
        self.eye += offset;
        self.center += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
    }

    fn looking_down_z() -> Camera {
        Camera::new(Vec3::new(0.0, 1.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::UP)
    }

    #[test]
    fn zero_yaw_is_identity() {
        let mut cam = Camera::default();
        let before = cam.snapshot();
        cam.rotate_yaw(0.0);
        let after = cam.snapshot();
        assert_vec_eq(after.eye, before.eye);
        assert_vec_eq(after.center, before.center);
        assert_vec_eq(after.up, before.up);
    }

    #[test]
    fn zero_pitch_keeps_orthogonal_camera() {
        let mut cam = looking_down_z();
        let before = cam.snapshot();
        cam.rotate_pitch(0.0);
        let after = cam.snapshot();
        assert_vec_eq(after.center, before.center);
        assert_vec_eq(after.up, before.up);
    }

    #[test]
    fn yaw_quarter_turn_swings_view_sideways() {
        let mut cam = looking_down_z();
        cam.rotate_yaw(90.0);
        let pose = cam.snapshot();
        // right = up × view = (0,1,0) × (0,0,-1) = (-1,0,0)
        assert_vec_eq(pose.center, Vec3::new(-5.0, 1.0, 5.0));
        assert_vec_eq(pose.eye, Vec3::new(0.0, 1.0, 5.0));
        assert_vec_eq(pose.up, Vec3::UP);
    }

    #[test]
    fn pitch_keeps_up_perpendicular_to_view() {
        let mut cam = looking_down_z();
        cam.rotate_pitch(30.0);
        let pose = cam.snapshot();
        let view = (pose.center - pose.eye).unit();
        assert_abs_diff_eq!(view.dot(pose.up), 0.0, epsilon = 1e-5);
        assert!(view.y > 0.0);
    }

    #[test]
    fn moves_translate_eye_and_center_together() {
        let mut cam = looking_down_z();
        cam.dolly(1.0);
        assert_vec_eq(cam.snapshot().eye, Vec3::new(0.0, 1.0, 4.0));
        assert_vec_eq(cam.snapshot().center, Vec3::new(0.0, 1.0, -1.0));

        cam.pan(0.5);
        assert_vec_eq(cam.snapshot().eye, Vec3::new(0.0, 1.5, 4.0));

        cam.strafe(2.0);
        assert_vec_eq(cam.snapshot().eye, Vec3::new(-2.0, 1.5, 4.0));
        assert_vec_eq(cam.snapshot().center, Vec3::new(-2.0, 1.5, -1.0));
    }

    #[test]
    fn view_numbers_round_trip() {
        for n in 1..=5 {
            assert_eq!(ViewMode::from_number(n).map(ViewMode::number), Some(n));
        }
        assert_eq!(ViewMode::from_number(0), None);
        assert_eq!(ViewMode::from_number(6), None);
    }

    #[test]
    fn top_preset_looks_straight_down() {
        let mut cam = Camera::default();
        cam.apply_preset(ViewMode::Top, Vec3::ZERO, 0.0);
        let pose = cam.snapshot();
        assert_vec_eq(pose.eye, Vec3::new(5.0, 20.0, 5.0));
        assert_vec_eq(pose.up, Vec3::new(0.0, 0.0, -1.0));
    }
}
