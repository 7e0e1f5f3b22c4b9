//! Slow drifting camera that pulls back for the tree and closes in for the message

use crate::renderer::CameraPose;
use glam::Vec3;
use lumina_core::Phase;

/// Camera distance while the tree is on screen
pub const TREE_DISTANCE: f32 = 16.0;
/// Camera distance while the message is shown
pub const MESSAGE_DISTANCE: f32 = 10.0;
/// Fraction of the remaining distance covered each frame
pub const FOLLOW: f32 = 0.02;
pub const FOV_DEGREES: f32 = 50.0;

pub struct CameraController {
    position: Vec3,
    /// Distance used in phases without their own framing
    rest_distance: f32,
    elapsed: f32,
}

impl CameraController {
    pub fn new(start: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(start),
            rest_distance: start[2],
            elapsed: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Where the camera is heading at time `t` in `phase`
    pub fn target(&self, t: f32, phase: Phase) -> Vec3 {
        let z = match phase {
            Phase::Tree => TREE_DISTANCE,
            Phase::Message => MESSAGE_DISTANCE,
            Phase::Offering | Phase::Explosion => self.rest_distance,
        };
        Vec3::new((t * 0.1).sin() * 2.0, (t * 0.1).cos(), z)
    }

    pub fn update(&mut self, dt: f32, phase: Phase) {
        self.elapsed += dt;
        let target = self.target(self.elapsed, phase);
        self.position = self.position.lerp(target, FOLLOW);
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_at: Vec3::ZERO,
            fov_degrees: FOV_DEGREES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_distance_per_phase() {
        let camera = CameraController::new([0.0, 0.0, 12.0]);
        assert_eq!(camera.target(0.0, Phase::Offering).z, 12.0);
        assert_eq!(camera.target(0.0, Phase::Tree).z, 16.0);
        assert_eq!(camera.target(0.0, Phase::Explosion).z, 12.0);
        assert_eq!(camera.target(0.0, Phase::Message).z, 10.0);
    }

    #[test]
    fn target_drifts_in_xy() {
        let camera = CameraController::new([0.0, 0.0, 12.0]);
        let t = camera.target(5.0, Phase::Offering);
        assert!((t.x - 0.5_f32.sin() * 2.0).abs() < 1e-6);
        assert!((t.y - 0.5_f32.cos()).abs() < 1e-6);
    }

    #[test]
    fn follows_by_fixed_fraction() {
        let mut camera = CameraController::new([0.0, 0.0, 12.0]);
        camera.update(0.0, Phase::Tree);
        // Target at t=0 is (0, 1, 16)
        let p = camera.position();
        assert!((p.y - 0.02).abs() < 1e-6);
        assert!((p.z - 12.08).abs() < 1e-5);
    }

    #[test]
    fn converges_on_tree_distance() {
        let mut camera = CameraController::new([0.0, 0.0, 12.0]);
        for _ in 0..600 {
            camera.update(1.0 / 60.0, Phase::Tree);
        }
        assert!((camera.position().z - TREE_DISTANCE).abs() < 0.01);
        let pose = camera.pose();
        assert_eq!(pose.look_at, Vec3::ZERO);
        assert_eq!(pose.fov_degrees, 50.0);
    }
}
