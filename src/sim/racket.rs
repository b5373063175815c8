//! Racket kinematics
//!
//! A racket owns its controller and its position. The match context drives
//! it each tick; the physics backend feeds wall trigger events through it to
//! the controller. Ball collisions are resolved by the ball, which only needs
//! the racket's position and depth.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::controller::{Controller, SurfaceTag};
use crate::input::InputAxes;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Racket {
    pub position: Vec3,
    /// Extent along the bounce (z) axis, used for rebound steering
    pub half_depth: f32,
    pub controller: Controller,
}

impl Racket {
    /// Place a racket and bind its controller. The placement becomes the
    /// controller's reset position.
    pub fn new(mut controller: Controller, position: Vec3, half_depth: f32) -> Self {
        controller.initial_position = position;
        Self {
            position,
            half_depth,
            controller,
        }
    }

    /// Apply this tick's controller displacement to the racket
    pub fn drive(&mut self, ball_position: Vec3, axes: &dyn InputAxes, dt: f32) {
        let displacement = self
            .controller
            .drive(self.position, ball_position, axes, dt);
        self.position.z += displacement;
    }

    /// Physics trigger entered (walls block the controller; other tags pass
    /// through untouched)
    pub fn on_trigger_enter(&mut self, tag: SurfaceTag) {
        self.controller.on_wall_enter(tag);
    }

    /// Physics trigger exited
    pub fn on_trigger_exit(&mut self, tag: SurfaceTag) {
        self.controller.on_wall_exit(tag);
    }

    /// Teleport back to the stored initial position. Used on round resets
    /// and game restarts.
    pub fn reset_position(&mut self) {
        self.position = self.controller.initial_position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::test_support::FixedAxes;
    use crate::settings::Difficulty;

    #[test]
    fn test_drive_moves_along_z_only() {
        let controller = Controller::human(0, 20.0, Vec3::ZERO);
        let mut racket = Racket::new(controller, Vec3::new(-12.0, 0.0, 0.0), 1.5);
        let axes = FixedAxes::with("Vertical_P0", 1.0);

        racket.drive(Vec3::ZERO, &axes, 0.1);

        assert_eq!(racket.position.x, -12.0);
        assert!((racket.position.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_blocked_racket_holds_position_until_wall_exit() {
        let controller = Controller::human(0, 20.0, Vec3::ZERO);
        let mut racket = Racket::new(controller, Vec3::new(-12.0, 0.0, 8.0), 1.5);
        let up = FixedAxes::with("Vertical_P0", 1.0);

        racket.on_trigger_enter(SurfaceTag::UpperWall);
        racket.drive(Vec3::ZERO, &up, 0.1);
        assert_eq!(racket.position.z, 8.0);

        racket.on_trigger_exit(SurfaceTag::UpperWall);
        racket.drive(Vec3::ZERO, &up, 0.1);
        assert!(racket.position.z > 8.0);
    }

    #[test]
    fn test_reset_position_returns_to_placement() {
        let controller = Controller::ai(1, Difficulty::Normal, 24.0, Vec3::ZERO);
        let mut racket = Racket::new(controller, Vec3::new(12.0, 0.0, 0.0), 1.5);

        racket.position.z = 5.0;
        racket.reset_position();

        assert_eq!(racket.position, Vec3::new(12.0, 0.0, 0.0));
    }
}
