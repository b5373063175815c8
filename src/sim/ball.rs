//! Ball kinematics and bounce resolution
//!
//! The ball stores a scalar speed and a unit direction separately so a goal
//! can park it (speed 0) without losing where it was pointing. Collision
//! detection is external; the embedder reports contacts and the ball only
//! resolves them into new directions.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::SimError;
use crate::events::SfxKind;

/// A contact reported by the physics backend for the current tick.
///
/// Racket contacts carry the racket's extent along the bounce (z) axis so
/// the ball can compute its rebound angle without reaching into the racket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Contact {
    LowerWall,
    UpperWall,
    Racket { position: Vec3, half_depth: f32 },
    Goal { id: u32 },
}

/// The match ball
///
/// `direction` is unit length except before the first serve, where the zero
/// vector marks an unarmed ball.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    initial_speed: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::ZERO,
            speed: 0.0,
            initial_speed: 0.0,
        }
    }

    /// Configure the ball for a match. Leaves it inert until the next serve.
    pub fn set_ball(&mut self, speed: f32) {
        self.initial_speed = speed;
        self.speed = 0.0;
        self.direction = Vec3::ZERO;
    }

    /// Launch the ball from `point` toward `direction` to start a round.
    ///
    /// The direction is normalized here so callers cannot smuggle speed into
    /// it; a zero vector is rejected rather than propagating NaNs.
    pub fn serve(&mut self, point: Vec3, direction: Vec3) -> Result<(), SimError> {
        let unit = direction
            .try_normalize()
            .ok_or(SimError::DegenerateDirection)?;

        self.position = point;
        self.direction = unit;
        self.speed = self.initial_speed;
        Ok(())
    }

    /// Translate the ball along its direction. No-op while inert (speed 0).
    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction * self.speed * dt;
    }

    /// Bounce off an upper/lower wall by inverting the vertical component
    pub fn resolve_wall_bounce(&mut self) {
        self.direction.z = -self.direction.z;
    }

    /// Bounce off a racket.
    ///
    /// The rebound angle is steered by where the ball struck the paddle:
    /// the contact offset along z divided by the racket half depth gives a
    /// bounce factor near 0 at the center (horizontal reflection) and near
    /// ±1 at the edges (diagonal reflection). Horizontal travel is reversed
    /// and the direction renormalized.
    pub fn resolve_racket_bounce(&mut self, racket_position: Vec3, racket_half_depth: f32) {
        let rel = (self.position - racket_position).z;
        let bounce_factor = rel / racket_half_depth;

        self.direction.z = bounce_factor;
        self.direction.x = -self.direction.x;
        self.direction = self.direction.normalize_or_zero();
    }

    /// Park the ball after a goal. Position is left where it is; the next
    /// serve repositions it.
    pub fn resolve_goal(&mut self) {
        self.speed = 0.0;
    }

    /// Resolve one reported contact and name the sfx it should trigger.
    ///
    /// Contacts reported in the same tick are each resolved independently in
    /// report order with no mutual exclusion. A ball grazing a wall and a
    /// racket corner in one tick takes both bounces; this is intentional
    /// gameplay behavior, not a bug to fix.
    pub fn resolve_contact(&mut self, contact: &Contact) -> SfxKind {
        match contact {
            Contact::LowerWall | Contact::UpperWall => {
                self.resolve_wall_bounce();
                SfxKind::WallBounce
            }
            Contact::Racket {
                position,
                half_depth,
            } => {
                self.resolve_racket_bounce(*position, *half_depth);
                SfxKind::RacketBounce
            }
            Contact::Goal { .. } => {
                self.resolve_goal();
                SfxKind::Goal
            }
        }
    }

    pub fn initial_speed(&self) -> f32 {
        self.initial_speed
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_ball_leaves_ball_inert() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);

        assert_eq!(ball.speed, 0.0);
        assert_eq!(ball.direction, Vec3::ZERO);
        assert_eq!(ball.initial_speed(), 30.0);
    }

    #[test]
    fn test_serve_then_advance_travels_at_initial_speed() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);
        ball.serve(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)).unwrap();
        ball.advance(1.0);

        assert_eq!(ball.position, Vec3::new(30.0, 0.0, 0.0));
        assert_eq!(ball.speed, 30.0);
    }

    #[test]
    fn test_serve_rejects_zero_direction() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);

        assert_eq!(
            ball.serve(Vec3::ZERO, Vec3::ZERO),
            Err(SimError::DegenerateDirection)
        );
        // Ball stays inert after the rejected serve
        assert_eq!(ball.speed, 0.0);
    }

    #[test]
    fn test_advance_is_noop_while_inert() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);
        ball.advance(1.0);

        assert_eq!(ball.position, Vec3::ZERO);
    }

    #[test]
    fn test_wall_bounce_twice_restores_direction() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);
        ball.serve(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.7)).unwrap();

        let before = ball.direction;
        ball.resolve_wall_bounce();
        assert_eq!(ball.direction.z, -before.z);
        ball.resolve_wall_bounce();
        assert_eq!(ball.direction, before);
    }

    #[test]
    fn test_racket_bounce_center_reflects_horizontally() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);
        ball.serve(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.5)).unwrap();

        // Contact exactly at the paddle center: rel = 0
        ball.position = Vec3::new(10.0, 0.0, 2.0);
        ball.resolve_racket_bounce(Vec3::new(10.0, 0.0, 2.0), 1.5);

        assert_eq!(ball.direction.z, 0.0);
        assert!(ball.direction.x < 0.0, "horizontal travel must reverse");
        assert!((ball.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_racket_bounce_edge_sends_ball_diagonally() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);
        ball.serve(Vec3::ZERO, Vec3::new(-1.0, 0.0, 0.0)).unwrap();

        // Contact at the very top edge of a half-depth 1.5 paddle
        ball.position = Vec3::new(-10.0, 0.0, 3.0);
        ball.resolve_racket_bounce(Vec3::new(-10.0, 0.0, 1.5), 1.5);

        // Pre-normalization factor was 1.0, so z and x carry equal weight
        assert!(ball.direction.z > 0.5);
        assert!(ball.direction.x > 0.0, "horizontal travel must reverse");
        assert!((ball.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_goal_parks_ball_without_moving_it() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);
        ball.serve(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)).unwrap();
        ball.advance(0.5);

        let pos = ball.position;
        ball.resolve_goal();

        assert_eq!(ball.speed, 0.0);
        assert_eq!(ball.position, pos);
        ball.advance(1.0);
        assert_eq!(ball.position, pos);
    }

    #[test]
    fn test_simultaneous_wall_and_racket_contacts_both_apply() {
        let mut ball = Ball::new();
        ball.set_ball(30.0);
        ball.serve(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.6)).unwrap();

        ball.position = Vec3::new(10.0, 0.0, 9.0);
        let racket = Vec3::new(10.0, 0.0, 8.0);

        // Wall first, racket second: both rules run, in report order
        let sfx_a = ball.resolve_contact(&Contact::UpperWall);
        let sfx_b = ball.resolve_contact(&Contact::Racket {
            position: racket,
            half_depth: 1.5,
        });

        assert_eq!(sfx_a, SfxKind::WallBounce);
        assert_eq!(sfx_b, SfxKind::RacketBounce);
        // Racket bounce ran last: x reversed, direction renormalized
        assert!(ball.direction.x < 0.0);
        assert!((ball.direction.length() - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn test_serve_direction_always_unit_length(
            x in -10.0f32..10.0,
            z in -10.0f32..10.0,
        ) {
            prop_assume!(Vec3::new(x, 0.0, z).length() > 1e-3);

            let mut ball = Ball::new();
            ball.set_ball(30.0);
            ball.serve(Vec3::ZERO, Vec3::new(x, 0.0, z)).unwrap();

            prop_assert!((ball.direction.length() - 1.0).abs() < 1e-5);
        }

        #[test]
        fn test_racket_bounce_direction_always_unit_length(
            dir_x in 0.1f32..1.0,
            dir_z in -1.0f32..1.0,
            offset in -1.5f32..1.5,
        ) {
            let mut ball = Ball::new();
            ball.set_ball(30.0);
            ball.serve(Vec3::ZERO, Vec3::new(dir_x, 0.0, dir_z)).unwrap();

            ball.position = Vec3::new(12.0, 0.0, offset);
            ball.resolve_racket_bounce(Vec3::new(12.0, 0.0, 0.0), 1.5);

            prop_assert!((ball.direction.length() - 1.0).abs() < 1e-5);
        }

        #[test]
        fn test_wall_bounce_is_antisymmetric(
            dir_x in -1.0f32..1.0,
            dir_z in -1.0f32..1.0,
        ) {
            prop_assume!(Vec3::new(dir_x, 0.0, dir_z).length() > 1e-3);

            let mut ball = Ball::new();
            ball.set_ball(30.0);
            ball.serve(Vec3::ZERO, Vec3::new(dir_x, 0.0, dir_z)).unwrap();

            let before = ball.direction;
            ball.resolve_wall_bounce();
            ball.resolve_wall_bounce();
            prop_assert_eq!(ball.direction, before);
        }
    }
}
