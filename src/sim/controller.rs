//! Polymorphic racket control
//!
//! A controller turns a control signal into a per-tick vertical displacement
//! request. Human controllers read a named analog axis from the input
//! backend; AI controllers chase the ball's vertical position while it is
//! close enough horizontally. Both are gated by wall-proximity flags fed by
//! the physics backend's trigger events.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_TRACKING_COEFFICIENT;
use crate::input::{InputAxes, vertical_axis_name};
use crate::settings::Difficulty;

/// Tags the physics backend attaches to trigger volumes.
///
/// Only the wall tags affect controller state; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceTag {
    LowerWall,
    UpperWall,
    Racket,
    Goal,
    Ball,
}

/// Which concrete controller variant to build at game setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerKind {
    Human,
    Ai,
}

/// Variant-specific control logic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Brain {
    /// Reads the player's vertical input axis; displacement scales with the
    /// analog value, so paddle speed follows input intensity.
    Human,
    /// Chases the ball at full speed, but only while the ball is within
    /// `max_tracking_distance` horizontally.
    Ai { max_tracking_distance: f32 },
}

/// A racket controller: common movement state plus a [`Brain`] variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Controller {
    /// Player id; selects the input axis for human control, placeholder
    /// for AI
    pub id: u32,
    /// Movement speed, units per second
    pub speed: f32,
    /// Where the racket returns to on a round reset
    pub initial_position: Vec3,
    can_move_up: bool,
    can_move_down: bool,
    pub brain: Brain,
}

impl Controller {
    /// Build a human-driven controller
    pub fn human(id: u32, speed: f32, initial_position: Vec3) -> Self {
        Self {
            id,
            speed,
            initial_position,
            can_move_up: true,
            can_move_down: true,
            brain: Brain::Human,
        }
    }

    /// Build an AI controller; speed comes from the difficulty table and the
    /// tracking range from the distance between the rackets
    pub fn ai(id: u32, difficulty: Difficulty, rackets_distance: f32, initial_position: Vec3) -> Self {
        Self {
            id,
            speed: difficulty.racket_speed(),
            initial_position,
            can_move_up: true,
            can_move_down: true,
            brain: Brain::Ai {
                max_tracking_distance: rackets_distance * MAX_TRACKING_COEFFICIENT,
            },
        }
    }

    pub fn kind(&self) -> ControllerKind {
        match self.brain {
            Brain::Human => ControllerKind::Human,
            Brain::Ai { .. } => ControllerKind::Ai,
        }
    }

    /// Signed control signal for this tick.
    ///
    /// Human: the raw axis value, typically in [-1, 1].
    /// AI: the z-difference between ball and racket (only its sign is used
    /// when driving).
    pub fn desired_direction(
        &self,
        racket_position: Vec3,
        ball_position: Vec3,
        axes: &dyn InputAxes,
    ) -> f32 {
        match self.brain {
            Brain::Human => axes.axis(&vertical_axis_name(self.id)),
            Brain::Ai { .. } => (ball_position - racket_position).z,
        }
    }

    /// Compute this tick's vertical displacement for the racket.
    ///
    /// Requests toward a blocked wall are silently dropped; rackets are
    /// meant to stop at walls, so that is not an error.
    pub fn drive(
        &self,
        racket_position: Vec3,
        ball_position: Vec3,
        axes: &dyn InputAxes,
        dt: f32,
    ) -> f32 {
        let desired = self.desired_direction(racket_position, ball_position, axes);

        let displacement = match self.brain {
            // Analog magnitude carries through: half-deflection moves at
            // half speed
            Brain::Human => desired * self.speed * dt,
            // Full speed in the signal's direction, zero when the signal is
            // exactly zero
            Brain::Ai { .. } => {
                if desired == 0.0 {
                    0.0
                } else {
                    desired.signum() * self.speed * dt
                }
            }
        };

        if !self.allow_movement(displacement) {
            return 0.0;
        }
        if let Brain::Ai { .. } = self.brain {
            if !self.ball_in_range(racket_position, ball_position) {
                return 0.0;
            }
        }
        displacement
    }

    /// Movement gate: downward only while `can_move_down`, upward only
    /// while `can_move_up`. A zero request never moves.
    fn allow_movement(&self, displacement: f32) -> bool {
        if displacement < 0.0 && self.can_move_down {
            true
        } else {
            displacement > 0.0 && self.can_move_up
        }
    }

    /// AI tracking gate: react only while the ball is horizontally close
    fn ball_in_range(&self, racket_position: Vec3, ball_position: Vec3) -> bool {
        match self.brain {
            Brain::Human => true,
            Brain::Ai {
                max_tracking_distance,
            } => (ball_position.x - racket_position.x).abs() < max_tracking_distance,
        }
    }

    /// Wall trigger entered: block movement toward that wall.
    /// Idempotent; non-wall tags are ignored.
    pub fn on_wall_enter(&mut self, tag: SurfaceTag) {
        match tag {
            SurfaceTag::LowerWall => self.can_move_down = false,
            SurfaceTag::UpperWall => self.can_move_up = false,
            _ => {}
        }
    }

    /// Wall trigger exited: movement toward that wall is allowed again
    pub fn on_wall_exit(&mut self, tag: SurfaceTag) {
        match tag {
            SurfaceTag::LowerWall => self.can_move_down = true,
            SurfaceTag::UpperWall => self.can_move_up = true,
            _ => {}
        }
    }

    pub fn can_move_up(&self) -> bool {
        self.can_move_up
    }

    pub fn can_move_down(&self) -> bool {
        self.can_move_down
    }
}
