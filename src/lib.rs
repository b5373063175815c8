//! Duel Pong - a two-paddle Pong match engine
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (ball, rackets, round state machine)
//! - `settings`: Data-driven match configuration
//! - `input`: Input-backend boundary (named analog axis lookup)
//! - `events`: Presentation boundary (score/round/sfx event sink)
//!
//! Rendering, collision detection and audio playback are external
//! collaborators: the embedder reports contacts into the sim and drains
//! events out of it each tick.

pub mod events;
pub mod input;
pub mod settings;
pub mod sim;

pub use events::{GameEvent, PresentationSink, SfxKind};
pub use input::InputAxes;
pub use settings::{Difficulty, MatchSettings};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep for the demo loop (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Court dimensions. The court lives in the xz plane: x runs between the
    /// rackets, z runs between the walls, y is unused.
    pub const COURT_HALF_HEIGHT: f32 = 10.0;
    pub const RACKETS_DISTANCE: f32 = 24.0;

    /// Racket extent along the bounce (z) axis
    pub const RACKET_HALF_DEPTH: f32 = 1.5;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 30.0;

    /// Human racket speed (units per second at full axis deflection)
    pub const PLAYER_RACKET_SPEED: f32 = 20.0;

    /// Serve cone half-angle, degrees either side of the court's forward axis
    pub const SERVICE_HALF_MAX_ANGLE: f32 = 45.0;

    /// Delay between a goal and the next serve, seconds
    pub const TIME_BETWEEN_ROUNDS: f32 = 1.5;

    /// Fraction of the rackets distance within which an AI racket tracks
    /// the ball. Should stay in 0 - 1.
    pub const MAX_TRACKING_COEFFICIENT: f32 = 0.75;
}

/// Rotate the court's forward (+x) axis about the vertical (y) axis.
///
/// Keeps directions in the xz plane; used to turn a sampled serve angle into
/// a unit direction.
#[inline]
pub fn direction_from_yaw(angle_rad: f32) -> Vec3 {
    Vec3::new(angle_rad.cos(), 0.0, -angle_rad.sin())
}
