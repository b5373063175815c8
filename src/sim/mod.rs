//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single writer per piece of state (the context owns score and phase,
//!   the ball and controllers own their own kinematics)
//! - No rendering, input polling or collision detection; the embedder
//!   reports contacts in and drains events out
//!
//! The court lives in the xz plane: x runs between the rackets, z runs
//! between the upper and lower walls, y is unused.

pub mod ball;
pub mod context;
pub mod controller;
pub mod player;
pub mod racket;
pub mod timer;

pub use ball::{Ball, Contact};
pub use context::{MatchContext, RoundPhase};
pub use controller::{Brain, Controller, ControllerKind, SurfaceTag};
pub use player::{Goal, Player, Side};
pub use racket::Racket;
pub use timer::{ServeCue, ServeTimer};

/// Errors surfaced by the match core.
///
/// All of these are non-fatal by design: a real-time loop must never halt on
/// a single bad event. The visible effect of an error is a skipped side
/// effect plus a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// A serve was requested with a zero-length direction
    DegenerateDirection,
    /// A goal event carried an id that matches neither registered player
    UnknownGoalId(u32),
    /// A lookup referenced an id that matches neither registered player
    UnknownPlayerId(u32),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::DegenerateDirection => write!(f, "serve direction has zero length"),
            SimError::UnknownGoalId(id) => write!(f, "no registered player owns goal id {id}"),
            SimError::UnknownPlayerId(id) => write!(f, "no registered player has id {id}"),
        }
    }
}

impl std::error::Error for SimError {}
