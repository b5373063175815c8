//! Match settings and AI difficulty
//!
//! Everything the match can be tuned with lives here so embedders can load
//! overrides from JSON instead of recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// AI difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "med" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// AI racket speed for this difficulty, units per second
    pub fn racket_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 11.0,
            Difficulty::Normal => 12.0,
            Difficulty::Hard => 15.0,
        }
    }
}

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Ball speed after a serve, units per second
    pub ball_speed: f32,
    /// Human racket speed at full axis deflection, units per second
    pub player_racket_speed: f32,
    /// Serve cone half-angle, degrees either side of the forward axis
    pub service_half_max_angle: f32,
    /// Delay between a goal and the next serve, seconds
    pub time_between_rounds: f32,
    /// Horizontal distance between the two rackets
    pub rackets_distance: f32,
    /// Racket extent along the bounce (z) axis
    pub racket_half_depth: f32,
    /// Half-height of the court between the walls
    pub court_half_height: f32,
    /// AI difficulty for AI-controlled rackets
    pub difficulty: Difficulty,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            player_racket_speed: PLAYER_RACKET_SPEED,
            service_half_max_angle: SERVICE_HALF_MAX_ANGLE,
            time_between_rounds: TIME_BETWEEN_ROUNDS,
            rackets_distance: RACKETS_DISTANCE,
            racket_half_depth: RACKET_HALF_DEPTH,
            court_half_height: COURT_HALF_HEIGHT,
            difficulty: Difficulty::Normal,
        }
    }
}
