//! Players, goals and court sides

use serde::{Deserialize, Serialize};

/// The two ends of the court. Left defends the goal at -x, right at +x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of this side's x half of the court
    pub fn sign(&self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Player identity and accumulating score.
///
/// The racket owns the player's controller; the binding invariant is that
/// the controller's id equals the player's id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    score: u32,
}

impl Player {
    pub fn new(id: u32) -> Self {
        Self { id, score: 0 }
    }

    /// Award one point; returns the new score
    pub fn add_point(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

/// A goal trigger volume, matched 1:1 to the player defending it.
///
/// Goals never own scoring logic; they only name the side that was struck.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
}

impl Goal {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_point_increments_by_exactly_one() {
        let mut player = Player::new(0);
        assert_eq!(player.score(), 0);
        assert_eq!(player.add_point(), 1);
        assert_eq!(player.add_point(), 2);
        assert_eq!(player.score(), 2);
    }

    #[test]
    fn test_side_opposite_round_trips() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite().opposite(), Side::Right);
    }

    #[test]
    fn test_side_signs_face_away_from_each_other() {
        assert_eq!(Side::Left.sign(), -1.0);
        assert_eq!(Side::Right.sign(), 1.0);
    }
}
