//! Match orchestration
//!
//! `MatchContext` is the explicit process-wide handle for one running match:
//! it owns the two players, rackets and goals, the ball, the round state
//! machine and the serve timer, and it is the sole writer of score and
//! phase. Embedders call [`MatchContext::tick`] once per frame, report
//! physics contacts as they arrive, and drain presentation events after
//! each tick.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::SimError;
use super::ball::{Ball, Contact};
use super::controller::{Controller, ControllerKind, SurfaceTag};
use super::player::{Goal, Player, Side};
use super::racket::Racket;
use super::timer::ServeTimer;
use crate::direction_from_yaw;
use crate::events::GameEvent;
use crate::input::InputAxes;
use crate::settings::MatchSettings;

/// Round lifecycle. Terminal only at explicit match teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Constructed, no match started
    Idle,
    /// Between rounds, a serve is due
    Serving,
    /// Ball in flight
    InPlay,
    /// A goal was just struck; the re-serve delay is running
    GoalScored,
}

/// Everything bound to one end of the court
#[derive(Debug, Clone)]
struct SideState {
    player: Player,
    racket: Racket,
    goal: Goal,
}

/// Top-level match state and orchestration
pub struct MatchContext {
    settings: MatchSettings,
    phase: RoundPhase,
    left: SideState,
    right: SideState,
    ball: Ball,
    serve_timer: ServeTimer,
    rng: Pcg32,
    next_player_id: u32,
    events: Vec<GameEvent>,
}

impl MatchContext {
    /// Create a match context with a mock AI pair, idle until a game starts.
    ///
    /// The seed fixes every serve direction, so a match replays exactly.
    pub fn new(settings: MatchSettings, seed: u64) -> Self {
        let half = settings.rackets_distance / 2.0;
        let mock_side = |side: Side, id: u32| {
            let position = Vec3::new(half * side.sign(), 0.0, 0.0);
            let controller =
                Controller::ai(id, settings.difficulty, settings.rackets_distance, position);
            SideState {
                player: Player::new(id),
                racket: Racket::new(controller, position, settings.racket_half_depth),
                goal: Goal::new(id),
            }
        };

        let mut ball = Ball::new();
        ball.set_ball(settings.ball_speed);

        Self {
            left: mock_side(Side::Left, 0),
            right: mock_side(Side::Right, 1),
            settings,
            phase: RoundPhase::Idle,
            ball,
            serve_timer: ServeTimer::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_player_id: 0,
            events: Vec::new(),
        }
    }

    /// Build fresh players, rackets and goals for a new match.
    ///
    /// Player ids are assigned monotonically and bind everything together:
    /// the controller reads the id's input axis, and the goal with the same
    /// id is the one this player defends. Scores reset to zero and the
    /// serve timer is cancelled so no stale serve can fire.
    pub fn init_game(&mut self, left_kind: ControllerKind, right_kind: ControllerKind) {
        self.serve_timer.cancel();

        let left_id = self.alloc_player_id();
        let right_id = self.alloc_player_id();
        self.left = self.build_side(Side::Left, left_kind, left_id);
        self.right = self.build_side(Side::Right, right_kind, right_id);

        self.ball.set_ball(self.settings.ball_speed);

        self.events.push(GameEvent::ScoreChanged {
            player_id: left_id,
            score: 0,
        });
        self.events.push(GameEvent::ScoreChanged {
            player_id: right_id,
            score: 0,
        });
        self.set_phase(RoundPhase::Serving);

        log::info!(
            "match initialized: player {left_id} ({left_kind:?}) vs player {right_id} ({right_kind:?})"
        );
    }

    /// Tear down the current pair and start a match with these controllers.
    /// The first serve's horizontal direction is a coin flip.
    pub fn start_new_game(
        &mut self,
        left_kind: ControllerKind,
        right_kind: ControllerKind,
    ) -> Result<(), SimError> {
        self.init_game(left_kind, right_kind);
        self.serve(None)
    }

    /// Return to the menu: keep a background AI-vs-AI demo match running
    /// behind it. Any pending serve is invalidated first.
    pub fn reset_to_menu(&mut self) {
        log::info!("returning to menu, starting background demo match");
        if let Err(err) = self.start_new_game(ControllerKind::Ai, ControllerKind::Ai) {
            log::warn!("demo match serve failed: {err}");
        }
    }

    /// Serve: ball at the court center, direction drawn within the service
    /// cone about the forward axis.
    ///
    /// `toward` picks the half of the court the ball travels to. Re-serves
    /// pass the side whose goal was just struck, steering the ball away
    /// from the scorer's own goal; `None` (first serve) mirrors on a coin
    /// flip.
    pub fn serve(&mut self, toward: Option<Side>) -> Result<(), SimError> {
        let half_angle = self.settings.service_half_max_angle;
        let angle = if half_angle > 0.0 {
            self.rng.random_range(-half_angle..half_angle).to_radians()
        } else {
            0.0
        };
        let mut direction = direction_from_yaw(angle);

        match toward {
            Some(side) => direction.x = direction.x.abs() * side.sign(),
            None => {
                if self.rng.random_bool(0.5) {
                    direction.x = -direction.x;
                }
            }
        }

        self.ball.serve(Vec3::ZERO, direction)?;
        self.set_phase(RoundPhase::InPlay);
        log::debug!("serve at {angle:.3} rad, direction {direction}");
        Ok(())
    }

    /// A goal was struck. The opponent of the goal's owner is awarded the
    /// point and the re-serve delay starts.
    ///
    /// An unknown goal id skips the score (logged, not fatal) but still
    /// schedules the re-serve so the match recovers.
    pub fn on_goal(&mut self, goal_id: u32) -> Result<(), SimError> {
        let struck = self.goal_side(goal_id);
        self.set_phase(RoundPhase::GoalScored);

        match struck {
            Some(side) => {
                let scorer = side.opposite();
                let slot = self.side_mut(scorer);
                let score = slot.player.add_point();
                let player_id = slot.player.id;

                self.events
                    .push(GameEvent::ScoreChanged { player_id, score });
                self.serve_timer
                    .arm(self.settings.time_between_rounds, Some(side));

                log::info!("goal against {side:?}: player {player_id} now at {score}");
                Ok(())
            }
            None => {
                // Degraded but alive: no score, coin-flip re-serve
                self.serve_timer
                    .arm(self.settings.time_between_rounds, None);
                log::warn!("goal event with unknown goal id {goal_id}; score skipped");
                Err(SimError::UnknownGoalId(goal_id))
            }
        }
    }

    /// Advance the match one frame: drive both rackets, move the ball, and
    /// run the serve timer.
    ///
    /// Runs in every phase; rackets stay controllable during the goal delay
    /// (the ball is inert then, so only paddles move).
    pub fn tick(&mut self, dt: f32, axes: &dyn InputAxes) {
        let ball_position = self.ball.position;
        self.left.racket.drive(ball_position, axes, dt);
        self.right.racket.drive(ball_position, axes, dt);

        self.ball.advance(dt);

        if let Some(cue) = self.serve_timer.tick(dt) {
            self.left.racket.reset_position();
            self.right.racket.reset_position();
            self.set_phase(RoundPhase::Serving);
            if let Err(err) = self.serve(cue.toward) {
                log::warn!("scheduled serve failed: {err}");
            }
        }
    }

    /// Physics boundary: a ball overlap event for this tick.
    ///
    /// Reports are resolved independently in arrival order; a ball striking
    /// a wall and a racket in the same tick takes both bounces. Goal
    /// contacts also park the ball and feed the scoring path.
    pub fn report_ball_contact(&mut self, contact: Contact) {
        let sfx = self.ball.resolve_contact(&contact);
        self.events.push(GameEvent::Sfx(sfx));

        if let Contact::Goal { id } = contact {
            // Unknown ids are already logged and absorbed inside on_goal
            let _ = self.on_goal(id);
        }
    }

    /// Physics boundary: a racket entered a trigger volume
    pub fn report_racket_trigger_enter(&mut self, side: Side, tag: SurfaceTag) {
        self.side_mut(side).racket.on_trigger_enter(tag);
    }

    /// Physics boundary: a racket left a trigger volume
    pub fn report_racket_trigger_exit(&mut self, side: Side, tag: SurfaceTag) {
        self.side_mut(side).racket.on_trigger_exit(tag);
    }

    /// Drain the events emitted since the last drain
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.side(side).player
    }

    pub fn racket(&self, side: Side) -> &Racket {
        &self.side(side).racket
    }

    pub fn goal_id(&self, side: Side) -> u32 {
        self.side(side).goal.id
    }

    pub fn score(&self, side: Side) -> u32 {
        self.side(side).player.score()
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn serve_pending(&self) -> bool {
        self.serve_timer.is_armed()
    }

    /// Which side a player id belongs to
    pub fn player_side(&self, player_id: u32) -> Result<Side, SimError> {
        if self.left.player.id == player_id {
            Ok(Side::Left)
        } else if self.right.player.id == player_id {
            Ok(Side::Right)
        } else {
            Err(SimError::UnknownPlayerId(player_id))
        }
    }

    fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn goal_side(&self, goal_id: u32) -> Option<Side> {
        if self.left.goal.id == goal_id {
            Some(Side::Left)
        } else if self.right.goal.id == goal_id {
            Some(Side::Right)
        } else {
            None
        }
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.events.push(GameEvent::RoundChanged { phase });
        }
    }

    fn alloc_player_id(&mut self) -> u32 {
        let id = self.next_player_id;
        self.next_player_id += 1;
        id
    }

    /// Factory for one end of the court, keyed on the controller kind
    fn build_side(&self, side: Side, kind: ControllerKind, id: u32) -> SideState {
        let position = Vec3::new(self.settings.rackets_distance / 2.0 * side.sign(), 0.0, 0.0);
        let controller = match kind {
            ControllerKind::Human => {
                Controller::human(id, self.settings.player_racket_speed, position)
            }
            ControllerKind::Ai => Controller::ai(
                id,
                self.settings.difficulty,
                self.settings.rackets_distance,
                position,
            ),
        };

        SideState {
            player: Player::new(id),
            racket: Racket::new(controller, position, self.settings.racket_half_depth),
            goal: Goal::new(id),
        }
    }
}
