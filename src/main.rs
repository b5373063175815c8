//! Duel Pong headless demo
//!
//! Runs an AI-vs-AI match for a stretch of simulated time. A toy plane-based
//! overlap scanner stands in for the engine physics backend: it reports
//! wall/racket/goal contacts into the match context, which is exactly the
//! boundary a real embedder would drive. Events are forwarded into a logging
//! presentation sink.
//!
//! Usage: `duel-pong [settings.json] [seed]`

use duel_pong::consts::SIM_DT;
use duel_pong::events::{PresentationSink, forward_events};
use duel_pong::input::NullAxes;
use duel_pong::sim::{Contact, ControllerKind, MatchContext, RoundPhase, Side, SurfaceTag};
use duel_pong::{MatchSettings, SfxKind};

/// Simulated match length, seconds
const DEMO_DURATION: f32 = 60.0;

/// Ball radius used by the toy overlap scanner
const BALL_RADIUS: f32 = 0.25;
/// Racket extent along x used by the toy overlap scanner
const RACKET_HALF_WIDTH: f32 = 0.5;

/// Presentation layer that just logs what it is told
struct LogPresentation;

impl PresentationSink for LogPresentation {
    fn score_changed(&mut self, player_id: u32, score: u32) {
        log::info!("score: player {player_id} -> {score}");
    }
    fn round_changed(&mut self, phase: RoundPhase) {
        log::debug!("round: {phase:?}");
    }
    fn play_sfx(&mut self, sfx: SfxKind) {
        log::debug!("sfx: {sfx:?}");
    }
}

/// Minimal stand-in for the engine collision backend.
///
/// Tracks overlap state so each contact is reported once on entry, the way
/// discrete trigger-enter events arrive from a real physics layer.
#[derive(Default)]
struct CourtPhysics {
    ball_on_upper: bool,
    ball_on_lower: bool,
    ball_on_racket: [bool; 2],
    ball_in_goal: [bool; 2],
    racket_on_upper: [bool; 2],
    racket_on_lower: [bool; 2],
}

impl CourtPhysics {
    /// Scan for overlaps and report enter/exit events into the context
    fn step(&mut self, ctx: &mut MatchContext) {
        let settings = ctx.settings().clone();
        let half_height = settings.court_half_height;
        let goal_x = settings.rackets_distance / 2.0 + 1.0;
        let ball = ctx.ball().position;

        let on_upper = ball.z + BALL_RADIUS >= half_height;
        if on_upper && !self.ball_on_upper {
            ctx.report_ball_contact(Contact::UpperWall);
        }
        self.ball_on_upper = on_upper;

        let on_lower = ball.z - BALL_RADIUS <= -half_height;
        if on_lower && !self.ball_on_lower {
            ctx.report_ball_contact(Contact::LowerWall);
        }
        self.ball_on_lower = on_lower;

        for (index, side) in [Side::Left, Side::Right].into_iter().enumerate() {
            let racket = ctx.racket(side).position;
            let half_depth = ctx.racket(side).half_depth;

            let on_racket = (ball.x - racket.x).abs() <= RACKET_HALF_WIDTH + BALL_RADIUS
                && (ball.z - racket.z).abs() <= half_depth + BALL_RADIUS;
            if on_racket && !self.ball_on_racket[index] {
                ctx.report_ball_contact(Contact::Racket {
                    position: racket,
                    half_depth,
                });
            }
            self.ball_on_racket[index] = on_racket;

            let in_goal = ball.x * side.sign() >= goal_x;
            if in_goal && !self.ball_in_goal[index] {
                ctx.report_ball_contact(Contact::Goal {
                    id: ctx.goal_id(side),
                });
            }
            self.ball_in_goal[index] = in_goal;

            // Racket vs wall trigger volumes
            let racket_top = ctx.racket(side).position.z + half_depth;
            let racket_bottom = ctx.racket(side).position.z - half_depth;

            let at_upper = racket_top >= half_height;
            if at_upper != self.racket_on_upper[index] {
                if at_upper {
                    ctx.report_racket_trigger_enter(side, SurfaceTag::UpperWall);
                } else {
                    ctx.report_racket_trigger_exit(side, SurfaceTag::UpperWall);
                }
                self.racket_on_upper[index] = at_upper;
            }

            let at_lower = racket_bottom <= -half_height;
            if at_lower != self.racket_on_lower[index] {
                if at_lower {
                    ctx.report_racket_trigger_enter(side, SurfaceTag::LowerWall);
                } else {
                    ctx.report_racket_trigger_exit(side, SurfaceTag::LowerWall);
                }
                self.racket_on_lower[index] = at_lower;
            }
        }

        // The sim never moves anything on y
        debug_assert_eq!(ball.y, 0.0);
    }
}

fn load_settings() -> MatchSettings {
    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(path) if path.ends_with(".json") => match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {path}");
                    settings
                }
                Err(err) => {
                    log::warn!("bad settings file {path}: {err}; using defaults");
                    MatchSettings::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read {path}: {err}; using defaults");
                MatchSettings::default()
            }
        },
        _ => MatchSettings::default(),
    }
}

fn seed_from_args() -> u64 {
    std::env::args()
        .skip(1)
        .find_map(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42)
}

fn main() {
    env_logger::init();

    let settings = load_settings();
    let seed = seed_from_args();
    log::info!("starting demo match, seed {seed}");

    let mut ctx = MatchContext::new(settings, seed);
    if let Err(err) = ctx.start_new_game(ControllerKind::Ai, ControllerKind::Ai) {
        log::error!("could not start match: {err}");
        return;
    }

    let mut physics = CourtPhysics::default();
    let mut sink = LogPresentation;

    let steps = (DEMO_DURATION / SIM_DT) as u32;
    for _ in 0..steps {
        physics.step(&mut ctx);
        ctx.tick(SIM_DT, &NullAxes);

        let events = ctx.take_events();
        forward_events(&events, &mut sink);
    }

    println!(
        "final score after {DEMO_DURATION}s: left {} - right {}",
        ctx.score(Side::Left),
        ctx.score(Side::Right),
    );
}
