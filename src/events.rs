//! Presentation boundary
//!
//! The core emits typed events into a per-tick queue; the embedder either
//! drains the queue directly or forwards it into a [`PresentationSink`]
//! (score labels, round banners, sfx playback). The core never blocks on any
//! of this, and an absent sink only degrades the match, it never fails it.

use crate::sim::RoundPhase;

/// One-shot sound effects the presentation layer may play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxKind {
    WallBounce,
    RacketBounce,
    Goal,
}

/// Events emitted by the match core during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A player's score changed
    ScoreChanged { player_id: u32, score: u32 },
    /// The round state machine moved to a new phase
    RoundChanged { phase: RoundPhase },
    /// A one-shot sound should play
    Sfx(SfxKind),
}

/// One-way sink for presentation side effects.
///
/// All methods default to no-ops so embedders implement only what they show.
pub trait PresentationSink {
    fn score_changed(&mut self, _player_id: u32, _score: u32) {}
    fn round_changed(&mut self, _phase: RoundPhase) {}
    fn play_sfx(&mut self, _sfx: SfxKind) {}
    fn mute(&mut self) {}
    fn unmute(&mut self) {}
}

/// Sink that drops everything. Stand-in when no presentation layer is bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresentation;

impl PresentationSink for NullPresentation {}

/// Forward a batch of drained events into a sink
pub fn forward_events(events: &[GameEvent], sink: &mut dyn PresentationSink) {
    for event in events {
        match *event {
            GameEvent::ScoreChanged { player_id, score } => sink.score_changed(player_id, score),
            GameEvent::RoundChanged { phase } => sink.round_changed(phase),
            GameEvent::Sfx(kind) => sink.play_sfx(kind),
        }
    }
}
