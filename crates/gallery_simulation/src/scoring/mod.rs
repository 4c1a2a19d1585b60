//! Scoring domain — hit dispatcher + economy/score collaborators
//!
//! Поток: TargetStruck → resolve_target_hits → ScoreChanged → apply_score_changes.
//! Presentation requests (particle/sound/haptic) — fire-and-forget, каждый
//! независимо skippable.

pub mod board;
pub mod dispatcher;


pub use board::{apply_score_changes, ScoreBoard};
pub use dispatcher::{
    resolve_target_hits, HapticPulseRequest, ParticleBurstRequest, PlaySoundRequest, ScoreChanged,
    TargetStruck,
};
