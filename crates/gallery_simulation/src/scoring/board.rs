//! Score/economy collaborator — складывает ScoreChanged в totals
//!
//! UI читает ScoreBoard (или слушает ScoreChanged сам) — дисплей не часть
//! synchronous контракта попадания.

use crate::scoring::dispatcher::ScoreChanged;
use crate::target::ObjectKind;
use bevy::prelude::*;

/// Накопленные totals за сессию
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: i64,
    pub money: i64,
    /// Resolved попаданий всего (enemy + innocent)
    pub hits: u32,
    pub innocents_hit: u32,
}

/// Система: применение score deltas
pub fn apply_score_changes(
    mut score_events: EventReader<ScoreChanged>,
    mut board: ResMut<ScoreBoard>,
) {
    for change in score_events.read() {
        board.score += i64::from(change.score_delta);
        board.money += i64::from(change.money_delta);
        board.hits += 1;

        if change.object_kind == ObjectKind::Innocent {
            board.innocents_hit += 1;
        }
    }
}
