//! Notifications emitted by the engine for the presentation layer.

use serde::Serialize;

use crate::game::grading::grade_for_score;
use crate::game::types::{GameState, Grade, SlotId};

/// Final score and its grade, shown on the result popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub score: u32,
    pub grade: Grade,
    pub label: String,
    pub style: String,
}

impl GameResult {
    pub fn from_score(score: u32) -> Self {
        let grade = grade_for_score(score);
        GameResult {
            score,
            grade,
            label: grade.label().to_string(),
            style: grade.style().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum GameEvent {
    StateChanged {
        state: GameState,
    },
    DisplayUpdated {
        score: u32,
        time_left: u32,
        /// The countdown is in its last seconds.
        low_time: bool,
        can_start: bool,
    },
    TargetSpawned {
        slot: SlotId,
    },
    TargetCleared {
        slot: SlotId,
    },
    /// Transient hit effect; the client clears it after `duration_ms`.
    HitPulse {
        slot: SlotId,
        duration_ms: u64,
    },
    GameOver(GameResult),
}
