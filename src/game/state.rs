use serde::Serialize;

use crate::game::types::SlotId;

/// Mutable data of the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub score: u32,
    pub time_left: u32,
    pub active_target: Option<SlotId>,
}

impl Session {
    pub fn new(round_secs: u32) -> Self {
        Session {
            score: 0,
            time_left: round_secs,
            active_target: None,
        }
    }

    /// Zero the score, refill the clock and drop the target.
    pub fn reset(&mut self, round_secs: u32) {
        *self = Session::new(round_secs);
    }

    /// Take the active target out, returning the slot it occupied.
    pub fn clear_target(&mut self) -> Option<SlotId> {
        self.active_target.take()
    }
}
