use serde::Serialize;

/// Index of a hole on the board, in `0..slot_count`.
pub type SlotId = usize;

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GameState {
    #[default]
    Idle,
    Running,
    Ended,
}

/// Outcome tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    TopTier,
    Excellent,
    Good,
    Normal,
    Poor,
}

impl Grade {
    /// Text shown to the player on the result popup.
    pub fn label(self) -> &'static str {
        match self {
            Grade::TopTier => "Outstanding!",
            Grade::Excellent => "Excellent!",
            Grade::Good => "Well done!",
            Grade::Normal => "Not bad!",
            Grade::Poor => "Keep practicing!",
        }
    }

    /// Style class the client applies to the label. The two top tiers share one.
    pub fn style(self) -> &'static str {
        match self {
            Grade::TopTier | Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::Normal => "normal",
            Grade::Poor => "poor",
        }
    }
}
