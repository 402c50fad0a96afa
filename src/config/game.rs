//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as round length,
//! countdown and spawn cadence, board size and grade thresholds.
use std::time::Duration;

/// Length of a round in seconds.
pub const ROUND_DURATION_SECS: u32 = 30;

/// Countdown cadence (one tick per interval).
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Delay before the next target replaces the current one.
pub const SPAWN_INTERVAL_MS: u64 = 1000;

/// How long the client shows the hit pulse on a slot.
pub const HIT_PULSE_MS: u64 = 300;

/// Delay between the reset and the restart of "play again".
pub const PLAY_AGAIN_DELAY_MS: u64 = 100;

/// Number of holes used when the board does not say otherwise.
pub const DEFAULT_HOLES: usize = 9;

/// Largest board a client may request.
pub const MAX_HOLES: usize = 64;

/// The countdown is flagged as running low at or below this many seconds.
pub const LOW_TIME_THRESHOLD_SECS: u32 = 10;

/// Minimum final scores for each grade tier.
pub const TOP_TIER_MIN_SCORE: u32 = 25;
pub const EXCELLENT_MIN_SCORE: u32 = 20;
pub const GOOD_MIN_SCORE: u32 = 15;
pub const NORMAL_MIN_SCORE: u32 = 10;

/// Timing and board parameters for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub slot_count: usize,
    pub round_secs: u32,
    pub tick_interval: Duration,
    pub spawn_interval: Duration,
    pub hit_pulse: Duration,
    pub play_again_delay: Duration,
}

impl GameConfig {
    /// Default timings on a board with `slot_count` holes.
    pub fn with_slots(slot_count: usize) -> Self {
        Self {
            slot_count,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_HOLES,
            round_secs: ROUND_DURATION_SECS,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            spawn_interval: Duration::from_millis(SPAWN_INTERVAL_MS),
            hit_pulse: Duration::from_millis(HIT_PULSE_MS),
            play_again_delay: Duration::from_millis(PLAY_AGAIN_DELAY_MS),
        }
    }
}
