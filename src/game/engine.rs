//! Game engine: lifecycle, countdown, target spawning and scoring.
//!
//! The engine owns no timers. Whoever drives it calls `tick` once per
//! countdown interval and `spawn_target` once per spawn interval while the
//! round is running. Every operation finishes mutating the session before it
//! returns the events it produced, so callers always dispatch notifications
//! against a settled state.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::game::{GameConfig, LOW_TIME_THRESHOLD_SECS};
use crate::game::events::{GameEvent, GameResult};
use crate::game::state::Session;
use crate::game::types::{GameState, SlotId};

pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    state: GameState,
    session: Session,
    rng: R,
}

impl GameEngine<StdRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(mut config: GameConfig, rng: R) -> Self {
        if config.slot_count == 0 {
            warn!("[GameEngine] Board without holes, using a single slot");
            config.slot_count = 1;
        }
        let session = Session::new(config.round_secs);
        Self {
            config,
            state: GameState::Idle,
            session,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn time_left(&self) -> u32 {
        self.session.time_left
    }

    pub fn active_target(&self) -> Option<SlotId> {
        self.session.active_target
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Begin a round from Idle or Ended, spawning the first target at once.
    pub fn start(&mut self) -> Vec<GameEvent> {
        if self.is_running() {
            debug!("[GameEngine] start ignored, round already running");
            return Vec::new();
        }
        self.session.reset(self.config.round_secs);
        self.state = GameState::Running;
        info!("[GameEngine] Round started ({} slots, {}s)", self.config.slot_count, self.config.round_secs);

        let mut events = vec![
            GameEvent::StateChanged { state: self.state },
            self.display(),
        ];
        events.extend(self.spawn_target());
        events
    }

    /// One countdown step. Ends the round when the clock reaches zero.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if !self.is_running() {
            return Vec::new();
        }
        self.session.time_left = self.session.time_left.saturating_sub(1);

        // The final display comes from `end`, once the round has settled.
        if self.session.time_left == 0 {
            return self.end();
        }
        vec![self.display()]
    }

    /// Replace the current target with one on a random slot. Repeats are allowed.
    pub fn spawn_target(&mut self) -> Vec<GameEvent> {
        if !self.is_running() {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(slot) = self.session.clear_target() {
            events.push(GameEvent::TargetCleared { slot });
        }
        let slot = self.rng.random_range(0..self.config.slot_count);
        self.session.active_target = Some(slot);
        events.push(GameEvent::TargetSpawned { slot });
        events
    }

    /// Score a hit on `slot` if it holds the active target.
    pub fn hit(&mut self, slot: SlotId) -> Vec<GameEvent> {
        if !self.is_running() || self.session.active_target != Some(slot) {
            debug!("[GameEngine] Miss on slot {} (target {:?})", slot, self.session.active_target);
            return Vec::new();
        }
        self.session.score += 1;
        self.session.clear_target();

        vec![
            self.display(),
            GameEvent::HitPulse {
                slot,
                duration_ms: u64::try_from(self.config.hit_pulse.as_millis()).unwrap_or(u64::MAX),
            },
            GameEvent::TargetCleared { slot },
        ]
    }

    /// Finish the running round and publish the grade. No-op outside Running.
    pub fn end(&mut self) -> Vec<GameEvent> {
        if !self.is_running() {
            return Vec::new();
        }
        self.state = GameState::Ended;

        let mut events = Vec::with_capacity(4);
        if let Some(slot) = self.session.clear_target() {
            events.push(GameEvent::TargetCleared { slot });
        }
        let result = GameResult::from_score(self.session.score);
        info!("[GameEngine] Round ended: score={} grade={:?}", result.score, result.grade);

        events.push(GameEvent::StateChanged { state: self.state });
        events.push(self.display());
        events.push(GameEvent::GameOver(result));
        events
    }

    /// Return to Idle from any state with a fresh session.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::with_capacity(3);
        if let Some(slot) = self.session.clear_target() {
            events.push(GameEvent::TargetCleared { slot });
        }
        self.session.reset(self.config.round_secs);
        self.state = GameState::Idle;
        debug!("[GameEngine] Reset");

        events.push(GameEvent::StateChanged { state: self.state });
        events.push(self.display());
        events
    }

    /// Current score and clock as a display notification.
    pub fn display(&self) -> GameEvent {
        let time_left = self.session.time_left;
        GameEvent::DisplayUpdated {
            score: self.session.score,
            time_left,
            low_time: time_left > 0 && time_left <= LOW_TIME_THRESHOLD_SECS,
            can_start: !self.is_running(),
        }
    }
}
