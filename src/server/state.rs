// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the timing template every new game connection starts from.

use crate::config::game::GameConfig;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Timings applied to each new session; the board size comes from the client.
    pub game_config: GameConfig,
}

impl AppState {
    pub fn new(game_config: GameConfig) -> Self {
        AppState { game_config }
    }

    /// Config for a board with `holes` slots.
    pub fn config_for(&self, holes: usize) -> GameConfig {
        GameConfig {
            slot_count: holes,
            ..self.game_config.clone()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(GameConfig::default())
    }
}
