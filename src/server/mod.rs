// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the HTTP/WebSocket side of the game, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (one engine and its timers per connection)
//! - Anti-flood protection and error payloads

pub mod anti_spam;
pub mod game_session;
pub mod router;
pub mod state;
pub mod ws_error;
