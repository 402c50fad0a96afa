//! Whack-a-mole game core and WebSocket server.
//!
//! `game` holds the timer-free engine (lifecycle, spawning, scoring, grading).
//! `server` drives one engine per WebSocket connection with cancellable
//! countdown and spawn timers and pushes its events to the client board.

pub mod config;
pub mod game;
pub mod server;
