pub mod audio;
pub mod engine;
pub mod events;
pub mod grading;
pub mod state;
pub mod types;

pub use engine::GameEngine;
pub use events::{GameEvent, GameResult};
pub use types::{GameState, Grade, SlotId};
