/// Main configuration module.
///
/// Re-exports submodules for gameplay, anti-spam and server configuration.
pub mod anti_spam;
pub mod game;
pub mod server;

pub use game::GameConfig;
