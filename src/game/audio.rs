//! Hit sound collaborator.
//!
//! Sound is best-effort: a failed playback is logged and never reaches the
//! game state.

use log::debug;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoundError {
    #[error("audio output is unavailable")]
    Unavailable,
    #[error("audio playback failed: {0}")]
    Playback(String),
}

/// Something able to play the hit cue.
pub trait HitSound {
    fn play(&mut self) -> Result<(), SoundError>;
}

/// Sine tone description, synthesized by the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u64,
    pub start_gain: f32,
    pub end_gain: f32,
}

impl Tone {
    /// Short beep played on a successful hit.
    pub fn hit() -> Self {
        Tone {
            frequency_hz: 800.0,
            duration_ms: 200,
            start_gain: 0.3,
            end_gain: 0.01,
        }
    }
}

/// Output used when no audio collaborator is attached.
pub struct Silent;

impl HitSound for Silent {
    fn play(&mut self) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Play the hit cue, swallowing any failure.
pub fn play_best_effort(sound: &mut dyn HitSound) {
    if let Err(e) = sound.play() {
        debug!("[Audio] Hit sound failed: {}", e);
    }
}
