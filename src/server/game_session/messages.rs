use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::audio::Tone;
use crate::game::types::{GameState, SlotId};
use crate::game::GameEvent;

/// Commands a client may send over its game socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum ClientAction {
    Start,
    Stop,
    Reset,
    PlayAgain,
    Hit { slot: SlotId },
    Ping,
}

/// Server -> client messages.
#[derive(Message, Debug, Clone, PartialEq, Serialize)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    Event(GameEvent),
    PlayTone(Tone),
    Error {
        code: String,
        message: String,
        context: Option<String>,
    },
}

impl ServerWsMessage {
    pub fn error(code: &str, message: &str, context: Option<&str>) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
            context: context.map(str::to_string),
        }
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub msg: ClientAction,
}

/// Stop all timers and the session actor (client disconnected).
#[derive(Message)]
#[rtype(result = "()")]
pub struct Shutdown;

/// Point-in-time view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub state: GameState,
    pub score: u32,
    pub time_left: u32,
    pub active_target: Option<SlotId>,
    pub slot_count: usize,
}

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;
