//! WebSocket session handler for one game board.
//!
//! This actor is the presentation bridge: it owns a `GameSession` for the
//! lifetime of the connection, forwards parsed client commands to it and
//! serializes every notification it receives back to the client.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse, http::StatusCode};
use actix_web_actors::ws;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::config::game::{DEFAULT_HOLES, GameConfig, MAX_HOLES};
use crate::game::audio::{HitSound, SoundError, Tone};
use crate::server::anti_spam::AntiSpamState;
use crate::server::game_session::messages::{ClientAction, ProcessClientMessage, ServerWsMessage, Shutdown};
use crate::server::game_session::server::GameSession;
use crate::server::state::AppState;
use crate::server::ws_error::{http_error_response, ws_error_message, BANNED, INTERNAL, INVALID_COMMAND, INVALID_HOLES};

pub struct GameSessionActor {
    pub peer: String,
    config: GameConfig,
    session_addr: Option<Addr<GameSession>>,
    anti_spam: AntiSpamState,
}

impl GameSessionActor {
    pub fn new(peer: String, config: GameConfig) -> Self {
        Self {
            peer,
            config,
            session_addr: None,
            anti_spam: AntiSpamState::new(),
        }
    }

    /// Send a ban notice, close the socket and stop the actor.
    fn send_ban_and_close(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        let remaining = self.anti_spam.ban_remaining_secs().to_string();
        ctx.text(ws_error_message(
            BANNED,
            "You have been banned for spamming. Please try again later.",
            Some(&remaining),
        ));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Banned for spam".into()),
        }));
        ctx.stop();
    }

    fn handle_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        if self.anti_spam.record_request(&self.peer) {
            self.send_ban_and_close(ctx);
            return;
        }
        match serde_json::from_str::<ClientAction>(text) {
            Ok(action) => {
                self.anti_spam.reset_on_valid_action();
                if let Some(addr) = &self.session_addr {
                    addr.do_send(ProcessClientMessage { msg: action });
                }
            }
            Err(e) => {
                debug!("[GameSessionActor] Invalid command from {}: {}", self.peer, e);
                if self.anti_spam.should_send_error(INVALID_COMMAND, &self.peer) {
                    ctx.text(ws_error_message(INVALID_COMMAND, "Invalid client command", Some(text)));
                }
            }
        }
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Spin up the game session that this connection presents.
    fn started(&mut self, ctx: &mut Self::Context) {
        let observer = ctx.address().recipient::<ServerWsMessage>();
        let sound = ToneCue::new(observer.clone());
        let session = GameSession::new(self.config.clone(), observer, Box::new(sound)).start();
        self.session_addr = Some(session);
        info!("[GameSessionActor] {} connected", self.peer);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(addr) = self.session_addr.take() {
            addr.do_send(Shutdown);
        }
        info!("[GameSessionActor] {} disconnected", self.peer);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => self.handle_text(&text, ctx),
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[GameSessionActor] Protocol error from {}: {}", self.peer, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[GameSessionActor] Failed to serialize message: {}", e);
                ctx.text(ws_error_message(INTERNAL, "Internal server error", None));
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// Hit sound delivered as a tone the client synthesizes.
pub struct ToneCue {
    recipient: Recipient<ServerWsMessage>,
}

impl ToneCue {
    pub fn new(recipient: Recipient<ServerWsMessage>) -> Self {
        Self { recipient }
    }
}

impl HitSound for ToneCue {
    fn play(&mut self) -> Result<(), SoundError> {
        self.recipient
            .try_send(ServerWsMessage::PlayTone(Tone::hit()))
            .map_err(|_| SoundError::Unavailable)
    }
}

#[derive(Debug, Deserialize)]
pub struct GameParams {
    pub holes: Option<String>,
}

/// Resolve the requested board size, if acceptable.
pub fn validate_holes(holes: Option<&str>) -> Option<usize> {
    let holes = match holes {
        Some(raw) => raw.trim().parse::<usize>().ok()?,
        None => DEFAULT_HOLES,
    };
    (1..=MAX_HOLES).contains(&holes).then_some(holes)
}

/// WebSocket endpoint for a game board.
///
/// Optional query parameter `holes`: number of target slots on the client's
/// board (default 9).
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    params: web::Query<GameParams>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let Some(holes) = validate_holes(params.holes.as_deref()) else {
        return Ok(http_error_response(
            INVALID_HOLES,
            &format!("holes must be between 1 and {}", MAX_HOLES),
            params.holes.as_deref(),
            StatusCode::BAD_REQUEST,
        ));
    };

    let peer = req
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    ws::start(GameSessionActor::new(peer, data.config_for(holes)), &req, stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use actix_web::App;
    use awc::error::WsProtocolError;
    use awc::ws::{CloseCode, Frame, Message as WsMessage};
    use futures_util::{SinkExt, Stream, StreamExt};
    use serde_json::Value;

    use crate::config::anti_spam::MAX_REQUESTS_PER_SECOND;
    use crate::server::router;

    struct Recorder {
        messages: Arc<Mutex<Vec<ServerWsMessage>>>,
    }

    impl Actor for Recorder {
        type Context = Context<Self>;
    }

    impl Handler<ServerWsMessage> for Recorder {
        type Result = ();

        fn handle(&mut self, msg: ServerWsMessage, _: &mut Context<Self>) {
            self.messages.lock().unwrap().push(msg);
        }
    }

    fn test_server(config: GameConfig) -> actix_test::TestServer {
        actix_test::start(move || {
            App::new()
                .app_data(web::Data::new(AppState::new(config.clone())))
                .configure(router::config)
        })
    }

    /// Config whose timers never fire during a test.
    fn frozen_config() -> GameConfig {
        GameConfig {
            tick_interval: Duration::from_secs(60),
            spawn_interval: Duration::from_secs(60),
            ..GameConfig::default()
        }
    }

    /// Read text frames until one satisfies `pred`, returning everything read.
    async fn read_until<S>(framed: &mut S, pred: impl Fn(&Value) -> bool) -> Vec<Value>
    where
        S: Stream<Item = Result<Frame, WsProtocolError>> + Unpin,
    {
        let mut seen = Vec::new();
        loop {
            let frame = tokio::time::timeout(Duration::from_secs(5), framed.next())
                .await
                .expect("no frame within 5s");
            match frame {
                Some(Ok(Frame::Text(bytes))) => {
                    let value: Value = serde_json::from_slice(&bytes).unwrap();
                    let done = pred(&value);
                    seen.push(value);
                    if done {
                        return seen;
                    }
                }
                Some(Ok(_)) => continue,
                other => panic!("socket ended early: {:?}", other),
            }
        }
    }

    fn is_event(value: &Value, event: &str) -> bool {
        value["action"] == "Event" && value["data"]["event"] == event
    }

    #[test]
    fn test_validate_holes() {
        let max = MAX_HOLES.to_string();
        let over = (MAX_HOLES + 1).to_string();
        assert_eq!(validate_holes(None), Some(DEFAULT_HOLES));
        assert_eq!(validate_holes(Some("1")), Some(1));
        assert_eq!(validate_holes(Some(" 4 ")), Some(4));
        assert_eq!(validate_holes(Some(&max)), Some(MAX_HOLES));
        assert_eq!(validate_holes(Some("0")), None);
        assert_eq!(validate_holes(Some(&over)), None);
        assert_eq!(validate_holes(Some("abc")), None);
        assert_eq!(validate_holes(Some("-1")), None);
        assert_eq!(validate_holes(Some("")), None);
    }

    #[actix::test]
    async fn test_tone_cue_delivers_hit_tone() {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let recorder = Recorder { messages: messages.clone() }.start();
        let mut cue = ToneCue::new(recorder.recipient());

        assert_eq!(cue.play(), Ok(()));
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(*messages.lock().unwrap(), vec![ServerWsMessage::PlayTone(Tone::hit())]);
    }

    #[actix::test]
    async fn test_tone_cue_closed_mailbox() {
        let ctx: Context<Recorder> = Context::new();
        let recipient = ctx.address().recipient::<ServerWsMessage>();
        drop(ctx);

        let mut cue = ToneCue::new(recipient);
        assert_eq!(cue.play(), Err(SoundError::Unavailable));
    }

    #[actix_web::test]
    async fn test_connect_sends_initial_state() {
        let mut srv = test_server(frozen_config());
        let mut framed = srv.ws_at("/ws/game?holes=4").await.unwrap();

        let seen = read_until(&mut framed, |v| is_event(v, "DisplayUpdated")).await;
        assert_eq!(seen.len(), 2);
        assert!(is_event(&seen[0], "StateChanged"));
        assert_eq!(seen[0]["data"]["state"], "Idle");
        assert_eq!(seen[1]["data"]["time_left"], 30);
        assert_eq!(seen[1]["data"]["can_start"], true);
    }

    #[actix_web::test]
    async fn test_malformed_command_is_reported() {
        let mut srv = test_server(frozen_config());
        let mut framed = srv.ws_at("/ws/game").await.unwrap();

        framed.send(WsMessage::Text("not a command".into())).await.unwrap();
        let seen = read_until(&mut framed, |v| v["action"] == "Error").await;
        let error = seen.last().unwrap();
        assert_eq!(error["data"]["code"], INVALID_COMMAND);
        assert_eq!(error["data"]["context"], "not a command");
    }

    #[actix_web::test]
    async fn test_hit_sends_tone_after_events() {
        let mut srv = test_server(frozen_config());
        let mut framed = srv.ws_at("/ws/game?holes=3").await.unwrap();

        framed.send(WsMessage::Text(r#"{"action":"Start"}"#.into())).await.unwrap();
        let seen = read_until(&mut framed, |v| is_event(v, "TargetSpawned")).await;
        let slot = seen.last().unwrap()["data"]["slot"].as_u64().unwrap();

        let hit = format!(r#"{{"action":"Hit","data":{{"slot":{}}}}}"#, slot);
        framed.send(WsMessage::Text(hit.into())).await.unwrap();
        let seen = read_until(&mut framed, |v| v["action"] == "PlayTone").await;

        let kinds: Vec<&str> = seen[..seen.len() - 1]
            .iter()
            .filter_map(|v| v["data"]["event"].as_str())
            .collect();
        assert_eq!(kinds, vec!["DisplayUpdated", "HitPulse", "TargetCleared"]);
        assert_eq!(seen[0]["data"]["score"], 1);
        assert_eq!(seen[1]["data"]["slot"], slot);

        let tone = &seen.last().unwrap()["data"];
        assert_eq!(tone["frequency_hz"], 800.0);
        assert_eq!(tone["duration_ms"], 200);
    }

    #[actix_web::test]
    async fn test_flood_bans_and_closes() {
        let mut srv = test_server(frozen_config());
        let mut framed = srv.ws_at("/ws/game").await.unwrap();

        for _ in 0..=MAX_REQUESTS_PER_SECOND {
            framed.send(WsMessage::Text(r#"{"action":"Ping"}"#.into())).await.unwrap();
        }
        let seen = read_until(&mut framed, |v| v["action"] == "Error").await;
        assert_eq!(seen.last().unwrap()["data"]["code"], BANNED);

        loop {
            let frame = tokio::time::timeout(Duration::from_secs(5), framed.next())
                .await
                .expect("no close frame within 5s");
            match frame {
                Some(Ok(Frame::Close(reason))) => {
                    assert_eq!(reason.map(|r| r.code), Some(CloseCode::Policy));
                    break;
                }
                Some(Ok(_)) => continue,
                other => panic!("socket ended without close frame: {:?}", other),
            }
        }
    }
}
