//! Game session actor.
//!
//! Drives one `GameEngine` with two independent scheduled tasks: the
//! countdown interval and the chained spawn timeout. Both handles are
//! cancelled inside the same handler that moves the engine out of Running,
//! so a stale tick or spawn can never reach a finished or reset round.

use actix::prelude::*;
use log::{debug, info};
use uuid::Uuid;

use crate::config::game::GameConfig;
use crate::game::audio::{play_best_effort, HitSound};
use crate::game::{GameEngine, GameEvent};
use crate::server::game_session::messages::{
    ClientAction, GetSnapshot, ProcessClientMessage, ServerWsMessage, Shutdown, Snapshot,
};

pub struct GameSession {
    pub game_id: Uuid,
    engine: GameEngine,
    observer: Recipient<ServerWsMessage>,
    sound: Box<dyn HitSound>,

    tick_timer: Option<SpawnHandle>,
    spawn_timer: Option<SpawnHandle>,
    play_again_timer: Option<SpawnHandle>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!(
            "[GameSession] Session {} ready ({} slots)",
            self.game_id,
            self.engine.config().slot_count
        );
        self.dispatch(vec![
            GameEvent::StateChanged { state: self.engine.state() },
            self.engine.display(),
        ]);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        debug!("[GameSession] Session {} stopped", self.game_id);
    }
}

impl GameSession {
    pub fn new(config: GameConfig, observer: Recipient<ServerWsMessage>, sound: Box<dyn HitSound>) -> Self {
        Self::with_engine(GameEngine::new(config), observer, sound)
    }

    pub fn with_engine(
        engine: GameEngine,
        observer: Recipient<ServerWsMessage>,
        sound: Box<dyn HitSound>,
    ) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            engine,
            observer,
            sound,
            tick_timer: None,
            spawn_timer: None,
            play_again_timer: None,
        }
    }

    /// Send engine events to the presentation layer, in order.
    fn dispatch(&self, events: Vec<GameEvent>) {
        for event in events {
            self.observer.do_send(ServerWsMessage::Event(event));
        }
    }

    fn start(&mut self, ctx: &mut Context<Self>) {
        self.cancel_play_again(ctx);
        let events = self.engine.start();
        if events.is_empty() {
            return;
        }
        let interval = self.engine.config().tick_interval;
        self.tick_timer = Some(ctx.run_interval(interval, |act, ctx| act.tick(ctx)));
        self.arm_spawn(ctx);
        self.dispatch(events);
    }

    fn tick(&mut self, ctx: &mut Context<Self>) {
        let events = self.engine.tick();
        self.sync_timers(ctx);
        self.dispatch(events);
    }

    fn spawn(&mut self, ctx: &mut Context<Self>) {
        self.spawn_timer = None;
        let events = self.engine.spawn_target();
        if self.engine.is_running() {
            self.arm_spawn(ctx);
        }
        self.dispatch(events);
    }

    /// Schedule the next spawn one interval from now.
    fn arm_spawn(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.spawn_timer.take() {
            ctx.cancel_future(handle);
        }
        let delay = self.engine.config().spawn_interval;
        self.spawn_timer = Some(ctx.run_later(delay, |act, ctx| act.spawn(ctx)));
    }

    fn hit(&mut self, slot: usize) {
        let events = self.engine.hit(slot);
        if events.is_empty() {
            return;
        }
        self.dispatch(events);
        play_best_effort(&mut *self.sound);
    }

    fn end(&mut self, ctx: &mut Context<Self>) {
        let events = self.engine.end();
        self.sync_timers(ctx);
        self.dispatch(events);
    }

    fn reset(&mut self, ctx: &mut Context<Self>) {
        self.cancel_play_again(ctx);
        let events = self.engine.reset();
        self.sync_timers(ctx);
        self.dispatch(events);
    }

    fn play_again(&mut self, ctx: &mut Context<Self>) {
        self.reset(ctx);
        let delay = self.engine.config().play_again_delay;
        self.play_again_timer = Some(ctx.run_later(delay, |act, ctx| {
            act.play_again_timer = None;
            act.start(ctx);
        }));
    }

    /// Cancel the round timers once the engine has left Running.
    fn sync_timers(&mut self, ctx: &mut Context<Self>) {
        if self.engine.is_running() {
            return;
        }
        if let Some(handle) = self.tick_timer.take() {
            ctx.cancel_future(handle);
        }
        if let Some(handle) = self.spawn_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    fn cancel_play_again(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.play_again_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    fn snapshot(&self) -> Snapshot {
        let session = self.engine.session();
        Snapshot {
            state: self.engine.state(),
            score: session.score,
            time_left: session.time_left,
            active_target: session.active_target,
            slot_count: self.engine.config().slot_count,
        }
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        debug!("[GameSession] {} <- {:?}", self.game_id, msg.msg);
        match msg.msg {
            ClientAction::Start => self.start(ctx),
            ClientAction::Stop => self.end(ctx),
            ClientAction::Reset => self.reset(ctx),
            ClientAction::PlayAgain => self.play_again(ctx),
            ClientAction::Hit { slot } => self.hit(slot),
            ClientAction::Ping => {}
        }
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.snapshot())
    }
}

impl Handler<Shutdown> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Shutdown, ctx: &mut Context<Self>) -> Self::Result {
        self.cancel_play_again(ctx);
        self.engine.reset();
        self.sync_timers(ctx);
        ctx.stop();
    }
}
