//! HTTP and WebSocket routing configuration.
//!
//! Each game connection is handled by its own WebSocket actor, which owns the
//! game session for the lifetime of the socket.

use actix_web::{web, HttpResponse};
use crate::server::game_session::session::ws_game;

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_game)
    )
    .service(
        web::resource("/health")
            .route(web::get().to(health))
    );
}
