//! Main entry point for the game server.
//!
//! Initializes logging, configures application state, and launches the HTTP
//! server with the game WebSocket endpoint.

use actix_web::{web, App, HttpServer};
use log::info;

use whack_a_mole::config::server::bind_address;
use whack_a_mole::server::{router, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let state = web::Data::new(AppState::default());
    let addr = bind_address();
    info!("[Main] Listening on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(router::config)
    })
    .bind(addr)?
    .run()
    .await
}
