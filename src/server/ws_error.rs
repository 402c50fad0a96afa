//! Centralized helpers for WebSocket and HTTP error responses.
//!
//! Every error carries a code, a message and an optional context so clients can
//! handle them uniformly.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

use crate::server::game_session::messages::ServerWsMessage;

pub const INVALID_COMMAND: &str = "INVALID_COMMAND";
pub const INVALID_HOLES: &str = "INVALID_HOLES";
pub const BANNED: &str = "BANNED";
pub const INTERNAL: &str = "INTERNAL";

/// Formats a WebSocket error message as a JSON string.
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    let msg = ServerWsMessage::error(code, message, context);
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        json!({ "action": "Error", "data": { "code": INTERNAL, "message": "Internal server error" } })
            .to_string()
    })
}

/// Returns an HTTP error response with a JSON body.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).content_type("application/json").body(body.to_string())
}
