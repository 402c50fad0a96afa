//! Server configuration.
//!
//! The bind address defaults to `DEFAULT_BIND_ADDR` and can be overridden with
//! the `WHACK_BIND_ADDR` environment variable (`host:port`).
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Environment variable overriding the bind address.
pub const BIND_ADDR_ENV: &str = "WHACK_BIND_ADDR";

pub fn bind_address() -> String {
    env::var(BIND_ADDR_ENV)
        .ok()
        .filter(|addr| !addr.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}
