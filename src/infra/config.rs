//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8090;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// HTTP listen port (`PORT`, default 8090).
pub fn port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got {:?}", v)),
        _ => Ok(DEFAULT_PORT),
    }
}

/// Interface to bind (`BIND_HOST`, default all interfaces).
pub fn bind_host() -> String {
    std::env::var("BIND_HOST")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_HOST.to_string())
}

/// Artificial classification delay (`S_DELAY`, in seconds, default 0).
///
/// Anything that is not a finite, positive number means no delay.
pub fn classification_delay() -> Duration {
    std::env::var("S_DELAY")
        .ok()
        .and_then(|v| parse_delay_secs(&v))
        .unwrap_or(Duration::ZERO)
}

fn parse_delay_secs(raw: &str) -> Option<Duration> {
    let secs = raw.trim().parse::<f64>().ok()?;
    if secs.is_finite() && secs > 0.0 {
        Duration::try_from_secs_f64(secs).ok()
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub classification_delay: Duration,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: bind_host(),
            port: port()?,
            classification_delay: classification_delay(),
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
