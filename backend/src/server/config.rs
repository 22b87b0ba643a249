//! HTTP server configuration read from the environment.

use std::env;
use std::net::SocketAddr;

/// Environment variable naming the socket address to bind.
const BIND_ADDR_VAR: &str = "BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Network configuration for the HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when `BIND_ADDR` is set but unparseable.
    pub fn from_env() -> std::io::Result<Self> {
        let raw = env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr = parse_bind_addr(&raw)?;
        Ok(Self { bind_addr })
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn parse_bind_addr(raw: &str) -> std::io::Result<SocketAddr> {
    raw.parse().map_err(|e| {
        std::io::Error::other(format!("invalid {BIND_ADDR_VAR} value {raw:?}: {e}"))
    })
}
