// Runtime configuration read from the environment.
//
// Variables
// - CLUB_SCHEDULE_HOST (default 0.0.0.0)
// - CLUB_SCHEDULE_PORT (default 8080)
// - RUST_LOG           (default info)
//
// A `.env` file, when present, is loaded by the binary before this runs.

use std::net::SocketAddr;

use thiserror::Error;

pub const HOST_VAR: &str = "CLUB_SCHEDULE_HOST";
pub const PORT_VAR: &str = "CLUB_SCHEDULE_PORT";
pub const LOG_VAR: &str = "RUST_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CLUB_SCHEDULE_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("'{0}' is not a valid listen address")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };
        let log_filter = lookup(LOG_VAR).unwrap_or_else(|| "info".to_string());
        Ok(Self {
            host,
            port,
            log_filter,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}
