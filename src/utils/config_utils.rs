use chrono::Duration;
use std::net::SocketAddr;
use thiserror::Error;

use crate::services::appointment_service::DEFAULT_APPOINTMENT_MINUTES;

pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const DURATION_VAR: &str = "APPOINTMENT_DURATION_MINUTES";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of minutes, got {value}")]
    InvalidDuration { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub appointment_duration: Duration,
}

impl AppConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { var: BIND_ADDR_VAR, value })?,
            None => default_bind_addr(),
        };

        let appointment_duration = match lookup(DURATION_VAR) {
            Some(value) => {
                let parsed = value
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|m| *m > 0)
                    .and_then(Duration::try_minutes);
                parsed.ok_or(ConfigError::InvalidDuration { var: DURATION_VAR, value })?
            }
            None => Duration::minutes(DEFAULT_APPOINTMENT_MINUTES),
        };

        Ok(AppConfig {
            bind_addr,
            appointment_duration,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: default_bind_addr(),
            appointment_duration: Duration::minutes(DEFAULT_APPOINTMENT_MINUTES),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
