use crate::error::{AppError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_uri: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Lookup is injectable so tests don't have to mutate process env vars.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mongo_uri = lookup("MONGO_URI")
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| AppError::ConfigError("MONGO_URI is not set".to_string()))?;

        let port = lookup("PORT")
            .map(|raw| {
                raw.parse::<u16>()
                    .map_err(|_| AppError::ConfigError(format!("Invalid PORT: {}", raw)))
            })
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let connect_timeout = lookup("DB_CONNECT_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|_| AppError::ConfigError(format!("Invalid DB_CONNECT_TIMEOUT_SECS: {}", raw)))
            })
            .transpose()?
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        Ok(Config {
            mongo_uri,
            port,
            allowed_origins,
            connect_timeout,
        })
    }

    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}
