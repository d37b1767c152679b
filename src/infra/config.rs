//! Centralized configuration (environment variables + defaults).

use crate::infra::music_info::LOOKUP_TIMEOUT;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
/// Must stay above `LOOKUP_TIMEOUT` so a hung lookup surfaces as a lookup error.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Prod,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => Err(format!("expected local, dev or prod, got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    pub server_address: String,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Base URL of the music-info service (`GET <base>/info?group=&song=`).
    pub music_server: String,
    /// Upper bound for handling a single inbound request.
    pub timeout: Duration,
}

impl Config {
    /// Loads `.env.local` and `.env` (if present), then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::from_filename(".env.local").ok();
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = match get("ENV") {
            Some(v) => v.parse::<Environment>().map_err(|reason| ConfigError::Invalid {
                name: "ENV",
                value: v,
                reason,
            })?,
            None => Environment::default(),
        };

        let database_url = get("DATABASE_URL")
            .or_else(|| get("POSTGRES_CONN"))
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let music_server = get("MUSIC_SERVER")
            .map(|v| v.trim_end_matches('/').to_string())
            .ok_or(ConfigError::Missing("MUSIC_SERVER"))?;

        let timeout = match get("TIMEOUT") {
            Some(v) => {
                let timeout = parse_duration(&v).map_err(|reason| ConfigError::Invalid {
                    name: "TIMEOUT",
                    value: v.clone(),
                    reason,
                })?;
                if timeout <= LOOKUP_TIMEOUT {
                    return Err(ConfigError::Invalid {
                        name: "TIMEOUT",
                        value: v,
                        reason: format!(
                            "must be longer than the {}s music info lookup timeout",
                            LOOKUP_TIMEOUT.as_secs()
                        ),
                    });
                }
                timeout
            }
            None => DEFAULT_TIMEOUT,
        };

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::Invalid {
                    name: "DB_MAX_CONNECTIONS",
                    value: v.clone(),
                    reason: e.to_string(),
                })?
                .max(1),
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            env,
            server_address: get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            database_url,
            db_max_connections,
            music_server,
            timeout,
        })
    }
}

/// Accepts `"10"` (seconds), `"10s"`, `"1500ms"` or `"2m"`.
pub fn parse_duration(raw: &str) -> Result<Duration, String> {
    let s = raw.trim();
    let (digits, unit) = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => s.split_at(idx),
        None => (s, "s"),
    };
    let n: u64 = digits
        .parse()
        .map_err(|_| format!("expected a number with optional unit, got '{}'", raw))?;
    match unit {
        "ms" => Ok(Duration::from_millis(n)),
        "s" => Ok(Duration::from_secs(n)),
        "m" => n
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("'{}' is too large", raw)),
        other => Err(format!("unknown unit '{}'", other)),
    }
}
