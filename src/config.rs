use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_connect_timeout: Duration,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20)?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 2)?;
        let db_connect_timeout_secs = parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5)?;
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", false)?;

        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: db_min_connections.to_string(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
            db_connect_timeout: Duration::from_secs(db_connect_timeout_secs),
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
