//! Server configuration

use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP bind host
    pub http_host: String,
    /// HTTP port
    pub http_port: u16,
    /// Upper bound on pooled database connections
    pub db_max_connections: u32,
    /// How long a request waits for a pooled connection
    pub db_acquire_timeout: Duration,
    /// Apply SQL migrations at startup
    pub run_migrations: bool,
    /// Environment: development | staging | production
    pub environment: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: var("DATABASE_URL").ok_or("DATABASE_URL must be set")?,
            http_host: var("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: parse_or("HTTP_PORT", var("HTTP_PORT"), 4242)?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 10)?,
            db_acquire_timeout: Duration::from_secs(parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                var("DB_ACQUIRE_TIMEOUT_SECS"),
                5,
            )?),
            run_migrations: parse_or("RUN_MIGRATIONS", var("RUN_MIGRATIONS"), true)?,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_format: match var("LOG_FORMAT").as_deref() {
                None | Some("text") => LogFormat::Text,
                Some("json") => LogFormat::Json,
                Some(other) => {
                    return Err(format!("LOG_FORMAT must be text or json, got {other:?}").into());
                }
            },
        })
    }

    /// Socket address string for the HTTP listener
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> Result<T, BoxError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|e| format!("{name} is invalid ({v:?}): {e}").into()),
    }
}
