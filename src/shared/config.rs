// src/shared/config.rs

use std::env;
use std::time::Duration;

const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// How long the site portfolio snapshot is served before a reload.
    pub portfolio_cache_ttl: Duration,
    /// externalId of the portfolio served at `/api/portfolio`; the oldest
    /// portfolio when unset.
    pub site_portfolio_external_id: Option<String>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{}", rust_env)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let port_raw = required("PORT")?;
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;

        let ttl_secs = match lookup("PORTFOLIO_CACHE_TTL_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "PORTFOLIO_CACHE_TTL_SECS",
                value: raw,
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };

        let site_portfolio_external_id = lookup("SITE_PORTFOLIO_EXTERNAL_ID")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port,
            portfolio_cache_ttl: Duration::from_secs(ttl_secs),
            site_portfolio_external_id,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
