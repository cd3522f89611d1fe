use std::time::Duration;

use anyhow::{Context, Result};

use crate::middleware::rate_limit::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WINDOW, RateLimitConfig};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            rate_limit: RateLimitConfig {
                max_attempts: optional_var("AUTH_RATE_LIMIT_MAX_ATTEMPTS")
                    .context("AUTH_RATE_LIMIT_MAX_ATTEMPTS must be a number")?
                    .unwrap_or(DEFAULT_MAX_ATTEMPTS),
                window: optional_var("AUTH_RATE_LIMIT_WINDOW_SECS")
                    .context("AUTH_RATE_LIMIT_WINDOW_SECS must be a number")?
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_WINDOW),
            },
        })
    }
}

fn optional_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => Ok(Some(value.parse()?)),
        Err(_) => Ok(None),
    }
}
