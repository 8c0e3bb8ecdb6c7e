use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://ticketing.db";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` defaults to "sqlite://ticketing.db", `LISTEN_ADDR` to
    /// "0.0.0.0:5000". When only `PORT` is set it replaces the default port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let listen_addr: SocketAddr = match (lookup("LISTEN_ADDR"), lookup("PORT")) {
            (Some(addr), _) => addr
                .parse()
                .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?,
            (None, Some(port)) => {
                let port: u16 = port
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PORT", "must be a valid port number"))?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
            (None, None) => DEFAULT_LISTEN_ADDR
                .parse()
                .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            listen_addr,
            database_url,
            cors_allowed_origins,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
