// src/config.rs
use std::{env, fmt, net::IpAddr};

use tracing::{info, warn};

pub const DEFAULT_DB_NAME: &str = "carCollection";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} must be set"),
            ConfigError::Invalid { key, value } => write!(f, "invalid {key} value: {value}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub database_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_name", &self.database_name)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_uri = non_empty("URI")
            .or_else(|| non_empty("DATABASE_URL"))
            .ok_or(ConfigError::Missing("URI"))?;

        let jwt_secret = non_empty("ACCESS_WEB_TOKEN")
            .or_else(|| non_empty("JWT_SECRET"))
            .ok_or(ConfigError::Missing("ACCESS_WEB_TOKEN"))?;

        let database_name = non_empty("DB_NAME").unwrap_or_else(|| {
            info!("DB_NAME not set, using default: {DEFAULT_DB_NAME}");
            DEFAULT_DB_NAME.to_string()
        });

        let host: IpAddr = match non_empty("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "HOST", value })?,
            None => DEFAULT_HOST.parse().map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value: DEFAULT_HOST.to_string(),
            })?,
        };

        let port = match non_empty("PORT") {
            Some(value) => value.parse().map_err(|_| {
                warn!("Invalid PORT value: {value}");
                ConfigError::Invalid { key: "PORT", value }
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_uri,
            database_name,
            jwt_secret,
            host,
            port,
        })
    }
}
