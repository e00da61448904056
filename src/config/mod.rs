//! Configuration
//!
//! `ConfigService` holds a snapshot of the process environment (after `.env`
//! has been loaded) and can be overridden programmatically. `ServerConfig`
//! is the typed view the binary boots from.

use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use strum_macros::{Display, EnumString};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./users.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_INIT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Key/value configuration store
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Snapshot of the current process environment
    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Parse `key` into `T`, falling back to `default` when it is unset
    fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::invalid(key, &raw, e)),
            None => Ok(default),
        }
    }
}

/// Which endpoint groups the process serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Variant {
    /// In-memory store under `/dijkstra/users/`
    Ephemeral,
    /// Relational store under `/users/` plus the landing page
    Persistent,
    #[default]
    Combined,
}

impl Variant {
    pub fn serves_ephemeral(self) -> bool {
        matches!(self, Variant::Ephemeral | Variant::Combined)
    }

    pub fn serves_persistent(self) -> bool {
        matches!(self, Variant::Persistent | Variant::Combined)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    /// Log every SQL statement
    pub echo: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            echo: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub variant: Variant,
    pub init_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DatabaseSettings::default(),
            variant: Variant::default(),
            init_timeout: Duration::from_secs(DEFAULT_INIT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_service(config: &ConfigService) -> Result<Self, ConfigError> {
        let port: u16 = config.parse_or("PORT", DEFAULT_PORT)?;
        if port == 0 {
            return Err(ConfigError::invalid("PORT", "0", "port must be non-zero"));
        }

        let max_connections: u32 =
            config.parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::invalid(
                "DATABASE_MAX_CONNECTIONS",
                "0",
                "pool needs at least one connection",
            ));
        }

        let init_timeout_secs: u64 =
            config.parse_or("INIT_TIMEOUT_SECS", DEFAULT_INIT_TIMEOUT_SECS)?;

        Ok(Self {
            host: config
                .get("HOST")
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database: DatabaseSettings {
                url: config
                    .get("DATABASE_URL")
                    .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                max_connections,
                echo: config.parse_or("DATABASE_ECHO", false)?,
            },
            variant: config.parse_or("USERHUB_VARIANT", Variant::default())?,
            init_timeout: Duration::from_secs(init_timeout_secs),
        })
    }

    /// `host:port`, resolved by the listener at bind time
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
