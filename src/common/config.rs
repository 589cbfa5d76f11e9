use std::env;

use thiserror::Error;

use crate::common::{API_URL_DEFAULT, DB_MAX_CONNECTIONS_DEFAULT, OWNER_ID_DEFAULT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Settings shared by the Lambda binaries.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub owner_id: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        let owner_id = lookup("OWNER_ID")
            .filter(|owner| !owner.is_empty())
            .unwrap_or(OWNER_ID_DEFAULT.into());
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DB_MAX_CONNECTIONS",
                    value,
                })?,
            None => DB_MAX_CONNECTIONS_DEFAULT,
        };

        Ok(Self {
            database_url,
            owner_id,
            max_connections,
        })
    }

    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::Missing("DATABASE_URL"))
    }
}

/// Settings for the terminal frontend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub display_name: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: lookup("TODO_API_URL").unwrap_or(API_URL_DEFAULT.into()),
            display_name: lookup("TODO_DISPLAY_NAME").filter(|name| !name.trim().is_empty()),
        }
    }
}
