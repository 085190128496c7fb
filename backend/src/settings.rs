//! Application settings loaded via OrthoConfig.
//!
//! Values layer from configuration file, `REGISTRY_*` environment variables,
//! and command-line flags. Settings are loaded and validated once in `main`;
//! nothing downstream reads the environment.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_STORE_TIMEOUT;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Reasons settings are rejected at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("bind address {value:?} is not a socket address")]
    InvalidBindAddr { value: String },
    #[error("database URL must not be empty")]
    EmptyDatabaseUrl,
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

/// Service settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRY")]
pub struct AppSettings {
    /// Listen address, `0.0.0.0:8080` when unset.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Maximum pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Seconds allowed for each store interaction.
    pub store_timeout_secs: Option<u64>,
    /// Skip the embedded migrations normally applied at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

/// Settings after validation, with defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSettings {
    pub bind_addr: SocketAddr,
    pub database_url: Option<String>,
    pub pool_max_size: u32,
    pub pool_connection_timeout: Duration,
    pub store_timeout: Duration,
    pub run_migrations: bool,
}

impl ValidatedSettings {
    /// Pool configuration for the configured database, if any.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_ref().map(|url| {
            PoolConfig::new(url.clone())
                .with_max_size(self.pool_max_size)
                .with_connection_timeout(self.pool_connection_timeout)
        })
    }
}

fn positive_secs(
    value: Option<u64>,
    default: Duration,
    field: &'static str,
) -> Result<Duration, SettingsError> {
    match value {
        None => Ok(default),
        Some(0) => Err(SettingsError::NotPositive { field }),
        Some(secs) => Ok(Duration::from_secs(secs)),
    }
}

impl AppSettings {
    /// Resolve defaults and check every value.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] naming the first offending value.
    pub fn validate(&self) -> Result<ValidatedSettings, SettingsError> {
        let raw_addr = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidBindAddr {
                value: raw_addr.to_owned(),
            })?;

        let database_url = match self.database_url.as_deref().map(str::trim) {
            Some("") => return Err(SettingsError::EmptyDatabaseUrl),
            Some(url) => Some(url.to_owned()),
            None => None,
        };

        let pool_max_size = match self.pool_max_size {
            Some(0) => {
                return Err(SettingsError::NotPositive {
                    field: "pool_max_size",
                });
            }
            Some(size) => size,
            None => DEFAULT_POOL_MAX_SIZE,
        };

        Ok(ValidatedSettings {
            bind_addr,
            database_url,
            pool_max_size,
            pool_connection_timeout: positive_secs(
                self.pool_connection_timeout_secs,
                Duration::from_secs(DEFAULT_POOL_CONNECTION_TIMEOUT_SECS),
                "pool_connection_timeout_secs",
            )?,
            store_timeout: positive_secs(
                self.store_timeout_secs,
                DEFAULT_STORE_TIMEOUT,
                "store_timeout_secs",
            )?,
            run_migrations: !self.skip_migrations,
        })
    }
}
