//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::DEFAULT_STORE_TIMEOUT;
use crate::outbound::persistence::DbPool;
use crate::settings::ValidatedSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) store_timeout: Duration,
}

impl ServerConfig {
    /// Configuration bound to `bind_addr` with no database and the default
    /// store timeout.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Start from validated settings. The pool is attached separately since
    /// building it is async.
    #[must_use]
    pub fn from_settings(settings: &ValidatedSettings) -> Self {
        Self::new(settings.bind_addr).with_store_timeout(settings.store_timeout)
    }

    /// Back the customer store with PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[must_use]
    pub fn has_db_pool(&self) -> bool {
        self.db_pool.is_some()
    }

    #[must_use]
    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }
}
