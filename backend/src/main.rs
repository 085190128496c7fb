//! Service entry point: loads settings, prepares the customer store, and
//! runs the HTTP server.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use customer_registry::inbound::http::health::HealthState;
use customer_registry::outbound::persistence::{DbPool, run_pending_migrations};
use customer_registry::server::{ServerConfig, create_server};
use customer_registry::settings::{AppSettings, ValidatedSettings};

fn load_settings() -> std::io::Result<ValidatedSettings> {
    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    settings
        .validate()
        .map_err(|e| std::io::Error::other(format!("invalid settings: {e}")))
}

async fn attach_store(
    settings: &ValidatedSettings,
    config: ServerConfig,
) -> std::io::Result<ServerConfig> {
    let Some(pool_config) = settings.pool_config() else {
        warn!("no database URL configured; customers are kept in memory");
        return Ok(config);
    };

    if settings.run_migrations {
        run_pending_migrations(pool_config.database_url())
            .await
            .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
    }

    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings()?;
    let config = attach_store(&settings, ServerConfig::from_settings(&settings)).await?;

    info!(bind_addr = %settings.bind_addr, "starting customer registry");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
