//! Builders wiring the customer store into HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use crate::domain::CustomerRegistrar;
use crate::domain::ports::{CustomerRegistration, CustomerRepository};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryCustomerRepository;
use crate::outbound::persistence::DieselCustomerRepository;

use super::ServerConfig;

fn registrar<R>(repository: R, config: &ServerConfig) -> Arc<dyn CustomerRegistration>
where
    R: CustomerRepository + 'static,
{
    Arc::new(
        CustomerRegistrar::new(Arc::new(repository)).with_store_timeout(config.store_timeout),
    )
}

/// Build HTTP state using PostgreSQL when a pool is configured, otherwise an
/// in-memory store that lives as long as the server.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let registration = match &config.db_pool {
        Some(pool) => {
            info!("customer store: postgres");
            registrar(DieselCustomerRepository::new(pool.clone()), config)
        }
        None => {
            info!("customer store: in-memory");
            registrar(InMemoryCustomerRepository::new(), config)
        }
    };
    web::Data::new(HttpState::new(registration))
}
