//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be tested against doubles without any I/O.

use std::sync::Arc;

use crate::domain::ports::CustomerRegistration;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn CustomerRegistration>,
}

impl HttpState {
    pub fn new(registration: Arc<dyn CustomerRegistration>) -> Self {
        Self { registration }
    }
}
