//! Customer registry service library.
//!
//! Layout follows a hexagonal split: [`domain`] holds the registration model
//! and ports, [`inbound`] the HTTP adapter, [`outbound`] the store adapters,
//! and [`server`] the wiring used by the binary and integration tests.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
