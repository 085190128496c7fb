//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the customer endpoint, its payload schemas, and the
//! health probes. Swagger UI serves it under `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::customers::{CreateCustomerBody, CreateCustomerResponse, ResponseBase};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer registry API",
        description = "Registers customers by name and reports the outcome as a result code."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::customers::create_customer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CreateCustomerBody, CreateCustomerResponse, ResponseBase)),
    tags(
        (name = "customers", description = "Customer registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
