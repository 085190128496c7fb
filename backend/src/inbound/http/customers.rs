//! Customer registration endpoint.
//!
//! ```text
//! POST /api/v1/customers {"name":"Acme"}
//! ```
//!
//! Every outcome the registrar reports (added, duplicate, insert refused) is
//! a `200 OK` carrying the result contract. Only a rejected name (400) or an
//! unexpected fault (500) changes the status code. The body is decoded as
//! JSON whatever its `Content-Type`; a body that does not decode is a fault,
//! not a rejected name.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CreateCustomerRequest, CustomerValidationError, Error, OperationResult};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Client-facing message for a null body or a missing or blank name.
pub const NAME_REQUIRED: &str = "name is required";

/// Request body for `POST /api/v1/customers`.
///
/// `nombre` is accepted as an alias so clients can send back the field name
/// they receive.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateCustomerBody {
    #[serde(default, alias = "nombre")]
    #[schema(example = "Acme")]
    pub name: Option<String>,
}

/// Result code and message pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBase {
    pub cod_error: i32,
    pub mensaje: String,
}

/// Response body for `POST /api/v1/customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerResponse {
    pub response_base: ResponseBase,
    /// New identifier, `0` unless the customer was added.
    pub cliente_id: i64,
    pub nombre: String,
}

impl From<OperationResult> for CreateCustomerResponse {
    fn from(result: OperationResult) -> Self {
        Self {
            response_base: ResponseBase {
                cod_error: result.error_code().as_i32(),
                mensaje: result.message().to_owned(),
            },
            cliente_id: result.customer_id(),
            nombre: result.name().to_string(),
        }
    }
}

fn map_validation_error(err: CustomerValidationError) -> Error {
    match err {
        CustomerValidationError::EmptyName => Error::invalid_request(NAME_REQUIRED),
    }
}

/// Decode the raw body into a validated request.
///
/// A JSON `null` body and a missing, `null` or blank name are client errors.
/// Anything `serde_json` cannot decode is an internal fault whose detail is
/// logged by the error responder and never returned.
fn decode_request(body: &[u8]) -> Result<CreateCustomerRequest, Error> {
    let payload: Option<CreateCustomerBody> = serde_json::from_slice(body)
        .map_err(|err| Error::internal(format!("malformed customer payload: {err}")))?;
    let payload = payload.ok_or_else(|| Error::invalid_request(NAME_REQUIRED))?;
    CreateCustomerRequest::try_from_raw(payload.name).map_err(map_validation_error)
}

/// Register a customer by name.
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    request_body = CreateCustomerBody,
    responses(
        (status = 200, description = "Registration outcome", body = CreateCustomerResponse),
        (status = 400, description = "Missing or empty name", body = String, content_type = "text/plain"),
        (status = 500, description = "Undecodable body or internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["customers"],
    operation_id = "createCustomer"
)]
#[post("/customers")]
pub async fn create_customer(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<CreateCustomerResponse>> {
    let request = decode_request(&body)?;
    let name = request.name().clone();
    let outcome = state.registration.register(request).await?;
    Ok(web::Json(OperationResult::new(name, outcome).into()))
}
