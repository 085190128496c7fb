//! Domain primitives, services, and ports.
//!
//! Purpose: Define the customer registration model independently of HTTP and
//! SQL. Inbound adapters translate payloads into [`CreateCustomerRequest`]
//! values and outbound adapters implement [`ports::CustomerRepository`].
//!
//! Public surface:
//! - [`Error`]: transport-agnostic failure.
//! - [`CustomerName`] / [`CustomerId`]: validated customer values.
//! - [`RegistrationOutcome`] / [`OperationResult`]: business outcomes and the
//!   result contract built from them.
//! - [`CustomerRegistrar`]: the check-then-insert service.

pub mod customer;
pub mod customer_registrar;
pub mod error;
pub mod ports;
pub mod registration;
pub mod trace_id;

pub use self::customer::{CreateCustomerRequest, CustomerId, CustomerName, CustomerValidationError};
pub use self::customer_registrar::{CustomerRegistrar, DEFAULT_STORE_TIMEOUT};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registration::{OperationResult, RegistrationOutcome, ResultCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
